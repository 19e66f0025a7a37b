use chrono::NaiveDate;

use gala_terminal::filters::{
    CategoryField, DateWindow, EntityFilter, FlagField, MetricField, PlayerView, SortKey,
    compare_names, filter_and_sort, filter_entities, fixtures_for_sport, live_matches,
    match_board, player_view, star_rating, team_matches, top_scorers,
};
use gala_terminal::models::Player;
use gala_terminal::seed::seed_app_data;

fn player(id: &str, name: &str, goals: u32, mvp_votes: u32, fan_favorite: bool) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        photo: String::new(),
        team: "Thunder Hawks".to_string(),
        team_id: "1".to_string(),
        league_id: "lira-gala".to_string(),
        position: "Forward".to_string(),
        goals,
        assists: 0,
        mvp_votes,
        is_fan_favorite: fan_favorite,
        bio: String::new(),
        rating: 7.0,
        rank_position: 0,
    }
}

fn sample() -> Vec<Player> {
    vec![
        player("1", "Amos", 3, 4, true),
        player("2", "Bea", 9, 1, false),
        player("3", "Cato", 1, 9, true),
        player("4", "Dina", 6, 2, false),
        player("5", "Eli", 2, 7, true),
    ]
}

fn ids(players: &[&Player]) -> Vec<String> {
    players.iter().map(|p| p.id.clone()).collect()
}

fn gala_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
}

#[test]
fn fan_favorite_flag_keeps_relative_order() {
    let players = sample();
    let filter = EntityFilter::new().flag(FlagField::FanFavorite, true);
    let out = filter_entities(&players, &filter);
    assert_eq!(ids(&out), vec!["1", "3", "5"]);
}

#[test]
fn tied_goals_keep_input_order_when_sorted() {
    let players = vec![
        player("7", "Zed", 4, 0, false),
        player("2", "Ann", 8, 0, false),
        player("9", "Kit", 4, 0, false),
        player("1", "Bo", 4, 0, false),
    ];
    let out = filter_and_sort(
        &players,
        &EntityFilter::new(),
        SortKey::Descending(MetricField::Goals),
    );
    assert_eq!(ids(&out), vec!["2", "7", "9", "1"]);

    let mut reordered = players.clone();
    reordered.swap(0, 3);
    let out = filter_and_sort(
        &reordered,
        &EntityFilter::new(),
        SortKey::Descending(MetricField::Goals),
    );
    assert_eq!(ids(&out), vec!["2", "1", "9", "7"]);
}

#[test]
fn fan_favorite_view_orders_by_mvp_votes() {
    let players = sample();
    let out = player_view(&players, PlayerView::FanFavorites);
    assert_eq!(ids(&out), vec!["3", "5", "1"]);
}

#[test]
fn top_scorer_view_applies_threshold() {
    let players = sample();
    let out = player_view(&players, PlayerView::TopScorers);
    assert_eq!(ids(&out), vec!["2", "4"]);

    let data = seed_app_data().unwrap();
    let seeded = player_view(data.players_by_league("lira-gala"), PlayerView::TopScorers);
    // Exactly five goals still qualifies.
    assert_eq!(ids(&seeded), vec!["4", "5", "3", "1", "2"]);
}

#[test]
fn all_view_orders_by_goals() {
    let players = sample();
    let out = player_view(&players, PlayerView::All);
    assert_eq!(ids(&out), vec!["2", "4", "1", "5", "3"]);
    assert_eq!(ids(&top_scorers(&players, 3)), vec!["2", "4", "1"]);
}

#[test]
fn text_search_is_case_insensitive_substring() {
    let players = sample();
    let out = filter_entities(&players, &EntityFilter::new().search("  ATO "));
    assert_eq!(ids(&out), vec!["3"]);

    let by_team = filter_entities(&players, &EntityFilter::new().search("hawks"));
    assert_eq!(by_team.len(), 5);

    let blank = filter_entities(&players, &EntityFilter::new().search("   "));
    assert_eq!(blank.len(), 5);
}

#[test]
fn predicates_combine_with_and() {
    let players = sample();
    let filter = EntityFilter::new()
        .flag(FlagField::FanFavorite, true)
        .at_least(MetricField::Goals, 2.0)
        .category(CategoryField::League, "lira-gala");
    let out = filter_entities(&players, &filter);
    assert_eq!(ids(&out), vec!["1", "5"]);
}

#[test]
fn missing_fields_never_match() {
    let data = seed_app_data().unwrap();
    // Players carry no sport, so a sport predicate excludes all of them.
    let filter = EntityFilter::new().category(CategoryField::Sport, "Football");
    assert!(filter_entities(data.players(), &filter).is_empty());

    let all = EntityFilter::new().category(CategoryField::Sport, "all");
    assert_eq!(filter_entities(data.players(), &all).len(), data.players().len());
}

#[test]
fn unknown_category_value_is_empty_not_error() {
    let data = seed_app_data().unwrap();
    let filter = EntityFilter::new().category(CategoryField::Sport, "Underwater Hockey");
    assert!(filter_entities(data.teams(), &filter).is_empty());
    assert!(fixtures_for_sport(data.matches(), Some("Underwater Hockey"), 8).is_empty());
}

#[test]
fn name_sort_folds_case() {
    let mut players = sample();
    players[0].name = "cato".to_string();
    players[2].name = "Cato".to_string();
    let out = filter_and_sort(&players, &EntityFilter::new(), SortKey::NameAscending);
    let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bea", "Cato", "cato", "Dina", "Eli"]);
    assert_eq!(compare_names("alex", "Bob"), std::cmp::Ordering::Less);
}

#[test]
fn home_fixtures_are_capped_and_filtered() {
    let data = seed_app_data().unwrap();
    let league = data.matches_by_league("lira-gala");
    assert_eq!(fixtures_for_sport(league.iter().copied(), None, 8).len(), 7);
    assert_eq!(fixtures_for_sport(league.iter().copied(), None, 3).len(), 3);

    let football: Vec<&str> = fixtures_for_sport(league.iter().copied(), Some("football"), 8)
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(football, vec!["1", "6"]);

    let live: Vec<&str> = live_matches(league).iter().map(|m| m.id.as_str()).collect();
    assert_eq!(live, vec!["1", "2", "3", "4"]);
}

#[test]
fn team_matches_cover_home_and_away() {
    let data = seed_app_data().unwrap();
    let ids: Vec<&str> = team_matches(data.matches(), "1")
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "6"]);
}

#[test]
fn date_windows_are_inclusive() {
    let today = gala_day();
    assert!(DateWindow::Today.contains("2025-06-14", today));
    assert!(!DateWindow::Today.contains("2025-06-13", today));
    assert!(DateWindow::Week.contains("2025-06-08", today));
    assert!(!DateWindow::Week.contains("2025-06-07", today));
    assert!(DateWindow::Month.contains("2025-05-16", today));
    assert!(DateWindow::Week.contains("2025-06-20", today));
    assert!(!DateWindow::Week.contains("not a date", today));
    assert!(DateWindow::All.contains("not a date", today));
}

#[test]
fn match_board_groups_by_status() {
    let data = seed_app_data().unwrap();
    let board = match_board(data.matches(), "lira-gala", None, DateWindow::Today, gala_day());
    let live: Vec<&str> = board.live.iter().map(|m| m.id.as_str()).collect();
    let upcoming: Vec<&str> = board.upcoming.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(live, vec!["1", "2", "3", "4"]);
    assert!(board.completed.is_empty());
    assert_eq!(upcoming, vec!["5", "6"]);

    let week = match_board(data.matches(), "lira-gala", None, DateWindow::Week, gala_day());
    assert_eq!(week.completed.len(), 1);
    assert_eq!(week.completed[0].id, "7");
}

#[test]
fn match_board_drops_postponed_and_respects_sport() {
    let data = seed_app_data().unwrap();
    let board = match_board(
        data.matches(),
        "city-corporate-cup",
        None,
        DateWindow::All,
        gala_day(),
    );
    assert_eq!(board.completed.len(), 1);
    assert!(board.live.is_empty());
    assert!(board.upcoming.is_empty());

    let netball = match_board(
        data.matches(),
        "lira-gala",
        Some("Netball"),
        DateWindow::All,
        gala_day(),
    );
    assert_eq!(netball.live.len(), 1);
    assert_eq!(netball.completed.len(), 1);

    let nothing = match_board(data.matches(), "lira-gala", Some("Chess"), DateWindow::All, gala_day());
    assert!(nothing.is_empty());
}

#[test]
fn star_rating_is_clamped() {
    let mut p = player("9", "Star", 40, 100, false);
    assert_eq!(star_rating(&p), 5);
    p.goals = 0;
    p.mvp_votes = 0;
    assert_eq!(star_rating(&p), 0);
}
