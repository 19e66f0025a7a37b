use gala_terminal::models::{Sport, Team};
use gala_terminal::seed::seed_app_data;
use gala_terminal::standings::{
    compute_standings, podium, sport_matches, sports_in, standings_table, table_summary,
};

fn team(id: &str, sport: Sport, points: u32, goals_for: u32, goals_against: u32) -> Team {
    Team {
        id: id.to_string(),
        name: format!("Team {id}"),
        logo: String::new(),
        color: String::new(),
        sport,
        league_id: "lira-gala".to_string(),
        wins: 0,
        draws: 0,
        losses: 0,
        goals_for,
        goals_against,
        points,
        roster: Vec::new(),
        rating: 5.0,
        rank_position: 0,
    }
}

fn ids(teams: &[&Team]) -> Vec<String> {
    teams.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn goal_difference_breaks_points_tie() {
    let teams = vec![
        team("A", Sport::Football, 13, 12, 3),
        team("B", Sport::Football, 11, 10, 4),
        team("C", Sport::Football, 13, 10, 2),
    ];
    let out = compute_standings(&teams, None);
    assert_eq!(ids(&out), vec!["A", "C", "B"]);
}

#[test]
fn goals_for_breaks_goal_difference_tie() {
    let teams = vec![
        team("low", Sport::Netball, 10, 50, 40),
        team("high", Sport::Netball, 10, 80, 70),
    ];
    let out = compute_standings(&teams, Some("Netball"));
    assert_eq!(ids(&out), vec!["high", "low"]);
}

#[test]
fn full_ties_keep_input_order() {
    let teams = vec![
        team("x", Sport::Aerobics, 4, 9, 9),
        team("y", Sport::Aerobics, 4, 9, 9),
        team("z", Sport::Aerobics, 4, 9, 9),
    ];
    let out = compute_standings(&teams, None);
    assert_eq!(ids(&out), vec!["x", "y", "z"]);
}

#[test]
fn sport_filter_keeps_exactly_that_sport() {
    let data = seed_app_data().unwrap();
    let league = data.teams_by_league("lira-gala");

    let all = compute_standings(league.iter().copied(), Some("all"));
    assert_eq!(all.len(), league.len());
    assert_eq!(compute_standings(league.iter().copied(), None).len(), league.len());

    let volleyball = compute_standings(league.iter().copied(), Some("volleyball"));
    assert_eq!(ids(&volleyball), vec!["3", "4"]);
    assert!(volleyball.iter().all(|t| t.sport == Sport::Volleyball));

    let tug = compute_standings(league.iter().copied(), Some("Tug of War"));
    assert_eq!(ids(&tug), vec!["7", "8"]);
}

#[test]
fn unknown_sport_yields_empty_table() {
    let data = seed_app_data().unwrap();
    let out = compute_standings(data.teams(), Some("Cricket"));
    assert!(out.is_empty());
    assert!(standings_table(data.teams(), Some("Cricket")).is_empty());
    assert!(!sport_matches(Sport::Football, Some("Cricket")));
    assert!(sport_matches(Sport::Football, Some(" ALL ")));
}

#[test]
fn seeded_league_order_respects_tiebreaks() {
    let data = seed_app_data().unwrap();
    let out = compute_standings(data.teams_by_league("lira-gala"), None);
    assert_eq!(
        ids(&out),
        vec!["7", "1", "5", "9", "2", "3", "6", "10", "8", "4"]
    );

    for pair in out.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let ok = a.points > b.points
            || (a.points == b.points && a.goal_difference() > b.goal_difference())
            || (a.points == b.points
                && a.goal_difference() == b.goal_difference()
                && a.goals_for >= b.goals_for);
        assert!(ok, "{} should not precede {}", a.id, b.id);
    }
}

#[test]
fn standings_are_a_pure_function() {
    let data = seed_app_data().unwrap();
    let first = ids(&compute_standings(data.teams(), Some("Football")));
    let second = ids(&compute_standings(data.teams(), Some("Football")));
    assert_eq!(first, second);
}

#[test]
fn points_are_taken_as_stored() {
    // Three wins would be nine points, but the stored total wins.
    let mut odd = team("odd", Sport::Football, 1, 0, 0);
    odd.wins = 3;
    let normal = team("normal", Sport::Football, 2, 0, 0);
    let teams = vec![odd, normal];
    let out = compute_standings(&teams, None);
    assert_eq!(ids(&out), vec!["normal", "odd"]);
}

#[test]
fn table_rows_carry_positions_and_derived_columns() {
    let data = seed_app_data().unwrap();
    let rows = standings_table(data.teams_by_league("lira-gala"), Some("Football"));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].team.id, "1");
    assert_eq!(rows[0].played, 5);
    assert_eq!(rows[0].goal_difference, 9);
    assert_eq!(rows[0].win_percentage, 80);
    assert_eq!(rows[1].position, 2);

    assert_eq!(podium(&rows).len(), 2);
    let full = standings_table(data.teams_by_league("lira-gala"), None);
    assert_eq!(podium(&full).len(), 3);
}

#[test]
fn empty_league_is_handled() {
    let data = seed_app_data().unwrap();
    let teams = data.teams_by_league("no-such-league");
    assert!(standings_table(teams.iter().copied(), None).is_empty());
    assert!(podium(&[]).is_empty());
    assert!(sports_in(teams.iter().copied()).is_empty());
    assert_eq!(table_summary(teams).team_count, 0);
}

#[test]
fn sports_are_listed_in_first_seen_order() {
    let data = seed_app_data().unwrap();
    assert_eq!(
        sports_in(data.teams_by_league("lira-gala")),
        vec![
            Sport::Football,
            Sport::Volleyball,
            Sport::Netball,
            Sport::TugOfWar,
            Sport::Aerobics
        ]
    );
    assert_eq!(
        sports_in(data.teams_by_league("city-corporate-cup")),
        vec![Sport::Football, Sport::Volleyball]
    );
}

#[test]
fn summary_totals_goals_and_games() {
    let data = seed_app_data().unwrap();
    let summary = table_summary(data.teams_by_league("tech-park-games"));
    assert_eq!(summary.team_count, 2);
    assert_eq!(summary.total_goals, 6);
    assert_eq!(summary.total_games, 4);
}
