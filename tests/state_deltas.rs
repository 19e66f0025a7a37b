use chrono::NaiveDate;

use gala_terminal::config::Settings;
use gala_terminal::engagement::{EngagementTab, PredictedWinner};
use gala_terminal::filters::{DateWindow, PlayerView};
use gala_terminal::models::{CsrStats, Sport};
use gala_terminal::rankings::RankingTab;
use gala_terminal::seed::seed_app_data;
use gala_terminal::state::{AppState, Delta, Page, apply_delta};

fn settings_with(pairs: &[(&str, &str)]) -> Settings {
    let owned: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(move |key| {
        owned
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
}

fn state() -> AppState {
    let settings = settings_with(&[("GALA_TODAY", "2025-06-14")]);
    AppState::new(seed_app_data().unwrap(), &settings)
}

#[test]
fn starts_on_default_league_home() {
    let s = state();
    assert_eq!(s.league_id, "lira-gala");
    assert_eq!(s.page, Page::Home);
    assert_eq!(s.today, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
    assert!(s.logs.is_empty());
}

#[test]
fn unknown_initial_league_falls_back_with_warning() {
    let settings = settings_with(&[("GALA_LEAGUE", "atlantis-cup")]);
    let s = AppState::new(seed_app_data().unwrap(), &settings);
    assert_eq!(s.league_id, "lira-gala");
    assert!(s.logs.back().unwrap().starts_with("[WARN]"));
}

#[test]
fn match_page_without_selection_lands_home() {
    let settings = settings_with(&[("GALA_PAGE", "match")]);
    let s = AppState::new(seed_app_data().unwrap(), &settings);
    assert_eq!(s.page, Page::Home);

    let settings = settings_with(&[("GALA_PAGE", "table")]);
    let s = AppState::new(seed_app_data().unwrap(), &settings);
    assert_eq!(s.page, Page::Table);
}

#[test]
fn changing_league_resets_to_home() {
    let mut s = state();
    s.set_page(Page::Table);
    s.cycle_sport_filter();
    assert!(s.sport_filter().is_some());

    s.change_league("city-corporate-cup");
    assert_eq!(s.league_id, "city-corporate-cup");
    assert_eq!(s.page, Page::Home);
    assert!(s.sport_filters.is_empty());
    assert_eq!(s.current_league_teams().len(), 4);
}

#[test]
fn unknown_league_is_ignored() {
    let mut s = state();
    s.set_page(Page::Players);
    s.change_league("atlantis-cup");
    assert_eq!(s.league_id, "lira-gala");
    assert_eq!(s.page, Page::Players);
    assert!(s.logs.back().unwrap().contains("atlantis-cup"));
}

#[test]
fn cycle_league_wraps() {
    let mut s = state();
    s.cycle_league();
    assert_eq!(s.league_id, "city-corporate-cup");
    s.cycle_league();
    s.cycle_league();
    assert_eq!(s.league_id, "lira-gala");
}

#[test]
fn open_match_and_back() {
    let mut s = state();
    s.open_match("6");
    assert_eq!(s.page, Page::Match);
    assert_eq!(s.selected_match().unwrap().id, "6");

    s.back();
    assert_eq!(s.page, Page::Home);

    s.open_match("nope");
    assert_eq!(s.page, Page::Home);
    assert!(s.logs.back().unwrap().starts_with("[WARN]"));
}

#[test]
fn enter_on_home_opens_selected_fixture() {
    let mut s = state();
    s.select_next();
    s.activate();
    assert_eq!(s.page, Page::Match);
    assert_eq!(s.selected_match_id.as_deref(), Some("2"));
}

#[test]
fn selection_wraps_both_ways() {
    let mut s = state();
    s.set_page(Page::Feed);
    s.select_prev();
    assert_eq!(s.selected, 4);
    s.select_next();
    assert_eq!(s.selected, 0);
}

#[test]
fn table_sport_filter_cycles_through_league_sports() {
    let mut s = state();
    s.change_league("city-corporate-cup");
    s.set_page(Page::Table);
    assert_eq!(s.table_rows().len(), 4);

    s.cycle_sport_filter();
    assert_eq!(s.sport_filter(), Some(Sport::Football));
    assert_eq!(s.table_rows().len(), 2);
    s.cycle_sport_filter();
    assert_eq!(s.sport_filter(), Some(Sport::Volleyball));
    s.cycle_sport_filter();
    assert_eq!(s.sport_filter(), None);
}

#[test]
fn sport_filters_are_per_page() {
    let mut s = state();
    s.set_page(Page::Results);
    s.cycle_sport_filter();
    s.set_page(Page::Rankings);
    assert_eq!(s.sport_filter(), None);
    s.set_page(Page::Results);
    assert_eq!(s.sport_filter(), Some(Sport::Football));
}

#[test]
fn view_modes_cycle_per_page() {
    let mut s = state();
    s.set_page(Page::Players);
    s.cycle_view_mode();
    assert_eq!(s.player_view, PlayerView::TopScorers);

    s.set_page(Page::Rankings);
    s.cycle_view_mode();
    assert_eq!(s.ranking_tab, RankingTab::Teams);

    s.set_page(Page::Results);
    s.cycle_view_mode();
    assert_eq!(s.date_window, DateWindow::Today);
    assert_eq!(s.results_rows().len(), 6);

    s.set_page(Page::Engagement);
    s.cycle_view_mode();
    assert_eq!(s.engagement_tab, EngagementTab::Polls);
}

#[test]
fn score_and_reaction_deltas_update_store() {
    let mut s = state();
    apply_delta(
        &mut s,
        Delta::SetMatchScore {
            match_id: "6".to_string(),
            home: 3,
            away: 0,
        },
    );
    let m = s.data.match_by_id("6").unwrap();
    assert_eq!((m.home_score, m.away_score), (3, 0));

    for _ in 0..2 {
        apply_delta(
            &mut s,
            Delta::AddFanReaction {
                match_id: "6".to_string(),
                reaction: "🔥".to_string(),
            },
        );
    }
    assert_eq!(s.data.match_by_id("6").unwrap().reaction_count("🔥"), 2);
}

#[test]
fn unknown_ids_leave_state_alone() {
    let mut s = state();
    let before = s.data.clone();
    apply_delta(
        &mut s,
        Delta::SetMatchScore {
            match_id: "missing".to_string(),
            home: 1,
            away: 1,
        },
    );
    apply_delta(
        &mut s,
        Delta::LikePost {
            post_id: "missing".to_string(),
        },
    );
    assert!(s.data.same_matches(&before));
    assert!(s.data.same_posts(&before));
    assert!(s.liked_posts.is_empty());
}

#[test]
fn match_page_controls_drive_store() {
    let mut s = state();
    s.open_match("1");
    s.adjust_score(1, 0);
    s.adjust_score(0, -5);
    let m = s.data.match_by_id("1").unwrap();
    assert_eq!((m.home_score, m.away_score), (3, 0));

    s.react(5);
    assert_eq!(s.data.match_by_id("1").unwrap().reaction_count("👏"), 1);
    s.react(17);
    assert_eq!(s.data.match_by_id("1").unwrap().fan_reactions.len(), 5);
}

#[test]
fn like_toggles_marker_but_always_counts() {
    let mut s = state();
    s.set_page(Page::Feed);
    s.like_selected_post();
    assert!(s.liked_posts.contains("1"));
    s.like_selected_post();
    assert!(!s.liked_posts.contains("1"));
    assert_eq!(s.data.post("1").unwrap().likes, 26);
}

#[test]
fn blank_comments_are_dropped() {
    let mut s = state();
    s.submit_comment("2", "   ");
    assert_eq!(s.data.post("2").unwrap().comments, 5);

    s.submit_comment("2", "  What a rally!  ");
    assert_eq!(s.data.post("2").unwrap().comments, 6);
    assert_eq!(s.comment_echo["2"], vec!["What a rally!".to_string()]);

    s.submit_comment("404", "lost");
    assert!(!s.comment_echo.contains_key("404"));
}

#[test]
fn votes_are_once_per_poll() {
    let mut s = state();
    s.set_page(Page::Engagement);
    s.cycle_view_mode();
    let before = s.polls.polls[0].options[0].votes;
    s.vote_selected();
    s.vote_selected();
    assert_eq!(s.polls.polls[0].options[0].votes, before + 1);
    assert!(s.logs.back().unwrap().contains("Already voted"));

    // Rows flatten poll options, so row 3 is the first option of poll 2.
    s.selected = 3;
    s.vote_selected();
    assert_eq!(s.polls.choice("2"), Some(0));
}

#[test]
fn predictions_cycle_winner() {
    let mut s = state();
    s.set_page(Page::Engagement);
    s.engagement_tab = EngagementTab::Predictions;
    assert_eq!(s.prediction_rows().len(), 2);

    s.predict_selected();
    assert_eq!(s.predictions.get("5").unwrap().winner, PredictedWinner::Home);
    s.predict_selected();
    assert_eq!(s.predictions.get("5").unwrap().winner, PredictedWinner::Draw);
}

#[test]
fn cosmetic_deltas_only_touch_the_visible_page() {
    let mut s = state();
    s.set_page(Page::Teams);
    apply_delta(&mut s, Delta::TickerAdvance);
    apply_delta(&mut s, Delta::CheerJitter { home: 5.0, away: -5.0 });
    apply_delta(&mut s, Delta::CounterStep { step: 60, steps: 60 });
    assert_eq!(s.ticker_index, 0);
    assert_eq!(s.cheer.home, 45.0);
    assert_eq!(s.csr_display, CsrStats::default());

    s.set_page(Page::Home);
    apply_delta(&mut s, Delta::TickerAdvance);
    assert_eq!(s.ticker_index, 1);
    for _ in 0..3 {
        apply_delta(&mut s, Delta::TickerAdvance);
    }
    assert_eq!(s.ticker_index, 0);

    s.open_match("1");
    apply_delta(&mut s, Delta::CheerJitter { home: 5.0, away: -5.0 });
    assert_eq!((s.cheer.home, s.cheer.away), (50.0, 50.0));

    s.set_page(Page::Csr);
    apply_delta(&mut s, Delta::CounterStep { step: 60, steps: 60 });
    assert_eq!(s.csr_display, s.data.csr_stats());
}

#[test]
fn reselecting_csr_keeps_finished_counters() {
    let mut s = state();
    s.set_page(Page::Csr);
    apply_delta(&mut s, Delta::CounterStep { step: 60, steps: 60 });
    s.select_next();

    s.set_page(Page::Csr);
    assert_eq!(s.csr_display, s.data.csr_stats());
    assert_eq!(s.selected, 0);

    s.set_page(Page::Home);
    s.set_page(Page::Csr);
    assert_eq!(s.csr_display, CsrStats::default());
}

#[test]
fn results_sport_filter_offers_only_league_match_sports() {
    let mut s = state();
    s.change_league("city-corporate-cup");
    s.set_page(Page::Results);
    assert_eq!(s.sport_options(), vec![Sport::Football, Sport::Volleyball]);
    s.cycle_sport_filter();
    assert_eq!(s.sport_filter(), Some(Sport::Football));
    s.cycle_sport_filter();
    assert_eq!(s.sport_filter(), Some(Sport::Volleyball));
    s.cycle_sport_filter();
    assert_eq!(s.sport_filter(), None);

    s.change_league("tech-park-games");
    s.set_page(Page::Results);
    assert_eq!(s.sport_options(), vec![Sport::Football]);
}

#[test]
fn rankings_sport_filter_only_applies_to_teams_tab() {
    let mut s = state();
    s.set_page(Page::Rankings);
    assert_eq!(s.ranking_tab, RankingTab::Leagues);
    assert!(!s.sport_filter_applies());
    s.cycle_sport_filter();
    assert_eq!(s.sport_filter(), None);

    s.ranking_tab = RankingTab::Teams;
    assert!(s.sport_filter_applies());
    s.cycle_sport_filter();
    assert_eq!(s.sport_filter(), Some(Sport::Football));

    s.ranking_tab = RankingTab::Players;
    assert!(!s.sport_filter_applies());

    s.set_page(Page::Feed);
    assert!(!s.sport_filter_applies());
    s.set_page(Page::Table);
    assert!(s.sport_filter_applies());
}

#[test]
fn log_is_bounded() {
    let mut s = state();
    for i in 0..250 {
        apply_delta(&mut s, Delta::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(s.logs.len(), 200);
    assert_eq!(s.logs.front().unwrap(), "[INFO] line 50");
}

#[test]
fn comment_draft_posts_to_selected_post() {
    let mut s = state();
    s.begin_comment();
    assert!(s.comment_draft.is_none());

    s.set_page(Page::Feed);
    s.select_next();
    s.begin_comment();
    s.comment_draft.as_mut().unwrap().push_str("Go Dragons");
    s.submit_draft();
    assert!(s.comment_draft.is_none());
    assert_eq!(s.data.post("2").unwrap().comments, 6);

    s.begin_comment();
    s.set_page(Page::Home);
    assert!(s.comment_draft.is_none());
}
