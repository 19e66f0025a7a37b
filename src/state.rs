use std::collections::{HashMap, HashSet, VecDeque};

use chrono::NaiveDate;

use crate::animation::{CheerMeter, advance_ticker};
use crate::config::Settings;
use crate::csr::ramp_stats;
use crate::engagement::{
    Challenge, EngagementTab, PollBook, PredictedWinner, PredictionSlip, default_challenges,
    default_polls, leaderboard, prediction_candidates,
};
use crate::filters::{
    DateWindow, HOME_FIXTURE_LIMIT, MatchBoard, PlayerView, fixtures_for_sport, live_matches,
    match_board, match_sports, player_view,
};
use crate::models::{CsrStats, League, Match, Player, SocialPost, Sport, Team};
use crate::rankings::{RankingTab, league_rankings, player_rankings, team_rankings};
use crate::standings::{StandingRow, sports_in, standings_table};
use crate::store::AppData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Feed,
    Match,
    Results,
    Rankings,
    Teams,
    Players,
    Table,
    Engagement,
    Csr,
}

impl Page {
    pub fn from_name(name: &str) -> Option<Page> {
        let page = match name.trim().to_ascii_lowercase().as_str() {
            "home" => Page::Home,
            "feed" => Page::Feed,
            "match" => Page::Match,
            "results" => Page::Results,
            "rankings" => Page::Rankings,
            "teams" => Page::Teams,
            "players" => Page::Players,
            "table" => Page::Table,
            "engagement" => Page::Engagement,
            "csr" => Page::Csr,
            _ => return None,
        };
        Some(page)
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Feed => "Feed",
            Page::Match => "Match Center",
            Page::Results => "Results",
            Page::Rankings => "Rankings",
            Page::Teams => "Teams",
            Page::Players => "Players",
            Page::Table => "Table",
            Page::Engagement => "Fan Zone",
            Page::Csr => "Wellness & CSR",
        }
    }
}

pub const REACTIONS: [(&str, &str); 6] = [
    ("🔥", "Fire"),
    ("⚡", "Electric"),
    ("❤️", "Love"),
    ("🎉", "Party"),
    ("💪", "Strong"),
    ("👏", "Clap"),
];

#[derive(Debug, Clone)]
pub struct AppState {
    pub data: AppData,
    pub page: Page,
    pub league_id: String,
    pub selected_match_id: Option<String>,
    pub selected: usize,
    pub sport_filters: HashMap<Page, Sport>,
    pub player_view: PlayerView,
    pub ranking_tab: RankingTab,
    pub date_window: DateWindow,
    pub today: NaiveDate,
    pub team_profile: Option<String>,
    pub player_profile: Option<String>,
    pub liked_posts: HashSet<String>,
    pub comment_draft: Option<String>,
    pub comment_echo: HashMap<String, Vec<String>>,
    pub polls: PollBook,
    pub predictions: PredictionSlip,
    pub challenges: Vec<Challenge>,
    pub engagement_tab: EngagementTab,
    pub ticker_index: usize,
    pub cheer: CheerMeter,
    pub csr_display: CsrStats,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
    SetMatchScore {
        match_id: String,
        home: u32,
        away: u32,
    },
    AddFanReaction {
        match_id: String,
        reaction: String,
    },
    LikePost {
        post_id: String,
    },
    CommentOnPost {
        post_id: String,
        text: String,
    },
    TickerAdvance,
    CheerJitter {
        home: f32,
        away: f32,
    },
    CounterStep {
        step: u32,
        steps: u32,
    },
    Log(String),
}

impl AppState {
    pub fn new(data: AppData, settings: &Settings) -> Self {
        let mut state = Self {
            data,
            page: Page::Home,
            league_id: String::new(),
            selected_match_id: None,
            selected: 0,
            sport_filters: HashMap::new(),
            player_view: PlayerView::All,
            ranking_tab: RankingTab::Leagues,
            date_window: DateWindow::All,
            today: settings.today,
            team_profile: None,
            player_profile: None,
            liked_posts: HashSet::new(),
            comment_draft: None,
            comment_echo: HashMap::new(),
            polls: PollBook::new(default_polls()),
            predictions: PredictionSlip::default(),
            challenges: default_challenges(),
            engagement_tab: EngagementTab::Leaderboard,
            ticker_index: 0,
            cheer: CheerMeter::default(),
            csr_display: CsrStats::default(),
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
        };

        if state.data.league(&settings.initial_league).is_some() {
            state.league_id = settings.initial_league.clone();
        } else {
            let fallback = state
                .data
                .leagues()
                .first()
                .map(|l| l.id.clone())
                .unwrap_or_default();
            state.push_log(format!(
                "[WARN] Unknown league {}; using {}",
                settings.initial_league,
                if fallback.is_empty() { "none" } else { fallback.as_str() }
            ));
            state.league_id = fallback;
        }
        state.set_page(settings.initial_page);
        state
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn current_league(&self) -> Option<&League> {
        self.data.league(&self.league_id)
    }

    pub fn current_league_teams(&self) -> Vec<&Team> {
        self.data.teams_by_league(&self.league_id)
    }

    pub fn current_league_players(&self) -> Vec<&Player> {
        self.data.players_by_league(&self.league_id)
    }

    pub fn current_league_matches(&self) -> Vec<&Match> {
        self.data.matches_by_league(&self.league_id)
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.selected_match_id
            .as_deref()
            .and_then(|id| self.data.match_by_id(id))
    }

    pub fn sport_filter(&self) -> Option<Sport> {
        self.sport_filters.get(&self.page).copied()
    }

    fn sport_filter_name(&self) -> Option<&'static str> {
        self.sport_filter().map(Sport::label)
    }

    pub fn set_page(&mut self, page: Page) {
        let page = if page == Page::Match && self.selected_match().is_none() {
            Page::Home
        } else {
            page
        };
        let revisit = page == self.page;
        self.page = page;
        self.selected = 0;
        self.comment_draft = None;
        self.team_profile = None;
        self.player_profile = None;
        if revisit {
            return;
        }
        match page {
            Page::Home => self.ticker_index = 0,
            Page::Match => self.cheer = CheerMeter::default(),
            Page::Csr => self.csr_display = CsrStats::default(),
            _ => {}
        }
    }

    pub fn open_match(&mut self, match_id: &str) {
        if self.data.match_by_id(match_id).is_none() {
            self.push_log(format!("[WARN] Match {match_id} not found"));
            self.set_page(Page::Home);
            return;
        }
        self.selected_match_id = Some(match_id.to_string());
        self.set_page(Page::Match);
    }

    /// Switching league always lands on the home page.
    pub fn change_league(&mut self, league_id: &str) {
        let Some(name) = self.data.league(league_id).map(|l| l.name.clone()) else {
            self.push_log(format!("[WARN] Unknown league {league_id}"));
            return;
        };
        self.league_id = league_id.to_string();
        self.selected_match_id = None;
        self.sport_filters.clear();
        self.set_page(Page::Home);
        self.push_log(format!("[INFO] League: {name}"));
    }

    pub fn cycle_league(&mut self) {
        let leagues = self.data.leagues();
        if leagues.is_empty() {
            return;
        }
        let idx = leagues
            .iter()
            .position(|l| l.id == self.league_id)
            .map(|i| (i + 1) % leagues.len())
            .unwrap_or(0);
        let next = leagues[idx].id.clone();
        self.change_league(&next);
    }

    pub fn back(&mut self) {
        if self.team_profile.take().is_some() || self.player_profile.take().is_some() {
            return;
        }
        if self.page != Page::Home {
            self.set_page(Page::Home);
        }
    }

    /// Sports offered by the current page's filter, without the leading "all".
    pub fn sport_options(&self) -> Vec<Sport> {
        match self.page {
            Page::Table => sports_in(self.current_league_teams()),
            Page::Results => match_sports(self.current_league_matches()),
            Page::Rankings if self.ranking_tab == RankingTab::Teams => Sport::ALL.to_vec(),
            Page::Home => Sport::ALL.to_vec(),
            _ => Vec::new(),
        }
    }

    /// Whether the visible list is narrowed by the page's sport filter.
    pub fn sport_filter_applies(&self) -> bool {
        match self.page {
            Page::Home | Page::Results | Page::Table => true,
            Page::Rankings => self.ranking_tab == RankingTab::Teams,
            _ => false,
        }
    }

    /// all -> first sport -> ... -> last sport -> all.
    pub fn cycle_sport_filter(&mut self) {
        let options = self.sport_options();
        if options.is_empty() {
            return;
        }
        let next = match self.sport_filter() {
            None => Some(options[0]),
            Some(current) => options
                .iter()
                .position(|s| *s == current)
                .and_then(|i| options.get(i + 1).copied()),
        };
        match next {
            Some(sport) => self.sport_filters.insert(self.page, sport),
            None => self.sport_filters.remove(&self.page),
        };
        self.selected = 0;
    }

    pub fn cycle_player_view(&mut self) {
        self.player_view = self.player_view.next();
        self.selected = 0;
    }

    pub fn cycle_ranking_tab(&mut self) {
        self.ranking_tab = self.ranking_tab.next();
        self.selected = 0;
    }

    pub fn cycle_date_window(&mut self) {
        self.date_window = self.date_window.next();
        self.selected = 0;
    }

    pub fn cycle_engagement_tab(&mut self) {
        self.engagement_tab = self.engagement_tab.next();
        self.selected = 0;
    }

    /// Page-specific secondary toggle.
    pub fn cycle_view_mode(&mut self) {
        match self.page {
            Page::Players => self.cycle_player_view(),
            Page::Rankings => self.cycle_ranking_tab(),
            Page::Results => self.cycle_date_window(),
            Page::Engagement => self.cycle_engagement_tab(),
            _ => {}
        }
    }

    pub fn home_fixtures(&self) -> Vec<&Match> {
        fixtures_for_sport(
            self.current_league_matches(),
            self.sport_filter_name(),
            HOME_FIXTURE_LIMIT,
        )
    }

    pub fn live_league_matches(&self) -> Vec<&Match> {
        live_matches(self.current_league_matches())
    }

    pub fn results_board(&self) -> MatchBoard<'_> {
        match_board(
            self.data.matches(),
            &self.league_id,
            self.sport_filter_name(),
            self.date_window,
            self.today,
        )
    }

    /// Results rows in display order: live, completed, upcoming.
    pub fn results_rows(&self) -> Vec<&Match> {
        let board = self.results_board();
        board
            .live
            .into_iter()
            .chain(board.completed)
            .chain(board.upcoming)
            .collect()
    }

    pub fn table_rows(&self) -> Vec<StandingRow<'_>> {
        standings_table(self.current_league_teams(), self.sport_filter_name())
    }

    pub fn player_rows(&self) -> Vec<&Player> {
        player_view(self.current_league_players(), self.player_view)
    }

    pub fn poll_rows(&self) -> Vec<(String, usize)> {
        self.polls
            .polls
            .iter()
            .flat_map(|p| (0..p.options.len()).map(move |i| (p.id.clone(), i)))
            .collect()
    }

    pub fn prediction_rows(&self) -> Vec<&Match> {
        prediction_candidates(self.current_league_matches())
    }

    pub fn list_len(&self) -> usize {
        match self.page {
            Page::Home => self.home_fixtures().len(),
            Page::Feed => self.data.social_posts().len(),
            Page::Match => REACTIONS.len(),
            Page::Results => self.results_rows().len(),
            Page::Rankings => match self.ranking_tab {
                RankingTab::Leagues => league_rankings(self.data.leagues()).len(),
                RankingTab::Teams => team_rankings(
                    self.data.teams(),
                    &self.league_id,
                    self.sport_filter_name(),
                )
                .len(),
                RankingTab::Players => player_rankings(self.data.players(), &self.league_id).len(),
            },
            Page::Teams => self.current_league_teams().len(),
            Page::Players => self.player_rows().len(),
            Page::Table => self.table_rows().len(),
            Page::Engagement => match self.engagement_tab {
                EngagementTab::Leaderboard => leaderboard(self.data.fan_leaderboard()).len(),
                EngagementTab::Polls => self.poll_rows().len(),
                EngagementTab::Predictions => self.prediction_rows().len(),
                EngagementTab::Challenges => self.challenges.len(),
            },
            Page::Csr => 0,
        }
    }

    pub fn select_next(&mut self) {
        let total = self.list_len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.list_len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_post(&self) -> Option<&SocialPost> {
        self.data.social_posts().get(self.selected)
    }

    /// Enter on a list row: open a match, or a team/player profile.
    pub fn activate(&mut self) {
        match self.page {
            Page::Home => {
                let target = self.home_fixtures().get(self.selected).map(|m| m.id.clone());
                if let Some(id) = target {
                    self.open_match(&id);
                }
            }
            Page::Results => {
                let target = self.results_rows().get(self.selected).map(|m| m.id.clone());
                if let Some(id) = target {
                    self.open_match(&id);
                }
            }
            Page::Teams => {
                self.team_profile = self
                    .current_league_teams()
                    .get(self.selected)
                    .map(|t| t.id.clone());
            }
            Page::Players => {
                self.player_profile = self.player_rows().get(self.selected).map(|p| p.id.clone());
            }
            Page::Match => self.react_selected(),
            _ => {}
        }
    }

    pub fn react_selected(&mut self) {
        self.react(self.selected);
    }

    pub fn react(&mut self, reaction_idx: usize) {
        let Some(match_id) = self.selected_match_id.clone() else {
            return;
        };
        let Some((emoji, _)) = REACTIONS.get(reaction_idx) else {
            return;
        };
        apply_delta(
            self,
            Delta::AddFanReaction {
                match_id,
                reaction: emoji.to_string(),
            },
        );
    }

    pub fn adjust_score(&mut self, home_delta: i32, away_delta: i32) {
        let Some(m) = self.selected_match() else {
            return;
        };
        let home = m.home_score.saturating_add_signed(home_delta);
        let away = m.away_score.saturating_add_signed(away_delta);
        let match_id = m.id.clone();
        apply_delta(
            self,
            Delta::SetMatchScore {
                match_id,
                home,
                away,
            },
        );
    }

    pub fn like_selected_post(&mut self) {
        if let Some(post_id) = self.selected_post().map(|p| p.id.clone()) {
            apply_delta(self, Delta::LikePost { post_id });
        }
    }

    pub fn begin_comment(&mut self) {
        if self.page == Page::Feed && self.selected_post().is_some() {
            self.comment_draft = Some(String::new());
        }
    }

    /// Posts the draft against the selected post and closes the composer.
    pub fn submit_draft(&mut self) {
        let Some(text) = self.comment_draft.take() else {
            return;
        };
        if let Some(post_id) = self.selected_post().map(|p| p.id.clone()) {
            self.submit_comment(&post_id, &text);
        }
    }

    /// Blank comments are dropped before they reach the store.
    pub fn submit_comment(&mut self, post_id: &str, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        apply_delta(
            self,
            Delta::CommentOnPost {
                post_id: post_id.to_string(),
                text: text.to_string(),
            },
        );
    }

    pub fn vote_selected(&mut self) {
        let Some((poll_id, option)) = self.poll_rows().get(self.selected).cloned() else {
            return;
        };
        if self.polls.vote(&poll_id, option) {
            self.push_log(format!("[INFO] Vote recorded for poll {poll_id}"));
        } else {
            self.push_log(format!("[INFO] Already voted in poll {poll_id}"));
        }
    }

    /// Cycles the predicted winner of the selected upcoming match.
    pub fn predict_selected(&mut self) {
        let Some(match_id) = self.prediction_rows().get(self.selected).map(|m| m.id.clone())
        else {
            return;
        };
        let winner = self
            .predictions
            .get(&match_id)
            .map(|p| p.winner.next())
            .unwrap_or(PredictedWinner::Home);
        self.predictions.predict(&match_id, winner, None);
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetMatchScore {
            match_id,
            home,
            away,
        } => {
            state.data = state.data.set_match_score(&match_id, home, away);
        }
        Delta::AddFanReaction { match_id, reaction } => {
            state.data = state.data.add_fan_reaction(&match_id, &reaction);
        }
        Delta::LikePost { post_id } => {
            if state.data.post(&post_id).is_some() && !state.liked_posts.remove(&post_id) {
                state.liked_posts.insert(post_id.clone());
            }
            state.data = state.data.like_post(&post_id);
        }
        Delta::CommentOnPost { post_id, text } => {
            let next = state.data.comment_on_post(&post_id, &text);
            if !next.same_posts(&state.data) {
                state.comment_echo.entry(post_id).or_default().push(text);
            }
            state.data = next;
        }
        Delta::TickerAdvance => {
            if state.page != Page::Home {
                return;
            }
            let live = state.live_league_matches().len();
            state.ticker_index = advance_ticker(state.ticker_index, live);
        }
        Delta::CheerJitter { home, away } => {
            if state.page != Page::Match {
                return;
            }
            state.cheer = state.cheer.jitter(home, away);
        }
        Delta::CounterStep { step, steps } => {
            if state.page != Page::Csr {
                return;
            }
            state.csr_display = ramp_stats(&state.data.csr_stats(), step, steps);
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
