use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::{League, Match, MatchStatus, Player, Sport, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Sport,
    League,
    Team,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    Goals,
    Assists,
    MvpVotes,
    Points,
    Rating,
    GoalsFor,
    GoalDifference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    FanFavorite,
}

/// Uniform read access used by the filter engine. Fields an entity does not
/// have report `None` and never satisfy a predicate on them.
pub trait Searchable {
    fn name(&self) -> &str;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name()]
    }

    fn category(&self, _field: CategoryField) -> Option<&str> {
        None
    }

    fn metric(&self, _field: MetricField) -> Option<f64> {
        None
    }

    fn flag(&self, _flag: FlagField) -> Option<bool> {
        None
    }
}

impl Searchable for League {
    fn name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.country, &self.region]
    }

    fn category(&self, field: CategoryField) -> Option<&str> {
        match field {
            CategoryField::League => Some(&self.id),
            _ => None,
        }
    }

    fn metric(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Rating => Some(f64::from(self.rating)),
            _ => None,
        }
    }
}

impl Searchable for Team {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self, field: CategoryField) -> Option<&str> {
        match field {
            CategoryField::Sport => Some(self.sport.label()),
            CategoryField::League => Some(&self.league_id),
            CategoryField::Team => Some(&self.id),
            CategoryField::Status => None,
        }
    }

    fn metric(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Points => Some(f64::from(self.points)),
            MetricField::Rating => Some(f64::from(self.rating)),
            MetricField::GoalsFor => Some(f64::from(self.goals_for)),
            MetricField::GoalDifference => Some(self.goal_difference() as f64),
            _ => None,
        }
    }
}

impl Searchable for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.team]
    }

    fn category(&self, field: CategoryField) -> Option<&str> {
        match field {
            CategoryField::League => Some(&self.league_id),
            CategoryField::Team => Some(&self.team_id),
            _ => None,
        }
    }

    fn metric(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Goals => Some(f64::from(self.goals)),
            MetricField::Assists => Some(f64::from(self.assists)),
            MetricField::MvpVotes => Some(f64::from(self.mvp_votes)),
            MetricField::Rating => Some(f64::from(self.rating)),
            _ => None,
        }
    }

    fn flag(&self, flag: FlagField) -> Option<bool> {
        match flag {
            FlagField::FanFavorite => Some(self.is_fan_favorite),
        }
    }
}

impl Searchable for Match {
    fn name(&self) -> &str {
        &self.venue
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.venue, &self.pitch]
    }

    fn category(&self, field: CategoryField) -> Option<&str> {
        match field {
            CategoryField::Sport => Some(self.sport.label()),
            CategoryField::League => Some(&self.league_id),
            CategoryField::Team => None,
            CategoryField::Status => Some(self.status.label()),
        }
    }
}

/// Composable predicate set; every configured predicate must hold.
#[derive(Debug, Clone, Default)]
pub struct EntityFilter {
    text: Option<String>,
    categories: Vec<(CategoryField, String)>,
    thresholds: Vec<(MetricField, f64)>,
    flags: Vec<(FlagField, bool)>,
}

impl EntityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        self.text = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
        self
    }

    /// `"all"` leaves the category unconstrained.
    pub fn category(mut self, field: CategoryField, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().eq_ignore_ascii_case("all") {
            self.categories.push((field, value.trim().to_string()));
        }
        self
    }

    pub fn at_least(mut self, field: MetricField, threshold: f64) -> Self {
        self.thresholds.push((field, threshold));
        self
    }

    pub fn flag(mut self, flag: FlagField, value: bool) -> Self {
        self.flags.push((flag, value));
        self
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if let Some(text) = &self.text
            && !item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(text.as_str()))
        {
            return false;
        }
        let categories_ok = self.categories.iter().all(|(field, want)| {
            item.category(*field)
                .is_some_and(|have| have.eq_ignore_ascii_case(want))
        });
        let thresholds_ok = self
            .thresholds
            .iter()
            .all(|(field, min)| item.metric(*field).is_some_and(|v| v >= *min));
        let flags_ok = self
            .flags
            .iter()
            .all(|(flag, want)| item.flag(*flag) == Some(*want));
        categories_ok && thresholds_ok && flags_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Descending(MetricField),
    NameAscending,
}

pub fn filter_entities<'a, T: Searchable>(
    items: impl IntoIterator<Item = &'a T>,
    filter: &EntityFilter,
) -> Vec<&'a T>
where
    T: 'a,
{
    items.into_iter().filter(|item| filter.matches(*item)).collect()
}

/// Stable: equal keys keep their relative order.
pub fn sort_entities<T: Searchable>(items: &mut [&T], key: SortKey) {
    match key {
        SortKey::Descending(field) => items.sort_by(|a, b| {
            let av = a.metric(field).unwrap_or(f64::NEG_INFINITY);
            let bv = b.metric(field).unwrap_or(f64::NEG_INFINITY);
            bv.partial_cmp(&av).unwrap_or(Ordering::Equal)
        }),
        SortKey::NameAscending => items.sort_by(|a, b| compare_names(a.name(), b.name())),
    }
}

pub fn filter_and_sort<'a, T: Searchable>(
    items: impl IntoIterator<Item = &'a T>,
    filter: &EntityFilter,
    key: SortKey,
) -> Vec<&'a T>
where
    T: 'a,
{
    let mut out = filter_entities(items, filter);
    sort_entities(&mut out, key);
    out
}

/// Case-folded comparison so "alex" sorts beside "Alex"; raw order breaks ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerView {
    All,
    TopScorers,
    FanFavorites,
}

impl PlayerView {
    pub fn next(self) -> Self {
        match self {
            PlayerView::All => PlayerView::TopScorers,
            PlayerView::TopScorers => PlayerView::FanFavorites,
            PlayerView::FanFavorites => PlayerView::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerView::All => "All Players",
            PlayerView::TopScorers => "Top Scorers",
            PlayerView::FanFavorites => "Fan Favorites",
        }
    }
}

pub const TOP_SCORER_MIN_GOALS: f64 = 5.0;

pub fn player_view<'a>(
    players: impl IntoIterator<Item = &'a Player>,
    view: PlayerView,
) -> Vec<&'a Player> {
    match view {
        PlayerView::All => filter_and_sort(
            players,
            &EntityFilter::new(),
            SortKey::Descending(MetricField::Goals),
        ),
        PlayerView::TopScorers => filter_and_sort(
            players,
            &EntityFilter::new().at_least(MetricField::Goals, TOP_SCORER_MIN_GOALS),
            SortKey::Descending(MetricField::Goals),
        ),
        PlayerView::FanFavorites => filter_and_sort(
            players,
            &EntityFilter::new().flag(FlagField::FanFavorite, true),
            SortKey::Descending(MetricField::MvpVotes),
        ),
    }
}

pub fn top_scorers<'a>(players: impl IntoIterator<Item = &'a Player>, n: usize) -> Vec<&'a Player> {
    let mut out = player_view(players, PlayerView::All);
    out.truncate(n);
    out
}

/// 0–5 stars from goals, assists and a fifth of the MVP votes.
pub fn star_rating(player: &Player) -> u8 {
    let raw = (f64::from(player.goals) + f64::from(player.assists) + f64::from(player.mvp_votes) / 5.0)
        / 3.0;
    raw.round().clamp(0.0, 5.0) as u8
}

pub fn live_matches<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Vec<&'a Match> {
    matches
        .into_iter()
        .filter(|m| m.status == MatchStatus::Live)
        .collect()
}

/// Distinct sports played across `matches`, in first-seen order.
pub fn match_sports<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Vec<Sport> {
    let mut out = Vec::new();
    for m in matches {
        if !out.contains(&m.sport) {
            out.push(m.sport);
        }
    }
    out
}

pub const HOME_FIXTURE_LIMIT: usize = 8;

pub fn fixtures_for_sport<'a>(
    matches: impl IntoIterator<Item = &'a Match>,
    sport_filter: Option<&str>,
    limit: usize,
) -> Vec<&'a Match> {
    let filter = match sport_filter {
        Some(sport) => EntityFilter::new().category(CategoryField::Sport, sport),
        None => EntityFilter::new(),
    };
    let mut out = filter_entities(matches, &filter);
    out.truncate(limit);
    out
}

pub fn team_matches<'a>(
    matches: impl IntoIterator<Item = &'a Match>,
    team_id: &str,
) -> Vec<&'a Match> {
    matches.into_iter().filter(|m| m.involves(team_id)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    All,
    Today,
    Week,
    Month,
}

impl DateWindow {
    pub fn next(self) -> Self {
        match self {
            DateWindow::All => DateWindow::Today,
            DateWindow::Today => DateWindow::Week,
            DateWindow::Week => DateWindow::Month,
            DateWindow::Month => DateWindow::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateWindow::All => "All Time",
            DateWindow::Today => "Today",
            DateWindow::Week => "This Week",
            DateWindow::Month => "This Month",
        }
    }

    fn span_days(self) -> Option<i64> {
        match self {
            DateWindow::All => None,
            DateWindow::Today => Some(0),
            DateWindow::Week => Some(6),
            DateWindow::Month => Some(29),
        }
    }

    /// Whether a `YYYY-MM-DD` date lies within the window ending at `today`,
    /// inclusive. Unparseable dates only pass `All`.
    pub fn contains(self, date: &str, today: NaiveDate) -> bool {
        let Some(span) = self.span_days() else {
            return true;
        };
        let Ok(date) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
            return false;
        };
        let age = (today - date).num_days();
        age.abs() <= span
    }
}

/// Results page grouping for one league.
#[derive(Debug, Clone, Default)]
pub struct MatchBoard<'a> {
    pub live: Vec<&'a Match>,
    pub completed: Vec<&'a Match>,
    pub upcoming: Vec<&'a Match>,
}

impl MatchBoard<'_> {
    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.completed.is_empty() && self.upcoming.is_empty()
    }
}

pub fn match_board<'a>(
    matches: impl IntoIterator<Item = &'a Match>,
    league_id: &str,
    sport_filter: Option<&str>,
    window: DateWindow,
    today: NaiveDate,
) -> MatchBoard<'a> {
    let mut filter = EntityFilter::new().category(CategoryField::League, league_id);
    if let Some(sport) = sport_filter {
        filter = filter.category(CategoryField::Sport, sport);
    }
    let mut board = MatchBoard::default();
    for m in filter_entities(matches, &filter) {
        if !window.contains(&m.date, today) {
            continue;
        }
        match m.status {
            MatchStatus::Live => board.live.push(m),
            MatchStatus::FullTime => board.completed.push(m),
            MatchStatus::Scheduled => board.upcoming.push(m),
            MatchStatus::Postponed => {}
        }
    }
    board
}
