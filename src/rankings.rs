use std::cmp::Ordering;

use crate::models::{League, Player, Team};
use crate::standings;

/// Anything that carries a 0–10 rating and can be ranked against its peers.
pub trait Rated {
    fn id(&self) -> &str;
    fn rating(&self) -> f32;
}

impl Rated for League {
    fn id(&self) -> &str {
        &self.id
    }

    fn rating(&self) -> f32 {
        self.rating
    }
}

impl Rated for Team {
    fn id(&self) -> &str {
        &self.id
    }

    fn rating(&self) -> f32 {
        self.rating
    }
}

impl Rated for Player {
    fn id(&self) -> &str {
        &self.id
    }

    fn rating(&self) -> f32 {
        self.rating
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingTab {
    Leagues,
    Teams,
    Players,
}

impl RankingTab {
    pub fn next(self) -> Self {
        match self {
            RankingTab::Leagues => RankingTab::Teams,
            RankingTab::Teams => RankingTab::Players,
            RankingTab::Players => RankingTab::Leagues,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankingTab::Leagues => "Leagues",
            RankingTab::Teams => "Teams",
            RankingTab::Players => "Players",
        }
    }
}

/// An entry together with its 1-based position in a derived order.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a, T> {
    pub position: usize,
    pub entry: &'a T,
}

pub fn assign_positions<T>(sorted: Vec<&T>) -> Vec<Ranked<'_, T>> {
    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| Ranked {
            position: idx + 1,
            entry,
        })
        .collect()
}

/// Rating descending; equal ratings fall back to id ascending so the order
/// never depends on how the input happened to be arranged.
pub fn compute_rankings<T: Rated>(entities: &[T]) -> Vec<&T> {
    let mut out: Vec<&T> = entities.iter().collect();
    out.sort_by(|a, b| compare_rated(*a, *b));
    out
}

fn compare_rated<T: Rated>(a: &T, b: &T) -> Ordering {
    b.rating()
        .partial_cmp(&a.rating())
        .unwrap_or(Ordering::Equal)
        .then_with(|| compare_ids(a.id(), b.id()))
}

/// Integer ids sort before all other ids and compare numerically ("2" < "10");
/// the rest compare lexicographically. The raw string settles "1" vs "01".
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    let by_class = match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    };
    by_class.then_with(|| a.cmp(b))
}

pub fn league_rankings(leagues: &[League]) -> Vec<Ranked<'_, League>> {
    assign_positions(compute_rankings(leagues))
}

pub fn team_rankings<'a>(
    teams: impl IntoIterator<Item = &'a Team>,
    league_id: &str,
    sport_filter: Option<&str>,
) -> Vec<Ranked<'a, Team>> {
    let mut pool: Vec<&Team> = teams
        .into_iter()
        .filter(|t| t.league_id == league_id)
        .filter(|t| standings::sport_matches(t.sport, sport_filter))
        .collect();
    pool.sort_by(|a, b| compare_rated(*a, *b));
    assign_positions(pool)
}

pub fn player_rankings<'a>(
    players: impl IntoIterator<Item = &'a Player>,
    league_id: &str,
) -> Vec<Ranked<'a, Player>> {
    let mut pool: Vec<&Player> = players
        .into_iter()
        .filter(|p| p.league_id == league_id)
        .collect();
    pool.sort_by(|a, b| compare_rated(*a, *b));
    assign_positions(pool)
}
