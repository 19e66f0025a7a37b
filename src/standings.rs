use std::cmp::Ordering;

use crate::models::{Sport, Team};
use crate::rankings::{Ranked, assign_positions};

/// One row of the rendered league table.
#[derive(Debug, Clone, Copy)]
pub struct StandingRow<'a> {
    pub position: usize,
    pub team: &'a Team,
    pub played: u32,
    pub goal_difference: i64,
    pub win_percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableSummary {
    pub team_count: usize,
    pub total_goals: u64,
    pub total_games: u64,
}

/// `None` and `"all"` keep everything; otherwise an exact, case-insensitive
/// match on the sport label. Unknown names simply match nothing.
pub fn sport_matches(sport: Sport, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(name) if name.trim().eq_ignore_ascii_case("all") => true,
        Some(name) => sport.matches_name(name),
    }
}

/// Points, then goal difference, then goals scored, all descending.
///
/// Points are taken as stored and never reconciled against match results.
/// `sort_by` is stable, so teams tied on all three keep their input order.
pub fn compute_standings<'a>(
    teams: impl IntoIterator<Item = &'a Team>,
    sport_filter: Option<&str>,
) -> Vec<&'a Team> {
    let mut out: Vec<&Team> = teams
        .into_iter()
        .filter(|t| sport_matches(t.sport, sport_filter))
        .collect();
    out.sort_by(|a, b| compare_standing(a, b));
    out
}

fn compare_standing(a: &Team, b: &Team) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

pub fn standings_table<'a>(
    teams: impl IntoIterator<Item = &'a Team>,
    sport_filter: Option<&str>,
) -> Vec<StandingRow<'a>> {
    assign_positions(compute_standings(teams, sport_filter))
        .into_iter()
        .map(|Ranked { position, entry }| StandingRow {
            position,
            team: entry,
            played: entry.played(),
            goal_difference: entry.goal_difference(),
            win_percentage: entry.win_percentage(),
        })
        .collect()
}

pub fn podium<'r, 'a>(rows: &'r [StandingRow<'a>]) -> &'r [StandingRow<'a>] {
    &rows[..rows.len().min(3)]
}

/// Distinct sports in first-seen order.
pub fn sports_in<'a>(teams: impl IntoIterator<Item = &'a Team>) -> Vec<Sport> {
    let mut out = Vec::new();
    for team in teams {
        if !out.contains(&team.sport) {
            out.push(team.sport);
        }
    }
    out
}

pub fn table_summary<'a>(teams: impl IntoIterator<Item = &'a Team>) -> TableSummary {
    teams
        .into_iter()
        .fold(TableSummary::default(), |mut acc, team| {
            acc.team_count += 1;
            acc.total_goals += u64::from(team.goals_for);
            acc.total_games += u64::from(team.played());
            acc
        })
}
