use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{
    CsrStats, FanLeaderboardEntry, League, Match, Player, ReactionCount, SocialPost, Team,
};

/// Raw collections as authored in the seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub leagues: Vec<League>,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    #[serde(default)]
    pub social_posts: Vec<SocialPost>,
    #[serde(default)]
    pub fan_leaderboard: Vec<FanLeaderboardEntry>,
    #[serde(default)]
    pub csr_stats: CsrStats,
}

/// Immutable application data snapshot.
///
/// Every collection sits behind an `Arc`, so cloning is cheap and mutations
/// build a new snapshot that shares whatever did not change. Callers can
/// compare collections by pointer to detect a change.
#[derive(Debug, Clone)]
pub struct AppData {
    leagues: Arc<Vec<League>>,
    teams: Arc<Vec<Team>>,
    players: Arc<Vec<Player>>,
    matches: Arc<Vec<Match>>,
    social_posts: Arc<Vec<SocialPost>>,
    fan_leaderboard: Arc<Vec<FanLeaderboardEntry>>,
    csr_stats: CsrStats,
}

impl From<SeedData> for AppData {
    fn from(seed: SeedData) -> Self {
        Self {
            leagues: Arc::new(seed.leagues),
            teams: Arc::new(seed.teams),
            players: Arc::new(seed.players),
            matches: Arc::new(seed.matches),
            social_posts: Arc::new(seed.social_posts),
            fan_leaderboard: Arc::new(seed.fan_leaderboard),
            csr_stats: seed.csr_stats,
        }
    }
}

impl Default for AppData {
    fn default() -> Self {
        Self::from(SeedData {
            leagues: Vec::new(),
            teams: Vec::new(),
            players: Vec::new(),
            matches: Vec::new(),
            social_posts: Vec::new(),
            fan_leaderboard: Vec::new(),
            csr_stats: CsrStats::default(),
        })
    }
}

impl AppData {
    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn social_posts(&self) -> &[SocialPost] {
        &self.social_posts
    }

    pub fn fan_leaderboard(&self) -> &[FanLeaderboardEntry] {
        &self.fan_leaderboard
    }

    pub fn csr_stats(&self) -> CsrStats {
        self.csr_stats
    }

    pub fn league(&self, id: &str) -> Option<&League> {
        self.leagues.iter().find(|l| l.id == id)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn match_by_id(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn post(&self, id: &str) -> Option<&SocialPost> {
        self.social_posts.iter().find(|p| p.id == id)
    }

    pub fn teams_by_league(&self, league_id: &str) -> Vec<&Team> {
        self.teams.iter().filter(|t| t.league_id == league_id).collect()
    }

    pub fn players_by_league(&self, league_id: &str) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.league_id == league_id)
            .collect()
    }

    pub fn matches_by_league(&self, league_id: &str) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|m| m.league_id == league_id)
            .collect()
    }

    /// Resolve the home/away team references of a match against the current teams.
    pub fn match_teams(&self, m: &Match) -> (Option<&Team>, Option<&Team>) {
        (self.team(&m.home_team_id), self.team(&m.away_team_id))
    }

    pub fn same_matches(&self, other: &AppData) -> bool {
        Arc::ptr_eq(&self.matches, &other.matches)
    }

    pub fn same_posts(&self, other: &AppData) -> bool {
        Arc::ptr_eq(&self.social_posts, &other.social_posts)
    }

    pub fn set_match_score(&self, match_id: &str, home_score: u32, away_score: u32) -> AppData {
        self.replace_match(match_id, |m| Match {
            home_score,
            away_score,
            ..m.clone()
        })
    }

    pub fn add_fan_reaction(&self, match_id: &str, reaction: &str) -> AppData {
        self.replace_match(match_id, |m| {
            let mut fan_reactions = m.fan_reactions.clone();
            match fan_reactions.iter_mut().find(|r| r.emoji == reaction) {
                Some(entry) => entry.count = entry.count.saturating_add(1),
                None => fan_reactions.push(ReactionCount {
                    emoji: reaction.to_string(),
                    count: 1,
                }),
            }
            Match {
                fan_reactions,
                ..m.clone()
            }
        })
    }

    pub fn like_post(&self, post_id: &str) -> AppData {
        self.replace_post(post_id, |p| SocialPost {
            likes: p.likes.saturating_add(1),
            ..p.clone()
        })
    }

    /// Bumps the comment counter. The text itself is only echoed by the view.
    pub fn comment_on_post(&self, post_id: &str, _text: &str) -> AppData {
        self.replace_post(post_id, |p| SocialPost {
            comments: p.comments.saturating_add(1),
            ..p.clone()
        })
    }

    fn replace_match(&self, match_id: &str, update: impl FnOnce(&Match) -> Match) -> AppData {
        let Some(idx) = self.matches.iter().position(|m| m.id == match_id) else {
            return self.clone();
        };
        let mut matches = Vec::with_capacity(self.matches.len());
        matches.extend_from_slice(&self.matches[..idx]);
        matches.push(update(&self.matches[idx]));
        matches.extend_from_slice(&self.matches[idx + 1..]);
        AppData {
            matches: Arc::new(matches),
            ..self.clone()
        }
    }

    fn replace_post(&self, post_id: &str, update: impl FnOnce(&SocialPost) -> SocialPost) -> AppData {
        let Some(idx) = self.social_posts.iter().position(|p| p.id == post_id) else {
            return self.clone();
        };
        let mut posts = Vec::with_capacity(self.social_posts.len());
        posts.extend_from_slice(&self.social_posts[..idx]);
        posts.push(update(&self.social_posts[idx]));
        posts.extend_from_slice(&self.social_posts[idx + 1..]);
        AppData {
            social_posts: Arc::new(posts),
            ..self.clone()
        }
    }
}
