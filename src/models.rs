use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Football,
    Volleyball,
    Netball,
    #[serde(rename = "Tug of War")]
    TugOfWar,
    Aerobics,
}

impl Sport {
    pub const ALL: [Sport; 5] = [
        Sport::Football,
        Sport::Volleyball,
        Sport::Netball,
        Sport::TugOfWar,
        Sport::Aerobics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Volleyball => "Volleyball",
            Sport::Netball => "Netball",
            Sport::TugOfWar => "Tug of War",
            Sport::Aerobics => "Aerobics",
        }
    }

    /// Case-insensitive match against the display label. `"all"` is not a sport.
    pub fn matches_name(self, name: &str) -> bool {
        self.label().eq_ignore_ascii_case(name.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    pub country: String,
    pub region: String,
    #[serde(default)]
    pub description: String,
    pub total_teams: u32,
    pub total_players: u32,
    pub founded_year: u16,
    pub rating: f32,
    pub rank_position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub color: String,
    pub sport: Sport,
    pub league_id: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    // Stored independently of W/D/L; never recomputed.
    pub points: u32,
    #[serde(default)]
    pub roster: Vec<String>,
    pub rating: f32,
    pub rank_position: u32,
}

impl Team {
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    pub fn win_percentage(&self) -> u32 {
        let played = self.played();
        if played == 0 {
            return 0;
        }
        ((f64::from(self.wins) * 100.0) / f64::from(played)).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo: String,
    pub team: String,
    pub team_id: String,
    pub league_id: String,
    pub position: String,
    pub goals: u32,
    pub assists: u32,
    pub mvp_votes: u32,
    pub is_fan_favorite: bool,
    #[serde(default)]
    pub bio: String,
    pub rating: f32,
    pub rank_position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Live,
    #[serde(rename = "FT")]
    FullTime,
    Scheduled,
    Postponed,
}

impl MatchStatus {
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Live => "Live",
            MatchStatus::FullTime => "FT",
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::Postponed => "Postponed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentaryKind {
    Goal,
    Card,
    Substitution,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentaryItem {
    pub id: String,
    pub time: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: CommentaryKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub sport: Sport,
    pub pitch: String,
    pub league_id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
    pub time: String,
    pub venue: String,
    pub date: String,
    #[serde(default)]
    pub commentary: Vec<CommentaryItem>,
    #[serde(default)]
    pub fan_reactions: Vec<ReactionCount>,
}

impl Match {
    pub fn reaction_count(&self, key: &str) -> u32 {
        self.fan_reactions
            .iter()
            .find(|r| r.emoji == key)
            .map(|r| r.count)
            .unwrap_or(0)
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Text,
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub avatar: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub comments: u32,
    #[serde(rename = "type")]
    pub kind: PostKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanLeaderboardEntry {
    pub id: String,
    pub name: String,
    pub points: u32,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrStats {
    pub people_screened: u32,
    pub donations_collected: u32,
    pub health_checks_completed: u32,
    pub wellness_participants: u32,
}
