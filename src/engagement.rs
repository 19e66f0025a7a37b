use std::collections::HashMap;

use crate::models::{FanLeaderboardEntry, Match, MatchStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementTab {
    Leaderboard,
    Polls,
    Predictions,
    Challenges,
}

impl EngagementTab {
    pub fn next(self) -> Self {
        match self {
            EngagementTab::Leaderboard => EngagementTab::Polls,
            EngagementTab::Polls => EngagementTab::Predictions,
            EngagementTab::Predictions => EngagementTab::Challenges,
            EngagementTab::Challenges => EngagementTab::Leaderboard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EngagementTab::Leaderboard => "Leaderboard",
            EngagementTab::Polls => "Polls",
            EngagementTab::Predictions => "Predictions",
            EngagementTab::Challenges => "Challenges",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    pub name: String,
    pub votes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
}

impl Poll {
    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|o| o.votes).sum()
    }

    /// Rounded share per option; all zero when nobody has voted yet.
    pub fn percentages(&self) -> Vec<u32> {
        let total = self.total_votes();
        self.options
            .iter()
            .map(|o| {
                if total == 0 {
                    0
                } else {
                    ((f64::from(o.votes) * 100.0) / f64::from(total)).round() as u32
                }
            })
            .collect()
    }
}

/// Polls plus the one-vote-per-poll ledger of the local fan.
#[derive(Debug, Clone, Default)]
pub struct PollBook {
    pub polls: Vec<Poll>,
    voted: HashMap<String, usize>,
}

impl PollBook {
    pub fn new(polls: Vec<Poll>) -> Self {
        Self {
            polls,
            voted: HashMap::new(),
        }
    }

    pub fn has_voted(&self, poll_id: &str) -> bool {
        self.voted.contains_key(poll_id)
    }

    pub fn choice(&self, poll_id: &str) -> Option<usize> {
        self.voted.get(poll_id).copied()
    }

    /// Returns `false` for repeat votes, unknown polls and out-of-range options.
    pub fn vote(&mut self, poll_id: &str, option: usize) -> bool {
        if self.has_voted(poll_id) {
            return false;
        }
        let Some(poll) = self.polls.iter_mut().find(|p| p.id == poll_id) else {
            return false;
        };
        let Some(opt) = poll.options.get_mut(option) else {
            return false;
        };
        opt.votes = opt.votes.saturating_add(1);
        self.voted.insert(poll_id.to_string(), option);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictedWinner {
    Home,
    Draw,
    Away,
}

impl PredictedWinner {
    pub fn next(self) -> Self {
        match self {
            PredictedWinner::Home => PredictedWinner::Draw,
            PredictedWinner::Draw => PredictedWinner::Away,
            PredictedWinner::Away => PredictedWinner::Home,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PredictedWinner::Home => "Home",
            PredictedWinner::Draw => "Draw",
            PredictedWinner::Away => "Away",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub winner: PredictedWinner,
    pub score: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Default)]
pub struct PredictionSlip {
    entries: HashMap<String, Prediction>,
}

impl PredictionSlip {
    /// Later predictions for the same match replace earlier ones.
    pub fn predict(&mut self, match_id: &str, winner: PredictedWinner, score: Option<(u32, u32)>) {
        self.entries
            .insert(match_id.to_string(), Prediction { winner, score });
    }

    pub fn get(&self, match_id: &str) -> Option<&Prediction> {
        self.entries.get(match_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const PREDICTION_CANDIDATES: usize = 5;

pub fn prediction_candidates<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Vec<&'a Match> {
    matches
        .into_iter()
        .filter(|m| m.status == MatchStatus::Scheduled)
        .take(PREDICTION_CANDIDATES)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: u32,
    pub total: u32,
    pub reward: String,
}

impl Challenge {
    pub fn progress_pct(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((f64::from(self.progress) * 100.0) / f64::from(self.total)).round() as u32
    }
}

/// Points descending; the sort is stable so equal scores keep seed order.
pub fn leaderboard(entries: &[FanLeaderboardEntry]) -> Vec<&FanLeaderboardEntry> {
    let mut out: Vec<&FanLeaderboardEntry> = entries.iter().collect();
    out.sort_by(|a, b| b.points.cmp(&a.points));
    out
}

pub const BADGES: &[(&str, &str)] = &[
    ("Super Fan", "⭐"),
    ("Predictor", "🔮"),
    ("Quiz Master", "🧠"),
    ("Photo King", "📸"),
    ("Match Analyst", "📊"),
];

pub fn badge_icon(name: &str) -> &'static str {
    BADGES
        .iter()
        .find(|(badge, _)| *badge == name)
        .map(|(_, icon)| *icon)
        .unwrap_or("🏅")
}

pub fn default_polls() -> Vec<Poll> {
    vec![
        Poll {
            id: "1".to_string(),
            question: "Who will be the tournament MVP?".to_string(),
            options: vec![
                option("John Smith", 67),
                option("Alex Brown", 52),
                option("James Wilson", 30),
            ],
        },
        Poll {
            id: "2".to_string(),
            question: "Best goal of the day?".to_string(),
            options: vec![
                option("Thunder Hawks vs Fire Dragons (Goal 1)", 89),
                option("Storm Eagles buzzer beater", 45),
                option("Ice Wolves comeback goal", 38),
            ],
        },
    ]
}

fn option(name: &str, votes: u32) -> PollOption {
    PollOption {
        name: name.to_string(),
        votes,
    }
}

pub fn default_challenges() -> Vec<Challenge> {
    vec![
        challenge("1", "Perfect Predictor", "Predict 5 match results correctly", 3, 5, "250 points"),
        challenge("2", "Photo Enthusiast", "Upload 10 photos to the gallery", 7, 10, "150 points + Badge"),
        challenge(
            "3",
            "Super Fan",
            "React to 20 different matches",
            12,
            20,
            "300 points + Special Badge",
        ),
    ]
}

fn challenge(
    id: &str,
    title: &str,
    description: &str,
    progress: u32,
    total: u32,
    reward: &str,
) -> Challenge {
    Challenge {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        progress,
        total,
        reward: reward.to_string(),
    }
}
