use std::env;
use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::state::Page;

pub const DEFAULT_LEAGUE_ID: &str = "lira-gala";

/// Runtime knobs, read from the environment after `.env` files are loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub initial_league: String,
    pub initial_page: Page,
    pub ticker_interval: Duration,
    pub cheer_interval: Duration,
    pub counter_duration: Duration,
    pub counter_steps: u32,
    pub tick_rate: Duration,
    pub today: NaiveDate,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let initial_league = lookup("GALA_LEAGUE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LEAGUE_ID.to_string());
        let initial_page = lookup("GALA_PAGE")
            .and_then(|v| Page::from_name(&v))
            .unwrap_or(Page::Home);
        let secs = |key: &str, default: u64, min: u64| {
            lookup(key)
                .and_then(|val| val.trim().parse::<u64>().ok())
                .unwrap_or(default)
                .max(min)
        };
        let today = lookup("GALA_TODAY")
            .and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
            .unwrap_or_else(|| Local::now().date_naive());

        Self {
            initial_league,
            initial_page,
            ticker_interval: Duration::from_secs(secs("GALA_TICKER_SECS", 4, 1)),
            cheer_interval: Duration::from_secs(secs("GALA_CHEER_SECS", 3, 1)),
            counter_duration: Duration::from_millis(secs("GALA_COUNTER_MS", 2000, 100)),
            counter_steps: secs("GALA_COUNTER_STEPS", 60, 1).min(u64::from(u32::MAX)) as u32,
            tick_rate: Duration::from_millis(secs("GALA_TICK_MS", 250, 50)),
            today,
        }
    }
}
