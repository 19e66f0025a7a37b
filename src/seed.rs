use anyhow::{Context, Result, bail};

use crate::store::{AppData, SeedData};

pub const SEED_JSON: &str = include_str!("../data/gala_seed.json");

/// The bundled tournament dataset.
pub fn seed_app_data() -> Result<AppData> {
    parse_app_data_json(SEED_JSON).context("bundled seed dataset is invalid")
}

pub fn parse_app_data_json(raw: &str) -> Result<AppData> {
    let seed: SeedData = serde_json::from_str(raw).context("parse seed json")?;
    validate(&seed)?;
    Ok(AppData::from(seed))
}

// Dangling team references would render as blank match rows.
fn validate(seed: &SeedData) -> Result<()> {
    for m in &seed.matches {
        for team_id in [&m.home_team_id, &m.away_team_id] {
            if !seed.teams.iter().any(|t| &t.id == team_id) {
                bail!("match {} references unknown team {}", m.id, team_id);
            }
        }
    }
    Ok(())
}
