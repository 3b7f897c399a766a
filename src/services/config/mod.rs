pub mod models;

pub use models::*;

use crate::database::settings_repo;
use crate::types::errors::AffinityResult;
use sqlx::SqlitePool;

/// `app_settings` key holding the serialized [`MatchConfig`].
pub const MATCH_CONFIG_KEY: &str = "matching";

impl MatchConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> AffinityResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from the settings table. A missing row, a database error or a
    /// malformed value all fall back to the defaults.
    pub async fn load(pool: &SqlitePool) -> Self {
        let raw = match settings_repo::get_setting(pool, MATCH_CONFIG_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::error!("Failed to load matching settings from DB: {e}");
                return Self::default();
            }
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Malformed matching settings, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub async fn save(&self, pool: &SqlitePool) -> AffinityResult<()> {
        let json = serde_json::to_string(self)?;
        settings_repo::set_setting(pool, MATCH_CONFIG_KEY, &json).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
