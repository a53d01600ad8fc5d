//! Match settings
//!
//! Loaded from a JSON file. Physics constants are fixed and not part of it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{BotStrategy, ControllerVariant};

/// Errors loading match settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Default bout length: one minute at 60 Hz
const DEFAULT_MAX_TICKS: u32 = 60 * 60;

/// Match settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// RNG seed for the bot (random when absent)
    pub seed: Option<u64>,
    /// Bot strategy at the start of the match
    pub strategy: BotStrategy,
    /// Controller state machine shape
    pub controller_variant: ControllerVariant,
    /// Whether the bot drives the west wrestler
    pub bot_controls_west: bool,
    /// Bout is abandoned after this many ticks
    pub max_ticks: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            seed: None,
            strategy: BotStrategy::Chaser,
            controller_variant: ControllerVariant::ThreeState,
            bot_controls_west: true,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

impl MatchSettings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_ticks == 0 {
            return Err(SettingsError::Invalid("max_ticks must be positive".to_string()));
        }
        Ok(())
    }
}
