//! Game settings chosen on the home screen.
//!
//! Held in memory for the lifetime of the process; a JSON form exists so a
//! front end can ship defaults in a file.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz_engine::{DifficultyLevel, GenerationRequest};

/// Batch sizes offered on the home screen.
pub const ALLOWED_EXERCISE_COUNTS: [usize; 3] = [5, 10, 20];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("exercise count {0} is not one of 5, 10 or 20")]
    UnsupportedCount(usize),

    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub difficulty: DifficultyLevel,
    pub exercise_count: usize,

    // === Timing ===
    /// Pause after an answer before moving on.
    pub feedback_delay_ms: u64,
    /// How long the splash screen stays up.
    pub splash_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: DifficultyLevel::Easy,
            exercise_count: 10,
            feedback_delay_ms: 1500,
            splash_ms: 2500,
        }
    }
}

impl GameSettings {
    /// Parse and validate settings. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !ALLOWED_EXERCISE_COUNTS.contains(&self.exercise_count) {
            return Err(SettingsError::UnsupportedCount(self.exercise_count));
        }
        if self.feedback_delay_ms == 0 {
            return Err(SettingsError::ZeroDuration { name: "feedback_delay_ms" });
        }
        if self.splash_ms == 0 {
            return Err(SettingsError::ZeroDuration { name: "splash_ms" });
        }
        Ok(())
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    /// Generation request for the selected difficulty and count.
    pub fn generation_request(&self, rng_seed: Option<u64>) -> GenerationRequest {
        GenerationRequest {
            rng_seed,
            ..GenerationRequest::new(self.exercise_count, self.difficulty)
        }
    }
}
