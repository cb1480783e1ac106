use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// How the evaluation period relates to the rotation it schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatePolicy {
    /// Each new evaluation period is extended by the freshly drawn rotation
    /// duration, so a rotation always finishes before the next target is picked.
    #[default]
    IncludeRotation,
    /// Evaluation periods are drawn on their own. A short period can pick a new
    /// target while the previous rotation is still in flight.
    Independent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindConfig {
    /// Seed for the simulation RNG. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    pub buffer: BufferConfig,
    pub direction: DirectionConfig,
    pub zone: ZoneConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Seconds for a history sample to move one slot. Zero shifts the whole
    /// buffer every tick with no smoothing.
    pub decay_seconds: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionConfig {
    pub evaluate_seconds_min: f32,
    pub evaluate_seconds_max: f32,
    pub rotate_seconds_min: f32,
    pub rotate_seconds_max: f32,
    /// Fixed rotation around Y. 90 degrees turns the wind plane into the XY
    /// plane of a 2D scene.
    pub yaw_degrees: f32,
    pub pitch_degrees_min: f32,
    pub pitch_degrees_max: f32,
    #[serde(default)]
    pub evaluate_policy: EvaluatePolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub strength: f32,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            seed: None,
            buffer: BufferConfig {
                decay_seconds: 0.25,
            },
            direction: DirectionConfig::default(),
            zone: ZoneConfig { strength: 1.0 },
        }
    }
}

impl Default for DirectionConfig {
    fn default() -> Self {
        Self {
            evaluate_seconds_min: 4.0,
            evaluate_seconds_max: 8.0,
            rotate_seconds_min: 1.0,
            rotate_seconds_max: 3.0,
            yaw_degrees: 90.0,
            pitch_degrees_min: -180.0,
            pitch_degrees_max: 0.0,
            evaluate_policy: EvaluatePolicy::IncludeRotation,
        }
    }
}

impl WindConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: WindConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loads the file at `path`, or returns the defaults when the file is missing
    /// or rejected.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Using default wind config, {} not loaded: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Checks the preconditions the simulation relies on: every duration is
    /// non-negative and every range has `min <= max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("buffer.decay_seconds", self.buffer.decay_seconds)?;
        self.direction.validate()?;
        non_negative("zone.strength", self.zone.strength)
    }
}

impl DirectionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("direction.evaluate_seconds_min", self.evaluate_seconds_min)?;
        non_negative("direction.rotate_seconds_min", self.rotate_seconds_min)?;
        ordered(
            "direction.evaluate_seconds",
            self.evaluate_seconds_min,
            self.evaluate_seconds_max,
        )?;
        ordered(
            "direction.rotate_seconds",
            self.rotate_seconds_min,
            self.rotate_seconds_max,
        )?;
        ordered(
            "direction.pitch_degrees",
            self.pitch_degrees_min,
            self.pitch_degrees_max,
        )
    }

    pub fn evaluate_range(&self) -> RangeInclusive<f32> {
        self.evaluate_seconds_min..=self.evaluate_seconds_max
    }

    pub fn rotate_range(&self) -> RangeInclusive<f32> {
        self.rotate_seconds_min..=self.rotate_seconds_max
    }

    pub fn pitch_range(&self) -> RangeInclusive<f32> {
        self.pitch_degrees_min..=self.pitch_degrees_max
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    // written this way so NaN is rejected too
    if !(value >= 0.0) {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

fn ordered(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if !(min <= max) {
        return Err(ConfigError::InvertedRange { name, min, max });
    }
    Ok(())
}
