use thiserror::Error;

/// Errors raised while loading, saving or validating a [`crate::WindConfig`].
///
/// The per-frame tick never returns these; configuration is checked once before
/// it reaches the simulation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{name}: minimum {min} is greater than maximum {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    #[error("{name} must be a non-negative number, got {value}")]
    Negative { name: &'static str, value: f32 },
}
