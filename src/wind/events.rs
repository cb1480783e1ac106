use bevy::prelude::*;

/// Re-read the wind config file and apply it to the running simulation.
#[derive(Message)]
pub struct ReloadWindConfig;

/// Write the current wind config back to its file.
#[derive(Message)]
pub struct SaveWindConfig;
