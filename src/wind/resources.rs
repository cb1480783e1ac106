use bevy::prelude::*;
use std::path::PathBuf;
use windsim::constants::{BUFFER_LENGTH, DEFAULT_CONFIG_PATH};
use windsim::params::{ParameterSink, WindSource};
use windsim::tools::{WindRng, seeded_rng};
use windsim::{WindConfig, WindDirectionController, WindHistoryBuffer};
use windsim::WindSimulation as CoreWindSimulation;

#[derive(Resource, Clone)]
pub struct WindSettings {
    pub config: WindConfig,
    pub path: PathBuf,
}

impl WindSettings {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = WindConfig::load_or_default(&path);
        Self { config, path }
    }
}

impl Default for WindSettings {
    fn default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}

/// Bevy-compatible wind simulation resource
#[derive(Resource, Clone)]
pub struct WindSimulation {
    inner: CoreWindSimulation,
}

impl WindSimulation {
    pub fn new(config: &WindConfig, rng: &mut WindRng) -> Self {
        let inner = CoreWindSimulation::new(config, rng);
        Self { inner }
    }

    pub fn tick<S: ParameterSink + ?Sized>(
        &mut self,
        delta_time: f32,
        rng: &mut WindRng,
        zone: Option<&mut dyn WindSource>,
        sink: &mut S,
    ) -> Vec4 {
        self.inner.tick(delta_time, rng, zone, sink)
    }

    pub fn apply_config(&mut self, config: &WindConfig) {
        self.inner.apply_config(config);
    }

    pub fn direction(&self) -> &WindDirectionController {
        &self.inner.direction
    }

    pub fn history(&self) -> &WindHistoryBuffer {
        &self.inner.history
    }
}

/// Seedable RNG shared by the simulation and the wind indexer.
#[derive(Resource)]
pub struct SimulationRng(pub WindRng);

impl SimulationRng {
    pub fn new(seed: Option<u64>) -> Self {
        Self(seeded_rng(seed))
    }
}

/// Last wind history array broadcast to the sprite materials.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PublishedWind {
    pub vectors: [Vec4; BUFFER_LENGTH],
}

impl Default for PublishedWind {
    fn default() -> Self {
        Self {
            vectors: [Vec4::ZERO; BUFFER_LENGTH],
        }
    }
}

impl PublishedWind {
    pub fn store(&mut self, values: &[Vec4]) {
        let count = values.len().min(BUFFER_LENGTH);
        self.vectors[..count].copy_from_slice(&values[..count]);
    }

    /// The live sample.
    pub fn active(&self) -> Vec4 {
        self.vectors[BUFFER_LENGTH - 1]
    }
}
