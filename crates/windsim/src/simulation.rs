use crate::buffer::WindHistoryBuffer;
use crate::config::WindConfig;
use crate::direction::WindDirectionController;
use crate::params::{ParameterSink, WindSource};
use glam::{Vec2, Vec4};
use rand::Rng;

/// Per-frame wind driver: steers the wind source, samples it and feeds the
/// history buffer.
#[derive(Debug, Clone)]
pub struct WindSimulation {
    pub direction: WindDirectionController,
    pub history: WindHistoryBuffer,
}

impl WindSimulation {
    pub fn new<R: Rng + ?Sized>(config: &WindConfig, rng: &mut R) -> Self {
        Self {
            direction: WindDirectionController::new(config.direction.clone(), rng),
            history: WindHistoryBuffer::new(config.buffer.decay_seconds),
        }
    }

    /// Runs one frame and publishes the history to `sink`. Returns the wind
    /// vector recorded in the live slot.
    ///
    /// Without a wind source the rotation still advances but the recorded wind
    /// is zero.
    pub fn tick<R, S>(
        &mut self,
        delta_time: f32,
        rng: &mut R,
        mut zone: Option<&mut dyn WindSource>,
        sink: &mut S,
    ) -> Vec4
    where
        R: Rng + ?Sized,
        S: ParameterSink + ?Sized,
    {
        let rotation = self.direction.tick(delta_time, rng);

        let wind = match zone.as_deref_mut() {
            Some(zone) => {
                zone.set_rotation(rotation);
                wind_vector(zone)
            }
            None => Vec4::ZERO,
        };

        self.history.tick(delta_time, wind, sink);
        wind
    }

    /// Applies reloaded timing values without resetting the running state.
    pub fn apply_config(&mut self, config: &WindConfig) {
        self.direction.apply_config(config.direction.clone());
        self.history.set_decay_seconds(config.buffer.decay_seconds);
    }
}

/// Projects the source's forward direction onto screen-right and scales it by
/// the source strength. Wind is strongest when it blows along the horizontal,
/// which is what reads best in a side-on 2D scene.
pub fn wind_vector(zone: &dyn WindSource) -> Vec4 {
    let attenuation = zone.forward().truncate().dot(Vec2::X);
    let wind = Vec2::X * zone.strength() * attenuation;
    wind.extend(0.0).extend(0.0)
}
