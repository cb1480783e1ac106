use crate::constants::{BUFFER_LENGTH, WIND_VECTOR_ARRAY_PROPERTY};
use crate::params::ParameterSink;
use glam::Vec4;

/// Rolling history of wind vectors published to sprite shaders.
///
/// Index `N - 1` holds the live wind sample. Lower indices hold older samples
/// that drift one slot toward index 0 every `decay_seconds`; between shifts each
/// slot is blended toward its newer neighbour so the history moves smoothly.
#[derive(Debug, Clone, PartialEq)]
pub struct WindHistoryBuffer<const N: usize = BUFFER_LENGTH> {
    /// Published values, interpolated between `target` slots.
    current: [Vec4; N],
    /// Discretely shifted samples.
    target: [Vec4; N],
    decay_timer: f32,
    decay_seconds: f32,
}

impl<const N: usize> WindHistoryBuffer<N> {
    pub fn new(decay_seconds: f32) -> Self {
        const { assert!(N > 0, "wind history needs at least one slot") };
        Self {
            current: [Vec4::ZERO; N],
            target: [Vec4::ZERO; N],
            decay_timer: 0.0,
            decay_seconds,
        }
    }

    /// Advances the history by `delta_time`, records `wind` as the live sample
    /// and publishes the result.
    pub fn tick<S: ParameterSink + ?Sized>(&mut self, delta_time: f32, wind: Vec4, sink: &mut S) {
        self.advance(delta_time, wind);
        self.publish(sink);
    }

    /// Advances the history without publishing. Returns how many slots the
    /// targets moved.
    pub fn advance(&mut self, delta_time: f32, wind: Vec4) -> usize {
        let active = N - 1;

        // Count how many samples finished interpolating so we know how far to
        // shift. Whatever is left over stays on the timer.
        let shift = if self.decay_seconds > 0.0 {
            self.decay_timer += delta_time;
            let count = (self.decay_timer / self.decay_seconds).floor() as usize;
            self.decay_timer -= count as f32 * self.decay_seconds;
            count.min(active)
        } else {
            active
        };

        self.target[active] = wind;
        self.current[active] = wind;

        if shift > 0 {
            // Slots with nothing older to pull from collapse to the live sample.
            self.target.copy_within(shift.., 0);
            self.target[N - shift..active].fill(wind);
        }

        if self.decay_seconds > 0.0 {
            let t = self.decay_timer / self.decay_seconds;
            for i in 0..active {
                self.current[i] = self.target[i].lerp(self.target[i + 1], t);
            }
        } else {
            self.current[..active].copy_from_slice(&self.target[..active]);
        }

        shift
    }

    /// Writes the whole published array to `sink`. Publishing again before the
    /// next advance writes identical values.
    pub fn publish<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        sink.set_vector_array(WIND_VECTOR_ARRAY_PROPERTY, &self.current);
    }

    pub fn current(&self) -> &[Vec4; N] {
        &self.current
    }

    pub fn target(&self) -> &[Vec4; N] {
        &self.target
    }

    /// The live sample in the last slot.
    pub fn active(&self) -> Vec4 {
        self.current[N - 1]
    }

    pub fn decay_timer(&self) -> f32 {
        self.decay_timer
    }

    pub fn decay_seconds(&self) -> f32 {
        self.decay_seconds
    }

    pub fn set_decay_seconds(&mut self, decay_seconds: f32) {
        self.decay_seconds = decay_seconds;
        if decay_seconds <= 0.0 {
            self.decay_timer = 0.0;
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for WindHistoryBuffer<BUFFER_LENGTH> {
    fn default() -> Self {
        Self::new(0.0)
    }
}
