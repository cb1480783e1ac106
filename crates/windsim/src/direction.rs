use crate::config::{DirectionConfig, EvaluatePolicy};
use crate::tools::random_between;
use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

/// Target-seeking wind rotation.
///
/// Every evaluation period a new target orientation is drawn and the wind slews
/// toward it from the previous target over a random rotation period. Both timers
/// carry their remainder into the next period instead of resetting to zero. A
/// rotation cut short leaves a negative remainder, which holds the wind at the
/// new start until the timer climbs back above zero.
#[derive(Debug, Clone, PartialEq)]
pub struct WindDirectionController {
    config: DirectionConfig,
    rotation_start: Quat,
    rotation_target: Quat,
    rotation: Quat,
    evaluate_timer: f32,
    evaluate_seconds: f32,
    rotate_timer: f32,
    rotate_seconds: f32,
}

impl WindDirectionController {
    /// Starts at the identity rotation with the first target already drawn, so
    /// the wind begins turning on the first tick.
    pub fn new<R: Rng + ?Sized>(config: DirectionConfig, rng: &mut R) -> Self {
        let mut controller = Self {
            config,
            rotation_start: Quat::IDENTITY,
            rotation_target: Quat::IDENTITY,
            rotation: Quat::IDENTITY,
            evaluate_timer: 0.0,
            evaluate_seconds: 0.0,
            rotate_timer: 0.0,
            rotate_seconds: 0.0,
        };
        controller.retarget(rng);
        controller
    }

    /// Advances both timers by `delta_time` and returns the new orientation.
    ///
    /// A zero `delta_time` never retargets, even with a zero evaluation period.
    pub fn tick<R: Rng + ?Sized>(&mut self, delta_time: f32, rng: &mut R) -> Quat {
        if delta_time > 0.0
            && advance_timer(delta_time, &mut self.evaluate_timer, self.evaluate_seconds)
        {
            self.retarget(rng);
        }

        // The rotate timer stops once it reaches its duration, otherwise it would
        // keep accumulating through the rest of the evaluation period.
        let rotation_finished = self.rotate_timer >= self.rotate_seconds
            || advance_timer(delta_time, &mut self.rotate_timer, self.rotate_seconds);

        self.rotation = if rotation_finished {
            self.rotation_target
        } else {
            // a negative carry holds at the start, including over a zero duration
            let fraction = if self.rotate_seconds > 0.0 {
                (self.rotate_timer / self.rotate_seconds).clamp(0.0, 1.0)
            } else {
                0.0
            };
            self.rotation_start.slerp(self.rotation_target, fraction)
        };
        self.rotation
    }

    /// Replaces the timing ranges. Current timers are left alone; the new ranges
    /// apply from the next retarget.
    pub fn apply_config(&mut self, config: DirectionConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &DirectionConfig {
        &self.config
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn rotation_start(&self) -> Quat {
        self.rotation_start
    }

    pub fn rotation_target(&self) -> Quat {
        self.rotation_target
    }

    /// Forward vector of the current orientation.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Fraction of the current rotation already covered, in `[0, 1]`.
    pub fn rotate_progress(&self) -> f32 {
        if self.rotate_timer >= self.rotate_seconds {
            1.0
        } else {
            (self.rotate_timer / self.rotate_seconds).max(0.0)
        }
    }

    fn retarget<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rotation_start = self.rotation_target;

        let pitch = random_between(rng, self.config.pitch_range());
        self.rotation_target = Quat::from_euler(
            EulerRot::YXZ,
            self.config.yaw_degrees.to_radians(),
            pitch.to_radians(),
            0.0,
        );

        self.rotate_timer -= self.rotate_seconds;
        self.rotate_seconds = random_between(rng, self.config.rotate_range());

        self.evaluate_timer -= self.evaluate_seconds;
        self.evaluate_seconds = random_between(rng, self.config.evaluate_range());
        if self.config.evaluate_policy == EvaluatePolicy::IncludeRotation {
            self.evaluate_seconds += self.rotate_seconds;
        }

        log::debug!(
            "Wind retargeted: pitch {:.1} deg, rotate {:.2}s, evaluate {:.2}s",
            pitch,
            self.rotate_seconds,
            self.evaluate_seconds
        );
    }
}

/// Adds `delta_time` to `timer` and reports whether it reached `seconds`.
fn advance_timer(delta_time: f32, timer: &mut f32, seconds: f32) -> bool {
    *timer += delta_time;
    *timer >= seconds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::seeded_rng;
    use rstest::rstest;

    fn config(evaluate: f32, rotate: f32, policy: EvaluatePolicy) -> DirectionConfig {
        DirectionConfig {
            evaluate_seconds_min: evaluate,
            evaluate_seconds_max: evaluate,
            rotate_seconds_min: rotate,
            rotate_seconds_max: rotate,
            evaluate_policy: policy,
            ..DirectionConfig::default()
        }
    }

    fn quat_close(a: Quat, b: Quat) -> bool {
        // q and -q are the same rotation
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn test_new_starts_at_identity_with_target_drawn() {
        let mut rng = seeded_rng(Some(11));
        let controller = WindDirectionController::new(DirectionConfig::default(), &mut rng);

        assert_eq!(controller.rotation(), Quat::IDENTITY);
        assert_eq!(controller.rotation_start(), Quat::IDENTITY);
        assert!(controller.rotation_target().is_normalized());
    }

    #[test]
    fn test_targets_stay_in_xy_plane() {
        let mut rng = seeded_rng(Some(5));
        let mut controller = WindDirectionController::new(config(0.5, 0.25, EvaluatePolicy::IncludeRotation), &mut rng);

        for _ in 0..200 {
            controller.tick(0.25, &mut rng);
            let forward = controller.rotation_target() * Vec3::Z;
            assert!(forward.z.abs() < 1e-5, "forward was {:?}", forward);
            // pitch in [-180, 0] keeps the wind on the upper half
            assert!(forward.y >= -1e-5, "forward was {:?}", forward);
        }
    }

    #[rstest]
    #[case(0.5, 4)]
    #[case(0.25, 8)]
    #[case(0.125, 16)]
    fn test_exact_target_after_full_rotation(#[case] delta_time: f32, #[case] ticks: usize) {
        let mut rng = seeded_rng(Some(42));
        let mut controller = WindDirectionController::new(config(5.0, 2.0, EvaluatePolicy::IncludeRotation), &mut rng);
        let target = controller.rotation_target();

        for _ in 0..ticks - 1 {
            let rotation = controller.tick(delta_time, &mut rng);
            assert_ne!(rotation, target);
        }
        let rotation = controller.tick(delta_time, &mut rng);

        assert_eq!(rotation, target);
        assert_eq!(controller.rotate_progress(), 1.0);
    }

    #[test]
    fn test_rotation_holds_target_without_overshoot() {
        let mut rng = seeded_rng(Some(8));
        let mut controller = WindDirectionController::new(config(10.0, 1.0, EvaluatePolicy::IncludeRotation), &mut rng);
        let target = controller.rotation_target();

        for _ in 0..40 {
            controller.tick(0.25, &mut rng);
        }

        assert_eq!(controller.rotation(), target);
        assert_eq!(controller.rotate_timer, 1.0);
    }

    #[test]
    fn test_halfway_is_slerp_midpoint() {
        let mut rng = seeded_rng(Some(3));
        let mut controller = WindDirectionController::new(config(5.0, 2.0, EvaluatePolicy::IncludeRotation), &mut rng);
        let start = controller.rotation_start();
        let target = controller.rotation_target();

        let rotation = controller.tick(1.0, &mut rng);

        assert!(quat_close(rotation, start.slerp(target, 0.5)));
        assert_eq!(controller.rotate_progress(), 0.5);
    }

    #[test]
    fn test_zero_rotate_duration_snaps_to_target() {
        let mut rng = seeded_rng(Some(9));
        let mut controller = WindDirectionController::new(config(1.0, 0.0, EvaluatePolicy::IncludeRotation), &mut rng);
        let target = controller.rotation_target();

        let rotation = controller.tick(0.0, &mut rng);

        assert_eq!(rotation, target);
        assert!(rotation.is_finite());
    }

    #[rstest]
    #[case(DirectionConfig::default())]
    #[case(config(0.0, 0.0, EvaluatePolicy::Independent))]
    #[case(config(0.0, 0.0, EvaluatePolicy::IncludeRotation))]
    #[case(config(0.0, 1.0, EvaluatePolicy::Independent))]
    fn test_zero_delta_ticks_change_nothing(#[case] direction: DirectionConfig) {
        let mut rng = seeded_rng(Some(21));
        let mut controller = WindDirectionController::new(direction, &mut rng);
        controller.tick(0.1, &mut rng);
        let before = controller.clone();

        for _ in 0..8 {
            controller.tick(0.0, &mut rng);
        }

        assert_eq!(controller, before);
    }

    #[rstest]
    #[case(EvaluatePolicy::IncludeRotation, 5.0)]
    #[case(EvaluatePolicy::Independent, 3.0)]
    fn test_evaluate_policy_duration(#[case] policy: EvaluatePolicy, #[case] expected: f32) {
        let mut rng = seeded_rng(Some(1));
        let controller = WindDirectionController::new(config(3.0, 2.0, policy), &mut rng);

        assert_eq!(controller.evaluate_seconds, expected);
        assert_eq!(controller.rotate_seconds, 2.0);
    }

    #[test]
    fn test_retarget_carries_timer_overshoot() {
        let mut rng = seeded_rng(Some(17));
        // evaluation period = 1.0 + 0.5
        let mut controller = WindDirectionController::new(config(1.0, 0.5, EvaluatePolicy::IncludeRotation), &mut rng);
        let first_target = controller.rotation_target();

        for _ in 0..3 {
            controller.tick(0.375, &mut rng);
        }
        // rotation finished on the second tick and froze at 0.75
        assert_eq!(controller.rotate_timer, 0.75);
        assert_eq!(controller.evaluate_timer, 1.125);

        controller.tick(0.375, &mut rng);

        assert_eq!(controller.rotation_start(), first_target);
        assert_eq!(controller.evaluate_timer, 0.0);
        // 0.25 carried from the previous rotation plus this tick
        assert_eq!(controller.rotate_timer, 0.625);
        assert_eq!(controller.rotation(), controller.rotation_target());
    }

    #[test]
    fn test_retarget_mid_rotation_starts_from_previous_target() {
        let mut rng = seeded_rng(Some(4));
        let mut controller = WindDirectionController::new(config(1.0, 4.0, EvaluatePolicy::Independent), &mut rng);

        controller.tick(0.5, &mut rng);
        let old_target = controller.rotation_target();
        let rotation = controller.tick(0.5, &mut rng);

        // evaluation expired an eighth of the way through the rotation:
        // 0.5 - 4.0 carried, then this tick's 0.5 added
        assert_eq!(controller.rotation_start(), old_target);
        assert_eq!(controller.rotate_timer, -3.0);
        assert_eq!(controller.rotate_progress(), 0.0);
        assert!(quat_close(rotation, old_target));
    }

    #[test]
    fn test_negative_carry_climbs_back_before_turning() {
        let mut rng = seeded_rng(Some(14));
        let mut controller = WindDirectionController::new(config(0.5, 1.0, EvaluatePolicy::Independent), &mut rng);
        let first_target = controller.rotation_target();

        controller.tick(0.5, &mut rng);
        assert_eq!(controller.rotate_timer, -0.5);
        assert!(quat_close(controller.rotation(), first_target));

        controller.apply_config(config(10.0, 1.0, EvaluatePolicy::Independent));
        controller.tick(0.5, &mut rng);
        let start = controller.rotation_start();
        let target = controller.rotation_target();
        assert_eq!(controller.rotate_timer, -1.0);

        controller.tick(1.5, &mut rng);
        assert_eq!(controller.rotate_timer, 0.5);
        assert!(quat_close(controller.rotation(), start.slerp(target, 0.5)));
    }

    #[rstest]
    #[case(0.25, 4, 0.0)]
    #[case(0.3, 4, 0.2)]
    #[case(0.4, 3, 0.2)]
    fn test_zero_evaluate_range_retargets_from_previous_target(
        #[case] delta_time: f32,
        #[case] ticks: usize,
        #[case] expected_rotate_timer: f32,
    ) {
        let mut rng = seeded_rng(Some(23));
        // evaluation period equals the one second rotation
        let mut controller = WindDirectionController::new(config(0.0, 1.0, EvaluatePolicy::IncludeRotation), &mut rng);

        for _ in 0..ticks - 1 {
            controller.tick(delta_time, &mut rng);
        }
        let previous_target = controller.rotation_target();
        let rotate_timer_before = controller.rotate_timer;
        assert!(rotate_timer_before < 1.0);

        let rotation = controller.tick(delta_time, &mut rng);

        assert_eq!(controller.rotation_start(), previous_target);
        assert!(
            (controller.rotate_timer - expected_rotate_timer).abs() < 1e-5,
            "rotate timer was {}",
            controller.rotate_timer
        );
        assert!((controller.rotate_timer - (rotate_timer_before - 1.0 + delta_time)).abs() < 1e-6);
        assert!(quat_close(
            rotation,
            previous_target.slerp(controller.rotation_target(), controller.rotate_timer)
        ));
    }

    #[test]
    fn test_apply_config_takes_effect_on_next_retarget() {
        let mut rng = seeded_rng(Some(12));
        let mut controller = WindDirectionController::new(config(1.0, 1.0, EvaluatePolicy::Independent), &mut rng);

        controller.apply_config(config(6.0, 3.0, EvaluatePolicy::Independent));
        assert_eq!(controller.rotate_seconds, 1.0);

        controller.tick(1.0, &mut rng);
        assert_eq!(controller.rotate_seconds, 3.0);
        assert_eq!(controller.evaluate_seconds, 6.0);
    }

    #[test]
    fn test_same_seed_same_rotations() {
        let mut rng_a = seeded_rng(Some(99));
        let mut rng_b = seeded_rng(Some(99));
        let mut a = WindDirectionController::new(DirectionConfig::default(), &mut rng_a);
        let mut b = WindDirectionController::new(DirectionConfig::default(), &mut rng_b);

        for _ in 0..500 {
            assert_eq!(a.tick(1.0 / 60.0, &mut rng_a), b.tick(1.0 / 60.0, &mut rng_b));
        }
    }
}
