use bevy::math::Vec3;

pub const PAN_SPEED: f32 = 300.0;
pub const SPRINT_MULTIPLIER: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.1;
pub const MIN_SCALE: f32 = 0.25;
pub const MAX_SCALE: f32 = 4.0;

pub struct CameraInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub sprint: bool,
    pub mouse_wheel_delta: f32,
}

pub struct CameraTransformUpdate {
    pub translation: Vec3,
    pub scale: f32,
}

/// Calculate 2D camera pan and zoom from input.
/// Panning is scaled by the zoom level so it feels the same on screen at any zoom.
pub fn calculate_camera_transform(
    current_translation: Vec3,
    current_scale: f32,
    input: &CameraInput,
    delta_time: f32,
) -> CameraTransformUpdate {
    let mut translation = current_translation;

    let mut speed = PAN_SPEED * current_scale;
    if input.sprint {
        speed *= SPRINT_MULTIPLIER;
    }

    let mut dir = Vec3::ZERO;
    if input.move_up {
        dir += Vec3::Y;
    }
    if input.move_down {
        dir -= Vec3::Y;
    }
    if input.move_left {
        dir -= Vec3::X;
    }
    if input.move_right {
        dir += Vec3::X;
    }
    if dir.length_squared() > 0.0 {
        translation += dir.normalize() * speed * delta_time;
    }

    // Scrolling up zooms in
    let scale = (current_scale * (1.0 - input.mouse_wheel_delta * ZOOM_STEP)).clamp(MIN_SCALE, MAX_SCALE);

    CameraTransformUpdate { translation, scale }
}
