use crate::core::camera::components::MainCamera;
use crate::core::camera::logic::{CameraInput, calculate_camera_transform};
use bevy::ecs::message::MessageReader;
use bevy::input::ButtonInput;
use bevy::input::mouse::MouseWheel;
use bevy::log::info;
use bevy::prelude::{
    Camera2d, Commands, KeyCode, Projection, Query, Res, Time, Transform, With,
};

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 80.0, 0.0), MainCamera));

    info!("Camera spawned");
}

pub fn camera_control(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    time: Res<Time>,
    mut camera_q: Query<(&mut Transform, &mut Projection), With<MainCamera>>,
) {
    let Ok((mut transform, mut projection)) = camera_q.single_mut() else {
        return;
    };
    let Projection::Orthographic(orthographic) = projection.as_mut() else {
        return;
    };

    let input = CameraInput {
        move_up: keyboard_input.pressed(KeyCode::KeyW),
        move_down: keyboard_input.pressed(KeyCode::KeyS),
        move_left: keyboard_input.pressed(KeyCode::KeyA),
        move_right: keyboard_input.pressed(KeyCode::KeyD),
        sprint: keyboard_input.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        mouse_wheel_delta: mouse_wheel.read().map(|event| event.y).sum(),
    };

    let update = calculate_camera_transform(
        transform.translation,
        orthographic.scale,
        &input,
        time.delta_secs(),
    );
    transform.translation = update.translation;
    orthographic.scale = update.scale;
}
