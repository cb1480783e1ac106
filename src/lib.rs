mod core;
mod scene;
pub mod wind;

use crate::core::camera::CameraPlugin;
use crate::scene::ScenePlugin;
use crate::wind::WindPlugin;
use crate::wind::ui::WindUiPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CameraPlugin, WindPlugin, WindUiPlugin, ScenePlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins((FrameTimeDiagnosticsPlugin::default(), LogDiagnosticsPlugin::default()));
        }
    }
}
