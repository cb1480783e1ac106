mod systems;

use crate::wind::ui::systems::*;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Side panel showing the live wind state, with editable settings.
pub struct WindUiPlugin;

impl Plugin for WindUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, render_wind_ui);
    }
}
