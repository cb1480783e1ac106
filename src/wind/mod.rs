pub mod components;
pub mod events;
pub mod resources;
pub mod sink;
pub mod systems;
pub mod ui;
pub mod wind_material;

use crate::wind::components::*;
use crate::wind::events::*;
use crate::wind::resources::*;
use crate::wind::systems::*;
use crate::wind::wind_material::WindSpriteMaterial;
use bevy::prelude::*;
use bevy::sprite_render::Material2dPlugin;

/// Drives the wind simulation and feeds it to [`WindSpriteMaterial`] sprites.
pub struct WindPlugin;

impl Plugin for WindPlugin {
    fn build(&self, app: &mut App) {
        let settings = WindSettings::default();
        let mut rng = SimulationRng::new(settings.config.seed);
        let simulation = WindSimulation::new(&settings.config, &mut rng.0);

        app.add_plugins(Material2dPlugin::<WindSpriteMaterial>::default())
            .register_type::<WindZone>()
            .register_type::<WindIndexer>()
            .register_type::<WindIndex>()
            .add_message::<ReloadWindConfig>()
            .add_message::<SaveWindConfig>()
            .insert_resource(settings)
            .insert_resource(rng)
            .insert_resource(simulation)
            .init_resource::<PublishedWind>()
            .add_systems(Startup, spawn_wind_zone)
            .add_systems(
                Update,
                (
                    request_config_reload,
                    reload_wind_config,
                    save_wind_config,
                    apply_wind_settings,
                    assign_wind_indices,
                    tick_wind_simulation,
                )
                    .chain(),
            );
    }
}
