use super::components::{WindIndex, WindIndexer, WindZone};
use super::events::{ReloadWindConfig, SaveWindConfig};
use super::resources::{PublishedWind, SimulationRng, WindSettings, WindSimulation};
use super::sink::{MaterialBlock, MaterialSink, ZoneSource};
use super::wind_material::WindSpriteMaterial;
use bevy::prelude::*;
use bevy::sprite_render::MeshMaterial2d;
use windsim::WindConfig;
use windsim::indexer::index_entity;
use windsim::params::WindSource;

pub fn spawn_wind_zone(mut commands: Commands, settings: Res<WindSettings>) {
    commands.spawn((
        Name::new("Wind Zone"),
        Transform::default(),
        WindZone {
            strength: settings.config.zone.strength,
        },
    ));
    info!("Wind zone spawned with strength {}", settings.config.zone.strength);
}

/// Gives every newly indexed sprite its own material carrying a random history
/// slot, keeping the colour and texture it was spawned with.
pub fn assign_wind_indices(
    mut commands: Commands,
    mut rng: ResMut<SimulationRng>,
    simulation: Res<WindSimulation>,
    mut materials: ResMut<Assets<WindSpriteMaterial>>,
    mut sprites: Query<(Entity, &mut MeshMaterial2d<WindSpriteMaterial>), Added<WindIndexer>>,
) {
    let buffer_length = simulation.history().len();
    for (entity, mut material) in &mut sprites {
        let mut block = MaterialBlock {
            handle: &mut material.0,
            materials: &mut materials,
        };
        let index = index_entity(&mut block, &mut rng.0, buffer_length);
        commands.entity(entity).insert(WindIndex(index));
    }
}

pub fn tick_wind_simulation(
    time: Res<Time>,
    mut simulation: ResMut<WindSimulation>,
    mut rng: ResMut<SimulationRng>,
    mut published: ResMut<PublishedWind>,
    mut materials: ResMut<Assets<WindSpriteMaterial>>,
    mut zones: Query<(&mut Transform, &WindZone)>,
) {
    // Only the first zone drives the wind.
    let mut source = zones.iter_mut().next().map(|(transform, zone)| ZoneSource {
        transform: transform.into_inner(),
        strength: zone.strength,
    });

    let mut sink = MaterialSink {
        materials: &mut materials,
        published: &mut published,
    };

    simulation.tick(
        time.delta_secs(),
        &mut rng.0,
        source.as_mut().map(|source| source as &mut dyn WindSource),
        &mut sink,
    );
}

pub fn request_config_reload(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut reload_events: MessageWriter<ReloadWindConfig>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        reload_events.write(ReloadWindConfig);
    }
}

pub fn reload_wind_config(
    mut events: MessageReader<ReloadWindConfig>,
    mut settings: ResMut<WindSettings>,
) {
    for _ in events.read() {
        match WindConfig::load_from_file(&settings.path) {
            Ok(config) => {
                info!("Wind config reloaded from {}", settings.path.display());
                settings.config = config;
            }
            Err(err) => warn!("Keeping current wind config, reload failed: {}", err),
        }
    }
}

pub fn save_wind_config(mut events: MessageReader<SaveWindConfig>, settings: Res<WindSettings>) {
    for _ in events.read() {
        match settings.config.save_to_file(&settings.path) {
            Ok(()) => info!("Wind config saved to {}", settings.path.display()),
            Err(err) => warn!("Failed to save wind config: {}", err),
        }
    }
}

/// Pushes edited or reloaded settings into the running simulation. Timers and
/// history are kept, so the wind does not jump.
pub fn apply_wind_settings(
    settings: Res<WindSettings>,
    mut simulation: ResMut<WindSimulation>,
    mut zones: Query<&mut WindZone>,
) {
    if !settings.is_changed() || settings.is_added() {
        return;
    }
    if let Err(err) = settings.config.validate() {
        warn!("Ignoring invalid wind settings: {}", err);
        return;
    }

    simulation.apply_config(&settings.config);
    for mut zone in &mut zones {
        zone.strength = settings.config.zone.strength;
    }
}
