use crate::wind::components::WindIndexer;
use crate::wind::wind_material::WindSpriteMaterial;
use bevy::prelude::*;
use bevy::sprite_render::MeshMaterial2d;
use rand::Rng;

const COLUMNS: usize = 60;
const ROWS: usize = 5;
const COLUMN_SPACING: f32 = 14.0;
const ROW_SPACING: f32 = 18.0;
const BLADE_WIDTH: f32 = 6.0;
const BLADE_HEIGHT: f32 = 60.0;

/// Demo field of grass blades that sway with the wind.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::linear_rgb(0.55, 0.75, 0.95)))
            .add_systems(Startup, spawn_grass_field);
    }
}

#[derive(Component)]
pub struct GrassBlade;

pub fn spawn_grass_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<WindSpriteMaterial>>,
) {
    let blade = meshes.add(Rectangle::new(BLADE_WIDTH, BLADE_HEIGHT));
    let mut rng = rand::rng();

    for row in 0..ROWS {
        for column in 0..COLUMNS {
            let x = (column as f32 - (COLUMNS as f32 - 1.0) / 2.0) * COLUMN_SPACING
                + rng.random_range(-4.0..4.0);
            let height = rng.random_range(0.7..1.3);
            // back rows sit higher on screen and further from the camera
            let y = row as f32 * ROW_SPACING + BLADE_HEIGHT * height / 2.0;
            let z = -(row as f32);

            let color = LinearRgba::new(
                rng.random_range(0.05..0.2),
                rng.random_range(0.45..0.8) - row as f32 * 0.05,
                rng.random_range(0.05..0.2),
                1.0,
            );

            commands.spawn((
                GrassBlade,
                Mesh2d(blade.clone()),
                MeshMaterial2d(materials.add(WindSpriteMaterial {
                    color,
                    sway: rng.random_range(8.0..16.0),
                    ..default()
                })),
                Transform::from_xyz(x, y, z).with_scale(Vec3::new(1.0, height, 1.0)),
                WindIndexer,
            ));
        }
    }

    info!("Spawned {} grass blades", ROWS * COLUMNS);
}
