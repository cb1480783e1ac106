use bevy::prelude::*;

/// Directional wind emitter. The simulation writes its rotation into the
/// entity's `Transform` and samples the forward (+Z) axis back.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct WindZone {
    pub strength: f32,
}

/// Request for a wind history slot. Picked up once, when the component is added.
#[derive(Component, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Component)]
pub struct WindIndexer;

/// The history slot a sprite was given.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct WindIndex(pub i32);
