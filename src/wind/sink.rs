// Adapters between the windsim seams and Bevy's world.

use super::resources::PublishedWind;
use super::wind_material::WindSpriteMaterial;
use bevy::prelude::*;
use windsim::constants::WIND_VECTOR_ARRAY_PROPERTY;
use windsim::params::{ParameterSink, PropertyBlockHolder, WindSource};

/// Broadcasts the wind history into every wind sprite material.
pub struct MaterialSink<'a> {
    pub materials: &'a mut Assets<WindSpriteMaterial>,
    pub published: &'a mut PublishedWind,
}

impl ParameterSink for MaterialSink<'_> {
    fn set_vector_array(&mut self, name: &str, values: &[Vec4]) {
        if name != WIND_VECTOR_ARRAY_PROPERTY {
            debug!("No material parameter named {}", name);
            return;
        }
        self.published.store(values);
        for (_, material) in self.materials.iter_mut() {
            material.set_wind_vectors(values);
        }
    }
}

/// A wind zone entity seen through its transform.
pub struct ZoneSource<'a> {
    pub transform: &'a mut Transform,
    pub strength: f32,
}

impl WindSource for ZoneSource<'_> {
    fn forward(&self) -> Vec3 {
        self.transform.rotation * Vec3::Z
    }

    fn strength(&self) -> f32 {
        self.strength
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }
}

/// A sprite's material treated as its property block. Writing stores a new
/// asset and repoints the handle, so sprites that shared the old material are
/// not affected.
pub struct MaterialBlock<'a> {
    pub handle: &'a mut Handle<WindSpriteMaterial>,
    pub materials: &'a mut Assets<WindSpriteMaterial>,
}

impl PropertyBlockHolder for MaterialBlock<'_> {
    type Block = WindSpriteMaterial;

    fn property_block(&self) -> Option<WindSpriteMaterial> {
        self.materials.get(&*self.handle).cloned()
    }

    fn set_property_block(&mut self, block: WindSpriteMaterial) {
        *self.handle = self.materials.add(block);
    }
}
