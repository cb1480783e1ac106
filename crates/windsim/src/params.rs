//! Seams between the simulation and the rendering host.
//!
//! The simulation never touches shader state directly. It writes through a
//! [`ParameterSink`] once per tick, reads and steers an optional [`WindSource`],
//! and per-entity state goes through [`ShaderProperties`].

use glam::{Quat, Vec3, Vec4};
use std::collections::HashMap;

/// Receives the per-frame broadcast of shared shader parameters.
pub trait ParameterSink {
    fn set_vector_array(&mut self, name: &str, values: &[Vec4]);
}

/// Directional wind emitter the simulation steers and samples.
pub trait WindSource {
    fn forward(&self) -> Vec3;
    fn strength(&self) -> f32;
    fn set_rotation(&mut self, rotation: Quat);
}

/// Per-entity shader parameters.
pub trait ShaderProperties {
    fn set_int(&mut self, name: &str, value: i32);
}

/// An entity that may already carry a property block.
///
/// Writers fetch the existing block, modify it and store it back so parameters
/// they do not know about survive.
pub trait PropertyBlockHolder {
    type Block: ShaderProperties + Default;

    fn property_block(&self) -> Option<Self::Block>;
    fn set_property_block(&mut self, block: Self::Block);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Int(i32),
    Float(f32),
    Vector(Vec4),
}

/// Named parameter set attached to a single entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBlock {
    values: HashMap<String, ParameterValue>,
}

impl PropertyBlock {
    pub fn set(&mut self, name: &str, value: ParameterValue) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.values.get(name) {
            Some(ParameterValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ShaderProperties for PropertyBlock {
    fn set_int(&mut self, name: &str, value: i32) {
        self.set(name, ParameterValue::Int(value));
    }
}

/// Host-side store of broadcast arrays, keyed by parameter name.
#[derive(Debug, Clone, Default)]
pub struct GlobalParameters {
    arrays: HashMap<String, Vec<Vec4>>,
    writes: usize,
}

impl GlobalParameters {
    pub fn vector_array(&self, name: &str) -> Option<&[Vec4]> {
        self.arrays.get(name).map(Vec::as_slice)
    }

    /// Number of `set_vector_array` calls received so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ParameterSink for GlobalParameters {
    fn set_vector_array(&mut self, name: &str, values: &[Vec4]) {
        self.writes += 1;
        let slot = self.arrays.entry(name.to_owned()).or_default();
        slot.clear();
        slot.extend_from_slice(values);
    }
}

/// Free-standing wind zone for hosts without their own transform hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindZone {
    pub rotation: Quat,
    pub strength: f32,
}

impl WindZone {
    pub fn new(strength: f32) -> Self {
        Self {
            rotation: Quat::IDENTITY,
            strength,
        }
    }
}

impl WindSource for WindZone {
    fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    fn strength(&self) -> f32 {
        self.strength
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
