use bevy::prelude::*;
use bevy::render::render_resource::AsBindGroup;
use bevy::shader::ShaderRef;
use bevy::sprite_render::{AlphaMode2d, Material2d};
use windsim::constants::{BUFFER_LENGTH, WIND_INDEX_PROPERTY};
use windsim::params::ShaderProperties;

const SHADER_PATH: &str = "shaders/wind_sprite.wgsl";

/// Sprite material that sways with the published wind history.
///
/// Every sprite owns its own instance so it can carry its own `wind_index`.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct WindSpriteMaterial {
    #[uniform(0)]
    pub color: LinearRgba,
    #[uniform(0)]
    pub wind_vectors: [Vec4; BUFFER_LENGTH],
    #[uniform(0)]
    pub wind_index: i32,
    /// Horizontal tip displacement, in local units, per unit of wind.
    #[uniform(0)]
    pub sway: f32,
    #[texture(1)]
    #[sampler(2)]
    pub texture: Option<Handle<Image>>,
}

impl WindSpriteMaterial {
    pub fn set_wind_vectors(&mut self, values: &[Vec4]) {
        let count = values.len().min(BUFFER_LENGTH);
        self.wind_vectors[..count].copy_from_slice(&values[..count]);
    }
}

impl Material2d for WindSpriteMaterial {
    fn vertex_shader() -> ShaderRef {
        SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode2d {
        AlphaMode2d::Blend
    }
}

impl Default for WindSpriteMaterial {
    fn default() -> Self {
        Self {
            color: LinearRgba::WHITE,
            wind_vectors: [Vec4::ZERO; BUFFER_LENGTH],
            wind_index: 0,
            sway: 12.0,
            texture: None,
        }
    }
}

impl ShaderProperties for WindSpriteMaterial {
    fn set_int(&mut self, name: &str, value: i32) {
        if name == WIND_INDEX_PROPERTY {
            self.wind_index = value;
        } else {
            debug!("WindSpriteMaterial has no int parameter named {}", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_int_only_touches_wind_index() {
        let mut material = WindSpriteMaterial {
            color: LinearRgba::GREEN,
            ..default()
        };

        material.set_int(WIND_INDEX_PROPERTY, 5);
        material.set_int("unknown", 9);

        assert_eq!(material.wind_index, 5);
        assert_eq!(material.color, LinearRgba::GREEN);
    }

    #[test]
    fn test_short_vector_array_only_overwrites_prefix() {
        let mut material = WindSpriteMaterial::default();
        material.wind_vectors = [Vec4::ONE; BUFFER_LENGTH];

        material.set_wind_vectors(&[Vec4::X, Vec4::Y]);

        assert_eq!(material.wind_vectors[0], Vec4::X);
        assert_eq!(material.wind_vectors[1], Vec4::Y);
        assert_eq!(material.wind_vectors[2], Vec4::ONE);
    }
}
