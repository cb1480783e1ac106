use crate::constants::WIND_INDEX_PROPERTY;
use crate::params::{PropertyBlockHolder, ShaderProperties};
use rand::Rng;

/// Draws a history slot for one entity, in `[0, buffer_length - 1)`.
///
/// The live slot is left out so every entity samples smoothed history. A
/// buffer of one slot has nothing else to offer and always yields 0.
pub fn draw_wind_index<R: Rng + ?Sized>(rng: &mut R, buffer_length: usize) -> i32 {
    if buffer_length <= 1 {
        return 0;
    }
    rng.random_range(0..buffer_length - 1) as i32
}

/// Writes a freshly drawn index for a history of `buffer_length` slots into
/// `properties`. Calling it again redraws.
pub fn assign_wind_index<P, R>(properties: &mut P, rng: &mut R, buffer_length: usize) -> i32
where
    P: ShaderProperties + ?Sized,
    R: Rng + ?Sized,
{
    let index = draw_wind_index(rng, buffer_length);
    properties.set_int(WIND_INDEX_PROPERTY, index);
    index
}

/// Assigns a wind index to an entity without discarding whatever else its
/// property block already carries.
pub fn index_entity<H, R>(holder: &mut H, rng: &mut R, buffer_length: usize) -> i32
where
    H: PropertyBlockHolder + ?Sized,
    R: Rng + ?Sized,
{
    let mut block = holder.property_block().unwrap_or_default();
    let index = assign_wind_index(&mut block, rng, buffer_length);
    holder.set_property_block(block);
    index
}
