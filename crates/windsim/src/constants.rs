/// Number of wind samples kept in the history buffer and published to shaders.
/// Shaders declare their array with the same length.
pub const BUFFER_LENGTH: usize = 8;

pub const WIND_VECTOR_ARRAY_PROPERTY: &str = "wind_vector_array";
pub const WIND_INDEX_PROPERTY: &str = "wind_index";

pub const DEFAULT_CONFIG_PATH: &str = "windy_config.toml";
