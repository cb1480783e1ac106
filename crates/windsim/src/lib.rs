pub mod buffer;
pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod indexer;
pub mod params;
pub mod simulation;
pub mod tools;

pub use buffer::WindHistoryBuffer;
pub use config::WindConfig;
pub use direction::WindDirectionController;
pub use error::ConfigError;
pub use simulation::WindSimulation;
