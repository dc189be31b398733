pub mod config;
pub mod environment;

pub use config::AeroConfig;
pub use environment::{
    AmbientEnvironment, AtmosphereConfig, AtmosphereType, EnvironmentConfig,
    EnvironmentResource, GasProperties,
};
