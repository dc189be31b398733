//! Vessel aerodynamics for Bevy simulations: throttled background geometry
//! analysis, main-axis and flow-parameter estimation, and a fixed-order
//! per-tick force pipeline.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{PhysicsComponent, VehicleSnapshot};
pub use plugins::{AeroModulesReplaced, ShapeChanged, VesselAeroPlugin, VesselAeroSet};
pub use resources::{AeroConfig, EnvironmentConfig, EnvironmentResource};
pub use systems::aerodynamics::{ForcePipeline, TickOutcome};
pub use utils::{AeroError, Result};
