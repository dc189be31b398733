mod aerodynamics;
mod events;

pub use aerodynamics::{VesselAeroPlugin, VesselAeroSet};
pub use events::{AeroModulesReplaced, ShapeChanged};
