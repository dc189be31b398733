use bevy::prelude::*;

use crate::plugins::{AeroModulesReplaced, ShapeChanged};
use crate::resources::{AeroConfig, EnvironmentConfig, EnvironmentResource};
use crate::systems::{
    force_accumulation_system, initial_analysis_system, shape_change_system, vessel_aero_system,
};

/// Vessel aerodynamics stages within a fixed tick
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum VesselAeroSet {
    /// Initial and shape-change recompute requests
    Trigger,
    /// Per-vehicle force pipeline
    Aerodynamics,
    /// Net force and moment accumulation
    Forces,
}

/// Plugin wiring the vessel aerodynamics into `FixedUpdate`:
/// Trigger -> Aerodynamics -> Forces.
///
/// Vehicles opt in by carrying a `VehicleSnapshot`, a `ForcePipeline` and a
/// `PhysicsComponent`.
#[derive(Default)]
pub struct VesselAeroPlugin {
    pub config: AeroConfig,
    pub environment: EnvironmentConfig,
}

impl VesselAeroPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: AeroConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentConfig) -> Self {
        self.environment = environment;
        self
    }

    fn validated_config(&self) -> AeroConfig {
        match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                error!("Rejected aero config, using defaults: {}", e);
                AeroConfig::default()
            }
        }
    }

    fn validated_environment(&self) -> EnvironmentConfig {
        match self.environment.validate() {
            Ok(()) => self.environment.clone(),
            Err(e) => {
                error!("Rejected environment config, using defaults: {}", e);
                EnvironmentConfig::default()
            }
        }
    }
}

impl Plugin for VesselAeroPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.validated_config())
            .insert_resource(EnvironmentResource::new(&self.validated_environment()))
            .add_event::<ShapeChanged>()
            .add_event::<AeroModulesReplaced>()
            .configure_sets(
                FixedUpdate,
                (
                    VesselAeroSet::Trigger,
                    VesselAeroSet::Aerodynamics,
                    VesselAeroSet::Forces,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    (initial_analysis_system, shape_change_system)
                        .chain()
                        .in_set(VesselAeroSet::Trigger),
                    vessel_aero_system.in_set(VesselAeroSet::Aerodynamics),
                    force_accumulation_system.in_set(VesselAeroSet::Forces),
                ),
            );
    }
}
