use bevy::prelude::*;

use crate::components::{
    AeroModuleState, ForceCategory, PartId, PhysicsComponent, PhysicsForceSink, VehicleSnapshot,
};
use crate::plugins::{AeroModulesReplaced, ShapeChanged};
use crate::resources::EnvironmentResource;
use crate::systems::aerodynamics::{ForcePipeline, ModuleObserver, TickOutcome};

/// Collects the part list of a freshly installed module set so it can be
/// forwarded as an event once the tick is done.
#[derive(Default)]
struct ReplacedModules(Option<Vec<PartId>>);

impl ModuleObserver for ReplacedModules {
    fn modules_replaced(&mut self, modules: &[AeroModuleState]) {
        self.0 = Some(modules.iter().map(|m| m.part).collect());
    }
}

/// Kick off the first analysis for every newly attached pipeline.
pub fn initial_analysis_system(
    mut query: Query<(&VehicleSnapshot, &mut ForcePipeline), Added<ForcePipeline>>,
) {
    for (vehicle, mut pipeline) in query.iter_mut() {
        pipeline.request_update(vehicle);
    }
}

pub fn shape_change_system(
    mut shape_changes: EventReader<ShapeChanged>,
    mut query: Query<(&VehicleSnapshot, &mut ForcePipeline)>,
) {
    for event in shape_changes.read() {
        match query.get_mut(event.vehicle) {
            Ok((vehicle, mut pipeline)) => {
                pipeline.force_immediate(vehicle);
            }
            Err(_) => warn!(
                "Shape change for {:?}, which has no aero pipeline",
                event.vehicle
            ),
        }
    }
}

pub fn vessel_aero_system(
    mut query: Query<(
        Entity,
        &VehicleSnapshot,
        &mut ForcePipeline,
        &mut PhysicsComponent,
    )>,
    environment: Res<EnvironmentResource>,
    mut replaced: EventWriter<AeroModulesReplaced>,
) {
    for (entity, vehicle, mut pipeline, mut physics) in query.iter_mut() {
        physics.clear_category(&ForceCategory::Aerodynamic);

        let mut observer = ReplacedModules::default();
        let mut sink = PhysicsForceSink::new(&mut physics, |part| {
            vehicle.part(part).map(|p| p.position)
        });
        let outcome = pipeline.tick(vehicle, &*environment, &mut sink, &mut observer);

        if let TickOutcome::Computed { launched: true, .. } = outcome {
            debug!("Queued voxel update for {} launched", vehicle.name);
        }

        if let Some(parts) = observer.0 {
            replaced.send(AeroModulesReplaced {
                vehicle: entity,
                parts,
            });
        }
    }
}
