use bevy::log::{debug, info};
use bevy::prelude::Component;
use std::collections::HashMap;

use crate::components::{
    AeroModuleState, AeroSectionState, ForceSink, PartSnapshot, SectionFlow, VehicleSnapshot,
};
use crate::resources::{AeroConfig, AmbientEnvironment};
use crate::systems::aerodynamics::{
    analysis::{AnalysisHandle, AnalysisJob, AnalysisOutput, AnalysisRequest},
    axis::estimate_main_axis,
    bridge::AsyncJobBridge,
    flow::{estimate_flow_scalars, FlowConditions, FlowScalars},
    scheduler::{RecomputeScheduler, ScheduleDecision},
};

/// Told whenever a new module set replaces the old one.
pub trait ModuleObserver {
    fn modules_replaced(&mut self, modules: &[AeroModuleState]);
}

impl ModuleObserver for () {
    fn modules_replaced(&mut self, _modules: &[AeroModuleState]) {}
}

/// The module and section sets of one analysis. Always replaced together.
#[derive(Debug)]
pub struct AeroModel {
    pub modules: Vec<AeroModuleState>,
    pub sections: Vec<AeroSectionState>,
    pub length: f64,
    pub max_cross_section_area: f64,
}

impl From<AnalysisOutput> for AeroModel {
    fn from(output: AnalysisOutput) -> Self {
        Self {
            modules: output.modules,
            sections: output.sections,
            length: output.length,
            max_cross_section_area: output.max_cross_section_area,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No analysis has completed yet
    AwaitingModel,
    /// No atmosphere; nothing was computed
    Vacuum,
    Computed {
        flow: FlowScalars,
        /// A new analysis was launched at the end of the tick
        launched: bool,
    },
}

/// Per-vehicle aerodynamics: owns the recompute scheduler, the link to the
/// background analysis and the current aero model, and turns them into part
/// loads once per tick.
#[derive(Component)]
pub struct ForcePipeline {
    config: AeroConfig,
    scheduler: RecomputeScheduler,
    bridge: AsyncJobBridge,
    model: Option<AeroModel>,
    flow: FlowScalars,
}

impl ForcePipeline {
    pub fn new(job: Box<dyn AnalysisJob>, config: &AeroConfig) -> Self {
        Self {
            config: config.clone(),
            scheduler: RecomputeScheduler::from_config(config),
            bridge: AsyncJobBridge::new(job),
            model: None,
            flow: FlowScalars::default(),
        }
    }

    pub fn scheduler(&self) -> &RecomputeScheduler {
        &self.scheduler
    }

    pub fn pending_analysis(&self) -> Option<AnalysisHandle> {
        self.bridge.pending()
    }

    pub fn stale_results_dropped(&self) -> u64 {
        self.bridge.stale_dropped()
    }

    pub fn model(&self) -> Option<&AeroModel> {
        self.model.as_ref()
    }

    pub fn modules(&self) -> &[AeroModuleState] {
        self.model.as_ref().map_or(&[], |m| m.modules.as_slice())
    }

    /// Flow scalars of the last computed tick.
    pub fn flow(&self) -> FlowScalars {
        self.flow
    }

    pub fn mach_number(&self) -> f64 {
        self.flow.mach_number
    }

    pub fn reynolds_number(&self) -> f64 {
        self.flow.reynolds_number
    }

    pub fn length(&self) -> f64 {
        self.model.as_ref().map_or(0.0, |m| m.length)
    }

    pub fn max_cross_section_area(&self) -> f64 {
        self.model.as_ref().map_or(0.0, |m| m.max_cross_section_area)
    }

    /// Ask for a fresh analysis of the vehicle, launching now if the cooldown allows.
    pub fn request_update(&mut self, vehicle: &VehicleSnapshot) -> ScheduleDecision {
        let decision = self.scheduler.request_update();
        self.act_on(decision, vehicle);
        decision
    }

    /// Shape-change trigger: queues an update a short delay out.
    pub fn force_immediate(&mut self, vehicle: &VehicleSnapshot) -> ScheduleDecision {
        let decision = self.scheduler.force_immediate();
        self.act_on(decision, vehicle);
        decision
    }

    fn act_on(&mut self, decision: ScheduleDecision, vehicle: &VehicleSnapshot) {
        match decision {
            ScheduleDecision::Launch => {
                self.launch(vehicle);
            }
            ScheduleDecision::Deferred => {
                debug!(
                    "Voxel update for {} deferred, cooldown at {}/{}",
                    vehicle.name,
                    self.scheduler.cooldown(),
                    self.scheduler.cooldown_ticks()
                );
            }
            ScheduleDecision::Idle => {}
        }
    }

    fn launch(&mut self, vehicle: &VehicleSnapshot) -> AnalysisHandle {
        let voxel_count = self.config.voxel_count(vehicle.class);
        let axis = estimate_main_axis(vehicle, self.config.axis_snap_threshold);

        let handle = self.bridge.launch(AnalysisRequest {
            vehicle_name: vehicle.name.clone(),
            world_to_local: vehicle.world_to_local(),
            local_to_world: vehicle.local_to_world(),
            axis: axis.local,
            voxel_count,
            parts: vehicle.parts.clone(),
        });

        info!(
            "Updating vehicle voxel for {}: {} voxels, axis {:?} ({:?})",
            vehicle.name, voxel_count, axis.local, axis.source
        );
        handle
    }

    /// Run one simulation tick: pick up a finished analysis, then in order update
    /// module velocities, compute every section, apply every module, and advance
    /// the scheduler. Everything after the pickup is skipped in vacuum.
    pub fn tick(
        &mut self,
        vehicle: &VehicleSnapshot,
        environment: &dyn AmbientEnvironment,
        sink: &mut dyn ForceSink,
        observer: &mut dyn ModuleObserver,
    ) -> TickOutcome {
        if let Some(output) = self.bridge.poll_completion() {
            let model = AeroModel::from(output);
            info!(
                "Installed aero model for {}: {} modules, {} sections",
                vehicle.name,
                model.modules.len(),
                model.sections.len()
            );
            observer.modules_replaced(&model.modules);
            self.model = Some(model);
        }

        let Some(model) = self.model.as_mut() else {
            return TickOutcome::AwaitingModel;
        };

        let density = environment.density(vehicle);
        let conditions = FlowConditions {
            density,
            temperature: environment.temperature(vehicle.altitude),
            speed: vehicle.surface_speed(),
            reference_length: model.length,
            gas: environment.gas(),
        };
        let Some(flow) = estimate_flow_scalars(&conditions) else {
            return TickOutcome::Vacuum;
        };
        self.flow = flow;

        let frame_velocity = environment.frame_velocity();
        let parts: HashMap<_, &PartSnapshot> = vehicle.parts.iter().map(|p| (p.id, p)).collect();
        for module in model.modules.iter_mut() {
            module.update_velocity(parts.get(&module.part).copied(), frame_velocity);
        }

        let section_flow = SectionFlow {
            density,
            mach_number: flow.mach_number,
            reynolds_per_length: if model.length > 0.0 {
                flow.reynolds_number / model.length
            } else {
                0.0
            },
            skin_friction_coefficient: flow.skin_friction_coefficient,
        };
        for section in &model.sections {
            section.calculate_forces(&mut model.modules, &section_flow);
        }

        for module in model.modules.iter_mut() {
            module.apply_forces(sink);
        }

        let decision = self.scheduler.on_tick();
        self.act_on(decision, vehicle);

        TickOutcome::Computed {
            flow,
            launched: decision == ScheduleDecision::Launch,
        }
    }
}
