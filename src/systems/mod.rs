pub mod aerodynamics;
pub mod physics;
mod vessel;

pub use aerodynamics::{
    AnalysisJob, ForcePipeline, ModuleObserver, RecomputeScheduler, TaskPoolAnalysisJob,
    TickOutcome, Voxelizer,
};
pub use physics::force_accumulation_system;
pub use vessel::{initial_analysis_system, shape_change_system, vessel_aero_system};
