pub mod analysis;
pub mod axis;
pub mod bridge;
pub mod flow;
pub mod pipeline;
pub mod scheduler;

pub use analysis::{
    AnalysisCompletion, AnalysisHandle, AnalysisJob, AnalysisOutput, AnalysisRequest,
    TaskPoolAnalysisJob, Voxelizer,
};
pub use axis::{estimate_main_axis, AxisSource, CanonicalAxis, MainAxis};
pub use bridge::AsyncJobBridge;
pub use flow::{
    dynamic_viscosity, estimate_flow_scalars, mach_number, reynolds_number,
    skin_friction_coefficient, FlowConditions, FlowScalars,
};
pub use pipeline::{AeroModel, ForcePipeline, ModuleObserver, TickOutcome};
pub use scheduler::{RecomputeScheduler, ScheduleDecision, SchedulerState};
