use bevy::tasks::{block_on, futures_lite::future, AsyncComputeTaskPool, Task};
use nalgebra::{Isometry3, Vector3};
use std::sync::Arc;

use crate::components::{AeroModuleState, AeroSectionState, PartSnapshot};

/// Identity of one launched analysis. Handles are never reused by a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnalysisHandle(pub u64);

/// Everything the geometry analysis needs, captured at launch time.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub vehicle_name: String,
    pub world_to_local: Isometry3<f64>,
    pub local_to_world: Isometry3<f64>,
    /// Main axis in vehicle space, unit length
    pub axis: Vector3<f64>,
    pub voxel_count: u32,
    pub parts: Vec<PartSnapshot>,
}

/// A matched module/section set produced by one analysis.
#[derive(Debug, Default)]
pub struct AnalysisOutput {
    pub modules: Vec<AeroModuleState>,
    pub sections: Vec<AeroSectionState>,
    /// Vehicle length along the main axis [m]
    pub length: f64,
    /// [m^2]
    pub max_cross_section_area: f64,
}

#[derive(Debug)]
pub struct AnalysisCompletion {
    pub handle: AnalysisHandle,
    pub output: AnalysisOutput,
}

/// A background geometry analysis service.
pub trait AnalysisJob: Send + Sync {
    /// Start an analysis and return its handle. Must not block.
    fn launch(&mut self, request: AnalysisRequest) -> AnalysisHandle;

    /// Take one finished analysis, if any. Must not block. Each completion is
    /// returned once; completions of superseded launches may still show up.
    fn poll(&mut self) -> Option<AnalysisCompletion>;
}

/// The voxelization itself. Runs on a worker thread.
pub trait Voxelizer: Send + Sync + 'static {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutput;
}

/// Runs analyses on Bevy's async compute pool.
pub struct TaskPoolAnalysisJob {
    voxelizer: Arc<dyn Voxelizer>,
    tasks: Vec<(AnalysisHandle, Task<AnalysisOutput>)>,
    next_handle: u64,
}

impl TaskPoolAnalysisJob {
    pub fn new(voxelizer: Arc<dyn Voxelizer>) -> Self {
        Self {
            voxelizer,
            tasks: Vec::new(),
            next_handle: 0,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }
}

impl AnalysisJob for TaskPoolAnalysisJob {
    fn launch(&mut self, request: AnalysisRequest) -> AnalysisHandle {
        let handle = AnalysisHandle(self.next_handle);
        self.next_handle += 1;

        let voxelizer = Arc::clone(&self.voxelizer);
        let task = AsyncComputeTaskPool::get().spawn(async move { voxelizer.analyze(&request) });
        self.tasks.push((handle, task));
        handle
    }

    fn poll(&mut self) -> Option<AnalysisCompletion> {
        for i in 0..self.tasks.len() {
            if let Some(output) = block_on(future::poll_once(&mut self.tasks[i].1)) {
                let (handle, _) = self.tasks.remove(i);
                return Some(AnalysisCompletion { handle, output });
            }
        }
        None
    }
}
