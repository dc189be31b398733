use bevy::log::debug;

use crate::systems::aerodynamics::analysis::{
    AnalysisHandle, AnalysisJob, AnalysisOutput, AnalysisRequest,
};

/// Non-blocking link to the background analysis. Tracks the single launch whose
/// result is still wanted and drops completions from superseded launches.
pub struct AsyncJobBridge {
    job: Box<dyn AnalysisJob>,
    pending: Option<AnalysisHandle>,
    stale_dropped: u64,
}

impl AsyncJobBridge {
    pub fn new(job: Box<dyn AnalysisJob>) -> Self {
        Self {
            job,
            pending: None,
            stale_dropped: 0,
        }
    }

    pub fn pending(&self) -> Option<AnalysisHandle> {
        self.pending
    }

    /// Number of completions discarded because a newer launch replaced them.
    pub fn stale_dropped(&self) -> u64 {
        self.stale_dropped
    }

    /// Launch an analysis, superseding any launch still in flight.
    pub fn launch(&mut self, request: AnalysisRequest) -> AnalysisHandle {
        let handle = self.job.launch(request);
        if let Some(previous) = self.pending.replace(handle) {
            debug!("Analysis {:?} superseded by {:?}", previous, handle);
        }
        handle
    }

    /// Returns the output of the pending launch once it has finished. Called
    /// once per tick; never waits on the job.
    pub fn poll_completion(&mut self) -> Option<AnalysisOutput> {
        while let Some(completion) = self.job.poll() {
            if self.pending == Some(completion.handle) {
                self.pending = None;
                return Some(completion.output);
            }
            self.stale_dropped += 1;
            debug!("Dropping stale analysis result {:?}", completion.handle);
        }
        None
    }
}
