use crate::resources::AeroConfig;

/// Cooldown state of the recompute scheduler. `elapsed` counts ticks since the
/// last launch and is always below the cooldown length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Cooldown elapsed; the next request launches immediately
    Idle,
    /// Recently launched, nothing pending
    Cooling { elapsed: u32 },
    /// Recently launched with one request waiting for the cooldown to end
    Queued { elapsed: u32 },
}

/// What the caller must do after driving the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleDecision {
    /// Start a new analysis now
    Launch,
    /// Request recorded, will launch when the cooldown ends
    Deferred,
    /// Nothing to do
    Idle,
}

/// Rate limiter for voxel analysis launches: at most one launch per cooldown
/// window, and requests made during the window collapse into one launch at its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecomputeScheduler {
    state: SchedulerState,
    cooldown_ticks: u32,
    forced_update_delay: u32,
}

impl RecomputeScheduler {
    pub fn new(cooldown_ticks: u32, forced_update_delay: u32) -> Self {
        let cooldown_ticks = cooldown_ticks.max(1);
        Self {
            state: SchedulerState::Idle,
            cooldown_ticks,
            forced_update_delay: forced_update_delay.clamp(1, cooldown_ticks),
        }
    }

    pub fn from_config(config: &AeroConfig) -> Self {
        Self::new(config.cooldown_ticks, config.forced_update_delay)
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn cooldown_ticks(&self) -> u32 {
        self.cooldown_ticks
    }

    /// Ticks since the last launch, saturating at the cooldown length.
    pub fn cooldown(&self) -> u32 {
        match self.state {
            SchedulerState::Idle => self.cooldown_ticks,
            SchedulerState::Cooling { elapsed } | SchedulerState::Queued { elapsed } => elapsed,
        }
    }

    pub fn is_queued(&self) -> bool {
        matches!(self.state, SchedulerState::Queued { .. })
    }

    /// Ask for a new analysis. Launches when the cooldown has elapsed, queues otherwise.
    pub fn request_update(&mut self) -> ScheduleDecision {
        match self.state {
            SchedulerState::Idle => {
                self.state = SchedulerState::Cooling { elapsed: 0 };
                ScheduleDecision::Launch
            }
            SchedulerState::Cooling { elapsed } | SchedulerState::Queued { elapsed } => {
                self.state = SchedulerState::Queued { elapsed };
                ScheduleDecision::Deferred
            }
        }
    }

    /// Advance one tick. Drains a queued request the tick the cooldown ends.
    pub fn on_tick(&mut self) -> ScheduleDecision {
        match self.state {
            SchedulerState::Idle => ScheduleDecision::Idle,
            SchedulerState::Cooling { elapsed } => {
                let elapsed = elapsed + 1;
                self.state = if elapsed >= self.cooldown_ticks {
                    SchedulerState::Idle
                } else {
                    SchedulerState::Cooling { elapsed }
                };
                ScheduleDecision::Idle
            }
            SchedulerState::Queued { elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed >= self.cooldown_ticks {
                    self.state = SchedulerState::Idle;
                    self.request_update()
                } else {
                    self.state = SchedulerState::Queued { elapsed };
                    ScheduleDecision::Idle
                }
            }
        }
    }

    /// Request an update after a shape change. An idle scheduler is rewound to
    /// `forced_update_delay` ticks before the end of its cooldown so a burst of
    /// shape events is batched into one launch.
    pub fn force_immediate(&mut self) -> ScheduleDecision {
        if self.state == SchedulerState::Idle {
            self.state = SchedulerState::Cooling {
                elapsed: self.cooldown_ticks - self.forced_update_delay,
            };
        }
        self.request_update()
    }
}

impl Default for RecomputeScheduler {
    fn default() -> Self {
        Self::from_config(&AeroConfig::default())
    }
}
