use nalgebra::Vector3;

use crate::components::{ForceSink, PartId, PartSnapshot};

/// Per-part aerodynamic actor. Holds the velocity inputs the sections read and
/// the loads the sections accumulate onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct AeroModuleState {
    pub part: PartId,
    /// Part velocity including the reference-frame offset, world space [m/s]
    pub velocity: Vector3<f64>,
    /// World space [rad/s]
    pub angular_velocity: Vector3<f64>,
    /// Accumulated this tick, world space [N]
    pub force: Vector3<f64>,
    /// Accumulated this tick, world space [N·m]
    pub torque: Vector3<f64>,
    attached: bool,
}

impl AeroModuleState {
    pub fn new(part: PartId) -> Self {
        Self {
            part,
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
            attached: true,
        }
    }

    /// False once the owning part disappeared from the vehicle.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Refresh the velocity inputs from the owning part. `frame_velocity` is the
    /// offset of the host's moving reference frame.
    pub fn update_velocity(&mut self, part: Option<&PartSnapshot>, frame_velocity: Vector3<f64>) {
        match part {
            Some(part) => {
                self.velocity = part.velocity + frame_velocity;
                self.angular_velocity = part.angular_velocity;
                self.attached = true;
            }
            None => self.attached = false,
        }
    }

    pub fn add_load(&mut self, force: Vector3<f64>, torque: Vector3<f64>) {
        self.force += force;
        self.torque += torque;
    }

    /// Hand the accumulated load to the sink and reset the accumulators.
    /// Returns whether anything was applied.
    pub fn apply_forces(&mut self, sink: &mut dyn ForceSink) -> bool {
        let force = std::mem::replace(&mut self.force, Vector3::zeros());
        let torque = std::mem::replace(&mut self.torque, Vector3::zeros());

        if !self.attached {
            return false;
        }
        sink.apply_force(self.part, force, torque);
        true
    }
}
