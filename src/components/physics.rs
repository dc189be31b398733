use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::PartId;

/// Receives the loads computed for a part once per tick.
pub trait ForceSink {
    /// Apply a world-space force and torque to the body owning `part`.
    fn apply_force(&mut self, part: PartId, force: Vector3<f64>, torque: Vector3<f64>);
}

/// Loads acting on a vehicle this tick and their world-frame sums.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
    pub moments: Vec<Moment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    /// Application point relative to the vehicle origin, vehicle space
    pub point: Option<Vector3<f64>>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moment {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    /// Written by the force pipeline, replaced every tick
    Aerodynamic,
    /// Added by the host simulation; the aero systems leave these alone
    Host,
}

impl Default for PhysicsComponent {
    fn default() -> Self {
        Self {
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            forces: Vec::new(),
            moments: Vec::new(),
        }
    }
}

impl PhysicsComponent {

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn add_moment(&mut self, moment: Moment) {
        self.moments.push(moment);
    }

    /// Drop every force and moment of the given category, leaving the rest for
    /// the systems that own them.
    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
        self.moments.retain(|m| &m.category != category);
    }
}

/// Force sink that records aerodynamic part loads on a vehicle's
/// `PhysicsComponent`, located at each part's position.
pub struct PhysicsForceSink<'a, F>
where
    F: Fn(PartId) -> Option<Vector3<f64>>,
{
    physics: &'a mut PhysicsComponent,
    part_position: F,
}

impl<'a, F> PhysicsForceSink<'a, F>
where
    F: Fn(PartId) -> Option<Vector3<f64>>,
{
    pub fn new(physics: &'a mut PhysicsComponent, part_position: F) -> Self {
        Self {
            physics,
            part_position,
        }
    }
}

impl<F> ForceSink for PhysicsForceSink<'_, F>
where
    F: Fn(PartId) -> Option<Vector3<f64>>,
{
    fn apply_force(&mut self, part: PartId, force: Vector3<f64>, torque: Vector3<f64>) {
        self.physics.add_force(Force {
            vector: force,
            point: (self.part_position)(part),
            frame: ReferenceFrame::Inertial,
            category: ForceCategory::Aerodynamic,
        });
        self.physics.add_moment(Moment {
            vector: torque,
            frame: ReferenceFrame::Inertial,
            category: ForceCategory::Aerodynamic,
        });
    }
}
