use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{PhysicsComponent, ReferenceFrame, VehicleSnapshot};

/// Sum every force and moment on a vehicle into world-frame net values.
/// Body-frame entries and application points are rotated by the vehicle pose.
pub fn force_accumulation_system(mut query: Query<(&mut PhysicsComponent, &VehicleSnapshot)>) {
    for (mut physics, vehicle) in query.iter_mut() {
        let attitude = vehicle.pose.rotation;
        let mut net_force = Vector3::zeros();
        let mut net_moment = Vector3::zeros();

        for force in &physics.forces {
            let force_inertial = match force.frame {
                ReferenceFrame::Body => attitude * force.vector,
                ReferenceFrame::Inertial => force.vector,
            };
            net_force += force_inertial;

            if let Some(point) = force.point {
                net_moment += (attitude * point).cross(&force_inertial);
            }
        }

        for moment in &physics.moments {
            net_moment += match moment.frame {
                ReferenceFrame::Body => attitude * moment.vector,
                ReferenceFrame::Inertial => moment.vector,
            };
        }

        physics.net_force = net_force;
        physics.net_moment = net_moment;
    }
}
