use bevy::prelude::*;
use nalgebra::{Isometry3, Vector3};
use serde::{Deserialize, Serialize};

/// Classification of a vehicle, used to pick the voxel resolution of its analysis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    Debris,
    #[default]
    Unknown,
    Probe,
    Rover,
    Lander,
    Ship,
    Plane,
    Station,
    Base,
}

/// Stable identifier of a part within its vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub u32);

/// Axis-aligned bounding extent of a part's mesh, in the part's own frame [m].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartBounds {
    pub size: Vector3<f64>,
}

impl PartBounds {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            size: Vector3::new(x, y, z),
        }
    }

    /// Approximate volume of the bounding box [m^3].
    pub fn volume(&self) -> f64 {
        self.size.x * self.size.y * self.size.z
    }
}

/// Per-tick view of one part as seen by the aerodynamics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartSnapshot {
    pub id: PartId,
    /// Position of the part origin in vehicle space [m]
    pub position: Vector3<f64>,
    /// The part's up direction in world space (unit length)
    pub up: Vector3<f64>,
    /// Mesh bounds, absent for parts with no geometry
    pub bounds: Option<PartBounds>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl PartSnapshot {
    pub fn new(id: PartId, up: Vector3<f64>, bounds: Option<PartBounds>) -> Self {
        Self {
            id,
            position: Vector3::zeros(),
            up,
            bounds,
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }

    pub fn with_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }
}

/// Host-owned description of a vehicle. Written by the host every tick and only
/// read by the aerodynamics.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub name: String,
    pub class: VehicleClass,
    /// Vehicle space to world space
    pub pose: Isometry3<f64>,
    /// Altitude above the reference surface [m]
    pub altitude: f64,
    /// Velocity relative to the surface, world space [m/s]
    pub surface_velocity: Vector3<f64>,
    pub parts: Vec<PartSnapshot>,
}

impl Default for VehicleSnapshot {
    fn default() -> Self {
        Self {
            name: "Vehicle".to_string(),
            class: VehicleClass::default(),
            pose: Isometry3::identity(),
            altitude: 0.0,
            surface_velocity: Vector3::zeros(),
            parts: Vec::new(),
        }
    }
}

impl VehicleSnapshot {
    pub fn new(name: impl Into<String>, class: VehicleClass, parts: Vec<PartSnapshot>) -> Self {
        Self {
            name: name.into(),
            class,
            parts,
            ..Default::default()
        }
    }

    pub fn world_to_local(&self) -> Isometry3<f64> {
        self.pose.inverse()
    }

    pub fn local_to_world(&self) -> Isometry3<f64> {
        self.pose
    }

    pub fn surface_speed(&self) -> f64 {
        self.surface_velocity.norm()
    }

    pub fn part(&self, id: PartId) -> Option<&PartSnapshot> {
        self.parts.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Translation3, UnitQuaternion};

    #[test]
    fn test_bounds_volume() {
        assert_relative_eq!(PartBounds::new(2.0, 3.0, 0.5).volume(), 3.0);
    }

    #[test]
    fn test_world_to_local_inverts_pose() {
        let mut vehicle = VehicleSnapshot::default();
        vehicle.pose = Isometry3::from_parts(
            Translation3::new(10.0, -4.0, 2.0),
            UnitQuaternion::from_euler_angles(0.3, -0.2, 1.1),
        );

        let v = Vector3::new(1.0, 2.0, 3.0);
        let round_trip = vehicle.world_to_local() * (vehicle.local_to_world() * v);
        assert_relative_eq!(round_trip, v, epsilon = 1e-12);
    }

    #[test]
    fn test_unclassified_by_default() {
        assert_eq!(VehicleSnapshot::default().class, VehicleClass::Unknown);
    }

    #[test]
    fn test_part_lookup() {
        let vehicle = VehicleSnapshot::new(
            "lookup",
            VehicleClass::Ship,
            vec![
                PartSnapshot::new(PartId(1), Vector3::y(), None),
                PartSnapshot::new(PartId(7), Vector3::y(), None),
            ],
        );

        assert!(vehicle.part(PartId(7)).is_some());
        assert!(vehicle.part(PartId(3)).is_none());
    }
}
