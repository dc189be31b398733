use bevy::log::warn;
use nalgebra::Vector3;

use crate::components::VehicleSnapshot;
use crate::utils::MIN_AXIS_NORM;

/// Vehicle-space axes a main axis may snap onto, in priority order.
/// Vehicle space is Y-up, -Z forward, X right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalAxis {
    Up,
    Forward,
    Right,
}

impl CanonicalAxis {
    pub const PRIORITY: [CanonicalAxis; 3] =
        [CanonicalAxis::Up, CanonicalAxis::Forward, CanonicalAxis::Right];

    /// Unit vector in vehicle space.
    pub fn local(self) -> Vector3<f64> {
        match self {
            CanonicalAxis::Up => Vector3::new(0.0, 1.0, 0.0),
            CanonicalAxis::Forward => Vector3::new(0.0, 0.0, -1.0),
            CanonicalAxis::Right => Vector3::new(1.0, 0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSource {
    /// Close enough to a vehicle axis to use it exactly
    Snapped(CanonicalAxis),
    /// The volume-weighted part axis
    Weighted,
    /// No part carried any weight
    Fallback,
}

/// Dominant aerodynamic axis of a vehicle, in vehicle space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainAxis {
    pub local: Vector3<f64>,
    pub source: AxisSource,
}

/// Weights each part's up direction by its bounding volume and returns the
/// resulting direction in vehicle space, snapped onto a vehicle axis when the
/// absolute cosine reaches `snap_threshold`.
pub fn estimate_main_axis(vehicle: &VehicleSnapshot, snap_threshold: f64) -> MainAxis {
    let accumulated = vehicle
        .parts
        .iter()
        .filter_map(|part| part.bounds.map(|b| part.up * b.volume()))
        .fold(Vector3::zeros(), |acc, weighted| acc + weighted);

    let Some(axis) = accumulated.try_normalize(MIN_AXIS_NORM) else {
        warn!(
            "No part geometry to derive a main axis for {}, using vehicle up",
            vehicle.name
        );
        return MainAxis {
            local: CanonicalAxis::Up.local(),
            source: AxisSource::Fallback,
        };
    };

    for canonical in CanonicalAxis::PRIORITY {
        let world = vehicle.pose.rotation * canonical.local();
        if axis.dot(&world).abs() >= snap_threshold {
            return MainAxis {
                local: canonical.local(),
                source: AxisSource::Snapped(canonical),
            };
        }
    }

    MainAxis {
        local: vehicle.pose.rotation.inverse_transform_vector(&axis),
        source: AxisSource::Weighted,
    }
}
