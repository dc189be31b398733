use bevy::prelude::*;

use crate::components::PartId;

/// Sent by the host when a vehicle's geometry changed (part added, removed or
/// animated). Requests a fresh analysis shortly.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeChanged {
    pub vehicle: Entity,
}

/// A new aero model was installed for `vehicle`; `parts` lists the parts that
/// now carry an aero module, in module order.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AeroModulesReplaced {
    pub vehicle: Entity,
    pub parts: Vec<PartId>,
}
