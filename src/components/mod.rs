pub mod aero_module;
pub mod aero_section;
pub mod physics;
pub mod vehicle;

pub use aero_module::AeroModuleState;
pub use aero_section::{
    AeroSectionState, ModuleContribution, SectionFlow, SectionForceModel, SectionInputs,
    SectionLoad,
};
pub use physics::{
    Force, ForceCategory, ForceSink, Moment, PhysicsComponent, PhysicsForceSink, ReferenceFrame,
};
pub use vehicle::{PartBounds, PartId, PartSnapshot, VehicleClass, VehicleSnapshot};
