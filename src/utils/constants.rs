pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const AIR_ADIABATIC_INDEX: f64 = 1.4;
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE_ALTITUDE: f64 = 11_000.0; // m

// Sutherland's law for air
pub const SUTHERLAND_REFERENCE_VISCOSITY: f64 = 1.716e-5; // Pa·s
pub const SUTHERLAND_REFERENCE_TEMP: f64 = 273.15; // K
pub const SUTHERLAND_CONSTANT: f64 = 110.4; // K

// Boundary layer
pub const LAMINAR_TRANSITION_REYNOLDS: f64 = 5.0e5;

// Scheduler defaults
pub const DEFAULT_COOLDOWN_TICKS: u32 = 20;
pub const DEFAULT_FORCED_UPDATE_DELAY: u32 = 2;
pub const DEFAULT_VOXEL_COUNT: u32 = 125_000;
pub const REDUCED_VOXEL_COUNT: u32 = 20_000;
pub const DEFAULT_AXIS_SNAP_THRESHOLD: f64 = 0.99;

/// Below this length an accumulated axis is treated as degenerate.
pub const MIN_AXIS_NORM: f64 = 1e-9;
