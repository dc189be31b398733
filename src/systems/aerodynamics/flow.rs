use crate::resources::GasProperties;
use crate::utils::{
    LAMINAR_TRANSITION_REYNOLDS, SUTHERLAND_CONSTANT, SUTHERLAND_REFERENCE_TEMP,
    SUTHERLAND_REFERENCE_VISCOSITY,
};

/// Ambient state a tick's flow scalars are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConditions {
    /// [kg/m^3]
    pub density: f64,
    /// Static temperature [K]
    pub temperature: f64,
    /// Speed relative to the surface [m/s]
    pub speed: f64,
    /// Vehicle reference length [m]
    pub reference_length: f64,
    pub gas: GasProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowScalars {
    pub mach_number: f64,
    pub reynolds_number: f64,
    pub skin_friction_coefficient: f64,
}

/// Derives the tick's flow scalars. `None` when there is no atmosphere.
pub fn estimate_flow_scalars(conditions: &FlowConditions) -> Option<FlowScalars> {
    if conditions.density <= 0.0 {
        return None;
    }

    let mach_number = mach_number(conditions.speed, conditions.temperature, &conditions.gas);
    let reynolds_number = reynolds_number(
        conditions.density,
        conditions.speed,
        conditions.reference_length,
        conditions.temperature,
    );
    let skin_friction_coefficient = skin_friction_coefficient(reynolds_number, mach_number);

    Some(FlowScalars {
        mach_number,
        reynolds_number,
        skin_friction_coefficient,
    })
}

pub fn mach_number(speed: f64, temperature: f64, gas: &GasProperties) -> f64 {
    let a = gas.speed_of_sound(temperature);
    if a > 0.0 {
        speed / a
    } else {
        0.0
    }
}

/// Dynamic viscosity of air by Sutherland's law [Pa·s].
pub fn dynamic_viscosity(temperature: f64) -> f64 {
    let ratio = temperature / SUTHERLAND_REFERENCE_TEMP;
    let correction =
        (SUTHERLAND_REFERENCE_TEMP + SUTHERLAND_CONSTANT) / (temperature + SUTHERLAND_CONSTANT);
    SUTHERLAND_REFERENCE_VISCOSITY * ratio.powf(1.5) * correction
}

pub fn reynolds_number(density: f64, speed: f64, length: f64, temperature: f64) -> f64 {
    let mu = dynamic_viscosity(temperature);
    if mu > 0.0 {
        density * speed * length / mu
    } else {
        0.0
    }
}

/// Flat-plate skin friction coefficient with a compressibility correction.
pub fn skin_friction_coefficient(reynolds_number: f64, mach_number: f64) -> f64 {
    if reynolds_number <= 0.0 {
        return 0.0;
    }

    let incompressible = if reynolds_number < LAMINAR_TRANSITION_REYNOLDS {
        1.328 / reynolds_number.sqrt()
    } else {
        0.455 / reynolds_number.log10().powf(2.58)
    };

    incompressible * (1.0 + 0.144 * mach_number * mach_number).powf(-0.65)
}
