use aerso::density_models::StandardDensity;
use aerso::DensityModel;
use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::VehicleSnapshot;
use crate::utils::{
    AeroError, Result, AIR_ADIABATIC_INDEX, AIR_GAS_CONSTANT, ISA_LAPSE_RATE,
    ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_TEMP, ISA_TROPOPAUSE_ALTITUDE,
};

/// Ambient state the force pipeline reads every tick.
pub trait AmbientEnvironment {
    /// Air density around the vehicle [kg/m^3]. Zero or below means vacuum.
    fn density(&self, vehicle: &VehicleSnapshot) -> f64;

    /// Static air temperature at the given altitude [K].
    fn temperature(&self, altitude: f64) -> f64;

    fn gas(&self) -> GasProperties;

    /// Velocity of the host's moving reference frame, added to every part velocity.
    fn frame_velocity(&self) -> Vector3<f64>;
}

/// Thermodynamic constants of the atmosphere's gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasProperties {
    pub adiabatic_index: f64,
    /// J/(kg·K)
    pub specific_gas_constant: f64,
}

impl Default for GasProperties {
    fn default() -> Self {
        Self {
            adiabatic_index: AIR_ADIABATIC_INDEX,
            specific_gas_constant: AIR_GAS_CONSTANT,
        }
    }
}

impl GasProperties {
    /// Speed of sound at the given temperature [m/s].
    pub fn speed_of_sound(&self, temperature: f64) -> f64 {
        (self.adiabatic_index * self.specific_gas_constant * temperature).sqrt()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AtmosphereType {
    Constant,
    Standard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    pub sea_level_density: f64,
    pub sea_level_temperature: f64,
    /// Altitude above which there is no atmosphere [m]
    pub ceiling: f64,
    pub gas: GasProperties,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            sea_level_density: ISA_SEA_LEVEL_DENSITY,
            sea_level_temperature: ISA_SEA_LEVEL_TEMP,
            ceiling: 70_000.0,
            gas: GasProperties::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub atmosphere_config: AtmosphereConfig,
    /// Reference-frame velocity offset, world space [m/s]
    pub frame_velocity: Vector3<f64>,
}

impl EnvironmentConfig {
    pub fn validate(&self) -> Result<()> {
        let atmosphere = &self.atmosphere_config;
        if atmosphere.sea_level_temperature <= 0.0 {
            return Err(AeroError::InvalidConfig(
                "sea_level_temperature must be positive".to_string(),
            ));
        }
        if atmosphere.gas.adiabatic_index <= 0.0 || atmosphere.gas.specific_gas_constant <= 0.0 {
            return Err(AeroError::InvalidConfig(
                "gas properties must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Resource)]
pub struct EnvironmentResource {
    config: AtmosphereConfig,
    density_model: Box<dyn DensityModel<f64> + Send + Sync>,
    frame_velocity: Vector3<f64>,
}

impl Default for EnvironmentResource {
    fn default() -> Self {
        Self::new(&EnvironmentConfig::default())
    }
}

impl EnvironmentResource {
    pub fn new(config: &EnvironmentConfig) -> Self {
        let density_model = Box::new(StandardDensity) as Box<dyn DensityModel<f64> + Send + Sync>;

        Self {
            config: config.atmosphere_config.clone(),
            density_model,
            frame_velocity: config.frame_velocity,
        }
    }

    pub fn set_frame_velocity(&mut self, frame_velocity: Vector3<f64>) {
        self.frame_velocity = frame_velocity;
    }

    /// Density at altitude [kg/m^3], zero above the ceiling.
    pub fn density_at(&self, altitude: f64) -> f64 {
        if altitude > self.config.ceiling {
            return 0.0;
        }

        match self.config.model_type {
            AtmosphereType::Constant => self.config.sea_level_density,
            AtmosphereType::Standard => {
                let ned_position = Vector3::new(0.0, 0.0, -altitude);
                self.density_model.get_density(&ned_position).max(0.0)
            }
        }
    }
}

impl AmbientEnvironment for EnvironmentResource {
    fn density(&self, vehicle: &VehicleSnapshot) -> f64 {
        self.density_at(vehicle.altitude)
    }

    fn temperature(&self, altitude: f64) -> f64 {
        match self.config.model_type {
            AtmosphereType::Constant => self.config.sea_level_temperature,
            AtmosphereType::Standard => {
                let h = altitude.clamp(0.0, ISA_TROPOPAUSE_ALTITUDE);
                self.config.sea_level_temperature + ISA_LAPSE_RATE * h
            }
        }
    }

    fn gas(&self) -> GasProperties {
        self.config.gas
    }

    fn frame_velocity(&self) -> Vector3<f64> {
        self.frame_velocity
    }
}
