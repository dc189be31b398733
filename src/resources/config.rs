use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::components::VehicleClass;
use crate::utils::{
    AeroError, Result, DEFAULT_AXIS_SNAP_THRESHOLD, DEFAULT_COOLDOWN_TICKS,
    DEFAULT_FORCED_UPDATE_DELAY, DEFAULT_VOXEL_COUNT, REDUCED_VOXEL_COUNT,
};

/// Tuning for the voxel recompute scheduler and analysis launches.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroConfig {
    /// Minimum number of ticks between two analysis launches
    pub cooldown_ticks: u32,
    /// Ticks a forced update waits when the scheduler is idle
    pub forced_update_delay: u32,
    /// Voxel count for classes with an explicit entry
    pub voxel_counts: HashMap<VehicleClass, u32>,
    /// Voxel count for every other class
    pub default_voxel_count: u32,
    /// |cos| at or above which the main axis snaps onto a vehicle axis
    pub axis_snap_threshold: f64,
}

impl Default for AeroConfig {
    fn default() -> Self {
        let voxel_counts = HashMap::from([
            (VehicleClass::Debris, REDUCED_VOXEL_COUNT),
            (VehicleClass::Unknown, REDUCED_VOXEL_COUNT),
        ]);

        Self {
            cooldown_ticks: DEFAULT_COOLDOWN_TICKS,
            forced_update_delay: DEFAULT_FORCED_UPDATE_DELAY,
            voxel_counts,
            default_voxel_count: DEFAULT_VOXEL_COUNT,
            axis_snap_threshold: DEFAULT_AXIS_SNAP_THRESHOLD,
        }
    }
}

impl AeroConfig {
    /// Loads a config from a `.yaml`/`.yml` or `.json` file and validates it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            other => {
                return Err(AeroError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cooldown_ticks == 0 {
            return Err(AeroError::InvalidConfig(
                "cooldown_ticks must be at least 1".to_string(),
            ));
        }
        if self.forced_update_delay == 0 {
            return Err(AeroError::InvalidConfig(
                "forced_update_delay must be at least 1".to_string(),
            ));
        }
        if self.forced_update_delay > self.cooldown_ticks {
            return Err(AeroError::InvalidConfig(format!(
                "forced_update_delay ({}) exceeds cooldown_ticks ({})",
                self.forced_update_delay, self.cooldown_ticks
            )));
        }
        if !(self.axis_snap_threshold > 0.0 && self.axis_snap_threshold <= 1.0) {
            return Err(AeroError::InvalidConfig(format!(
                "axis_snap_threshold must be in (0, 1], got {}",
                self.axis_snap_threshold
            )));
        }
        if self.default_voxel_count == 0 || self.voxel_counts.values().any(|&c| c == 0) {
            return Err(AeroError::InvalidConfig(
                "voxel counts must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Target voxel count for a vehicle of the given class.
    pub fn voxel_count(&self, class: VehicleClass) -> u32 {
        self.voxel_counts
            .get(&class)
            .copied()
            .unwrap_or(self.default_voxel_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_resolution_policy() {
        let config = AeroConfig::default();
        assert_eq!(config.voxel_count(VehicleClass::Debris), 20_000);
        assert_eq!(config.voxel_count(VehicleClass::Unknown), 20_000);
        assert_eq!(config.voxel_count(VehicleClass::Ship), 125_000);
        assert_eq!(config.voxel_count(VehicleClass::Plane), 125_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_config_uses_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "cooldown_ticks: 30\nvoxel_counts:\n  Probe: 5000").unwrap();

        let config = AeroConfig::from_file(file.path()).unwrap();
        assert_eq!(config.cooldown_ticks, 30);
        assert_eq!(config.forced_update_delay, 2);
        assert_eq!(config.voxel_count(VehicleClass::Probe), 5000);
        assert_eq!(config.voxel_count(VehicleClass::Debris), 125_000);
    }

    #[test]
    fn test_json_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"cooldown_ticks": 10, "axis_snap_threshold": 0.95}}"#).unwrap();

        let config = AeroConfig::from_file(file.path()).unwrap();
        assert_eq!(config.cooldown_ticks, 10);
        assert_eq!(config.axis_snap_threshold, 0.95);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let config = AeroConfig {
            cooldown_ticks: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AeroError::InvalidConfig(_))));

        let config = AeroConfig {
            forced_update_delay: 40,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AeroConfig {
            forced_update_delay: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AeroError::InvalidConfig(_))));

        let config = AeroConfig {
            axis_snap_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            AeroConfig::from_file(file.path()),
            Err(AeroError::UnsupportedFormat(_))
        ));
    }
}
