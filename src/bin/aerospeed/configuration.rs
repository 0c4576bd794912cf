/*
Copyright 2022 Jakub Lewandowski

This file is part of Aerospeed.

Aerospeed is a free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 3 of the License, or
(at your option) any later version.

Aerospeed is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with Aerospeed. If not, see https://www.gnu.org/licenses/.
*/

//! Module responsible for parsing and checking the configuration file.
//!
//! The configuration file uses [YAML](https://en.wikipedia.org/wiki/YAML)
//! and `serde` to enforce strong typing and automatic type checking.
//!
//! The structures and their fields in this module directly correspond to
//! the fields inside `config.yaml` so you can check this documentation
//! for more details how to set the config file.

use crate::errors::ConfigError;
use aerospeed::{AtmosphereType, Float, SpeedType};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// _(Optional)_ Altitudes at which atmosphere conditions are written.
#[derive(Clone, PartialEq, PartialOrd, Debug, Deserialize)]
pub struct ConditionsQuery {
    /// List of altitudes (in feet).
    ///
    /// Cannot be empty and all values must be finite.
    pub altitudes: Vec<Float>,
}

impl ConditionsQuery {
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        check_list(
            &self.altitudes,
            "Conditions altitudes list cannot be empty",
            "Conditions altitudes must be finite numbers",
        )
    }
}

/// _(Optional)_ Speeds to convert.
///
/// Every altitude is paired with every speed value.
#[derive(Clone, PartialEq, PartialOrd, Debug, Deserialize)]
pub struct SpeedsQuery {
    /// List of altitudes (in feet).
    pub altitudes: Vec<Float>,

    /// List of speed values in the unit of `type`.
    pub values: Vec<Float>,

    /// Representation of `values`, one of: KTAS, VTAS, KEAS, VEAS,
    /// KCAS, VCAS, KIAS, VIAS, MACH (case-insensitive).
    #[serde(rename = "type")]
    pub kind: SpeedType,
}

impl SpeedsQuery {
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        check_list(
            &self.altitudes,
            "Speeds altitudes list cannot be empty",
            "Speeds altitudes must be finite numbers",
        )?;

        check_list(
            &self.values,
            "Speed values list cannot be empty",
            "Speed values must be finite numbers",
        )
    }
}

/// _(Optional)_ Fields with information about
/// resources available for the program.
#[derive(Clone, PartialEq, PartialOrd, Debug, Deserialize)]
pub struct Resources {
    /// _(Optional)_ Heap memory limit in MB.
    /// Useful for enabling meaningful Out-of-memory error messages
    /// when very large grids are requested.
    ///
    /// Cannot be less than `16` nor more than the whole addressable-space,
    /// which is also the default.
    #[serde(default = "Resources::default_memory")]
    pub memory: usize,
}

impl Resources {
    fn default_memory() -> usize {
        usize::MAX / (1024 * 1024)
    }

    /// Memory limit in bytes, `None` when it does not fit in `usize`.
    pub fn memory_bytes(&self) -> Option<usize> {
        self.memory.checked_mul(1024 * 1024)
    }

    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        if self.memory < 16 {
            return Err(ConfigError::OutOfBounds(
                "Available memory cannot be less than 16 MB",
            ));
        }

        if self.memory > Resources::default_memory() {
            return Err(ConfigError::OutOfBounds(
                "Available memory cannot exceed the addressable space",
            ));
        }

        Ok(())
    }
}

impl Default for Resources {
    fn default() -> Self {
        Resources {
            memory: Resources::default_memory(),
        }
    }
}

/// Main config structure representing the fields in
/// configuration file.
#[derive(Clone, PartialEq, PartialOrd, Debug, Deserialize)]
pub struct Config {
    /// _(Optional)_ Atmosphere used for local conditions.
    /// Defaults to `STANDARD`.
    #[serde(default)]
    pub atmosphere: AtmosphereType,

    /// _(Optional)_ Directory with `Atmosphere_*.csv` tables.
    /// Bundled tables are used when not set.
    #[serde(default)]
    pub tables: Option<PathBuf>,

    #[serde(default)]
    pub conditions: Option<ConditionsQuery>,

    #[serde(default)]
    pub speeds: Option<SpeedsQuery>,

    /// _(Optional)_ Output directory, must be empty or not exist.
    /// Defaults to `./output`.
    #[serde(default = "Config::default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub resources: Resources,
}

impl Config {
    /// Config structure constructor, responsible for
    /// deserializing configuration and checking it.
    pub fn new_from_file(file_path: &Path) -> Result<Config, ConfigError> {
        let data = fs::read(file_path)?;
        Config::new_from_slice(data.as_slice())
    }

    pub fn new_from_slice(data: &[u8]) -> Result<Config, ConfigError> {
        let config: Config = serde_yaml::from_slice(data)?;

        config.check_bounds()?;

        Ok(config)
    }

    fn check_bounds(&self) -> Result<(), ConfigError> {
        if self.conditions.is_none() && self.speeds.is_none() {
            return Err(ConfigError::OutOfBounds(
                "At least one of conditions or speeds must be requested",
            ));
        }

        if let Some(conditions) = &self.conditions {
            conditions.check_bounds()?;
        }

        if let Some(speeds) = &self.speeds {
            speeds.check_bounds()?;
        }

        self.resources.check_bounds()?;

        Ok(())
    }

    fn default_output() -> PathBuf {
        PathBuf::from("./output/")
    }
}

fn check_list(
    values: &[Float],
    empty_message: &'static str,
    finite_message: &'static str,
) -> Result<(), ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::OutOfBounds(empty_message));
    }

    if values.iter().any(|v| !v.is_finite()) {
        return Err(ConfigError::OutOfBounds(finite_message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::errors::ConfigError;
    use aerospeed::{AtmosphereType, SpeedType};
    use std::path::PathBuf;

    #[test]
    fn full_config() {
        let yaml = b"
atmosphere: tropical
tables: ./tables
conditions:
  altitudes: [0, 10000, 20000]
speeds:
  altitudes: [10000, 20000, 30000]
  values: [100, 200, 300]
  type: keas
output: ./results
resources:
  memory: 512
";

        let config = Config::new_from_slice(yaml).unwrap();

        assert_eq!(config.atmosphere, AtmosphereType::Tropical);
        assert_eq!(config.tables, Some(PathBuf::from("./tables")));
        assert_eq!(config.conditions.unwrap().altitudes.len(), 3);

        let speeds = config.speeds.unwrap();
        assert_eq!(speeds.kind, SpeedType::Keas);
        assert_eq!(speeds.values, vec![100.0, 200.0, 300.0]);

        assert_eq!(config.output, PathBuf::from("./results"));
        assert_eq!(config.resources.memory, 512);
    }

    #[test]
    fn defaults() {
        let yaml = b"
speeds:
  altitudes: [0]
  values: [0.5]
  type: MACH
";

        let config = Config::new_from_slice(yaml).unwrap();

        assert_eq!(config.atmosphere, AtmosphereType::Standard);
        assert_eq!(config.tables, None);
        assert_eq!(config.conditions, None);
        assert_eq!(config.output, PathBuf::from("./output/"));
        assert!(config.resources.memory > 16);
    }

    #[test]
    fn nothing_requested() {
        let result = Config::new_from_slice(b"atmosphere: polar\n");

        assert!(matches!(result, Err(ConfigError::OutOfBounds(_))));
    }

    #[test]
    fn empty_values() {
        let yaml = b"
speeds:
  altitudes: [1000]
  values: []
  type: KTAS
";

        let result = Config::new_from_slice(yaml);

        assert!(matches!(result, Err(ConfigError::OutOfBounds(_))));
    }

    #[test]
    fn too_little_memory() {
        let yaml = b"
conditions:
  altitudes: [1000]
resources:
  memory: 8
";

        let result = Config::new_from_slice(yaml);

        assert!(matches!(result, Err(ConfigError::OutOfBounds(_))));
    }

    #[test]
    fn memory_beyond_address_space() {
        let yaml = format!(
            "conditions:\n  altitudes: [0]\nresources:\n  memory: {}\n",
            usize::MAX
        );

        let result = Config::new_from_slice(yaml.as_bytes());

        assert!(matches!(result, Err(ConfigError::OutOfBounds(_))));
    }

    #[test]
    fn largest_memory_fits_in_bytes() {
        let yaml = format!(
            "conditions:\n  altitudes: [0]\nresources:\n  memory: {}\n",
            usize::MAX / (1024 * 1024)
        );

        let config = Config::new_from_slice(yaml.as_bytes()).unwrap();

        assert!(config.resources.memory_bytes().is_some());
    }

    #[test]
    fn unknown_names_fail_to_deserialize() {
        let wrong_speed = b"
speeds:
  altitudes: [1000]
  values: [100]
  type: KGS
";
        let wrong_atmosphere = b"
atmosphere: arctic
conditions:
  altitudes: [1000]
";

        assert!(matches!(
            Config::new_from_slice(wrong_speed),
            Err(ConfigError::CantDeserialize(_))
        ));
        assert!(matches!(
            Config::new_from_slice(wrong_atmosphere),
            Err(ConfigError::CantDeserialize(_))
        ));
    }
}
