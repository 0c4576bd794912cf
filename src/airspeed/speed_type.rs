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

//! Sub-module with speed representation tags.

use crate::{constants::KTS_TO_FPS, errors::ConversionError, Float};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Speed representations known to the converter.
///
/// The leading `K` or `V` selects knots or feet per second,
/// Mach number is dimensionless.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize)]
#[serde(try_from = "String")]
pub enum SpeedType {
    Ktas,
    Vtas,
    Keas,
    Veas,
    Kcas,
    Vcas,
    Kias,
    Vias,
    Mach,
}

/// Physical kind of a speed, independent of its unit.
///
/// Indicated airspeed is treated as equal to calibrated airspeed
/// (no instrument error is modelled), so both share one family.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SpeedFamily {
    True,
    Equivalent,
    Calibrated,
    Mach,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SpeedUnit {
    Knots,
    FeetPerSecond,
    Dimensionless,
}

impl SpeedUnit {
    /// Converts the value in this unit to feet per second
    /// (dimensionless values are returned unchanged).
    pub fn to_fps(&self, value: Float) -> Float {
        match self {
            SpeedUnit::Knots => value * KTS_TO_FPS,
            SpeedUnit::FeetPerSecond | SpeedUnit::Dimensionless => value,
        }
    }

    /// Converts the value in feet per second to this unit.
    pub fn from_fps(&self, value: Float) -> Float {
        match self {
            SpeedUnit::Knots => value / KTS_TO_FPS,
            SpeedUnit::FeetPerSecond | SpeedUnit::Dimensionless => value,
        }
    }
}

impl SpeedType {
    pub const ALL: [SpeedType; 9] = [
        SpeedType::Ktas,
        SpeedType::Vtas,
        SpeedType::Keas,
        SpeedType::Veas,
        SpeedType::Kcas,
        SpeedType::Vcas,
        SpeedType::Kias,
        SpeedType::Vias,
        SpeedType::Mach,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpeedType::Ktas => "KTAS",
            SpeedType::Vtas => "VTAS",
            SpeedType::Keas => "KEAS",
            SpeedType::Veas => "VEAS",
            SpeedType::Kcas => "KCAS",
            SpeedType::Vcas => "VCAS",
            SpeedType::Kias => "KIAS",
            SpeedType::Vias => "VIAS",
            SpeedType::Mach => "MACH",
        }
    }

    pub fn family(&self) -> SpeedFamily {
        match self {
            SpeedType::Ktas | SpeedType::Vtas => SpeedFamily::True,
            SpeedType::Keas | SpeedType::Veas => SpeedFamily::Equivalent,
            SpeedType::Kcas | SpeedType::Vcas | SpeedType::Kias | SpeedType::Vias => {
                SpeedFamily::Calibrated
            }
            SpeedType::Mach => SpeedFamily::Mach,
        }
    }

    pub fn unit(&self) -> SpeedUnit {
        match self {
            SpeedType::Ktas | SpeedType::Keas | SpeedType::Kcas | SpeedType::Kias => {
                SpeedUnit::Knots
            }
            SpeedType::Vtas | SpeedType::Veas | SpeedType::Vcas | SpeedType::Vias => {
                SpeedUnit::FeetPerSecond
            }
            SpeedType::Mach => SpeedUnit::Dimensionless,
        }
    }
}

impl FromStr for SpeedType {
    type Err = ConversionError;

    /// Case-insensitive parsing of the speed tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_uppercase();

        SpeedType::ALL
            .into_iter()
            .find(|kind| kind.name() == tag)
            .ok_or_else(|| ConversionError::UnknownSpeedType(s.to_string()))
    }
}

impl TryFrom<String> for SpeedType {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SpeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{SpeedFamily, SpeedType, SpeedUnit};
    use crate::errors::ConversionError;

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("ktas".parse::<SpeedType>().unwrap(), SpeedType::Ktas);
        assert_eq!("Veas".parse::<SpeedType>().unwrap(), SpeedType::Veas);
        assert_eq!(" mach ".parse::<SpeedType>().unwrap(), SpeedType::Mach);

        for kind in SpeedType::ALL {
            assert_eq!(kind.to_string().parse::<SpeedType>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_tag() {
        let result = "KGS".parse::<SpeedType>();

        assert!(matches!(result, Err(ConversionError::UnknownSpeedType(tag)) if tag == "KGS"));
    }

    #[test]
    fn leading_letter_selects_unit() {
        for kind in SpeedType::ALL {
            let expected = match kind.name().as_bytes()[0] {
                b'K' => SpeedUnit::Knots,
                b'V' => SpeedUnit::FeetPerSecond,
                _ => SpeedUnit::Dimensionless,
            };

            assert_eq!(kind.unit(), expected);
        }
    }

    #[test]
    fn indicated_is_calibrated() {
        assert_eq!(SpeedType::Kias.family(), SpeedFamily::Calibrated);
        assert_eq!(SpeedType::Vias.family(), SpeedType::Vcas.family());
        assert_eq!(SpeedType::Mach.family(), SpeedFamily::Mach);
    }

    #[test]
    fn knots_conversion() {
        assert_eq!(SpeedUnit::Knots.to_fps(1.0), crate::constants::KTS_TO_FPS);
        assert_eq!(SpeedUnit::Dimensionless.to_fps(0.8), 0.8);
        assert_eq!(SpeedUnit::FeetPerSecond.from_fps(100.0), 100.0);
    }
}
