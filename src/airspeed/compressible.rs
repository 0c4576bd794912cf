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

//! Sub-module with compressible-flow relations between speeds
//! at a single point of the (altitude, speed) grid.
//!
//! All speeds here are in feet per second.

use super::{SeaLevel, SpeedFamily, SpeedType};
use crate::{
    constants::{
        COMPRESSIBILITY_C2, COMPRESSIBILITY_C4, PITOT_EXPONENT, PITOT_EXPONENT_INV, PITOT_FACTOR,
    },
    Float,
};

/// Local atmosphere relative to the sea-level reference.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(super) struct LocalAir {
    pub pressure_ratio: Float,
    pub density_ratio: Float,
    pub speed_of_sound: Float,
}

impl LocalAir {
    pub fn new(pressure: Float, density: Float, speed_of_sound: Float, sea_level: &SeaLevel) -> Self {
        LocalAir {
            pressure_ratio: pressure / sea_level.pressure,
            density_ratio: density / sea_level.density,
            speed_of_sound,
        }
    }
}

/// All speed representations at one point.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub(super) struct PointSpeeds {
    pub true_airspeed: Float,
    pub equivalent_airspeed: Float,
    pub calibrated_airspeed: Float,
    pub mach: Float,
}

impl PointSpeeds {
    /// Value of the speed in the unit of `kind`.
    pub fn value(&self, kind: SpeedType) -> Float {
        let fps = match kind.family() {
            SpeedFamily::True => self.true_airspeed,
            SpeedFamily::Equivalent => self.equivalent_airspeed,
            SpeedFamily::Calibrated => self.calibrated_airspeed,
            SpeedFamily::Mach => return self.mach,
        };

        kind.unit().from_fps(fps)
    }
}

/// Derives every speed representation from one given speed.
///
/// `value` is in feet per second, or a Mach number for [`SpeedFamily::Mach`].
pub(super) fn convert(
    family: SpeedFamily,
    value: Float,
    local: &LocalAir,
    sea_level: &SeaLevel,
) -> PointSpeeds {
    let sqrt_sigma = local.density_ratio.sqrt();

    let (true_airspeed, equivalent_airspeed) = match family {
        SpeedFamily::True => (value, value * sqrt_sigma),
        SpeedFamily::Equivalent => (value / sqrt_sigma, value),
        SpeedFamily::Calibrated => {
            let equivalent = eas_from_cas(value, local.pressure_ratio, sea_level);
            (equivalent / sqrt_sigma, equivalent)
        }
        SpeedFamily::Mach => {
            let true_airspeed = value * local.speed_of_sound;
            (true_airspeed, true_airspeed * sqrt_sigma)
        }
    };

    let mach = match family {
        SpeedFamily::Mach => value,
        _ => true_airspeed / local.speed_of_sound,
    };

    let calibrated_airspeed = match family {
        SpeedFamily::Calibrated => value,
        _ => cas_from_eas(equivalent_airspeed, mach, local.pressure_ratio),
    };

    PointSpeeds {
        true_airspeed,
        equivalent_airspeed,
        calibrated_airspeed,
        mach,
    }
}

/// Calibrated airspeed from equivalent airspeed with the
/// fourth-order compressibility correction series.
pub(super) fn cas_from_eas(equivalent: Float, mach: Float, pressure_ratio: Float) -> Float {
    let mach_2 = mach * mach;
    let delta = pressure_ratio;

    let correction = 1.0
        + COMPRESSIBILITY_C2 * (1.0 - delta) * mach_2
        + COMPRESSIBILITY_C4 * (1.0 - 10.0 * delta + 9.0 * delta * delta) * mach_2 * mach_2;

    equivalent * correction
}

/// Equivalent airspeed from calibrated airspeed through the
/// isentropic impact pressure, subsonic flow assumed.
pub(super) fn eas_from_cas(calibrated: Float, pressure_ratio: Float, sea_level: &SeaLevel) -> Float {
    let impact_pressure = impact_pressure(calibrated, sea_level);

    let pressure = pressure_ratio * sea_level.pressure;
    let expansion = (impact_pressure / pressure + 1.0).powf(PITOT_EXPONENT_INV) - 1.0;

    sea_level.speed_of_sound * (PITOT_FACTOR * pressure_ratio * expansion).sqrt()
}

/// Impact pressure (lb/ft²) that gives `calibrated` airspeed at sea level.
pub(super) fn impact_pressure(calibrated: Float, sea_level: &SeaLevel) -> Float {
    let speed_of_sound_2 = sea_level.speed_of_sound * sea_level.speed_of_sound;
    let ratio = calibrated * calibrated / (PITOT_FACTOR * speed_of_sound_2) + 1.0;

    sea_level.pressure * (ratio.powf(PITOT_EXPONENT) - 1.0)
}
