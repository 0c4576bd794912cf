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

//! Module containing constants used by the conversions.

use crate::Float;

/// Feet per second in one knot.
#[allow(clippy::excessive_precision)]
pub const KTS_TO_FPS: Float = 1.687_809_9;

/// Exponent of the isentropic pitot relation, `γ/(γ-1)` for air (`γ = 1.4`).
pub const PITOT_EXPONENT: Float = 3.5;

/// Inverse of [`PITOT_EXPONENT`], `(γ-1)/γ`.
pub const PITOT_EXPONENT_INV: Float = 2.0 / 7.0;

/// Factor `2/(γ-1)` appearing in the subsonic pitot relation.
pub const PITOT_FACTOR: Float = 5.0;

/// Second-order coefficient of the EAS to CAS compressibility correction series.
pub const COMPRESSIBILITY_C2: Float = 0.125;

/// Fourth-order coefficient of the EAS to CAS compressibility correction series.
pub const COMPRESSIBILITY_C4: Float = 0.004_687_5;

/// Altitude (in feet) at which sea-level reference conditions are taken.
pub const SEA_LEVEL_ALTITUDE: Float = 0.0;
