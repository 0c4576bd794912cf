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

//! Aerospeed converts aircraft airspeed between its conventional
//! representations (indicated, calibrated, equivalent, true and Mach)
//! at arbitrary altitudes, and provides the reference atmosphere
//! properties those conversions require.
//!
//! Two components do all of the work:
//!
//! - [`AtmosphereModel`] turns a discrete altitude-indexed table of one of
//!   three reference atmospheres (standard, polar, tropical) into continuous
//!   property functions, extrapolating linearly outside the table.
//! - [`AirspeedConverter`] uses the atmosphere at the requested altitudes
//!   and compressible-flow relations to derive every speed representation
//!   from one given speed.
//!
//! Units are fixed: altitude in feet, speeds in knots or feet per second,
//! pressure in lb/ft², density in slug/ft³ and viscosity in lb·s/ft².
//!
//! ```no_run
//! use aerospeed::{AirspeedConverter, Float, SpeedType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = AirspeedConverter::new()?;
//! let altitude: Float = 10_000.0;
//! let speeds = converter.get_speeds(&altitude, &[150.0, 200.0, 250.0], SpeedType::Ktas)?;
//!
//! if let Some(mach) = speeds.get(SpeedType::Mach) {
//!     println!("Mach: {}", mach);
//! }
//! # Ok(())
//! # }
//! ```

pub mod airspeed;
pub mod atmosphere;
pub mod constants;
pub mod errors;
mod samples;

#[cfg(test)]
mod super_tests;

pub use airspeed::{AirspeedConverter, InputShape, SeaLevel, SpeedFamily, SpeedSet, SpeedType, SpeedUnit};
pub use atmosphere::{
    AtmosphereModel, AtmosphereRow, AtmosphereTable, AtmosphereType, ConditionSet, Conditions,
    DirectoryTables, EmbeddedTables, Property, TableSource,
};
pub use errors::{AtmosphereError, ConversionError, TableError};
pub use samples::Samples;

/// Floating-point type used by all computations.
#[cfg(feature = "double_precision")]
pub type Float = f64;

/// Floating-point type used by all computations.
#[cfg(not(feature = "double_precision"))]
pub type Float = f32;
