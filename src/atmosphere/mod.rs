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

//! Module responsible for reading and storing reference atmosphere
//! tables, and providing atmosphere properties at any altitude.
//!
//! Each property of the loaded table gets its own piecewise-linear
//! interpolant. Queries outside the table altitude range are answered
//! by linear extrapolation of the nearest table segment, they never fail.

mod bisection;
mod interpolation;
mod table;

pub use self::table::{AtmosphereRow, AtmosphereTable, DirectoryTables, EmbeddedTables, TableSource};

use self::interpolation::LinearInterpolant;
use crate::{errors::AtmosphereError, samples::Samples, Float};
use log::{debug, trace};
use ndarray::Array1;
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Reference atmospheres that can be loaded.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum AtmosphereType {
    #[default]
    Standard,
    Polar,
    Tropical,
}

impl AtmosphereType {
    pub const ALL: [AtmosphereType; 3] = [
        AtmosphereType::Standard,
        AtmosphereType::Polar,
        AtmosphereType::Tropical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AtmosphereType::Standard => "STANDARD",
            AtmosphereType::Polar => "POLAR",
            AtmosphereType::Tropical => "TROPICAL",
        }
    }

    /// Name of the table file used by [`DirectoryTables`].
    pub fn file_name(&self) -> &'static str {
        match self {
            AtmosphereType::Standard => "Atmosphere_Standard.csv",
            AtmosphereType::Polar => "Atmosphere_Polar.csv",
            AtmosphereType::Tropical => "Atmosphere_Tropical.csv",
        }
    }
}

impl FromStr for AtmosphereType {
    type Err = AtmosphereError;

    /// Case-insensitive parsing of the atmosphere name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(AtmosphereType::Standard),
            "POLAR" => Ok(AtmosphereType::Polar),
            "TROPICAL" => Ok(AtmosphereType::Tropical),
            _ => Err(AtmosphereError::UnknownAtmosphereType(s.to_string())),
        }
    }
}

impl TryFrom<String> for AtmosphereType {
    type Error = AtmosphereError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AtmosphereType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum containing atmosphere properties
/// that can be requested.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Property {
    TemperatureF,
    TemperatureR,
    Pressure,
    Density,
    SpeedOfSound,
    Viscosity,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::TemperatureF,
        Property::TemperatureR,
        Property::Pressure,
        Property::Density,
        Property::SpeedOfSound,
        Property::Viscosity,
    ];

    /// Key of the property in query results.
    pub fn key(&self) -> &'static str {
        match self {
            Property::TemperatureF => "TEMPERATURE_F",
            Property::TemperatureR => "TEMPERATURE_R",
            Property::Pressure => "PRESSURE",
            Property::Density => "DENSITY",
            Property::SpeedOfSound => "SPEEDOFSOUND",
            Property::Viscosity => "VISCOSITY",
        }
    }

    /// Header of the property column in atmosphere tables.
    pub fn column_name(&self) -> &'static str {
        match self {
            Property::TemperatureF => "Temperature_F",
            Property::TemperatureR => "Temperature_R",
            Property::Pressure => "Pressure_PSF",
            Property::Density => "Density_slug_ft3",
            Property::SpeedOfSound => "Speed_of_Sound_FPS",
            Property::Viscosity => "Absolute_Viscosity_lbsec_ft2",
        }
    }
}

/// Atmosphere properties at the queried altitude(s).
///
/// `T` is [`Float`] when a single altitude was queried
/// and [`Array1`] of the same length as the query otherwise.
#[derive(Clone, PartialEq, Debug)]
pub struct Conditions<T> {
    /// Temperature in degrees Fahrenheit.
    pub temperature_f: T,
    /// Temperature in degrees Rankine.
    pub temperature_r: T,
    /// Ambient pressure in lb/ft².
    pub pressure: T,
    /// Density in slug/ft³.
    pub density: T,
    /// Speed of sound in ft/s.
    pub speed_of_sound: T,
    /// Absolute viscosity in lb·s/ft².
    pub viscosity: T,
}

impl<T> Conditions<T> {
    pub fn get(&self, property: Property) -> &T {
        match property {
            Property::TemperatureF => &self.temperature_f,
            Property::TemperatureR => &self.temperature_r,
            Property::Pressure => &self.pressure,
            Property::Density => &self.density,
            Property::SpeedOfSound => &self.speed_of_sound,
            Property::Viscosity => &self.viscosity,
        }
    }
}

/// Conditions queried for a sequence of altitudes.
pub type ConditionSet = Conditions<Array1<Float>>;

/// Interpolants of all properties of one table.
#[derive(Clone, PartialEq, Debug)]
struct Interpolants {
    temperature_f: LinearInterpolant,
    temperature_r: LinearInterpolant,
    pressure: LinearInterpolant,
    density: LinearInterpolant,
    speed_of_sound: LinearInterpolant,
    viscosity: LinearInterpolant,
}

impl Interpolants {
    fn new(table: &AtmosphereTable) -> Result<Self, AtmosphereError> {
        let altitudes = table.altitudes();
        let build = |property: Property| LinearInterpolant::new(altitudes.clone(), table.column(property));

        Ok(Interpolants {
            temperature_f: build(Property::TemperatureF)?,
            temperature_r: build(Property::TemperatureR)?,
            pressure: build(Property::Pressure)?,
            density: build(Property::Density)?,
            speed_of_sound: build(Property::SpeedOfSound)?,
            viscosity: build(Property::Viscosity)?,
        })
    }

    fn get(&self, property: Property) -> &LinearInterpolant {
        match property {
            Property::TemperatureF => &self.temperature_f,
            Property::TemperatureR => &self.temperature_r,
            Property::Pressure => &self.pressure,
            Property::Density => &self.density,
            Property::SpeedOfSound => &self.speed_of_sound,
            Property::Viscosity => &self.viscosity,
        }
    }
}

/// Atmosphere model main struct storing the active
/// reference atmosphere and answering property queries.
///
/// [`AtmosphereModel::set_type`] is the only mutator and it takes `&mut self`,
/// so a model shared between threads has to be wrapped in a lock by the caller.
/// Components needing different atmospheres at the same time should hold
/// separate models.
#[derive(Debug)]
pub struct AtmosphereModel<S: TableSource = EmbeddedTables> {
    source: S,
    table: AtmosphereTable,
    interpolants: Interpolants,
}

impl AtmosphereModel<EmbeddedTables> {
    /// Creates the model with bundled tables and
    /// the standard atmosphere loaded.
    pub fn new() -> Result<Self, AtmosphereError> {
        AtmosphereModel::with_source(EmbeddedTables)
    }
}

impl<S: TableSource> AtmosphereModel<S> {
    /// Creates the model reading tables from `source`,
    /// with the standard atmosphere loaded.
    pub fn with_source(source: S) -> Result<Self, AtmosphereError> {
        AtmosphereModel::with_source_and_type(source, AtmosphereType::Standard)
    }

    pub fn with_source_and_type(source: S, kind: AtmosphereType) -> Result<Self, AtmosphereError> {
        let (table, interpolants) = load_atmosphere(&source, kind)?;

        Ok(AtmosphereModel {
            source,
            table,
            interpolants,
        })
    }

    /// Switches the active atmosphere.
    ///
    /// The new table and interpolants are fully built before
    /// the old ones are discarded, so on error the previous
    /// atmosphere stays active.
    pub fn set_type(&mut self, kind: AtmosphereType) -> Result<(), AtmosphereError> {
        debug!("Switching atmosphere from {} to {}", self.table.kind(), kind);

        let (table, interpolants) = load_atmosphere(&self.source, kind)?;

        self.table = table;
        self.interpolants = interpolants;

        Ok(())
    }

    /// Switches the active atmosphere by its (case-insensitive) name.
    pub fn set_type_by_name(&mut self, name: &str) -> Result<(), AtmosphereError> {
        let kind: AtmosphereType = name.parse()?;
        self.set_type(kind)
    }

    pub fn kind(&self) -> AtmosphereType {
        self.table.kind()
    }

    pub fn table(&self) -> &AtmosphereTable {
        &self.table
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Altitude range (in feet) covered by the active table.
    /// Queries outside it are extrapolated.
    pub fn altitude_range(&self) -> (Float, Float) {
        self.table.altitude_range()
    }

    /// Returns all properties at the given altitude(s) in feet,
    /// shaped like the query.
    pub fn get_conditions<A: Samples + ?Sized>(&self, altitude: &A) -> Conditions<A::Output> {
        trace!(
            "Querying {} atmosphere at {} altitude(s)",
            self.kind(),
            altitude.samples().len()
        );

        Conditions {
            temperature_f: self.get_property(altitude, Property::TemperatureF),
            temperature_r: self.get_property(altitude, Property::TemperatureR),
            pressure: self.get_property(altitude, Property::Pressure),
            density: self.get_property(altitude, Property::Density),
            speed_of_sound: self.get_property(altitude, Property::SpeedOfSound),
            viscosity: self.get_property(altitude, Property::Viscosity),
        }
    }

    /// Returns one property at the given altitude(s) in feet.
    pub fn get_property<A: Samples + ?Sized>(&self, altitude: &A, property: Property) -> A::Output {
        let interpolant = self.interpolants.get(property);

        altitude.map_samples(|h| interpolant.evaluate(h))
    }
}

/// Reads the table of given type and builds its interpolants.
fn load_atmosphere<S: TableSource>(
    source: &S,
    kind: AtmosphereType,
) -> Result<(AtmosphereTable, Interpolants), AtmosphereError> {
    let rows = source.load(kind)?;
    let table = AtmosphereTable::from_rows(kind, rows)?;
    let interpolants = Interpolants::new(&table)?;

    debug!(
        "Loaded {} atmosphere with {} rows between {} and {} ft",
        kind,
        table.len(),
        table.altitude_range().0,
        table.altitude_range().1
    );

    Ok((table, interpolants))
}
