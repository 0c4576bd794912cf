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

//! Sub-module responsible for reading and checking
//! reference atmosphere tables.
//!
//! Tables are CSV files with one row per altitude. They must contain
//! at least the following headers (other columns are ignored):
//!
//! - `Geometric_Altitude_ft`
//! - `Temperature_R`
//! - `Temperature_F`
//! - `Pressure_PSF`
//! - `Density_slug_ft3`
//! - `Speed_of_Sound_FPS`
//! - `Absolute_Viscosity_lbsec_ft2`

use super::{AtmosphereType, Property};
use crate::{
    errors::{AtmosphereError, TableError},
    Float,
};
use float_cmp::approx_eq;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::PathBuf};

const STANDARD_CSV: &str = include_str!("../../data/Atmosphere_Standard.csv");
const POLAR_CSV: &str = include_str!("../../data/Atmosphere_Polar.csv");
const TROPICAL_CSV: &str = include_str!("../../data/Atmosphere_Tropical.csv");

const ALTITUDE_COLUMN: &str = "Geometric_Altitude_ft";

/// One sample of the reference atmosphere.
///
/// Serializes back to the same headers it is read from.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Deserialize, Serialize)]
pub struct AtmosphereRow {
    /// Geometric altitude in feet.
    #[serde(rename = "Geometric_Altitude_ft")]
    pub altitude: Float,

    /// Temperature in degrees Fahrenheit.
    #[serde(rename = "Temperature_F")]
    pub temperature_f: Float,

    /// Temperature in degrees Rankine.
    #[serde(rename = "Temperature_R")]
    pub temperature_r: Float,

    /// Ambient pressure in lb/ft².
    #[serde(rename = "Pressure_PSF")]
    pub pressure: Float,

    /// Density in slug/ft³.
    #[serde(rename = "Density_slug_ft3")]
    pub density: Float,

    /// Speed of sound in ft/s.
    #[serde(rename = "Speed_of_Sound_FPS")]
    pub speed_of_sound: Float,

    /// Absolute viscosity in lb·s/ft².
    #[serde(rename = "Absolute_Viscosity_lbsec_ft2")]
    pub viscosity: Float,
}

impl AtmosphereRow {
    pub fn value(&self, property: Property) -> Float {
        match property {
            Property::TemperatureF => self.temperature_f,
            Property::TemperatureR => self.temperature_r,
            Property::Pressure => self.pressure,
            Property::Density => self.density,
            Property::SpeedOfSound => self.speed_of_sound,
            Property::Viscosity => self.viscosity,
        }
    }
}

/// Checked table of one reference atmosphere.
///
/// Rows are sorted by altitude, altitudes are unique and there are
/// always at least two rows, so the table can be interpolated.
#[derive(Clone, PartialEq, Debug)]
pub struct AtmosphereTable {
    kind: AtmosphereType,
    rows: Vec<AtmosphereRow>,
}

impl AtmosphereTable {
    /// Sorts and checks the rows provided by a table source.
    pub fn from_rows(
        kind: AtmosphereType,
        mut rows: Vec<AtmosphereRow>,
    ) -> Result<Self, TableError> {
        for row in &rows {
            check_finite(row)?;
        }

        if rows.len() < 2 {
            return Err(TableError::NotEnoughRows(rows.len()));
        }

        rows.sort_by(|a, b| a.altitude.total_cmp(&b.altitude));

        for pair in rows.windows(2) {
            if approx_eq!(Float, pair[0].altitude, pair[1].altitude, ulps = 4) {
                return Err(TableError::DuplicateAltitude(pair[0].altitude));
            }
        }

        Ok(AtmosphereTable { kind, rows })
    }

    pub fn kind(&self) -> AtmosphereType {
        self.kind
    }

    pub fn rows(&self) -> &[AtmosphereRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a checked table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lowest and highest altitude (in feet) covered by the table.
    pub fn altitude_range(&self) -> (Float, Float) {
        let first = self.rows.first().map_or(Float::NAN, |r| r.altitude);
        let last = self.rows.last().map_or(Float::NAN, |r| r.altitude);

        (first, last)
    }

    pub fn altitudes(&self) -> Vec<Float> {
        self.rows.iter().map(|r| r.altitude).collect()
    }

    pub fn column(&self, property: Property) -> Vec<Float> {
        self.rows.iter().map(|r| r.value(property)).collect()
    }
}

fn check_finite(row: &AtmosphereRow) -> Result<(), TableError> {
    if !row.altitude.is_finite() {
        return Err(TableError::NonFiniteValue(ALTITUDE_COLUMN));
    }

    for property in Property::ALL {
        if !row.value(property).is_finite() {
            return Err(TableError::NonFiniteValue(property.column_name()));
        }
    }

    Ok(())
}

/// Provider of raw atmosphere table rows.
///
/// The rows do not need to be sorted, [`AtmosphereTable::from_rows`]
/// sorts and checks them.
pub trait TableSource {
    fn load(&self, kind: AtmosphereType) -> Result<Vec<AtmosphereRow>, AtmosphereError>;
}

/// Tables bundled with the library.
///
/// Covers 0 - 100 000 ft every 1000 ft. STANDARD follows the 1976
/// standard atmosphere, POLAR and TROPICAL are cold and hot day
/// profiles sharing the standard sea-level pressure.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct EmbeddedTables;

impl TableSource for EmbeddedTables {
    fn load(&self, kind: AtmosphereType) -> Result<Vec<AtmosphereRow>, AtmosphereError> {
        let data = match kind {
            AtmosphereType::Standard => STANDARD_CSV,
            AtmosphereType::Polar => POLAR_CSV,
            AtmosphereType::Tropical => TROPICAL_CSV,
        };

        debug!("Reading bundled {} atmosphere table", kind);

        let rows = parse_rows(data.as_bytes())?;

        Ok(rows)
    }
}

/// Tables read from CSV files in a directory.
///
/// The files are expected to be named `Atmosphere_Standard.csv`,
/// `Atmosphere_Polar.csv` and `Atmosphere_Tropical.csv`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DirectoryTables {
    dir: PathBuf,
}

impl DirectoryTables {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        DirectoryTables { dir: dir.into() }
    }

    pub fn path(&self, kind: AtmosphereType) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl TableSource for DirectoryTables {
    fn load(&self, kind: AtmosphereType) -> Result<Vec<AtmosphereRow>, AtmosphereError> {
        let path = self.path(kind);

        debug!("Reading {} atmosphere table from {}", kind, path.display());

        let file = File::open(&path)?;
        let rows = parse_rows(file)?;

        Ok(rows)
    }
}

fn parse_rows<R: Read>(reader: R) -> Result<Vec<AtmosphereRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader.deserialize().collect()
}
