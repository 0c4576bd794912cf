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

//! Module writing query results to the output directory.
//!
//! `conditions.csv` uses the same headers as atmosphere tables,
//! so it can be read back as one. `speeds.csv` has one row
//! per (altitude, speed) pair.

use crate::errors::ModelError;
use aerospeed::{AtmosphereRow, ConditionSet, Float, SpeedSet, SpeedType};
use log::debug;
use std::{fs, path::Path};

pub const CONDITIONS_FILE: &str = "conditions.csv";
pub const SPEEDS_FILE: &str = "speeds.csv";

/// Makes sure the output directory exists and is empty.
pub fn prepare_output_dir(out_path: &Path) -> Result<(), ModelError> {
    debug!("Checking and setting output directory");

    if out_path.is_dir() {
        if out_path.read_dir()?.next().is_none() {
            debug!("Output directory exists but is empty so continuing");
        } else {
            return Err(ModelError::FaultyOutput(
                "Output directory exists and is not empty",
            ));
        }
    } else {
        debug!("Output directory does not exist so creating a new one");
        fs::create_dir_all(out_path)?;
    }

    Ok(())
}

pub fn save_conditions(
    out_dir: &Path,
    altitudes: &[Float],
    conditions: &ConditionSet,
) -> Result<(), ModelError> {
    let out_path = out_dir.join(CONDITIONS_FILE);
    let mut out_file = csv::Writer::from_path(out_path)?;

    for (i, &altitude) in altitudes.iter().enumerate() {
        out_file.serialize(AtmosphereRow {
            altitude,
            temperature_f: conditions.temperature_f[i],
            temperature_r: conditions.temperature_r[i],
            pressure: conditions.pressure[i],
            density: conditions.density[i],
            speed_of_sound: conditions.speed_of_sound[i],
            viscosity: conditions.viscosity[i],
        })?;
    }

    out_file.flush()?;

    Ok(())
}

pub fn save_speeds(
    out_dir: &Path,
    altitudes: &[Float],
    speeds: &[Float],
    result: &SpeedSet,
) -> Result<(), ModelError> {
    let out_path = out_dir.join(SPEEDS_FILE);
    let mut out_file = csv::Writer::from_path(out_path)?;

    let mut header = vec!["Altitude_ft"];
    header.extend(SpeedType::ALL.iter().map(|kind| kind.name()));
    out_file.write_record(&header)?;

    for (i, altitude) in altitudes.iter().enumerate() {
        for j in 0..speeds.len() {
            let mut record = Vec::with_capacity(SpeedType::ALL.len() + 1);
            record.push(altitude.to_string());

            for kind in SpeedType::ALL {
                let value = result.at(kind, i, j).ok_or(ModelError::FaultyOutput(
                    "Converted speeds do not match the query",
                ))?;

                record.push(value.to_string());
            }

            out_file.write_record(&record)?;
        }
    }

    out_file.flush()?;

    Ok(())
}
