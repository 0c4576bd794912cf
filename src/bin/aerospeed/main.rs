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

//! Command-line driver of the Aerospeed library.
//!
//! Reads the queries from `config.yaml` (or the file given as the
//! first argument), runs them against the selected atmosphere and
//! writes the results as CSV files into the output directory.

mod configuration;
mod errors;
mod report;

use crate::{configuration::Config, errors::ModelError};
use aerospeed::{AirspeedConverter, DirectoryTables, EmbeddedTables, InputShape, TableSource};
use cap::Cap;
use env_logger::Env;
use log::{debug, error, info};
use std::{alloc, env, path::PathBuf};

/// Global allocator used by the program.
///
/// Use of static global allocator allows for capping the memory to the limit set by user
/// in configuration file and in effect provide better [OOM error](https://en.wikipedia.org/wiki/Out_of_memory) handling.
#[global_allocator]
static ALLOCATOR: Cap<alloc::System> = Cap::new(alloc::System, usize::MAX);

/// The main program function.
/// Prepares the runtime environment and calls the [`run`].
///
/// To provide meaningful error messages the `env_logger`
/// needs to be initiated before any log messages are possible to occur.
fn main() {
    #[cfg(not(feature = "debug"))]
    let logger_env = Env::new().filter_or("AEROSPEED_LOG_LEVEL", "info");

    #[cfg(feature = "debug")]
    let logger_env = Env::new().filter_or("AEROSPEED_LOG_LEVEL", "debug");

    env_logger::Builder::from_env(logger_env)
        .format_timestamp_millis()
        .init();

    match run() {
        Ok(_) => info!("Execution finished. Check the output directory and log."),
        Err(err) => error!("Execution failed with error: {}", err),
    }
}

/// Reads the configuration, prepares the output
/// and selects the table source.
fn run() -> Result<(), ModelError> {
    let config_path = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("config.yaml"), PathBuf::from);

    debug!("Reading configuration from {}", config_path.display());
    let config = Config::new_from_file(&config_path)?;

    debug!("Setting memory limit");
    let memory_limit = config
        .resources
        .memory_bytes()
        .ok_or(ModelError::MemoryLimit(config.resources.memory))?;

    ALLOCATOR
        .set_limit(memory_limit)
        .map_err(|_| ModelError::MemoryLimit(config.resources.memory))?;

    report::prepare_output_dir(&config.output)?;

    match &config.tables {
        Some(dir) => execute(&config, DirectoryTables::new(dir)),
        None => execute(&config, EmbeddedTables),
    }
}

/// Runs all queries from the configuration.
fn execute<S: TableSource>(config: &Config, source: S) -> Result<(), ModelError> {
    let converter = AirspeedConverter::with_source_and_type(source, config.atmosphere)?;
    let (bottom, top) = converter.atmosphere().altitude_range();

    info!(
        "Using {} atmosphere tabulated between {} and {} ft",
        config.atmosphere, bottom, top
    );

    if let Some(query) = &config.conditions {
        let conditions = converter.atmosphere().get_conditions(&query.altitudes);

        report::save_conditions(&config.output, &query.altitudes, &conditions)?;

        info!(
            "Written atmosphere conditions at {} altitude(s)",
            query.altitudes.len()
        );
    }

    if let Some(query) = &config.speeds {
        let speeds = converter.get_speeds(&query.altitudes, &query.values, query.kind)?;

        report::save_speeds(&config.output, &query.altitudes, &query.values, &speeds)?;

        info!(
            "Written {} {} value(s) converted at {} altitude(s) as {:?}",
            query.values.len(),
            query.kind,
            query.altitudes.len(),
            speeds.shape().unwrap_or(InputShape::Invalid)
        );
    }

    Ok(())
}
