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

use aerospeed::{AtmosphereError, ConversionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Error while reading config.yaml: {0}")]
    Config(#[from] ConfigError),

    #[error("Error while loading atmosphere: {0}")]
    Atmosphere(#[from] AtmosphereError),

    #[error("Error while converting speeds: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Cannot set memory limit of {0} MB")]
    MemoryLimit(usize),

    #[error("Output directory error: {0}")]
    FaultyOutput(&'static str),

    #[error("Cannot access output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot write output file: {0}")]
    CantWrite(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot open config.yaml: {0}")]
    CantOpenFile(#[from] std::io::Error),

    #[error("Cannot deserialize config.yaml: {0}")]
    CantDeserialize(#[from] serde_yaml::Error),

    #[error("Configuration component is out of bounds {0}")]
    OutOfBounds(&'static str),
}
