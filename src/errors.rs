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

use crate::Float;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtmosphereError {
    #[error("Unknown atmosphere type '{0}', expected one of: STANDARD, POLAR, TROPICAL")]
    UnknownAtmosphereType(String),

    #[error("Cannot open atmosphere table: {0}")]
    CantOpenFile(#[from] std::io::Error),

    #[error("Cannot parse atmosphere table: {0}")]
    CantParse(#[from] csv::Error),

    #[error("Atmosphere table is invalid: {0}")]
    InvalidTable(#[from] TableError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("at least 2 rows are needed for interpolation, got {0}")]
    NotEnoughRows(usize),

    #[error("altitude {0} ft appears more than once")]
    DuplicateAltitude(Float),

    #[error("non-finite value in column {0}")]
    NonFiniteValue(&'static str),
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Altitude ({0} values) and speed ({1} values) do not form a conforming shape")]
    NonConformingShape(usize, usize),

    #[error(
        "Unknown speed type '{0}', expected one of: KTAS, VTAS, KEAS, VEAS, KCAS, VCAS, KIAS, VIAS, MACH"
    )]
    UnknownSpeedType(String),

    #[error("Error while switching atmosphere: {0}")]
    Atmosphere(#[from] AtmosphereError),
}
