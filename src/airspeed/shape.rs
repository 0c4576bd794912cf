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

//! Sub-module classifying the shape of conversion inputs.

/// Combination of altitude and speed input sizes.
///
/// Conversions are always computed on an `(altitudes, speeds)` grid,
/// the shape decides how that grid is presented in the result.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum InputShape {
    /// One altitude and one speed, result has a single value.
    Scalar,

    /// One altitude and many speeds, result has one value per speed.
    VectorOverSpeed,

    /// Many altitudes and one speed, result has one value per altitude.
    VectorOverAltitude,

    /// Many altitudes and many speeds, result pairs every altitude with every speed.
    Grid,

    /// At least one of the inputs is empty.
    Invalid,
}

impl InputShape {
    pub fn classify(altitudes: usize, speeds: usize) -> Self {
        match (altitudes, speeds) {
            (0, _) | (_, 0) => InputShape::Invalid,
            (1, 1) => InputShape::Scalar,
            (1, _) => InputShape::VectorOverSpeed,
            (_, 1) => InputShape::VectorOverAltitude,
            _ => InputShape::Grid,
        }
    }

    /// Dimensions of the result, `None` for [`InputShape::Invalid`].
    pub fn output_dims(&self, altitudes: usize, speeds: usize) -> Option<Vec<usize>> {
        match self {
            InputShape::Scalar => Some(vec![1]),
            InputShape::VectorOverSpeed => Some(vec![speeds]),
            InputShape::VectorOverAltitude => Some(vec![altitudes]),
            InputShape::Grid => Some(vec![altitudes, speeds]),
            InputShape::Invalid => None,
        }
    }

    /// Maps the index in the result onto `(altitude, speed)` grid index.
    pub fn grid_index(&self, output_index: &[usize]) -> (usize, usize) {
        let first = output_index.first().copied().unwrap_or(0);
        let second = output_index.get(1).copied().unwrap_or(0);

        match self {
            InputShape::Scalar | InputShape::Invalid => (0, 0),
            InputShape::VectorOverSpeed => (0, first),
            InputShape::VectorOverAltitude => (first, 0),
            InputShape::Grid => (first, second),
        }
    }

    /// Maps `(altitude, speed)` grid index onto the index in the result.
    ///
    /// Returns `None` when the pair has no place in a result of this shape.
    pub fn output_index(&self, altitude: usize, speed: usize) -> Option<Vec<usize>> {
        match self {
            InputShape::Scalar if altitude == 0 && speed == 0 => Some(vec![0]),
            InputShape::VectorOverSpeed if altitude == 0 => Some(vec![speed]),
            InputShape::VectorOverAltitude if speed == 0 => Some(vec![altitude]),
            InputShape::Grid => Some(vec![altitude, speed]),
            _ => None,
        }
    }
}
