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

//! Sub-module with the conversion result container.

use super::{compressible::PointSpeeds, InputShape, SpeedType};
use crate::Float;
use ndarray::{Array2, ArrayD, Dimension, IxDyn};
use rustc_hash::FxHashMap;

/// All speed representations computed by one conversion.
///
/// Every array has the same dimensions, decided by the [`InputShape`]:
/// one-dimensional for scalar and vector inputs, `(altitudes, speeds)`
/// for grids. The default value is the empty set returned
/// (through `unwrap_or_default`) for non-conforming inputs.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SpeedSet {
    shape: Option<InputShape>,
    values: FxHashMap<SpeedType, ArrayD<Float>>,
}

impl SpeedSet {
    /// Lays out the `(altitudes, speeds)` grid of points according to `shape`.
    pub(super) fn from_points(shape: InputShape, points: &Array2<PointSpeeds>) -> Self {
        let (altitudes, speeds) = points.dim();

        let dims = match shape.output_dims(altitudes, speeds) {
            Some(dims) => dims,
            None => return SpeedSet::default(),
        };

        let values = SpeedType::ALL
            .into_iter()
            .map(|kind| {
                let array = ArrayD::from_shape_fn(IxDyn(&dims), |index| {
                    let (i, j) = shape.grid_index(index.slice());
                    points[[i, j]].value(kind)
                });

                (kind, array)
            })
            .collect();

        SpeedSet {
            shape: Some(shape),
            values,
        }
    }

    /// Shape of the inputs, `None` for the empty set.
    pub fn shape(&self) -> Option<InputShape> {
        self.shape
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, kind: SpeedType) -> Option<&ArrayD<Float>> {
        self.values.get(&kind)
    }

    /// Value of `kind` for the `altitude`-th altitude and `speed`-th speed input.
    pub fn at(&self, kind: SpeedType, altitude: usize, speed: usize) -> Option<Float> {
        let index = self.shape?.output_index(altitude, speed)?;

        self.get(kind)?.get(&index[..]).copied()
    }

    /// Iterates over the representations in [`SpeedType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SpeedType, &ArrayD<Float>)> + '_ {
        SpeedType::ALL
            .into_iter()
            .filter_map(move |kind| self.values.get(&kind).map(|array| (kind, array)))
    }
}
