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

//! Module with the scalar-or-sequence input abstraction.
//!
//! Altitudes and speeds can be given either as a single value or as
//! a one-dimensional sequence. The [`Samples`] trait lets the query
//! methods accept both, and keeps the output shaped like the input:
//! a scalar in gives a scalar out, a sequence in gives an [`Array1`] out.

use crate::Float;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};
use std::slice;

/// Input that is either a single value or a 1-D sequence of values.
pub trait Samples {
    /// Type of the result when a function is mapped over the samples.
    type Output;

    /// Flat view over all samples. A scalar is viewed as a one-element sequence.
    fn samples(&self) -> ArrayView1<'_, Float>;

    /// Applies `f` to every sample, keeping the input shape.
    fn map_samples<F: Fn(Float) -> Float>(&self, f: F) -> Self::Output;
}

impl Samples for Float {
    type Output = Float;

    fn samples(&self) -> ArrayView1<'_, Float> {
        ArrayView1::from(slice::from_ref(self))
    }

    fn map_samples<F: Fn(Float) -> Float>(&self, f: F) -> Float {
        f(*self)
    }
}

impl Samples for [Float] {
    type Output = Array1<Float>;

    fn samples(&self) -> ArrayView1<'_, Float> {
        ArrayView1::from(self)
    }

    fn map_samples<F: Fn(Float) -> Float>(&self, f: F) -> Array1<Float> {
        self.samples().mapv(f)
    }
}

impl<const N: usize> Samples for [Float; N] {
    type Output = Array1<Float>;

    fn samples(&self) -> ArrayView1<'_, Float> {
        ArrayView1::from(&self[..])
    }

    fn map_samples<F: Fn(Float) -> Float>(&self, f: F) -> Array1<Float> {
        self.samples().mapv(f)
    }
}

impl Samples for Vec<Float> {
    type Output = Array1<Float>;

    fn samples(&self) -> ArrayView1<'_, Float> {
        ArrayView1::from(self.as_slice())
    }

    fn map_samples<F: Fn(Float) -> Float>(&self, f: F) -> Array1<Float> {
        self.samples().mapv(f)
    }
}

impl<S> Samples for ArrayBase<S, Ix1>
where
    S: Data<Elem = Float>,
{
    type Output = Array1<Float>;

    fn samples(&self) -> ArrayView1<'_, Float> {
        self.view()
    }

    fn map_samples<F: Fn(Float) -> Float>(&self, f: F) -> Array1<Float> {
        self.mapv(f)
    }
}
