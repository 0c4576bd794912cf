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

//! Module containing the interpolation method.

use super::bisection;
use crate::{errors::TableError, Float};

/// Piecewise-linear function of altitude built from table samples.
///
/// Between two consecutive samples the value is interpolated linearly.
/// Outside the sampled range the first or last segment is extended,
/// so the function is defined (and continuous) for every altitude.
#[derive(Clone, PartialEq, Debug)]
pub struct LinearInterpolant {
    xs: Vec<Float>,
    ys: Vec<Float>,
}

impl LinearInterpolant {
    /// Creates the interpolant from abscissas sorted ascendingly
    /// without duplicates and matching ordinates.
    pub fn new(xs: Vec<Float>, ys: Vec<Float>) -> Result<Self, TableError> {
        if xs.len() < 2 || xs.len() != ys.len() {
            return Err(TableError::NotEnoughRows(xs.len().min(ys.len())));
        }

        Ok(LinearInterpolant { xs, ys })
    }

    pub fn evaluate(&self, x: Float) -> Float {
        // at least two samples are guaranteed by the constructor
        let i = bisection::find_segment(&self.xs, &x);

        let (x_0, x_1) = (self.xs[i], self.xs[i + 1]);
        let (y_0, y_1) = (self.ys[i], self.ys[i + 1]);

        let slope = (y_1 - y_0) / (x_1 - x_0);

        y_0 + slope * (x - x_0)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearInterpolant;
    use crate::{errors::TableError, Float};
    use float_cmp::approx_eq;

    fn interpolant() -> LinearInterpolant {
        LinearInterpolant::new(vec![0.0, 10.0, 30.0], vec![100.0, 80.0, 20.0]).unwrap()
    }

    #[test]
    fn hits_samples_exactly() {
        let interp = interpolant();

        assert!(approx_eq!(Float, interp.evaluate(0.0), 100.0));
        assert!(approx_eq!(Float, interp.evaluate(10.0), 80.0));
        assert!(approx_eq!(Float, interp.evaluate(30.0), 20.0));
    }

    #[test]
    fn interpolates_between_samples() {
        let interp = interpolant();

        assert!(approx_eq!(Float, interp.evaluate(5.0), 90.0, epsilon = 1e-9));
        assert!(approx_eq!(Float, interp.evaluate(20.0), 50.0, epsilon = 1e-9));
    }

    #[test]
    fn extrapolates_with_edge_segments() {
        let interp = interpolant();

        assert!(approx_eq!(Float, interp.evaluate(-10.0), 120.0, epsilon = 1e-9));
        assert!(approx_eq!(Float, interp.evaluate(40.0), -10.0, epsilon = 1e-9));
    }

    #[test]
    fn rejects_single_point() {
        let result = LinearInterpolant::new(vec![0.0], vec![1.0]);

        assert_eq!(result, Err(TableError::NotEnoughRows(1)));
    }
}
