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

//! Module containg methods for conducting
//! binary search (bisection) of the table segment
//! bracketing the searched value.

/// Core bisection function, a binary search adapted to
/// finding the segment `[array[i], array[i + 1]]` used for
/// interpolating (or extrapolating) at `x`.
///
/// `array` must be sorted ascendingly. Values below the first item
/// map onto the first segment and values above the last item onto
/// the last segment, so that the two nearest points are always used.
///
/// For arrays shorter than two items `0` is returned.
pub fn find_segment<T: PartialOrd>(array: &[T], x: &T) -> usize {
    let last_segment = array.len().saturating_sub(2);

    let mut lo = 0;
    let mut hi = last_segment;

    // searching for the rightmost item not greater than x
    while lo < hi {
        let mid = (lo + hi + 1) / 2;

        if array[mid] <= *x {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    lo
}
