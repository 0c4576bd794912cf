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

//! Module responsible for converting airspeed between its representations.
//!
//! One given speed (of any [`SpeedType`]) at one or more altitudes is
//! converted into all nine representations at once. Local atmosphere
//! comes from the owned [`AtmosphereModel`], while sea-level reference
//! values are taken once from the standard atmosphere.
//!
//! Altitudes and speeds combine as an outer product, see [`InputShape`].

mod compressible;
mod shape;
mod speed_set;
mod speed_type;

pub use self::shape::InputShape;
pub use self::speed_set::SpeedSet;
pub use self::speed_type::{SpeedFamily, SpeedType, SpeedUnit};

use self::compressible::LocalAir;
use crate::{
    atmosphere::{AtmosphereModel, AtmosphereType, EmbeddedTables, TableSource},
    constants::SEA_LEVEL_ALTITUDE,
    errors::{AtmosphereError, ConversionError},
    samples::Samples,
    Float,
};
use log::{debug, trace};
use ndarray::{Array2, Zip};

/// Reference conditions at sea level of the standard atmosphere.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SeaLevel {
    /// Pressure in lb/ft².
    pub pressure: Float,
    /// Density in slug/ft³.
    pub density: Float,
    /// Speed of sound in ft/s.
    pub speed_of_sound: Float,
}

impl SeaLevel {
    fn from_model<S: TableSource>(model: &AtmosphereModel<S>) -> Self {
        let conditions = model.get_conditions(&SEA_LEVEL_ALTITUDE);

        SeaLevel {
            pressure: conditions.pressure,
            density: conditions.density,
            speed_of_sound: conditions.speed_of_sound,
        }
    }
}

/// Airspeed converter main struct.
///
/// As with [`AtmosphereModel`], switching the atmosphere needs `&mut self`
/// while conversions only read, so one converter can serve many threads
/// between switches.
#[derive(Debug)]
pub struct AirspeedConverter<S: TableSource = EmbeddedTables> {
    atmosphere: AtmosphereModel<S>,
    sea_level: SeaLevel,
}

impl AirspeedConverter<EmbeddedTables> {
    /// Creates the converter with bundled tables
    /// and the standard atmosphere.
    pub fn new() -> Result<Self, AtmosphereError> {
        AirspeedConverter::with_source(EmbeddedTables)
    }
}

impl<S: TableSource> AirspeedConverter<S> {
    pub fn with_source(source: S) -> Result<Self, AtmosphereError> {
        let atmosphere = AtmosphereModel::with_source(source)?;
        let sea_level = SeaLevel::from_model(&atmosphere);

        debug!(
            "Sea-level reference: {} lb/ft2, {} slug/ft3, {} ft/s",
            sea_level.pressure, sea_level.density, sea_level.speed_of_sound
        );

        Ok(AirspeedConverter {
            atmosphere,
            sea_level,
        })
    }

    /// Creates the converter with local conditions taken from the `kind` atmosphere.
    /// Reference values still come from the standard one.
    pub fn with_source_and_type(source: S, kind: AtmosphereType) -> Result<Self, AtmosphereError> {
        let mut converter = AirspeedConverter::with_source(source)?;
        converter.atmosphere.set_type(kind)?;

        Ok(converter)
    }

    pub fn sea_level(&self) -> SeaLevel {
        self.sea_level
    }

    pub fn atmosphere(&self) -> &AtmosphereModel<S> {
        &self.atmosphere
    }

    /// Switches the atmosphere used for local conditions
    /// (non-standard day conversions). Reference values are not affected.
    pub fn set_atmosphere(&mut self, kind: AtmosphereType) -> Result<(), ConversionError> {
        self.atmosphere.set_type(kind)?;
        Ok(())
    }

    /// Converts `speed` of type `kind` at `altitude` (in feet)
    /// into every speed representation.
    ///
    /// Returns [`ConversionError::NonConformingShape`] when either input is empty.
    pub fn get_speeds<A, V>(
        &self,
        altitude: &A,
        speed: &V,
        kind: SpeedType,
    ) -> Result<SpeedSet, ConversionError>
    where
        A: Samples + ?Sized,
        V: Samples + ?Sized,
    {
        let altitudes = altitude.samples();
        let speeds = speed.samples();

        let shape = InputShape::classify(altitudes.len(), speeds.len());

        if shape == InputShape::Invalid {
            return Err(ConversionError::NonConformingShape(
                altitudes.len(),
                speeds.len(),
            ));
        }

        trace!(
            "Converting {} {} value(s) at {} altitude(s) as {:?}",
            speeds.len(),
            kind,
            altitudes.len(),
            shape
        );

        let conditions = self.atmosphere.get_conditions(&altitudes);

        let local_air = Zip::from(&conditions.pressure)
            .and(&conditions.density)
            .and(&conditions.speed_of_sound)
            .map_collect(|&pressure, &density, &speed_of_sound| {
                LocalAir::new(pressure, density, speed_of_sound, &self.sea_level)
            });

        let unit = kind.unit();
        let family = kind.family();
        let values = speeds.mapv(|value| unit.to_fps(value));

        let points = Array2::from_shape_fn((altitudes.len(), speeds.len()), |(i, j)| {
            compressible::convert(family, values[j], &local_air[i], &self.sea_level)
        });

        Ok(SpeedSet::from_points(shape, &points))
    }

    /// As [`AirspeedConverter::get_speeds`] with the speed type
    /// given by its (case-insensitive) name.
    pub fn get_speeds_by_name<A, V>(
        &self,
        altitude: &A,
        speed: &V,
        kind: &str,
    ) -> Result<SpeedSet, ConversionError>
    where
        A: Samples + ?Sized,
        V: Samples + ?Sized,
    {
        let kind: SpeedType = kind.parse()?;
        self.get_speeds(altitude, speed, kind)
    }
}
