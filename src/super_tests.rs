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

//! This is a module for integration tests of the converter
//! and the atmosphere model, but with access to private fields and methods.
//!
//! Most properties checked here span both components (conversions
//! depend on the loaded table), so they do not fit any single module.

use crate::{
    airspeed::{AirspeedConverter, InputShape, SpeedType},
    atmosphere::{AtmosphereModel, AtmosphereType, Property},
    constants::KTS_TO_FPS,
    Float,
};
use float_cmp::approx_eq;
use ndarray::Array1;

const ALTITUDES: [Float; 5] = [0.0, 5_000.0, 10_000.0, 30_000.0, 45_000.0];

fn relative_eq(a: Float, b: Float, tolerance: Float) -> bool {
    (a - b).abs() <= tolerance * a.abs().max(b.abs())
}

/// Representative input value for each speed type.
fn sample_speed(kind: SpeedType) -> Float {
    match kind {
        SpeedType::Mach => 0.6,
        SpeedType::Ktas | SpeedType::Keas | SpeedType::Kcas | SpeedType::Kias => 250.0,
        SpeedType::Vtas | SpeedType::Veas | SpeedType::Vcas | SpeedType::Vias => 420.0,
    }
}

#[test]
fn input_type_is_reproduced() {
    let converter = AirspeedConverter::new().unwrap();

    for altitude in ALTITUDES {
        for kind in SpeedType::ALL {
            let speed = sample_speed(kind);
            let speeds = converter.get_speeds(&altitude, &speed, kind).unwrap();
            let reproduced = speeds.at(kind, 0, 0).unwrap();

            assert!(
                relative_eq(reproduced, speed, 1e-6),
                "{} at {} ft: {} != {}",
                kind,
                altitude,
                reproduced,
                speed
            );
        }
    }
}

#[test]
fn mach_round_trip() {
    let converter = AirspeedConverter::new().unwrap();
    let altitude: Float = 10_000.0;
    let ktas: Float = 400.0;

    let forward = converter.get_speeds(&altitude, &ktas, SpeedType::Ktas).unwrap();
    let mach = forward.at(SpeedType::Mach, 0, 0).unwrap();

    let backward = converter.get_speeds(&altitude, &mach, SpeedType::Mach).unwrap();

    assert!(approx_eq!(Float, mach, 0.626_62, epsilon = 1e-4));
    assert!(relative_eq(backward.at(SpeedType::Ktas, 0, 0).unwrap(), ktas, 1e-9));
}

#[test]
fn true_equivalent_and_mach_agree_both_ways() {
    let converter = AirspeedConverter::new().unwrap();

    for altitude in ALTITUDES {
        let kcas: Float = 280.0;
        let first = converter.get_speeds(&altitude, &kcas, SpeedType::Kcas).unwrap();

        for kind in [SpeedType::Ktas, SpeedType::Veas, SpeedType::Mach] {
            let value = first.at(kind, 0, 0).unwrap();
            let second = converter.get_speeds(&altitude, &value, kind).unwrap();

            for other in [SpeedType::Ktas, SpeedType::Keas, SpeedType::Mach] {
                assert!(relative_eq(
                    second.at(other, 0, 0).unwrap(),
                    first.at(other, 0, 0).unwrap(),
                    1e-9
                ));
            }
        }
    }
}

#[test]
fn calibrated_and_equivalent_agree_below_transonic() {
    let converter = AirspeedConverter::new().unwrap();
    let altitude: Float = 10_000.0;
    let kcas: Float = 250.0;

    let from_cas = converter.get_speeds(&altitude, &kcas, SpeedType::Kcas).unwrap();
    let keas = from_cas.at(SpeedType::Keas, 0, 0).unwrap();
    let from_eas = converter.get_speeds(&altitude, &keas, SpeedType::Keas).unwrap();

    // the series correction is an approximation of the pitot relation
    assert!(approx_eq!(Float, from_eas.at(SpeedType::Kcas, 0, 0).unwrap(), kcas, epsilon = 0.01));
}

#[test]
fn shape_laws() {
    let converter = AirspeedConverter::new().unwrap();

    let scalar_altitude: Float = 10_000.0;
    let scalar_speed: Float = 150.0;
    let scalar = converter
        .get_speeds(&scalar_altitude, &scalar_speed, SpeedType::Ktas)
        .unwrap();

    assert_eq!(scalar.shape(), Some(InputShape::Scalar));
    assert_eq!(scalar.get(SpeedType::Mach).unwrap().shape(), &[1]);

    let speeds: [Float; 3] = [150.0, 200.0, 250.0];
    let vector = converter
        .get_speeds(&scalar_altitude, &speeds, SpeedType::Ktas)
        .unwrap();

    assert_eq!(vector.get(SpeedType::Mach).unwrap().shape(), &[3]);

    let altitudes: [Float; 3] = [10_000.0, 20_000.0, 30_000.0];
    let keas: [Float; 3] = [100.0, 200.0, 300.0];
    let grid = converter.get_speeds(&altitudes, &keas, SpeedType::Keas).unwrap();

    assert_eq!(grid.shape(), Some(InputShape::Grid));

    for kind in SpeedType::ALL {
        assert_eq!(grid.get(kind).unwrap().shape(), &[3, 3]);
    }

    // row i is altitude i, column j is speed j
    for (i, altitude) in altitudes.iter().enumerate() {
        for (j, speed) in keas.iter().enumerate() {
            let single = converter.get_speeds(altitude, speed, SpeedType::Keas).unwrap();

            for kind in SpeedType::ALL {
                assert_eq!(grid.at(kind, i, j), single.at(kind, 0, 0));
            }
        }
    }
}

#[test]
fn sea_level_speeds_coincide() {
    let converter = AirspeedConverter::new().unwrap();
    let altitude: Float = 0.0;

    for kind in SpeedType::ALL {
        let speed = sample_speed(kind);
        let speeds = converter.get_speeds(&altitude, &speed, kind).unwrap();

        let vtas = speeds.at(SpeedType::Vtas, 0, 0).unwrap();
        let veas = speeds.at(SpeedType::Veas, 0, 0).unwrap();
        let vcas = speeds.at(SpeedType::Vcas, 0, 0).unwrap();
        let mach = speeds.at(SpeedType::Mach, 0, 0).unwrap();

        assert!(relative_eq(vtas, veas, 1e-9), "{}: {} != {}", kind, vtas, veas);
        assert!(relative_eq(veas, vcas, 1e-9), "{}: {} != {}", kind, veas, vcas);
        assert!(relative_eq(mach, vtas / 1116.45, 1e-6));
    }
}

#[test]
fn density_and_pressure_decrease_in_troposphere() {
    let mut model = AtmosphereModel::new().unwrap();
    let altitudes: Array1<Float> = Array1::linspace(-1_000.0, 36_000.0, 371);

    for kind in AtmosphereType::ALL {
        model.set_type(kind).unwrap();
        let conditions = model.get_conditions(&altitudes);

        for property in [Property::Density, Property::Pressure] {
            let values = conditions.get(property);

            for i in 1..values.len() {
                assert!(
                    values[i] <= values[i - 1],
                    "{} {:?} increases at {} ft",
                    kind,
                    property,
                    altitudes[i]
                );
            }
        }
    }
}

#[test]
fn extrapolation_is_continuous_at_table_top() {
    let model = AtmosphereModel::new().unwrap();
    let rows = model.table().rows();
    let (_, top) = model.altitude_range();

    let last = rows[rows.len() - 1];
    let previous = rows[rows.len() - 2];
    let step = last.altitude - previous.altitude;

    let at_top = model.get_conditions(&top);
    let above = top + 1.0;
    let beyond = model.get_conditions(&above);

    for property in Property::ALL {
        let slope = (last.value(property) - previous.value(property)) / step;
        let difference = beyond.get(property) - at_top.get(property);

        assert!(approx_eq!(Float, *at_top.get(property), last.value(property), epsilon = 1e-9));
        assert!(
            approx_eq!(Float, difference, slope, epsilon = 1e-9),
            "{:?}: {} != {}",
            property,
            difference,
            slope
        );
    }
}

#[test]
fn atmosphere_switch_is_isolated_and_reversible() {
    let mut model = AtmosphereModel::new().unwrap();
    let altitude: Float = 0.0;

    let standard = model.get_conditions(&altitude);

    model.set_type_by_name("POLAR").unwrap();
    let polar = model.get_conditions(&altitude);

    model.set_type_by_name("TROPICAL").unwrap();
    let tropical = model.get_conditions(&altitude);

    assert_ne!(polar, tropical);
    assert_ne!(polar.density, tropical.density);
    assert_ne!(polar.temperature_r, tropical.temperature_r);
    assert!(polar.density > standard.density);
    assert!(tropical.temperature_f > standard.temperature_f);

    model.set_type_by_name("STANDARD").unwrap();

    assert_eq!(model.get_conditions(&altitude), standard);
}

#[test]
fn converter_reference_ignores_other_models() {
    let converter = AirspeedConverter::new().unwrap();
    let mut model = AtmosphereModel::new().unwrap();
    model.set_type(AtmosphereType::Tropical).unwrap();

    let altitude: Float = 0.0;
    let speed: Float = 200.0;
    let speeds = converter.get_speeds(&altitude, &speed, SpeedType::Ktas).unwrap();

    assert_eq!(converter.atmosphere().kind(), AtmosphereType::Standard);
    assert!(relative_eq(speeds.at(SpeedType::Keas, 0, 0).unwrap(), speed, 1e-12));
}

#[test]
fn every_representation_is_consistent() {
    let converter = AirspeedConverter::new().unwrap();
    let pairs = [
        (SpeedType::Ktas, SpeedType::Vtas),
        (SpeedType::Keas, SpeedType::Veas),
        (SpeedType::Kcas, SpeedType::Vcas),
        (SpeedType::Kias, SpeedType::Vias),
    ];

    for altitude in ALTITUDES {
        for kind in SpeedType::ALL {
            let speed = sample_speed(kind);
            let speeds = converter.get_speeds(&altitude, &speed, kind).unwrap();

            assert_eq!(speeds.iter().count(), SpeedType::ALL.len());

            let at = |key: SpeedType| speeds.at(key, 0, 0).unwrap();

            assert_eq!(at(SpeedType::Kias), at(SpeedType::Kcas));
            assert_eq!(at(SpeedType::Vias), at(SpeedType::Vcas));

            for (knots, fps) in pairs {
                assert!(
                    relative_eq(at(knots), at(fps) / KTS_TO_FPS, 1e-12),
                    "{} vs {} from {} at {} ft",
                    knots,
                    fps,
                    kind,
                    altitude
                );
            }

            let mach = at(SpeedType::Mach);
            assert!(mach.is_finite() && mach > 0.0);
        }
    }
}
