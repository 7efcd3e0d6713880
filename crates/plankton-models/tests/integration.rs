//! End-to-end evaluation through `FieldStore`, the way a host solver
//! drives the models: fill inputs, call the entry point, read sources.

use plankton_core::{FieldReader, FieldStore, FieldWriter, ModelError};
use plankton_models::fields::*;
use plankton_models::{evaluate_named, predator_prey, pznd, short_wave_radiation, six_component};
use plankton_test_utils::fixtures::{
    predator_prey_parameters, pznd_parameters, six_component_parameters,
};
use proptest::prelude::*;

const TRACERS: &[&str] = &[
    PHYTOPLANKTON,
    CHLOROPHYLL,
    ZOOPLANKTON,
    NUTRIENT,
    AMMONIUM,
    DETRITUS,
];

fn iterated(name: &str) -> String {
    format!("Iterated{name}")
}

fn source(name: &str) -> String {
    format!("{name}Source")
}

/// A water column with every field either model needs.
fn column(depths: &[f64], value: f64, par: f64) -> FieldStore {
    let n = depths.len();
    let mut store = FieldStore::new();
    for &tracer in TRACERS {
        store.insert_scalar(tracer, vec![value; n]);
        store.insert_scalar(iterated(tracer), vec![value; n]);
        store.insert_zeroed(source(tracer), n);
    }
    store.insert_scalar(PAR, vec![par; n]);
    store.insert_zeroed(NUTRIENT_ABSORPTION, n);
    let positions: Vec<[f64; 3]> = depths.iter().map(|&d| [0.0, 0.0, -d]).collect();
    store.insert_positions(COORDINATE, &positions);
    store
}

#[test]
fn predator_prey_worked_example() {
    let mut store = FieldStore::new();
    for (name, value) in [(PHYTOPLANKTON, 10.0), (ZOOPLANKTON, 5.0)] {
        store.insert_scalar(name, vec![value]);
        store.insert_scalar(iterated(name), vec![value]);
        store.insert_zeroed(source(name), 1);
    }
    predator_prey(&mut store, &predator_prey_parameters()).unwrap();

    assert_eq!(store.scalar(PHYTOPLANKTON_SOURCE), Some(&[5.0][..]));
    assert_eq!(store.scalar(ZOOPLANKTON_SOURCE), Some(&[0.0][..]));
}

#[test]
fn pznd_column_writes_finite_sources() {
    let depths = [0.0, 25.0, 50.0, 200.0];
    let mut store = column(&depths, 0.4, 150.0);
    store.insert_zeroed(PRIMARY_PRODUCTION, depths.len());

    pznd(&mut store, &pznd_parameters()).unwrap();

    for name in [
        PHYTOPLANKTON_SOURCE,
        ZOOPLANKTON_SOURCE,
        NUTRIENT_SOURCE,
        DETRITUS_SOURCE,
        PRIMARY_PRODUCTION,
    ] {
        let values = store.scalar(name).unwrap();
        assert!(values.iter().all(|v| v.is_finite()), "{name}: {values:?}");
    }
    assert!(store.scalar(PRIMARY_PRODUCTION).unwrap()[0] > 0.0);
    assert!(store.scalar(PHYTOPLANKTON_GRAZING).is_none());
    assert_eq!(store.scalar(NUTRIENT_ABSORPTION), Some(&[0.0; 4][..]));
}

#[test]
fn six_component_deep_ammonium_nitrifies() {
    let depths = [10.0, 500.0];
    let mut store = column(&depths, 0.4, 0.0);
    six_component(&mut store, &six_component_parameters()).unwrap();

    // In the dark nothing grows, so only nitrification separates the nodes.
    let nitrate = store.scalar(NUTRIENT_SOURCE).unwrap();
    assert_eq!(nitrate[0], 0.0);
    assert!((nitrate[1] - 0.1 * 0.4).abs() < 1e-12);
}

#[test]
fn six_component_without_k_p_leaves_state_untouched() {
    let mut params = six_component_parameters();
    params.remove("k_p");
    let mut store = column(&[0.0], 0.4, 100.0);
    store.insert_scalar(PHYTOPLANKTON_SOURCE, vec![-1.0]);

    let err = six_component(&mut store, &params).unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingParameter {
            model: "PCZNDA".into(),
            missing: vec!["k_p".into()],
        }
    );
    assert_eq!(store.scalar(PHYTOPLANKTON_SOURCE), Some(&[-1.0][..]));
}

#[test]
fn mismatched_output_fails_before_any_write() {
    let mut store = column(&[0.0, 1.0], 0.4, 100.0);
    store.insert_scalar(DETRITUS_SOURCE, vec![7.0]);
    let err = pznd(&mut store, &pznd_parameters()).unwrap_err();
    assert!(matches!(err, ModelError::NodeCountMismatch { .. }));
    assert_eq!(store.scalar(PHYTOPLANKTON_SOURCE), Some(&[0.0, 0.0][..]));
}

#[test]
fn registry_and_entry_point_agree() {
    let mut direct = column(&[0.0, 120.0], 0.3, 80.0);
    let mut named = column(&[0.0, 120.0], 0.3, 80.0);
    six_component(&mut direct, &six_component_parameters()).unwrap();
    evaluate_named("six_component", &mut named, &six_component_parameters()).unwrap();
    for &tracer in TRACERS {
        let name = source(tracer);
        assert_eq!(direct.scalar(&name), named.scalar(&name), "{name}");
    }
}

#[test]
fn irradiance_forces_par_over_a_day() {
    use chrono::{NaiveDate, Timelike};

    let mut store = column(&[0.0], 0.4, 0.0);
    let day = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let mut produced = 0.0;
    for hour in 0..24 {
        let t = day.and_hms_opt(hour, 0, 0).unwrap();
        let q = short_wave_radiation(&t, 0.0, 30.0, 0.3);
        store.write(PAR).unwrap()[0] = q;
        pznd(&mut store, &pznd_parameters()).unwrap();
        let growth = store.scalar(PHYTOPLANKTON_SOURCE).unwrap()[0];
        if t.hour() < 4 {
            assert_eq!(q, 0.0);
        }
        produced += growth;
    }
    assert!(produced.is_finite());
}

proptest! {
    #[test]
    fn negative_tracers_act_as_zero(
        current in -5.0f64..0.0,
        next in -5.0f64..0.0,
        par in -50.0f64..0.0,
    ) {
        let params = six_component_parameters();

        let mut negative = column(&[30.0, 130.0], 0.0, par);
        for &tracer in TRACERS {
            negative.insert_scalar(tracer, vec![current; 2]);
            negative.insert_scalar(iterated(tracer), vec![next; 2]);
        }
        let mut zero = column(&[30.0, 130.0], 0.0, 0.0);

        six_component(&mut negative, &params).unwrap();
        six_component(&mut zero, &params).unwrap();
        for &tracer in TRACERS {
            let name = source(tracer);
            prop_assert_eq!(negative.scalar(&name), zero.scalar(&name));
        }

        pznd(&mut negative, &pznd_parameters()).unwrap();
        pznd(&mut zero, &pznd_parameters()).unwrap();
        for name in [PHYTOPLANKTON_SOURCE, ZOOPLANKTON_SOURCE, NUTRIENT_SOURCE, DETRITUS_SOURCE] {
            prop_assert_eq!(negative.scalar(name), zero.scalar(name));
        }
    }
}
