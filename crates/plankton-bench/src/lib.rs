//! Benchmark profiles for the Plankton ecosystem models.
//!
//! Provides pre-built [`FieldStore`] water columns. Parameter sets come
//! from `plankton_test_utils::fixtures`.
//!
//! - [`reference_profile`]: 10K nodes, every field the six-component model reads
//! - [`stress_profile`]: 100K nodes, same layout
//! - [`random_column`]: deterministic tracer values via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plankton_core::FieldStore;
use plankton_models::fields::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Tracers carried by the largest model, each with an iterated copy and a
/// source output.
pub const TRACERS: &[&str] = &[
    PHYTOPLANKTON,
    CHLOROPHYLL,
    ZOOPLANKTON,
    NUTRIENT,
    AMMONIUM,
    DETRITUS,
];

/// Deepest node of a generated column.
pub const COLUMN_DEPTH: f64 = 400.0;

/// 10K-node column.
pub fn reference_profile(seed: u64) -> FieldStore {
    random_column(10_000, seed)
}

/// 100K-node column.
pub fn stress_profile(seed: u64) -> FieldStore {
    random_column(100_000, seed)
}

/// Generate a column of `node_count` nodes evenly spaced down to
/// [`COLUMN_DEPTH`], with tracer values drawn from a seeded ChaCha8 RNG.
///
/// Current and iterated values differ by a few percent. A small share of
/// tracer values is negative so the clamping path is exercised. Both
/// diagnostics are present.
pub fn random_column(node_count: usize, seed: u64) -> FieldStore {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut store = FieldStore::new();

    for &tracer in TRACERS {
        let current: Vec<f64> = (0..node_count)
            .map(|_| rng.random_range(-0.05..2.0))
            .collect();
        let iterated: Vec<f64> = current
            .iter()
            .map(|v| v * rng.random_range(0.95..1.05))
            .collect();
        store.insert_scalar(tracer, current);
        store.insert_scalar(format!("Iterated{tracer}"), iterated);
        store.insert_zeroed(format!("{tracer}Source"), node_count);
    }

    let step = if node_count > 1 {
        COLUMN_DEPTH / (node_count - 1) as f64
    } else {
        0.0
    };
    let positions: Vec<[f64; 3]> = (0..node_count)
        .map(|k| [0.0, 0.0, -(k as f64) * step])
        .collect();
    let par = positions
        .iter()
        .map(|p| 200.0 * (p[2] / 40.0).exp() * rng.random::<f64>())
        .collect();

    store.insert_positions(COORDINATE, &positions);
    store.insert_scalar(PAR, par);
    store.insert_zeroed(NUTRIENT_ABSORPTION, node_count);
    store.insert_zeroed(PRIMARY_PRODUCTION, node_count);
    store.insert_zeroed(PHYTOPLANKTON_GRAZING, node_count);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use plankton_core::FieldReader;
    use plankton_test_utils::fixtures::{
        predator_prey_parameters, pznd_parameters, six_component_parameters,
    };

    #[test]
    fn random_column_is_deterministic() {
        let a = random_column(64, 7);
        let b = random_column(64, 7);
        let c = random_column(64, 8);
        for &tracer in TRACERS {
            assert_eq!(a.scalar(tracer), b.scalar(tracer));
        }
        assert_ne!(a.scalar(PHYTOPLANKTON), c.scalar(PHYTOPLANKTON));
    }

    #[test]
    fn column_spans_full_depth() {
        let store = random_column(5, 1);
        let coords = store.vector(COORDINATE).unwrap();
        assert_eq!(coords.node_count(), 5);
        assert_eq!(coords.component(4, 2), -COLUMN_DEPTH);
        assert!(store.scalar(PAR).unwrap().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn profiles_run_every_model() {
        let mut store = random_column(128, 3);
        plankton_models::predator_prey(&mut store, &predator_prey_parameters()).unwrap();
        plankton_models::pznd(&mut store, &pznd_parameters()).unwrap();
        plankton_models::six_component(&mut store, &six_component_parameters()).unwrap();
        for &tracer in TRACERS {
            let sources = store.scalar(&format!("{tracer}Source")).unwrap();
            assert!(sources.iter().all(|v| v.is_finite()), "{tracer}");
        }
    }
}
