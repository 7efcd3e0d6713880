//! Plankton: ecosystem source terms for ocean tracer solvers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Plankton sub-crates. For most users, adding `plankton` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use plankton::prelude::*;
//! use plankton::models::fields::*;
//!
//! let mut state = FieldStore::new();
//! for name in [PHYTOPLANKTON, ZOOPLANKTON] {
//!     state.insert_scalar(name, vec![10.0, 2.0]);
//!     state.insert_scalar(format!("Iterated{name}"), vec![10.0, 2.0]);
//!     state.insert_zeroed(format!("{name}Source"), 2);
//! }
//! let params: Parameters = [("alpha", 1.0), ("beta", 0.1), ("gamma", 1.0), ("delta", 0.1)]
//!     .into_iter()
//!     .collect();
//!
//! predator_prey(&mut state, &params).unwrap();
//! assert_eq!(state.scalar(PHYTOPLANKTON_SOURCE).unwrap()[0], 10.0 * (1.0 - 0.1 * 10.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plankton-core` | Field traits, `FieldStore`, `Parameters`, errors |
//! | [`model`] | `plankton-model` | `BiologyModel`, `EvalContext`, `ParameterValidator` |
//! | [`models`] | `plankton-models` | The three ecosystem models, irradiance, field names |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits and errors (`plankton-core`).
///
/// Contains the field access traits ([`types::FieldReader`],
/// [`types::FieldWriter`]), the in-memory [`types::FieldStore`] and the
/// [`types::Parameters`] mapping.
pub use plankton_core as types;

/// Biology model trait and evaluation context (`plankton-model`).
///
/// The [`model::BiologyModel`] trait is the extension point for
/// user-defined ecosystem models.
pub use plankton_model as model;

/// Ecosystem models and surface irradiance (`plankton-models`).
///
/// Includes [`models::PredatorPrey`], [`models::Pznd`],
/// [`models::SixComponent`] and [`models::irradiance`].
pub use plankton_models as models;

/// Common imports for typical Plankton usage.
///
/// ```rust
/// use plankton::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use plankton_core::{
        FieldReader, FieldState, FieldStore, FieldWriter, ParameterSpec, Parameters, VectorField,
    };

    // Errors
    pub use plankton_core::{FieldError, IrradianceError, ModelError};

    // Model trait
    pub use plankton_model::{BiologyModel, EvalContext, ParameterValidator};

    // Models
    pub use plankton_models::{
        evaluate_named, model_by_name, predator_prey, pznd, short_wave_radiation,
        short_wave_radiation_rfc3339, six_component, PredatorPrey, Pznd, SixComponent,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_reaches_every_entry_point() {
        let params = Parameters::new();
        let mut state = FieldStore::new();
        for name in ["lotka_volterra", "pznd", "six_component"] {
            assert!(matches!(
                evaluate_named(name, &mut state, &params),
                Err(ModelError::MissingParameter { .. })
            ));
        }
        assert!(short_wave_radiation_rfc3339("2024-06-21T12:00:00Z", 0.0, 23.4, 0.0).unwrap() > 0.0);
    }
}
