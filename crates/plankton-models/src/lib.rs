//! Plankton ecosystem source terms for ocean solvers.
//!
//! Three models of increasing size, each a [`BiologyModel`] with a
//! free-function entry point:
//!
//! - [`predator_prey`]: two-species Lotka-Volterra terms.
//! - [`pznd`]: phytoplankton, zooplankton, nutrient and detritus.
//! - [`six_component`]: PZND plus chlorophyll and ammonium, with a
//!   depth-dependent photic zone.
//!
//! plus the [`irradiance`] estimator the host can use to force `_PAR`.
//! Models read and write named fields through
//! [`FieldState`](plankton_core::FieldState); the names are in [`fields`].
//!
//! [`BiologyModel`]: plankton_model::BiologyModel

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fields;
pub mod irradiance;
pub mod kinetics;
pub mod predator_prey;
pub mod pznd;
pub mod registry;
pub mod six_component;

/// `log` target for per-evaluation messages.
pub const LOG_TARGET: &str = "plankton::models";

pub use irradiance::{short_wave_radiation, short_wave_radiation_rfc3339};
pub use predator_prey::{predator_prey, PredatorPrey, PredatorPreyParameters};
pub use pznd::{pznd, Pznd, PzndParameters};
pub use registry::{evaluate_named, model_by_name, MODEL_NAMES};
pub use six_component::{six_component, SixComponent, SixComponentParameters};
