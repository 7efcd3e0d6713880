//! Core types and traits for the Plankton biogeochemistry library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Plankton workspace:
//! named field access, the parameter mapping, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod params;
pub mod traits;

pub use error::{FieldError, IrradianceError, ModelError};
pub use field::{FieldStore, VectorField};
pub use params::{ParameterSpec, Parameters};
pub use traits::{FieldReader, FieldState, FieldWriter};
