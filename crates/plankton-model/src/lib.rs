//! Biology model trait and evaluation context for Plankton.
//!
//! The [`BiologyModel`] trait defines the `&self` evaluate function; an
//! [`EvalContext`] wraps the host state for one call, checking node counts
//! and writability up front so that a failed call writes nothing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod model;
pub mod validate;

pub use context::EvalContext;
pub use model::BiologyModel;
pub use validate::ParameterValidator;
