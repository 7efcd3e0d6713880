//! Core abstraction traits for named field access.

use crate::field::VectorField;

/// Read-only access to the named fields of a simulation state.
///
/// Implemented by whatever container the host solver uses for its fields.
/// Returns `None` if the name is unknown or not readable in the current
/// context.
pub trait FieldReader {
    /// Read a scalar field as one `f64` per node.
    fn scalar(&self, name: &str) -> Option<&[f64]>;

    /// Read a vector field as a flat buffer with its component count.
    fn vector(&self, name: &str) -> Option<VectorField<'_>>;
}

/// Mutable access to the named scalar fields of a simulation state.
///
/// Models only ever write scalar source and diagnostic fields. Returns
/// `None` if the name is unknown or not writable; the models treat that as
/// "field absent", which is how optional diagnostics are skipped.
pub trait FieldWriter {
    /// Get a mutable slice for writing a scalar field.
    fn write(&mut self, name: &str) -> Option<&mut [f64]>;
}

/// A state that can be both read and written.
///
/// Blanket-implemented for every `FieldReader + FieldWriter`, so host
/// containers only implement the two halves.
pub trait FieldState: FieldReader + FieldWriter {}

impl<T: FieldReader + FieldWriter + ?Sized> FieldState for T {}
