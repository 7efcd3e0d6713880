//! Test utilities and mock types for Plankton development.
//!
//! Provides [`MockState`], a mock implementation of the core field traits
//! ([`FieldReader`], [`FieldWriter`]) that keeps inputs read-only and logs
//! every write request, parameter and state [`fixtures`], and a
//! [`logging`] capture for asserting on diagnostics.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod logging;

use std::collections::HashMap;

use plankton_core::{FieldReader, FieldWriter, VectorField};

/// Mock simulation state.
///
/// Inputs registered with [`set_scalar`](MockState::set_scalar) are
/// readable but not writable, so a model that tries to write a current or
/// iterated field sees `None`. Outputs registered with
/// [`add_output`](MockState::add_output) are readable and writable. Every
/// call to `write()` is recorded for assertions.
pub struct MockState {
    inputs: HashMap<String, Vec<f64>>,
    outputs: HashMap<String, Vec<f64>>,
    vectors: HashMap<String, (usize, Vec<f64>)>,
    write_log: Vec<String>,
}

impl MockState {
    pub fn new() -> Self {
        Self {
            inputs: HashMap::new(),
            outputs: HashMap::new(),
            vectors: HashMap::new(),
            write_log: Vec::new(),
        }
    }

    /// Pre-populate a read-only scalar field.
    pub fn set_scalar(&mut self, name: &str, data: Vec<f64>) {
        self.inputs.insert(name.to_string(), data);
    }

    /// Pre-populate a flat vector field with `dims` components per node.
    pub fn set_vector(&mut self, name: &str, dims: usize, data: Vec<f64>) {
        self.vectors.insert(name.to_string(), (dims, data));
    }

    /// Pre-allocate a writable output buffer, initialized to NaN so that
    /// unwritten nodes are obvious.
    pub fn add_output(&mut self, name: &str, size: usize) {
        self.outputs.insert(name.to_string(), vec![f64::NAN; size]);
    }

    /// Read back an output buffer for test assertions.
    pub fn get_output(&self, name: &str) -> Option<&[f64]> {
        self.outputs.get(name).map(|v| v.as_slice())
    }

    /// Drop a field of any kind.
    pub fn remove(&mut self, name: &str) {
        self.inputs.remove(name);
        self.outputs.remove(name);
        self.vectors.remove(name);
    }

    /// Names passed to `write()`, in call order, including failed lookups.
    pub fn write_log(&self) -> &[String] {
        &self.write_log
    }

    /// Whether any output buffer still holds an unwritten (NaN) node.
    pub fn has_unwritten(&self, name: &str) -> bool {
        self.outputs
            .get(name)
            .is_some_and(|v| v.iter().any(|x| x.is_nan()))
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldReader for MockState {
    fn scalar(&self, name: &str) -> Option<&[f64]> {
        self.inputs
            .get(name)
            .or_else(|| self.outputs.get(name))
            .map(|v| v.as_slice())
    }

    fn vector(&self, name: &str) -> Option<VectorField<'_>> {
        self.vectors
            .get(name)
            .and_then(|(dims, data)| VectorField::new(data, *dims))
    }
}

impl FieldWriter for MockState {
    fn write(&mut self, name: &str) -> Option<&mut [f64]> {
        self.write_log.push(name.to_string());
        self.outputs.get_mut(name).map(|v| v.as_mut_slice())
    }
}
