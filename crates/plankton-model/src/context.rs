//! Execution context for one model evaluation.
//!
//! [`EvalContext`] wraps the host state for a single call. It fixes the
//! node count from an anchor field, checks every other field against it,
//! and hands out midpoint working values and output buffers.

use plankton_core::{FieldState, ModelError, VectorField};

/// Execution context passed through a model's `evaluate()`.
///
/// Uses dynamic dispatch (`&mut dyn FieldState`) so the
/// [`BiologyModel`](crate::BiologyModel) trait stays object-safe and
/// mock states from `plankton-test-utils` plug straight in.
///
/// Reads hand back owned per-node vectors, so the borrow of the state ends
/// before any output is written. Call [`prepare_outputs`](Self::prepare_outputs)
/// before computing anything: after it succeeds, writing cannot fail.
pub struct EvalContext<'a> {
    state: &'a mut dyn FieldState,
    model: &'a str,
    node_count: usize,
}

impl<'a> EvalContext<'a> {
    /// Bind to `state`, taking the node count from scalar field `anchor`.
    ///
    /// # Errors
    ///
    /// [`ModelError::FieldNotReadable`] if `anchor` is absent.
    pub fn new(
        state: &'a mut dyn FieldState,
        model: &'a str,
        anchor: &str,
    ) -> Result<Self, ModelError> {
        let node_count = state
            .scalar(anchor)
            .ok_or_else(|| ModelError::FieldNotReadable {
                name: anchor.to_string(),
            })?
            .len();
        Ok(Self {
            state,
            model,
            node_count,
        })
    }

    /// Number of nodes evaluated in this call.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Name of the model being evaluated.
    pub fn model(&self) -> &str {
        self.model
    }

    /// Read a scalar input, checking its node count.
    pub fn scalar(&self, name: &str) -> Result<&[f64], ModelError> {
        let data = self
            .state
            .scalar(name)
            .ok_or_else(|| ModelError::FieldNotReadable {
                name: name.to_string(),
            })?;
        self.check_len(name, data.len())?;
        Ok(data)
    }

    /// Read a vector input with at least `min_dims` components per node.
    pub fn vector(&self, name: &str, min_dims: usize) -> Result<VectorField<'_>, ModelError> {
        let field = self
            .state
            .vector(name)
            .ok_or_else(|| ModelError::FieldNotReadable {
                name: name.to_string(),
            })?;
        self.check_len(name, field.node_count())?;
        if field.dims() < min_dims {
            return Err(ModelError::VectorTooNarrow {
                name: name.to_string(),
                dims: field.dims(),
                required: min_dims,
            });
        }
        Ok(field)
    }

    /// Check that every named scalar input is present with the right length.
    pub fn check_reads(&self, names: &[&str]) -> Result<(), ModelError> {
        for name in names {
            self.scalar(name)?;
        }
        Ok(())
    }

    /// `0.5 * (current + iterated)` per node, unclamped.
    pub fn midpoints(&self, current: &str, iterated: &str) -> Result<Vec<f64>, ModelError> {
        let now = self.scalar(current)?;
        let next = self.scalar(iterated)?;
        Ok(now
            .iter()
            .zip(next)
            .map(|(a, b)| 0.5 * (a + b))
            .collect())
    }

    /// Midpoints floored at zero: concentrations cannot go negative.
    pub fn clamped_midpoints(
        &self,
        current: &str,
        iterated: &str,
    ) -> Result<Vec<f64>, ModelError> {
        let mut values = self.midpoints(current, iterated)?;
        for v in values.iter_mut() {
            *v = v.max(0.0);
        }
        Ok(values)
    }

    /// Current values of a scalar floored at zero, without midpointing.
    pub fn clamped(&self, name: &str) -> Result<Vec<f64>, ModelError> {
        Ok(self.scalar(name)?.iter().map(|v| v.max(0.0)).collect())
    }

    /// `|z|` of a position field, one value per node.
    pub fn depths(&self, name: &str) -> Result<Vec<f64>, ModelError> {
        let coords = self.vector(name, 3)?;
        Ok((0..coords.node_count())
            .map(|n| coords.component(n, 2).abs())
            .collect())
    }

    /// Verify every required output and every *present* optional output is
    /// writable with the right node count.
    ///
    /// Absent optional outputs are fine; present ones with the wrong length
    /// are an error, so nothing is written if any output is malformed.
    pub fn prepare_outputs(
        &mut self,
        required: &[&str],
        optional: &[&str],
    ) -> Result<(), ModelError> {
        for name in required {
            let len = self
                .state
                .write(name)
                .ok_or_else(|| ModelError::FieldNotWritable {
                    name: name.to_string(),
                })?
                .len();
            self.check_len(name, len)?;
        }
        for name in optional {
            if let Some(len) = self.state.write(name).map(|buf| buf.len()) {
                self.check_len(name, len)?;
            }
        }
        Ok(())
    }

    /// Mutable buffer of a required output field.
    pub fn output(&mut self, name: &str) -> Result<&mut [f64], ModelError> {
        let node_count = self.node_count;
        let buf = self
            .state
            .write(name)
            .ok_or_else(|| ModelError::FieldNotWritable {
                name: name.to_string(),
            })?;
        if buf.len() != node_count {
            return Err(ModelError::NodeCountMismatch {
                field: name.to_string(),
                expected: node_count,
                actual: buf.len(),
            });
        }
        Ok(buf)
    }

    /// Mutable buffer of an optional diagnostic field, `None` if the state
    /// does not carry it.
    pub fn diagnostic(&mut self, name: &str) -> Result<Option<&mut [f64]>, ModelError> {
        let node_count = self.node_count;
        match self.state.write(name) {
            None => Ok(None),
            Some(buf) if buf.len() != node_count => Err(ModelError::NodeCountMismatch {
                field: name.to_string(),
                expected: node_count,
                actual: buf.len(),
            }),
            Some(buf) => Ok(Some(buf)),
        }
    }

    /// Write every node of a required output from `value(node)`.
    pub fn fill_output(
        &mut self,
        name: &str,
        value: impl FnMut(usize) -> f64,
    ) -> Result<(), ModelError> {
        fill(self.output(name)?, value);
        Ok(())
    }

    /// Write every node of an optional diagnostic if the state carries it.
    pub fn fill_diagnostic(
        &mut self,
        name: &str,
        value: impl FnMut(usize) -> f64,
    ) -> Result<(), ModelError> {
        if let Some(buf) = self.diagnostic(name)? {
            fill(buf, value);
        }
        Ok(())
    }

    fn check_len(&self, name: &str, actual: usize) -> Result<(), ModelError> {
        if actual != self.node_count {
            return Err(ModelError::NodeCountMismatch {
                field: name.to_string(),
                expected: self.node_count,
                actual,
            });
        }
        Ok(())
    }
}

fn fill(buf: &mut [f64], mut value: impl FnMut(usize) -> f64) {
    for (n, slot) in buf.iter_mut().enumerate() {
        *slot = value(n);
    }
}
