//! The [`BiologyModel`] trait.
//!
//! Models are stateless operators evaluated once per solver timestep. They
//! declare the fields they read and write so the host can allocate them
//! before the first call.

use plankton_core::{FieldState, ModelError, ParameterSpec};

/// A pointwise biogeochemistry model.
///
/// # Contract
///
/// - `evaluate()` MUST be deterministic: same inputs produce identical outputs.
/// - `&self`: parameters are fixed at construction; per-node state lives in fields.
/// - Every field named by `writes()` is written at every node on success.
/// - Fields named by `diagnostics()` are written only if the state has them.
/// - Current and iterated fields are never written.
/// - On error, no field has been written.
///
/// # Object safety
///
/// This trait is object-safe; the registry hands out `Box<dyn BiologyModel>`.
///
/// # Examples
///
/// A minimal model that writes a constant source:
///
/// ```
/// use plankton_core::{FieldState, FieldStore, ModelError, ParameterSpec};
/// use plankton_model::{BiologyModel, EvalContext};
///
/// struct ConstantSource {
///     value: f64,
/// }
///
/// impl BiologyModel for ConstantSource {
///     fn name(&self) -> &str { "constant_source" }
///
///     fn parameters(&self) -> &'static [ParameterSpec] { &[] }
///
///     fn reads(&self) -> &'static [&'static str] { &["Tracer"] }
///
///     fn writes(&self) -> &'static [&'static str] { &["TracerSource"] }
///
///     fn evaluate(&self, state: &mut dyn FieldState) -> Result<(), ModelError> {
///         let mut ctx = EvalContext::new(state, self.name(), "Tracer")?;
///         ctx.prepare_outputs(self.writes(), self.diagnostics())?;
///         let value = self.value;
///         ctx.output("TracerSource")?.fill(value);
///         Ok(())
///     }
/// }
///
/// let mut store = FieldStore::new();
/// store.insert_scalar("Tracer", vec![1.0, 2.0]);
/// store.insert_zeroed("TracerSource", 2);
/// ConstantSource { value: 0.5 }.evaluate(&mut store).unwrap();
/// ```
pub trait BiologyModel: Send + Sync {
    /// Human-readable name for diagnostics and errors.
    fn name(&self) -> &str;

    /// Parameter keys this model requires, with descriptions.
    fn parameters(&self) -> &'static [ParameterSpec];

    /// Scalar fields read, current and iterated alike. The first entry
    /// fixes the node count for the call.
    fn reads(&self) -> &'static [&'static str];

    /// Vector fields read.
    ///
    /// Default: none.
    fn vector_reads(&self) -> &'static [&'static str] {
        &[]
    }

    /// Source fields written at every node. They must already exist.
    fn writes(&self) -> &'static [&'static str];

    /// Diagnostic fields written only if the state already carries them.
    ///
    /// Default: none.
    fn diagnostics(&self) -> &'static [&'static str] {
        &[]
    }

    /// Compute source terms for every node and write them into `state`.
    fn evaluate(&self, state: &mut dyn FieldState) -> Result<(), ModelError>;
}
