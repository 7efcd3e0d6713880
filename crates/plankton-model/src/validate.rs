//! Required-parameter validation shared by every model.
//!
//! A [`ParameterValidator`] holds a model's table of [`ParameterSpec`]s.
//! Checking a [`Parameters`] mapping reports *every* missing key to the
//! diagnostic log, not just the first, then fails once.

use plankton_core::{ModelError, ParameterSpec, Parameters};
use smallvec::SmallVec;

/// Log target for missing-parameter diagnostics.
pub const LOG_TARGET: &str = "plankton::parameters";

/// Presence check of a model's `N` required parameter keys.
///
/// [`require`](Self::require) hands back the values in table order, so a
/// model destructures them straight into its typed coefficients.
///
/// ```
/// use plankton_core::{ParameterSpec, Parameters};
/// use plankton_model::ParameterValidator;
///
/// const SPECS: &[ParameterSpec; 2] = &[
///     ParameterSpec::new("alpha", "alpha is the growth rate."),
///     ParameterSpec::new("beta", "beta is the predation rate."),
/// ];
/// let validator = ParameterValidator::new("Example", SPECS);
///
/// let params: Parameters = [("alpha", 1.0)].into_iter().collect();
/// assert!(!validator.validate(&params));
/// assert_eq!(validator.missing(&params)[0].name, "beta");
///
/// let params: Parameters = [("beta", 0.1), ("alpha", 1.0)].into_iter().collect();
/// let [alpha, beta] = validator.require(&params).unwrap();
/// assert_eq!((alpha, beta), (1.0, 0.1));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ParameterValidator<const N: usize> {
    model: &'static str,
    specs: &'static [ParameterSpec; N],
    footer: Option<&'static str>,
}

impl<const N: usize> ParameterValidator<N> {
    /// Create a validator for `model` requiring every key in `specs`.
    pub const fn new(model: &'static str, specs: &'static [ParameterSpec; N]) -> Self {
        Self {
            model,
            specs,
            footer: None,
        }
    }

    /// Attach text emitted once after the per-key diagnostics whenever
    /// anything is missing.
    pub const fn with_footer(mut self, footer: &'static str) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Model name used in diagnostics and errors.
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// The required parameter table.
    pub fn specs(&self) -> &'static [ParameterSpec] {
        self.specs
    }

    /// Every spec whose key is absent from `params`, in declaration order.
    ///
    /// Emits nothing; see [`validate`](Self::validate) for the reporting form.
    pub fn missing(&self, params: &Parameters) -> SmallVec<[&'static ParameterSpec; 4]> {
        self.specs
            .iter()
            .filter(|spec| !params.contains(spec.name))
            .collect()
    }

    /// Check presence of all keys, logging a description of each missing one.
    pub fn validate(&self, params: &Parameters) -> bool {
        let missing = self.missing(params);
        self.report(&missing);
        missing.is_empty()
    }

    /// Values of every required key, in table order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingParameter`] listing every missing key,
    /// after logging each one.
    pub fn require(&self, params: &Parameters) -> Result<[f64; N], ModelError> {
        let mut values = [0.0; N];
        let mut missing: SmallVec<[&'static ParameterSpec; 4]> = SmallVec::new();
        for (slot, spec) in values.iter_mut().zip(self.specs) {
            match params.get(spec.name) {
                Some(value) => *slot = value,
                None => missing.push(spec),
            }
        }
        if missing.is_empty() {
            return Ok(values);
        }
        self.report(&missing);
        Err(ModelError::MissingParameter {
            model: self.model.to_string(),
            missing: missing.iter().map(|s| s.name.to_string()).collect(),
        })
    }

    fn report(&self, missing: &[&'static ParameterSpec]) {
        for spec in missing {
            log::warn!(
                target: LOG_TARGET,
                "{} parameter {} missing. {}",
                self.model,
                spec.name,
                spec.description
            );
        }
        if !missing.is_empty() {
            if let Some(footer) = self.footer {
                log::warn!(target: LOG_TARGET, "{footer}");
            }
        }
    }
}
