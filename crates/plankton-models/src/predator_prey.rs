//! Two-species Lotka-Volterra predator-prey model.
//!
//! Phytoplankton grow exponentially and are eaten by zooplankton, which
//! decay without food:
//!
//! ```text
//! dP/dt =  P (alpha - beta Z)
//! dZ/dt = -Z (gamma - delta P)
//! ```
//!
//! Evaluated at the unclamped midpoint of current and iterated values.

use plankton_core::{FieldState, ModelError, ParameterSpec, Parameters};
use plankton_model::{BiologyModel, EvalContext, ParameterValidator};

use crate::fields::*;
use crate::LOG_TARGET;

const NAME: &str = "Lotka Volterra";

/// Required parameter keys.
pub const PARAMETERS: &[ParameterSpec; 4] = &[
    ParameterSpec::new("alpha", "alpha is the phytoplankton growth rate."),
    ParameterSpec::new("beta", "beta is the predation rate of zooplankton on phytoplankton."),
    ParameterSpec::new("gamma", "gamma is the zooplankton decay rate."),
    ParameterSpec::new("delta", "delta is the zooplankton conversion efficiency."),
];

const VALIDATOR: ParameterValidator<4> = ParameterValidator::new(NAME, PARAMETERS)
    .with_footer(" dP/dt = P*(alpha-beta * Z)\n dZ/dt = - Z*(gamma-delta * P)");

const READS: &[&str] = &[
    PHYTOPLANKTON,
    ZOOPLANKTON,
    ITERATED_PHYTOPLANKTON,
    ITERATED_ZOOPLANKTON,
];

const WRITES: &[&str] = &[PHYTOPLANKTON_SOURCE, ZOOPLANKTON_SOURCE];

/// Validated predator-prey coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredatorPreyParameters {
    /// Prey growth rate.
    pub alpha: f64,
    /// Predation rate.
    pub beta: f64,
    /// Predator decay rate.
    pub gamma: f64,
    /// Conversion efficiency of eaten prey into predators.
    pub delta: f64,
}

impl PredatorPreyParameters {
    /// Validate `params` and extract the four coefficients.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingParameter`] listing every absent key.
    pub fn from_parameters(params: &Parameters) -> Result<Self, ModelError> {
        let [alpha, beta, gamma, delta] = VALIDATOR.require(params)?;
        Ok(Self {
            alpha,
            beta,
            gamma,
            delta,
        })
    }
}

/// The predator-prey model bound to its coefficients.
#[derive(Clone, Debug)]
pub struct PredatorPrey {
    config: PredatorPreyParameters,
}

impl PredatorPrey {
    /// Bind already-validated coefficients.
    pub fn new(config: PredatorPreyParameters) -> Self {
        Self { config }
    }

    /// Validate `params` and bind them.
    pub fn from_parameters(params: &Parameters) -> Result<Self, ModelError> {
        PredatorPreyParameters::from_parameters(params).map(Self::new)
    }

    /// The bound coefficients.
    pub fn config(&self) -> &PredatorPreyParameters {
        &self.config
    }

    /// `(P_source, Z_source)` at working values `p`, `z`.
    pub fn rates(&self, p: f64, z: f64) -> (f64, f64) {
        let c = &self.config;
        (p * (c.alpha - c.beta * z), -z * (c.gamma - c.delta * p))
    }
}

impl BiologyModel for PredatorPrey {
    fn name(&self) -> &str {
        NAME
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    fn reads(&self) -> &'static [&'static str] {
        READS
    }

    fn writes(&self) -> &'static [&'static str] {
        WRITES
    }

    fn evaluate(&self, state: &mut dyn FieldState) -> Result<(), ModelError> {
        let mut ctx = EvalContext::new(state, NAME, PHYTOPLANKTON)?;
        ctx.check_reads(READS)?;
        ctx.prepare_outputs(WRITES, &[])?;

        let p = ctx.midpoints(PHYTOPLANKTON, ITERATED_PHYTOPLANKTON)?;
        let z = ctx.midpoints(ZOOPLANKTON, ITERATED_ZOOPLANKTON)?;
        let rates: Vec<(f64, f64)> = p
            .iter()
            .zip(&z)
            .map(|(&p, &z)| self.rates(p, z))
            .collect();

        ctx.fill_output(PHYTOPLANKTON_SOURCE, |n| rates[n].0)?;
        ctx.fill_output(ZOOPLANKTON_SOURCE, |n| rates[n].1)?;

        log::debug!(target: LOG_TARGET, "{NAME}: evaluated {} nodes", ctx.node_count());
        Ok(())
    }
}

/// Predator-prey source terms for every node of `state`.
///
/// # Errors
///
/// [`ModelError::MissingParameter`] if any of `alpha`, `beta`, `gamma`,
/// `delta` is absent; field errors if the state lacks a declared field.
pub fn predator_prey(state: &mut dyn FieldState, parameters: &Parameters) -> Result<(), ModelError> {
    PredatorPrey::from_parameters(parameters)?.evaluate(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plankton_test_utils::fixtures::{predator_prey_parameters, predator_prey_state};
    use plankton_test_utils::MockState;

    #[test]
    fn worked_example() {
        let mut state = predator_prey_state(&[10.0], &[5.0]);
        predator_prey(&mut state, &predator_prey_parameters()).unwrap();
        assert_eq!(state.get_output(PHYTOPLANKTON_SOURCE).unwrap(), &[5.0]);
        assert_eq!(state.get_output(ZOOPLANKTON_SOURCE).unwrap(), &[0.0]);
    }

    #[test]
    fn evaluates_at_unclamped_midpoint() {
        let mut state = MockState::new();
        state.set_scalar(PHYTOPLANKTON, vec![-2.0]);
        state.set_scalar(ITERATED_PHYTOPLANKTON, vec![-4.0]);
        state.set_scalar(ZOOPLANKTON, vec![0.0]);
        state.set_scalar(ITERATED_ZOOPLANKTON, vec![20.0]);
        state.add_output(PHYTOPLANKTON_SOURCE, 1);
        state.add_output(ZOOPLANKTON_SOURCE, 1);

        predator_prey(&mut state, &predator_prey_parameters()).unwrap();

        // P = -3, Z = 10
        let p_source = state.get_output(PHYTOPLANKTON_SOURCE).unwrap()[0];
        let z_source = state.get_output(ZOOPLANKTON_SOURCE).unwrap()[0];
        assert!((p_source - 0.0).abs() < 1e-12, "{p_source}");
        assert!((z_source - -13.0).abs() < 1e-12, "{z_source}");
    }

    #[test]
    fn every_missing_key_fails() {
        for spec in PARAMETERS {
            let mut params = predator_prey_parameters();
            params.remove(spec.name);
            let mut state = predator_prey_state(&[1.0], &[1.0]);
            let err = predator_prey(&mut state, &params).unwrap_err();
            assert_eq!(
                err,
                ModelError::MissingParameter {
                    model: NAME.into(),
                    missing: vec![spec.name.into()],
                }
            );
            assert!(state.write_log().is_empty(), "wrote before failing");
        }
    }

    #[test]
    fn missing_source_field_fails_before_writing() {
        let mut state = predator_prey_state(&[1.0, 2.0], &[1.0, 2.0]);
        state.remove(ZOOPLANKTON_SOURCE);
        let err = predator_prey(&mut state, &predator_prey_parameters()).unwrap_err();
        assert_eq!(
            err,
            ModelError::FieldNotWritable {
                name: ZOOPLANKTON_SOURCE.into()
            }
        );
        assert!(state.has_unwritten(PHYTOPLANKTON_SOURCE));
    }

    #[test]
    fn writes_every_node() {
        let mut state = predator_prey_state(&[1.0, 2.0, 3.0], &[0.5, 0.5, 0.5]);
        predator_prey(&mut state, &predator_prey_parameters()).unwrap();
        assert!(!state.has_unwritten(PHYTOPLANKTON_SOURCE));
        assert!(!state.has_unwritten(ZOOPLANKTON_SOURCE));
    }

    #[test]
    fn introspection() {
        let model = PredatorPrey::from_parameters(&predator_prey_parameters()).unwrap();
        assert_eq!(model.name(), NAME);
        assert_eq!(model.parameters().len(), 4);
        assert_eq!(model.writes(), WRITES);
        assert!(model.diagnostics().is_empty());
        assert_eq!(model.config().delta, 0.1);
    }
}
