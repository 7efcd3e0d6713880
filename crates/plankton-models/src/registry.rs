//! Look up models by the names hosts use in their configuration files.

use plankton_core::{FieldState, ModelError, Parameters};
use plankton_model::BiologyModel;

use crate::predator_prey::PredatorPrey;
use crate::pznd::Pznd;
use crate::six_component::SixComponent;

/// Names accepted by [`model_by_name`], in registration order.
pub const MODEL_NAMES: &[&str] = &["lotka_volterra", "predator_prey", "pznd", "six_component"];

/// Build a model from its configuration name and validated parameters.
///
/// # Errors
///
/// [`ModelError::UnknownModel`] for an unrecognised name, otherwise
/// whatever the model's `from_parameters` reports.
pub fn model_by_name(
    name: &str,
    parameters: &Parameters,
) -> Result<Box<dyn BiologyModel>, ModelError> {
    match name {
        "lotka_volterra" | "predator_prey" => {
            Ok(Box::new(PredatorPrey::from_parameters(parameters)?))
        }
        "pznd" => Ok(Box::new(Pznd::from_parameters(parameters)?)),
        "six_component" => Ok(Box::new(SixComponent::from_parameters(parameters)?)),
        _ => Err(ModelError::UnknownModel {
            name: name.to_string(),
        }),
    }
}

/// Build the named model and evaluate it once against `state`.
pub fn evaluate_named(
    name: &str,
    state: &mut dyn FieldState,
    parameters: &Parameters,
) -> Result<(), ModelError> {
    model_by_name(name, parameters)?.evaluate(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plankton_test_utils::fixtures::{
        predator_prey_parameters, predator_prey_state, pznd_parameters, six_component_parameters,
    };

    #[test]
    fn every_registered_name_resolves() {
        for &name in MODEL_NAMES {
            let params = match name {
                "pznd" => pznd_parameters(),
                "six_component" => six_component_parameters(),
                _ => predator_prey_parameters(),
            };
            assert!(model_by_name(name, &params).is_ok(), "{name}");
        }
    }

    #[test]
    fn aliases_build_the_same_model() {
        let params = predator_prey_parameters();
        let a = model_by_name("lotka_volterra", &params).unwrap();
        let b = model_by_name("predator_prey", &params).unwrap();
        assert_eq!(a.name(), b.name());
        assert_eq!(a.name(), "Lotka Volterra");
    }

    #[test]
    fn unknown_name() {
        let err = model_by_name("npzd", &Parameters::new()).err().unwrap();
        assert_eq!(err, ModelError::UnknownModel { name: "npzd".into() });
    }

    #[test]
    fn wrong_parameters_for_model() {
        let err = model_by_name("pznd", &predator_prey_parameters()).err().unwrap();
        assert!(matches!(err, ModelError::MissingParameter { ref model, .. } if model == "PZND"));
    }

    #[test]
    fn evaluate_named_runs_the_model() {
        let mut state = predator_prey_state(&[10.0], &[5.0]);
        evaluate_named("lotka_volterra", &mut state, &predator_prey_parameters()).unwrap();
        assert_eq!(state.get_output("PhytoplanktonSource").unwrap(), &[5.0]);
    }
}
