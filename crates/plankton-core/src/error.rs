//! Error types for the Plankton biogeochemistry library.
//!
//! Split by subsystem: [`ModelError`] covers biology model evaluation
//! (parameter validation and field access), [`FieldError`] covers building
//! a [`FieldStore`](crate::FieldStore), [`IrradianceError`] covers the
//! astronomical irradiance estimator.

use std::error::Error;
use std::fmt;

/// Errors from evaluating a biology model against a simulation state.
///
/// Every variant is raised before the first output field is written, so a
/// failed call leaves the state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// One or more required parameters are absent from the mapping.
    ///
    /// Descriptions of each missing key have already been emitted to the
    /// diagnostic log by the time this is returned.
    MissingParameter {
        /// Name of the model whose validation failed.
        model: String,
        /// Every missing key, in declaration order.
        missing: Vec<String>,
    },
    /// A required input field is not present in the state.
    FieldNotReadable {
        /// The field name that failed to resolve.
        name: String,
    },
    /// A required output field is not present or not writable.
    FieldNotWritable {
        /// The field name that failed to resolve.
        name: String,
    },
    /// A field's length disagrees with the node count of the call.
    NodeCountMismatch {
        /// The offending field.
        field: String,
        /// Node count established by the first input field.
        expected: usize,
        /// Node count of the offending field.
        actual: usize,
    },
    /// A vector field has fewer components than the model needs.
    VectorTooNarrow {
        /// The offending vector field.
        name: String,
        /// Components per node in the field.
        dims: usize,
        /// Components per node required.
        required: usize,
    },
    /// No model is registered under the requested name.
    UnknownModel {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter { model, missing } => {
                write!(f, "{model}: missing parameter")?;
                if missing.len() > 1 {
                    write!(f, "s")?;
                }
                write!(f, " {}", missing.join(", "))
            }
            Self::FieldNotReadable { name } => write!(f, "field '{name}' not readable"),
            Self::FieldNotWritable { name } => write!(f, "field '{name}' not writable"),
            Self::NodeCountMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "field '{field}' has {actual} nodes, expected {expected}"
            ),
            Self::VectorTooNarrow {
                name,
                dims,
                required,
            } => write!(
                f,
                "vector field '{name}' has {dims} components per node, need at least {required}"
            ),
            Self::UnknownModel { name } => write!(f, "unknown biology model '{name}'"),
        }
    }
}

impl Error for ModelError {}

/// Errors from inserting a malformed field into a
/// [`FieldStore`](crate::FieldStore).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A vector field was declared with zero components per node.
    ZeroComponents {
        /// The field being inserted.
        name: String,
    },
    /// The flat buffer does not split evenly into nodes.
    RaggedVector {
        /// The field being inserted.
        name: String,
        /// Number of values supplied.
        len: usize,
        /// Components per node declared.
        dims: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroComponents { name } => {
                write!(f, "vector field '{name}' must have at least one component")
            }
            Self::RaggedVector { name, len, dims } => write!(
                f,
                "vector field '{name}' has {len} values, not a multiple of {dims}"
            ),
        }
    }
}

impl Error for FieldError {}

/// Errors from the short-wave irradiance estimator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IrradianceError {
    /// The timestamp text could not be parsed.
    MalformedTimestamp {
        /// The text that was supplied.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}

impl fmt::Display for IrradianceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTimestamp { input, reason } => {
                write!(f, "malformed timestamp '{input}': {reason}")
            }
        }
    }
}

impl Error for IrradianceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_lists_every_key() {
        let err = ModelError::MissingParameter {
            model: "PZND".into(),
            missing: vec!["alpha".into(), "k_N".into()],
        };
        assert_eq!(err.to_string(), "PZND: missing parameters alpha, k_N");
    }

    #[test]
    fn missing_single_parameter_is_singular() {
        let err = ModelError::MissingParameter {
            model: "Lotka-Volterra".into(),
            missing: vec!["delta".into()],
        };
        assert_eq!(err.to_string(), "Lotka-Volterra: missing parameter delta");
    }

    #[test]
    fn node_count_mismatch_names_field() {
        let err = ModelError::NodeCountMismatch {
            field: "Detritus".into(),
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("Detritus"));
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn ragged_vector_display() {
        let err = FieldError::RaggedVector {
            name: "Coordinate".into(),
            len: 5,
            dims: 3,
        };
        assert_eq!(
            err.to_string(),
            "vector field 'Coordinate' has 5 values, not a multiple of 3"
        );
    }

    #[test]
    fn malformed_timestamp_display() {
        let err = IrradianceError::MalformedTimestamp {
            input: "yesterday".into(),
            reason: "input contains invalid characters".into(),
        };
        assert!(err.to_string().starts_with("malformed timestamp 'yesterday'"));
    }
}
