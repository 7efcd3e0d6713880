//! The flat parameter mapping handed to every model call.

use indexmap::IndexMap;

/// Declaration of one parameter a model requires.
///
/// The description is what the validator prints when the key is missing,
/// so it should tell a modeller what the number means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Key looked up in [`Parameters`].
    pub name: &'static str,
    /// One or two lines explaining the parameter.
    pub description: &'static str,
}

impl ParameterSpec {
    /// Declare a parameter.
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Name → value mapping of model parameters.
///
/// Presence is the only property checked; values are used as given, with
/// no range or sign validation. Keys keep insertion order.
///
/// ```
/// use plankton_core::Parameters;
///
/// let params: Parameters = [("alpha", 1.0), ("beta", 0.1)].into_iter().collect();
/// assert_eq!(params.get("beta"), Some(0.1));
/// assert!(!params.contains("gamma"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters {
    values: IndexMap<String, f64>,
}

impl Parameters {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Remove a parameter, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.shift_remove(name)
    }

    /// Look up a parameter.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether the key is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Parameters {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}
