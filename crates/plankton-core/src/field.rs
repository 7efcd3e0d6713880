//! Field views and the in-memory [`FieldStore`].
//!
//! Scalar fields are plain `&[f64]` slices with one value per node. Vector
//! fields are stored flat, `dims` consecutive values per node, and read
//! through the [`VectorField`] view.

use indexmap::IndexMap;

use crate::error::FieldError;
use crate::traits::{FieldReader, FieldWriter};

/// Borrowed view of a vector field: `dims` components per node, stored flat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorField<'a> {
    data: &'a [f64],
    dims: usize,
}

impl<'a> VectorField<'a> {
    /// Wrap a flat buffer. Returns `None` if `dims` is zero or the buffer
    /// length is not a whole number of nodes.
    pub fn new(data: &'a [f64], dims: usize) -> Option<Self> {
        if dims == 0 || data.len() % dims != 0 {
            return None;
        }
        Some(Self { data, dims })
    }

    /// Components per node.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Number of nodes in the field.
    pub fn node_count(&self) -> usize {
        self.data.len() / self.dims
    }

    /// All components of node `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= node_count()`.
    pub fn node_val(&self, n: usize) -> &'a [f64] {
        &self.data[n * self.dims..(n + 1) * self.dims]
    }

    /// Component `c` of node `n`.
    pub fn component(&self, n: usize, c: usize) -> f64 {
        self.data[n * self.dims + c]
    }

    /// The underlying flat buffer.
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }
}

#[derive(Clone, Debug, PartialEq)]
struct VectorBuffer {
    dims: usize,
    data: Vec<f64>,
}

/// In-memory named field storage.
///
/// A ready-made [`FieldReader`] + [`FieldWriter`] for hosts without their
/// own container, and for tests. Insertion order is preserved, so field
/// listings are deterministic.
///
/// ```
/// use plankton_core::{FieldReader, FieldStore};
///
/// let mut store = FieldStore::new();
/// store.insert_scalar("Phytoplankton", vec![1.0, 2.0]);
/// store.insert_zeroed("PhytoplanktonSource", 2);
/// assert_eq!(store.scalar("Phytoplankton"), Some(&[1.0, 2.0][..]));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldStore {
    scalar_fields: IndexMap<String, Vec<f64>>,
    vector_fields: IndexMap<String, VectorBuffer>,
}

impl FieldStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a scalar field, returning the previous values.
    pub fn insert_scalar(&mut self, name: impl Into<String>, values: Vec<f64>) -> Option<Vec<f64>> {
        self.scalar_fields.insert(name.into(), values)
    }

    /// Insert a zero-filled scalar field of `node_count` nodes.
    pub fn insert_zeroed(&mut self, name: impl Into<String>, node_count: usize) {
        self.scalar_fields.insert(name.into(), vec![0.0; node_count]);
    }

    /// Insert or replace a flat vector field with `dims` components per node.
    ///
    /// # Errors
    ///
    /// [`FieldError::ZeroComponents`] if `dims` is zero,
    /// [`FieldError::RaggedVector`] if `values.len()` is not a multiple of
    /// `dims`.
    pub fn insert_vector(
        &mut self,
        name: impl Into<String>,
        dims: usize,
        values: Vec<f64>,
    ) -> Result<(), FieldError> {
        let name = name.into();
        if dims == 0 {
            return Err(FieldError::ZeroComponents { name });
        }
        if values.len() % dims != 0 {
            return Err(FieldError::RaggedVector {
                name,
                len: values.len(),
                dims,
            });
        }
        self.vector_fields
            .insert(name, VectorBuffer { dims, data: values });
        Ok(())
    }

    /// Insert a 3-component position field from per-node `[x, y, z]` triples.
    pub fn insert_positions(&mut self, name: impl Into<String>, positions: &[[f64; 3]]) {
        let data = positions.iter().flatten().copied().collect();
        self.vector_fields
            .insert(name.into(), VectorBuffer { dims: 3, data });
    }

    /// Remove a scalar field, returning its values.
    pub fn remove_scalar(&mut self, name: &str) -> Option<Vec<f64>> {
        self.scalar_fields.shift_remove(name)
    }

    /// Whether a scalar field with this name exists.
    pub fn contains_scalar(&self, name: &str) -> bool {
        self.scalar_fields.contains_key(name)
    }

    /// Scalar field names in insertion order.
    pub fn scalar_names(&self) -> impl Iterator<Item = &str> {
        self.scalar_fields.keys().map(String::as_str)
    }

    /// Vector field names in insertion order.
    pub fn vector_names(&self) -> impl Iterator<Item = &str> {
        self.vector_fields.keys().map(String::as_str)
    }
}

impl FieldReader for FieldStore {
    fn scalar(&self, name: &str) -> Option<&[f64]> {
        self.scalar_fields.get(name).map(|v| v.as_slice())
    }

    fn vector(&self, name: &str) -> Option<VectorField<'_>> {
        self.vector_fields
            .get(name)
            .and_then(|b| VectorField::new(&b.data, b.dims))
    }
}

impl FieldWriter for FieldStore {
    fn write(&mut self, name: &str) -> Option<&mut [f64]> {
        self.scalar_fields.get_mut(name).map(|v| v.as_mut_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vector_view_rejects_ragged_buffer() {
        assert!(VectorField::new(&[1.0, 2.0, 3.0, 4.0], 3).is_none());
        assert!(VectorField::new(&[1.0], 0).is_none());
    }

    #[test]
    fn vector_view_indexes_nodes() {
        let data = [0.0, 1.0, -5.0, 2.0, 3.0, -7.5];
        let v = VectorField::new(&data, 3).unwrap();
        assert_eq!(v.node_count(), 2);
        assert_eq!(v.node_val(1), &[2.0, 3.0, -7.5]);
        assert_eq!(v.component(0, 2), -5.0);
    }

    #[test]
    fn store_round_trips_scalars_and_writes() {
        let mut store = FieldStore::new();
        store.insert_scalar("Nutrient", vec![1.0, 2.0, 3.0]);
        store.write("Nutrient").unwrap()[1] = 9.0;
        assert_eq!(store.scalar("Nutrient").unwrap(), &[1.0, 9.0, 3.0]);
        assert!(store.write("Detritus").is_none());
    }

    #[test]
    fn scalar_names_keep_insertion_order() {
        let mut store = FieldStore::new();
        store.insert_zeroed("b", 1);
        store.insert_zeroed("a", 1);
        store.insert_zeroed("c", 1);
        assert_eq!(store.scalar_names().collect::<Vec<_>>(), ["b", "a", "c"]);
        store.remove_scalar("a");
        assert_eq!(store.scalar_names().collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn insert_vector_validates_shape() {
        let mut store = FieldStore::new();
        assert_eq!(
            store.insert_vector("Coordinate", 3, vec![0.0; 5]),
            Err(FieldError::RaggedVector {
                name: "Coordinate".into(),
                len: 5,
                dims: 3,
            })
        );
        assert_eq!(
            store.insert_vector("Coordinate", 0, vec![]),
            Err(FieldError::ZeroComponents {
                name: "Coordinate".into()
            })
        );
        assert!(store.vector("Coordinate").is_none());
        store.insert_vector("Coordinate", 3, vec![0.0; 6]).unwrap();
        assert_eq!(store.vector("Coordinate").unwrap().node_count(), 2);
    }

    #[test]
    fn positions_are_flattened() {
        let mut store = FieldStore::new();
        store.insert_positions("Coordinate", &[[1.0, 2.0, -10.0], [3.0, 4.0, -20.0]]);
        let coords = store.vector("Coordinate").unwrap();
        assert_eq!(coords.dims(), 3);
        assert_eq!(coords.component(1, 2), -20.0);
        assert_eq!(store.vector_names().collect::<Vec<_>>(), ["Coordinate"]);
    }

    proptest! {
        #[test]
        fn node_count_times_dims_is_len(nodes in 0usize..64, dims in 1usize..5) {
            let data = vec![0.5; nodes * dims];
            let v = VectorField::new(&data, dims).unwrap();
            prop_assert_eq!(v.node_count(), nodes);
            prop_assert_eq!(v.as_slice().len(), nodes * dims);
        }
    }
}
