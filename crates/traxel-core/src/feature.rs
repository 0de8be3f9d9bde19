//! Named per-observation feature vectors.

use indexmap::IndexMap;

use crate::error::FeatureError;

/// A single feature element.
pub type FeatureValue = f32;

/// An ordered feature vector. Element order is significant.
pub type FeatureArray = Vec<FeatureValue>;

/// Mapping from feature name to feature vector for one observation.
///
/// Several named vectors may coexist (center of mass, bounding box extents,
/// intensity statistics, ...). Iteration follows insertion order; equality
/// ignores it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureMap {
    arrays: IndexMap<String, FeatureArray>,
}

impl FeatureMap {
    /// Create an empty feature map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a feature vector, returning the previous one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        values: FeatureArray,
    ) -> Option<FeatureArray> {
        self.arrays.insert(name.into(), values)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, values: FeatureArray) -> Self {
        self.insert(name, values);
        self
    }

    /// Register a zero-filled feature vector of `size` elements.
    ///
    /// Replaces any existing vector under the same name.
    pub fn add_array(&mut self, name: impl Into<String>, size: usize) {
        self.arrays.insert(name.into(), vec![0.0; size]);
    }

    /// The feature vector stored under `name`.
    pub fn get(&self, name: &str) -> Option<&[FeatureValue]> {
        self.arrays.get(name).map(Vec::as_slice)
    }

    /// Mutable access to the elements stored under `name`.
    ///
    /// The length stays fixed; replace the vector with
    /// [`insert`](Self::insert) to resize it.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut [FeatureValue]> {
        self.arrays.get_mut(name).map(Vec::as_mut_slice)
    }

    /// Whether a vector is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.arrays.contains_key(name)
    }

    /// Remove and return the vector stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<FeatureArray> {
        self.arrays.shift_remove(name)
    }

    /// Read one element of a feature vector.
    pub fn value(&self, name: &str, index: usize) -> Result<FeatureValue, FeatureError> {
        let array = self.arrays.get(name).ok_or_else(|| FeatureError::Missing {
            name: name.to_string(),
        })?;
        array
            .get(index)
            .copied()
            .ok_or_else(|| FeatureError::IndexOutOfRange {
                name: name.to_string(),
                index,
                len: array.len(),
            })
    }

    /// Overwrite one element of an existing feature vector.
    ///
    /// Never grows the vector; vector lengths are fixed at write time.
    pub fn set_value(
        &mut self,
        name: &str,
        index: usize,
        value: FeatureValue,
    ) -> Result<(), FeatureError> {
        let array = self
            .arrays
            .get_mut(name)
            .ok_or_else(|| FeatureError::Missing {
                name: name.to_string(),
            })?;
        let len = array.len();
        let slot = array
            .get_mut(index)
            .ok_or_else(|| FeatureError::IndexOutOfRange {
                name: name.to_string(),
                index,
                len,
            })?;
        *slot = value;
        Ok(())
    }

    /// Number of named feature vectors.
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Whether no feature vectors are registered.
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Feature names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }

    /// `(name, vector)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FeatureValue])> {
        self.arrays.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K: Into<String>, V: Into<FeatureArray>> FromIterator<(K, V)> for FeatureMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            arrays: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_array_is_zero_filled() {
        let mut m = FeatureMap::new();
        m.add_array("count", 3);
        assert_eq!(m.get("count"), Some(&[0.0, 0.0, 0.0][..]));
    }

    #[test]
    fn value_and_set_value_round_trip() {
        let mut m = FeatureMap::new().with("center-of-mass", vec![1.0, 2.0, 3.0]);
        m.set_value("center-of-mass", 1, 7.5).unwrap();
        assert_eq!(m.value("center-of-mass", 1).unwrap(), 7.5);
        assert_eq!(m.value("center-of-mass", 0).unwrap(), 1.0);
    }

    #[test]
    fn missing_feature_is_reported() {
        let m = FeatureMap::new();
        assert_eq!(
            m.value("volume", 0),
            Err(FeatureError::Missing {
                name: "volume".into()
            })
        );
    }

    #[test]
    fn set_value_never_grows_vector() {
        let mut m = FeatureMap::new().with("volume", vec![4.0]);
        let err = m.set_value("volume", 1, 1.0).unwrap_err();
        assert_eq!(
            err,
            FeatureError::IndexOutOfRange {
                name: "volume".into(),
                index: 1,
                len: 1
            }
        );
        assert_eq!(m.get("volume").unwrap().len(), 1);
    }

    #[test]
    fn get_mut_edits_in_place_without_resizing() {
        let mut m = FeatureMap::new().with("center-of-mass", vec![1.0, 2.0, 3.0]);
        let values = m.get_mut("center-of-mass").unwrap();
        values[2] = 9.0;
        assert_eq!(values.len(), 3);
        assert_eq!(m.get("center-of-mass"), Some(&[1.0, 2.0, 9.0][..]));
        assert!(m.get_mut("volume").is_none());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = FeatureMap::new().with("a", vec![1.0]).with("b", vec![2.0]);
        let b = FeatureMap::new().with("b", vec![2.0]).with("a", vec![1.0]);
        assert_eq!(a, b);
        assert_eq!(a.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn collect_from_pairs() {
        let m: FeatureMap = [("x", vec![1.0f32]), ("y", vec![2.0, 3.0])]
            .into_iter()
            .collect();
        assert_eq!(m.len(), 2);
        assert!(m.contains("y"));
    }
}
