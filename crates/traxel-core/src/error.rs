//! Error types for feature access and coordinate extraction.

use std::error::Error;
use std::fmt;

/// Errors from a [`Locator`](crate::Locator) reading coordinates out of a
/// [`FeatureMap`](crate::FeatureMap).
///
/// Both variants mean the observation's feature data is malformed for the
/// chosen locator. Callers must never substitute a default coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocatorError {
    /// The feature vector the locator reads from is absent.
    Inapplicable {
        /// Name of the missing feature.
        feature: &'static str,
    },
    /// The feature vector exists but is too short for the requested offset.
    VectorTooShort {
        /// Name of the feature that was read.
        feature: &'static str,
        /// Actual number of elements in the vector.
        len: usize,
        /// Offset the locator tried to read.
        offset: usize,
    },
}

impl fmt::Display for LocatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inapplicable { feature } => {
                write!(f, "locator not applicable: feature '{feature}' is missing")
            }
            Self::VectorTooShort {
                feature,
                len,
                offset,
            } => {
                write!(
                    f,
                    "feature '{feature}' has {len} elements, locator needs offset {offset}"
                )
            }
        }
    }
}

impl Error for LocatorError {}

/// Errors from indexed access into a [`FeatureMap`](crate::FeatureMap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureError {
    /// No feature vector is registered under this name.
    Missing {
        /// The requested feature name.
        name: String,
    },
    /// The index is past the end of the feature vector.
    IndexOutOfRange {
        /// The feature name.
        name: String,
        /// The requested index.
        index: usize,
        /// Length of the feature vector.
        len: usize,
    },
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name } => write!(f, "feature '{name}' not present"),
            Self::IndexOutOfRange { name, index, len } => {
                write!(
                    f,
                    "index {index} out of range for feature '{name}' of length {len}"
                )
            }
        }
    }
}

impl Error for FeatureError {}
