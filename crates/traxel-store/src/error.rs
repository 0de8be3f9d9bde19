//! Store-specific error types.

use std::error::Error;
use std::fmt;

use traxel_core::{LocatorError, TraxelKey};

/// Errors that can occur during store mutation or aggregate queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A traxel with this `(timestep, id)` is already present.
    ///
    /// Recoverable: the store is exactly as it was before the insert.
    DuplicateKey {
        /// The colliding key.
        key: TraxelKey,
    },
    /// The query has no meaningful answer on a store with zero traxels.
    EmptyStore,
    /// Coordinate extraction failed for a contained traxel.
    Locator {
        /// The traxel whose features were malformed.
        key: TraxelKey,
        /// The underlying locator error.
        source: LocatorError,
    },
    /// A located coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// The traxel whose features hold the bad value.
        key: TraxelKey,
        /// Axis name: `"x"`, `"y"` or `"z"`.
        axis: &'static str,
    },
    /// The arena cannot address another traxel.
    CapacityExceeded,
}

impl StoreError {
    /// Attach the offending traxel's key to a locator error.
    pub fn locator(key: TraxelKey, source: LocatorError) -> Self {
        Self::Locator { key, source }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { key } => write!(f, "duplicate traxel key {key}"),
            Self::EmptyStore => write!(f, "traxel store is empty"),
            Self::Locator { key, source } => {
                write!(f, "cannot locate traxel {key}: {source}")
            }
            Self::NonFiniteCoordinate { key, axis } => {
                write!(f, "traxel {key} has a non-finite {axis} coordinate")
            }
            Self::CapacityExceeded => write!(f, "traxel store is full"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Locator { source, .. } => Some(source),
            _ => None,
        }
    }
}
