//! Core types for traxel tracking.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! per-observation abstractions used throughout the workspace: identifiers,
//! feature maps, coordinate locators, and the [`Traxel`] entity itself.
//!
//! A [`Traxel`] is one timestamped observation of a segmented object. Its
//! spatial position is not stored directly; instead the traxel owns a
//! [`Locator`] that extracts scaled `X`/`Y`/`Z` coordinates from a named
//! feature vector in its [`FeatureMap`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod feature;
pub mod id;
pub mod locator;
pub mod position;
pub mod traxel;

pub use error::{FeatureError, LocatorError};
pub use feature::{FeatureArray, FeatureMap, FeatureValue};
pub use id::{Timestep, TraxelId, TraxelKey};
pub use locator::{Locator, LocatorKind};
pub use position::Position;
pub use traxel::{traxel_map_from, Traxel, TraxelMap};
