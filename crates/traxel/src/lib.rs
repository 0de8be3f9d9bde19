//! Traxel: storage and batch analysis for tracking elements.
//!
//! A traxel is a segmented object at one timestep of a time-lapse, carrying
//! named feature vectors and a locator that derives its spatial position.
//! This facade crate re-exports the public API of all traxel sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use traxel::prelude::*;
//!
//! let com = |x: f32, y: f32| FeatureMap::new().with("center-of-mass", vec![x, y, 0.0]);
//!
//! let mut store = TraxelStore::new();
//! store.add(Traxel::new(1, 0, com(0.0, 0.0))).unwrap();
//! store.add(Traxel::new(2, 0, com(4.0, 3.0))).unwrap();
//! store.add(Traxel::new(1, 2, com(8.0, 8.0))).unwrap();
//!
//! let bb = bounding_box(&store).unwrap();
//! assert_eq!(bb.to_array(), [0.0, 0.0, 0.0, 0.0, 2.0, 8.0, 8.0, 0.0]);
//!
//! let sizes: Vec<usize> = nested_grouping(&store).iter().map(|b| b.len()).collect();
//! assert_eq!(sizes, [2, 0, 1]);
//!
//! let fov = BoxFieldOfView::new(0.0, 0.0, 0.0, 0.0, 1.0, 5.0, 5.0, 0.0);
//! let (kept, count) = filter_by_field_of_view(&store, &fov).unwrap();
//! assert_eq!(count, 2);
//! assert_eq!(kept.len(), 2);
//!
//! let mut buf = Vec::new();
//! traxel::codec::write_store(&mut buf, &store).unwrap();
//! let restored = traxel::codec::read_store(buf.as_slice(), StoreConfig::default()).unwrap();
//! assert_eq!(restored.len(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `traxel-core` | IDs, feature maps, locators, the `Traxel` value type |
//! | [`store`] | `traxel-store` | The dual-indexed store and batch queries |
//! | [`codec`] | `traxel-codec` | Binary persistence for traxels and stores |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`traxel-core`).
///
/// Contains [`types::Traxel`], [`types::FeatureMap`], [`types::Locator`],
/// and the identifier newtypes.
pub use traxel_core as types;

/// Traxel collection and batch queries (`traxel-store`).
///
/// [`store::TraxelStore`] plus the free functions
/// [`store::bounding_box`], [`store::nested_grouping`], and
/// [`store::filter_by_field_of_view`].
pub use traxel_store as store;

/// Binary persistence (`traxel-codec`).
///
/// Stream traxels with [`codec::TraxelWriter`] and
/// [`codec::TraxelReader`], or whole stores with [`codec::write_store`]
/// and [`codec::read_store`].
pub use traxel_codec as codec;

/// Common imports for typical traxel usage.
///
/// ```rust
/// use traxel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use traxel_core::{
        FeatureMap, Locator, LocatorKind, Position, Timestep, Traxel, TraxelId, TraxelKey,
        TraxelMap,
    };

    // Errors
    pub use traxel_core::{FeatureError, LocatorError};
    pub use traxel_store::StoreError;

    // Store and queries
    pub use traxel_store::{
        bounding_box, filter_by_field_of_view, nested_grouping, BoundingBox, BoxFieldOfView,
        DuplicatePolicy, FieldOfView, StoreConfig, TraxelStore,
    };
}
