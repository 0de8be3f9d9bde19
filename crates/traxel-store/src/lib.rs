//! Dual-indexed traxel collection with temporal and spatial queries.
//!
//! A [`TraxelStore`] owns every traxel of one analysis batch and keeps two
//! synchronized views over them:
//!
//! ```text
//! TraxelStore
//! ├── slots: Vec<Traxel>                          (arena, addressed by TraxelHandle)
//! ├── by_timestep: BTreeMap<Timestep, [handle]>   (ordered, non-unique, ids ascending)
//! └── by_time_id: IndexMap<TraxelKey, handle>     (unique (timestep, id) lookup)
//! ```
//!
//! All mutation goes through a single insert path that updates both views
//! together, so they always describe the same set. A second traxel with an
//! existing `(timestep, id)` is rejected with [`StoreError::DuplicateKey`]
//! and the store is left untouched.
//!
//! Aggregate queries live in [`query`]: [`bounding_box`],
//! [`nested_grouping`], and [`filter_by_field_of_view`].
//!
//! The store is single-threaded: build it once, then share it read-only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod config;
pub mod error;
pub mod fov;
pub mod handle;
pub mod query;
pub mod store;

pub use bounds::BoundingBox;
pub use config::{DuplicatePolicy, StoreConfig};
pub use error::StoreError;
pub use fov::{BoxFieldOfView, FieldOfView};
pub use handle::TraxelHandle;
pub use query::{bounding_box, filter_by_field_of_view, nested_grouping, TimestepBucket};
pub use store::{BatchReport, TraxelStore};
