//! Binary persistence for traxels and traxel stores.
//!
//! Round-trips a [`Traxel`](traxel_core::Traxel) as its id, timestep,
//! locator kind and scales, and feature map. A
//! [`TraxelStore`](traxel_store::TraxelStore) is persisted as the sequence of
//! its traxels; both indices are rebuilt on load.
//!
//! # Architecture
//!
//! - [`TraxelWriter`] streams traxels to any `Write` sink
//! - [`TraxelReader`] reads them back from any `Read` source
//! - [`write_store`] / [`read_store`] handle a whole store
//! - All I/O uses a custom binary codec (no serde dependency)
//!
//! # Format
//!
//! ```text
//! [MAGIC "TRXL"] [VERSION u8]
//! [Traxel 1] [Traxel 2] ... [Traxel N]
//! ```
//!
//! Records follow each other until a clean end of stream.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use error::CodecError;
pub use reader::{read_store, TraxelIter, TraxelReader};
pub use writer::{write_store, TraxelWriter};

/// Magic bytes at the start of every traxel file.
pub const MAGIC: [u8; 4] = *b"TRXL";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
