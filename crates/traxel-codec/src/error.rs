//! Error types for traxel persistence.

use std::fmt;
use std::io;

use traxel_store::StoreError;

/// Errors that can occur while writing or reading traxel data.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The stream does not start with the expected `b"TRXL"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the stream.
        found: u8,
    },
    /// A record could not be decoded (truncated or corrupt data).
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A locator kind tag is not recognized.
    UnknownLocatorTag {
        /// The unrecognized tag.
        tag: u8,
    },
    /// Decoded traxels could not be assembled into a store.
    Store(StoreError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"TRXL\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::Malformed { detail } => write!(f, "malformed traxel record: {detail}"),
            Self::UnknownLocatorTag { tag } => write!(f, "unknown locator tag {tag}"),
            Self::Store(e) => write!(f, "cannot rebuild store: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<StoreError> for CodecError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
