//! Traxel stream writer.
//!
//! [`TraxelWriter`] streams traxels to any `Write` sink, encoding the
//! binary format. The header is written immediately on construction.

use std::io::Write;

use traxel_core::Traxel;
use traxel_store::TraxelStore;

use crate::codec::{encode_header, encode_traxel};
use crate::error::CodecError;

/// Writes traxel records to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use traxel_codec::{TraxelReader, TraxelWriter};
/// use traxel_core::{FeatureMap, Traxel};
///
/// let mut buf = Vec::new();
/// let mut writer = TraxelWriter::new(&mut buf).unwrap();
/// for id in 1..=2u32 {
///     let features = FeatureMap::new().with("center-of-mass", vec![id as f32, 0.0, 0.0]);
///     writer.write_traxel(&Traxel::new(id, 0, features)).unwrap();
/// }
/// assert_eq!(writer.traxels_written(), 2);
/// drop(writer);
///
/// let mut reader = TraxelReader::open(buf.as_slice()).unwrap();
/// assert_eq!(reader.next_traxel().unwrap().unwrap().x().unwrap(), 1.0);
/// assert_eq!(reader.next_traxel().unwrap().unwrap().x().unwrap(), 2.0);
/// assert!(reader.next_traxel().unwrap().is_none());
/// ```
pub struct TraxelWriter<W: Write> {
    writer: W,
    traxels_written: u64,
}

impl<W: Write> TraxelWriter<W> {
    /// Create a new writer, immediately writing the header.
    pub fn new(mut writer: W) -> Result<Self, CodecError> {
        encode_header(&mut writer)?;
        Ok(Self {
            writer,
            traxels_written: 0,
        })
    }

    /// Append one traxel record.
    pub fn write_traxel(&mut self, traxel: &Traxel) -> Result<(), CodecError> {
        encode_traxel(&mut self.writer, traxel)?;
        self.traxels_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of traxels written so far.
    pub fn traxels_written(&self) -> u64 {
        self.traxels_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write a complete store (header plus every traxel in canonical order).
///
/// Returns the number of traxels written.
pub fn write_store<W: Write>(writer: W, store: &TraxelStore) -> Result<u64, CodecError> {
    let mut w = TraxelWriter::new(writer)?;
    for t in store.iter() {
        w.write_traxel(t)?;
    }
    w.flush()?;
    tracing::debug!(traxels = w.traxels_written(), "wrote traxel store");
    Ok(w.traxels_written())
}
