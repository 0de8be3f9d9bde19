//! Traxel stream reader.
//!
//! [`TraxelReader`] reads traxels from any `Read` source, decoding the
//! binary format. The header is validated on construction.

use std::io::Read;

use traxel_core::Traxel;
use traxel_store::{StoreConfig, TraxelStore};

use crate::codec::{decode_header, decode_traxel};
use crate::error::CodecError;

/// Reads traxel records from a byte stream.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`.
pub struct TraxelReader<R: Read> {
    reader: R,
    traxels_read: u64,
}

impl<R: Read> TraxelReader<R> {
    /// Open a stream, reading and validating the header.
    pub fn open(mut reader: R) -> Result<Self, CodecError> {
        decode_header(&mut reader)?;
        Ok(Self {
            reader,
            traxels_read: 0,
        })
    }

    /// Read the next traxel, or `None` if the stream is exhausted.
    pub fn next_traxel(&mut self) -> Result<Option<Traxel>, CodecError> {
        let traxel = decode_traxel(&mut self.reader)?;
        if let Some(t) = &traxel {
            self.traxels_read += 1;
            tracing::trace!(timestep = %t.timestep, id = %t.id, "decoded traxel");
        }
        Ok(traxel)
    }

    /// Number of traxels read so far.
    pub fn traxels_read(&self) -> u64 {
        self.traxels_read
    }

    /// Convert into a traxel iterator.
    pub fn traxels(self) -> TraxelIter<R> {
        TraxelIter {
            reader: self,
            done: false,
        }
    }
}

/// Iterator adapter over traxel records.
///
/// Stops after the first error.
pub struct TraxelIter<R: Read> {
    reader: TraxelReader<R>,
    done: bool,
}

impl<R: Read> Iterator for TraxelIter<R> {
    type Item = Result<Traxel, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_traxel() {
            Ok(Some(t)) => Some(Ok(t)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Read a complete store written by [`write_store`](crate::write_store).
///
/// Both store indices are rebuilt from the decoded traxels.
///
/// # Errors
///
/// Any decode error, or [`CodecError::Store`] if the stream holds two
/// traxels with the same `(timestep, id)`.
pub fn read_store<R: Read>(reader: R, config: StoreConfig) -> Result<TraxelStore, CodecError> {
    let mut store = TraxelStore::with_config(config);
    let mut reader = TraxelReader::open(reader)?;
    while let Some(t) = reader.next_traxel()? {
        store.add(t)?;
    }
    tracing::debug!(traxels = store.len(), "read traxel store");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{write_store, TraxelWriter};
    use traxel_store::StoreError;
    use traxel_test_utils::com_traxel;

    #[test]
    fn iterator_yields_all_then_stops() {
        let mut buf = Vec::new();
        let mut w = TraxelWriter::new(&mut buf).unwrap();
        for id in 0..3 {
            w.write_traxel(&com_traxel(id, 1, [0.0; 3])).unwrap();
        }
        drop(w);

        let ids: Vec<u32> = TraxelReader::open(buf.as_slice())
            .unwrap()
            .traxels()
            .map(|r| r.unwrap().id.0)
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut buf = Vec::new();
        let mut w = TraxelWriter::new(&mut buf).unwrap();
        w.write_traxel(&com_traxel(1, 0, [0.0; 3])).unwrap();
        drop(w);
        buf.extend_from_slice(&[7, 0]);

        let mut iter = TraxelReader::open(buf.as_slice()).unwrap().traxels();
        assert!(iter.next().unwrap().is_ok());
        assert!(matches!(iter.next(), Some(Err(CodecError::Malformed { .. }))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn header_only_stream_is_an_empty_store() {
        let mut buf = Vec::new();
        write_store(&mut buf, &TraxelStore::new()).unwrap();
        let store = read_store(buf.as_slice(), StoreConfig::default()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_records_fail_store_rebuild() {
        let mut buf = Vec::new();
        let mut w = TraxelWriter::new(&mut buf).unwrap();
        w.write_traxel(&com_traxel(1, 0, [0.0; 3])).unwrap();
        w.write_traxel(&com_traxel(1, 0, [1.0; 3])).unwrap();
        drop(w);

        let err = read_store(buf.as_slice(), StoreConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Store(StoreError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn counts_traxels_read() {
        let mut buf = Vec::new();
        let mut w = TraxelWriter::new(&mut buf).unwrap();
        w.write_traxel(&com_traxel(1, 0, [0.0; 3])).unwrap();
        drop(w);
        let mut r = TraxelReader::open(buf.as_slice()).unwrap();
        assert_eq!(r.traxels_read(), 0);
        r.next_traxel().unwrap();
        assert_eq!(r.traxels_read(), 1);
        assert!(r.next_traxel().unwrap().is_none());
        assert_eq!(r.traxels_read(), 1);
    }
}
