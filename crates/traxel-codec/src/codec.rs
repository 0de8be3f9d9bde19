//! Binary encode/decode for the traxel format.
//!
//! All integers and floats are little-endian. Strings are length-prefixed
//! with a `u32` length. The format is intentionally simple: no compression,
//! no alignment padding, no self-describing schema.
//!
//! ```text
//! Traxel := id u32 | timestep i32 | locator_tag u8
//!           | x_scale f64 | y_scale f64 | z_scale f64
//!           | feature_count u32
//!           | { name str | value_count u32 | value f32 * value_count } * feature_count
//! ```

use std::io::{Read, Write};

use traxel_core::{FeatureArray, FeatureMap, Locator, LocatorKind, Traxel};

use crate::error::CodecError;
use crate::{FORMAT_VERSION, MAGIC};

/// Locator tag for [`LocatorKind::CenterOfMass`].
pub const LOCATOR_CENTER_OF_MASS: u8 = 0;
/// Locator tag for [`LocatorKind::IntMaxPosition`].
pub const LOCATOR_INT_MAX_POSITION: u8 = 1;

/// Upper bound on speculative pre-allocation from untrusted lengths.
const MAX_PREALLOC: usize = 4096;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), CodecError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian i32.
pub fn write_i32_le(w: &mut dyn Write, v: i32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f32.
pub fn write_f32_le(w: &mut dyn Write, v: f32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a collection length as u32, rejecting lengths that do not fit.
fn write_len(w: &mut dyn Write, len: usize, what: &str) -> Result<(), CodecError> {
    let len = u32::try_from(len).map_err(|_| CodecError::Malformed {
        detail: format!("{what} length {len} exceeds u32"),
    })?;
    write_u32_le(w, len)
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> Result<(), CodecError> {
    write_len(w, s.len(), "string")?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian i32.
pub fn read_i32_le(r: &mut dyn Read) -> Result<i32, CodecError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// Read a little-endian f32.
pub fn read_f32_le(r: &mut dyn Read) -> Result<f32, CodecError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, CodecError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_length_prefixed_str(r: &mut dyn Read) -> Result<String, CodecError> {
    let len = read_u32_le(r)? as u64;
    let mut buf = Vec::with_capacity((len as usize).min(MAX_PREALLOC));
    Read::take(&mut *r, len).read_to_end(&mut buf)?;
    if buf.len() as u64 != len {
        return Err(CodecError::Malformed {
            detail: format!("truncated string: got {} of {len} bytes", buf.len()),
        });
    }
    String::from_utf8(buf).map_err(|e| CodecError::Malformed {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

// ── Header encode/decode ────────────────────────────────────────

/// Encode the stream header (magic and version).
pub fn encode_header(w: &mut dyn Write) -> Result<(), CodecError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    Ok(())
}

/// Decode and validate the stream header.
pub fn decode_header(r: &mut dyn Read) -> Result<(), CodecError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(CodecError::InvalidMagic);
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion { found: version });
    }
    Ok(())
}

// ── Locator tags ────────────────────────────────────────────────

/// Tag byte for a locator kind.
pub fn locator_tag(kind: LocatorKind) -> u8 {
    match kind {
        LocatorKind::CenterOfMass => LOCATOR_CENTER_OF_MASS,
        LocatorKind::IntMaxPosition => LOCATOR_INT_MAX_POSITION,
    }
}

/// Locator kind for a tag byte.
pub fn locator_kind(tag: u8) -> Result<LocatorKind, CodecError> {
    match tag {
        LOCATOR_CENTER_OF_MASS => Ok(LocatorKind::CenterOfMass),
        LOCATOR_INT_MAX_POSITION => Ok(LocatorKind::IntMaxPosition),
        tag => Err(CodecError::UnknownLocatorTag { tag }),
    }
}

// ── Traxel encode/decode ────────────────────────────────────────

/// Encode a single traxel record.
pub fn encode_traxel(w: &mut dyn Write, traxel: &Traxel) -> Result<(), CodecError> {
    write_u32_le(w, traxel.id.0)?;
    write_i32_le(w, traxel.timestep.0)?;

    let locator = traxel.locator();
    write_u8(w, locator_tag(locator.kind()))?;
    write_f64_le(w, locator.x_scale)?;
    write_f64_le(w, locator.y_scale)?;
    write_f64_le(w, locator.z_scale)?;

    write_len(w, traxel.features.len(), "feature map")?;
    for (name, values) in traxel.features.iter() {
        write_length_prefixed_str(w, name)?;
        write_len(w, values.len(), "feature vector")?;
        for &v in values {
            write_f32_le(w, v)?;
        }
    }
    Ok(())
}

/// Decode a single traxel record.
///
/// Returns `Ok(None)` on clean EOF (no bytes available), `Ok(Some(traxel))`
/// on success, or an error on truncated/corrupt data.
pub fn decode_traxel(r: &mut dyn Read) -> Result<Option<Traxel>, CodecError> {
    // Read the id byte-by-byte to distinguish clean EOF (zero bytes
    // available) from truncation (1-3 bytes before EOF).
    let mut id_buf = [0u8; 4];
    let mut filled = 0;
    while filled < id_buf.len() {
        match r.read(&mut id_buf[filled..]) {
            Ok(0) => {
                if filled == 0 {
                    return Ok(None);
                }
                return Err(CodecError::Malformed {
                    detail: format!("truncated record header: got {filled} of 4 bytes for id"),
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CodecError::Io(e)),
        }
    }
    let id = u32::from_le_bytes(id_buf);

    let body = decode_body(r, id);
    // Anything short inside a record is corruption, not end of stream.
    body.map(Some).map_err(|e| match e {
        CodecError::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
            CodecError::Malformed {
                detail: format!("truncated record for traxel id {id}"),
            }
        }
        other => other,
    })
}

fn decode_body(r: &mut dyn Read, id: u32) -> Result<Traxel, CodecError> {
    let timestep = read_i32_le(r)?;

    let kind = locator_kind(read_u8(r)?)?;
    let locator = Locator::new(kind).with_scales(read_f64_le(r)?, read_f64_le(r)?, read_f64_le(r)?);

    let feature_count = read_u32_le(r)? as usize;
    let mut features = FeatureMap::new();
    for _ in 0..feature_count {
        let name = read_length_prefixed_str(r)?;
        let value_count = read_u32_le(r)? as usize;
        let mut values: FeatureArray = Vec::with_capacity(value_count.min(MAX_PREALLOC));
        for _ in 0..value_count {
            values.push(read_f32_le(r)?);
        }
        if features.insert(name.clone(), values).is_some() {
            return Err(CodecError::Malformed {
                detail: format!("feature '{name}' repeated in traxel id {id}"),
            });
        }
    }

    Ok(Traxel::with_locator(id, timestep, features, locator))
}
