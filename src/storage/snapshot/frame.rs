//! Snapshot frame
//!
//! Wraps a serialized payload with magic, version, checksum and length.

use bytes::{Buf, BufMut, BytesMut};

use super::{HEADER_SIZE, MAGIC, VERSION};
use crate::error::{Result, StoreError};

/// Frame a payload for writing
pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
    let len = u32::try_from(payload.len()).map_err(|_| {
        StoreError::Serialization(format!("snapshot payload too large: {} bytes", payload.len()))
    })?;

    let mut buf = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    buf.put_slice(MAGIC);
    buf.put_u16_le(VERSION);
    buf.put_u32_le(crc32fast::hash(payload));
    buf.put_u32_le(len);
    buf.put_slice(payload);

    Ok(buf.to_vec())
}

/// Verify a frame and return its payload
pub fn decode(data: &[u8]) -> Result<&[u8]> {
    if data.len() < HEADER_SIZE {
        return Err(StoreError::Corruption(format!(
            "snapshot truncated: {} bytes, header needs {}",
            data.len(),
            HEADER_SIZE
        )));
    }

    let mut header = &data[..HEADER_SIZE];

    let mut magic = [0u8; 4];
    header.copy_to_slice(&mut magic);
    if &magic != MAGIC {
        return Err(StoreError::Corruption("bad snapshot magic".to_string()));
    }

    let version = header.get_u16_le();
    if version != VERSION {
        return Err(StoreError::Corruption(format!(
            "unsupported snapshot version {version}"
        )));
    }

    let expected_crc = header.get_u32_le();
    let len = header.get_u32_le() as usize;

    let payload = &data[HEADER_SIZE..];
    if payload.len() != len {
        return Err(StoreError::Corruption(format!(
            "snapshot payload length {} does not match header {}",
            payload.len(),
            len
        )));
    }

    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(StoreError::Corruption(format!(
            "snapshot checksum mismatch: expected {expected_crc:08x}, got {actual_crc:08x}"
        )));
    }

    Ok(payload)
}
