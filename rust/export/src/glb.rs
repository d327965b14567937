// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GLB container writing
//!
//! Binary glTF layout: a 12-byte header (magic, version, total length)
//! followed by a JSON chunk and a binary chunk. Chunk payloads are padded
//! to 4-byte alignment: JSON with spaces, binary with zeros.

use bytes::{BufMut, Bytes, BytesMut};

/// `glTF` in ASCII, little-endian.
pub const GLB_MAGIC: u32 = 0x4654_6C67;
/// `JSON` chunk type.
pub const CHUNK_JSON: u32 = 0x4E4F_534A;
/// `BIN\0` chunk type.
pub const CHUNK_BIN: u32 = 0x004E_4942;

const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

#[inline]
fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

/// Assemble a GLB container from a serialized JSON document and a binary
/// payload. The returned buffer is immutable.
pub fn write_glb(json: &[u8], bin: &[u8]) -> Bytes {
    let json_padded = padded_len(json.len());
    let bin_padded = padded_len(bin.len());
    let total = HEADER_LEN + CHUNK_HEADER_LEN + json_padded + CHUNK_HEADER_LEN + bin_padded;

    let mut out = BytesMut::with_capacity(total);

    out.put_u32_le(GLB_MAGIC);
    out.put_u32_le(2);
    out.put_u32_le(total as u32);

    out.put_u32_le(json_padded as u32);
    out.put_u32_le(CHUNK_JSON);
    out.put_slice(json);
    out.put_bytes(b' ', json_padded - json.len());

    out.put_u32_le(bin_padded as u32);
    out.put_u32_le(CHUNK_BIN);
    out.put_slice(bin);
    out.put_bytes(0, bin_padded - bin.len());

    out.freeze()
}
