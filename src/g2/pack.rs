//! The G2 map-payload pack codec: a byte-level LZ-style compression with
//! 1-byte back-reference offsets (spec.md §4.I). Grounded on the
//! teacher's `compression::decompress`: a single forward pass over a
//! `Cursor`, one token at a time, copying from the output buffer already
//! produced for back-references.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;

use crate::{Error, Limits};

const MAX_LITERAL_RUN: usize = 0x7F;
const MIN_MATCH: usize = 3;
const MAX_MATCH: usize = 0x80;
const MAX_OFFSET: usize = 255;

fn write_len_prefix(out: &mut Vec<u8>, len: usize) {
    // The 2-byte form's first byte is the little-endian low byte; when
    // that would itself be 0xFF it's indistinguishable from the 4-byte
    // escape, so any such length (or one too big for 16 bits) always
    // takes the escape form instead.
    if len <= 0xFFFF && (len & 0xFF) != 0xFF {
        out.write_u16::<LittleEndian>(len as u16).unwrap();
    } else {
        out.push(0xFF);
        out.write_u32::<LittleEndian>(len as u32).unwrap();
    }
}

fn read_len_prefix(r: &mut Cursor<&[u8]>) -> Result<usize, Error> {
    let first = r.read_u8().map_err(|_| Error::Truncated {
        needed: 2,
        available: 0,
    })?;
    if first == 0xFF {
        let len = r.read_u32::<LittleEndian>().map_err(|_| Error::Truncated {
            needed: 4,
            available: 0,
        })?;
        Ok(len as usize)
    } else {
        let second = r.read_u8().map_err(|_| Error::Truncated {
            needed: 1,
            available: 0,
        })?;
        Ok(u16::from_le_bytes([first, second]) as usize)
    }
}

/// Compress `data` into a length-prefixed token stream. Always produces
/// bytes that `unpack` accepts.
pub fn pack(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    write_len_prefix(&mut out, data.len());

    let mut i = 0;
    while i < data.len() {
        let (best_len, best_offset) = find_match(data, i);
        if best_len >= MIN_MATCH {
            out.push(0x80 + (best_len - 1) as u8);
            out.push(best_offset as u8);
            i += best_len;
        } else {
            let run_end = next_match_start(data, i).min(i + MAX_LITERAL_RUN);
            let run_len = run_end - i;
            out.push(run_len as u8);
            out.extend_from_slice(&data[i..run_end]);
            i = run_end;
        }
    }
    out
}

/// The longest match (length, offset) ending before `i` and reachable
/// within the 255-byte offset window, or `(0, 0)` if none clears
/// `MIN_MATCH`.
fn find_match(data: &[u8], i: usize) -> (usize, usize) {
    let window_start = i.saturating_sub(MAX_OFFSET);
    let mut best_len = 0;
    let mut best_offset = 0;
    for start in (window_start..i).rev() {
        let mut len = 0;
        while len < MAX_MATCH
            && i + len < data.len()
            && data[start + len % (i - start)] == data[i + len]
        {
            len += 1;
        }
        if len > best_len {
            best_len = len;
            best_offset = i - start;
        }
    }
    (best_len, best_offset)
}

/// How far a literal run can extend before a worthwhile match starts.
fn next_match_start(data: &[u8], i: usize) -> usize {
    let mut j = i + 1;
    while j < data.len() {
        let (len, _) = find_match(data, j);
        if len >= MIN_MATCH {
            break;
        }
        j += 1;
    }
    j
}

/// Decompress `data`, which must be exactly one length-prefixed token
/// stream (no trailing bytes).
pub fn unpack(data: &[u8], limits: Limits) -> Result<Vec<u8>, Error> {
    let (out, consumed) = unpack_prefix(data, limits)?;
    if consumed != data.len() {
        return Err(Error::Truncated {
            needed: data.len(),
            available: consumed,
        });
    }
    Ok(out)
}

/// Decompress the token stream at the start of `data`, returning the
/// decompressed bytes and how many input bytes the stream consumed.
/// Used by `g2::container` to locate a trailer following the map
/// section without requiring it to be the whole buffer.
pub(crate) fn unpack_prefix(data: &[u8], limits: Limits) -> Result<(Vec<u8>, usize), Error> {
    let mut r = Cursor::new(data);
    let declared_len = read_len_prefix(&mut r)?;
    limits.check(declared_len)?;

    let mut out = Vec::with_capacity(declared_len);
    while out.len() < declared_len {
        let token = r.read_u8().map_err(|_| Error::Truncated {
            needed: declared_len - out.len(),
            available: 0,
        })?;
        if token < 0x80 {
            let run_len = token as usize;
            for _ in 0..run_len {
                let b = r.read_u8().map_err(|_| Error::Truncated {
                    needed: run_len,
                    available: 0,
                })?;
                out.push(b);
            }
        } else {
            let len = (token - 0x7F) as usize;
            let offset = r.read_u8().map_err(|_| Error::BadRle {
                reason: "back-reference with no offset byte",
            })? as usize;
            if offset == 0 || offset > out.len() {
                return Err(Error::BadRle {
                    reason: "back-reference offset outside the output produced so far",
                });
            }
            for k in 0..len {
                let b = out[out.len() - offset + (k % offset)];
                out.push(b);
            }
        }
    }

    Ok((out, r.position() as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_repetitive_data() {
        let data: Vec<u8> = (0..600).map(|i| (i % 5) as u8).collect();
        let packed = pack(&data);
        let unpacked = unpack(&packed, Limits::default()).unwrap();
        assert_eq!(unpacked, data);
    }

    #[test]
    fn round_trip_random_looking_data() {
        let data: Vec<u8> = (0..300).map(|i| ((i * 37 + 11) % 251) as u8).collect();
        let packed = pack(&data);
        let unpacked = unpack(&packed, Limits::default()).unwrap();
        assert_eq!(unpacked, data);
    }

    #[test]
    fn round_trip_empty() {
        let packed = pack(&[]);
        let unpacked = unpack(&packed, Limits::default()).unwrap();
        assert!(unpacked.is_empty());
    }

    #[test]
    fn unpack_rejects_declared_length_over_limit() {
        let mut packed = Vec::new();
        packed.push(0xFF);
        packed.extend_from_slice(&(64u32 * 1024 * 1024).to_le_bytes());
        let limits = Limits {
            max_decoded_len: 1024,
        };
        assert!(unpack(&packed, limits).is_err());
    }

    #[test]
    fn unpack_prefix_reports_bytes_consumed() {
        let data = vec![1, 2, 3, 4, 5];
        let packed = pack(&data);
        let mut trailer_tagged = packed.clone();
        trailer_tagged.extend_from_slice(b"trailer");
        let (out, consumed) = unpack_prefix(&trailer_tagged, Limits::default()).unwrap();
        assert_eq!(out, data);
        assert_eq!(consumed, packed.len());
    }
}
