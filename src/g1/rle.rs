//! The G1 map-layer RLE: a marker-based run-length encoding over exactly
//! 1024 bytes (32x32). Grounded on the teacher's `compression::decompress`
//! — a single forward pass over a `Cursor`, one opcode at a time.
//!
//! The marker byte (0xFF) can never appear as a bare literal, since the
//! decoder would read it as the start of a run; the encoder always routes
//! it through the run path, even for an isolated occurrence (count 1).
//! Runs of any other value are only worth the three-byte overhead at
//! length >= 4, so shorter repeats stay literal.

use byteorder::ReadBytesExt;
use std::io::Cursor;

use crate::Error;

pub const LAYER_LEN: usize = 1024;
const MARKER: u8 = 0xFF;

pub fn decode(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut r = Cursor::new(data);
    let mut out = Vec::with_capacity(LAYER_LEN);

    while (r.position() as usize) < data.len() {
        let b = r.read_u8().map_err(|_| Error::Truncated {
            needed: 1,
            available: 0,
        })?;

        if b != MARKER {
            out.push(b);
            continue;
        }

        let n = r.read_u8().map_err(|_| Error::BadRle {
            reason: "marker with no count byte",
        })?;
        if n == 0 {
            return Err(Error::BadRle {
                reason: "run count of zero",
            });
        }
        let v = r.read_u8().map_err(|_| Error::BadRle {
            reason: "marker with no value byte",
        })?;
        for _ in 0..n {
            out.push(v);
        }
    }

    if out.len() != LAYER_LEN {
        return Err(Error::BadRle {
            reason: "decoded layer is not 1024 bytes",
        });
    }
    Ok(out)
}

pub fn encode(data: &[u8]) -> Result<Vec<u8>, Error> {
    if data.len() != LAYER_LEN {
        return Err(Error::BadRle {
            reason: "input layer is not 1024 bytes",
        });
    }

    let mut out = Vec::new();
    let mut i = 0;
    while i < data.len() {
        let v = data[i];
        let mut run = 1;
        while i + run < data.len() && data[i + run] == v && run < 255 {
            run += 1;
        }

        if v == MARKER || run >= 4 {
            out.push(MARKER);
            out.push(run as u8);
            out.push(v);
        } else {
            out.push(v);
            run = 1;
        }
        i += run;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_layer(f: impl Fn(usize) -> u8) -> Vec<u8> {
        (0..LAYER_LEN).map(f).collect()
    }

    #[test]
    fn round_trip_mixed_layer() {
        let layer = make_layer(|i| if i < 500 { 0x00 } else { (i % 7) as u8 });
        let encoded = encode(&layer).unwrap();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded, layer);
    }

    #[test]
    fn round_trip_all_floor_compresses_to_runs() {
        let layer = vec![0u8; LAYER_LEN];
        let encoded = encode(&layer).unwrap();
        // 1024 bytes, max run length 255: four full runs plus a 4-byte remainder.
        assert_eq!(
            encoded,
            vec![
                MARKER, 255, 0x00, MARKER, 255, 0x00, MARKER, 255, 0x00, MARKER, 255, 0x00,
                MARKER, 4, 0x00,
            ]
        );
        assert_eq!(decode(&encoded).unwrap(), layer);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let bad = vec![0x01, 0x02, 0x03];
        assert!(decode(&bad).is_err());
    }

    #[test]
    fn short_runs_stay_literal() {
        let mut layer = vec![0x05u8; LAYER_LEN];
        layer[0] = 0x01;
        layer[1] = 0x01;
        layer[2] = 0x01;
        let encoded = encode(&layer).unwrap();
        // The 3-byte run of 0x01 is cheaper as 3 literals than a 3-byte marker run.
        assert_eq!(&encoded[0..3], &[0x01, 0x01, 0x01]);
        assert_eq!(decode(&encoded).unwrap(), layer);
    }

    #[test]
    fn isolated_marker_byte_round_trips() {
        let mut layer = vec![0x02u8; LAYER_LEN];
        layer[10] = MARKER;
        let encoded = encode(&layer).unwrap();
        assert_eq!(decode(&encoded).unwrap(), layer);
    }
}
