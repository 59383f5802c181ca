//! The G2 container beyond the map payload is unspecified (spec.md §9
//! Open Question 2); this crate treats everything outside the map
//! section as opaque bytes rather than guessing at a format.

use crate::{Error, Limits};

use super::pack;

/// The result of locating and decoding a G2 map section inside a larger
/// buffer. `header`/`trailer` are copied verbatim, uninterpreted.
pub struct G2Container {
    pub header: Vec<u8>,
    pub map: Vec<u8>,
    pub trailer: Vec<u8>,
}

/// Split `data` into the bytes preceding the map section, the decoded
/// map payload, and the bytes following it. `map_offset` is the
/// caller-known byte offset where the length-prefixed packed map begins
/// — this crate has no model of the surrounding container format, so it
/// cannot discover that offset on its own.
pub fn split_map_section(
    data: &[u8],
    map_offset: usize,
    limits: Limits,
) -> Result<G2Container, Error> {
    if map_offset > data.len() {
        return Err(Error::Truncated {
            needed: map_offset,
            available: data.len(),
        });
    }
    let (map, consumed) = pack::unpack_prefix(&data[map_offset..], limits)?;
    let trailer_start = map_offset + consumed;

    Ok(G2Container {
        header: data[..map_offset].to_vec(),
        map,
        trailer: data[trailer_start..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_header_map_and_trailer() {
        let payload = vec![1u8, 2, 3, 4, 5];
        let packed = pack::pack(&payload);

        let mut data = b"HEADER".to_vec();
        let map_offset = data.len();
        data.extend_from_slice(&packed);
        data.extend_from_slice(b"TRAILER");

        let container = split_map_section(&data, map_offset, Limits::default()).unwrap();
        assert_eq!(container.header, b"HEADER");
        assert_eq!(container.map, payload);
        assert_eq!(container.trailer, b"TRAILER");
    }
}
