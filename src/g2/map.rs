//! G2 map codec: the unpacked tile stream is a grid row-major, framed by
//! a 2-byte width and 2-byte height, then per-cell `(opcode, modifier…)`
//! sequences in increasing layer priority (spec.md §4.I).

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

use crate::Error;

use super::cell::Cell;
use super::element::Element;
use super::tile::Tile2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
}

/// Decode a single cell: read elements while each new opcode's layer
/// ranks strictly above the last one filled. A cell conventionally opens
/// on a terrain tile, but a truncated/malformed first tile is accepted
/// as whatever layer it actually is rather than rejected, since the
/// framing gives no other way to detect a short cell.
fn decode_cell(r: &mut Cursor<&[u8]>) -> Result<Cell, Error> {
    let mut cell = Cell::new();
    let mut last_rank: Option<u8> = None;

    loop {
        let pos = r.position();
        let opcode = match r.read_u8() {
            Ok(b) => b,
            Err(_) => break,
        };
        let tile = Tile2::from_code(opcode).ok_or(Error::UnknownOpcode { opcode })?;
        let rank = layer_rank(tile.layer());

        if let Some(last) = last_rank {
            if rank <= last {
                r.set_position(pos);
                break;
            }
        }

        r.set_position(pos);
        let el = Element::decode(r)?;
        last_rank = Some(rank);
        cell.set(el);
    }

    Ok(cell)
}

fn layer_rank(layer: super::tile::Layer) -> u8 {
    use super::tile::Layer::*;
    match layer {
        Terrain => 0,
        Pickup => 1,
        NotAllowed => 2,
        Mob => 3,
        Panel => 4,
    }
}

pub fn decode(data: &[u8]) -> Result<Map, Error> {
    let mut r = Cursor::new(data);
    let width = r.read_u16::<LittleEndian>()?;
    let height = r.read_u16::<LittleEndian>()?;

    let count = width as usize * height as usize;
    let mut cells = Vec::with_capacity(count);
    for _ in 0..count {
        cells.push(decode_cell(&mut r)?);
    }

    Ok(Map {
        width,
        height,
        cells,
    })
}

pub fn encode(map: &Map) -> Result<Vec<u8>, Error> {
    if map.cells.len() != map.width as usize * map.height as usize {
        return Err(Error::InvariantViolated {
            reason: "cell count does not match width*height".to_string(),
        });
    }

    let mut out = Vec::new();
    out.write_u16::<LittleEndian>(map.width).unwrap();
    out.write_u16::<LittleEndian>(map.height).unwrap();

    for cell in &map.cells {
        for el in cell.layers() {
            el.encode(&mut out);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g2::element::Element;

    fn bare(tile: Tile2) -> Element {
        let mut r = Cursor::new(&[tile.code()][..]);
        Element::decode(&mut r).unwrap()
    }

    #[test]
    fn round_trips_single_terrain_cell() {
        let mut cell = Cell::new();
        cell.set(bare(Tile2::Wall));
        let map = Map {
            width: 1,
            height: 1,
            cells: vec![cell],
        };

        let bytes = encode(&map).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.width, 1);
        assert_eq!(decoded.height, 1);
        assert_eq!(decoded.cells[0].terrain.as_ref().unwrap().tile, Tile2::Wall);
    }

    #[test]
    fn round_trips_layered_cell() {
        let mut cell = Cell::new();
        cell.set(bare(Tile2::Floor));
        cell.set(bare(Tile2::Chip));
        cell.set(bare(Tile2::BugN));

        let map = Map {
            width: 1,
            height: 1,
            cells: vec![cell],
        };
        let bytes = encode(&map).unwrap();
        let decoded = decode(&bytes).unwrap();

        let c = &decoded.cells[0];
        assert_eq!(c.terrain.as_ref().unwrap().tile, Tile2::Floor);
        assert_eq!(c.pickup.as_ref().unwrap().tile, Tile2::Chip);
        assert_eq!(c.mob.as_ref().unwrap().tile, Tile2::BugN);
    }

    #[test]
    fn round_trips_multi_cell_row() {
        let mut c1 = Cell::new();
        c1.set(bare(Tile2::Floor));
        let mut c2 = Cell::new();
        c2.set(bare(Tile2::Wall));
        let mut c3 = Cell::new();
        c3.set(bare(Tile2::Water));
        c3.set(bare(Tile2::KeyBlue));

        let map = Map {
            width: 3,
            height: 1,
            cells: vec![c1, c2, c3],
        };
        let bytes = encode(&map).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.cells.len(), 3);
        assert_eq!(decoded.cells[1].terrain.as_ref().unwrap().tile, Tile2::Wall);
        assert_eq!(
            decoded.cells[2].pickup.as_ref().unwrap().tile,
            Tile2::KeyBlue
        );
    }

    #[test]
    fn modifier_bearing_tile_in_stream_round_trips() {
        let mut cell = Cell::new();
        let mut el = bare(Tile2::SwitchOn);
        el.wires = Some(super::element::WireSet::N | super::element::WireSet::S);
        el.wire_tunnels = Some(super::element::WireSet::E);
        cell.set(el);

        let map = Map {
            width: 1,
            height: 1,
            cells: vec![cell],
        };
        let bytes = encode(&map).unwrap();
        let decoded = decode(&bytes).unwrap();
        let t = decoded.cells[0].terrain.as_ref().unwrap();
        assert_eq!(t.wires, Some(super::element::WireSet::N | super::element::WireSet::S));
        assert_eq!(t.wire_tunnels, Some(super::element::WireSet::E));
    }
}
