//! G2 element model and modifier codec (spec.md §3 G2 Element, §4.H).
//!
//! An `Element` is a tagged record: a `Tile2` plus every attribute any
//! family might carry, each optional. Per the design note on dynamic
//! attributes, this is deliberately a flat struct rather than one variant
//! per family — the descriptor table on `Tile2::modifiers()` is what
//! decides which fields a given tile actually populates.

use bitflags::bitflags;
use byteorder::ReadBytesExt;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

use crate::g1::Dir;
use crate::Error;

use super::tile::{ModifierFamily, Tile2};

bitflags! {
    /// The four wire/tunnel directions a WireNibble modifier byte can set,
    /// one nibble for live wires and one for dead tunnels (spec.md §4.H).
    #[derive(Default, Serialize, Deserialize)]
    pub struct WireSet: u8 {
        const N = 0x01;
        const E = 0x02;
        const S = 0x04;
        const W = 0x08;
    }
}

const WIRE_N: u8 = WireSet::N.bits();
const WIRE_E: u8 = WireSet::E.bits();
const WIRE_S: u8 = WireSet::S.bits();
const WIRE_W: u8 = WireSet::W.bits();

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Green,
    Pink,
    Yellow,
    Blue,
}

impl Color {
    fn from_byte(b: u8) -> Option<Color> {
        match b {
            0 => Some(Color::Green),
            1 => Some(Color::Pink),
            2 => Some(Color::Yellow),
            3 => Some(Color::Blue),
            _ => None,
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            Color::Green => 0,
            Color::Pink => 1,
            Color::Yellow => 2,
            Color::Blue => 3,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateKind {
    Inverter,
    And,
    Or,
    Xor,
    Nand,
    LatchCw,
    LatchCcw,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    Oriented(GateKind, Dir),
    Counter(u8),
}

const GATE_KINDS: [GateKind; 6] = [
    GateKind::Inverter,
    GateKind::And,
    GateKind::Or,
    GateKind::Xor,
    GateKind::Nand,
    GateKind::LatchCw,
];
const GATE_DIRS: [Dir; 4] = [Dir::N, Dir::E, Dir::S, Dir::W];

fn gate_from_byte(b: u8) -> Option<Gate> {
    // 0..23: six base kinds x four orientations. 24..27: LatchCcw x four
    // orientations (split out since GATE_KINDS above tops out at LatchCw).
    // 28..37: Counter digits 0..9.
    if (b as usize) < GATE_KINDS.len() * 4 {
        let kind = GATE_KINDS[(b as usize) / 4];
        let dir = GATE_DIRS[(b as usize) % 4];
        Some(Gate::Oriented(kind, dir))
    } else if (24..28).contains(&b) {
        Some(Gate::Oriented(GateKind::LatchCcw, GATE_DIRS[(b as usize - 24)]))
    } else if (28..38).contains(&b) {
        Some(Gate::Counter(b - 28))
    } else {
        None
    }
}

fn gate_to_byte(gate: Gate) -> u8 {
    match gate {
        Gate::Oriented(GateKind::LatchCcw, dir) => {
            24 + GATE_DIRS.iter().position(|d| *d == dir).unwrap() as u8
        }
        Gate::Oriented(kind, dir) => {
            let kind_index = GATE_KINDS.iter().position(|k| *k == kind).unwrap() as u8;
            let dir_index = GATE_DIRS.iter().position(|d| *d == dir).unwrap() as u8;
            kind_index * 4 + dir_index
        }
        Gate::Counter(digit) => 28 + digit.min(9),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    Ne,
    Se,
    Sw,
    Nw,
    Horiz,
    Vert,
}

const TRACKS: [Track; 6] = [
    Track::Ne,
    Track::Se,
    Track::Sw,
    Track::Nw,
    Track::Horiz,
    Track::Vert,
];

fn track_bit(t: Track) -> u8 {
    1 << TRACKS.iter().position(|x| *x == t).unwrap()
}

/// A decoded G2 tile instance. Every attribute field is optional; which
/// ones are populated is decided entirely by `tile.modifiers()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tile: Tile2,
    pub direction: Option<Dir>,
    pub directions: Option<Vec<Dir>>,
    pub wires: Option<WireSet>,
    pub wire_tunnels: Option<WireSet>,
    pub tracks: Option<Vec<Track>>,
    pub active_track: Option<Track>,
    pub initial_entry: Option<Dir>,
    pub char: Option<char>,
    pub color: Option<Color>,
    pub gate: Option<Gate>,
    pub canopy: Option<bool>,
}

fn dirs_to_mask(dirs: &[Dir]) -> u8 {
    let mut m = 0;
    for d in dirs {
        m |= match d {
            Dir::N => WIRE_N,
            Dir::E => WIRE_E,
            Dir::S => WIRE_S,
            Dir::W => WIRE_W,
            _ => 0,
        };
    }
    m
}

fn mask_to_dirs(mask: u8) -> Vec<Dir> {
    let mut out = Vec::new();
    if mask & WIRE_N != 0 {
        out.push(Dir::N);
    }
    if mask & WIRE_E != 0 {
        out.push(Dir::E);
    }
    if mask & WIRE_S != 0 {
        out.push(Dir::S);
    }
    if mask & WIRE_W != 0 {
        out.push(Dir::W);
    }
    out
}

impl Element {
    fn bare(tile: Tile2) -> Element {
        Element {
            direction: tile.dir(),
            tile,
            directions: None,
            wires: None,
            wire_tunnels: None,
            tracks: None,
            active_track: None,
            initial_entry: None,
            char: None,
            color: None,
            gate: None,
            canopy: None,
        }
    }

    /// Decode one element (opcode + whatever modifier bytes its family
    /// requires) from `r`.
    pub fn decode(r: &mut Cursor<&[u8]>) -> Result<Element, Error> {
        let opcode = r.read_u8().map_err(|_| Error::Truncated {
            needed: 1,
            available: 0,
        })?;
        let tile = Tile2::from_code(opcode).ok_or(Error::UnknownOpcode { opcode })?;
        let mut el = Element::bare(tile);

        match tile.modifiers() {
            ModifierFamily::None => {}
            ModifierFamily::WireNibble => {
                let b = read_modifier_byte(r, opcode)?;
                el.wires = Some(WireSet::from_bits_truncate(b & 0x0F));
                el.wire_tunnels = Some(WireSet::from_bits_truncate((b >> 4) & 0x0F));
            }
            ModifierFamily::Letter => {
                let b = read_modifier_byte(r, opcode)?;
                el.char = Some(b as char);
            }
            ModifierFamily::CloneDirections => {
                let b = read_modifier_byte(r, opcode)?;
                el.directions = Some(mask_to_dirs(b));
            }
            ModifierFamily::Color => {
                let b = read_modifier_byte(r, opcode)?;
                el.color = Some(Color::from_byte(b & 0x03).unwrap());
            }
            ModifierFamily::Gate => {
                let b = read_modifier_byte(r, opcode)?;
                el.gate = Some(gate_from_byte(b).ok_or(Error::UnsupportedModifier { opcode })?);
            }
            ModifierFamily::Track => {
                let b1 = read_modifier_byte(r, opcode)?;
                let b2 = read_modifier_byte(r, opcode)?;
                let mut tracks = Vec::new();
                for &t in &TRACKS {
                    if b1 & track_bit(t) != 0 {
                        tracks.push(t);
                    }
                }
                el.tracks = Some(tracks);
                let active_index = (b2 & 0x0F) as usize;
                el.active_track = TRACKS.get(active_index).copied();
                let entry_index = (b2 >> 4) & 0x03;
                el.initial_entry = Some(GATE_DIRS[entry_index as usize]);
            }
            ModifierFamily::ThinWall => {
                let b = read_modifier_byte(r, opcode)?;
                el.directions = Some(mask_to_dirs(b & 0x0F));
                el.canopy = Some(b & 0x10 != 0);
            }
        }

        Ok(el)
    }

    /// Encode this element's opcode and modifier bytes. Missing
    /// attributes fall back to the family default (spec.md §4.H: "custom
    /// wall without color encodes as Green/0").
    pub fn encode(&self, out: &mut Vec<u8>) {
        out.push(self.tile.code());
        match self.tile.modifiers() {
            ModifierFamily::None => {}
            ModifierFamily::WireNibble => {
                let wires = self.wires.unwrap_or_default().bits();
                let tunnels = self.wire_tunnels.unwrap_or_default().bits();
                out.push((tunnels << 4) | wires);
            }
            ModifierFamily::Letter => {
                out.push(self.char.unwrap_or(' ') as u8);
            }
            ModifierFamily::CloneDirections => {
                let dirs = self.directions.clone().unwrap_or_default();
                out.push(dirs_to_mask(&dirs));
            }
            ModifierFamily::Color => {
                out.push(self.color.unwrap_or(Color::Green).to_byte());
            }
            ModifierFamily::Gate => {
                out.push(gate_to_byte(self.gate.unwrap_or(Gate::Oriented(GateKind::Inverter, Dir::N))));
            }
            ModifierFamily::Track => {
                let tracks = self.tracks.clone().unwrap_or_default();
                let mut b1 = 0u8;
                for t in &tracks {
                    b1 |= track_bit(*t);
                }
                out.push(b1);
                let active_index = self
                    .active_track
                    .and_then(|t| TRACKS.iter().position(|x| *x == t))
                    .unwrap_or(0) as u8;
                let entry_index = self
                    .initial_entry
                    .and_then(|d| GATE_DIRS.iter().position(|x| *x == d))
                    .unwrap_or(0) as u8;
                out.push((entry_index << 4) | active_index);
            }
            ModifierFamily::ThinWall => {
                let dirs = self.directions.clone().unwrap_or_default();
                let canopy_bit = if self.canopy.unwrap_or(false) { 0x10 } else { 0 };
                out.push(dirs_to_mask(&dirs) | canopy_bit);
            }
        }
    }
}

fn read_modifier_byte(r: &mut Cursor<&[u8]>, opcode: u8) -> Result<u8, Error> {
    r.read_u8()
        .map_err(|_| Error::UnsupportedModifier { opcode })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_bytes(bytes: &[u8]) -> Element {
        let mut r = Cursor::new(bytes);
        Element::decode(&mut r).unwrap()
    }

    #[test]
    fn switch_on_wires_modifier_matches_scenario() {
        // SWITCH_ON with wires="NS", wire_tunnels="E" -> 0x25.
        let el = decode_bytes(&[Tile2::SwitchOn.code(), 0x25]);
        assert_eq!(el.wires, Some(WireSet::N | WireSet::S));
        assert_eq!(el.wire_tunnels, Some(WireSet::E));

        let mut out = Vec::new();
        el.encode(&mut out);
        assert_eq!(out, vec![Tile2::SwitchOn.code(), 0x25]);
    }

    #[test]
    fn letter_tile_modifier_matches_scenario() {
        let el = decode_bytes(&[Tile2::LetterTile.code(), 0x41]);
        assert_eq!(el.char, Some('A'));

        let mut out = Vec::new();
        el.encode(&mut out);
        assert_eq!(out, vec![Tile2::LetterTile.code(), 0x41]);
    }

    #[test]
    fn clone_machine_multi_direction_round_trips() {
        let mask = WIRE_N | WIRE_W;
        let el = decode_bytes(&[Tile2::CloneMachine.code(), mask]);
        assert_eq!(el.directions, Some(vec![Dir::N, Dir::W]));

        let mut out = Vec::new();
        el.encode(&mut out);
        assert_eq!(out[1], mask);
    }

    #[test]
    fn custom_wall_defaults_to_green_when_missing() {
        let el = Element::bare(Tile2::CustomWall);
        let mut out = Vec::new();
        el.encode(&mut out);
        assert_eq!(out, vec![Tile2::CustomWall.code(), 0]);
    }

    #[test]
    fn gate_round_trips_through_byte_index() {
        let el = decode_bytes(&[Tile2::LogicGate.code(), 5]); // And, E
        assert_eq!(el.gate, Some(Gate::Oriented(GateKind::And, Dir::E)));
        let mut out = Vec::new();
        el.encode(&mut out);
        assert_eq!(out[1], 5);
    }

    #[test]
    fn counter_gate_round_trips() {
        let el = decode_bytes(&[Tile2::LogicGate.code(), 31]);
        assert_eq!(el.gate, Some(Gate::Counter(3)));
    }

    #[test]
    fn track_modifier_round_trips() {
        let el = decode_bytes(&[Tile2::RailroadTrack.code(), 0b0000_0101, 0b0001_0001]);
        assert_eq!(el.tracks, Some(vec![Track::Ne, Track::Sw]));
        assert_eq!(el.active_track, Some(Track::Se));
        assert_eq!(el.initial_entry, Some(Dir::E));
    }

    #[test]
    fn plain_tile_has_no_modifier_bytes() {
        let el = decode_bytes(&[Tile2::Floor.code()]);
        assert_eq!(el.wires, None);
        let mut out = Vec::new();
        el.encode(&mut out);
        assert_eq!(out, vec![Tile2::Floor.code()]);
    }
}
