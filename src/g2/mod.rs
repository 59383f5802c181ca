//! The G2 format: an opcode-per-byte tile stream, layered cells, and an
//! LZ-style pack codec over the decoded stream. Only decode (plus repack
//! of the compressed map payload) is in scope — the surrounding
//! container format is unspecified and kept opaque.

mod cell;
mod container;
mod element;
pub mod map;
pub mod pack;
mod tile;

pub use cell::Cell;
pub use container::{split_map_section, G2Container};
pub use element::{Color, Element, Gate, GateKind, Track, WireSet};
pub use map::Map;
pub use tile::{Layer, ModifierFamily, Tile2, MAX_CODE};
