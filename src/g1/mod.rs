//! The G1 format: a DAT container of 32x32 tile levels with a closed
//! catalog of ~110 tile codes, wired traps/cloners, and a consistency
//! engine (`Level::add`/`remove`/`connect`) that keeps the movement list
//! and wire tables in sync with the grid.

mod cell;
mod dat;
mod level;
mod rle;
mod tile;
pub mod transform;

pub use cell::Cell;
pub use dat::{read_dat, write_dat};
pub use level::{Coord, Level, TileMatch};
pub use tile::{Dir, Group, Tile1, MAX_CODE};

mod levelset;
pub use levelset::LevelSet;
