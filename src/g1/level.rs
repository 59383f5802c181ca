use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::tile::Tile1;

pub const WIDTH: usize = 32;
pub const HEIGHT: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub fn new(x: u8, y: u8) -> Coord {
        Coord { x, y }
    }
}

/// A tile, or a set of tiles, accepted by count/replace-style operations.
pub enum TileMatch<'a> {
    One(Tile1),
    Many(&'a [Tile1]),
}

impl From<Tile1> for TileMatch<'static> {
    fn from(t: Tile1) -> Self {
        TileMatch::One(t)
    }
}

impl<'a> From<&'a [Tile1]> for TileMatch<'a> {
    fn from(ts: &'a [Tile1]) -> Self {
        TileMatch::Many(ts)
    }
}

impl<'a> TileMatch<'a> {
    pub(crate) fn matches(&self, t: Tile1) -> bool {
        match self {
            TileMatch::One(x) => *x == t,
            TileMatch::Many(xs) => xs.contains(&t),
        }
    }
}

/// 32x32 grid of G1 cells plus the three side-tables (movement order,
/// trap wiring, cloner wiring) the consistency engine keeps in sync with
/// every edit. See spec.md §4.D.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub title: String,
    pub chips: u16,
    pub time: u16,
    pub password: [u8; 4],
    pub hint: Option<String>,
    pub author: Option<String>,
    map: Vec<Cell>,
    pub movement: Vec<Coord>,
    pub traps: HashMap<Coord, Coord>,
    pub cloners: HashMap<Coord, Coord>,
}

fn index(c: Coord) -> usize {
    c.y as usize * WIDTH + c.x as usize
}

impl Default for Level {
    fn default() -> Level {
        Level {
            title: String::new(),
            chips: 0,
            time: 0,
            password: *b"AAAA",
            hint: None,
            author: None,
            map: vec![Cell::default(); WIDTH * HEIGHT],
            movement: Vec::new(),
            traps: HashMap::new(),
            cloners: HashMap::new(),
        }
    }
}

impl Level {
    /// Build a level directly from already-decoded container fields,
    /// bypassing the `add`/`remove` consistency engine. Used only by the
    /// DAT reader, which reconstructs whatever the file actually
    /// contains (which may or may not be `is_valid()`).
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_raw_parts(
        title: String,
        chips: u16,
        time: u16,
        password: [u8; 4],
        hint: Option<String>,
        author: Option<String>,
        map: Vec<Cell>,
        movement: Vec<Coord>,
        traps: HashMap<Coord, Coord>,
        cloners: HashMap<Coord, Coord>,
    ) -> Level {
        assert_eq!(map.len(), WIDTH * HEIGHT);
        Level {
            title,
            chips,
            time,
            password,
            hint,
            author,
            map,
            movement,
            traps,
            cloners,
        }
    }

    pub fn new() -> Level {
        Level::default()
    }

    pub fn at(&self, c: Coord) -> Cell {
        self.map[index(c)]
    }

    pub(crate) fn raw_cells(&self) -> &[Cell] {
        &self.map
    }

    fn set(&mut self, c: Coord, cell: Cell) {
        self.map[index(c)] = cell;
    }

    pub fn add(&mut self, c: Coord, tile: Tile1) {
        let mut cell = self.at(c);
        cell.add(tile);
        self.set(c, cell);

        if tile.is_monster() && !self.movement.contains(&c) {
            self.movement.push(c);
        }
    }

    pub fn remove(&mut self, c: Coord, tile: Tile1) {
        let mut cell = self.at(c);
        cell.remove(tile);
        self.set(c, cell);

        if tile.is_monster() && !cell.contains(tile) {
            self.movement.retain(|&m| m != c);
        }

        if tile.is_button() {
            self.traps.remove(&c);
            self.cloners.remove(&c);
        }
        if tile == Tile1::Trap {
            self.traps.retain(|_, &mut v| v != c);
        }
        if tile == Tile1::Cloner {
            self.cloners.retain(|_, &mut v| v != c);
        }
    }

    /// Wire `a` (a button) to `b` (its trap or cloner). Which table is
    /// chosen is decided by the tile sitting at `a`.
    pub fn connect(&mut self, a: Coord, b: Coord) {
        let a_cell = self.at(a);
        if a_cell.contains(Tile1::TrapButton) {
            self.traps.insert(a, b);
        } else if a_cell.contains(Tile1::CloneButton) {
            self.cloners.insert(a, b);
        }
    }

    pub fn count<'a>(&self, tiles: impl Into<TileMatch<'a>>) -> usize {
        let m = tiles.into();
        self.map
            .iter()
            .map(|cell| {
                let mut n = 0;
                if m.matches(cell.top) {
                    n += 1;
                }
                if cell.bottom != cell.top && m.matches(cell.bottom) {
                    n += 1;
                }
                n
            })
            .sum()
    }

    fn player_start_count(&self) -> usize {
        self.count(
            [
                Tile1::PlayerN,
                Tile1::PlayerE,
                Tile1::PlayerS,
                Tile1::PlayerW,
            ]
            .as_slice(),
        )
    }

    pub fn is_valid(&self) -> bool {
        if !self.map.iter().all(Cell::is_valid) {
            return false;
        }
        if !self
            .movement
            .iter()
            .all(|&c| self.at(c).top.is_monster())
        {
            return false;
        }
        for (&button, &trap) in &self.traps {
            if !self.at(button).contains(Tile1::TrapButton) || !self.at(trap).contains(Tile1::Trap) {
                return false;
            }
        }
        for (&button, &cloner) in &self.cloners {
            if !self.at(button).contains(Tile1::CloneButton)
                || !self.at(cloner).contains(Tile1::Cloner)
            {
                return false;
            }
        }
        self.player_start_count() == 1
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.map.iter().enumerate().map(|(i, &cell)| {
            (
                Coord::new((i % WIDTH) as u8, (i / WIDTH) as u8),
                cell,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_level_is_invalid_no_player() {
        let level = Level::new();
        assert!(!level.is_valid());
    }

    #[test]
    fn add_monster_tracks_movement_order() {
        let mut level = Level::new();
        level.add(Coord::new(1, 1), Tile1::PlayerN);
        level.add(Coord::new(5, 5), Tile1::TeethS);
        level.add(Coord::new(2, 2), Tile1::BugE);
        assert_eq!(level.movement, vec![Coord::new(5, 5), Coord::new(2, 2)]);
        assert!(level.is_valid());
    }

    #[test]
    fn remove_monster_drops_from_movement() {
        let mut level = Level::new();
        level.add(Coord::new(5, 5), Tile1::TeethS);
        level.remove(Coord::new(5, 5), Tile1::TeethS);
        assert!(level.movement.is_empty());
    }

    #[test]
    fn connect_trap_and_remove_endpoint() {
        let mut level = Level::new();
        level.add(Coord::new(10, 10), Tile1::TrapButton);
        level.add(Coord::new(20, 20), Tile1::Trap);
        level.connect(Coord::new(10, 10), Coord::new(20, 20));
        assert_eq!(level.traps.get(&Coord::new(10, 10)), Some(&Coord::new(20, 20)));

        level.remove(Coord::new(20, 20), Tile1::Trap);
        assert!(level.traps.is_empty());
    }

    #[test]
    fn count_tiles() {
        let mut level = Level::new();
        level.add(Coord::new(0, 0), Tile1::Wall);
        level.add(Coord::new(1, 0), Tile1::Wall);
        assert_eq!(level.count(Tile1::Wall), 2);
        assert_eq!(level.count(Tile1::Dirt), 0);
    }
}
