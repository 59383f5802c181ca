use serde::{Deserialize, Serialize};

use super::tile::Tile1;

/// A two-layer G1 cell: `top` and `bottom`. `bottom` never holds a mob —
/// mobs only ever sit on `top`, with whatever terrain they're standing on
/// demoted underneath.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub top: Tile1,
    pub bottom: Tile1,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            top: Tile1::Floor,
            bottom: Tile1::Floor,
        }
    }
}

impl Cell {
    pub fn new(top: Tile1, bottom: Tile1) -> Cell {
        Cell { top, bottom }
    }

    pub fn contains(&self, tile: Tile1) -> bool {
        self.top == tile || self.bottom == tile
    }

    pub fn elements(&self) -> Vec<Tile1> {
        if self.bottom == Tile1::Floor {
            vec![self.top]
        } else {
            vec![self.top, self.bottom]
        }
    }

    /// Apply the cell's add policy (spec.md §3 G1 Cell):
    /// - adding floor on top of non-floor is a no-op
    /// - a mob always goes to `top`; a prior non-mob `top` demotes to
    ///   `bottom` (unless it was floor, in which case it's just dropped)
    /// - non-mob terrain replaces `bottom`, or `top` if `top` has no mob
    pub fn add(&mut self, tile: Tile1) {
        if tile == Tile1::Floor {
            return;
        }
        if tile.is_mob() {
            if !self.top.is_mob() && self.top != Tile1::Floor {
                self.bottom = self.top;
            }
            self.top = tile;
        } else if self.top.is_mob() {
            self.bottom = tile;
        } else {
            self.top = tile;
        }
    }

    /// Apply the cell's remove policy: if `tile` matches `top`, `top`
    /// becomes `bottom` and `bottom` becomes floor; if it matches
    /// `bottom`, `bottom` becomes floor; otherwise no-op.
    pub fn remove(&mut self, tile: Tile1) {
        if self.top == tile {
            self.top = self.bottom;
            self.bottom = Tile1::Floor;
        } else if self.bottom == tile {
            self.bottom = Tile1::Floor;
        }
    }

    /// False if `top` is a legal-bottom tile while `bottom` is non-floor
    /// (a mob can never be demoted under anything but floor), or if
    /// `bottom` holds a mob.
    pub fn is_valid(&self) -> bool {
        if self.bottom.is_mob() {
            return false;
        }
        if !self.top.is_mob() && self.bottom != Tile1::Floor {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_mob_over_terrain_demotes_terrain() {
        let mut c = Cell::new(Tile1::TeethS, Tile1::Gravel);
        c.add(Tile1::BlobS);
        assert_eq!(c, Cell::new(Tile1::BlobS, Tile1::Gravel));

        c.add(Tile1::Dirt);
        assert_eq!(c, Cell::new(Tile1::BlobS, Tile1::Dirt));

        c.remove(Tile1::BlobS);
        assert_eq!(c, Cell::new(Tile1::Dirt, Tile1::Floor));
    }

    #[test]
    fn add_floor_over_floor_is_noop() {
        let mut c = Cell::default();
        c.add(Tile1::Floor);
        assert_eq!(c, Cell::default());
    }

    #[test]
    fn add_second_mob_replaces_first() {
        // A mob can never be demoted to `bottom` (is_valid() forbids it),
        // so adding a second mob drops the first rather than stacking it.
        let mut c = Cell::new(Tile1::BugN, Tile1::Floor);
        c.add(Tile1::TankE);
        assert_eq!(c.top, Tile1::TankE);
        assert_eq!(c.bottom, Tile1::Floor);
    }

    #[test]
    fn remove_nonmatching_is_noop() {
        let mut c = Cell::new(Tile1::Wall, Tile1::Floor);
        c.remove(Tile1::Dirt);
        assert_eq!(c, Cell::new(Tile1::Wall, Tile1::Floor));
    }

    #[test]
    fn validity_after_edits() {
        let mut c = Cell::default();
        c.add(Tile1::PlayerN);
        assert!(c.is_valid());
        c.add(Tile1::Water);
        assert!(c.is_valid());
    }
}
