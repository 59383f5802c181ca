//! G2 cell: up to five optional layers in fixed priority order (spec.md
//! §3 G2 Cell): `panel`, `mob`, `not_allowed`, `pickup`, `terrain`.

use serde::{Deserialize, Serialize};

use super::element::Element;
use super::tile::Layer;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub terrain: Option<Element>,
    pub pickup: Option<Element>,
    pub not_allowed: Option<Element>,
    pub mob: Option<Element>,
    pub panel: Option<Element>,
}

impl Cell {
    pub fn new() -> Cell {
        Cell::default()
    }

    pub fn set(&mut self, el: Element) {
        match el.tile.layer() {
            Layer::Terrain => self.terrain = Some(el),
            Layer::Pickup => self.pickup = Some(el),
            Layer::NotAllowed => self.not_allowed = Some(el),
            Layer::Mob => self.mob = Some(el),
            Layer::Panel => self.panel = Some(el),
        }
    }

    pub fn get(&self, layer: Layer) -> Option<&Element> {
        match layer {
            Layer::Terrain => self.terrain.as_ref(),
            Layer::Pickup => self.pickup.as_ref(),
            Layer::NotAllowed => self.not_allowed.as_ref(),
            Layer::Mob => self.mob.as_ref(),
            Layer::Panel => self.panel.as_ref(),
        }
    }

    /// Layers present, in encode order (terrain -> pickup -> not_allowed
    /// -> mob -> panel).
    pub fn layers(&self) -> impl Iterator<Item = &Element> {
        [
            self.terrain.as_ref(),
            self.pickup.as_ref(),
            self.not_allowed.as_ref(),
            self.mob.as_ref(),
            self.panel.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g2::tile::Tile2;

    fn bare(tile: Tile2) -> Element {
        let mut r = std::io::Cursor::new(&[tile.code()][..]);
        Element::decode(&mut r).unwrap()
    }

    #[test]
    fn set_routes_to_the_right_layer() {
        let mut cell = Cell::new();
        cell.set(bare(Tile2::Floor));
        cell.set(bare(Tile2::Chip));
        cell.set(bare(Tile2::BugN));

        assert!(cell.terrain.is_some());
        assert!(cell.pickup.is_some());
        assert!(cell.mob.is_some());
        assert!(cell.not_allowed.is_none());
    }

    #[test]
    fn layers_emit_in_priority_order() {
        let mut cell = Cell::new();
        cell.set(bare(Tile2::BugN));
        cell.set(bare(Tile2::Floor));
        cell.set(bare(Tile2::Chip));

        let tiles: Vec<Tile2> = cell.layers().map(|e| e.tile).collect();
        assert_eq!(tiles, vec![Tile2::Floor, Tile2::Chip, Tile2::BugN]);
    }
}
