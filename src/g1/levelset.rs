use serde::{Deserialize, Serialize};

use super::level::Level;

/// An ordered collection of G1 levels, as read from or written to a DAT
/// container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<Level>,
}

impl LevelSet {
    pub fn new(levels: Vec<Level>) -> LevelSet {
        LevelSet { levels }
    }
}
