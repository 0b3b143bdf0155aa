//! Entity definitions for the mystery: clues, characters and the player.

mod clue;
mod npc;
mod player;

pub use clue::*;
pub use npc::*;
pub use player::*;

use serde::{Deserialize, Serialize};

use crate::mechanics::Direction;

/// A position on the tile grid, relative to the bottom left of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    /// Create a tile coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring tile one step in the given direction.
    pub fn step(&self, direction: Direction) -> Self {
        Self {
            x: self.x + direction.dx(),
            y: self.y + direction.dy(),
        }
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let origin = TileCoord::new(3, 3);
        assert_eq!(origin.step(Direction::North), TileCoord::new(3, 4));
        assert_eq!(origin.step(Direction::West), TileCoord::new(2, 3));
    }
}
