//! Clue definitions.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::TileCoord;

/// A clue the player can find and bring up during questioning.
///
/// Clues are identified by name alone: two clues with the same name are equal
/// wherever they are on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clue {
    name: String,
    description: String,
    murder_weapon: bool,
    red_herring: bool,
    tile: TileCoord,
}

impl Clue {
    /// Create a clue with the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            murder_weapon: false,
            red_herring: false,
            tile: TileCoord::default(),
        }
    }

    /// Flag the clue as a red herring.
    pub fn with_red_herring(mut self, red_herring: bool) -> Self {
        self.red_herring = red_herring;
        self
    }

    /// Place the clue on a tile.
    pub fn with_tile(mut self, tile: TileCoord) -> Self {
        self.tile = tile;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_murder_weapon(&self) -> bool {
        self.murder_weapon
    }

    pub fn is_red_herring(&self) -> bool {
        self.red_herring
    }

    pub fn tile(&self) -> TileCoord {
        self.tile
    }

    /// Move the clue to another tile.
    pub fn set_tile_coordinates(&mut self, tile: TileCoord) {
        self.tile = tile;
    }

    /// Mark this clue as the murder weapon.
    ///
    /// The flag can only be set once; returns false if it already was.
    pub fn mark_murder_weapon(&mut self) -> bool {
        if self.murder_weapon {
            return false;
        }
        self.murder_weapon = true;
        true
    }
}

impl PartialEq for Clue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Clue {}

impl Hash for Clue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
