//! Rooms of the map and the catalog of clues placed in them.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::entities::{Clue, TileCoord};
use crate::error::{RulesError, RulesResult};

/// A room of the map, as far as characters moving around it are concerned.
pub trait Room {
    /// Display name of the room.
    fn name(&self) -> &str;

    /// Whether a character may stand on the tile.
    fn is_walkable_tile(&self, x: i32, y: i32) -> bool;
}

/// A rectangular room with a set of blocked tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileRoom {
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub blocked: HashSet<TileCoord>,
}

impl TileRoom {
    /// Create an open room of the given size.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            blocked: HashSet::new(),
        }
    }

    /// Block a tile (furniture, walls, ...).
    pub fn with_blocked(mut self, tile: TileCoord) -> Self {
        self.blocked.insert(tile);
        self
    }

    /// Check if a tile lies inside the room.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }
}

impl Room for TileRoom {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_walkable_tile(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && !self.blocked.contains(&TileCoord::new(x, y))
    }
}

/// Every clue of a scenario, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ClueRegistry {
    clues: Vec<Clue>,
    by_name: HashMap<String, usize>,
}

impl ClueRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue. Names must be unique.
    pub fn register(&mut self, clue: Clue) -> RulesResult<()> {
        if self.by_name.contains_key(clue.name()) {
            return Err(RulesError::DuplicateClue(clue.name().to_string()));
        }
        self.by_name.insert(clue.name().to_string(), self.clues.len());
        self.clues.push(clue);
        Ok(())
    }

    /// Get a clue by name.
    pub fn get(&self, name: &str) -> Option<&Clue> {
        self.by_name.get(name).map(|&i| &self.clues[i])
    }

    /// Get a clue by name, or fail with `UnknownClue`.
    pub fn require(&self, name: &str) -> RulesResult<&Clue> {
        self.get(name)
            .ok_or_else(|| RulesError::UnknownClue(name.to_string()))
    }

    /// Move a clue to another tile.
    pub fn set_tile_coordinates(&mut self, name: &str, tile: TileCoord) -> RulesResult<()> {
        let index = *self
            .by_name
            .get(name)
            .ok_or_else(|| RulesError::UnknownClue(name.to_string()))?;
        self.clues[index].set_tile_coordinates(tile);
        Ok(())
    }

    /// The clue currently flagged as the murder weapon.
    pub fn murder_weapon(&self) -> Option<&Clue> {
        self.clues.iter().find(|c| c.is_murder_weapon())
    }

    /// Pick a random clue that is not a red herring and flag it as the murder weapon.
    ///
    /// Returns None when no clue qualifies.
    pub fn assign_murder_weapon(&mut self, rng: &mut impl Rng) -> RulesResult<Option<&Clue>> {
        if let Some(weapon) = self.murder_weapon() {
            return Err(RulesError::MurderWeaponAlreadySet(weapon.name().to_string()));
        }

        let candidates: Vec<usize> = self
            .clues
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_red_herring())
            .map(|(i, _)| i)
            .collect();

        let Some(&index) = candidates.choose(rng) else {
            return Ok(None);
        };

        self.clues[index].mark_murder_weapon();
        Ok(Some(&self.clues[index]))
    }

    /// Iterate over all clues in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Clue> {
        self.clues.iter()
    }

    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> ClueRegistry {
        let mut registry = ClueRegistry::new();
        registry.register(Clue::new("Knife", "Sharp")).unwrap();
        registry
            .register(Clue::new("Lipstick", "Smudged").with_red_herring(true))
            .unwrap();
        registry.register(Clue::new("Rope", "Frayed")).unwrap();
        registry
    }

    #[test]
    fn test_tile_room_walkability() {
        let room = TileRoom::new("Lab", 3, 2).with_blocked(TileCoord::new(1, 1));
        assert_eq!(room.name(), "Lab");
        assert!(room.is_walkable_tile(0, 0));
        assert!(!room.is_walkable_tile(1, 1));
        assert!(!room.is_walkable_tile(3, 0));
        assert!(!room.is_walkable_tile(0, -1));
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = registry();
        assert_eq!(registry.len(), 3);
        assert!(registry.get("Rope").is_some());
        assert!(registry.get("Gun").is_none());
        assert!(matches!(registry.require("Gun"), Err(RulesError::UnknownClue(_))));
    }

    #[test]
    fn test_duplicate_clue_rejected() {
        let mut registry = registry();
        let err = registry.register(Clue::new("Knife", "Another knife")).unwrap_err();
        assert!(matches!(err, RulesError::DuplicateClue(name) if name == "Knife"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_move_clue() {
        let mut registry = registry();
        registry.set_tile_coordinates("Rope", TileCoord::new(4, 1)).unwrap();
        assert_eq!(registry.get("Rope").unwrap().tile(), TileCoord::new(4, 1));
        assert!(registry.set_tile_coordinates("Gun", TileCoord::new(0, 0)).is_err());
    }

    #[test]
    fn test_murder_weapon_never_red_herring() {
        for seed in 0..50 {
            let mut registry = registry();
            let mut rng = StdRng::seed_from_u64(seed);
            let weapon = registry.assign_murder_weapon(&mut rng).unwrap().unwrap();
            assert_ne!(weapon.name(), "Lipstick");
            assert_eq!(registry.iter().filter(|c| c.is_murder_weapon()).count(), 1);
        }
    }

    #[test]
    fn test_murder_weapon_assigned_once() {
        let mut registry = registry();
        let mut rng = StdRng::seed_from_u64(3);
        registry.assign_murder_weapon(&mut rng).unwrap();
        assert!(matches!(
            registry.assign_murder_weapon(&mut rng),
            Err(RulesError::MurderWeaponAlreadySet(_))
        ));
    }

    #[test]
    fn test_no_murder_weapon_candidates() {
        let mut registry = ClueRegistry::new();
        registry
            .register(Clue::new("Lipstick", "Smudged").with_red_herring(true))
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(registry.assign_murder_weapon(&mut rng).unwrap().is_none());
    }
}
