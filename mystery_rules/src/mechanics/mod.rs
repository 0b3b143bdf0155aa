//! Game mechanics: personalities, facing directions and movement states.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RulesError;

/// Character archetypes.
///
/// Used both as an NPC's own temperament and as the tone the player picks
/// when questioning someone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Personality {
    Aggressive,
    Neutral,
    Nice,
}

impl Personality {
    /// Every archetype, in declaration order.
    pub const ALL: [Personality; 3] = [
        Personality::Aggressive,
        Personality::Neutral,
        Personality::Nice,
    ];

    /// The token used for this archetype in authored data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Aggressive => "AGGRESSIVE",
            Personality::Neutral => "NEUTRAL",
            Personality::Nice => "NICE",
        }
    }
}

impl FromStr for Personality {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Personality::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| RulesError::UnknownPersonality(token.to_string()))
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Facing / stepping directions on the tile grid.
///
/// Tile coordinates grow to the right and upwards from the bottom left of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    North,
    #[default]
    South,
    East,
    West,
}

impl Direction {
    /// Column offset of a single step.
    pub fn dx(&self) -> i32 {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South => 0,
        }
    }

    /// Row offset of a single step.
    pub fn dy(&self) -> i32 {
        match self {
            Direction::North => 1,
            Direction::South => -1,
            Direction::East | Direction::West => 0,
        }
    }
}

/// Whether a person is standing on a tile or between two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PersonState {
    #[default]
    Standing,
    Walking,
}
