//! Non-player characters: roles, motive, clue memory and idle wandering.

use log::{info, trace};
use rand::Rng;
use std::collections::HashSet;

use super::{Clue, TileCoord};
use crate::config::ScenarioConfig;
use crate::data::DialogueData;
use crate::error::{RulesError, RulesResult};
use crate::mechanics::{Direction, PersonState, Personality};
use crate::world_state::Room;

/// A step between two tiles that is still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Walk {
    target: TileCoord,
    remaining_ticks: u32,
}

/// A suspect the player can question.
#[derive(Debug, Clone)]
pub struct Npc {
    name: String,
    dialogue: DialogueData,

    // Scenario roles
    can_be_killer: bool,
    is_killer: bool,
    is_victim: bool,
    motive: Option<String>,

    // Knowledge and interaction history
    associated_clues: HashSet<String>,
    already_asked_clues: HashSet<String>,
    ignored: bool,
    accused: bool,

    // Placement and movement
    room: String,
    tile: TileCoord,
    direction: Direction,
    state: PersonState,
    walk: Option<Walk>,
    pub can_move: bool,
}

impl Npc {
    /// Create an NPC standing on a tile of the named room.
    pub fn new(
        name: impl Into<String>,
        room: impl Into<String>,
        tile: TileCoord,
        can_be_killer: bool,
        dialogue: DialogueData,
    ) -> Self {
        Self {
            name: name.into(),
            dialogue,
            can_be_killer,
            is_killer: false,
            is_victim: false,
            motive: None,
            associated_clues: HashSet::new(),
            already_asked_clues: HashSet::new(),
            ignored: false,
            accused: false,
            room: room.into(),
            tile,
            direction: Direction::default(),
            state: PersonState::Standing,
            walk: None,
            can_move: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The archetype this NPC responds best to, fixed by its dialogue data.
    pub fn personality(&self) -> Personality {
        self.dialogue.personality
    }

    pub fn dialogue(&self) -> &DialogueData {
        &self.dialogue
    }

    /// Candidate templates for a dialogue category.
    pub fn templates(&self, category: &str) -> RulesResult<&[String]> {
        self.dialogue
            .templates(category)
            .ok_or_else(|| RulesError::missing_category(&self.name, category))
    }

    pub fn can_be_killer(&self) -> bool {
        self.can_be_killer
    }

    pub fn is_killer(&self) -> bool {
        self.is_killer
    }

    pub fn is_victim(&self) -> bool {
        self.is_victim
    }

    /// Why this NPC killed the victim, once assigned.
    pub fn motive(&self) -> Option<&str> {
        self.motive.as_deref()
    }

    /// Make this NPC the killer.
    ///
    /// Fails without changing anything if they are the victim or not allowed to be the killer.
    pub fn set_killer(&mut self) -> bool {
        if self.is_victim || !self.can_be_killer {
            return false;
        }
        self.is_killer = true;
        info!("{} is the killer", self.name);
        true
    }

    /// Make this NPC the victim.
    ///
    /// Fails without changing anything if they are already the killer.
    pub fn set_victim(&mut self) -> bool {
        if self.is_killer {
            return false;
        }
        self.is_victim = true;
        info!("{} is the victim", self.name);
        true
    }

    /// Drop killer, victim and motive so the scenario can be rolled again.
    pub fn clear_roles(&mut self) {
        self.is_killer = false;
        self.is_victim = false;
        self.motive = None;
    }

    /// Look up and store the motive authored against the named victim.
    pub fn set_motive(&mut self, victim: &str) -> RulesResult<&str> {
        let motive = self
            .dialogue
            .motive_for(victim)
            .ok_or_else(|| RulesError::missing_motive(&self.name, victim))?
            .to_string();
        Ok(self.motive.insert(motive).as_str())
    }

    /// Record that this NPC knows something about a clue.
    pub fn associate_clue(&mut self, clue: &Clue) {
        self.associated_clues.insert(clue.name().to_string());
    }

    pub fn knows_about(&self, clue: &Clue) -> bool {
        self.associated_clues.contains(clue.name())
    }

    /// Record that the player has asked about a clue. Returns true the first time.
    pub fn mark_asked(&mut self, clue: &Clue) -> bool {
        self.already_asked_clues.insert(clue.name().to_string())
    }

    pub fn has_been_asked(&self, clue: &Clue) -> bool {
        self.already_asked_clues.contains(clue.name())
    }

    pub fn asked_clue_count(&self) -> usize {
        self.already_asked_clues.len()
    }

    pub fn ignore(&mut self) {
        self.ignored = true;
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Mark this NPC as wrongly accused. They stop talking to the player.
    pub fn accuse(&mut self) {
        self.accused = true;
    }

    pub fn is_accused(&self) -> bool {
        self.accused
    }

    /// Name of the room this NPC is currently in.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Move the NPC to another room, standing on the given tile.
    pub fn place(&mut self, room: impl Into<String>, tile: TileCoord) {
        self.room = room.into();
        self.tile = tile;
        self.walk = None;
        self.state = PersonState::Standing;
    }

    pub fn tile(&self) -> TileCoord {
        self.tile
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> PersonState {
        self.state
    }

    /// Try to take one step in a direction.
    ///
    /// Facing a blocked tile only turns the NPC. Returns true if a step started.
    pub fn move_towards(&mut self, direction: Direction, room: &dyn Room, walk_ticks: u32) -> bool {
        if self.state != PersonState::Standing || !self.can_move {
            return false;
        }

        let target = self.tile.step(direction);
        self.direction = direction;

        if !room.is_walkable_tile(target.x, target.y) {
            trace!("{} turns {:?} towards blocked tile {}", self.name, direction, target);
            return false;
        }

        self.state = PersonState::Walking;
        self.walk = Some(Walk {
            target,
            remaining_ticks: walk_ticks.max(1),
        });
        true
    }

    /// Advance one simulation tick: finish any step in progress, then maybe wander.
    pub fn update(&mut self, room: &dyn Room, config: &ScenarioConfig, rng: &mut impl Rng) {
        self.advance_walk();
        self.random_move(room, config, rng);
    }

    fn advance_walk(&mut self) {
        let Some(walk) = self.walk.as_mut() else {
            return;
        };

        walk.remaining_ticks = walk.remaining_ticks.saturating_sub(1);
        if walk.remaining_ticks == 0 {
            self.tile = walk.target;
            self.walk = None;
            self.state = PersonState::Standing;
        }
    }

    /// Occasionally take a step, usually in the direction already faced.
    ///
    /// Roll thresholds: keep facing below 0.5, then north, south and east take
    /// 0.12 each and west takes the rest.
    pub fn random_move(&mut self, room: &dyn Room, config: &ScenarioConfig, rng: &mut impl Rng) {
        if self.state == PersonState::Walking {
            return;
        }

        if rng.gen::<f64>() >= config.move_chance {
            return;
        }

        let roll: f64 = rng.gen();
        let direction = if roll < 0.5 {
            self.direction
        } else if roll < 0.62 {
            Direction::North
        } else if roll < 0.74 {
            Direction::South
        } else if roll < 0.86 {
            Direction::East
        } else {
            Direction::West
        };

        self.move_towards(direction, room, config.walk_ticks);
    }
}
