//! Game session - the container that owns one playthrough.
//!
//! The session holds the cast, clues, rooms, player and RNG, and is the only
//! place where an interrogation's side effects are applied: the player's
//! question count and the speaker's memory of what was asked.

use log::{debug, info};
use mystery_rules::{Clue, ClueRegistry, Npc, Personality, Player, Room, ScenarioConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::dialogue::{resolve, DialogueContext, Response};
use crate::error::{CoreError, CoreResult};
use crate::roles::{assign_roles, assign_roles_for_victim, clear_roles, RoleAssignment};

/// Unique identifier for a playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One game of the murder mystery.
pub struct GameSession {
    id: SessionId,
    config: ScenarioConfig,
    player: Player,
    npcs: Vec<Npc>,
    clues: ClueRegistry,
    rooms: HashMap<String, Box<dyn Room>>,
    roles: Option<RoleAssignment>,
    rng: StdRng,
}

impl GameSession {
    /// Create an empty session. The RNG is seeded from the config when it has a seed.
    pub fn new(config: ScenarioConfig, player: Player) -> Self {
        let rng = config
            .seed
            .map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        let id = SessionId::new();
        info!("Session {} started for {}", id, player.name);

        Self {
            id,
            config,
            player,
            npcs: Vec::new(),
            clues: ClueRegistry::new(),
            rooms: HashMap::new(),
            roles: None,
            rng,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Add a character to the cast. Names must be unique.
    pub fn add_npc(&mut self, npc: Npc) -> CoreResult<()> {
        if self.npc(npc.name()).is_some() {
            return Err(CoreError::DuplicateNpc(npc.name().to_string()));
        }
        self.npcs.push(npc);
        Ok(())
    }

    /// Add a room, keyed by its name.
    pub fn add_room(&mut self, room: impl Room + 'static) {
        self.rooms.insert(room.name().to_string(), Box::new(room));
    }

    /// Add a clue to the scenario.
    pub fn add_clue(&mut self, clue: Clue) -> CoreResult<()> {
        self.clues.register(clue)?;
        Ok(())
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// Get a character by name.
    pub fn npc(&self, name: &str) -> Option<&Npc> {
        self.npcs.iter().find(|npc| npc.name() == name)
    }

    pub fn clues(&self) -> &ClueRegistry {
        &self.clues
    }

    pub fn clues_mut(&mut self) -> &mut ClueRegistry {
        &mut self.clues
    }

    pub fn roles(&self) -> Option<&RoleAssignment> {
        self.roles.as_ref()
    }

    pub fn killer(&self) -> Option<&Npc> {
        self.roles.as_ref().map(|r| &self.npcs[r.killer])
    }

    pub fn victim(&self) -> Option<&Npc> {
        self.roles.as_ref().map(|r| &self.npcs[r.victim])
    }

    /// Roll the scenario: pick victim, killer and motives, then the murder weapon.
    ///
    /// Calling this again re-rolls the roles. The murder weapon is kept.
    /// If the roll fails, the session is left with no roles at all.
    pub fn setup(&mut self) -> CoreResult<&RoleAssignment> {
        self.discard_roles();
        let roles = assign_roles(&mut self.npcs, &mut self.rng)?;
        self.finish_setup(roles)
    }

    /// Roll the scenario around a chosen victim.
    pub fn setup_with_victim(&mut self, victim: &str) -> CoreResult<&RoleAssignment> {
        self.discard_roles();
        let roles = assign_roles_for_victim(&mut self.npcs, victim, &mut self.rng)?;
        self.finish_setup(roles)
    }

    fn discard_roles(&mut self) {
        self.roles = None;
        clear_roles(&mut self.npcs);
    }

    fn finish_setup(&mut self, roles: RoleAssignment) -> CoreResult<&RoleAssignment> {
        if self.clues.murder_weapon().is_none() {
            if let Some(weapon) = self.clues.assign_murder_weapon(&mut self.rng)? {
                info!("Session {}: the murder weapon is the {}", self.id, weapon.name());
            }
        }
        Ok(&*self.roles.insert(roles))
    }

    /// Record that a character knows about a clue.
    pub fn associate_clue(&mut self, npc: &str, clue: &str) -> CoreResult<()> {
        let index = self.index_of(npc)?;
        let clue = self.clues.require(clue)?;
        self.npcs[index].associate_clue(clue);
        Ok(())
    }

    /// Ask a character about a clue in the given style.
    ///
    /// An answer that matched the style counts as a question for the player and
    /// is remembered by the speaker.
    pub fn interrogate(
        &mut self,
        npc: &str,
        clue: &str,
        style: Personality,
    ) -> CoreResult<Response> {
        let killer = self
            .roles
            .as_ref()
            .ok_or(CoreError::RolesNotAssigned)?
            .killer;
        let speaker = self.index_of(npc)?;

        let candidate = &self.npcs[speaker];
        if candidate.is_victim() || candidate.is_accused() {
            return Err(CoreError::RefusesToTalk(candidate.name().to_string()));
        }

        let clue = self.clues.require(clue)?;
        let ctx = DialogueContext {
            roster: &self.npcs,
            killer: &self.npcs[killer],
            outdoor_room: &self.config.outdoor_room,
        };
        let response = resolve(
            &self.npcs[speaker],
            clue,
            style,
            self.player.personality,
            &ctx,
            &mut self.rng,
        )?;

        if response.branch.counts_as_question() {
            self.player.add_question();
            self.npcs[speaker].mark_asked(clue);
        }

        Ok(response)
    }

    /// Accuse a character of the murder. Returns true if they did it.
    ///
    /// A wrongly accused character refuses to answer any more questions.
    pub fn accuse(&mut self, npc: &str) -> CoreResult<bool> {
        if self.roles.is_none() {
            return Err(CoreError::RolesNotAssigned);
        }
        let index = self.index_of(npc)?;
        let accused = &mut self.npcs[index];

        if accused.is_killer() {
            info!("Session {}: {} was correctly accused", self.id, accused.name());
            return Ok(true);
        }

        debug!("Session {}: {} was wrongly accused", self.id, accused.name());
        accused.accuse();
        Ok(false)
    }

    /// Walk away from a character.
    pub fn ignore(&mut self, npc: &str) -> CoreResult<()> {
        let index = self.index_of(npc)?;
        self.npcs[index].ignore();
        Ok(())
    }

    /// Advance the simulation one tick. The victim stays put.
    pub fn tick(&mut self) -> CoreResult<()> {
        if let Some(lost) = self
            .npcs
            .iter()
            .find(|npc| !npc.is_victim() && !self.rooms.contains_key(npc.room()))
        {
            return Err(CoreError::UnknownRoom(lost.room().to_string()));
        }

        for npc in self.npcs.iter_mut().filter(|npc| !npc.is_victim()) {
            if let Some(room) = self.rooms.get(npc.room()) {
                npc.update(room.as_ref(), &self.config, &mut self.rng);
            }
        }
        Ok(())
    }

    fn index_of(&self, name: &str) -> CoreResult<usize> {
        self.npcs
            .iter()
            .position(|npc| npc.name() == name)
            .ok_or_else(|| CoreError::UnknownNpc(name.to_string()))
    }
}
