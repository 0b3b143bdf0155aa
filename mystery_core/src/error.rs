//! Error types for the deduction engine.

use mystery_rules::RulesError;
use thiserror::Error;

/// Errors raised while setting up or playing a session.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Role assignment was asked to work on an empty cast.
    #[error("No characters to assign roles to")]
    EmptyRoster,

    /// Nobody can be the killer of the chosen victim.
    #[error("No character can be the killer of {victim}")]
    NoEligibleKiller { victim: String },

    /// The session was played before roles were assigned.
    #[error("Roles have not been assigned yet")]
    RolesNotAssigned,

    /// There is nobody left to point the player at.
    #[error("{speaker} has nobody to name as a decoy")]
    NoDecoyAvailable { speaker: String },

    /// No character with this name is in the session.
    #[error("Unknown character: {0}")]
    UnknownNpc(String),

    /// A character with this name is already in the session.
    #[error("Duplicate character: {0}")]
    DuplicateNpc(String),

    /// A character stands in a room the session does not know.
    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    /// The character will not answer questions.
    #[error("{0} refuses to talk")]
    RefusesToTalk(String),

    /// Rulebook data was missing or invalid.
    #[error(transparent)]
    Rules(#[from] RulesError),
}

pub type CoreResult<T> = Result<T, CoreError>;
