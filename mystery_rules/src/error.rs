//! Error types for the rulebook.

use thiserror::Error;

/// Errors raised while importing or mutating rulebook data.
#[derive(Debug, Error)]
pub enum RulesError {
    /// A personality token outside the closed set was found in authored data.
    #[error("Unknown personality: {0}")]
    UnknownPersonality(String),

    /// The NPC has no motive authored against the given victim.
    #[error("{npc} has no motive for killing {victim}")]
    MissingMotive { npc: String, victim: String },

    /// The NPC's dialogue data has no templates for a category.
    #[error("{npc} has no dialogue lines in category '{category}'")]
    MissingCategory { npc: String, category: String },

    /// Dialogue data could not be parsed.
    #[error("Malformed dialogue data: {0}")]
    MalformedDialogue(#[from] serde_json::Error),

    /// Scenario configuration could not be parsed.
    #[error("Malformed scenario config: {0}")]
    MalformedConfig(#[from] toml::de::Error),

    /// A data file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Two clues were registered under the same name.
    #[error("Duplicate clue: {0}")]
    DuplicateClue(String),

    /// A murder weapon has already been chosen for this scenario.
    #[error("Murder weapon already set: {0}")]
    MurderWeaponAlreadySet(String),

    /// No clue is registered under the given name.
    #[error("Unknown clue: {0}")]
    UnknownClue(String),
}

impl RulesError {
    /// Create a missing motive error.
    pub fn missing_motive(npc: impl Into<String>, victim: impl Into<String>) -> Self {
        Self::MissingMotive {
            npc: npc.into(),
            victim: victim.into(),
        }
    }

    /// Create a missing category error.
    pub fn missing_category(npc: impl Into<String>, category: impl Into<String>) -> Self {
        Self::MissingCategory {
            npc: npc.into(),
            category: category.into(),
        }
    }
}

pub type RulesResult<T> = Result<T, RulesError>;
