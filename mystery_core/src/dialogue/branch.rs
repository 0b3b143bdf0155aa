//! How well a question's tone fits the people involved.

use mystery_rules::Personality;
use serde::{Deserialize, Serialize};

/// Which answer path a question takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchBranch {
    /// Style, speaker and player all share one personality.
    Perfect,
    /// Style matches either the speaker or the player.
    Partial,
    /// Style matches neither.
    None,
}

impl MatchBranch {
    /// Evaluate the match predicates in priority order.
    pub fn select(speaker: Personality, style: Personality, player: Personality) -> Self {
        if style == speaker && player == style {
            MatchBranch::Perfect
        } else if style == speaker || style == player {
            MatchBranch::Partial
        } else {
            MatchBranch::None
        }
    }

    /// Whether the answer counts towards the player's question total.
    pub fn counts_as_question(&self) -> bool {
        !matches!(self, MatchBranch::None)
    }
}
