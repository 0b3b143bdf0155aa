//! The player character.

use serde::{Deserialize, Serialize};

use crate::mechanics::Personality;

/// The detective. Only the parts interrogation cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub personality: Personality,
    questions_asked: u32,
}

impl Player {
    /// Create a new player who has asked nothing yet.
    pub fn new(name: impl Into<String>, personality: Personality) -> Self {
        Self {
            name: name.into(),
            personality,
            questions_asked: 0,
        }
    }

    /// Count one more question that got a real answer.
    pub fn add_question(&mut self) {
        self.questions_asked += 1;
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_counter() {
        let mut player = Player::new("Detective", Personality::Nice);
        assert_eq!(player.questions_asked(), 0);
        player.add_question();
        player.add_question();
        assert_eq!(player.questions_asked(), 2);
    }
}
