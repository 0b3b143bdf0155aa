//! Authored dialogue data - the per-character lines, archetype and motives.
//!
//! The JSON layout is one object per character:
//!
//! ```json
//! {
//!   "personality": "NICE",
//!   "motives": { "Carol": "She stole my research." },
//!   "responses": ["I saw %NPC near the %CLUE."],
//!   "noneResponses": ["I'd rather not talk to you."]
//! }
//! ```
//!
//! Every key other than `personality` and `motives` is a template category
//! holding one line or a list of lines. Keys holding anything else (flags,
//! numbers, nested objects) are skipped.

use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::RulesResult;
use crate::mechanics::Personality;

/// Category of lines used when the questioning style strikes a chord.
pub const RESPONSES: &str = "responses";

/// Category of lines used when the questioning style misses completely.
pub const NONE_RESPONSES: &str = "noneResponses";

/// Placeholder replaced with the name of the suspect a line points at.
pub const NPC_PLACEHOLDER: &str = "%NPC";

/// Placeholder replaced with the name of the clue under discussion.
pub const CLUE_PLACEHOLDER: &str = "%CLUE";

#[derive(Deserialize)]
#[serde(untagged)]
enum Lines {
    One(String),
    Many(Vec<String>),
    Other(IgnoredAny),
}

impl Lines {
    fn into_templates(self) -> Option<Vec<String>> {
        match self {
            Lines::One(line) => Some(vec![line]),
            Lines::Many(lines) => Some(lines),
            Lines::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct RawDialogue {
    personality: String,
    #[serde(default)]
    motives: HashMap<String, String>,
    #[serde(flatten)]
    categories: HashMap<String, Lines>,
}

/// Imported dialogue data for one character. Immutable after import.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueData {
    pub personality: Personality,
    /// Victim name -> motive text.
    motives: HashMap<String, String>,
    /// Category name -> candidate templates.
    categories: HashMap<String, Vec<String>>,
}

impl DialogueData {
    /// Create dialogue data with no lines and no motives.
    pub fn new(personality: Personality) -> Self {
        Self {
            personality,
            motives: HashMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Add a motive against the named victim.
    pub fn with_motive(mut self, victim: impl Into<String>, motive: impl Into<String>) -> Self {
        self.motives.insert(victim.into(), motive.into());
        self
    }

    /// Add a template to a category.
    pub fn with_line(mut self, category: impl Into<String>, template: impl Into<String>) -> Self {
        self.categories
            .entry(category.into())
            .or_default()
            .push(template.into());
        self
    }

    /// Parse dialogue data from JSON text.
    ///
    /// Unknown personality tokens are rejected here rather than at question time.
    pub fn from_json_str(text: &str) -> RulesResult<Self> {
        let raw: RawDialogue = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Convert an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> RulesResult<Self> {
        let raw: RawDialogue = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    /// Read and parse a JSON dialogue file.
    pub fn load(path: impl AsRef<Path>) -> RulesResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn from_raw(raw: RawDialogue) -> RulesResult<Self> {
        let personality = raw.personality.parse()?;
        Ok(Self {
            personality,
            motives: raw.motives,
            categories: raw
                .categories
                .into_iter()
                .filter_map(|(k, v)| v.into_templates().map(|lines| (k, lines)))
                .collect(),
        })
    }

    /// Candidate templates for a category. None if absent or empty.
    pub fn templates(&self, category: &str) -> Option<&[String]> {
        self.categories
            .get(category)
            .map(|v| v.as_slice())
            .filter(|v| !v.is_empty())
    }

    /// Motive text authored against the named victim.
    pub fn motive_for(&self, victim: &str) -> Option<&str> {
        self.motives.get(victim).map(|m| m.as_str())
    }

    /// Names of every category with at least one template.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
    }
}

/// Substitute the suspect placeholder in a template.
pub fn fill_suspect(template: &str, suspect: &str) -> String {
    template.replace(NPC_PLACEHOLDER, suspect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;
    use serde_json::json;

    #[test]
    fn test_parse_dialogue() {
        let data = DialogueData::from_value(json!({
            "personality": "AGGRESSIVE",
            "motives": { "Carol": "She knew too much." },
            "responses": ["It was %NPC.", "Ask %NPC about the %CLUE."],
            "noneResponses": "Get lost."
        }))
        .unwrap();

        assert_eq!(data.personality, Personality::Aggressive);
        assert_eq!(data.templates(RESPONSES).unwrap().len(), 2);
        assert_eq!(data.templates(NONE_RESPONSES).unwrap(), ["Get lost.".to_string()]);
        assert_eq!(data.motive_for("Carol"), Some("She knew too much."));
        assert_eq!(data.motive_for("Dave"), None);
    }

    #[test]
    fn test_unknown_personality_fails_at_import() {
        let err = DialogueData::from_json_str(r#"{"personality": "SHY", "responses": ["Hi"]}"#)
            .unwrap_err();
        assert!(matches!(err, RulesError::UnknownPersonality(t) if t == "SHY"));
    }

    #[test]
    fn test_missing_personality_is_malformed() {
        let err = DialogueData::from_json_str(r#"{"responses": ["Hi"]}"#).unwrap_err();
        assert!(matches!(err, RulesError::MalformedDialogue(_)));
    }

    #[test]
    fn test_non_template_keys_are_skipped() {
        let data = DialogueData::from_value(json!({
            "personality": "NEUTRAL",
            "responses": ["It was %NPC."],
            "canTalk": true,
            "age": 42,
            "extra": { "nested": "value" },
            "mixed": ["line", 3]
        }))
        .unwrap();

        assert_eq!(data.templates(RESPONSES).unwrap().len(), 1);
        assert!(data.templates("canTalk").is_none());
        assert!(data.templates("age").is_none());
        assert!(data.templates("extra").is_none());
        assert!(data.templates("mixed").is_none());
        assert_eq!(data.categories().collect::<Vec<_>>(), vec![RESPONSES]);
    }

    #[test]
    fn test_empty_category_counts_as_absent() {
        let data = DialogueData::from_value(json!({
            "personality": "NICE",
            "responses": []
        }))
        .unwrap();
        assert!(data.templates(RESPONSES).is_none());
        assert_eq!(data.categories().count(), 0);
    }

    #[test]
    fn test_builder() {
        let data = DialogueData::new(Personality::Neutral)
            .with_line(RESPONSES, "It was %NPC.")
            .with_motive("Bob", "Money.");
        assert_eq!(data.templates(RESPONSES).unwrap().len(), 1);
        assert_eq!(data.motive_for("Bob"), Some("Money."));
    }

    #[test]
    fn test_fill_suspect() {
        assert_eq!(fill_suspect("It was %NPC, I swear. %NPC!", "Bob"), "It was Bob, I swear. Bob!");
        assert_eq!(fill_suspect("No names here.", "Bob"), "No names here.");
    }
}
