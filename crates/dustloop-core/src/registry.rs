// ── Character alias resolution ──
//
// Exact (case-insensitive) lookup only. Fuzzy matching happens later,
// on move inputs, never on character names.

use crate::model::{Character, ROSTER};

/// Maps user-typed aliases to roster entries.
#[derive(Debug, Clone, Copy)]
pub struct AliasRegistry {
    characters: &'static [Character],
}

impl AliasRegistry {
    /// Registry over the built-in roster.
    pub fn new() -> Self {
        Self::with_characters(ROSTER)
    }

    /// Registry over a custom roster. Order decides ties.
    pub fn with_characters(characters: &'static [Character]) -> Self {
        Self { characters }
    }

    /// All registered characters, in registration order.
    pub fn characters(&self) -> &'static [Character] {
        self.characters
    }

    /// Resolve a code (`SO`), short name (`sol`) or full name
    /// (`SOL BADGUY`) to its character.
    pub fn resolve(&self, alias: &str) -> Option<&'static Character> {
        let alias = alias.trim();
        if alias.is_empty() {
            return None;
        }

        let code = alias.to_uppercase();
        if let Some(found) = self.characters.iter().find(|c| c.code == code) {
            return Some(found);
        }

        let lowered = alias.to_lowercase();
        self.characters.iter().find(|c| {
            c.name.to_lowercase() == lowered || c.display_name.to_lowercase() == lowered
        })
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::new()
    }
}
