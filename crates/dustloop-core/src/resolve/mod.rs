// ── Move resolution ──
//
// Filter the dataset to one character, fuzzy-match the move, then read
// and format one field. Filtering first keeps other characters' moves out
// of the search entirely.

mod format;
mod search;

pub use format::format_field;
pub use search::{MatchTier, MoveMatcher, Score};

use tracing::debug;

use crate::error::LookupError;
use crate::model::{Character, Field, MoveRecord};

/// Turns `(character, move query, property)` into a reply line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionEngine {
    matcher: MoveMatcher,
}

impl ResolutionEngine {
    pub fn new(matcher: MoveMatcher) -> Self {
        Self { matcher }
    }

    /// Resolve one property of one move.
    ///
    /// Gates run in order and the first failure wins: character rows,
    /// then the move, then the property name.
    pub fn resolve(
        &self,
        records: &[MoveRecord],
        character: &Character,
        move_query: &str,
        property: &str,
    ) -> Result<String, LookupError> {
        let moves: Vec<&MoveRecord> = records
            .iter()
            .filter(|r| r.chara == character.display_name)
            .collect();
        if moves.is_empty() {
            return Err(LookupError::CharacterNotFound);
        }

        let record = self
            .find_move(&moves, move_query)
            .ok_or(LookupError::MoveNotFound)?;
        let field = Field::parse(property).ok_or(LookupError::InvalidProperty)?;

        Ok(format_field(field, record.field_text(field).as_deref()))
    }

    /// Best match by input; falls back to literal matches on the move name.
    pub fn find_move<'a>(&self, moves: &[&'a MoveRecord], query: &str) -> Option<&'a MoveRecord> {
        let by_input = self
            .matcher
            .best(query, moves.iter().copied(), |r| r.input.as_deref(), true);
        if let Some((record, score)) = by_input {
            debug!(input = record.input(), ?score, "matched move by input");
            return Some(record);
        }

        let by_name = self
            .matcher
            .best(query, moves.iter().copied(), |r| r.name.as_deref(), false);
        by_name.map(|(record, score)| {
            debug!(name = ?record.name, ?score, "matched move by name");
            record
        })
    }
}
