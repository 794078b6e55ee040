// ── Domain model ──
//
// Static roster and field catalog, plus the rows fetched from the wiki.

mod character;
mod field;
mod record;

pub use character::Character;
pub(crate) use character::ROSTER;
pub use field::Field;
pub use record::{FieldValue, MoveRecord};
