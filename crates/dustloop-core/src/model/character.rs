// ── Character roster ──
//
// The Guilty Gear -Strive- cast as the wiki names it. `display_name`
// must match the `chara` column of the move table exactly.

use serde::Serialize;

/// A playable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Character {
    /// Canonical two-letter code (e.g. `SO`).
    pub code: &'static str,
    /// Short name players type (e.g. `Sol`).
    pub name: &'static str,
    /// Full name as stored in the move table (e.g. `Sol Badguy`).
    pub display_name: &'static str,
}

impl Character {
    pub const fn new(code: &'static str, name: &'static str, display_name: &'static str) -> Self {
        Self {
            code,
            name,
            display_name,
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name)
    }
}

pub(crate) const ROSTER: &[Character] = &[
    Character::new("AN", "Anji", "Anji Mito"),
    Character::new("AS", "Asuka", "Asuka R♯"),
    Character::new("AX", "Axl", "Axl Low"),
    Character::new("BA", "Baiken", "Baiken"),
    Character::new("BE", "Bedman", "Bedman"),
    Character::new("BR", "Bridget", "Bridget"),
    Character::new("CH", "Chipp", "Chipp Zanuff"),
    Character::new("EL", "Elphelt", "Elphelt Valentine"),
    Character::new("FA", "Faust", "Faust"),
    Character::new("GI", "Giovanna", "Giovanna"),
    Character::new("GO", "Goldlewis", "Goldlewis Dickinson"),
    Character::new("HA", "Happy", "Happy Chaos"),
    Character::new("IN", "I-No", "I-No"),
    Character::new("JC", "Jack-O", "Jack-O"),
    Character::new("JO", "Johnny", "Johnny"),
    Character::new("KY", "Ky", "Ky Kiske"),
    Character::new("LE", "Leo", "Leo Whitefang"),
    Character::new("MA", "May", "May"),
    Character::new("MI", "Millia", "Millia Rage"),
    Character::new("NA", "Nagoriyuki", "Nagoriyuki"),
    Character::new("PO", "Potemkin", "Potemkin"),
    Character::new("RA", "Ramlethal", "Ramlethal"),
    Character::new("SI", "Sin", "Sin Kiske"),
    Character::new("SO", "Sol", "Sol Badguy"),
    Character::new("TE", "Testament", "Testament"),
    Character::new("ZA", "Zato", "Zato-1"),
];
