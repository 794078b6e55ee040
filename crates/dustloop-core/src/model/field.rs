// ── Queryable move properties ──

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// A property users can ask about.
///
/// The strum key is the column name in the move table; [`Field::label`] is
/// what replies show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Chara,
    Input,
    Name,
    Images,
    Damage,
    Guard,
    Startup,
    Active,
    Recovery,
    OnBlock,
    OnHit,
    Invuln,
    Type,
}

impl Field {
    /// Column name in the move table.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Human-readable label used in replies.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chara => "Character",
            Self::Input => "Input Command",
            Self::Name => "Move Name",
            Self::Images => "Images",
            Self::Damage => "Damage",
            Self::Guard => "Guard Type",
            Self::Startup => "Startup Frames",
            Self::Active => "Active Frames",
            Self::Recovery => "Recovery Time",
            Self::OnBlock => "Advantage on Block",
            Self::OnHit => "Advantage on Hit",
            Self::Invuln => "Invulnerability",
            Self::Type => "Move Type",
        }
    }

    /// Extra spellings accepted besides the key.
    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Invuln => &["invul"],
            _ => &[],
        }
    }

    /// Whether the column is requested from the wiki.
    pub const fn is_fetched(self) -> bool {
        !matches!(self, Self::Images)
    }

    /// Case-insensitive lookup by key or alias.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::iter().find(|field| {
            field.key().eq_ignore_ascii_case(name)
                || field.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
        })
    }

    /// Columns requested from the wiki, in table order.
    pub fn fetched() -> impl Iterator<Item = Self> {
        Self::iter().filter(|f| f.is_fetched())
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
