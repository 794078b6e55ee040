// ── Move table rows ──

use serde::{Deserialize, Serialize};

use super::Field;

/// A nullable cell value. The wiki returns most columns as text but some
/// exports carry plain numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Whole floats print without a trailing `.0`; `+ 0.0` folds `-0` into `0`.
            Self::Number(n) => match n.as_f64().filter(|_| n.is_f64()) {
                Some(x) => write!(f, "{}", x + 0.0),
                None => write!(f, "{n}"),
            },
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// One row of `MoveData_GGST`.
///
/// Field names follow the table's columns so the snapshot file holds the
/// export verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub chara: String,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub damage: Option<FieldValue>,
    #[serde(default)]
    pub guard: Option<FieldValue>,
    #[serde(default)]
    pub startup: Option<FieldValue>,
    #[serde(default)]
    pub active: Option<FieldValue>,
    #[serde(default)]
    pub recovery: Option<FieldValue>,
    #[serde(default)]
    pub on_block: Option<FieldValue>,
    #[serde(default)]
    pub on_hit: Option<FieldValue>,
    #[serde(default)]
    pub invuln: Option<FieldValue>,
    #[serde(default, rename = "type")]
    pub move_type: Option<FieldValue>,
}

impl MoveRecord {
    /// A record with only the identifying columns set.
    pub fn new(chara: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            chara: chara.into(),
            input: Some(input.into()),
            name: None,
            damage: None,
            guard: None,
            startup: None,
            active: None,
            recovery: None,
            on_block: None,
            on_hit: None,
            invuln: None,
            move_type: None,
        }
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        let value = value.into();
        match field {
            Field::Chara => self.chara = value.to_string(),
            Field::Input => self.input = Some(value.to_string()),
            Field::Name => self.name = Some(value.to_string()),
            Field::Images => {}
            Field::Damage => self.damage = Some(value),
            Field::Guard => self.guard = Some(value),
            Field::Startup => self.startup = Some(value),
            Field::Active => self.active = Some(value),
            Field::Recovery => self.recovery = Some(value),
            Field::OnBlock => self.on_block = Some(value),
            Field::OnHit => self.on_hit = Some(value),
            Field::Invuln => self.invuln = Some(value),
            Field::Type => self.move_type = Some(value),
        }
        self
    }

    /// The command input, empty when the wiki left it blank.
    pub fn input(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    /// Render a column as text; `None` when the cell is null or absent.
    pub fn field_text(&self, field: Field) -> Option<String> {
        let value = match field {
            Field::Chara => return Some(self.chara.clone()),
            Field::Input => return self.input.clone(),
            Field::Name => return self.name.clone(),
            Field::Images => None,
            Field::Damage => self.damage.as_ref(),
            Field::Guard => self.guard.as_ref(),
            Field::Startup => self.startup.as_ref(),
            Field::Active => self.active.as_ref(),
            Field::Recovery => self.recovery.as_ref(),
            Field::OnBlock => self.on_block.as_ref(),
            Field::OnHit => self.on_hit.as_ref(),
            Field::Invuln => self.invuln.as_ref(),
            Field::Type => self.move_type.as_ref(),
        };
        value.map(ToString::to_string)
    }
}
