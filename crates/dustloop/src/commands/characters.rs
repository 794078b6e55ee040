//! Character roster listing.

use tabled::Tabled;

use dustloop_core::{AliasRegistry, Character};

use crate::cli::CharactersArgs;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CharacterRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Wiki Name")]
    display_name: &'static str,
}

impl From<&Character> for CharacterRow {
    fn from(c: &Character) -> Self {
        Self {
            code: c.code,
            name: c.name,
            display_name: c.display_name,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &CharactersArgs) -> Result<(), CliError> {
    let registry = AliasRegistry::new();
    let out = output::render_list(
        args.output,
        registry.characters(),
        |c| CharacterRow::from(c),
        |c| c.code.to_owned(),
    )?;
    output::print_output(&out)
}
