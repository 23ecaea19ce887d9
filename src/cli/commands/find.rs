//! find and fma commands - Name, Latin-name and FMA lookup

use anyhow::{bail, Result};

use super::summary_rows;
use crate::cli::Context;
use crate::ui::output;

/// Look up a bone by name, or list bones matching a substring.
pub fn find(ctx: &Context, name: &str, search: bool) -> Result<()> {
    if search {
        let matches = ctx.store.search(name);
        if matches.is_empty() {
            bail!("no bones match '{name}'");
        }
        output::print(output::format_columns(&summary_rows(matches)), ctx.verbosity);
        return Ok(());
    }

    match ctx.store.bone_by_name(name) {
        Some(bone) => {
            output::print(output::format_columns(&summary_rows([bone])), ctx.verbosity);
            Ok(())
        }
        None => bail!("no bone named '{name}'"),
    }
}

/// Look up a bone by exact FMA code.
pub fn find_by_fma(ctx: &Context, fma_id: &str) -> Result<()> {
    match ctx.store.bone_by_fma_id(fma_id) {
        Some(bone) => {
            output::print(output::format_columns(&summary_rows([bone])), ctx.verbosity);
            Ok(())
        }
        None => bail!("no bone with FMA id '{fma_id}'"),
    }
}
