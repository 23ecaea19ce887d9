//! list command - Bone summaries with optional filters

use anyhow::{Context as _, Result};

use super::summary_rows;
use crate::cli::Context;
use crate::core::skeletal::schema::{BoneType, Division};
use crate::core::skeletal::Bone;
use crate::ui::output;

/// List bones, optionally filtered by division and type.
pub fn list(
    ctx: &Context,
    division: Option<Division>,
    kind: Option<BoneType>,
    json: bool,
) -> Result<()> {
    let store = &ctx.store;
    let bones: Vec<&Bone> = match (division, kind) {
        (Some(d), Some(k)) => store
            .bones_by_division(d)
            .into_iter()
            .filter(|b| b.kind == k)
            .collect(),
        (Some(d), None) => store.bones_by_division(d),
        (None, Some(k)) => store.bones_by_type(k),
        (None, None) => store.bones().collect(),
    };

    if json {
        let summaries: Vec<_> = bones.iter().map(|b| b.summary()).collect();
        return output::json(&summaries).context("failed to serialize summaries");
    }

    output::print(output::format_columns(&summary_rows(bones)), ctx.verbosity);
    Ok(())
}
