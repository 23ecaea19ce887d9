//! region command - Region table or the bones of one region

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::summary_rows;
use crate::cli::Context;
use crate::core::skeletal::schema::{Division, Region};
use crate::ui::output;

/// Region table row: static metadata next to the live count.
#[derive(Debug, Serialize)]
struct RegionRow {
    id: Region,
    name: &'static str,
    division: Division,
    declared: usize,
    live: usize,
}

/// Show the region table, or the bones of `region`.
pub fn region(ctx: &Context, region: Option<Region>, json: bool) -> Result<()> {
    match region {
        Some(region) => bones_of(ctx, region, json),
        None => table(ctx, json),
    }
}

fn bones_of(ctx: &Context, region: Region, json: bool) -> Result<()> {
    let bones = ctx.store.bones_in_region(region);

    if json {
        let summaries: Vec<_> = bones.iter().map(|b| b.summary()).collect();
        return output::json(&summaries).context("failed to serialize region");
    }

    let info = ctx.store.region_info(region);
    output::print(
        format!("{} - {} ({} bones)", info.name, info.description, bones.len()),
        ctx.verbosity,
    );
    output::print(output::format_columns(&summary_rows(bones)), ctx.verbosity);
    Ok(())
}

fn table(ctx: &Context, json: bool) -> Result<()> {
    let rows: Vec<RegionRow> = ctx
        .store
        .regions()
        .iter()
        .map(|info| RegionRow {
            id: info.id,
            name: info.name,
            division: info.division,
            declared: info.bone_count,
            live: ctx.store.bones_in_region(info.id).len(),
        })
        .collect();

    if json {
        return output::json(&rows).context("failed to serialize regions");
    }

    let mut cells = vec![vec![
        "REGION".to_string(),
        "NAME".to_string(),
        "DIVISION".to_string(),
        "DECLARED".to_string(),
        "LIVE".to_string(),
    ]];
    cells.extend(rows.iter().map(|r| {
        vec![
            r.id.to_string(),
            r.name.to_string(),
            r.division.to_string(),
            r.declared.to_string(),
            r.live.to_string(),
        ]
    }));
    output::print(output::format_columns(&cells), ctx.verbosity);
    Ok(())
}
