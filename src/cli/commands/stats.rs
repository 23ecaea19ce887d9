//! stats command - Bone counts by division, region and type

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::ui::output;

/// Print bone statistics.
pub fn stats(ctx: &Context, json: bool) -> Result<()> {
    let stats = ctx.store.statistics();

    if json {
        return output::json(&stats).context("failed to serialize statistics");
    }

    let mut lines = vec![format!("Total: {}", stats.total), String::new()];

    lines.push("By division:".to_string());
    lines.extend(stats.by_division.iter().map(|(d, n)| format!("  {d}: {n}")));
    lines.push(String::new());

    lines.push("By type:".to_string());
    lines.extend(stats.by_type.iter().map(|(t, n)| format!("  {t}: {n}")));
    lines.push(String::new());

    lines.push("By region:".to_string());
    lines.extend(stats.by_region.iter().map(|(r, n)| format!("  {r}: {n}")));

    output::print(lines.join("\n"), ctx.verbosity);
    Ok(())
}
