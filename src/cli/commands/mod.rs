//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Parses command-specific arguments into domain types
//! 2. Queries the store
//! 3. Formats and displays output
//!
//! A lookup miss is returned as an error so the binary exits non-zero.

mod completion;
mod find;
mod list;
mod region;
mod related;
mod show;
mod stats;

pub use completion::completion;
pub use find::{find, find_by_fma};
pub use list::list;
pub use region::region;
pub use related::related;
pub use show::show;
pub use stats::stats;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Show { id, level, json } => show::show(ctx, &id, level, json),
        Command::Find { name, search } => find::find(ctx, &name, search),
        Command::Fma { fma_id } => find::find_by_fma(ctx, &fma_id),
        Command::List {
            division,
            kind,
            json,
        } => list::list(ctx, division, kind, json),
        Command::Region { region, json } => region::region(ctx, region, json),
        Command::Stats { json } => stats::stats(ctx, json),
        Command::Related { id } => related::related(ctx, &id),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// One `id  name  region  type` row per bone.
fn summary_rows<'a>(
    bones: impl IntoIterator<Item = &'a crate::core::skeletal::Bone>,
) -> Vec<Vec<String>> {
    bones
        .into_iter()
        .map(|b| {
            vec![
                b.id.to_string(),
                b.name.clone(),
                b.region.to_string(),
                b.kind.to_string(),
            ]
        })
        .collect()
}
