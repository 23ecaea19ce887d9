//! related command - Resolve a bone's soft references

use anyhow::Result;

use crate::cli::Context;
use crate::core::skeletal::store::{EntityKind, StoreError};
use crate::ui::output;

/// Show the related bones and joints of a bone, resolved and dangling.
pub fn related(ctx: &Context, id: &str) -> Result<()> {
    let refs = ctx
        .store
        .resolve_references(id)
        .ok_or_else(|| StoreError::NotFound {
            kind: EntityKind::Bone,
            key: id.to_string(),
        })?;

    let mut lines = Vec::new();

    lines.push(format!("Related bones ({}):", refs.bones.len()));
    lines.extend(refs.bones.iter().map(|b| format!("  {}  {}", b.id, b.name)));
    if !refs.dangling_bones.is_empty() {
        lines.push(format!("Unresolved bone ids ({}):", refs.dangling_bones.len()));
        lines.push(output::format_list(&refs.dangling_bones, "  "));
    }

    lines.push(format!("Joints ({}):", refs.joints.len()));
    lines.extend(refs.joints.iter().map(|j| format!("  {}  {}", j.id, j.name)));
    if !refs.dangling_joints.is_empty() {
        lines.push(format!("Unresolved joint ids ({}):", refs.dangling_joints.len()));
        lines.push(output::format_list(&refs.dangling_joints, "  "));
    }

    output::print(lines.join("\n"), ctx.verbosity);
    Ok(())
}
