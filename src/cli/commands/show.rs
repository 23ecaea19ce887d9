//! show command - Display one bone with an explanation tier

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::skeletal::schema::{Bone, ExplanationLevel};
use crate::ui::output;

/// Show one bone.
///
/// `level` overrides the configured display tier.
pub fn show(ctx: &Context, id: &str, level: Option<u8>, json: bool) -> Result<()> {
    let bone = ctx.store.require_bone(id)?;

    if json {
        return output::json(bone).context("failed to serialize bone");
    }

    let level = match level {
        Some(n) => ExplanationLevel::try_from(n)?,
        None => ctx.config.options.display.explanation_level()?,
    };

    output::print(render(bone, level), ctx.verbosity);
    Ok(())
}

fn render(bone: &Bone, level: ExplanationLevel) -> String {
    let mut lines = vec![format!("{} ({})", bone.name, bone.id)];

    if let Some(latin) = &bone.latin_name {
        lines.push(format!("Latin: {latin}"));
    }
    if let Some(fma) = &bone.fma_id {
        lines.push(format!("FMA: {fma}"));
    }
    lines.push(format!(
        "Type: {}  Division: {}  Region: {}",
        bone.kind, bone.division, bone.region
    ));
    if let Some(side) = bone.laterality.side() {
        lines.push(format!("Side: {side}"));
    }
    lines.push(format!("Location: {}", bone.location));

    lines.push(String::new());
    lines.push(format!("Explanation ({level}):"));
    lines.push(format!("  {}", bone.explanation(level)));

    if !bone.key_facts.is_empty() {
        lines.push(String::new());
        lines.push("Key facts:".to_string());
        lines.push(output::format_list(&bone.key_facts, "  - "));
    }

    if !bone.landmarks.is_empty() {
        let names: Vec<_> = bone
            .landmarks
            .iter()
            .map(|l| format!("{} ({})", l.name, l.kind))
            .collect();
        lines.push(String::new());
        lines.push("Landmarks:".to_string());
        lines.push(output::format_list(&names, "  - "));
    }

    if !bone.relevant_labs.is_empty() {
        lines.push(String::new());
        lines.push(format!("Relevant labs: {}", bone.relevant_labs.join(", ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::skeletal::store::Store;

    #[test]
    fn render_placeholder() {
        let store = Store::load_default().unwrap();
        let bone = store.bone("vomer").unwrap();
        insta::assert_snapshot!(render(bone, ExplanationLevel::Level2), @r"
        Vomer (vomer)
        Latin: Vomer
        FMA: FMA:52768
        Type: flat  Division: axial  Region: skull-facial
        Side: midline
        Location: Part of the skull facial

        Explanation (level 2):
          The vomer (Vomer) is a flat bone in the skull facial region.

        Key facts:
          - Classified as a flat bone
          - Part of the axial skeleton
          - Located in the skull facial
          - Unpaired midline bone

        Relevant labs: Calcium, Phosphorus, Alkaline Phosphatase, Vitamin D
        ");
    }

    #[test]
    fn render_authored_lists_landmarks() {
        let store = Store::load_default().unwrap();
        let bone = store.bone("frontal").unwrap();
        let text = render(bone, ExplanationLevel::Level1);
        assert!(text.starts_with("Frontal Bone (frontal)\nLatin: Os frontale\nFMA: FMA:52734"));
        assert!(text.contains("Landmarks:\n  - "));
    }
}
