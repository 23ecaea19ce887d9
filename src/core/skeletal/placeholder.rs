//! core::skeletal::placeholder
//!
//! Deterministic placeholder records for bones without authored detail.
//!
//! [`generate`] is a pure function of its [`BoneTemplate`]: the location,
//! all five explanation tiers and the key facts come from fixed string
//! templates, and every structural or clinical collection is left empty.

use super::schema::{Bone, BoneType, Division, Explanations, Laterality, Region};
use crate::core::types::{BoneId, FmaId};

/// Labs attached to every placeholder bone.
pub const PLACEHOLDER_LABS: [&str; 4] = [
    "Calcium",
    "Phosphorus",
    "Alkaline Phosphatase",
    "Vitamin D",
];

/// Identity and classification of one catalog bone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoneTemplate {
    pub id: BoneId,
    pub name: String,
    pub latin_name: String,
    pub kind: BoneType,
    pub division: Division,
    pub region: Region,
    pub laterality: Laterality,
    pub fma_id: FmaId,
}

/// Synthesize a placeholder bone from a template.
///
/// # Example
///
/// ```
/// use osteoref::core::skeletal::placeholder::{generate, BoneTemplate};
/// use osteoref::core::skeletal::schema::{BoneType, Division, Laterality, Region};
/// use osteoref::core::types::{BoneId, FmaId};
///
/// let template = BoneTemplate {
///     id: BoneId::new("vomer").unwrap(),
///     name: "Vomer".into(),
///     latin_name: "Vomer".into(),
///     kind: BoneType::Flat,
///     division: Division::Axial,
///     region: Region::SkullFacial,
///     laterality: Laterality::Midline,
///     fma_id: FmaId::new("FMA:52768").unwrap(),
/// };
///
/// let bone = generate(&template);
/// assert_eq!(bone.location, "Part of the skull facial");
/// assert!(bone.landmarks.is_empty());
/// ```
pub fn generate(template: &BoneTemplate) -> Bone {
    let name = template.name.to_lowercase();
    let latin = &template.latin_name;
    let kind = template.kind;
    let division = template.division;
    let region = template.region.spaced();
    let fma = &template.fma_id;
    let ossification = match kind {
        BoneType::Flat => "intramembranous",
        _ => "endochondral",
    };
    let pairing = if template.laterality.paired() {
        "Exists as a pair (left and right)"
    } else {
        "Unpaired midline bone"
    };

    Bone {
        id: template.id.clone(),
        name: template.name.clone(),
        latin_name: Some(template.latin_name.clone()),
        fma_id: Some(template.fma_id.clone()),
        mesh_id: None,
        kind,
        division,
        region: template.region,
        laterality: template.laterality,
        location: format!("Part of the {region}"),
        explanations: Explanations {
            level1: format!(
                "The {name} is an important bone in your body that helps with support and movement."
            ),
            level2: format!("The {name} ({latin}) is a {kind} bone in the {region} region."),
            level3: format!(
                "The {name} is classified as a {kind} bone of the {division} skeleton, located in the {region}."
            ),
            level4: format!("The {name} ({latin}, {fma}) develops via {ossification} ossification."),
            level5: format!(
                "Clinical considerations for the {name} include common fracture patterns, pathologies, and surgical approaches relevant to its anatomical location."
            ),
        },
        key_facts: vec![
            format!("Classified as a {kind} bone"),
            format!("Part of the {division} skeleton"),
            format!("Located in the {region}"),
            pairing.to_string(),
        ],
        landmarks: Vec::new(),
        muscle_attachments: Vec::new(),
        blood_supply: Vec::new(),
        innervation: Vec::new(),
        joint_ids: Vec::new(),
        related_bones: Vec::new(),
        ossification_centers: None,
        ossification_age: None,
        fractures: Vec::new(),
        pathologies: Vec::new(),
        imaging_examples: Vec::new(),
        relevant_labs: PLACEHOLDER_LABS.iter().map(|lab| lab.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::skeletal::schema::ExplanationLevel;

    fn scaphoid() -> BoneTemplate {
        BoneTemplate {
            id: BoneId::new("scaphoid-left").unwrap(),
            name: "Left Scaphoid".into(),
            latin_name: "Os scaphoid".into(),
            kind: BoneType::Short,
            division: Division::Appendicular,
            region: Region::UpperLimbHand,
            laterality: Laterality::Left,
            fma_id: FmaId::new("FMA:23500").unwrap(),
        }
    }

    fn sternum() -> BoneTemplate {
        BoneTemplate {
            id: BoneId::new("sternum").unwrap(),
            name: "Sternum".into(),
            latin_name: "Sternum".into(),
            kind: BoneType::Flat,
            division: Division::Axial,
            region: Region::ThoracicCage,
            laterality: Laterality::Midline,
            fma_id: FmaId::new("FMA:7485").unwrap(),
        }
    }

    #[test]
    fn explanation_templates() {
        let bone = generate(&scaphoid());

        insta::assert_snapshot!(
            bone.explanation(ExplanationLevel::Level1),
            @"The left scaphoid is an important bone in your body that helps with support and movement."
        );
        insta::assert_snapshot!(
            bone.explanation(ExplanationLevel::Level2),
            @"The left scaphoid (Os scaphoid) is a short bone in the upper limb hand region."
        );
        insta::assert_snapshot!(
            bone.explanation(ExplanationLevel::Level3),
            @"The left scaphoid is classified as a short bone of the appendicular skeleton, located in the upper limb hand."
        );
        insta::assert_snapshot!(
            bone.explanation(ExplanationLevel::Level4),
            @"The left scaphoid (Os scaphoid, FMA:23500) develops via endochondral ossification."
        );
        insta::assert_snapshot!(
            bone.explanation(ExplanationLevel::Level5),
            @"Clinical considerations for the left scaphoid include common fracture patterns, pathologies, and surgical approaches relevant to its anatomical location."
        );
    }

    #[test]
    fn flat_bones_ossify_intramembranously() {
        let bone = generate(&sternum());
        assert!(bone.explanations.level4.ends_with("via intramembranous ossification."));
    }

    #[test]
    fn key_facts_for_paired_and_unpaired() {
        let paired = generate(&scaphoid());
        insta::assert_snapshot!(paired.key_facts.join("\n"), @r"
        Classified as a short bone
        Part of the appendicular skeleton
        Located in the upper limb hand
        Exists as a pair (left and right)
        ");

        let unpaired = generate(&sternum());
        assert_eq!(unpaired.key_facts[3], "Unpaired midline bone");
    }

    #[test]
    fn collections_default_empty() {
        let bone = generate(&sternum());
        assert!(bone.landmarks.is_empty());
        assert!(bone.muscle_attachments.is_empty());
        assert!(bone.blood_supply.is_empty());
        assert!(bone.innervation.is_empty());
        assert!(bone.joint_ids.is_empty());
        assert!(bone.fractures.is_empty());
        assert!(bone.pathologies.is_empty());
        assert_eq!(
            bone.relevant_labs,
            vec!["Calcium", "Phosphorus", "Alkaline Phosphatase", "Vitamin D"]
        );
    }

    #[test]
    fn copies_identity() {
        let template = scaphoid();
        let bone = generate(&template);
        assert_eq!(bone.id, template.id);
        assert_eq!(bone.latin_name.as_deref(), Some("Os scaphoid"));
        assert_eq!(bone.fma_id.as_ref().map(FmaId::as_str), Some("FMA:23500"));
        assert_eq!(bone.location, "Part of the upper limb hand");
        assert!(bone.validate().is_ok());
    }

    #[test]
    fn deterministic() {
        assert_eq!(generate(&scaphoid()), generate(&scaphoid()));
    }
}
