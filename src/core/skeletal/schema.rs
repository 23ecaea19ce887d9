//! core::skeletal::schema
//!
//! Entity schema for the skeletal reference store.
//!
//! # Entities
//!
//! - [`Bone`] - A skeletal entity with classification, educational and
//!   clinical payload
//! - [`Joint`] - An articulation between two or more bones
//!
//! # Illegal States
//!
//! Laterality is a sum type: a bone is [`Laterality::Left`],
//! [`Laterality::Right`], [`Laterality::Midline`] or
//! [`Laterality::Unspecified`], and `paired()` is derived from it. The wire
//! form ([`BoneRecord`]) keeps the `paired` flag and `side` field of the
//! dataset and is validated when converted.
//!
//! # Soft References
//!
//! `joint_ids` and `related_bones` are opaque ids. Nothing guarantees that
//! they resolve; see [`crate::core::skeletal::store::Store::resolve_references`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{BoneId, FmaId, JointId};

/// Error for an enum value that is not part of its domain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    /// Name of the enumerated domain.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated list of accepted values.
    pub expected: String,
}

/// Declares a closed domain whose wire form is a kebab-case string.
macro_rules! kebab_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every value of the domain, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The kebab-case wire name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: stringify!($name),
                        value: s.to_string(),
                        expected: [$($text),+].join(", "),
                    }),
                }
            }
        }
    };
}

kebab_enum! {
    /// Shape classification of a bone.
    pub enum BoneType {
        Long => "long",
        Short => "short",
        Flat => "flat",
        Irregular => "irregular",
        Sesamoid => "sesamoid",
    }
}

kebab_enum! {
    /// Top-level skeletal grouping.
    pub enum Division {
        Axial => "axial",
        Appendicular => "appendicular",
    }
}

kebab_enum! {
    /// One of the fifteen fixed anatomical partitions of the skeleton.
    pub enum Region {
        SkullCranial => "skull-cranial",
        SkullFacial => "skull-facial",
        VertebralCervical => "vertebral-cervical",
        VertebralThoracic => "vertebral-thoracic",
        VertebralLumbar => "vertebral-lumbar",
        VertebralSacral => "vertebral-sacral",
        ThoracicCage => "thoracic-cage",
        PectoralGirdle => "pectoral-girdle",
        UpperLimbArm => "upper-limb-arm",
        UpperLimbForearm => "upper-limb-forearm",
        UpperLimbHand => "upper-limb-hand",
        PelvicGirdle => "pelvic-girdle",
        LowerLimbThigh => "lower-limb-thigh",
        LowerLimbLeg => "lower-limb-leg",
        LowerLimbFoot => "lower-limb-foot",
    }
}

impl Region {
    /// Wire name with hyphens replaced by spaces ("upper limb hand").
    pub fn spaced(self) -> String {
        self.as_str().replace('-', " ")
    }

    /// Division this region belongs to, per the static region table.
    pub fn division(self) -> Division {
        super::regions::region_info(self).division
    }
}

kebab_enum! {
    /// Side field of the wire form.
    pub enum Side {
        Left => "left",
        Right => "right",
        Midline => "midline",
    }
}

kebab_enum! {
    /// Kind of bony landmark.
    pub enum LandmarkType {
        Process => "process",
        Foramen => "foramen",
        Fossa => "fossa",
        Condyle => "condyle",
        Tuberosity => "tuberosity",
        Tubercle => "tubercle",
        Line => "line",
        Crest => "crest",
        Spine => "spine",
        Notch => "notch",
        Facet => "facet",
        Groove => "groove",
        Canal => "canal",
        Other => "other",
    }
}

kebab_enum! {
    /// How a muscle attaches to a bone.
    pub enum AttachmentType {
        Origin => "origin",
        Insertion => "insertion",
    }
}

kebab_enum! {
    /// Route by which an artery supplies a bone.
    pub enum SupplyType {
        Nutrient => "nutrient",
        Periosteal => "periosteal",
        Metaphyseal => "metaphyseal",
        Epiphyseal => "epiphyseal",
        Other => "other",
    }
}

kebab_enum! {
    /// Structural and functional joint classification.
    pub enum JointType {
        FibrousSuture => "fibrous-suture",
        FibrousSyndesmosis => "fibrous-syndesmosis",
        FibrousGomphosis => "fibrous-gomphosis",
        CartilaginousSynchondrosis => "cartilaginous-synchondrosis",
        CartilaginousSymphysis => "cartilaginous-symphysis",
        SynovialPlane => "synovial-plane",
        SynovialHinge => "synovial-hinge",
        SynovialPivot => "synovial-pivot",
        SynovialCondyloid => "synovial-condyloid",
        SynovialSaddle => "synovial-saddle",
        SynovialBallAndSocket => "synovial-ball-and-socket",
    }
}

kebab_enum! {
    /// Movement permitted at a joint.
    pub enum JointMovement {
        Flexion => "flexion",
        Extension => "extension",
        Abduction => "abduction",
        Adduction => "adduction",
        Rotation => "rotation",
        MedialRotation => "medial-rotation",
        LateralRotation => "lateral-rotation",
        Circumduction => "circumduction",
        Pronation => "pronation",
        Supination => "supination",
        Inversion => "inversion",
        Eversion => "eversion",
        Dorsiflexion => "dorsiflexion",
        Plantarflexion => "plantarflexion",
        Elevation => "elevation",
        Depression => "depression",
        Protraction => "protraction",
        Retraction => "retraction",
    }
}

/// Which side of the body a bone sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Laterality {
    /// Left member of a pair.
    Left,
    /// Right member of a pair.
    Right,
    /// Unpaired bone on the midline.
    Midline,
    /// Unpaired bone with no recorded side.
    Unspecified,
}

impl Laterality {
    /// Whether the bone is one of a left/right pair.
    pub fn paired(self) -> bool {
        matches!(self, Laterality::Left | Laterality::Right)
    }

    /// The wire `side` value, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Laterality::Left => Some(Side::Left),
            Laterality::Right => Some(Side::Right),
            Laterality::Midline => Some(Side::Midline),
            Laterality::Unspecified => None,
        }
    }

    /// Rebuild laterality from the wire `paired` + `side` pair.
    ///
    /// # Errors
    ///
    /// Returns `LateralityError` when a paired bone lacks a left/right side
    /// or an unpaired bone claims one.
    pub fn from_wire(paired: bool, side: Option<Side>) -> Result<Self, LateralityError> {
        match (paired, side) {
            (true, Some(Side::Left)) => Ok(Laterality::Left),
            (true, Some(Side::Right)) => Ok(Laterality::Right),
            (false, Some(Side::Midline)) => Ok(Laterality::Midline),
            (false, None) => Ok(Laterality::Unspecified),
            (paired, side) => Err(LateralityError { paired, side }),
        }
    }
}

/// A `paired`/`side` combination that violates the laterality rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("paired = {paired} is inconsistent with side = {}", .side.map_or("unset", Side::as_str))]
pub struct LateralityError {
    pub paired: bool,
    pub side: Option<Side>,
}

/// Complexity tier of an explanation (1 = child, 5 = clinician).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExplanationLevel {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl ExplanationLevel {
    /// Every tier, simplest first.
    pub const ALL: [ExplanationLevel; 5] = [
        ExplanationLevel::Level1,
        ExplanationLevel::Level2,
        ExplanationLevel::Level3,
        ExplanationLevel::Level4,
        ExplanationLevel::Level5,
    ];

    /// Tier number, 1 through 5.
    pub fn number(self) -> u8 {
        match self {
            ExplanationLevel::Level1 => 1,
            ExplanationLevel::Level2 => 2,
            ExplanationLevel::Level3 => 3,
            ExplanationLevel::Level4 => 4,
            ExplanationLevel::Level5 => 5,
        }
    }
}

impl TryFrom<u8> for ExplanationLevel {
    type Error = ParseEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(ExplanationLevel::Level1),
            2 => Ok(ExplanationLevel::Level2),
            3 => Ok(ExplanationLevel::Level3),
            4 => Ok(ExplanationLevel::Level4),
            5 => Ok(ExplanationLevel::Level5),
            _ => Err(ParseEnumError {
                kind: "ExplanationLevel",
                value: n.to_string(),
                expected: "1, 2, 3, 4, 5".to_string(),
            }),
        }
    }
}

impl fmt::Display for ExplanationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.number())
    }
}

/// The five parallel explanations of a bone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Explanations {
    pub level1: String,
    pub level2: String,
    pub level3: String,
    pub level4: String,
    pub level5: String,
}

impl Explanations {
    /// Text for one tier.
    pub fn get(&self, level: ExplanationLevel) -> &str {
        match level {
            ExplanationLevel::Level1 => &self.level1,
            ExplanationLevel::Level2 => &self.level2,
            ExplanationLevel::Level3 => &self.level3,
            ExplanationLevel::Level4 => &self.level4,
            ExplanationLevel::Level5 => &self.level5,
        }
    }

    /// First tier whose text is blank, if any.
    pub fn first_blank(&self) -> Option<ExplanationLevel> {
        ExplanationLevel::ALL
            .into_iter()
            .find(|level| self.get(*level).trim().is_empty())
    }
}

/// A named bony feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Landmark {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LandmarkType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_significance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MuscleAttachment {
    pub muscle_name: String,
    pub attachment_type: AttachmentType,
    /// Landmark on the bone where the muscle attaches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BloodSupply {
    pub artery_name: String,
    pub supply_type: SupplyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Innervation {
    pub nerve_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A characteristic fracture pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fracture {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    /// Population most often affected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    #[serde(default)]
    pub complications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pathology {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etiology: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub relevant_labs: Vec<String>,
    #[serde(default)]
    pub relevant_imaging: Vec<String>,
}

/// A reference image of the bone in a given modality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImagingExample {
    /// Modality such as "X-ray", "CT" or "MRI".
    pub modality: String,
    pub description: String,
    #[serde(default)]
    pub findings: Vec<String>,
}

/// A skeletal entity.
///
/// Bones are created once while the store loads and never change
/// afterwards. Placeholder bones leave the structural and clinical
/// collections empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoneRecord", into = "BoneRecord")]
pub struct Bone {
    pub id: BoneId,
    pub name: String,
    pub latin_name: Option<String>,
    pub fma_id: Option<FmaId>,
    pub mesh_id: Option<String>,
    pub kind: BoneType,
    pub division: Division,
    pub region: Region,
    pub laterality: Laterality,
    pub location: String,
    pub explanations: Explanations,
    pub key_facts: Vec<String>,
    pub landmarks: Vec<Landmark>,
    pub muscle_attachments: Vec<MuscleAttachment>,
    pub blood_supply: Vec<BloodSupply>,
    pub innervation: Vec<Innervation>,
    pub joint_ids: Vec<JointId>,
    pub related_bones: Vec<BoneId>,
    pub ossification_centers: Option<u32>,
    pub ossification_age: Option<String>,
    pub fractures: Vec<Fracture>,
    pub pathologies: Vec<Pathology>,
    pub imaging_examples: Vec<ImagingExample>,
    pub relevant_labs: Vec<String>,
}

impl Bone {
    /// Whether the bone is one of a left/right pair.
    pub fn paired(&self) -> bool {
        self.laterality.paired()
    }

    /// Explanation text at the requested tier.
    pub fn explanation(&self, level: ExplanationLevel) -> &str {
        self.explanations.get(level)
    }

    /// Project the identifying and classification fields.
    pub fn summary(&self) -> BoneSummary {
        BoneSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            region: self.region,
            kind: self.kind,
            division: self.division,
        }
    }

    /// Check the record-level invariants the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated rule.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name cannot be empty".into());
        }
        if let Some(level) = self.explanations.first_blank() {
            return Err(format!("explanation {level} is empty"));
        }
        let expected = self.region.division();
        if self.division != expected {
            return Err(format!(
                "division '{}' does not match region '{}' ({})",
                self.division, self.region, expected
            ));
        }
        Ok(())
    }
}

/// Wire form of a [`Bone`], as stored in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoneRecord {
    pub id: BoneId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latin_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fma_id: Option<FmaId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: BoneType,
    pub division: Division,
    pub region: Region,
    pub paired: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    pub location: String,
    pub explanations: Explanations,
    #[serde(default)]
    pub key_facts: Vec<String>,
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    #[serde(default)]
    pub muscle_attachments: Vec<MuscleAttachment>,
    #[serde(default)]
    pub blood_supply: Vec<BloodSupply>,
    #[serde(default)]
    pub innervation: Vec<Innervation>,
    #[serde(default)]
    pub joint_ids: Vec<JointId>,
    #[serde(default)]
    pub related_bones: Vec<BoneId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ossification_centers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ossification_age: Option<String>,
    #[serde(default)]
    pub fractures: Vec<Fracture>,
    #[serde(default)]
    pub pathologies: Vec<Pathology>,
    #[serde(default)]
    pub imaging_examples: Vec<ImagingExample>,
    #[serde(default)]
    pub relevant_labs: Vec<String>,
}

impl TryFrom<BoneRecord> for Bone {
    type Error = LateralityError;

    fn try_from(r: BoneRecord) -> Result<Self, Self::Error> {
        let laterality = Laterality::from_wire(r.paired, r.side)?;
        Ok(Bone {
            id: r.id,
            name: r.name,
            latin_name: r.latin_name,
            fma_id: r.fma_id,
            mesh_id: r.mesh_id,
            kind: r.kind,
            division: r.division,
            region: r.region,
            laterality,
            location: r.location,
            explanations: r.explanations,
            key_facts: r.key_facts,
            landmarks: r.landmarks,
            muscle_attachments: r.muscle_attachments,
            blood_supply: r.blood_supply,
            innervation: r.innervation,
            joint_ids: r.joint_ids,
            related_bones: r.related_bones,
            ossification_centers: r.ossification_centers,
            ossification_age: r.ossification_age,
            fractures: r.fractures,
            pathologies: r.pathologies,
            imaging_examples: r.imaging_examples,
            relevant_labs: r.relevant_labs,
        })
    }
}

impl From<Bone> for BoneRecord {
    fn from(b: Bone) -> Self {
        BoneRecord {
            id: b.id,
            name: b.name,
            latin_name: b.latin_name,
            fma_id: b.fma_id,
            mesh_id: b.mesh_id,
            kind: b.kind,
            division: b.division,
            region: b.region,
            paired: b.laterality.paired(),
            side: b.laterality.side(),
            location: b.location,
            explanations: b.explanations,
            key_facts: b.key_facts,
            landmarks: b.landmarks,
            muscle_attachments: b.muscle_attachments,
            blood_supply: b.blood_supply,
            innervation: b.innervation,
            joint_ids: b.joint_ids,
            related_bones: b.related_bones,
            ossification_centers: b.ossification_centers,
            ossification_age: b.ossification_age,
            fractures: b.fractures,
            pathologies: b.pathologies,
            imaging_examples: b.imaging_examples,
            relevant_labs: b.relevant_labs,
        }
    }
}

/// An articulation entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Joint {
    pub id: JointId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: JointType,
    /// Bones meeting at the joint (soft references, two or more expected).
    pub bones: Vec<BoneId>,
    #[serde(default)]
    pub movements: Vec<JointMovement>,
    #[serde(default)]
    pub ligaments: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
}

/// Listing projection of a bone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoneSummary {
    pub id: BoneId,
    pub name: String,
    pub region: Region,
    #[serde(rename = "type")]
    pub kind: BoneType,
    pub division: Division,
}
