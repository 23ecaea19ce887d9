//! core::skeletal::regions
//!
//! Static region metadata.
//!
//! `bone_count` is the declared target for each region of the adult
//! skeleton. It is fixed data and is never derived from, or reconciled
//! with, the live store population; the store reports disagreements through
//! [`crate::core::skeletal::store::Store::region_divergence`].

use serde::Serialize;

use super::schema::{Division, Region};

/// Descriptive metadata for one of the fifteen regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkeletalRegionInfo {
    pub id: Region,
    pub name: &'static str,
    pub description: &'static str,
    pub bone_count: usize,
    pub division: Division,
}

/// The fifteen skeletal regions, in [`Region::ALL`] order.
pub static SKELETAL_REGIONS: [SkeletalRegionInfo; 15] = [
    SkeletalRegionInfo {
        id: Region::SkullCranial,
        name: "Cranial Bones",
        description: "Bones forming the braincase",
        bone_count: 8,
        division: Division::Axial,
    },
    SkeletalRegionInfo {
        id: Region::SkullFacial,
        name: "Facial Bones",
        description: "Bones forming the face",
        bone_count: 14,
        division: Division::Axial,
    },
    SkeletalRegionInfo {
        id: Region::VertebralCervical,
        name: "Cervical Vertebrae",
        description: "Neck vertebrae (C1-C7)",
        bone_count: 7,
        division: Division::Axial,
    },
    SkeletalRegionInfo {
        id: Region::VertebralThoracic,
        name: "Thoracic Vertebrae",
        description: "Upper back vertebrae (T1-T12)",
        bone_count: 12,
        division: Division::Axial,
    },
    SkeletalRegionInfo {
        id: Region::VertebralLumbar,
        name: "Lumbar Vertebrae",
        description: "Lower back vertebrae (L1-L5)",
        bone_count: 5,
        division: Division::Axial,
    },
    SkeletalRegionInfo {
        id: Region::VertebralSacral,
        name: "Sacrum & Coccyx",
        description: "Fused vertebrae at base of spine",
        bone_count: 2,
        division: Division::Axial,
    },
    SkeletalRegionInfo {
        id: Region::ThoracicCage,
        name: "Thoracic Cage",
        description: "Ribs and sternum",
        bone_count: 25,
        division: Division::Axial,
    },
    SkeletalRegionInfo {
        id: Region::PectoralGirdle,
        name: "Pectoral Girdle",
        description: "Shoulder bones",
        bone_count: 4,
        division: Division::Appendicular,
    },
    SkeletalRegionInfo {
        id: Region::UpperLimbArm,
        name: "Arm",
        description: "Upper arm bone (humerus)",
        bone_count: 2,
        division: Division::Appendicular,
    },
    SkeletalRegionInfo {
        id: Region::UpperLimbForearm,
        name: "Forearm",
        description: "Radius and ulna",
        bone_count: 4,
        division: Division::Appendicular,
    },
    SkeletalRegionInfo {
        id: Region::UpperLimbHand,
        name: "Hand",
        description: "Carpals, metacarpals, phalanges",
        bone_count: 54,
        division: Division::Appendicular,
    },
    SkeletalRegionInfo {
        id: Region::PelvicGirdle,
        name: "Pelvic Girdle",
        description: "Hip bones",
        bone_count: 2,
        division: Division::Appendicular,
    },
    SkeletalRegionInfo {
        id: Region::LowerLimbThigh,
        name: "Thigh",
        description: "Femur and patella",
        bone_count: 4,
        division: Division::Appendicular,
    },
    SkeletalRegionInfo {
        id: Region::LowerLimbLeg,
        name: "Leg",
        description: "Tibia and fibula",
        bone_count: 4,
        division: Division::Appendicular,
    },
    SkeletalRegionInfo {
        id: Region::LowerLimbFoot,
        name: "Foot",
        description: "Tarsals, metatarsals, phalanges",
        bone_count: 52,
        division: Division::Appendicular,
    },
];

/// Metadata for a region.
///
/// Total over [`Region`]: the table holds exactly one entry per variant, in
/// declaration order.
pub fn region_info(region: Region) -> &'static SkeletalRegionInfo {
    &SKELETAL_REGIONS[region as usize]
}
