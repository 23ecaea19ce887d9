//! Integration tests for the skeletal reference store.
//!
//! These tests load the store from the embedded dataset and check the
//! invariants and lookups of the public API.

use std::collections::HashSet;
use std::thread;

use osteoref::core::config::{DuplicatePolicy, StoreOptions};
use osteoref::core::skeletal::dataset;
use osteoref::core::skeletal::schema::{
    BoneType, Division, ExplanationLevel, Laterality, Region, Side,
};
use osteoref::core::skeletal::store::{EntityKind, Store, StoreError};
use osteoref::core::skeletal::SKELETAL_REGIONS;

fn store() -> &'static Store {
    Store::global()
}

// =============================================================================
// Population
// =============================================================================

#[test]
fn holds_206_bones() {
    assert_eq!(store().len(), 206);
    assert!(!store().is_empty());
}

#[test]
fn ids_are_unique() {
    let ids: HashSet<_> = store().bones().map(|b| b.id.as_str()).collect();
    assert_eq!(ids.len(), store().len());
}

#[test]
fn regions_partition_the_store() {
    let total: usize = Region::ALL
        .iter()
        .map(|r| store().bones_in_region(*r).len())
        .sum();
    assert_eq!(total, store().len());
}

#[test]
fn limb_regions_have_anatomical_counts() {
    assert_eq!(store().bones_in_region(Region::UpperLimbHand).len(), 54);
    assert_eq!(store().bones_in_region(Region::LowerLimbFoot).len(), 52);
    assert_eq!(store().bones_in_region(Region::ThoracicCage).len(), 25);
}

#[test]
fn authored_bones_keep_their_detail() {
    let frontal = store().bone("frontal").unwrap();
    assert!(!frontal.landmarks.is_empty());
    assert!(!frontal.muscle_attachments.is_empty());

    let placeholder = store().bone("femur-left").unwrap();
    assert!(placeholder.landmarks.is_empty());
    assert_eq!(placeholder.location, "Part of the lower limb thigh");
}

#[test]
fn authored_bones_come_first() {
    let first: Vec<_> = store().bones().take(8).map(|b| b.id.as_str()).collect();
    assert_eq!(first[0], "frontal");
    assert_eq!(first[7], "ethmoid");
    let cranial: Vec<_> = store()
        .bones_in_region(Region::SkullCranial)
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(
        &cranial[8..],
        [
            "malleus-left",
            "malleus-right",
            "incus-left",
            "incus-right",
            "stapes-left",
            "stapes-right"
        ]
    );
}

// =============================================================================
// Record invariants
// =============================================================================

#[test]
fn laterality_is_consistent() {
    for bone in store().bones() {
        match bone.laterality.side() {
            Some(Side::Left) | Some(Side::Right) => assert!(bone.paired(), "{}", bone.id),
            Some(Side::Midline) | None => assert!(!bone.paired(), "{}", bone.id),
        }
    }
}

#[test]
fn every_explanation_tier_is_filled() {
    for bone in store().bones() {
        for level in ExplanationLevel::ALL {
            assert!(
                !bone.explanation(level).trim().is_empty(),
                "{} {}",
                bone.id,
                level
            );
        }
    }
}

#[test]
fn division_follows_region() {
    for bone in store().bones() {
        assert_eq!(bone.division, bone.region.division(), "{}", bone.id);
    }
}

// =============================================================================
// Index consistency
// =============================================================================

#[test]
fn region_index_is_consistent() {
    for region in Region::ALL {
        for bone in store().bones_in_region(*region) {
            assert_eq!(bone.region, *region);
        }
    }
}

#[test]
fn name_index_is_consistent() {
    for bone in store().bones() {
        let found = store().bone_by_name(&bone.name).unwrap();
        assert_eq!(found.id, bone.id);
    }
}

#[test]
fn latin_index_resolves_to_a_bone_with_that_latin_name() {
    for bone in store().bones() {
        let Some(latin) = &bone.latin_name else {
            continue;
        };
        let found = store().bone_by_name(latin).unwrap();
        assert_eq!(
            found.latin_name.as_deref().map(str::to_lowercase),
            Some(latin.to_lowercase())
        );
    }
}

#[test]
fn fma_index_is_consistent() {
    for bone in store().bones() {
        if let Some(fma) = &bone.fma_id {
            assert_eq!(store().bone_by_fma_id(fma.as_str()).unwrap().id, bone.id);
        }
    }
}

#[test]
fn lookups_are_idempotent() {
    let a = store().bone_by_name("Hyoid Bone").map(|b| b.id.clone());
    let b = store().bone_by_name("Hyoid Bone").map(|b| b.id.clone());
    assert_eq!(a, b);

    let first = store().bone("sternum").map(|b| b.id.clone());
    let second = store().bone("sternum").map(|b| b.id.clone());
    assert_eq!(first, second);
    assert!(first.is_some());

    let first = store().bone_by_fma_id("FMA:52734").map(|b| b.id.clone());
    let second = store().bone_by_fma_id("FMA:52734").map(|b| b.id.clone());
    assert_eq!(first, second);
    assert_eq!(first.unwrap().as_str(), "frontal");

    assert_eq!(store().statistics(), store().statistics());
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn frontal_bone() {
    let frontal = store().bone("frontal").unwrap();
    assert_eq!(frontal.name, "Frontal Bone");
    assert_eq!(frontal.fma_id.as_ref().unwrap().as_str(), "FMA:52734");
    assert!(!frontal.paired());
    assert_eq!(frontal.laterality, Laterality::Midline);
}

#[test]
fn name_lookup_ignores_case() {
    assert_eq!(
        store().bone_by_name("FRONTAL BONE").unwrap().id.as_str(),
        "frontal"
    );
    assert_eq!(
        store().bone_by_name("os frontale").unwrap().id.as_str(),
        "frontal"
    );
}

#[test]
fn shared_latin_name_resolves_to_last_inserted() {
    let parietal = store().bone_by_name("Os parietale").unwrap();
    assert_eq!(parietal.id.as_str(), "parietal-right");
}

#[test]
fn scaphoid_pair() {
    let left = store().bone("scaphoid-left").unwrap();
    let right = store().bone("scaphoid-right").unwrap();
    assert!(left.paired() && right.paired());
    assert_ne!(left.laterality, right.laterality);
    assert_eq!(left.laterality, Laterality::Left);
}

#[test]
fn unknown_bone_is_none() {
    assert!(store().bone("not-a-real-bone").is_none());
    assert!(store().bone_by_name("not a real bone").is_none());
    assert!(store().bone_by_fma_id("FMA:0").is_none());
    assert!(matches!(
        store().require_bone("not-a-real-bone"),
        Err(StoreError::NotFound {
            kind: EntityKind::Bone,
            ..
        })
    ));
}

#[test]
fn fma_lookup_is_case_sensitive() {
    assert!(store().bone_by_fma_id("FMA:7485").is_some());
    assert!(store().bone_by_fma_id("fma:7485").is_none());
}

// =============================================================================
// Filters and aggregates
// =============================================================================

#[test]
fn division_and_type_filters() {
    let axial = store().bones_by_division(Division::Axial);
    let appendicular = store().bones_by_division(Division::Appendicular);
    assert_eq!(axial.len() + appendicular.len(), 206);
    assert_eq!(store().bones_by_type(BoneType::Sesamoid).len(), 2);
}

#[test]
fn search_matches_substrings() {
    let cuneiforms = store().search("CUNEIFORM");
    assert_eq!(cuneiforms.len(), 6);
    assert!(store().search("zzz").is_empty());

    let latin = store().search("costa");
    assert_eq!(latin.len(), 24);
}

#[test]
fn statistics_cover_every_value() {
    let stats = store().statistics();
    assert_eq!(stats.total, 206);
    assert_eq!(stats.by_region.len(), 15);
    assert_eq!(stats.by_type.len(), 5);
    assert_eq!(stats.by_division.len(), 2);
    assert_eq!(stats.by_type.values().sum::<usize>(), 206);
    assert_eq!(stats.by_region[&Region::UpperLimbHand], 54);
}

#[test]
fn region_metadata_is_static() {
    assert_eq!(store().regions().len(), 15);
    assert_eq!(store().region_info(Region::SkullCranial).bone_count, 8);
    assert_eq!(SKELETAL_REGIONS[14].id, Region::LowerLimbFoot);

    let divergent: Vec<_> = store()
        .region_divergence()
        .into_iter()
        .map(|d| d.region)
        .collect();
    assert_eq!(divergent, [Region::SkullCranial, Region::SkullFacial]);
}

#[test]
fn summaries_follow_insertion_order() {
    let summaries = store().summaries();
    assert_eq!(summaries.len(), 206);
    assert_eq!(summaries[0].id.as_str(), "frontal");
    assert_eq!(summaries.last().unwrap().id.as_str(), "phalanx-distal-little-toe-right");
}

// =============================================================================
// Relationships
// =============================================================================

#[test]
fn soft_references_are_tolerated() {
    let related = store().related_bones("ethmoid");
    let ids: Vec<_> = related.iter().map(|b| b.id.as_str()).collect();
    assert!(ids.contains(&"maxilla-left"));

    assert!(store().joints().next().is_none());
    assert!(store().joints_for_bone("temporal-left").is_empty());
    assert!(store().related_bones("not-a-real-bone").is_empty());
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn global_store_is_shared() {
    let a = Store::global() as *const Store;
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| Store::global() as *const Store as usize))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), a as usize);
    }
}

#[test]
fn reject_policy_loads_clean_dataset() {
    let options = StoreOptions {
        duplicates: DuplicatePolicy::Reject,
        ..Default::default()
    };
    let store = Store::load(&options).unwrap();
    assert_eq!(store.len(), 206);
}

#[test]
fn dataset_with_bad_record_fails_to_load() {
    let mut data = dataset::embedded().unwrap();
    data.bones[0].division = Division::Appendicular;

    let result = Store::from_dataset(data, &StoreOptions::default());
    assert!(matches!(result, Err(StoreError::InvalidRecord { .. })));
}
