//! Property-based tests for identifiers and store lookups.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use osteoref::core::skeletal::store::Store;
use osteoref::core::types::{BoneId, FmaId};

/// Strategy for generating valid kebab-case ids.
fn valid_bone_id() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9]{1,8}", 1..5).prop_map(|parts| parts.join("-"))
}

/// Strategy for flipping the case of each character in a string.
fn case_flips(len: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), len)
}

fn flip_case(s: &str, flips: &[bool]) -> String {
    s.chars()
        .zip(flips.iter().chain(std::iter::repeat(&false)))
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// Any kebab-case id is accepted and round-trips through serde.
    #[test]
    fn valid_ids_accepted(id in valid_bone_id()) {
        let bone_id = BoneId::new(&id).unwrap();
        let json = serde_json::to_string(&bone_id).unwrap();
        let parsed: BoneId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed.as_str(), id.as_str());
    }

    /// Ids containing an uppercase letter are rejected.
    #[test]
    fn uppercase_ids_rejected(id in valid_bone_id(), c in prop::char::range('A', 'Z')) {
        let bad = format!("{id}{c}");
        prop_assert!(BoneId::new(bad).is_err());
    }

    /// Ids containing a space or underscore are rejected.
    #[test]
    fn separators_rejected(a in valid_bone_id(), b in valid_bone_id(), sep in "[ _.]") {
        let bad = format!("{a}{sep}{b}");
        prop_assert!(BoneId::new(bad).is_err());
    }

    /// FMA ids accept any digit run after the prefix.
    #[test]
    fn fma_digits_accepted(n in 0u64..10_000_000) {
        let fma = FmaId::new(format!("FMA:{n}")).unwrap();
        prop_assert_eq!(fma.digits(), n.to_string());
    }

    /// Arbitrary strings never panic id validation.
    #[test]
    fn arbitrary_input_never_panics(s in ".*") {
        let _ = BoneId::new(s.clone());
        let _ = FmaId::new(s);
    }

    /// Name lookup is insensitive to the case of the query.
    #[test]
    fn name_lookup_ignores_case(index in 0usize..206, flips in case_flips(64)) {
        let store = Store::global();
        let bone = store.bones().nth(index).unwrap();
        let query = flip_case(&bone.name, &flips);
        let found = store.bone_by_name(&query).unwrap();
        prop_assert_eq!(&found.id, &bone.id);
    }

    /// Search results are a subset of the store and all contain the query.
    #[test]
    fn search_results_contain_query(query in "[a-z ]{0,6}") {
        let store = Store::global();
        let results = store.search(&query);
        prop_assert!(results.len() <= store.len());
        for bone in results {
            let in_name = bone.name.to_lowercase().contains(&query);
            let in_latin = bone
                .latin_name
                .as_deref()
                .is_some_and(|l| l.to_lowercase().contains(&query));
            prop_assert!(in_name || in_latin);
        }
    }
}
