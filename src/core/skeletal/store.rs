//! core::skeletal::store
//!
//! The in-memory skeletal reference store.
//!
//! # Lifecycle
//!
//! A [`Store`] is built in two phases and is immutable afterwards:
//!
//! 1. **Load**: records are inserted into a [`StoreBuilder`], keyed by id.
//!    [`Store::load`] inserts the hand-authored dataset first, then a
//!    placeholder for every catalog bone that was not authored.
//! 2. **Index**: [`StoreBuilder::build`] scans the canonical collection once,
//!    in insertion order, and derives the region, name, Latin-name and FMA
//!    indexes.
//!
//! # Duplicates
//!
//! Under [`DuplicatePolicy::Overwrite`] a second record with the same id
//! replaces the first and keeps its position. The overwrite is logged and
//! listed in the [`LoadReport`]. [`DuplicatePolicy::Reject`] fails the load
//! instead.
//!
//! # Example
//!
//! ```
//! use osteoref::core::skeletal::schema::Region;
//! use osteoref::core::skeletal::store::Store;
//!
//! let store = Store::global();
//! assert_eq!(store.len(), 206);
//!
//! let frontal = store.bone_by_name("os frontale").unwrap();
//! assert_eq!(frontal.id.as_str(), "frontal");
//! assert_eq!(store.bones_in_region(Region::UpperLimbHand).len(), 54);
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use super::catalog::catalog;
use super::dataset::{self, Dataset, DatasetError};
use super::placeholder;
use super::regions::{region_info, SkeletalRegionInfo, SKELETAL_REGIONS};
use super::schema::{Bone, BoneSummary, BoneType, Division, Joint, Region};
use crate::core::config::{DuplicatePolicy, RegionCheck, StoreOptions};
use crate::core::types::{BoneId, FmaId, JointId, TypeError};

/// Entity kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Bone,
    Joint,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Bone => write!(f, "bone"),
            EntityKind::Joint => write!(f, "joint"),
        }
    }
}

/// Errors from store loading and lookup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} '{key}' not found")]
    NotFound { kind: EntityKind, key: String },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("invalid record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("catalog error: {0}")]
    Type(#[from] TypeError),
}

/// What happened during the load phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Distinct bones taken from the authored dataset
    pub authored: usize,
    /// Placeholder bones synthesized from the catalog
    pub generated: usize,
    /// Catalog entries skipped because the bone was authored
    pub skipped: usize,
    /// Ids whose earlier record was replaced, in overwrite order
    pub overwritten: Vec<BoneId>,
    /// Authored ids with no catalog entry, in dataset order
    pub uncatalogued: Vec<BoneId>,
}

/// Bone counts by classification.
///
/// Every enum value is present as a key; empty groups count zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoneStatistics {
    pub total: usize,
    pub by_division: BTreeMap<Division, usize>,
    pub by_region: BTreeMap<Region, usize>,
    pub by_type: BTreeMap<BoneType, usize>,
}

/// A region whose live population differs from its declared count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionDivergence {
    pub region: Region,
    pub declared: usize,
    pub live: usize,
}

/// A bone's soft references, split into resolved and dangling ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct References<'a> {
    pub joints: Vec<&'a Joint>,
    pub dangling_joints: Vec<&'a JointId>,
    pub bones: Vec<&'a Bone>,
    pub dangling_bones: Vec<&'a BoneId>,
}

/// Accumulates canonical records before indexing.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    policy: DuplicatePolicy,
    bones: IndexMap<BoneId, Bone>,
    joints: IndexMap<JointId, Joint>,
    report: LoadReport,
}

impl StoreBuilder {
    /// Create an empty builder with the given duplicate policy.
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Whether a bone with this id has been inserted.
    pub fn contains_bone(&self, id: &str) -> bool {
        self.bones.contains_key(id)
    }

    /// Insert a bone, keyed by its id.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidRecord` if the record fails [`Bone::validate`]
    /// - `StoreError::DuplicateId` if the id exists and the policy is
    ///   [`DuplicatePolicy::Reject`]
    pub fn insert_bone(&mut self, bone: Bone) -> Result<(), StoreError> {
        bone.validate().map_err(|reason| StoreError::InvalidRecord {
            id: bone.id.to_string(),
            reason,
        })?;

        if self.bones.contains_key(&bone.id) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(StoreError::DuplicateId {
                        kind: EntityKind::Bone,
                        id: bone.id.to_string(),
                    });
                }
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(id = %bone.id, "duplicate bone id, overwriting earlier record");
                    self.report.overwritten.push(bone.id.clone());
                }
            }
        }

        // IndexMap::insert keeps the original slot on overwrite.
        self.bones.insert(bone.id.clone(), bone);
        Ok(())
    }

    /// Insert a joint, keyed by its id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if the id exists and the policy is
    /// [`DuplicatePolicy::Reject`].
    pub fn insert_joint(&mut self, joint: Joint) -> Result<(), StoreError> {
        if self.joints.contains_key(&joint.id) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(StoreError::DuplicateId {
                        kind: EntityKind::Joint,
                        id: joint.id.to_string(),
                    });
                }
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(
                        id = %joint.id,
                        "duplicate joint id, overwriting earlier record"
                    );
                }
            }
        }
        self.joints.insert(joint.id.clone(), joint);
        Ok(())
    }

    /// Run the index phase and freeze the store.
    pub fn build(self) -> Store {
        let mut by_region: HashMap<Region, Vec<BoneId>> = HashMap::new();
        let mut by_name = HashMap::with_capacity(self.bones.len());
        let mut by_latin_name = HashMap::new();
        let mut by_fma_id = HashMap::new();

        for (id, bone) in &self.bones {
            by_region.entry(bone.region).or_default().push(id.clone());
            by_name.insert(bone.name.to_lowercase(), id.clone());
            if let Some(latin) = &bone.latin_name {
                by_latin_name.insert(latin.to_lowercase(), id.clone());
            }
            if let Some(fma) = &bone.fma_id {
                by_fma_id.insert(fma.clone(), id.clone());
            }
        }

        tracing::debug!(
            bones = self.bones.len(),
            joints = self.joints.len(),
            names = by_name.len(),
            latin_names = by_latin_name.len(),
            fma_ids = by_fma_id.len(),
            "built skeletal indexes"
        );

        Store {
            bones: self.bones,
            joints: self.joints,
            by_region,
            by_name,
            by_latin_name,
            by_fma_id,
            report: self.report,
        }
    }
}

/// The skeletal reference store.
///
/// Read-only after construction; `&Store` may be shared across threads.
#[derive(Debug)]
pub struct Store {
    bones: IndexMap<BoneId, Bone>,
    joints: IndexMap<JointId, Joint>,
    by_region: HashMap<Region, Vec<BoneId>>,
    by_name: HashMap<String, BoneId>,
    by_latin_name: HashMap<String, BoneId>,
    by_fma_id: HashMap<FmaId, BoneId>,
    report: LoadReport,
}

impl Store {
    /// Build a store from the embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded dataset is malformed or a record
    /// violates a load invariant.
    pub fn load(options: &StoreOptions) -> Result<Self, StoreError> {
        Self::from_dataset(dataset::embedded()?, options)
    }

    /// Build a store from the embedded dataset with default options.
    pub fn load_default() -> Result<Self, StoreError> {
        Self::load(&StoreOptions::default())
    }

    /// Build a store from an already parsed dataset.
    ///
    /// Authored records are inserted first, in dataset order. When
    /// `options.placeholders` is set, every catalog bone whose id is still
    /// absent is then synthesized.
    ///
    /// # Errors
    ///
    /// See [`StoreBuilder::insert_bone`] and [`StoreBuilder::insert_joint`].
    pub fn from_dataset(dataset: Dataset, options: &StoreOptions) -> Result<Self, StoreError> {
        let mut builder = StoreBuilder::new(options.duplicates);

        for bone in dataset.bones {
            builder.insert_bone(bone)?;
        }
        for joint in dataset.joints {
            builder.insert_joint(joint)?;
        }
        builder.report.authored = builder.bones.len();

        let templates = catalog()?;
        let catalogued: HashSet<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        let uncatalogued: Vec<BoneId> = builder
            .bones
            .keys()
            .filter(|id| !catalogued.contains(id.as_str()))
            .cloned()
            .collect();
        if !uncatalogued.is_empty() {
            let ids: Vec<&str> = uncatalogued.iter().map(BoneId::as_str).collect();
            tracing::warn!(ids = ?ids, "authored bones missing from the catalog");
        }
        builder.report.uncatalogued = uncatalogued;

        if options.placeholders {
            for template in templates {
                if builder.contains_bone(template.id.as_str()) {
                    builder.report.skipped += 1;
                    continue;
                }
                builder.insert_bone(placeholder::generate(&template))?;
                builder.report.generated += 1;
            }
        }

        tracing::debug!(
            authored = builder.report.authored,
            generated = builder.report.generated,
            skipped = builder.report.skipped,
            overwritten = builder.report.overwritten.len(),
            uncatalogued = builder.report.uncatalogued.len(),
            "loaded skeletal records"
        );

        let store = builder.build();

        if options.region_check == RegionCheck::Warn {
            for d in store.region_divergence() {
                tracing::warn!(
                    region = %d.region,
                    declared = d.declared,
                    live = d.live,
                    "region population differs from declared count"
                );
            }
        }

        Ok(store)
    }

    /// The process-wide store, built on first use with default options.
    ///
    /// # Panics
    ///
    /// Panics if the embedded dataset cannot be loaded. The store has no
    /// other source of records.
    pub fn global() -> &'static Store {
        static STORE: OnceLock<Store> = OnceLock::new();
        STORE.get_or_init(|| match Store::load_default() {
            Ok(store) => store,
            Err(e) => panic!("failed to load skeletal store: {e}"),
        })
    }

    // =========================================================================
    // Bones
    // =========================================================================

    /// Look up a bone by id.
    pub fn bone(&self, id: &str) -> Option<&Bone> {
        self.bones.get(id)
    }

    /// Look up a bone by id, failing with `StoreError::NotFound`.
    pub fn require_bone(&self, id: &str) -> Result<&Bone, StoreError> {
        self.bone(id).ok_or_else(|| StoreError::NotFound {
            kind: EntityKind::Bone,
            key: id.to_string(),
        })
    }

    /// Look up a bone by name or Latin name, case-insensitively.
    ///
    /// Names are tried before Latin names. Paired bones share a Latin name;
    /// the Latin index keeps the last inserted member of the pair.
    pub fn bone_by_name(&self, name: &str) -> Option<&Bone> {
        let key = name.to_lowercase();
        self.by_name
            .get(&key)
            .or_else(|| self.by_latin_name.get(&key))
            .and_then(|id| self.bones.get(id))
    }

    /// Look up a bone by exact FMA code.
    pub fn bone_by_fma_id(&self, fma_id: &str) -> Option<&Bone> {
        self.by_fma_id.get(fma_id).and_then(|id| self.bones.get(id))
    }

    /// All bones, in insertion order.
    pub fn bones(&self) -> impl Iterator<Item = &Bone> + '_ {
        self.bones.values()
    }

    /// Number of bones.
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Whether the store holds no bones.
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Bones of a region, in insertion order.
    pub fn bones_in_region(&self, region: Region) -> Vec<&Bone> {
        self.by_region
            .get(&region)
            .map(|ids| ids.iter().filter_map(|id| self.bones.get(id)).collect())
            .unwrap_or_default()
    }

    /// Bones of a division, in insertion order.
    pub fn bones_by_division(&self, division: Division) -> Vec<&Bone> {
        self.bones().filter(|b| b.division == division).collect()
    }

    /// Bones of a type, in insertion order.
    pub fn bones_by_type(&self, kind: BoneType) -> Vec<&Bone> {
        self.bones().filter(|b| b.kind == kind).collect()
    }

    /// Bones whose name or Latin name contains `query`, case-insensitively.
    ///
    /// Results keep insertion order; there is no ranking. An empty query
    /// matches every bone.
    pub fn search(&self, query: &str) -> Vec<&Bone> {
        let needle = query.to_lowercase();
        self.bones()
            .filter(|b| {
                b.name.to_lowercase().contains(&needle)
                    || b
                        .latin_name
                        .as_ref()
                        .is_some_and(|latin| latin.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Summaries of all bones, in insertion order.
    pub fn summaries(&self) -> Vec<BoneSummary> {
        self.bones().map(Bone::summary).collect()
    }

    /// Bones listed in a bone's `related_bones`. Dangling ids are skipped.
    pub fn related_bones(&self, id: &str) -> Vec<&Bone> {
        self.bone(id)
            .map(|bone| {
                bone.related_bones
                    .iter()
                    .filter_map(|related| self.bones.get(related))
                    .collect()
            })
            .unwrap_or_default()
    }

    // =========================================================================
    // Joints
    // =========================================================================

    /// Look up a joint by id.
    pub fn joint(&self, id: &str) -> Option<&Joint> {
        self.joints.get(id)
    }

    /// Look up a joint by id, failing with `StoreError::NotFound`.
    pub fn require_joint(&self, id: &str) -> Result<&Joint, StoreError> {
        self.joint(id).ok_or_else(|| StoreError::NotFound {
            kind: EntityKind::Joint,
            key: id.to_string(),
        })
    }

    /// All joints, in insertion order.
    pub fn joints(&self) -> impl Iterator<Item = &Joint> + '_ {
        self.joints.values()
    }

    /// Joints listed in a bone's `joint_ids`. Dangling ids are skipped.
    pub fn joints_for_bone(&self, id: &str) -> Vec<&Joint> {
        self.bone(id)
            .map(|bone| {
                bone.joint_ids
                    .iter()
                    .filter_map(|joint| self.joints.get(joint))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve every soft reference of a bone.
    ///
    /// Returns `None` if the bone does not exist.
    pub fn resolve_references(&self, id: &str) -> Option<References<'_>> {
        let bone = self.bone(id)?;
        let mut refs = References {
            joints: Vec::new(),
            dangling_joints: Vec::new(),
            bones: Vec::new(),
            dangling_bones: Vec::new(),
        };

        for joint_id in &bone.joint_ids {
            match self.joints.get(joint_id) {
                Some(joint) => refs.joints.push(joint),
                None => refs.dangling_joints.push(joint_id),
            }
        }
        for bone_id in &bone.related_bones {
            match self.bones.get(bone_id) {
                Some(related) => refs.bones.push(related),
                None => refs.dangling_bones.push(bone_id),
            }
        }

        Some(refs)
    }

    // =========================================================================
    // Regions and aggregates
    // =========================================================================

    /// Static metadata for a region.
    pub fn region_info(&self, region: Region) -> &'static SkeletalRegionInfo {
        region_info(region)
    }

    /// Static metadata for all fifteen regions.
    pub fn regions(&self) -> &'static [SkeletalRegionInfo] {
        &SKELETAL_REGIONS
    }

    /// Regions whose live bone count differs from the declared count.
    pub fn region_divergence(&self) -> Vec<RegionDivergence> {
        SKELETAL_REGIONS
            .iter()
            .map(|info| RegionDivergence {
                region: info.id,
                declared: info.bone_count,
                live: self.by_region.get(&info.id).map_or(0, Vec::len),
            })
            .filter(|d| d.declared != d.live)
            .collect()
    }

    /// Count bones by division, region and type.
    ///
    /// Computed on every call.
    pub fn statistics(&self) -> BoneStatistics {
        let mut by_division: BTreeMap<Division, usize> =
            Division::ALL.iter().map(|d| (*d, 0)).collect();
        let mut by_region: BTreeMap<Region, usize> =
            Region::ALL.iter().map(|r| (*r, 0)).collect();
        let mut by_type: BTreeMap<BoneType, usize> =
            BoneType::ALL.iter().map(|t| (*t, 0)).collect();

        for bone in self.bones() {
            *by_division.entry(bone.division).or_default() += 1;
            *by_region.entry(bone.region).or_default() += 1;
            *by_type.entry(bone.kind).or_default() += 1;
        }

        BoneStatistics {
            total: self.len(),
            by_division,
            by_region,
            by_type,
        }
    }

    /// What happened during the load phase.
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }
}
