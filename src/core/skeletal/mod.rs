//! core::skeletal
//!
//! The skeletal reference store and its schema.
//!
//! # Modules
//!
//! - [`schema`] - Bone, Joint and the enumerated domains
//! - [`regions`] - Static table of the fifteen regions
//! - [`catalog`] - Ordered enumeration of the 206 adult bones
//! - [`placeholder`] - Deterministic records for non-authored bones
//! - [`dataset`] - The embedded hand-authored dataset
//! - [`store`] - Canonical collection, indexes and queries

pub mod catalog;
pub mod dataset;
pub mod placeholder;
pub mod regions;
pub mod schema;
pub mod store;

pub use regions::{SkeletalRegionInfo, SKELETAL_REGIONS};
pub use schema::{Bone, BoneSummary, BoneType, Division, ExplanationLevel, Joint, Region};
pub use store::{BoneStatistics, Store, StoreError};
