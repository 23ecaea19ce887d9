//! core::skeletal::dataset
//!
//! The embedded dataset of hand-authored records.
//!
//! # Format
//!
//! The dataset is a self-describing JSON document:
//! - `kind` identifies the document (`osteoref.skeletal-dataset`)
//! - `schema_version` selects the record parser
//! - `bones` and `joints` hold strictly parsed records (unknown fields
//!   rejected)
//!
//! # Example
//!
//! ```
//! use osteoref::core::skeletal::dataset::parse_dataset;
//!
//! let json = r#"{
//!     "kind": "osteoref.skeletal-dataset",
//!     "schema_version": 1,
//!     "bones": [],
//!     "joints": []
//! }"#;
//!
//! let dataset = parse_dataset(json).unwrap();
//! assert!(dataset.bones.is_empty());
//! ```

use serde::Deserialize;
use thiserror::Error;

use super::schema::{Bone, Joint};

/// The kind identifier for the skeletal dataset.
pub const DATASET_KIND: &str = "osteoref.skeletal-dataset";

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// The dataset compiled into the library.
const EMBEDDED: &str = include_str!("../../../data/skeletal/authored.json");

/// Errors from dataset parsing.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset: {0}")]
    ParseError(String),

    #[error("invalid kind '{found}', expected '{}'", DATASET_KIND)]
    InvalidKind { found: String },

    #[error("unsupported schema version {0}, supported: {SCHEMA_VERSION}")]
    UnsupportedVersion(u32),
}

/// Envelope read before the records, for version dispatch.
#[derive(Debug, Deserialize)]
struct DatasetEnvelope {
    kind: String,
    schema_version: u32,
}

/// Parsed records, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub bones: Vec<Bone>,
    pub joints: Vec<Joint>,
}

/// Full v1 document. The envelope fields are checked before this is parsed.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetV1 {
    #[allow(dead_code)]
    kind: String,
    #[allow(dead_code)]
    schema_version: u32,
    #[serde(default)]
    bones: Vec<Bone>,
    #[serde(default)]
    joints: Vec<Joint>,
}

/// Parse dataset JSON with version dispatch.
///
/// # Errors
///
/// Returns an error if:
/// - The JSON is malformed
/// - The `kind` field doesn't match [`DATASET_KIND`]
/// - The `schema_version` is not supported
/// - A record has unknown fields, invalid ids or inconsistent laterality
pub fn parse_dataset(json: &str) -> Result<Dataset, DatasetError> {
    let envelope: DatasetEnvelope =
        serde_json::from_str(json).map_err(|e| DatasetError::ParseError(e.to_string()))?;

    if envelope.kind != DATASET_KIND {
        return Err(DatasetError::InvalidKind {
            found: envelope.kind,
        });
    }

    match envelope.schema_version {
        1 => {
            let doc: DatasetV1 =
                serde_json::from_str(json).map_err(|e| DatasetError::ParseError(e.to_string()))?;
            Ok(Dataset {
                bones: doc.bones,
                joints: doc.joints,
            })
        }
        v => Err(DatasetError::UnsupportedVersion(v)),
    }
}

/// Parse the dataset compiled into the library.
///
/// # Errors
///
/// Fails only if the embedded file is malformed.
pub fn embedded() -> Result<Dataset, DatasetError> {
    parse_dataset(EMBEDDED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::skeletal::schema::Laterality;

    #[test]
    fn embedded_dataset_parses() {
        let dataset = embedded().unwrap();
        let ids: Vec<_> = dataset.bones.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "frontal",
                "parietal-left",
                "parietal-right",
                "temporal-left",
                "temporal-right",
                "occipital",
                "sphenoid",
                "ethmoid"
            ]
        );
        assert!(dataset.joints.is_empty());
    }

    #[test]
    fn embedded_records_are_valid() {
        for bone in embedded().unwrap().bones {
            assert!(bone.validate().is_ok(), "{}", bone.id);
            assert!(!bone.landmarks.is_empty(), "{} has no landmarks", bone.id);
        }
    }

    #[test]
    fn embedded_laterality() {
        let dataset = embedded().unwrap();
        let parietal = dataset
            .bones
            .iter()
            .find(|b| b.id.as_str() == "parietal-left")
            .unwrap();
        assert_eq!(parietal.laterality, Laterality::Left);

        let frontal = &dataset.bones[0];
        assert!(!frontal.paired());
    }

    #[test]
    fn rejects_wrong_kind() {
        let json = r#"{"kind": "osteoref.muscle-dataset", "schema_version": 1}"#;
        assert!(matches!(
            parse_dataset(json),
            Err(DatasetError::InvalidKind { .. })
        ));
    }

    #[test]
    fn rejects_future_version() {
        let json = r#"{"kind": "osteoref.skeletal-dataset", "schema_version": 2, "bones": []}"#;
        assert!(matches!(
            parse_dataset(json),
            Err(DatasetError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn rejects_unknown_top_level_field() {
        let json = r#"{
            "kind": "osteoref.skeletal-dataset",
            "schema_version": 1,
            "bones": [],
            "muscles": []
        }"#;
        assert!(matches!(
            parse_dataset(json),
            Err(DatasetError::ParseError(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_dataset("{not json"),
            Err(DatasetError::ParseError(_))
        ));
    }

    #[test]
    fn missing_collections_default_empty() {
        let json = r#"{"kind": "osteoref.skeletal-dataset", "schema_version": 1}"#;
        assert_eq!(parse_dataset(json).unwrap(), Dataset::default());
    }
}
