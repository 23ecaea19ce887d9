//! core::types
//!
//! Strong types for reference-store identifiers.
//!
//! # Types
//!
//! - [`BoneId`] - Validated kebab-case bone identifier
//! - [`JointId`] - Validated kebab-case joint identifier
//! - [`FmaId`] - Foundational Model of Anatomy code (`FMA:<digits>`)
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so an index keyed by them never holds a malformed
//! key.
//!
//! # Examples
//!
//! ```
//! use osteoref::core::types::{BoneId, FmaId};
//!
//! let id = BoneId::new("metacarpal-1-left").unwrap();
//! let fma = FmaId::new("FMA:52734").unwrap();
//! assert_eq!(id.as_str(), "metacarpal-1-left");
//! assert_eq!(fma.digits(), "52734");
//!
//! assert!(BoneId::new("Frontal Bone").is_err());
//! assert!(FmaId::new("fma:52734").is_err());
//! ```

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid bone id: {0}")]
    InvalidBoneId(String),

    #[error("invalid joint id: {0}")]
    InvalidJointId(String),

    #[error("invalid FMA id: {0}")]
    InvalidFmaId(String),
}

/// Check the kebab-case rules shared by bone and joint ids.
///
/// Returns a human-readable reason on failure.
fn check_kebab(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("id cannot be empty".into());
    }
    if id.starts_with('-') || id.ends_with('-') {
        return Err(format!("'{id}' cannot start or end with '-'"));
    }
    if id.contains("--") {
        return Err(format!("'{id}' cannot contain '--'"));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(format!("'{id}' contains invalid character '{c}'"));
    }
    Ok(())
}

/// A validated bone identifier.
///
/// Bone ids are the only durable key in the store. They must be kebab-case:
/// - Lowercase ASCII letters, digits and `-`
/// - Cannot be empty
/// - Cannot start or end with `-`, cannot contain `--`
///
/// # Example
///
/// ```
/// use osteoref::core::types::BoneId;
///
/// assert!(BoneId::new("rib-left-12").is_ok());
/// assert!(BoneId::new("").is_err());
/// assert!(BoneId::new("rib--left").is_err());
/// assert!(BoneId::new("Rib").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoneId(String);

impl BoneId {
    /// Create a new validated bone id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBoneId` if the id is not kebab-case.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        check_kebab(&id).map_err(TypeError::InvalidBoneId)?;
        Ok(Self(id))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BoneId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BoneId> for String {
    fn from(id: BoneId) -> Self {
        id.0
    }
}

impl AsRef<str> for BoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BoneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated joint identifier.
///
/// Same rules as [`BoneId`]. Bones reference joints by this id without any
/// guarantee that a matching joint record exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JointId(String);

impl JointId {
    /// Create a new validated joint id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidJointId` if the id is not kebab-case.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        check_kebab(&id).map_err(TypeError::InvalidJointId)?;
        Ok(Self(id))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JointId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<JointId> for String {
    fn from(id: JointId) -> Self {
        id.0
    }
}

impl AsRef<str> for JointId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for JointId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Foundational Model of Anatomy identifier.
///
/// FMA ids are matched exactly and case-sensitively, so no normalization
/// is applied. The format is `FMA:` followed by one or more ASCII digits.
///
/// # Example
///
/// ```
/// use osteoref::core::types::FmaId;
///
/// let fma = FmaId::new("FMA:74810").unwrap();
/// assert_eq!(fma.as_str(), "FMA:74810");
///
/// assert!(FmaId::new("FMA:").is_err());
/// assert!(FmaId::new("FMA:12a").is_err());
/// assert!(FmaId::new("52734").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FmaId(String);

impl FmaId {
    const PREFIX: &'static str = "FMA:";

    /// Create a new validated FMA id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFmaId` if the value is not `FMA:<digits>`.
    pub fn new(value: impl Into<String>) -> Result<Self, TypeError> {
        let value = value.into();
        match value.strip_prefix(Self::PREFIX) {
            Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self(value))
            }
            _ => Err(TypeError::InvalidFmaId(format!(
                "'{value}' must look like 'FMA:<digits>'"
            ))),
        }
    }

    /// Get the full code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the numeric part of the code.
    pub fn digits(&self) -> &str {
        &self.0[Self::PREFIX.len()..]
    }
}

impl TryFrom<String> for FmaId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FmaId> for String {
    fn from(id: FmaId) -> Self {
        id.0
    }
}

impl AsRef<str> for FmaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FmaId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FmaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
