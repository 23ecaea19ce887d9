//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Store Options
//!
//! Located at (in order of precedence):
//! 1. `--config <path>`
//! 2. `$OSTEO_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/osteo/config.toml`
//! 4. `~/.osteo/config.toml`
//!
//! # Validation
//!
//! Enumerated values are checked by serde. Numeric ranges are validated
//! after parsing.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::skeletal::schema::ExplanationLevel;

/// What the store does when a record reuses an existing id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Replace the earlier record, keeping its position.
    #[default]
    Overwrite,
    /// Fail the load.
    Reject,
}

/// Whether region population is compared with the declared counts at build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionCheck {
    #[default]
    Ignore,
    /// Log each divergent region at `warn`.
    Warn,
}

/// Options controlling how the store is built.
///
/// # Example
///
/// ```toml
/// duplicates = "overwrite"
/// placeholders = true
/// region_check = "ignore"
///
/// [display]
/// level = 3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreOptions {
    /// Duplicate-id policy during load
    pub duplicates: DuplicatePolicy,

    /// Generate records for catalog bones that are not hand-authored
    pub placeholders: bool,

    /// Region count check at index build
    pub region_check: RegionCheck,

    /// Presentation defaults
    pub display: DisplayConfig,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::default(),
            placeholders: true,
            region_check: RegionCheck::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl StoreOptions {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()
    }
}

/// Presentation defaults for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Default explanation tier (1-5)
    pub level: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { level: 3 }
    }
}

impl DisplayConfig {
    /// Validate the display configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.explanation_level().map(|_| ())
    }

    /// The configured tier as a typed level.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `level` is outside 1-5.
    pub fn explanation_level(&self) -> Result<ExplanationLevel, ConfigError> {
        ExplanationLevel::try_from(self.level)
            .map_err(|e| ConfigError::InvalidValue(format!("display.level: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod store_options {
        use super::*;

        #[test]
        fn defaults() {
            let options = StoreOptions::default();
            assert_eq!(options.duplicates, DuplicatePolicy::Overwrite);
            assert!(options.placeholders);
            assert_eq!(options.region_check, RegionCheck::Ignore);
            assert_eq!(options.display.level, 3);
            assert!(options.validate().is_ok());
        }

        #[test]
        fn empty_document_is_default() {
            let parsed: StoreOptions = toml::from_str("").unwrap();
            assert_eq!(parsed, StoreOptions::default());
        }

        #[test]
        fn parses_all_fields() {
            let parsed: StoreOptions = toml::from_str(
                r#"
                duplicates = "reject"
                placeholders = false
                region_check = "warn"

                [display]
                level = 5
                "#,
            )
            .unwrap();
            assert_eq!(parsed.duplicates, DuplicatePolicy::Reject);
            assert!(!parsed.placeholders);
            assert_eq!(parsed.region_check, RegionCheck::Warn);
            assert_eq!(
                parsed.display.explanation_level().unwrap(),
                ExplanationLevel::Level5
            );
        }

        #[test]
        fn unknown_policy_rejected() {
            let result: Result<StoreOptions, _> = toml::from_str(r#"duplicates = "merge""#);
            assert!(result.is_err());
        }

        #[test]
        fn reject_unknown_fields() {
            let result: Result<StoreOptions, _> = toml::from_str("colour = true");
            assert!(result.is_err());

            let result: Result<StoreOptions, _> = toml::from_str("[display]\nwidth = 80");
            assert!(result.is_err());
        }

        #[test]
        fn roundtrip() {
            let options = StoreOptions {
                duplicates: DuplicatePolicy::Reject,
                placeholders: false,
                region_check: RegionCheck::Warn,
                display: DisplayConfig { level: 1 },
            };

            let toml = toml::to_string_pretty(&options).unwrap();
            let parsed: StoreOptions = toml::from_str(&toml).unwrap();
            assert_eq!(options, parsed);
        }
    }

    mod display_config {
        use super::*;

        #[test]
        fn level_out_of_range() {
            assert!(DisplayConfig { level: 0 }.validate().is_err());
            assert!(DisplayConfig { level: 6 }.validate().is_err());
        }

        #[test]
        fn level_in_range() {
            for level in 1..=5 {
                assert!(DisplayConfig { level }.validate().is_ok());
            }
        }
    }
}
