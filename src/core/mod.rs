//! core
//!
//! Core domain types, schemas and the reference store.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BoneId, JointId, FmaId
//! - [`skeletal`] - Skeletal schema, catalog and store
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - The store is built once and is read-only afterwards

pub mod config;
pub mod skeletal;
pub mod types;
