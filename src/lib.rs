//! osteoref - An anatomical reference store for the human skeleton
//!
//! osteoref holds the 206 bones of the adult skeleton in memory, each with
//! five tiers of explanation and structured anatomical and clinical
//! metadata, and exposes them through id, name, FMA and region indexes.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, schema, dataset and store
//! - [`cli`] - Command-line interface for the `osteo` binary
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. Every bone id is unique and kebab-case
//! 2. The loaded store holds exactly the 206 catalog bones
//! 3. Laterality is consistent with pairing
//! 4. The store never changes after it is built

pub mod cli;
pub mod core;
pub mod ui;
