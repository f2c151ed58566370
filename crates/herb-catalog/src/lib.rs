//! Herb catalog core library.
//!
//! A load-once, read-only reference dataset: categories of herbs with
//! their properties, preparations, safety metadata, and benefit scores,
//! exposed through synchronous in-memory queries.
//!
//! The source data is known to be imperfect — duplicate ids, a category
//! field that can disagree with the enclosing category, and two different
//! encodings each for `cautions` and `benefitScores`. The loader
//! normalizes the encodings, preserves the anomalies, and reports every
//! finding in a [`LoadReport`] instead of repairing or rejecting silently.
//!
//! # Modules
//!
//! - [`model`]: canonical record types
//! - [`raw`]: boundary input shapes with the polymorphic source encodings
//! - [`loader`]: parse + validate + normalize, eager, once per store
//! - [`store`]: the query surface
//! - [`report`]: load-time data-quality findings
//! - [`config`]: strict/lenient policy and listing options

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod raw;
pub mod report;
pub mod store;

pub use config::{CatalogConfig, ValidationMode};
pub use error::CatalogError;
pub use loader::{builtin, load_catalog, load_path};
pub use model::{
    ComplementaryHerb, DetailedPreparation, Herb, HerbCategory, Preparation, SafetyProfile,
    ScientificResearch,
};
pub use report::{DataWarning, DuplicateHerbIdentity, LoadReport, SchemaViolation};
pub use store::CatalogStore;
