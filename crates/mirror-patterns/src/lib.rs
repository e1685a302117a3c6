//! Consolidated pattern library for the brandmirror classifiers.
//!
//! Every keyword list, regex table, and per-profile configuration lives
//! here, one module per concern. Classifiers consume these tables and never
//! define their own, so overlapping pattern sets (budget phrasing, company
//! size, sources) cannot drift between services.
//!
//! Tables are plain `&'static` data. Regex source strings are compiled by
//! the classifier that uses them.

pub mod customer;
pub mod industry;
pub mod jtbd;
pub mod offering;
pub mod reddit;
pub mod relevance;
pub mod scope;
pub mod sentiment;
pub mod smb;
pub mod sources;

pub use jtbd::JtbdTemplate;
pub use relevance::ProfileRelevanceConfig;
pub use sources::{ProfileSourceWeights, SourceQualityConfig, SourceTier};
