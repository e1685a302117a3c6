//! Rule-based classifiers for brandmirror.
//!
//! Profile detection, relevance scoring, source-quality adjustment, SMB
//! classification, and JTBD validation. Every classifier is a pure function
//! of its inputs and always answers: missing or empty input degrades to the
//! documented default label with low confidence, never an error.

pub mod detector;
pub mod jtbd;
pub mod relevance;
pub mod smb;
pub mod source_quality;

mod keywords;

pub use detector::ProfileDetector;
pub use jtbd::{validate_jtbd, JtbdValidation};
pub use relevance::{check_relevance, RelevanceCheck};
pub use smb::{actionability_score, SmbClassification, SmbClassifier, SmbInput};
pub use source_quality::{
    apply_quality_adjustment, normalize_source, profile_aware_quality_adjustment,
    quality_adjustment, QualityAdjustment,
};
