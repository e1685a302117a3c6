//! Shared domain types for the brandmirror classification pipeline.
//!
//! Defines the business-profile taxonomy, the UVP/brand input records the
//! detectors consume, the per-brand analysis cache, and the callback bus
//! used to notify composing services when classifications change.

pub mod bus;
pub mod cache;
pub mod inputs;
pub mod profile;

use thiserror::Error;

pub use bus::{TriggerBus, TriggerEvent};
pub use cache::ProfileCache;
pub use inputs::{BrandData, MarketGeography, Transformation, UvpData};
pub use profile::{
    BusinessProfileAnalysis, BusinessProfileType, CustomerType, OfferingType, Scope,
};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown business profile type: {0}")]
    UnknownProfileType(String),
}
