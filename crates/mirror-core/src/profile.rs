//! Business-profile taxonomy shared by every classifier.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// The seven business profiles a brand can resolve to.
///
/// Profiles are selected by the detector, never mutated. Wire names are
/// kebab-case (`local-service-b2c`, `national-saas-b2b`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessProfileType {
    LocalServiceB2c,
    LocalServiceB2b,
    RegionalRetailB2c,
    NationalSaasB2b,
    NationalEcommerceB2c,
    GlobalSaasB2b,
    GlobalEcommerceB2c,
}

impl BusinessProfileType {
    /// All seven profiles, in detector-priority order. Table-driven code
    /// iterates this to guarantee no profile is missing a config entry.
    pub const ALL: [BusinessProfileType; 7] = [
        BusinessProfileType::LocalServiceB2c,
        BusinessProfileType::LocalServiceB2b,
        BusinessProfileType::RegionalRetailB2c,
        BusinessProfileType::NationalSaasB2b,
        BusinessProfileType::NationalEcommerceB2c,
        BusinessProfileType::GlobalSaasB2b,
        BusinessProfileType::GlobalEcommerceB2c,
    ];

    /// Kebab-case wire name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BusinessProfileType::LocalServiceB2c => "local-service-b2c",
            BusinessProfileType::LocalServiceB2b => "local-service-b2b",
            BusinessProfileType::RegionalRetailB2c => "regional-retail-b2c",
            BusinessProfileType::NationalSaasB2b => "national-saas-b2b",
            BusinessProfileType::NationalEcommerceB2c => "national-ecommerce-b2c",
            BusinessProfileType::GlobalSaasB2b => "global-saas-b2b",
            BusinessProfileType::GlobalEcommerceB2c => "global-ecommerce-b2c",
        }
    }
}

impl std::fmt::Display for BusinessProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessProfileType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusinessProfileType::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownProfileType(s.to_string()))
    }
}

/// Geographic reach of a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Local,
    Regional,
    National,
    Global,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Scope::Local => "local",
            Scope::Regional => "regional",
            Scope::National => "national",
            Scope::Global => "global",
        };
        f.write_str(s)
    }
}

/// Who the business sells to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    B2b,
    B2c,
    B2b2c,
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CustomerType::B2b => "b2b",
            CustomerType::B2c => "b2c",
            CustomerType::B2b2c => "b2b2c",
        };
        f.write_str(s)
    }
}

/// What kind of offering the business sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferingType {
    Saas,
    Service,
    Product,
}

impl std::fmt::Display for OfferingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OfferingType::Saas => "saas",
            OfferingType::Service => "service",
            OfferingType::Product => "product",
        };
        f.write_str(s)
    }
}

/// Result of one profile detection run.
///
/// `signals` is an ordered audit trail of human-readable justifications,
/// appended in the order the detector collected them. It is for debugging
/// and display, never for downstream logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfileAnalysis {
    pub profile_type: BusinessProfileType,
    /// Detection confidence in `[0, 1]`. A value of 0.5 means the detector
    /// found no usable signal and fell back to the default profile.
    pub confidence: f32,
    pub scope: Scope,
    pub customer_type: CustomerType,
    pub offering_type: OfferingType,
    pub signals: Vec<String>,
}
