//! B2B/B2C customer-type indicator lists.

pub const B2B_INDICATORS: &[&str] = &[
    "b2b",
    "businesses",
    "companies",
    "teams",
    "enterprises",
    "organizations",
    "agencies",
    "firms",
    "smbs",
    "startups",
    "procurement",
    "stakeholders",
    "departments",
    "account managers",
    "roi",
    "workflow",
    "clients",
];

pub const B2C_INDICATORS: &[&str] = &[
    "b2c",
    "consumers",
    "individuals",
    "families",
    "homeowners",
    "shoppers",
    "households",
    "parents",
    "everyday",
    "personal",
    "lifestyle",
    "diy",
    "at home",
    "for yourself",
];

/// Explicit-statement markers checked only against the target-customer
/// field. A hit adds a flat bias to the matching side of the score.
pub const B2B_EXPLICIT: &[&str] = &["business", "company", "enterprise"];
pub const B2C_EXPLICIT: &[&str] = &["individual", "consumer", "homeowner"];

/// Flat score bias applied when an explicit marker is present.
pub const EXPLICIT_BIAS: usize = 3;
