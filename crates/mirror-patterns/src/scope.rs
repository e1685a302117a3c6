//! Geographic-scope indicator lists.
//!
//! Matched with word boundaries against the lowercased UVP corpus. The
//! global list deliberately includes single strong international tokens
//! (foreign cities, cross-border regulation): one such hit is definitional,
//! so the detector lets a single global match override volume from the
//! national list.

pub const LOCAL_INDICATORS: &[&str] = &[
    "local",
    "locally owned",
    "neighborhood",
    "nearby",
    "in-person",
    "community",
    "downtown",
    "metro area",
    "near me",
    "storefront",
    "walk-in",
    "house calls",
    "service area",
    "same-day service",
    "your area",
];

pub const REGIONAL_INDICATORS: &[&str] = &[
    "regional",
    "statewide",
    "tri-state",
    "county",
    "counties",
    "across the state",
    "midwest",
    "northeast",
    "southeast",
    "pacific northwest",
    "new england",
    "multiple cities",
];

pub const NATIONAL_INDICATORS: &[&str] = &[
    "national",
    "nationwide",
    "across the country",
    "all 50 states",
    "coast to coast",
    "anywhere in the us",
    "continental us",
    "domestic shipping",
    "us-based",
];

pub const GLOBAL_INDICATORS: &[&str] = &[
    "global",
    "globally",
    "worldwide",
    "international",
    "multinational",
    "cross-border",
    "gdpr",
    "multi-currency",
    "localization",
    "time zones",
    "emea",
    "apac",
    "europe",
    "asia",
    "latin america",
    "london",
    "berlin",
    "paris",
    "tokyo",
    "singapore",
    "sydney",
    "toronto",
];
