//! Source-quality tables: global trust tiers plus per-profile overrides.

use mirror_core::BusinessProfileType;
use serde::{Deserialize, Serialize};

/// Trust tier for a review/discussion source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTier {
    Tier1,
    Tier2,
    Tier3,
}

impl std::fmt::Display for SourceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceTier::Tier1 => "tier1",
            SourceTier::Tier2 => "tier2",
            SourceTier::Tier3 => "tier3",
        };
        f.write_str(s)
    }
}

/// Global quality config for one normalized source.
#[derive(Debug, Clone, Copy)]
pub struct SourceQualityConfig {
    pub tier: SourceTier,
    pub multiplier: f32,
    pub description: &'static str,
}

/// Normalized source name applied when nothing matches.
pub const GENERIC_SOURCE: &str = "generic";

/// Global source table, keyed by normalized source name.
pub const SOURCE_CONFIGS: &[(&str, SourceQualityConfig)] = &[
    (
        "g2",
        SourceQualityConfig {
            tier: SourceTier::Tier1,
            multiplier: 1.2,
            description: "verified software reviews",
        },
    ),
    (
        "capterra",
        SourceQualityConfig {
            tier: SourceTier::Tier1,
            multiplier: 1.2,
            description: "verified software reviews",
        },
    ),
    (
        "trustradius",
        SourceQualityConfig {
            tier: SourceTier::Tier1,
            multiplier: 1.15,
            description: "in-depth software reviews",
        },
    ),
    (
        "google-reviews",
        SourceQualityConfig {
            tier: SourceTier::Tier1,
            multiplier: 1.15,
            description: "high-volume local reviews",
        },
    ),
    (
        "reddit",
        SourceQualityConfig {
            tier: SourceTier::Tier2,
            multiplier: 1.0,
            description: "candid but unverified discussion",
        },
    ),
    (
        "linkedin",
        SourceQualityConfig {
            tier: SourceTier::Tier2,
            multiplier: 1.0,
            description: "professional commentary",
        },
    ),
    (
        "trustpilot",
        SourceQualityConfig {
            tier: SourceTier::Tier2,
            multiplier: 0.95,
            description: "consumer reviews, mixed verification",
        },
    ),
    (
        "yelp",
        SourceQualityConfig {
            tier: SourceTier::Tier2,
            multiplier: 0.95,
            description: "local reviews, filter disputes",
        },
    ),
    (
        "facebook",
        SourceQualityConfig {
            tier: SourceTier::Tier3,
            multiplier: 0.8,
            description: "low-signal social chatter",
        },
    ),
    (
        "twitter",
        SourceQualityConfig {
            tier: SourceTier::Tier3,
            multiplier: 0.75,
            description: "short-form social chatter",
        },
    ),
    (
        GENERIC_SOURCE,
        SourceQualityConfig {
            tier: SourceTier::Tier3,
            multiplier: 0.7,
            description: "unrecognized source",
        },
    ),
];

/// URL substring -> normalized source name. Checked before the explicit
/// source string, which is checked before content sniffing.
pub const PLATFORM_URL_KEYWORDS: &[(&str, &str)] = &[
    ("g2.com", "g2"),
    ("capterra.com", "capterra"),
    ("trustradius.com", "trustradius"),
    ("google.com/maps", "google-reviews"),
    ("reddit.com", "reddit"),
    ("linkedin.com", "linkedin"),
    ("trustpilot.com", "trustpilot"),
    ("yelp.com", "yelp"),
    ("facebook.com", "facebook"),
    ("twitter.com", "twitter"),
    ("x.com", "twitter"),
];

/// Per-profile source-tier overrides. Take precedence over
/// [`SOURCE_CONFIGS`] whenever a profile context is known.
#[derive(Debug, Clone, Copy)]
pub struct ProfileSourceWeights {
    pub tier1_sources: &'static [&'static str],
    pub tier2_sources: &'static [&'static str],
    pub tier3_sources: &'static [&'static str],
}

/// Look up the source-weight overrides for a profile.
#[must_use]
pub fn source_weights(profile: BusinessProfileType) -> &'static ProfileSourceWeights {
    match profile {
        BusinessProfileType::LocalServiceB2c => &ProfileSourceWeights {
            tier1_sources: &["google-reviews", "yelp"],
            tier2_sources: &["facebook", "reddit"],
            tier3_sources: &["g2", "capterra", "trustradius"],
        },
        BusinessProfileType::LocalServiceB2b => &ProfileSourceWeights {
            tier1_sources: &["google-reviews", "linkedin"],
            tier2_sources: &["yelp", "facebook"],
            tier3_sources: &["g2", "trustpilot"],
        },
        BusinessProfileType::RegionalRetailB2c => &ProfileSourceWeights {
            tier1_sources: &["google-reviews", "yelp", "facebook"],
            tier2_sources: &["trustpilot", "reddit"],
            tier3_sources: &["g2", "trustradius"],
        },
        BusinessProfileType::NationalSaasB2b => &ProfileSourceWeights {
            tier1_sources: &["g2", "capterra", "trustradius"],
            tier2_sources: &["reddit", "linkedin"],
            tier3_sources: &["yelp", "google-reviews"],
        },
        BusinessProfileType::NationalEcommerceB2c => &ProfileSourceWeights {
            tier1_sources: &["trustpilot", "reddit"],
            tier2_sources: &["twitter", "facebook"],
            tier3_sources: &["g2", "trustradius"],
        },
        BusinessProfileType::GlobalSaasB2b => &ProfileSourceWeights {
            tier1_sources: &["g2", "trustradius"],
            tier2_sources: &["reddit", "linkedin", "twitter"],
            tier3_sources: &["yelp", "facebook"],
        },
        BusinessProfileType::GlobalEcommerceB2c => &ProfileSourceWeights {
            tier1_sources: &["trustpilot"],
            tier2_sources: &["reddit", "twitter"],
            tier3_sources: &["yelp", "google-reviews"],
        },
    }
}

/// Multipliers applied when a profile override matches.
pub const PROFILE_TIER1_MULTIPLIER: f32 = 1.3;
pub const PROFILE_TIER2_MULTIPLIER: f32 = 1.0;
pub const PROFILE_TIER3_MULTIPLIER: f32 = 0.6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_source_is_in_global_table() {
        assert!(SOURCE_CONFIGS.iter().any(|(name, _)| *name == GENERIC_SOURCE));
    }

    #[test]
    fn url_keywords_map_to_known_sources() {
        for (_, normalized) in PLATFORM_URL_KEYWORDS {
            assert!(
                SOURCE_CONFIGS.iter().any(|(name, _)| name == normalized),
                "{normalized} missing from SOURCE_CONFIGS"
            );
        }
    }

    #[test]
    fn every_profile_has_source_weights() {
        for profile in BusinessProfileType::ALL {
            let weights = source_weights(profile);
            assert!(!weights.tier1_sources.is_empty(), "{profile}: empty tier1");
        }
    }
}
