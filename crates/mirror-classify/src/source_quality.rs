//! Source-quality adjustment: trust tiers and score multipliers.

use mirror_core::BusinessProfileType;
use mirror_patterns::sources::{
    source_weights, SourceQualityConfig, SourceTier, GENERIC_SOURCE, PLATFORM_URL_KEYWORDS,
    PROFILE_TIER1_MULTIPLIER, PROFILE_TIER2_MULTIPLIER, PROFILE_TIER3_MULTIPLIER, SOURCE_CONFIGS,
};
use serde::{Deserialize, Serialize};

/// Quality adjustment for one signal source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityAdjustment {
    /// Normalized source name the adjustment was derived from.
    pub source: String,
    pub tier: SourceTier,
    pub multiplier: f32,
    pub reasoning: String,
}

/// Normalize a source to a known platform name.
///
/// Precedence: URL substring match, then the explicit source string, then
/// content sniffing, then `"generic"`. Idempotent for a fixed input.
#[must_use]
pub fn normalize_source(
    source: Option<&str>,
    url: Option<&str>,
    content: Option<&str>,
) -> &'static str {
    if let Some(url) = url {
        let url = url.to_lowercase();
        for (fragment, name) in PLATFORM_URL_KEYWORDS {
            if url.contains(fragment) {
                return name;
            }
        }
    }

    if let Some(source) = source {
        let source = source.to_lowercase();
        for (name, _) in SOURCE_CONFIGS {
            if source == *name || (name.len() >= 4 && source.contains(name)) {
                return name;
            }
        }
    }

    if let Some(content) = content {
        let content = content.to_lowercase();
        for (fragment, name) in PLATFORM_URL_KEYWORDS {
            if content.contains(fragment) {
                return name;
            }
        }
        for (name, _) in SOURCE_CONFIGS {
            if name.len() >= 4 && content.contains(name) {
                return name;
            }
        }
    }

    GENERIC_SOURCE
}

fn global_config(name: &str) -> &'static SourceQualityConfig {
    SOURCE_CONFIGS
        .iter()
        .find(|(n, _)| *n == name)
        .map_or_else(
            || {
                &SOURCE_CONFIGS
                    .iter()
                    .find(|(n, _)| *n == GENERIC_SOURCE)
                    .expect("generic source config present")
                    .1
            },
            |(_, cfg)| cfg,
        )
}

/// Look up the global quality adjustment for a source.
#[must_use]
pub fn quality_adjustment(
    source: Option<&str>,
    url: Option<&str>,
    content: Option<&str>,
) -> QualityAdjustment {
    let normalized = normalize_source(source, url, content);
    let config = global_config(normalized);
    QualityAdjustment {
        source: normalized.to_string(),
        tier: config.tier,
        multiplier: config.multiplier,
        reasoning: format!(
            "{normalized}: {} ({}, x{:.2})",
            config.description, config.tier, config.multiplier
        ),
    }
}

/// Multiply `base_score` by the source's quality multiplier, clamped to 1.
#[must_use]
pub fn apply_quality_adjustment(
    base_score: f32,
    source: Option<&str>,
    url: Option<&str>,
    content: Option<&str>,
) -> f32 {
    let adjustment = quality_adjustment(source, url, content);
    (base_score * adjustment.multiplier).min(1.0)
}

/// Profile-aware adjustment: the profile's own tier lists take precedence
/// over the global table; the global table is the fallback.
#[must_use]
pub fn profile_aware_quality_adjustment(
    source: Option<&str>,
    profile: BusinessProfileType,
    url: Option<&str>,
    content: Option<&str>,
) -> QualityAdjustment {
    let normalized = normalize_source(source, url, content);
    let weights = source_weights(profile);

    let profile_tier = if weights.tier1_sources.contains(&normalized) {
        Some((SourceTier::Tier1, PROFILE_TIER1_MULTIPLIER))
    } else if weights.tier2_sources.contains(&normalized) {
        Some((SourceTier::Tier2, PROFILE_TIER2_MULTIPLIER))
    } else if weights.tier3_sources.contains(&normalized) {
        Some((SourceTier::Tier3, PROFILE_TIER3_MULTIPLIER))
    } else {
        None
    };

    match profile_tier {
        Some((tier, multiplier)) => QualityAdjustment {
            source: normalized.to_string(),
            tier,
            multiplier,
            reasoning: format!("{normalized} is {tier} for {profile} (x{multiplier:.2})"),
        },
        None => quality_adjustment(source, url, content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_match_takes_precedence_over_source() {
        let normalized = normalize_source(
            Some("yelp"),
            Some("https://www.g2.com/products/acme/reviews"),
            None,
        );
        assert_eq!(normalized, "g2");
    }

    #[test]
    fn source_string_matches_when_no_url() {
        assert_eq!(normalize_source(Some("Capterra reviews"), None, None), "capterra");
    }

    #[test]
    fn content_sniffing_is_last_resort() {
        let normalized = normalize_source(None, None, Some("saw this on trustpilot yesterday"));
        assert_eq!(normalized, "trustpilot");
    }

    #[test]
    fn unknown_everything_falls_back_to_generic() {
        let adjustment = quality_adjustment(Some("random blog"), None, None);
        assert_eq!(adjustment.source, "generic");
        assert_eq!(adjustment.tier, SourceTier::Tier3);
        assert!((adjustment.multiplier - 0.7).abs() < 1e-6);
    }

    #[test]
    fn normalization_is_idempotent() {
        let url = Some("https://reddit.com/r/smallbusiness/comments/abc");
        assert_eq!(
            normalize_source(None, url, None),
            normalize_source(None, url, None)
        );
    }

    #[test]
    fn applied_adjustment_never_exceeds_one() {
        // g2 multiplies by 1.2; a high base score must still clamp.
        let adjusted = apply_quality_adjustment(0.95, Some("g2"), None, None);
        assert!(adjusted <= 1.0);
    }

    #[test]
    fn profile_tier1_override_boosts() {
        let adjustment = profile_aware_quality_adjustment(
            Some("yelp"),
            BusinessProfileType::LocalServiceB2c,
            None,
            None,
        );
        assert_eq!(adjustment.tier, SourceTier::Tier1);
        assert!((adjustment.multiplier - 1.3).abs() < 1e-6);
    }

    #[test]
    fn profile_tier3_override_penalizes() {
        // g2 is globally tier1 but a local service profile distrusts it.
        let adjustment = profile_aware_quality_adjustment(
            Some("g2"),
            BusinessProfileType::LocalServiceB2c,
            None,
            None,
        );
        assert_eq!(adjustment.tier, SourceTier::Tier3);
        assert!((adjustment.multiplier - 0.6).abs() < 1e-6);
    }

    #[test]
    fn profile_miss_falls_back_to_global_table() {
        // capterra is not in the global-ecommerce override lists.
        let adjustment = profile_aware_quality_adjustment(
            Some("capterra"),
            BusinessProfileType::GlobalEcommerceB2c,
            None,
            None,
        );
        assert_eq!(adjustment.tier, SourceTier::Tier1);
        assert!((adjustment.multiplier - 1.2).abs() < 1e-6);
    }
}
