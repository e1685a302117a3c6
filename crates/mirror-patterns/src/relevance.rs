//! Per-profile relevance-scoring configuration.

use mirror_core::BusinessProfileType;

/// Static relevance config for one business profile.
#[derive(Debug, Clone, Copy)]
pub struct ProfileRelevanceConfig {
    pub relevant_keywords: &'static [&'static str],
    pub noise_keywords: &'static [&'static str],
    pub relevant_topics: &'static [&'static str],
    pub irrelevant_topics: &'static [&'static str],
    /// Multiplier applied to the raw relevance score, in `(0, 1.2]`.
    pub base_weight: f32,
}

/// Look up the relevance config for a profile. Total over the enum, so
/// every profile is guaranteed a table entry.
#[must_use]
pub fn relevance_config(profile: BusinessProfileType) -> &'static ProfileRelevanceConfig {
    match profile {
        BusinessProfileType::LocalServiceB2c => &LOCAL_SERVICE_B2C,
        BusinessProfileType::LocalServiceB2b => &LOCAL_SERVICE_B2B,
        BusinessProfileType::RegionalRetailB2c => &REGIONAL_RETAIL_B2C,
        BusinessProfileType::NationalSaasB2b => &NATIONAL_SAAS_B2B,
        BusinessProfileType::NationalEcommerceB2c => &NATIONAL_ECOMMERCE_B2C,
        BusinessProfileType::GlobalSaasB2b => &GLOBAL_SAAS_B2B,
        BusinessProfileType::GlobalEcommerceB2c => &GLOBAL_ECOMMERCE_B2C,
    }
}

static LOCAL_SERVICE_B2C: ProfileRelevanceConfig = ProfileRelevanceConfig {
    relevant_keywords: &[
        "local", "neighborhood", "appointment", "estimate", "homeowner", "technician",
        "same-day", "reviews", "referral", "service call",
    ],
    noise_keywords: &[
        "enterprise", "api", "saas", "venture capital", "ipo", "series a",
    ],
    relevant_topics: &["home services", "local search", "word of mouth"],
    irrelevant_topics: &["developer tooling", "global expansion"],
    base_weight: 1.0,
};

static LOCAL_SERVICE_B2B: ProfileRelevanceConfig = ProfileRelevanceConfig {
    relevant_keywords: &[
        "commercial", "contract", "invoice", "facilities", "office", "vendor",
        "account manager", "net 30", "quote", "retainer",
    ],
    noise_keywords: &["homeowner", "diy", "family", "consumer app"],
    relevant_topics: &["b2b services", "procurement", "facilities management"],
    irrelevant_topics: &["consumer retail", "gaming"],
    base_weight: 1.0,
};

static REGIONAL_RETAIL_B2C: ProfileRelevanceConfig = ProfileRelevanceConfig {
    relevant_keywords: &[
        "store", "location", "in stock", "shoppers", "foot traffic", "loyalty",
        "seasonal", "inventory", "checkout", "curbside",
    ],
    noise_keywords: &["saas", "api", "enterprise software", "devops"],
    relevant_topics: &["retail", "merchandising", "local marketing"],
    irrelevant_topics: &["cloud infrastructure", "b2b sales"],
    base_weight: 0.95,
};

static NATIONAL_SAAS_B2B: ProfileRelevanceConfig = ProfileRelevanceConfig {
    relevant_keywords: &[
        "saas", "subscription", "onboarding", "integration", "churn", "trial",
        "pricing tier", "crm", "workflow", "demo",
    ],
    noise_keywords: &["walk-in", "storefront", "haircut", "menu", "homeowner"],
    relevant_topics: &["software buying", "product reviews", "team productivity"],
    irrelevant_topics: &["home improvement", "local dining"],
    base_weight: 1.05,
};

static NATIONAL_ECOMMERCE_B2C: ProfileRelevanceConfig = ProfileRelevanceConfig {
    relevant_keywords: &[
        "shipping", "returns", "checkout", "cart", "unboxing", "dtc", "promo code",
        "fulfillment", "order", "reviews",
    ],
    noise_keywords: &["enterprise contract", "rfp", "on-premise", "consulting"],
    relevant_topics: &["online shopping", "brand loyalty", "customer experience"],
    irrelevant_topics: &["b2b procurement", "legal services"],
    base_weight: 1.0,
};

static GLOBAL_SAAS_B2B: ProfileRelevanceConfig = ProfileRelevanceConfig {
    relevant_keywords: &[
        "api", "sdk", "uptime", "sla", "compliance", "soc 2", "gdpr", "latency",
        "self-hosted", "enterprise plan",
    ],
    noise_keywords: &["walk-in", "local shop", "homeowner", "curbside"],
    relevant_topics: &["infrastructure", "security", "developer experience"],
    irrelevant_topics: &["local services", "brick and mortar retail"],
    base_weight: 1.1,
};

static GLOBAL_ECOMMERCE_B2C: ProfileRelevanceConfig = ProfileRelevanceConfig {
    relevant_keywords: &[
        "international shipping", "customs", "duties", "exchange rate", "marketplace",
        "cross-border", "tracking", "import", "global brand", "localized",
    ],
    noise_keywords: &["local pickup", "in-person", "service call", "office visit"],
    relevant_topics: &["global retail", "logistics", "marketplaces"],
    irrelevant_topics: &["local services", "b2b software"],
    base_weight: 1.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_has_a_config() {
        for profile in BusinessProfileType::ALL {
            let cfg = relevance_config(profile);
            assert!(!cfg.relevant_keywords.is_empty(), "{profile}: no keywords");
            assert!(!cfg.noise_keywords.is_empty(), "{profile}: no noise list");
            assert!(
                cfg.base_weight > 0.0 && cfg.base_weight <= 1.2,
                "{profile}: base_weight out of range"
            );
        }
    }
}
