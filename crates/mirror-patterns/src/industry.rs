//! Industry-keyword override rules.
//!
//! When a corpus hits `min_hits` keywords from one rule, that rule's
//! profile wins outright and the scope/customer/offering composition is
//! bypassed. The global-SaaS rule triggers on a single hit: its keywords
//! only appear in that market.

use mirror_core::BusinessProfileType;

#[derive(Debug, Clone, Copy)]
pub struct IndustryRule {
    pub profile: BusinessProfileType,
    pub keywords: &'static [&'static str],
    pub min_hits: usize,
}

pub const INDUSTRY_RULES: &[IndustryRule] = &[
    IndustryRule {
        profile: BusinessProfileType::GlobalSaasB2b,
        keywords: &[
            "devops",
            "observability",
            "cybersecurity",
            "developer tools",
            "api platform",
            "machine learning",
            "fintech infrastructure",
            "compliance automation",
            "data pipeline",
        ],
        min_hits: 1,
    },
    IndustryRule {
        profile: BusinessProfileType::NationalSaasB2b,
        keywords: &[
            "crm",
            "project management",
            "payroll",
            "hr software",
            "accounting software",
            "marketing automation",
            "help desk",
            "field service software",
        ],
        min_hits: 2,
    },
    IndustryRule {
        profile: BusinessProfileType::LocalServiceB2c,
        keywords: &[
            "plumbing",
            "hvac",
            "landscaping",
            "roofing",
            "salon",
            "dental",
            "chiropractic",
            "pest control",
            "auto repair",
        ],
        min_hits: 2,
    },
    IndustryRule {
        profile: BusinessProfileType::LocalServiceB2b,
        keywords: &[
            "commercial cleaning",
            "office catering",
            "managed it",
            "commercial hvac",
            "business insurance",
            "b2b logistics",
        ],
        min_hits: 2,
    },
    IndustryRule {
        profile: BusinessProfileType::RegionalRetailB2c,
        keywords: &[
            "grocery",
            "boutique",
            "furniture store",
            "garden center",
            "convenience store",
            "regional chain",
        ],
        min_hits: 2,
    },
    IndustryRule {
        profile: BusinessProfileType::NationalEcommerceB2c,
        keywords: &[
            "direct-to-consumer",
            "dtc",
            "online store",
            "subscription box",
            "marketplace seller",
            "fulfillment",
        ],
        min_hits: 2,
    },
    IndustryRule {
        profile: BusinessProfileType::GlobalEcommerceB2c,
        keywords: &[
            "cross-border commerce",
            "global marketplace",
            "international shipping",
            "duty-free",
            "multi-currency checkout",
        ],
        min_hits: 2,
    },
];
