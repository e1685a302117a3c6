//! Pattern sets for the Reddit SMB signal extractor: recommendation
//! requests, pain points, switching intent, and urgency phrasing.

use serde::{Deserialize, Serialize};

/// What kind of thing a recommendation request is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Software,
    Service,
    Agency,
    General,
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RequestType::Software => "software",
            RequestType::Service => "service",
            RequestType::Agency => "agency",
            RequestType::General => "general",
        };
        f.write_str(s)
    }
}

/// Weighted recommendation-request pattern. The highest-weight match is
/// kept; requests below the emit threshold are dropped.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationPattern {
    pub pattern: &'static str,
    pub weight: f32,
    pub request_type: RequestType,
}

/// Minimum pattern weight for a recommendation request to be emitted.
pub const RECOMMENDATION_EMIT_THRESHOLD: f32 = 0.6;

pub const RECOMMENDATION_PATTERNS: &[RecommendationPattern] = &[
    RecommendationPattern {
        pattern: r"\brecommend (?:a |an |some )?(?:good |decent |solid |reliable )?(?:crm|software|app|tool|platform|pos|erp|saas)\b",
        weight: 0.95,
        request_type: RequestType::Software,
    },
    RecommendationPattern {
        pattern: r"\bbest (?:crm|software|app|tool|platform) for (?:a |my )?small business\b",
        weight: 0.9,
        request_type: RequestType::Software,
    },
    RecommendationPattern {
        pattern: r"\brecommend (?:a |an )?(?:good |reliable )?(?:accountant|bookkeeper|lawyer|plumber|electrician|contractor)\b",
        weight: 0.9,
        request_type: RequestType::Service,
    },
    RecommendationPattern {
        pattern: r"\brecommend (?:a |an )?(?:good )?(?:marketing|seo|design|ad|ppc) (?:agency|firm)\b",
        weight: 0.85,
        request_type: RequestType::Agency,
    },
    RecommendationPattern {
        pattern: r"\b(?:can|could) (?:anyone|someone|anybody|you) recommend\b",
        weight: 0.85,
        request_type: RequestType::General,
    },
    RecommendationPattern {
        pattern: r"\blooking for recommendations\b",
        weight: 0.8,
        request_type: RequestType::General,
    },
    RecommendationPattern {
        pattern: r"\bany (?:recommendations|suggestions) for\b",
        weight: 0.8,
        request_type: RequestType::General,
    },
    RecommendationPattern {
        pattern: r"\bwhat (?:do you|does everyone) (?:use|recommend) for\b",
        weight: 0.75,
        request_type: RequestType::General,
    },
];

/// Pain-point pattern with its category tag. First match wins.
#[derive(Debug, Clone, Copy)]
pub struct PainPointPattern {
    pub pattern: &'static str,
    pub category: &'static str,
}

pub const PAIN_POINT_PATTERNS: &[PainPointPattern] = &[
    PainPointPattern {
        pattern: r"\b(?:way |far )?too expensive\b",
        category: "pricing",
    },
    PainPointPattern {
        pattern: r"\bpric(?:e|ing) (?:keeps?|kept|is) (?:going up|increasing|insane|ridiculous)\b",
        category: "pricing",
    },
    PainPointPattern {
        pattern: r"\bwast(?:e|ing) (?:so much )?time\b",
        category: "efficiency",
    },
    PainPointPattern {
        pattern: r"\bmanually (?:entering|tracking|updating|copying)\b",
        category: "efficiency",
    },
    PainPointPattern {
        pattern: r"\bsupport (?:is|has been|was) (?:terrible|awful|useless|nonexistent)\b",
        category: "support",
    },
    PainPointPattern {
        pattern: r"\bnever (?:got|received|heard) (?:a|back)\b",
        category: "support",
    },
    PainPointPattern {
        pattern: r"\bkeeps? (?:crashing|breaking|going down|losing)\b",
        category: "reliability",
    },
    PainPointPattern {
        pattern: r"\bso (?:buggy|unreliable|flaky)\b",
        category: "reliability",
    },
    PainPointPattern {
        pattern: r"\btoo (?:complicated|complex|hard) to (?:use|set up|learn)\b",
        category: "usability",
    },
    PainPointPattern {
        pattern: r"\bsteep learning curve\b",
        category: "usability",
    },
    PainPointPattern {
        pattern: r"\bdoesn'?t integrate\b",
        category: "integration",
    },
    PainPointPattern {
        pattern: r"\bmissing (?:basic |key )?features?\b",
        category: "features",
    },
];

/// How soon a poster intends to switch away from their current tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchingUrgency {
    Immediate,
    Soon,
    Researching,
}

impl std::fmt::Display for SwitchingUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SwitchingUrgency::Immediate => "immediate",
            SwitchingUrgency::Soon => "soon",
            SwitchingUrgency::Researching => "researching",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SwitchingPattern {
    pub pattern: &'static str,
    pub urgency: SwitchingUrgency,
}

pub const SWITCHING_PATTERNS: &[SwitchingPattern] = &[
    SwitchingPattern {
        pattern: r"\bcancel(?:l?ing|l?ed) (?:my|our) (?:subscription|account|contract)\b",
        urgency: SwitchingUrgency::Immediate,
    },
    SwitchingPattern {
        pattern: r"\bswitching (?:away )?(?:from \w+ )?(?:this week|today|asap|immediately)\b",
        urgency: SwitchingUrgency::Immediate,
    },
    SwitchingPattern {
        pattern: r"\b(?:i'?m|we'?re) done with \w+\b",
        urgency: SwitchingUrgency::Immediate,
    },
    SwitchingPattern {
        pattern: r"\blooking to switch\b",
        urgency: SwitchingUrgency::Soon,
    },
    SwitchingPattern {
        pattern: r"\bthinking (?:about|of) (?:switching|leaving|moving off)\b",
        urgency: SwitchingUrgency::Soon,
    },
    SwitchingPattern {
        pattern: r"\bwhen (?:my|our) contract (?:ends|expires|is up)\b",
        urgency: SwitchingUrgency::Soon,
    },
    SwitchingPattern {
        pattern: r"\balternatives? to \w+\b",
        urgency: SwitchingUrgency::Researching,
    },
    SwitchingPattern {
        pattern: r"\bcompar(?:e|ing) \w+ (?:vs|versus|against)\b",
        urgency: SwitchingUrgency::Researching,
    },
    SwitchingPattern {
        pattern: r"\bis there (?:anything|something) better than\b",
        urgency: SwitchingUrgency::Researching,
    },
];

/// Urgency phrasing for recommendation requests, highest tier first.
pub const HIGH_URGENCY_TERMS: &[&str] = &["asap", "urgent", "immediately", "today", "this week"];
pub const MEDIUM_URGENCY_TERMS: &[&str] = &["soon", "this month", "next week", "next month"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_weights_meet_emit_threshold() {
        for p in RECOMMENDATION_PATTERNS {
            assert!(
                p.weight >= RECOMMENDATION_EMIT_THRESHOLD,
                "pattern below emit threshold would never fire: {}",
                p.pattern
            );
        }
    }

    #[test]
    fn pain_point_categories_are_nonempty() {
        for p in PAIN_POINT_PATTERNS {
            assert!(!p.category.is_empty());
        }
    }
}
