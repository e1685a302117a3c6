//! SMB classification tables: company size, decision-maker role, and
//! budget range, plus the segment mappings derived from size.
//!
//! Labels are defined here next to the patterns that select them; the
//! `Unknown` member of each enum is the documented no-match sentinel, so
//! callers never see an Option.

use mirror_core::BusinessProfileType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Solo,
    SmallTeam,
    Growing,
    Established,
    Enterprise,
    Unknown,
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompanySize::Solo => "solo",
            CompanySize::SmallTeam => "small-team",
            CompanySize::Growing => "growing",
            CompanySize::Established => "established",
            CompanySize::Enterprise => "enterprise",
            CompanySize::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionRole {
    Owner,
    Founder,
    CLevel,
    Director,
    Manager,
    Employee,
    Freelancer,
    Unknown,
}

impl std::fmt::Display for DecisionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DecisionRole::Owner => "owner",
            DecisionRole::Founder => "founder",
            DecisionRole::CLevel => "c-level",
            DecisionRole::Director => "director",
            DecisionRole::Manager => "manager",
            DecisionRole::Employee => "employee",
            DecisionRole::Freelancer => "freelancer",
            DecisionRole::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetRange {
    Free,
    Micro,
    Small,
    Medium,
    Growth,
    Enterprise,
    Unknown,
}

impl std::fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BudgetRange::Free => "free",
            BudgetRange::Micro => "micro",
            BudgetRange::Small => "small",
            BudgetRange::Medium => "medium",
            BudgetRange::Growth => "growth",
            BudgetRange::Enterprise => "enterprise",
            BudgetRange::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmbSegment {
    Solopreneur,
    MicroBusiness,
    SmallBusiness,
    GrowingSmb,
    MidMarket,
    Unknown,
}

impl std::fmt::Display for SmbSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SmbSegment::Solopreneur => "solopreneur",
            SmbSegment::MicroBusiness => "micro-business",
            SmbSegment::SmallBusiness => "small-business",
            SmbSegment::GrowingSmb => "growing-smb",
            SmbSegment::MidMarket => "mid-market",
            SmbSegment::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// One company-size pattern group. Highest-confidence matching group wins;
/// further matches for the same label accumulate as evidence signals.
#[derive(Debug, Clone, Copy)]
pub struct SizePatternGroup {
    pub size: CompanySize,
    pub patterns: &'static [&'static str],
    pub confidence: f32,
    pub employee_range: &'static str,
}

pub const SIZE_PATTERNS: &[SizePatternGroup] = &[
    SizePatternGroup {
        size: CompanySize::Solo,
        patterns: &[
            r"\bsolo(?:preneur)?\b",
            r"\bjust me\b",
            r"\bone[- ]person\b",
            r"\bby myself\b",
            r"\bside hustle\b",
            r"\bi run everything\b",
        ],
        confidence: 0.8,
        employee_range: "1",
    },
    SizePatternGroup {
        size: CompanySize::SmallTeam,
        patterns: &[
            r"\bteam of (?:[2-9]|two|three|four|five)\b",
            r"\b[2-9][- ]person team\b",
            r"\bsmall (?:shop|team|business)\b",
            r"\bfamily[- ](?:owned|run)\b",
            r"\bmom[- ]and[- ]pop\b",
            r"\b(?:[2-9]|10) employees\b",
        ],
        confidence: 0.8,
        employee_range: "2-10",
    },
    SizePatternGroup {
        size: CompanySize::Growing,
        patterns: &[
            r"\bteam of (?:1[1-9]|[2-4][0-9]|50)\b",
            r"\b(?:1[1-9]|[2-4][0-9]|50) employees\b",
            r"\bgrowing (?:team|company|business)\b",
            r"\bjust hired\b",
            r"\bscaling (?:up|the team|fast)\b",
        ],
        confidence: 0.75,
        employee_range: "11-50",
    },
    SizePatternGroup {
        size: CompanySize::Established,
        patterns: &[
            r"\b(?:5[1-9]|[6-9][0-9]|1[0-9]{2}|200) employees\b",
            r"\bestablished (?:company|business)\b",
            r"\bmultiple (?:locations|offices)\b",
            r"\bseveral departments\b",
        ],
        confidence: 0.75,
        employee_range: "51-200",
    },
    SizePatternGroup {
        size: CompanySize::Enterprise,
        patterns: &[
            r"\b(?:[2-9][0-9]{2}|[0-9]{4,}) employees\b",
            r"\bfortune 500\b",
            r"\blarge enterprise\b",
            r"\bglobal offices\b",
        ],
        confidence: 0.7,
        employee_range: "200+",
    },
];

/// One decision-maker pattern group. Authority flags are baked into the
/// pattern definition, never inferred from other matches.
#[derive(Debug, Clone, Copy)]
pub struct RolePatternGroup {
    pub role: DecisionRole,
    pub patterns: &'static [&'static str],
    pub confidence: f32,
    pub has_budget_authority: bool,
    pub is_final_decision_maker: bool,
}

pub const ROLE_PATTERNS: &[RolePatternGroup] = &[
    RolePatternGroup {
        role: DecisionRole::Owner,
        patterns: &[
            r"\b(?:i'?m|i am) the owner\b",
            r"\bowner of\b",
            r"\bbusiness owner\b",
            r"\bmy (?:\w+ )?(?:shop|store|business|company|agency|firm|practice)\b",
            r"\bown a (?:\w+ )?(?:shop|store|business|company)\b",
        ],
        confidence: 0.85,
        has_budget_authority: true,
        is_final_decision_maker: true,
    },
    RolePatternGroup {
        role: DecisionRole::Founder,
        patterns: &[
            r"\bco[- ]?founder\b",
            r"\bfounder\b",
            r"\bstarted (?:my|this|the) (?:company|business|startup)\b",
        ],
        confidence: 0.85,
        has_budget_authority: true,
        is_final_decision_maker: true,
    },
    RolePatternGroup {
        role: DecisionRole::CLevel,
        patterns: &[
            r"\bc[et]o\b",
            r"\bc[fm]o\b",
            r"\bcoo\b",
            r"\bchief \w+ officer\b",
        ],
        confidence: 0.8,
        has_budget_authority: true,
        is_final_decision_maker: true,
    },
    RolePatternGroup {
        role: DecisionRole::Director,
        patterns: &[
            r"\bdirector of \w+\b",
            r"\bvice president\b",
            r"\bvp of \w+\b",
            r"\bhead of \w+\b",
        ],
        confidence: 0.75,
        has_budget_authority: true,
        is_final_decision_maker: false,
    },
    RolePatternGroup {
        role: DecisionRole::Manager,
        patterns: &[
            r"\b(?:office|operations|marketing|sales|project) manager\b",
            r"\bteam lead\b",
            r"\bsupervisor\b",
        ],
        confidence: 0.7,
        has_budget_authority: false,
        is_final_decision_maker: false,
    },
    RolePatternGroup {
        role: DecisionRole::Freelancer,
        patterns: &[
            r"\bfreelancer?\b",
            r"\bindependent contractor\b",
            r"\bself[- ]employed\b",
        ],
        confidence: 0.7,
        has_budget_authority: true,
        is_final_decision_maker: true,
    },
    RolePatternGroup {
        role: DecisionRole::Employee,
        patterns: &[
            r"\bmy (?:boss|manager) (?:wants|asked|needs)\b",
            r"\bwhere i work\b",
            r"\bi work (?:at|for)\b",
            r"\bour company is looking\b",
        ],
        confidence: 0.6,
        has_budget_authority: false,
        is_final_decision_maker: false,
    },
];

/// Bio-agreement bonus applied when the author bio classifies to the same
/// role as the body text. Capped so confidence stays within `[0, 1]`.
pub const ROLE_BIO_AGREEMENT_BONUS: f32 = 0.1;

/// One budget pattern group for descriptive phrasing (no dollar amount).
#[derive(Debug, Clone, Copy)]
pub struct BudgetPatternGroup {
    pub range: BudgetRange,
    pub patterns: &'static [&'static str],
    pub confidence: f32,
}

pub const BUDGET_PATTERNS: &[BudgetPatternGroup] = &[
    BudgetPatternGroup {
        range: BudgetRange::Free,
        patterns: &[
            r"\bfree (?:plan|tier|option|tool|version)\b",
            r"\bno budget\b",
            r"\bcan'?t (?:afford|pay for) (?:anything|it)\b",
        ],
        confidence: 0.8,
    },
    BudgetPatternGroup {
        range: BudgetRange::Micro,
        patterns: &[
            r"\bshoestring\b",
            r"\bvery (?:small|tight) budget\b",
            r"\bbootstrapp(?:ed|ing)\b",
        ],
        confidence: 0.7,
    },
    BudgetPatternGroup {
        range: BudgetRange::Small,
        patterns: &[
            r"\bsmall budget\b",
            r"\ba few hundred (?:dollars|bucks)?\b",
            r"\bcheap(?:er)? (?:option|plan|alternative)\b",
        ],
        confidence: 0.7,
    },
    BudgetPatternGroup {
        range: BudgetRange::Medium,
        patterns: &[
            r"\bmid[- ]range (?:budget|pricing)\b",
            r"\breasonable (?:budget|price)\b",
        ],
        confidence: 0.65,
    },
    BudgetPatternGroup {
        range: BudgetRange::Growth,
        patterns: &[
            r"\bwilling to invest\b",
            r"\bserious budget\b",
            r"\bfour figures\b",
        ],
        confidence: 0.65,
    },
    BudgetPatternGroup {
        range: BudgetRange::Enterprise,
        patterns: &[
            r"\benterprise (?:pricing|budget|plan)\b",
            r"\bsix figures\b",
            r"\bbudget (?:is not|isn'?t) (?:an issue|a problem)\b",
        ],
        confidence: 0.6,
    },
];

/// Dollar-amount extractor. Group 1 is the numeric amount (comma-grouped
/// or plain digits), group 2 an optional `k` suffix.
pub const BUDGET_AMOUNT_PATTERN: &str =
    r"\$\s?(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s*(k)?\b";

/// Confidence assigned when an explicit dollar amount is found.
pub const BUDGET_AMOUNT_CONFIDENCE: f32 = 0.85;

/// Monthly-amount boundaries for mapping a dollar figure to a range.
/// `(upper_bound_exclusive, range)`; amounts above the last bound are
/// enterprise.
pub const BUDGET_AMOUNT_BOUNDS: &[(f64, BudgetRange)] = &[
    (1.0, BudgetRange::Free),
    (50.0, BudgetRange::Micro),
    (250.0, BudgetRange::Small),
    (1_000.0, BudgetRange::Medium),
    (5_000.0, BudgetRange::Growth),
];

/// Budget-constraint phrases, scanned independently of the range match.
pub const BUDGET_CONSTRAINT_PATTERNS: &[&str] = &[
    r"\bneed to justify\b",
    r"\bhard to justify\b",
    r"\bboss (?:needs|wants|has) to approve\b",
    r"\bevery dollar counts\b",
    r"\bcash flow is tight\b",
    r"\btight this (?:month|quarter|year)\b",
];

/// Direct company-size -> segment lookup.
#[must_use]
pub fn segment_for_size(size: CompanySize) -> SmbSegment {
    match size {
        CompanySize::Solo => SmbSegment::Solopreneur,
        CompanySize::SmallTeam => SmbSegment::MicroBusiness,
        CompanySize::Growing => SmbSegment::SmallBusiness,
        CompanySize::Established => SmbSegment::GrowingSmb,
        CompanySize::Enterprise => SmbSegment::MidMarket,
        CompanySize::Unknown => SmbSegment::Unknown,
    }
}

/// Candidate profiles per segment, most likely first.
#[must_use]
pub fn segment_profiles(segment: SmbSegment) -> &'static [BusinessProfileType] {
    match segment {
        SmbSegment::Solopreneur => &[
            BusinessProfileType::LocalServiceB2c,
            BusinessProfileType::LocalServiceB2b,
        ],
        SmbSegment::MicroBusiness => &[
            BusinessProfileType::LocalServiceB2b,
            BusinessProfileType::LocalServiceB2c,
            BusinessProfileType::RegionalRetailB2c,
        ],
        SmbSegment::SmallBusiness => &[
            BusinessProfileType::RegionalRetailB2c,
            BusinessProfileType::LocalServiceB2b,
            BusinessProfileType::NationalEcommerceB2c,
        ],
        SmbSegment::GrowingSmb => &[
            BusinessProfileType::NationalSaasB2b,
            BusinessProfileType::NationalEcommerceB2c,
        ],
        SmbSegment::MidMarket => &[
            BusinessProfileType::NationalSaasB2b,
            BusinessProfileType::GlobalSaasB2b,
        ],
        SmbSegment::Unknown => &[],
    }
}

/// Base actionability contribution per segment.
#[must_use]
pub fn segment_actionability_base(segment: SmbSegment) -> f32 {
    match segment {
        SmbSegment::Solopreneur | SmbSegment::MidMarket => 0.15,
        SmbSegment::MicroBusiness | SmbSegment::SmallBusiness => 0.25,
        SmbSegment::GrowingSmb => 0.2,
        SmbSegment::Unknown => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_team_maps_to_micro_business() {
        assert_eq!(
            segment_for_size(CompanySize::SmallTeam),
            SmbSegment::MicroBusiness
        );
    }

    #[test]
    fn unknown_size_maps_to_unknown_segment() {
        assert_eq!(segment_for_size(CompanySize::Unknown), SmbSegment::Unknown);
    }

    #[test]
    fn every_known_segment_has_candidate_profiles() {
        for segment in [
            SmbSegment::Solopreneur,
            SmbSegment::MicroBusiness,
            SmbSegment::SmallBusiness,
            SmbSegment::GrowingSmb,
            SmbSegment::MidMarket,
        ] {
            assert!(!segment_profiles(segment).is_empty(), "{segment}");
        }
    }

    #[test]
    fn labels_serialize_kebab_case() {
        let json = serde_json::to_string(&CompanySize::SmallTeam).unwrap();
        assert_eq!(json, "\"small-team\"");
        let json = serde_json::to_string(&SmbSegment::MicroBusiness).unwrap();
        assert_eq!(json, "\"micro-business\"");
        let json = serde_json::to_string(&DecisionRole::CLevel).unwrap();
        assert_eq!(json, "\"c-level\"");
    }
}
