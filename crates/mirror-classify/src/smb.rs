//! SMB classification: company size, decision-maker role, and budget range
//! combined into a segment with an overall confidence.

use mirror_core::BusinessProfileType;
use mirror_patterns::smb::{
    segment_actionability_base, segment_for_size, segment_profiles, BudgetRange, CompanySize,
    DecisionRole, SmbSegment, BUDGET_AMOUNT_BOUNDS, BUDGET_AMOUNT_CONFIDENCE,
    BUDGET_AMOUNT_PATTERN, BUDGET_CONSTRAINT_PATTERNS, BUDGET_PATTERNS, ROLE_BIO_AGREEMENT_BONUS,
    ROLE_PATTERNS, SIZE_PATTERNS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One piece of text to classify, with optional context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmbInput {
    pub text: String,
    /// Surrounding thread/context text, weighted the same as `text`.
    pub context: Option<String>,
    /// Author bio, classified independently for role agreement.
    pub author_info: Option<String>,
    /// Platform the text came from, e.g. `g2` or `yelp`.
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySizeResult {
    pub size: CompanySize,
    pub confidence: f32,
    pub signals: Vec<String>,
    pub employee_range: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionMakerResult {
    pub role: DecisionRole,
    pub confidence: f32,
    pub signals: Vec<String>,
    pub has_budget_authority: bool,
    pub is_final_decision_maker: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResult {
    pub range: BudgetRange,
    pub confidence: f32,
    pub signals: Vec<String>,
    /// Monthly dollar amount, when the text states one.
    pub mentioned_amount: Option<f64>,
    pub constraints: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmbClassification {
    pub segment: SmbSegment,
    pub company_size: CompanySizeResult,
    pub decision_maker: DecisionMakerResult,
    pub budget: BudgetResult,
    /// Weighted average: 0.4 size + 0.35 decision maker + 0.25 budget.
    pub overall_confidence: f32,
    pub recommended_profile: Option<BusinessProfileType>,
    pub reasoning: String,
}

const SIZE_WEIGHT: f32 = 0.4;
const DECISION_MAKER_WEIGHT: f32 = 0.35;
const BUDGET_WEIGHT: f32 = 0.25;

struct CompiledGroup<L: Copy> {
    label: L,
    regexes: Vec<Regex>,
    confidence: f32,
}

/// Compiled SMB classifier. Build once, reuse across calls.
pub struct SmbClassifier {
    size_groups: Vec<(CompiledGroup<CompanySize>, &'static str)>,
    role_groups: Vec<(CompiledGroup<DecisionRole>, bool, bool)>,
    budget_groups: Vec<CompiledGroup<BudgetRange>>,
    amount_re: Regex,
    constraint_res: Vec<Regex>,
}

fn compile_patterns(patterns: &'static [&'static str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid smb pattern regex"))
        .collect()
}

impl SmbClassifier {
    #[must_use]
    pub fn new() -> Self {
        let size_groups = SIZE_PATTERNS
            .iter()
            .map(|g| {
                (
                    CompiledGroup {
                        label: g.size,
                        regexes: compile_patterns(g.patterns),
                        confidence: g.confidence,
                    },
                    g.employee_range,
                )
            })
            .collect();
        let role_groups = ROLE_PATTERNS
            .iter()
            .map(|g| {
                (
                    CompiledGroup {
                        label: g.role,
                        regexes: compile_patterns(g.patterns),
                        confidence: g.confidence,
                    },
                    g.has_budget_authority,
                    g.is_final_decision_maker,
                )
            })
            .collect();
        let budget_groups = BUDGET_PATTERNS
            .iter()
            .map(|g| CompiledGroup {
                label: g.range,
                regexes: compile_patterns(g.patterns),
                confidence: g.confidence,
            })
            .collect();

        Self {
            size_groups,
            role_groups,
            budget_groups,
            amount_re: Regex::new(BUDGET_AMOUNT_PATTERN).expect("valid budget amount regex"),
            constraint_res: compile_patterns(BUDGET_CONSTRAINT_PATTERNS),
        }
    }

    /// Classify one text. Always returns a fully-populated result; when a
    /// sub-classifier finds nothing its label is the `unknown` sentinel at
    /// zero confidence.
    #[must_use]
    pub fn classify(&self, input: &SmbInput) -> SmbClassification {
        let mut combined = input.text.clone();
        if let Some(context) = &input.context {
            combined.push(' ');
            combined.push_str(context);
        }
        let combined = combined.to_lowercase();
        let bio = input.author_info.as_deref().map(str::to_lowercase);

        let company_size = self.classify_size(&combined, bio.as_deref());
        let decision_maker = self.classify_role(&combined, bio.as_deref());
        let budget = self.classify_budget(&combined);

        let segment = segment_for_size(company_size.size);
        let recommended_profile =
            recommend_profile(segment, input.platform.as_deref());

        let overall_confidence = SIZE_WEIGHT * company_size.confidence
            + DECISION_MAKER_WEIGHT * decision_maker.confidence
            + BUDGET_WEIGHT * budget.confidence;

        let reasoning = format!(
            "segment {segment}: size {} ({:.2}), role {} ({:.2}), budget {} ({:.2})",
            company_size.size,
            company_size.confidence,
            decision_maker.role,
            decision_maker.confidence,
            budget.range,
            budget.confidence,
        );

        tracing::debug!(
            %segment,
            size = %company_size.size,
            role = %decision_maker.role,
            budget = %budget.range,
            overall_confidence,
            "classified smb text"
        );

        SmbClassification {
            segment,
            company_size,
            decision_maker,
            budget,
            overall_confidence,
            recommended_profile,
            reasoning,
        }
    }

    fn classify_size(&self, text: &str, bio: Option<&str>) -> CompanySizeResult {
        let mut best: Option<(CompanySize, f32, &'static str)> = None;
        let mut signals: Vec<String> = Vec::new();

        for (group, employee_range) in &self.size_groups {
            for re in &group.regexes {
                let Some(m) = find_in(re, text, bio) else {
                    continue;
                };
                match best {
                    None => {
                        best = Some((group.label, group.confidence, employee_range));
                        signals.push(format!("size {}: matched \"{m}\"", group.label));
                    }
                    Some((_, conf, _)) if group.confidence > conf => {
                        best = Some((group.label, group.confidence, employee_range));
                        signals.push(format!("size {}: matched \"{m}\"", group.label));
                    }
                    Some((label, _, _)) if label == group.label => {
                        // Same label again: extra evidence, not a new winner.
                        signals.push(format!("size {label}: also matched \"{m}\""));
                    }
                    Some(_) => {}
                }
            }
        }

        match best {
            Some((size, confidence, employee_range)) => CompanySizeResult {
                size,
                confidence,
                signals,
                employee_range: Some(employee_range.to_string()),
            },
            None => CompanySizeResult {
                size: CompanySize::Unknown,
                confidence: 0.0,
                signals: vec!["no company size signals".to_string()],
                employee_range: None,
            },
        }
    }

    fn classify_role(&self, text: &str, bio: Option<&str>) -> DecisionMakerResult {
        let body = self.best_role(text);
        let bio_role = bio.and_then(|b| self.best_role(b));

        match (body, bio_role) {
            (Some(mut body), Some(bio)) => {
                if body.role == bio.role {
                    body.confidence = (body.confidence + ROLE_BIO_AGREEMENT_BONUS).min(1.0);
                    body.signals.push(format!(
                        "author bio agrees on role {}",
                        body.role
                    ));
                }
                body
            }
            (Some(body), None) => body,
            // Body said nothing; the bio alone still identifies the role.
            (None, Some(bio)) => bio,
            (None, None) => DecisionMakerResult {
                role: DecisionRole::Unknown,
                confidence: 0.0,
                signals: vec!["no decision-maker signals".to_string()],
                has_budget_authority: false,
                is_final_decision_maker: false,
            },
        }
    }

    fn best_role(&self, text: &str) -> Option<DecisionMakerResult> {
        let mut best: Option<DecisionMakerResult> = None;
        for (group, has_budget_authority, is_final_decision_maker) in &self.role_groups {
            for re in &group.regexes {
                let Some(m) = re.find(text).map(|m| m.as_str().to_string()) else {
                    continue;
                };
                match &mut best {
                    None => {
                        best = Some(DecisionMakerResult {
                            role: group.label,
                            confidence: group.confidence,
                            signals: vec![format!("role {}: matched \"{m}\"", group.label)],
                            has_budget_authority: *has_budget_authority,
                            is_final_decision_maker: *is_final_decision_maker,
                        });
                    }
                    Some(b) if group.confidence > b.confidence => {
                        *b = DecisionMakerResult {
                            role: group.label,
                            confidence: group.confidence,
                            signals: vec![format!("role {}: matched \"{m}\"", group.label)],
                            has_budget_authority: *has_budget_authority,
                            is_final_decision_maker: *is_final_decision_maker,
                        };
                    }
                    Some(b) if b.role == group.label => {
                        b.signals
                            .push(format!("role {}: also matched \"{m}\"", group.label));
                    }
                    Some(_) => {}
                }
            }
        }
        best
    }

    fn classify_budget(&self, text: &str) -> BudgetResult {
        let mut best: Option<(BudgetRange, f32, String)> = None;
        let mut mentioned_amount = None;

        if let Some(caps) = self.amount_re.captures(text) {
            let raw = caps.get(1).map_or("", |m| m.as_str()).replace(',', "");
            if let Ok(mut amount) = raw.parse::<f64>() {
                if caps.get(2).is_some() {
                    amount *= 1_000.0;
                }
                let range = range_for_amount(amount);
                mentioned_amount = Some(amount);
                best = Some((
                    range,
                    BUDGET_AMOUNT_CONFIDENCE,
                    format!("budget {range}: mentioned ${amount}"),
                ));
            }
        }

        for group in &self.budget_groups {
            for re in &group.regexes {
                let Some(m) = re.find(text).map(|m| m.as_str().to_string()) else {
                    continue;
                };
                if best.as_ref().is_none_or(|(_, conf, _)| group.confidence > *conf) {
                    best = Some((
                        group.label,
                        group.confidence,
                        format!("budget {}: matched \"{m}\"", group.label),
                    ));
                }
            }
        }

        let mut constraints = Vec::new();
        for re in &self.constraint_res {
            if let Some(m) = re.find(text) {
                constraints.push(m.as_str().to_string());
            }
        }

        match best {
            Some((range, confidence, signal)) => {
                let mut signals = vec![signal];
                for c in &constraints {
                    signals.push(format!("budget constraint: \"{c}\""));
                }
                BudgetResult {
                    range,
                    confidence,
                    signals,
                    mentioned_amount,
                    constraints,
                }
            }
            None => BudgetResult {
                range: BudgetRange::Unknown,
                confidence: 0.0,
                signals: vec!["no budget signals".to_string()],
                mentioned_amount: None,
                constraints,
            },
        }
    }
}

impl Default for SmbClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn find_in(re: &Regex, text: &str, bio: Option<&str>) -> Option<String> {
    re.find(text)
        .or_else(|| bio.and_then(|b| re.find(b)))
        .map(|m| m.as_str().to_string())
}

fn range_for_amount(amount: f64) -> BudgetRange {
    for (bound, range) in BUDGET_AMOUNT_BOUNDS {
        if amount < *bound {
            return *range;
        }
    }
    BudgetRange::Enterprise
}

fn recommend_profile(
    segment: SmbSegment,
    platform: Option<&str>,
) -> Option<BusinessProfileType> {
    if let Some(platform) = platform {
        let platform = platform.to_lowercase();
        if platform.contains("g2") || platform.contains("capterra") {
            return Some(BusinessProfileType::NationalSaasB2b);
        }
        if platform.contains("yelp") || platform.contains("google") {
            return Some(match segment {
                SmbSegment::Solopreneur | SmbSegment::MicroBusiness | SmbSegment::Unknown => {
                    BusinessProfileType::LocalServiceB2c
                }
                _ => BusinessProfileType::RegionalRetailB2c,
            });
        }
    }
    segment_profiles(segment).first().copied()
}

/// How actionable this prospect is for outreach, in `[0, 1]`.
///
/// Derived from a classification, not part of it: authority and budget
/// evidence add fixed boosts on top of a segment base, discounted by the
/// overall classification confidence.
#[must_use]
pub fn actionability_score(classification: &SmbClassification) -> f32 {
    let mut score = segment_actionability_base(classification.segment);
    if classification.decision_maker.has_budget_authority {
        score += 0.3;
    }
    if classification.decision_maker.is_final_decision_maker {
        score += 0.2;
    }
    if !matches!(
        classification.budget.range,
        BudgetRange::Unknown | BudgetRange::Free
    ) {
        score += 0.2;
    }
    (score * classification.overall_confidence).clamp(0.0, 1.0)
}
