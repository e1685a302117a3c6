//! Jobs-to-be-done validation of trigger text against per-profile
//! templates.

use mirror_core::{BusinessProfileType, UvpData};
use mirror_patterns::jtbd::jtbd_templates;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Loose "when / want / so I can" fragments pulled from the text.
/// Extracted for display only; validity never depends on them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedComponents {
    pub situation: Option<String>,
    pub motivation: Option<String>,
    pub expected_outcome: Option<String>,
}

/// The winning template, rendered with owned strings so dynamically
/// derived templates fit alongside the static ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJtbd {
    pub id: String,
    pub situation: String,
    pub motivation: String,
    pub expected_outcome: String,
    pub keywords: Vec<String>,
    pub full_statement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JtbdValidation {
    pub is_valid: bool,
    pub matched_jtbd: Option<MatchedJtbd>,
    /// Best template score in `[0, 1]`.
    pub match_score: f32,
    pub reasoning: String,
    pub extracted_components: ExtractedComponents,
}

const VALIDITY_THRESHOLD: f32 = 0.3;
const KEYWORD_WEIGHT: f32 = 0.5;
const SITUATION_BONUS: f32 = 0.2;
const MOTIVATION_BONUS: f32 = 0.2;
const OUTCOME_BONUS: f32 = 0.1;
const SITUATION_PREFIX_LEN: usize = 20;
const COMPONENT_PREFIX_LEN: usize = 15;

struct Candidate {
    id: String,
    situation: String,
    motivation: String,
    expected_outcome: String,
    keywords: Vec<String>,
}

/// Validate trigger text against the profile's JTBD templates plus one
/// template derived from the UVP (when it carries both a target customer
/// and a transformation story). The derived template is rebuilt per call,
/// never cached.
#[must_use]
pub fn validate_jtbd(
    title: &str,
    summary: Option<&str>,
    profile: BusinessProfileType,
    uvp: Option<&UvpData>,
) -> JtbdValidation {
    let mut text = title.to_lowercase();
    if let Some(summary) = summary {
        text.push(' ');
        text.push_str(&summary.to_lowercase());
    }

    let mut candidates: Vec<Candidate> = jtbd_templates(profile)
        .iter()
        .map(|t| Candidate {
            id: t.id.to_string(),
            situation: t.situation.to_string(),
            motivation: t.motivation.to_string(),
            expected_outcome: t.expected_outcome.to_string(),
            keywords: t.keywords.iter().map(|k| (*k).to_string()).collect(),
        })
        .collect();
    if let Some(derived) = uvp.and_then(derive_template) {
        candidates.push(derived);
    }

    let mut best: Option<(f32, &Candidate)> = None;
    for candidate in &candidates {
        let score = score_candidate(&text, candidate);
        if best.is_none_or(|(b, _)| score > b) {
            best = Some((score, candidate));
        }
    }

    let extracted_components = extract_components(&text);

    match best {
        Some((score, candidate)) if score > 0.0 => JtbdValidation {
            is_valid: score >= VALIDITY_THRESHOLD,
            match_score: score,
            reasoning: format!(
                "best template '{}' scored {score:.2} against {} candidate(s)",
                candidate.id,
                candidates.len()
            ),
            matched_jtbd: Some(MatchedJtbd {
                id: candidate.id.clone(),
                situation: candidate.situation.clone(),
                motivation: candidate.motivation.clone(),
                expected_outcome: candidate.expected_outcome.clone(),
                keywords: candidate.keywords.clone(),
                full_statement: format!(
                    "{}, {}, {}",
                    candidate.situation, candidate.motivation, candidate.expected_outcome
                ),
            }),
            extracted_components,
        },
        _ => JtbdValidation {
            is_valid: false,
            matched_jtbd: None,
            match_score: 0.0,
            reasoning: format!(
                "no template overlap for {profile} across {} candidate(s)",
                candidates.len()
            ),
            extracted_components,
        },
    }
}

fn score_candidate(text: &str, candidate: &Candidate) -> f32 {
    let mut score = 0.0;

    if !candidate.keywords.is_empty() {
        let matched = candidate
            .keywords
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let fraction = matched as f32 / candidate.keywords.len() as f32;
        score += KEYWORD_WEIGHT * fraction;
    }

    if text.contains(&prefix(&candidate.situation, SITUATION_PREFIX_LEN)) {
        score += SITUATION_BONUS;
    }
    if text.contains(&prefix(&candidate.motivation, COMPONENT_PREFIX_LEN)) {
        score += MOTIVATION_BONUS;
    }
    if text.contains(&prefix(&candidate.expected_outcome, COMPONENT_PREFIX_LEN)) {
        score += OUTCOME_BONUS;
    }

    score.min(1.0)
}

fn prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Derive one template from the UVP's transformation story. Requires both
/// a target customer and a before/after pair; otherwise there is nothing
/// to anchor the statement on.
fn derive_template(uvp: &UvpData) -> Option<Candidate> {
    let target = uvp.target_customer.as_deref()?;
    let transformation = uvp.transformation.as_ref()?;
    let before = transformation.before.as_deref()?;
    let after = transformation.after.as_deref()?;

    let mut keywords: Vec<String> = Vec::new();
    for word in target.split_whitespace().chain(after.split_whitespace()) {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.len() > 4 && !keywords.contains(&word) {
            keywords.push(word);
        }
    }
    keywords.truncate(8);

    Some(Candidate {
        id: "uvp-derived".to_string(),
        situation: format!("when {}", before.to_lowercase()),
        motivation: format!("i want {}", after.to_lowercase()),
        expected_outcome: format!("so i can serve {}", target.to_lowercase()),
        keywords,
    })
}

fn extract_components(text: &str) -> ExtractedComponents {
    let situation_re = Regex::new(r"\bwhen ([^,.!?;]+)").expect("valid situation regex");
    let motivation_re =
        Regex::new(r"\b(?:i |we )?want(?: to)? ([^,.!?;]+)").expect("valid motivation regex");
    let outcome_re = Regex::new(r"\bso (?:i|we) can ([^,.!?;]+)").expect("valid outcome regex");

    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    ExtractedComponents {
        situation: capture(&situation_re),
        motivation: capture(&motivation_re),
        expected_outcome: capture(&outcome_re),
    }
}

#[cfg(test)]
mod tests {
    use mirror_core::Transformation;

    use super::*;

    #[test]
    fn template_keywords_and_situation_validate() {
        let result = validate_jtbd(
            "When my team is juggling too many disconnected tools",
            Some("we want one platform for the whole workflow so i can stop paying for overlapping subscriptions"),
            BusinessProfileType::NationalSaasB2b,
            None,
        );
        assert!(result.is_valid, "score {}", result.match_score);
        let matched = result.matched_jtbd.unwrap();
        assert_eq!(matched.id, "saas-consolidate-tools");
        assert!(result.match_score >= 0.5);
    }

    #[test]
    fn unrelated_text_is_invalid() {
        let result = validate_jtbd(
            "completely unrelated musings about weather",
            None,
            BusinessProfileType::NationalSaasB2b,
            None,
        );
        assert!(!result.is_valid);
        assert_eq!(result.match_score, 0.0);
        assert!(result.matched_jtbd.is_none());
    }

    #[test]
    fn derived_template_requires_target_and_transformation() {
        let incomplete = UvpData {
            target_customer: Some("busy dental practices".to_string()),
            ..UvpData::default()
        };
        assert!(derive_template(&incomplete).is_none());

        let complete = UvpData {
            target_customer: Some("busy dental practices".to_string()),
            transformation: Some(Transformation {
                before: Some("phone tag with patients".to_string()),
                after: Some("automated appointment reminders".to_string()),
            }),
            ..UvpData::default()
        };
        let derived = derive_template(&complete).unwrap();
        assert_eq!(derived.id, "uvp-derived");
        assert!(derived.situation.starts_with("when phone tag"));
        assert!(derived.keywords.iter().any(|k| k == "dental"));
    }

    #[test]
    fn derived_template_can_win_over_static_ones() {
        let uvp = UvpData {
            target_customer: Some("busy dental practices".to_string()),
            transformation: Some(Transformation {
                before: Some("phone tag with patients".to_string()),
                after: Some("automated appointment reminders".to_string()),
            }),
            ..UvpData::default()
        };
        let result = validate_jtbd(
            "when phone tag with patients eats the morning, automated appointment reminders would save us",
            None,
            BusinessProfileType::LocalServiceB2c,
            Some(&uvp),
        );
        assert!(result.is_valid);
        assert_eq!(result.matched_jtbd.unwrap().id, "uvp-derived");
    }

    #[test]
    fn components_are_extracted_for_display() {
        let result = validate_jtbd(
            "when invoices pile up, i want to automate billing so i can close the books faster",
            None,
            BusinessProfileType::LocalServiceB2b,
            None,
        );
        let components = result.extracted_components;
        assert_eq!(components.situation.as_deref(), Some("invoices pile up"));
        assert_eq!(
            components.motivation.as_deref(),
            Some("automate billing so i can close the books faster")
        );
        assert_eq!(
            components.expected_outcome.as_deref(),
            Some("close the books faster")
        );
    }

    #[test]
    fn extraction_does_not_affect_validity() {
        // A clean "when X" phrase with zero template overlap stays invalid.
        let result = validate_jtbd(
            "when pigs fly i want a jetpack so i can commute",
            None,
            BusinessProfileType::GlobalSaasB2b,
            None,
        );
        assert!(!result.is_valid);
        assert!(result.extracted_components.situation.is_some());
    }
}
