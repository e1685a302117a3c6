//! Profile-relevance scoring for free-text signals.

use mirror_core::BusinessProfileType;
use mirror_patterns::relevance::relevance_config;
use serde::{Deserialize, Serialize};

/// Result of one relevance check. Deterministic for a given
/// `(text, profile)` pair; no hidden state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceCheck {
    pub is_relevant: bool,
    /// Final score in `[0, 1]`.
    pub score: f32,
    pub matched_keywords: Vec<String>,
    pub matched_noise_keywords: Vec<String>,
    pub reasoning: String,
}

const BASE_SCORE: f32 = 0.4;
const RELEVANT_STEP: f32 = 0.15;
const RELEVANT_CAP: f32 = 0.6;
const NOISE_STEP: f32 = 0.2;
const NOISE_CAP: f32 = 0.5;
const RELEVANCE_THRESHOLD: f32 = 0.35;

/// Lowercase with every non-alphanumeric flattened to a space, padded so
/// phrase containment only matches on word boundaries. Keeps short entries
/// like `api` from firing inside longer words like `rapid`.
fn boundary_padded(text: &str) -> String {
    let mut padded = String::with_capacity(text.len() + 2);
    padded.push(' ');
    for c in text.chars() {
        if c.is_alphanumeric() {
            padded.extend(c.to_lowercase());
        } else {
            padded.push(' ');
        }
    }
    padded.push(' ');
    padded
}

fn matches_in(
    haystack: &str,
    keywords: &'static [&'static str],
    topics: &'static [&'static str],
) -> Vec<String> {
    keywords
        .iter()
        .chain(topics)
        .filter(|kw| haystack.contains(&boundary_padded(kw)))
        .map(|kw| (*kw).to_string())
        .collect()
}

/// Score `text` for relevance to `profile`.
///
/// Score = clamp(0.4 + capped relevant boost - capped noise penalty) times
/// the profile's base weight. A text passes with some noise as long as the
/// relevant signal dominates (noise matches stay under relevant + 2).
#[must_use]
pub fn check_relevance(text: &str, profile: BusinessProfileType) -> RelevanceCheck {
    let config = relevance_config(profile);
    let haystack = boundary_padded(text);

    let matched_keywords = matches_in(&haystack, config.relevant_keywords, config.relevant_topics);
    let matched_noise_keywords =
        matches_in(&haystack, config.noise_keywords, config.irrelevant_topics);

    #[allow(clippy::cast_precision_loss)]
    let relevant = matched_keywords.len() as f32;
    #[allow(clippy::cast_precision_loss)]
    let noise = matched_noise_keywords.len() as f32;

    let raw = BASE_SCORE + (RELEVANT_STEP * relevant).min(RELEVANT_CAP)
        - (NOISE_STEP * noise).min(NOISE_CAP);
    let score = (raw.clamp(0.0, 1.0) * config.base_weight).clamp(0.0, 1.0);

    let is_relevant = score >= RELEVANCE_THRESHOLD
        && matched_noise_keywords.len() < matched_keywords.len() + 2;

    let reasoning = format!(
        "{} relevant and {} noise match(es) for {profile}; score {score:.2}",
        matched_keywords.len(),
        matched_noise_keywords.len(),
    );

    RelevanceCheck {
        is_relevant,
        score,
        matched_keywords,
        matched_noise_keywords,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_text_scores_base_and_passes() {
        let check = check_relevance("completely unrelated words", BusinessProfileType::LocalServiceB2c);
        assert!(check.is_relevant);
        assert!((check.score - 0.4).abs() < 1e-6);
        assert!(check.matched_keywords.is_empty());
    }

    #[test]
    fn relevant_keywords_raise_the_score() {
        let check = check_relevance(
            "our saas trial includes onboarding and a crm integration",
            BusinessProfileType::NationalSaasB2b,
        );
        assert!(check.is_relevant);
        assert!(check.score > 0.6, "score {}", check.score);
        assert!(check.matched_keywords.iter().any(|k| k == "crm"));
    }

    #[test]
    fn noise_dominated_text_is_rejected() {
        let check = check_relevance(
            "enterprise api saas devops venture capital ipo",
            BusinessProfileType::LocalServiceB2c,
        );
        assert!(!check.is_relevant, "score {}", check.score);
        assert!(check.matched_noise_keywords.len() >= 4);
    }

    #[test]
    fn some_noise_passes_when_relevant_signal_dominates() {
        let check = check_relevance(
            "local technician gave an estimate, homeowner reviews were great, \
             their api is irrelevant here",
            BusinessProfileType::LocalServiceB2c,
        );
        assert!(check.is_relevant);
        assert!(!check.matched_noise_keywords.is_empty());
    }

    #[test]
    fn keywords_only_match_whole_words() {
        // "rapid" must not trigger the "api" noise keyword.
        let check = check_relevance(
            "rapid turnaround from my local shop",
            BusinessProfileType::LocalServiceB2c,
        );
        assert!(check.matched_noise_keywords.is_empty());
        assert_eq!(check.matched_keywords, vec!["local".to_string()]);
    }

    #[test]
    fn hyphenated_keywords_still_match() {
        let check = check_relevance(
            "they offer same-day appointment slots",
            BusinessProfileType::LocalServiceB2c,
        );
        assert!(check.matched_keywords.iter().any(|k| k == "same-day"));
        assert!(check.matched_keywords.iter().any(|k| k == "appointment"));
    }

    #[test]
    fn score_stays_within_unit_interval() {
        let spammy = "saas subscription onboarding integration churn trial crm workflow demo \
                      pricing tier"
            .repeat(3);
        let check = check_relevance(&spammy, BusinessProfileType::NationalSaasB2b);
        assert!((0.0..=1.0).contains(&check.score));
    }

    #[test]
    fn check_is_deterministic() {
        let text = "shipping and returns on my order";
        let a = check_relevance(text, BusinessProfileType::NationalEcommerceB2c);
        let b = check_relevance(text, BusinessProfileType::NationalEcommerceB2c);
        assert_eq!(a.score, b.score);
        assert_eq!(a.is_relevant, b.is_relevant);
    }
}
