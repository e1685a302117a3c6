//! Input and output records for the Reddit SMB analyzer.

use chrono::{DateTime, Utc};
use mirror_core::BusinessProfileType;
use mirror_patterns::reddit::RequestType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A collected Reddit post, as handed over by the collection layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditPost {
    pub id: String,
    pub title: String,
    pub body: String,
    pub subreddit: String,
    pub url: String,
    pub score: i64,
    pub author_info: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A collected Reddit comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditComment {
    pub id: String,
    pub body: String,
    pub subreddit: String,
    pub url: String,
    pub score: i64,
    pub created_at: Option<DateTime<Utc>>,
}

/// The six signal kinds the analyzer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalType {
    RecommendationRequest,
    PainPoint,
    SwitchingIntent,
    CompetitorComplaint,
    CompetitorMention,
    BudgetSignal,
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SignalType::RecommendationRequest => "recommendation-request",
            SignalType::PainPoint => "pain-point",
            SignalType::SwitchingIntent => "switching-intent",
            SignalType::CompetitorComplaint => "competitor-complaint",
            SignalType::CompetitorMention => "competitor-mention",
            SignalType::BudgetSignal => "budget-signal",
        };
        f.write_str(s)
    }
}

/// Coarse sentiment tag on a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Positive,
    Mixed,
    Neutral,
}

/// One extracted SMB signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmbSignal {
    pub id: Uuid,
    pub signal_type: SignalType,
    /// One-line human-readable summary of what was detected.
    pub insight: String,
    pub raw_text: String,
    pub subreddit: String,
    pub url: String,
    /// Reddit score (upvotes) of the source post or comment.
    pub score: i64,
    pub sentiment: Sentiment,
    pub competitor_mentioned: Option<String>,
    pub confidence: f32,
    pub timestamp: DateTime<Utc>,
    /// Every profile whose relevance check passes for this text.
    pub profile_relevance: Vec<BusinessProfileType>,
}

/// Urgency of a recommendation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

/// A matched recommendation request, kept alongside its signal for the
/// planner UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub text: String,
    pub request_type: RequestType,
    pub category: Option<String>,
    /// Dollar amount mentioned in the request, if any.
    pub budget_mentioned: Option<f64>,
    pub urgency_level: UrgencyLevel,
    pub company_size_indicator: Option<String>,
    pub confidence: f32,
    pub url: String,
    pub timestamp: DateTime<Utc>,
}

/// Result of one analysis run over a batch of posts and comments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditSmbAnalysis {
    pub signals: Vec<SmbSignal>,
    pub recommendation_requests: Vec<RecommendationRequest>,
    pub posts_analyzed: usize,
    pub comments_analyzed: usize,
}

/// Minimum Reddit score for a signal to count as high intent.
pub const HIGH_INTENT_MIN_SCORE: i64 = 10;

impl RedditSmbAnalysis {
    /// High-intent signals: recommendation requests, switching intent, and
    /// competitor complaints with enough community traction.
    #[must_use]
    pub fn high_intent_signals(&self) -> Vec<&SmbSignal> {
        self.signals
            .iter()
            .filter(|s| {
                matches!(
                    s.signal_type,
                    SignalType::RecommendationRequest
                        | SignalType::SwitchingIntent
                        | SignalType::CompetitorComplaint
                ) && s.score >= HIGH_INTENT_MIN_SCORE
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_type_serializes_kebab_case() {
        let json = serde_json::to_string(&SignalType::RecommendationRequest).unwrap();
        assert_eq!(json, "\"recommendation-request\"");
        let json = serde_json::to_string(&SignalType::BudgetSignal).unwrap();
        assert_eq!(json, "\"budget-signal\"");
    }

    #[test]
    fn high_intent_filters_type_and_score() {
        let base = SmbSignal {
            id: Uuid::nil(),
            signal_type: SignalType::RecommendationRequest,
            insight: String::new(),
            raw_text: String::new(),
            subreddit: "smallbusiness".to_string(),
            url: String::new(),
            score: 25,
            sentiment: Sentiment::Neutral,
            competitor_mentioned: None,
            confidence: 0.9,
            timestamp: Utc::now(),
            profile_relevance: vec![],
        };
        let low_score = SmbSignal {
            score: 3,
            ..base.clone()
        };
        let pain = SmbSignal {
            signal_type: SignalType::PainPoint,
            ..base.clone()
        };
        let analysis = RedditSmbAnalysis {
            signals: vec![base, low_score, pain],
            ..RedditSmbAnalysis::default()
        };
        let high = analysis.high_intent_signals();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].score, 25);
    }
}
