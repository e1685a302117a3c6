//! The Reddit SMB analyzer: runs the pattern sets over collected posts
//! and comments and emits signals and recommendation requests.

use chrono::{DateTime, Utc};
use mirror_classify::relevance::check_relevance;
use mirror_core::BusinessProfileType;
use mirror_patterns::reddit::{
    RequestType, SwitchingUrgency, HIGH_URGENCY_TERMS, MEDIUM_URGENCY_TERMS, PAIN_POINT_PATTERNS,
    RECOMMENDATION_EMIT_THRESHOLD, RECOMMENDATION_PATTERNS, SWITCHING_PATTERNS,
};
use mirror_patterns::smb::{BUDGET_AMOUNT_PATTERN, SIZE_PATTERNS};
use regex::Regex;
use uuid::Uuid;

use crate::competitors::{CompetitorAttribution, MentionKind};
use crate::sentiment::tag_sentiment;
use crate::types::{
    RecommendationRequest, RedditComment, RedditPost, RedditSmbAnalysis, SignalType, SmbSignal,
    UrgencyLevel,
};

/// Confidence on signals backed by a recommendation-request match.
const RECOMMENDATION_SIGNAL_CONFIDENCE: f32 = 0.9;
/// Confidence on every other signal kind.
const DEFAULT_SIGNAL_CONFIDENCE: f32 = 0.7;

struct CompiledRecommendation {
    re: Regex,
    weight: f32,
    request_type: RequestType,
}

struct CompiledPainPoint {
    re: Regex,
    category: &'static str,
}

struct CompiledSwitching {
    re: Regex,
    urgency: SwitchingUrgency,
}

/// Where a piece of text came from, carried alongside it while scanning.
struct SourceRef<'a> {
    subreddit: &'a str,
    url: &'a str,
    score: i64,
    timestamp: DateTime<Utc>,
}

/// Compiled pattern sets plus the competitor attribution seam.
pub struct RedditSmbAnalyzer {
    recommendation: Vec<CompiledRecommendation>,
    pain_points: Vec<CompiledPainPoint>,
    switching: Vec<CompiledSwitching>,
    size_indicators: Vec<Regex>,
    amount_re: Regex,
    attribution: Box<dyn CompetitorAttribution>,
}

impl RedditSmbAnalyzer {
    #[must_use]
    pub fn new(attribution: Box<dyn CompetitorAttribution>) -> Self {
        let recommendation = RECOMMENDATION_PATTERNS
            .iter()
            .map(|p| CompiledRecommendation {
                re: Regex::new(p.pattern).expect("valid recommendation pattern"),
                weight: p.weight,
                request_type: p.request_type,
            })
            .collect();
        let pain_points = PAIN_POINT_PATTERNS
            .iter()
            .map(|p| CompiledPainPoint {
                re: Regex::new(p.pattern).expect("valid pain-point pattern"),
                category: p.category,
            })
            .collect();
        let switching = SWITCHING_PATTERNS
            .iter()
            .map(|p| CompiledSwitching {
                re: Regex::new(p.pattern).expect("valid switching pattern"),
                urgency: p.urgency,
            })
            .collect();
        let size_indicators = SIZE_PATTERNS
            .iter()
            .flat_map(|g| g.patterns)
            .map(|p| Regex::new(p).expect("valid company-size pattern"))
            .collect();
        Self {
            recommendation,
            pain_points,
            switching,
            size_indicators,
            amount_re: Regex::new(BUDGET_AMOUNT_PATTERN).expect("valid budget amount pattern"),
            attribution,
        }
    }

    /// Run every extractor over a batch of posts and comments.
    ///
    /// Posts get the full scan; comments are shorter and noisier, so only
    /// the recommendation and pain-point extractors run on them. When a
    /// `profile` is given, signals whose text fails that profile's
    /// relevance check are dropped.
    #[must_use]
    pub fn analyze_content(
        &self,
        posts: &[RedditPost],
        comments: &[RedditComment],
        profile: Option<BusinessProfileType>,
    ) -> RedditSmbAnalysis {
        let mut analysis = RedditSmbAnalysis {
            posts_analyzed: posts.len(),
            comments_analyzed: comments.len(),
            ..RedditSmbAnalysis::default()
        };

        for post in posts {
            let text = format!("{} {}", post.title, post.body).to_lowercase();
            let src = SourceRef {
                subreddit: &post.subreddit,
                url: &post.url,
                score: post.score,
                timestamp: post.created_at.unwrap_or_else(Utc::now),
            };
            self.scan_recommendations(&text, &src, &mut analysis);
            self.scan_pain_points(&text, &src, &mut analysis.signals);
            self.scan_switching(&text, &src, &mut analysis.signals);
            self.scan_competitors(&text, &src, &mut analysis.signals);
            self.scan_budget(&text, &src, &mut analysis.signals);
        }

        for comment in comments {
            let text = comment.body.to_lowercase();
            let src = SourceRef {
                subreddit: &comment.subreddit,
                url: &comment.url,
                score: comment.score,
                timestamp: comment.created_at.unwrap_or_else(Utc::now),
            };
            self.scan_recommendations(&text, &src, &mut analysis);
            self.scan_pain_points(&text, &src, &mut analysis.signals);
        }

        if let Some(profile) = profile {
            let before = analysis.signals.len();
            analysis
                .signals
                .retain(|s| check_relevance(&s.raw_text, profile).is_relevant);
            tracing::debug!(
                profile = %profile,
                kept = analysis.signals.len(),
                dropped = before - analysis.signals.len(),
                "filtered signals by profile relevance"
            );
        }

        for signal in &mut analysis.signals {
            signal.profile_relevance = BusinessProfileType::ALL
                .into_iter()
                .filter(|p| check_relevance(&signal.raw_text, *p).is_relevant)
                .collect();
        }

        analysis
    }

    fn scan_recommendations(
        &self,
        text: &str,
        src: &SourceRef<'_>,
        analysis: &mut RedditSmbAnalysis,
    ) {
        let mut best: Option<&CompiledRecommendation> = None;
        for rec in &self.recommendation {
            if rec.re.is_match(text) && best.is_none_or(|b| rec.weight > b.weight) {
                best = Some(rec);
            }
        }
        let Some(rec) = best else {
            return;
        };
        if rec.weight < RECOMMENDATION_EMIT_THRESHOLD {
            return;
        }

        let snippet = rec
            .re
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        tracing::debug!(
            request_type = %rec.request_type,
            weight = rec.weight,
            "recommendation request matched"
        );

        analysis.recommendation_requests.push(RecommendationRequest {
            text: text.to_string(),
            request_type: rec.request_type,
            category: Some(snippet),
            budget_mentioned: self.parse_amount(text),
            urgency_level: urgency_for(text),
            company_size_indicator: self.size_indicator(text),
            confidence: rec.weight,
            url: src.url.to_string(),
            timestamp: src.timestamp,
        });
        analysis.signals.push(make_signal(
            SignalType::RecommendationRequest,
            format!("{} recommendation request", rec.request_type),
            text,
            src,
            None,
            RECOMMENDATION_SIGNAL_CONFIDENCE,
        ));
    }

    fn scan_pain_points(&self, text: &str, src: &SourceRef<'_>, signals: &mut Vec<SmbSignal>) {
        if let Some(p) = self.pain_points.iter().find(|p| p.re.is_match(text)) {
            signals.push(make_signal(
                SignalType::PainPoint,
                format!("pain point: {}", p.category),
                text,
                src,
                None,
                DEFAULT_SIGNAL_CONFIDENCE,
            ));
        }
    }

    fn scan_switching(&self, text: &str, src: &SourceRef<'_>, signals: &mut Vec<SmbSignal>) {
        if let Some(s) = self.switching.iter().find(|s| s.re.is_match(text)) {
            signals.push(make_signal(
                SignalType::SwitchingIntent,
                format!("switching intent, {} urgency", s.urgency),
                text,
                src,
                None,
                DEFAULT_SIGNAL_CONFIDENCE,
            ));
        }
    }

    fn scan_competitors(&self, text: &str, src: &SourceRef<'_>, signals: &mut Vec<SmbSignal>) {
        for mention in self.attribution.attribute(text) {
            let (signal_type, insight) = match mention.kind {
                MentionKind::Displacement => (
                    SignalType::CompetitorComplaint,
                    format!("displacement mention of {}", mention.competitor),
                ),
                MentionKind::Praise | MentionKind::Neutral => (
                    SignalType::CompetitorMention,
                    format!("mention of {}", mention.competitor),
                ),
            };
            signals.push(make_signal(
                signal_type,
                insight,
                text,
                src,
                Some(mention.competitor),
                DEFAULT_SIGNAL_CONFIDENCE,
            ));
        }
    }

    fn scan_budget(&self, text: &str, src: &SourceRef<'_>, signals: &mut Vec<SmbSignal>) {
        if let Some(amount) = self.parse_amount(text) {
            signals.push(make_signal(
                SignalType::BudgetSignal,
                format!("budget mentioned: ${amount}"),
                text,
                src,
                None,
                DEFAULT_SIGNAL_CONFIDENCE,
            ));
        }
    }

    fn parse_amount(&self, text: &str) -> Option<f64> {
        let caps = self.amount_re.captures(text)?;
        let digits = caps.get(1)?.as_str().replace(',', "");
        let value: f64 = digits.parse().ok()?;
        Some(if caps.get(2).is_some() {
            value * 1_000.0
        } else {
            value
        })
    }

    fn size_indicator(&self, text: &str) -> Option<String> {
        self.size_indicators
            .iter()
            .find_map(|re| re.find(text).map(|m| m.as_str().to_string()))
    }
}

fn urgency_for(text: &str) -> UrgencyLevel {
    if HIGH_URGENCY_TERMS.iter().any(|t| text.contains(t)) {
        UrgencyLevel::High
    } else if MEDIUM_URGENCY_TERMS.iter().any(|t| text.contains(t)) {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

fn make_signal(
    signal_type: SignalType,
    insight: String,
    text: &str,
    src: &SourceRef<'_>,
    competitor: Option<String>,
    confidence: f32,
) -> SmbSignal {
    SmbSignal {
        id: Uuid::new_v4(),
        signal_type,
        insight,
        raw_text: text.to_string(),
        subreddit: src.subreddit.to_string(),
        url: src.url.to_string(),
        score: src.score,
        sentiment: tag_sentiment(text),
        competitor_mentioned: competitor,
        confidence,
        timestamp: src.timestamp,
        profile_relevance: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competitors::KeywordCompetitorIndex;

    fn analyzer() -> RedditSmbAnalyzer {
        RedditSmbAnalyzer::new(Box::new(KeywordCompetitorIndex::new(&[])))
    }

    fn post(title: &str, body: &str) -> RedditPost {
        RedditPost {
            id: "t3_abc".to_string(),
            title: title.to_string(),
            body: body.to_string(),
            subreddit: "smallbusiness".to_string(),
            url: "https://reddit.com/r/smallbusiness/abc".to_string(),
            score: 12,
            ..RedditPost::default()
        }
    }

    #[test]
    fn crm_request_is_classified_as_software() {
        let posts = vec![post("Can anyone recommend a good CRM for my small business?", "")];
        let analysis = analyzer().analyze_content(&posts, &[], None);

        assert_eq!(analysis.recommendation_requests.len(), 1);
        let req = &analysis.recommendation_requests[0];
        assert_eq!(req.request_type, RequestType::Software);
        assert!(req.confidence >= 0.85);
        assert_eq!(req.urgency_level, UrgencyLevel::Low);
        assert_eq!(req.company_size_indicator.as_deref(), Some("small business"));

        let signal = analysis
            .signals
            .iter()
            .find(|s| s.signal_type == SignalType::RecommendationRequest)
            .unwrap();
        assert!((signal.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn pain_point_carries_its_category() {
        let posts = vec![post("Venting", "their support is terrible, never responds")];
        let analysis = analyzer().analyze_content(&posts, &[], None);
        let signal = analysis
            .signals
            .iter()
            .find(|s| s.signal_type == SignalType::PainPoint)
            .unwrap();
        assert_eq!(signal.insight, "pain point: support");
        assert_eq!(signal.sentiment, crate::Sentiment::Negative);
    }

    #[test]
    fn switching_intent_reports_urgency() {
        let posts = vec![post("", "thinking about switching when our contract ends")];
        let analysis = analyzer().analyze_content(&posts, &[], None);
        let signal = analysis
            .signals
            .iter()
            .find(|s| s.signal_type == SignalType::SwitchingIntent)
            .unwrap();
        assert_eq!(signal.insight, "switching intent, soon urgency");
    }

    #[test]
    fn displacement_mention_becomes_competitor_complaint() {
        let analyzer = RedditSmbAnalyzer::new(Box::new(KeywordCompetitorIndex::new(&["HubSpot"])));
        let posts = vec![post("", "I'm done with HubSpot, it keeps crashing")];
        let analysis = analyzer.analyze_content(&posts, &[], None);
        let complaint = analysis
            .signals
            .iter()
            .find(|s| s.signal_type == SignalType::CompetitorComplaint)
            .unwrap();
        assert_eq!(complaint.competitor_mentioned.as_deref(), Some("hubspot"));
    }

    #[test]
    fn dollar_amount_emits_budget_signal() {
        let posts = vec![post("", "our budget is $1,500 per month for this")];
        let analysis = analyzer().analyze_content(&posts, &[], None);
        assert!(analysis
            .signals
            .iter()
            .any(|s| s.signal_type == SignalType::BudgetSignal));
    }

    #[test]
    fn parse_amount_handles_commas_and_k_suffix() {
        let analyzer = analyzer();
        assert_eq!(analyzer.parse_amount("around $1,500 monthly"), Some(1_500.0));
        assert_eq!(analyzer.parse_amount("up to $5k"), Some(5_000.0));
        assert_eq!(analyzer.parse_amount("no money at all"), None);
    }

    #[test]
    fn parse_amount_accepts_plain_digit_figures() {
        let analyzer = analyzer();
        assert_eq!(analyzer.parse_amount("our budget is $2000 per month"), Some(2_000.0));
        assert_eq!(analyzer.parse_amount("roughly $15000 annually"), Some(15_000.0));
    }

    #[test]
    fn profile_filter_drops_noisy_signals() {
        let posts = vec![post("", "thinking about switching our enterprise saas api platform")];
        let analysis = analyzer().analyze_content(
            &posts,
            &[],
            Some(BusinessProfileType::LocalServiceB2c),
        );
        assert!(analysis.signals.is_empty());
    }

    #[test]
    fn profile_relevance_lists_passing_profiles() {
        let posts = vec![post("Can anyone recommend a good CRM?", "need better onboarding")];
        let analysis = analyzer().analyze_content(&posts, &[], None);
        let signal = &analysis.signals[0];
        assert!(signal
            .profile_relevance
            .contains(&BusinessProfileType::NationalSaasB2b));
    }

    #[test]
    fn comments_get_recommendation_and_pain_scans_only() {
        let comments = vec![RedditComment {
            id: "t1_xyz".to_string(),
            body: "any recommendations for a bookkeeper? ours keeps losing receipts".to_string(),
            subreddit: "smallbusiness".to_string(),
            url: "https://reddit.com/r/smallbusiness/xyz".to_string(),
            score: 4,
            created_at: None,
        }];
        let analysis = analyzer().analyze_content(&[], &comments, None);
        assert_eq!(analysis.posts_analyzed, 0);
        assert_eq!(analysis.comments_analyzed, 1);
        assert_eq!(analysis.recommendation_requests.len(), 1);
        assert!(analysis
            .signals
            .iter()
            .any(|s| s.signal_type == SignalType::PainPoint));
    }
}
