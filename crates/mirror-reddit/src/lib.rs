//! Reddit SMB signal extraction.
//!
//! Applies recommendation-request, pain-point, and switching-intent
//! pattern sets to collected posts and comments, tags sentiment and
//! competitor mentions, and filters by profile relevance.

pub mod analyzer;
pub mod competitors;
pub mod sentiment;
pub mod types;

pub use analyzer::RedditSmbAnalyzer;
pub use competitors::{CompetitorAttribution, CompetitorMention, KeywordCompetitorIndex, MentionKind};
pub use sentiment::tag_sentiment;
pub use types::{
    RecommendationRequest, RedditComment, RedditPost, RedditSmbAnalysis, Sentiment, SignalType,
    SmbSignal, UrgencyLevel,
};
