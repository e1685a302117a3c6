//! Keyword sentiment heuristic for extracted signals.

use mirror_patterns::sentiment::{NEGATIVE_WORDS, POSITIVE_WORDS};

use crate::types::Sentiment;

/// Tag `text` (already lowercased) with a coarse sentiment.
///
/// Both polarities present means mixed; neither means neutral.
#[must_use]
pub fn tag_sentiment(text: &str) -> Sentiment {
    let has_negative = NEGATIVE_WORDS.iter().any(|w| contains_word(text, w));
    let has_positive = POSITIVE_WORDS.iter().any(|w| contains_word(text, w));

    match (has_negative, has_positive) {
        (true, true) => Sentiment::Mixed,
        (true, false) => Sentiment::Negative,
        (false, true) => Sentiment::Positive,
        (false, false) => Sentiment::Neutral,
    }
}

fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|t| t == word)
}
