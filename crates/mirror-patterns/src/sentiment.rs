//! Keyword lexicon for the coarse sentiment tag on extracted signals.

pub const NEGATIVE_WORDS: &[&str] = &[
    "terrible",
    "awful",
    "horrible",
    "hate",
    "worst",
    "useless",
    "frustrated",
    "frustrating",
    "scam",
    "broken",
    "buggy",
    "overpriced",
    "disappointed",
    "nightmare",
    "avoid",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "great",
    "excellent",
    "love",
    "best",
    "amazing",
    "fantastic",
    "recommend",
    "reliable",
    "solid",
    "happy",
    "impressed",
    "lifesaver",
];
