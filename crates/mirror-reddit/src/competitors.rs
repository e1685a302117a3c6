//! Competitor attribution seam.
//!
//! The full attribution service lives outside this crate; the analyzer
//! only needs to know which competitor a text mentions and whether the
//! mention is a displacement (leaving them), praise, or neutral chatter.
//! [`KeywordCompetitorIndex`] is a name-list implementation good enough to
//! run the analyzer standalone.

use mirror_patterns::sentiment::POSITIVE_WORDS;

/// How a competitor is being talked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionKind {
    /// The author is leaving or dropping the competitor.
    Displacement,
    Praise,
    Neutral,
}

/// One attributed competitor mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorMention {
    pub competitor: String,
    pub kind: MentionKind,
}

/// Attribution of competitor mentions in free text.
pub trait CompetitorAttribution {
    /// Find competitor mentions in `text` (already lowercased).
    fn attribute(&self, text: &str) -> Vec<CompetitorMention>;
}

/// Displacement verbs checked immediately before a competitor name.
const DISPLACEMENT_PREFIXES: &[&str] = &[
    "switching from",
    "moving off",
    "moving away from",
    "leaving",
    "done with",
    "fed up with",
    "canceling",
    "cancelling",
    "dropping",
    "ditching",
    "replacing",
];

/// Name-list competitor index.
pub struct KeywordCompetitorIndex {
    competitors: Vec<String>,
}

impl KeywordCompetitorIndex {
    /// Build an index over `names`. Names are matched case-insensitively
    /// as whole phrases.
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        Self {
            competitors: names.iter().map(|n| n.to_lowercase()).collect(),
        }
    }
}

impl CompetitorAttribution for KeywordCompetitorIndex {
    fn attribute(&self, text: &str) -> Vec<CompetitorMention> {
        let mut mentions = Vec::new();
        for name in &self.competitors {
            if !contains_phrase(text, name) {
                continue;
            }

            let displaced = DISPLACEMENT_PREFIXES
                .iter()
                .any(|prefix| text.contains(&format!("{prefix} {name}")));
            let kind = if displaced {
                MentionKind::Displacement
            } else if POSITIVE_WORDS.iter().any(|w| contains_phrase(text, w)) {
                MentionKind::Praise
            } else {
                MentionKind::Neutral
            };

            mentions.push(CompetitorMention {
                competitor: name.clone(),
                kind,
            });
        }
        mentions
    }
}

fn contains_phrase(text: &str, phrase: &str) -> bool {
    // Word-boundary check without compiling a regex per name.
    let padded_text = format!(" {} ", text.replace(|c: char| !c.is_alphanumeric(), " "));
    let padded_phrase = format!(" {} ", phrase.replace(|c: char| !c.is_alphanumeric(), " "));
    padded_text.contains(&padded_phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> KeywordCompetitorIndex {
        KeywordCompetitorIndex::new(&["HubSpot", "Salesforce"])
    }

    #[test]
    fn no_mention_yields_empty() {
        assert!(index().attribute("looking for any crm at all").is_empty());
    }

    #[test]
    fn displacement_prefix_is_detected() {
        let mentions = index().attribute("finally done with hubspot, moving on");
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].competitor, "hubspot");
        assert_eq!(mentions[0].kind, MentionKind::Displacement);
    }

    #[test]
    fn plain_mention_is_neutral() {
        let mentions = index().attribute("we evaluated salesforce last year");
        assert_eq!(mentions[0].kind, MentionKind::Neutral);
    }

    #[test]
    fn praise_mention_is_tagged() {
        let mentions = index().attribute("salesforce has been great for us");
        assert_eq!(mentions[0].kind, MentionKind::Praise);
    }

    #[test]
    fn partial_words_do_not_match() {
        let idx = KeywordCompetitorIndex::new(&["Hub"]);
        assert!(idx.attribute("the hubspot marketplace").is_empty());
    }
}
