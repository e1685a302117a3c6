//! Word-boundary keyword matching shared by the classifiers.

use regex::Regex;

/// A keyword list compiled to word-boundary regexes.
pub(crate) struct KeywordSet {
    entries: Vec<(Regex, &'static str)>,
}

impl KeywordSet {
    /// Compile `keywords` into word-boundary matchers. Keywords are plain
    /// phrases, so escaping cannot produce an invalid pattern.
    pub(crate) fn compile(keywords: &'static [&'static str]) -> Self {
        let entries = keywords
            .iter()
            .map(|kw| {
                let pattern = format!(r"\b{}\b", regex::escape(kw));
                let re = Regex::new(&pattern).expect("valid keyword regex");
                (re, *kw)
            })
            .collect();
        Self { entries }
    }

    /// Keywords from this set present in `text` (already lowercased).
    pub(crate) fn matches(&self, text: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(re, _)| re.is_match(text))
            .map(|(_, kw)| *kw)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_only() {
        let set = KeywordSet::compile(&["local", "api"]);
        assert_eq!(set.matches("a local shop"), vec!["local"]);
        assert!(set.matches("locally rapid").is_empty());
    }

    #[test]
    fn matches_multiword_phrases() {
        let set = KeywordSet::compile(&["across the state"]);
        assert_eq!(
            set.matches("we deliver across the state line"),
            vec!["across the state"]
        );
    }

    #[test]
    fn escapes_special_characters() {
        let set = KeywordSet::compile(&["e-commerce"]);
        assert_eq!(set.matches("an e-commerce brand"), vec!["e-commerce"]);
    }
}
