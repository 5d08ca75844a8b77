//! Keyword Extractor: finds vocabulary terms in free text.
//!
//! Two passes:
//! 1. Punctuation-bearing terms ("c++", "node.js") are searched in the
//!    lowercased raw text, delimited by non-word characters.
//! 2. All other terms are matched with `\bterm\b` against the normalized text
//!    (lowercase, punctuation replaced by spaces) through a single `RegexSet`.
//!
//! Output is deduplicated and alphabetical regardless of vocabulary order.

use std::collections::BTreeSet;

use regex::RegexSet;
use tracing::debug;

use crate::scoring::vocabulary::{is_word_char, requires_raw_match};

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    raw_terms: Vec<String>,
    word_terms: Vec<String>,
    word_matcher: RegexSet,
}

impl KeywordExtractor {
    /// Compiles matchers for every term. Terms are lowercased, trimmed and deduplicated.
    pub fn new<I, S>(vocabulary: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: BTreeSet<String> = vocabulary
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let (raw_terms, word_terms): (Vec<String>, Vec<String>) =
            terms.into_iter().partition(|t| requires_raw_match(t));

        let patterns: Vec<String> = word_terms
            .iter()
            .map(|t| format!(r"\b{}\b", regex::escape(t)))
            .collect();
        let word_matcher = RegexSet::new(&patterns)?;

        Ok(Self {
            raw_terms,
            word_terms,
            word_matcher,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.raw_terms.len() + self.word_terms.len()
    }

    /// Returns every vocabulary term present in `text`, alphabetically.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let normalized = normalize(&lowered);

        let mut found: BTreeSet<&str> = self
            .word_matcher
            .matches(&normalized)
            .into_iter()
            .map(|idx| self.word_terms[idx].as_str())
            .collect();

        found.extend(
            self.raw_terms
                .iter()
                .filter(|t| contains_delimited(&lowered, t))
                .map(String::as_str),
        );

        debug!(
            "Extracted {} keywords from {} chars of text",
            found.len(),
            text.len()
        );

        found.into_iter().map(str::to_string).collect()
    }
}

/// Replaces every character that is neither a word character nor whitespace with a space.
pub fn normalize(lowered: &str) -> String {
    lowered
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Substring search where the neighbours of a hit must not be word characters.
fn contains_delimited(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + term.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}
