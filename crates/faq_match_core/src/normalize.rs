//! Text normalization shared by user input, FAQ vocabularies, intent
//! triggers and stopwords.
//!
//! Every comparison in the matcher happens between token sets produced here,
//! so all sides are folded with exactly the same rules: lowercase, NFKD
//! decomposition, drop everything outside ASCII, split on whitespace.

use std::collections::HashSet;
use std::fmt::Display;

use unicode_normalization::UnicodeNormalization;

/// Normalize any displayable value into an ordered token sequence.
///
/// Non-string input is coerced through its `Display` form, so this never
/// fails. Empty or whitespace-only input yields an empty vector.
///
/// ```
/// use faq_match_core::normalize;
///
/// assert_eq!(normalize("Água  GELADA"), vec!["agua", "gelada"]);
/// assert_eq!(normalize(&42), vec!["42"]);
/// assert!(normalize("   ").is_empty());
/// ```
pub fn normalize<T: Display + ?Sized>(text: &T) -> Vec<String> {
    fold(&text.to_string())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Normalize and re-join the tokens with single spaces.
///
/// Used for substring checks, where token boundaries should not matter.
pub fn normalize_joined<T: Display + ?Sized>(text: &T) -> String {
    normalize(text).join(" ")
}

/// Normalize into a token set for overlap scoring.
pub fn token_set<T: Display + ?Sized>(text: &T) -> HashSet<String> {
    normalize(text).into_iter().collect()
}

fn fold(text: &str) -> String {
    // Combining marks land outside ASCII after NFKD and are dropped here.
    text.to_lowercase().nfkd().filter(char::is_ascii).collect()
}

/// Function words excluded from scoring.
///
/// Built by running the source words through [`normalize`], so `"é"` and
/// `"voce"` filter the same way user input is folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .flat_map(|w| normalize(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Build from a whitespace-separated source string.
    pub fn from_source(source: &str) -> Self {
        Self {
            words: token_set(source),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// `tokens - STOPWORDS`.
    pub fn remove_from(&self, tokens: &HashSet<String>) -> HashSet<String> {
        tokens
            .iter()
            .filter(|t| !self.contains(t))
            .cloned()
            .collect()
    }
}
