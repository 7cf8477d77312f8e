use std::collections::HashSet;

use crate::defaults::{builtin_intents, builtin_suggestions, DEFAULT_STOPWORDS};
use crate::error::{DatasetError, Result};
use crate::model::{DefaultSuggestions, FaqEntry, IntentEntry};
use crate::normalize::normalize;

/// The read-only tables a [`crate::Matcher`] is built from.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub faqs: Vec<FaqEntry>,
    pub intents: Vec<IntentEntry>,
    pub defaults: DefaultSuggestions,
    /// Raw stopword source words; normalized when the matcher is built.
    pub stopwords: Vec<String>,
}

impl KnowledgeBase {
    /// Built-in intents, defaults and stopwords around the given FAQ.
    pub fn builtin(faqs: Vec<FaqEntry>) -> Self {
        Self {
            faqs,
            intents: builtin_intents(),
            defaults: builtin_suggestions(),
            stopwords: DEFAULT_STOPWORDS
                .split_whitespace()
                .map(String::from)
                .collect(),
        }
    }

    pub fn with_intents(mut self, intents: Vec<IntentEntry>) -> Self {
        self.intents = intents;
        self
    }

    pub fn with_defaults(mut self, defaults: DefaultSuggestions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for faq in &self.faqs {
            if !seen.insert(faq.id.as_str()) {
                return Err(DatasetError::DuplicateId(faq.id.clone()));
            }
            if faq.question.trim().is_empty() {
                return Err(DatasetError::EmptyQuestion(faq.id.clone()));
            }
            if faq.answer.trim().is_empty() {
                return Err(DatasetError::EmptyAnswer(faq.id.clone()));
            }
        }

        for (idx, intent) in self.intents.iter().enumerate() {
            if normalize(&intent.trigger).is_empty() {
                return Err(DatasetError::EmptyTrigger(idx));
            }
        }

        Ok(())
    }
}
