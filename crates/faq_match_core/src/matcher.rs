use std::collections::HashSet;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::model::{DefaultSuggestions, FaqEntry, MatchResult};
use crate::normalize::{normalize, normalize_joined, token_set, StopwordSet};

pub const DEFAULT_GREETING_TOKEN_LIMIT: usize = 3;
pub const DEFAULT_MAX_RELATED: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Greeting triggers are ignored when the input has more distinct tokens
    /// than this.
    pub greeting_token_limit: usize,
    /// How many entries after the winner are considered for suggestions.
    pub max_related: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            greeting_token_limit: DEFAULT_GREETING_TOKEN_LIMIT,
            max_related: DEFAULT_MAX_RELATED,
        }
    }
}

#[derive(Debug, Clone)]
struct IndexedEntry {
    entry: FaqEntry,
    vocabulary: HashSet<String>,
}

#[derive(Debug, Clone)]
struct CompiledIntent {
    trigger: String,
    suggestions: Vec<String>,
    greeting: bool,
}

/// Tokens derived from one user utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryTokens {
    /// Normalized tokens in input order.
    pub tokens: Vec<String>,
    /// Distinct tokens minus stopwords, sorted.
    pub scoring: Vec<String>,
}

/// Resolves user utterances against immutable FAQ and intent tables.
///
/// All tables are normalized once in [`Matcher::new`]; `resolve` only reads
/// them, so a single matcher can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct Matcher {
    entries: Vec<IndexedEntry>,
    intents: Vec<CompiledIntent>,
    stopwords: StopwordSet,
    defaults: DefaultSuggestions,
    config: MatcherConfig,
}

impl Matcher {
    pub fn new(kb: KnowledgeBase) -> Result<Self> {
        Self::with_config(kb, MatcherConfig::default())
    }

    pub fn with_config(kb: KnowledgeBase, config: MatcherConfig) -> Result<Self> {
        kb.validate()?;

        let entries = kb
            .faqs
            .into_iter()
            .map(|entry| IndexedEntry {
                vocabulary: token_set(&entry.vocabulary_source()),
                entry,
            })
            .collect();

        let intents = kb
            .intents
            .into_iter()
            .map(|intent| CompiledIntent {
                trigger: normalize_joined(&intent.trigger),
                suggestions: intent.suggestions,
                greeting: intent.greeting,
            })
            .collect();

        Ok(Self {
            entries,
            intents,
            stopwords: StopwordSet::from_words(&kb.stopwords),
            defaults: kb.defaults,
            config,
        })
    }

    pub fn config(&self) -> MatcherConfig {
        self.config
    }

    pub fn faq_count(&self) -> usize {
        self.entries.len()
    }

    pub fn intent_count(&self) -> usize {
        self.intents.len()
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn query_tokens<T: Display + ?Sized>(&self, raw_text: &T) -> QueryTokens {
        let tokens = normalize(raw_text);
        let set: HashSet<String> = tokens.iter().cloned().collect();
        let mut scoring: Vec<String> = self.stopwords.remove_from(&set).into_iter().collect();
        scoring.sort();
        QueryTokens { tokens, scoring }
    }

    /// Run the intent → scoring → fallback cascade for one utterance.
    pub fn resolve<T: Display + ?Sized>(&self, raw_text: &T) -> MatchResult {
        let tokens = normalize(raw_text);
        let joined = tokens.join(" ");
        let distinct: HashSet<String> = tokens.into_iter().collect();

        if let Some(intent) = self.match_intent(&joined, distinct.len()) {
            debug!(trigger = %intent.trigger, "intent shortcut");
            return MatchResult::Intent {
                trigger: intent.trigger.clone(),
                suggestions: intent.suggestions.clone(),
            };
        }

        let query = self.stopwords.remove_from(&distinct);
        let ranked = self.rank_tokens(&query);

        let Some(&(best, score)) = ranked.first() else {
            debug!(query_tokens = query.len(), "no faq entry matched");
            return MatchResult::Fallback {
                suggestions: self.defaults.no_match.clone(),
            };
        };

        let mut seen: HashSet<&str> = HashSet::from([best.question.as_str()]);
        let mut suggestions = Vec::new();
        for (entry, _) in ranked.iter().skip(1).take(self.config.max_related) {
            if seen.insert(entry.question.as_str()) {
                suggestions.push(entry.question.clone());
            }
        }
        if suggestions.is_empty() {
            suggestions = self.defaults.no_related.clone();
        }

        debug!(entry_id = %best.id, score, related = suggestions.len(), "faq answer");
        MatchResult::Answer {
            entry_id: best.id.clone(),
            score,
            answer: best.answer.clone(),
            suggestions,
        }
    }

    /// Entries with a positive overlap score, best first.
    ///
    /// Ties keep collection order.
    pub fn rank<T: Display + ?Sized>(&self, raw_text: &T) -> Vec<(&FaqEntry, usize)> {
        let query = self.stopwords.remove_from(&token_set(raw_text));
        self.rank_tokens(&query)
    }

    fn rank_tokens(&self, query: &HashSet<String>) -> Vec<(&FaqEntry, usize)> {
        let mut scored: Vec<(&FaqEntry, usize)> = self
            .entries
            .iter()
            .map(|indexed| {
                let score = indexed.vocabulary.intersection(query).count();
                (&indexed.entry, score)
            })
            .filter(|(_, score)| *score > 0)
            .collect();

        // Stable sort keeps insertion order among equal scores.
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
    }

    fn match_intent(&self, joined: &str, token_count: usize) -> Option<&CompiledIntent> {
        self.intents.iter().find(|intent| {
            if !joined.contains(intent.trigger.as_str()) {
                return false;
            }
            if intent.greeting && token_count > self.config.greeting_token_limit {
                debug!(trigger = %intent.trigger, token_count, "greeting skipped for long input");
                return false;
            }
            true
        })
    }
}
