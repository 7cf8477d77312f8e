//! Keyword-overlap FAQ matching for a chat assistant.
//!
//! Raw text is folded by [`normalize`] and resolved by a [`Matcher`] through
//! an intent shortcut, overlap scoring and a default-suggestion fallback.

pub mod defaults;
pub mod error;
pub mod eval;
pub mod knowledge;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod presentation;
pub mod storage;

pub use defaults::{builtin_intents, builtin_suggestions, DEFAULT_STOPWORDS};
pub use error::DatasetError;
pub use eval::{
    evaluate_cases, CaseExpectation, EvalCase, EvalOutcome, EvalSummary,
    DEFAULT_REQUIRED_PASS_RATE,
};
pub use knowledge::KnowledgeBase;
pub use matcher::{
    Matcher, MatcherConfig, QueryTokens, DEFAULT_GREETING_TOKEN_LIMIT, DEFAULT_MAX_RELATED,
};
pub use model::{DefaultSuggestions, FaqEntry, IntentEntry, MatchKind, MatchResult};
pub use normalize::{normalize, normalize_joined, token_set, StopwordSet};
pub use presentation::{Presentation, QuickReply};
pub use storage::{
    load_faq, load_faq_json, load_faq_jsonl, load_faq_or_empty, load_intents_json,
    load_intents_or, load_presentation_json, load_presentation_or_builtin,
};
