use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// May be left out when the entry is keyed by id in its source file.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "pergunta")]
    pub question: String,
    #[serde(alias = "resposta")]
    pub answer: String,
    #[serde(default, alias = "palavras_chave")]
    pub keywords: Vec<String>,
}

impl FaqEntry {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Keywords followed by the question itself, as one matchable string.
    pub fn vocabulary_source(&self) -> String {
        let mut source = self.keywords.join(" ");
        source.push(' ');
        source.push_str(&self.question);
        source
    }
}

/// Ids may be written as strings or integers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(n) => n.to_string(),
    })
}

/// A trigger phrase that bypasses scoring and returns fixed suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentEntry {
    pub trigger: String,
    pub suggestions: Vec<String>,
    /// Greeting-class triggers are skipped for long inputs.
    #[serde(default)]
    pub greeting: bool,
}

impl IntentEntry {
    pub fn new(
        trigger: impl Into<String>,
        suggestions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            suggestions: suggestions.into_iter().map(Into::into).collect(),
            greeting: false,
        }
    }

    pub fn greeting(
        trigger: impl Into<String>,
        suggestions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            greeting: true,
            ..Self::new(trigger, suggestions)
        }
    }
}

/// Fallback suggestion lists used when scoring produces nothing to offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSuggestions {
    /// Returned when no FAQ entry scores above zero.
    pub no_match: Vec<String>,
    /// Returned alongside an answer when no related entries remain.
    pub no_related: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Answer,
    Intent,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchResult {
    /// A FAQ entry won; `suggestions` holds related questions or the
    /// no-related default.
    Answer {
        entry_id: String,
        score: usize,
        answer: String,
        suggestions: Vec<String>,
    },
    /// An intent trigger short-circuited scoring.
    Intent {
        trigger: String,
        suggestions: Vec<String>,
    },
    /// Nothing matched; `suggestions` is the no-match default.
    Fallback { suggestions: Vec<String> },
}

impl MatchResult {
    pub fn kind(&self) -> MatchKind {
        match self {
            MatchResult::Answer { .. } => MatchKind::Answer,
            MatchResult::Intent { .. } => MatchKind::Intent,
            MatchResult::Fallback { .. } => MatchKind::Fallback,
        }
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            MatchResult::Answer { answer, .. } => Some(answer.as_str()),
            _ => None,
        }
    }

    pub fn entry_id(&self) -> Option<&str> {
        match self {
            MatchResult::Answer { entry_id, .. } => Some(entry_id.as_str()),
            _ => None,
        }
    }

    pub fn suggestions(&self) -> &[String] {
        match self {
            MatchResult::Answer { suggestions, .. }
            | MatchResult::Intent { suggestions, .. }
            | MatchResult::Fallback { suggestions } => suggestions.as_slice(),
        }
    }
}
