use std::time::Instant;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::matcher::Matcher;
use crate::model::{MatchKind, MatchResult};

pub const DEFAULT_REQUIRED_PASS_RATE: f32 = 1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalCase {
    pub case_id: String,
    #[serde(alias = "question")]
    pub input: String,
    pub expected_kind: MatchKind,
    /// For answer cases, the FAQ id that must win.
    #[serde(default)]
    pub expected_entry_id: Option<String>,
    /// A suggestion that must appear in the result.
    #[serde(default)]
    pub expected_suggestion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOutcome {
    pub case_id: String,
    pub passed: bool,
    pub actual_kind: MatchKind,
    pub actual_entry_id: Option<String>,
    pub suggestions: Vec<String>,
    pub latency_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSummary {
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f32,
    pub outcomes: Vec<EvalOutcome>,
}

impl EvalSummary {
    pub fn meets(&self, required_pass_rate: f32) -> bool {
        self.pass_rate >= required_pass_rate
    }
}

pub struct CaseExpectation;

impl CaseExpectation {
    pub fn matches(case: &EvalCase, result: &MatchResult) -> bool {
        if case.expected_kind != result.kind() {
            return false;
        }

        if let Some(expected) = case.expected_entry_id.as_deref() {
            if result.entry_id() != Some(expected) {
                return false;
            }
        }

        if let Some(expected) = case.expected_suggestion.as_deref() {
            if !result.suggestions().iter().any(|s| s == expected) {
                return false;
            }
        }

        true
    }
}

/// Run every case against one shared matcher.
///
/// Cases run in parallel; outcomes come back in case order.
pub fn evaluate_cases(matcher: &Matcher, cases: &[EvalCase]) -> EvalSummary {
    let started_at = Utc::now();

    let outcomes: Vec<EvalOutcome> = cases
        .par_iter()
        .map(|case| {
            let start = Instant::now();
            let result = matcher.resolve(case.input.as_str());
            let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

            EvalOutcome {
                case_id: case.case_id.clone(),
                passed: CaseExpectation::matches(case, &result),
                actual_kind: result.kind(),
                actual_entry_id: result.entry_id().map(String::from),
                suggestions: result.suggestions().to_vec(),
                latency_ms,
            }
        })
        .collect();

    let total = outcomes.len();
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = total.saturating_sub(passed);
    let pass_rate = if total == 0 {
        0.0
    } else {
        passed as f32 / total as f32
    };

    EvalSummary {
        started_at,
        total,
        passed,
        failed,
        pass_rate,
        outcomes,
    }
}
