use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A raw answer bound to one question id.
///
/// Serialized untagged so the persisted mapping stays a plain JSON object of
/// numbers, strings, arrays of option keys, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Explicitly cleared. Scores the same as a missing entry.
    #[default]
    Absent,
    /// A resolved option value or scale position, nominally in [0, 1].
    Number(f64),
    /// Free text, only meaningful for text questions.
    Text(String),
    /// Selected option keys (code, or label when no code is set), in selection order.
    Selection(Vec<String>),
}

impl AnswerValue {
    /// Whether this answer counts toward completion.
    ///
    /// `Absent` and the empty string are unanswered. An empty selection still
    /// counts: the respondent touched the question and chose nothing.
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Absent => false,
            AnswerValue::Text(text) => !text.is_empty(),
            AnswerValue::Number(_) | AnswerValue::Selection(_) => true,
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(value: Vec<&str>) -> Self {
        AnswerValue::Selection(value.into_iter().map(str::to_string).collect())
    }
}

/// Sparse mapping from question id to answer. A missing id means unanswered.
pub type AnswerMap = BTreeMap<String, AnswerValue>;

/// Returns the answer for `id` if it counts as answered.
pub fn answered<'a>(answers: &'a AnswerMap, id: &str) -> Option<&'a AnswerValue> {
    answers.get(id).filter(|value| value.is_answered())
}
