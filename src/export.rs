use serde::Serialize;

use crate::answers::{AnswerMap, AnswerValue};
use crate::questionnaire::{QuestionSpec, QuestionType, Questionnaire};

/// One line of the per-question export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub id: String,
    pub title: String,
    pub answer: String,
}

fn raw_text(answer: &AnswerValue) -> String {
    match answer {
        AnswerValue::Absent => String::new(),
        AnswerValue::Number(value) => value.to_string(),
        AnswerValue::Text(text) => text.clone(),
        AnswerValue::Selection(keys) => keys.join(","),
    }
}

/// Human-readable rendering of an answer against its question.
///
/// Selection keys resolve through the same code-or-label lookup scoring
/// uses; keys with no matching option are shown verbatim.
pub fn resolve_answer_label(question: &QuestionSpec, answer: &AnswerValue) -> String {
    if question.kind == QuestionType::Text {
        return match answer {
            AnswerValue::Text(text) => text.clone(),
            _ => String::new(),
        };
    }
    if question.options.is_empty() {
        return raw_text(answer);
    }
    match answer {
        AnswerValue::Selection(keys) => keys
            .iter()
            .map(|key| {
                question
                    .find_option(key)
                    .map_or(key.as_str(), |option| option.label.as_str())
            })
            .collect::<Vec<_>>()
            .join(" / "),
        AnswerValue::Number(value) => question
            .options
            .iter()
            .find(|option| option.value == *value)
            .map_or_else(|| value.to_string(), |option| option.label.clone()),
        AnswerValue::Text(_) | AnswerValue::Absent => raw_text(answer),
    }
}

/// Export rows for every question, informational ones included, in
/// definition order.
pub fn export_rows(questionnaire: &Questionnaire, answers: &AnswerMap) -> Vec<ExportRow> {
    questionnaire
        .questions
        .iter()
        .map(|q| {
            let answer = answers.get(&q.id).cloned().unwrap_or_default();
            ExportRow {
                id: q.id.clone(),
                title: q.title.clone(),
                answer: resolve_answer_label(q, &answer),
            }
        })
        .collect()
}
