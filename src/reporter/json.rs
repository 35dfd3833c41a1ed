use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ReportError;
use crate::export::ExportRow;
use crate::report::ReportView;
use crate::scoring::{QuestionInsight, ScoreSummary};

use super::{ReportInput, Reporter};

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    generated_at: DateTime<Utc>,
    summary: &'a ScoreSummary,
    report: &'a ReportView,
    question_notes: &'a [QuestionInsight],
    notes: &'a str,
    responses: &'a [ExportRow],
}

impl Reporter for JsonReporter {
    fn format(&self, input: &ReportInput<'_>) -> Result<String, ReportError> {
        let output = JsonOutput {
            version: env!("CARGO_PKG_VERSION"),
            generated_at: input.generated_at,
            summary: input.summary,
            report: input.view,
            question_notes: input.question_notes,
            notes: input.notes,
            responses: input.rows,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
