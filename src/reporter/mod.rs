pub mod cli;
pub mod csv;
pub mod json;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ReportError;
use crate::export::ExportRow;
use crate::questionnaire::Questionnaire;
use crate::report::ReportView;
use crate::scoring::{QuestionInsight, ScoreSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Cli,
    Json,
    Csv,
}

/// Everything a renderer may draw on. Built once per report.
pub struct ReportInput<'a> {
    pub questionnaire: &'a Questionnaire,
    pub summary: &'a ScoreSummary,
    pub view: &'a ReportView,
    pub rows: &'a [ExportRow],
    pub question_notes: &'a [QuestionInsight],
    pub notes: &'a str,
    pub generated_at: DateTime<Utc>,
    pub verbose: bool,
}

pub trait Reporter {
    fn format(&self, input: &ReportInput<'_>) -> Result<String, ReportError>;
}

pub fn reporter_for(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Cli => Box::new(cli::CliReporter),
        OutputFormat::Json => Box::new(json::JsonReporter),
        OutputFormat::Csv => Box::new(csv::CsvReporter),
    }
}

pub fn score_only(summary: &ScoreSummary) -> String {
    format!("{}\n", summary.average)
}
