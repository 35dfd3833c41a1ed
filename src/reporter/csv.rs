use crate::error::ReportError;

use super::{ReportInput, Reporter};

/// Per-question answer sheet: `id,question,answer`.
pub struct CsvReporter;

impl Reporter for CsvReporter {
    fn format(&self, input: &ReportInput<'_>) -> Result<String, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["id", "question", "answer"])?;
        for row in input.rows {
            writer.write_record([row.id.as_str(), row.title.as_str(), row.answer.as_str()])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::CsvBuffer(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ReportError::CsvBuffer(e.to_string()))
    }
}
