use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::answers::AnswerValue;
use crate::config::Config;
use crate::error::AppError;
use crate::export::{export_rows, ExportRow};
use crate::insight::templates::question_table;
use crate::questionnaire::{QuestionSpec, QuestionType, Questionnaire};
use crate::report::ReportView;
use crate::reporter::{ReportInput, Reporter};
use crate::scoring::{compute_summary, question_insights, QuestionInsight, ScoreSummary};
use crate::store::AssessmentStore;

pub struct EngineResult {
    pub summary: ScoreSummary,
    pub view: ReportView,
    pub rows: Vec<ExportRow>,
    pub question_notes: Vec<QuestionInsight>,
    pub notes: String,
}

impl EngineResult {
    pub fn render(
        &self,
        reporter: &dyn Reporter,
        questionnaire: &Questionnaire,
        verbose: bool,
    ) -> Result<String, AppError> {
        let input = ReportInput {
            questionnaire,
            summary: &self.summary,
            view: &self.view,
            rows: &self.rows,
            question_notes: &self.question_notes,
            notes: &self.notes,
            generated_at: Utc::now(),
            verbose,
        };
        Ok(reporter.format(&input)?)
    }
}

/// A working session rooted at a directory: config, definition and saved answers.
pub struct Session {
    pub config: Config,
    pub questionnaire: Questionnaire,
    pub store: AssessmentStore,
    pub store_path: PathBuf,
}

impl Session {
    pub fn open(root: &Path) -> Result<Self, AppError> {
        let config = Config::load(root)?;
        Self::with_config(root, config)
    }

    pub fn with_config(root: &Path, config: Config) -> Result<Self, AppError> {
        let questionnaire = match config.questionnaire_path(root) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading custom questionnaire");
                Questionnaire::from_path(&path)?
            }
            None => Questionnaire::builtin(),
        };
        let store_path = config.store_path(root);
        let store = AssessmentStore::load(&store_path)?;
        Ok(Session {
            config,
            questionnaire,
            store,
            store_path,
        })
    }

    pub fn summary(&self) -> ScoreSummary {
        compute_summary(&self.questionnaire, &self.store.answers)
    }

    pub fn evaluate(&self) -> EngineResult {
        let summary = self.summary();
        let view = ReportView::build(&summary, &self.questionnaire, self.config.report.benchmark);
        let rows = export_rows(&self.questionnaire, &self.store.answers);
        let question_notes =
            question_insights(&self.questionnaire, &self.store.answers, question_table());
        tracing::debug!(
            average = summary.average,
            completion = summary.completion,
            "assessment scored"
        );
        EngineResult {
            summary,
            view,
            rows,
            question_notes,
            notes: self.store.notes.clone(),
        }
    }

    /// Parses raw CLI input for `id` and records it. No input clears the answer.
    pub fn answer(&mut self, id: &str, raw: &[String]) -> Result<(), AppError> {
        let question = self
            .questionnaire
            .question(id)
            .ok_or_else(|| AppError::UnknownQuestion(id.to_string()))?;
        let value = parse_answer(question, raw)?;
        tracing::info!(id, answered = value.is_answered(), "answer recorded");
        self.store.set_answer(id, value);
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        Ok(self.store.save(&self.store_path)?)
    }
}

fn invalid(question: &QuestionSpec, reason: String) -> AppError {
    AppError::InvalidAnswer {
        id: question.id.clone(),
        reason,
    }
}

/// Turns command-line words into an [`AnswerValue`] for `question`.
///
/// Choice questions accept an option label (case-insensitive), an option
/// code, or a number in [0, 1]. Multi-select takes one option key per word.
pub fn parse_answer(question: &QuestionSpec, raw: &[String]) -> Result<AnswerValue, AppError> {
    if raw.is_empty() {
        return Ok(AnswerValue::Absent);
    }
    match question.kind {
        QuestionType::Text => Ok(AnswerValue::Text(raw.join(" "))),
        QuestionType::Multi => {
            let keys = raw
                .iter()
                .map(|word| {
                    question
                        .find_option(word)
                        .map(|option| option.key().to_string())
                        .ok_or_else(|| invalid(question, format!("unknown option `{word}`")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AnswerValue::Selection(keys))
        }
        QuestionType::Single | QuestionType::Scale | QuestionType::Boolean => {
            let word = raw.join(" ");
            if let Some(option) = question.options.iter().find(|o| {
                o.code.as_deref() == Some(word.as_str()) || o.label.eq_ignore_ascii_case(&word)
            }) {
                return Ok(AnswerValue::Number(option.value));
            }
            match word.parse::<f64>() {
                Ok(value) if (0.0..=1.0).contains(&value) => Ok(AnswerValue::Number(value)),
                Ok(value) => Err(invalid(question, format!("{value} is outside [0, 1]"))),
                Err(_) => Err(invalid(question, format!("`{word}` matches no option"))),
            }
        }
    }
}

/// Scores the saved answers under `root` in one call.
pub fn run(root: &Path) -> Result<(Session, EngineResult), AppError> {
    let session = Session::open(root)?;
    let result = session.evaluate();
    Ok((session, result))
}
