use owo_colors::OwoColorize;

use crate::dimension::{Dimension, Tier};
use crate::error::ReportError;
use crate::questionnaire::Questionnaire;

use super::{ReportInput, Reporter};

const BAR_WIDTH: usize = 20;

pub struct CliReporter;

fn colored_score(score: u32) -> String {
    match score {
        75..=100 => score.to_string().green().to_string(),
        50..=74 => score.to_string().yellow().to_string(),
        _ => score.to_string().red().to_string(),
    }
}

fn bar(score: u32) -> String {
    let filled = (score.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled).dimmed()
    )
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!(
        "\n  {} {} {}\n",
        "──".dimmed(),
        title,
        "─".repeat(50 - title.len().min(49)).dimmed()
    ));
}

fn list(questionnaire: &Questionnaire, dimensions: &[Dimension]) -> String {
    if dimensions.is_empty() {
        return "none".to_string();
    }
    dimensions
        .iter()
        .map(|d| questionnaire.label(*d).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Reporter for CliReporter {
    fn format(&self, input: &ReportInput<'_>) -> Result<String, ReportError> {
        let q = input.questionnaire;
        let summary = input.summary;
        let view = input.view;

        let mut out = String::new();
        out.push_str(&format!(
            "\n  {} v{}\n\n",
            "healer-assessment".bold(),
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str(&format!(
            "  Average: {} / 100   Completion: {}% ({}/{} answered, confidence {})\n",
            colored_score(summary.average),
            summary.completion,
            summary.answered_count,
            summary.total_count,
            view.confidence.label()
        ));
        out.push_str(&format!(
            "  Spread: {}   Gap to benchmark {}: {}\n",
            view.spread, view.benchmark, view.average_gap
        ));
        out.push_str(&format!("  Strengths: {}\n", list(q, &view.strong).green()));
        out.push_str(&format!("  Developing: {}\n", list(q, &view.balanced).yellow()));
        out.push_str(&format!("  Risks: {}\n", list(q, &view.risk).red()));

        section(&mut out, "Dimensions");
        for (result, row) in summary.dimension_results.iter().zip(&view.heatmap) {
            let tier = match result.tier {
                Tier::High => "HIGH".green().bold().to_string(),
                Tier::Mid => " MID".yellow().to_string(),
                Tier::Low => " LOW".red().to_string(),
            };
            out.push_str(&format!(
                "  {}  {:<24} {:>3}  {}  {}\n",
                tier,
                row.label,
                colored_score(result.score),
                bar(result.score),
                row.status.label().dimmed()
            ));
            out.push_str(&format!("         {}\n", result.insight.summary));
            if input.verbose {
                out.push_str(&format!("         {}\n", result.insight.detail.dimmed()));
                for signal in &result.insight.signals {
                    out.push_str(&format!("         {}: {}\n", "Signal".magenta(), signal));
                }
            }
        }

        section(&mut out, "Action plan");
        for step in &view.timeline {
            out.push_str(&format!(
                "  {}  {} {}/100\n",
                step.phase.cyan().bold(),
                step.label,
                colored_score(step.score)
            ));
            for action in &step.actions {
                out.push_str(&format!("         - {}\n", action));
            }
        }

        if !input.question_notes.is_empty() {
            section(&mut out, "Question notes");
            for note in input.question_notes {
                let title = q.question(&note.id).map_or(note.id.as_str(), |s| s.title.as_str());
                out.push_str(&format!("  {}  {}\n", note.id.dimmed(), title));
                out.push_str(&format!("         {}\n", note.insight.summary));
                for action in &note.insight.actions {
                    out.push_str(&format!("         {}: {}\n", "Help".cyan(), action));
                }
            }
        }

        if !input.notes.is_empty() {
            section(&mut out, "Coach notes");
            for line in input.notes.lines() {
                out.push_str(&format!("  {}\n", line));
            }
        }

        out.push('\n');
        Ok(out)
    }
}
