//! Derived report view shared by every renderer.
//!
//! Everything here is computed from a [`ScoreSummary`]; none of it feeds
//! back into scoring.

use serde::Serialize;

use crate::dimension::Dimension;
use crate::questionnaire::Questionnaire;
use crate::scoring::{DimensionResult, ScoreSummary};

/// Target score the dimensions are compared against.
pub const DEFAULT_BENCHMARK: u32 = 82;

const STRONG_FROM: u32 = 75;
const BALANCED_FROM: u32 = 55;
const PRIORITY_COUNT: usize = 3;
const TIMELINE_ACTIONS: usize = 3;
const PHASES: [&str; 3] = ["Immediately", "7-14 days", "30-day upgrade"];

/// Heat-map status of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatStatus {
    Leading,
    Following,
    Warning,
    Breakthrough,
}

impl HeatStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => HeatStatus::Leading,
            65..=79 => HeatStatus::Following,
            50..=64 => HeatStatus::Warning,
            _ => HeatStatus::Breakthrough,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeatStatus::Leading => "Keep the lead",
            HeatStatus::Following => "Keep following up",
            HeatStatus::Warning => "Needs attention",
            HeatStatus::Breakthrough => "Break through now",
        }
    }
}

/// How much the answers can be trusted, from completion alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    NeedsMore,
}

impl Confidence {
    pub fn from_completion(completion: u32) -> Self {
        match completion {
            80.. => Confidence::High,
            60..=79 => Confidence::Medium,
            _ => Confidence::NeedsMore,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::NeedsMore => "needs more answers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatRow {
    pub key: Dimension,
    pub label: String,
    pub score: u32,
    /// Distance below the benchmark, 0 when at or above it.
    pub gap: u32,
    pub status: HeatStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    pub phase: String,
    pub key: Dimension,
    pub label: String,
    pub score: u32,
    pub summary: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub benchmark: u32,
    pub average: u32,
    pub completion: u32,
    pub answered_count: usize,
    pub total_count: usize,
    pub finished: bool,
    pub confidence: Confidence,
    pub highest: Option<Dimension>,
    pub lowest: Option<Dimension>,
    pub spread: u32,
    pub average_gap: u32,
    /// Lowest-scoring dimensions first.
    pub priorities: Vec<Dimension>,
    pub strong: Vec<Dimension>,
    pub balanced: Vec<Dimension>,
    pub risk: Vec<Dimension>,
    pub heatmap: Vec<HeatRow>,
    pub timeline: Vec<TimelineStep>,
}

impl ReportView {
    pub fn build(summary: &ScoreSummary, questionnaire: &Questionnaire, benchmark: u32) -> Self {
        let results = &summary.dimension_results;

        // Stable, so ties keep dimension order.
        let mut sorted: Vec<&DimensionResult> = results.iter().collect();
        sorted.sort_by_key(|r| r.score);

        let lowest = sorted.first().copied();
        let highest = sorted.last().copied();
        let spread = match (highest, lowest) {
            (Some(h), Some(l)) => h.score - l.score,
            _ => 0,
        };

        let average_gap = if results.is_empty() {
            0
        } else {
            let total: f64 = results
                .iter()
                .map(|r| benchmark as f64 - r.score as f64)
                .sum();
            (total / results.len() as f64).round().max(0.0) as u32
        };

        let priorities: Vec<&DimensionResult> =
            sorted.iter().take(PRIORITY_COUNT).copied().collect();

        let pick = |keep: &dyn Fn(u32) -> bool| -> Vec<Dimension> {
            results
                .iter()
                .filter(|r| keep(r.score))
                .map(|r| r.key)
                .collect()
        };

        let heatmap = results
            .iter()
            .map(|r| HeatRow {
                key: r.key,
                label: questionnaire.label(r.key).to_string(),
                score: r.score,
                gap: benchmark.saturating_sub(r.score),
                status: HeatStatus::from_score(r.score),
            })
            .collect();

        let timeline = priorities
            .iter()
            .enumerate()
            .map(|(i, r)| TimelineStep {
                phase: PHASES
                    .get(i)
                    .map_or_else(|| format!("Stage {}", i + 1), |p| p.to_string()),
                key: r.key,
                label: questionnaire.label(r.key).to_string(),
                score: r.score,
                summary: r.insight.summary.clone(),
                actions: r
                    .insight
                    .actions
                    .iter()
                    .take(TIMELINE_ACTIONS)
                    .cloned()
                    .collect(),
            })
            .collect();

        ReportView {
            benchmark,
            average: summary.average,
            completion: summary.completion,
            answered_count: summary.answered_count,
            total_count: summary.total_count,
            finished: summary.completion >= 100,
            confidence: Confidence::from_completion(summary.completion),
            highest: highest.map(|r| r.key),
            lowest: lowest.map(|r| r.key),
            spread,
            average_gap,
            priorities: priorities.iter().map(|r| r.key).collect(),
            strong: pick(&|s| s >= STRONG_FROM),
            balanced: pick(&|s| (BALANCED_FROM..STRONG_FROM).contains(&s)),
            risk: pick(&|s| s < BALANCED_FROM),
            heatmap,
            timeline,
        }
    }
}
