use std::collections::BTreeMap;

use serde::Serialize;

use crate::answers::{AnswerMap, AnswerValue};
use crate::dimension::{Dimension, Tier};
use crate::insight::templates::dimension_table;
use crate::insight::{InsightBlock, InsightTable, TierBands};
use crate::questionnaire::{QuestionSpec, QuestionType, Questionnaire};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionResult {
    pub key: Dimension,
    pub score: u32,
    pub tier: Tier,
    #[serde(flatten)]
    pub insight: InsightBlock,
}

/// Snapshot produced by [`compute_summary`]. Rebuilt from scratch on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub dimension_results: Vec<DimensionResult>,
    pub average: u32,
    pub answered_count: usize,
    pub total_count: usize,
    pub completion: u32,
}

impl ScoreSummary {
    pub fn result_for(&self, dimension: Dimension) -> Option<&DimensionResult> {
        self.dimension_results.iter().find(|r| r.key == dimension)
    }

    /// Score for a dimension, 0 when the summary carries no result for it.
    pub fn score_for(&self, dimension: Dimension) -> u32 {
        self.result_for(dimension).map_or(0, |r| r.score)
    }
}

/// Per-question note selected from the question insight table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionInsight {
    pub id: String,
    pub value: u32,
    pub tier: Tier,
    #[serde(flatten)]
    pub insight: InsightBlock,
}

pub fn tier_for(score: u32) -> Tier {
    TierBands::STANDARD.tier(score)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Maps one raw answer to a favourability value in [0, 1]. Total: every
/// input yields a value, malformed shapes yield 0.
pub fn normalize(question: &QuestionSpec, answer: &AnswerValue) -> f64 {
    match answer {
        AnswerValue::Number(value) => clamp_unit(*value),
        AnswerValue::Selection(keys) if question.kind == QuestionType::Multi => {
            let values: Vec<f64> = keys
                .iter()
                .filter_map(|key| question.find_option(key))
                .map(|option| option.value)
                .collect();
            if values.is_empty() {
                return 0.0;
            }
            clamp_unit(values.iter().sum::<f64>() / values.len() as f64)
        }
        AnswerValue::Selection(_) | AnswerValue::Text(_) | AnswerValue::Absent => 0.0,
    }
}

pub fn compute_summary(questionnaire: &Questionnaire, answers: &AnswerMap) -> ScoreSummary {
    compute_summary_with(questionnaire, answers, dimension_table())
}

/// Same as [`compute_summary`] with a caller-supplied insight table. A
/// dimension/tier pair missing from the table yields an empty block.
pub fn compute_summary_with(
    questionnaire: &Questionnaire,
    answers: &AnswerMap,
    insights: &InsightTable<Dimension>,
) -> ScoreSummary {
    // (possible weight, earned weight)
    let mut totals: BTreeMap<Dimension, (f64, f64)> =
        Dimension::ALL.iter().map(|d| (*d, (0.0, 0.0))).collect();
    let mut answered_count = 0;
    let mut total_count = 0;

    for question in questionnaire.scored() {
        total_count += 1;
        let entry = totals.entry(question.dimension).or_insert((0.0, 0.0));
        entry.0 += question.weight;
        if let Some(answer) = answers.get(&question.id).filter(|a| a.is_answered()) {
            entry.1 += normalize(question, answer) * question.weight;
            answered_count += 1;
        }
    }

    let dimension_results: Vec<DimensionResult> = totals
        .into_iter()
        .map(|(key, (possible, earned))| {
            let score = if possible > 0.0 {
                (earned / possible * 100.0).round().clamp(0.0, 100.0) as u32
            } else {
                0
            };
            let tier = tier_for(score);
            DimensionResult {
                key,
                score,
                tier,
                insight: insights.lookup(&key, tier).cloned().unwrap_or_default(),
            }
        })
        .collect();

    let average = if dimension_results.is_empty() {
        0
    } else {
        let sum: u32 = dimension_results.iter().map(|r| r.score).sum();
        (sum as f64 / dimension_results.len() as f64).round() as u32
    };

    let completion = if total_count > 0 {
        (answered_count as f64 / total_count as f64 * 100.0).round() as u32
    } else {
        0
    };

    ScoreSummary {
        dimension_results,
        average,
        answered_count,
        total_count,
        completion,
    }
}

/// Notes for answered, scored questions that have an entry in `table`, in
/// definition order. The tier comes from the normalized answer value on a
/// 0-100 scale.
pub fn question_insights(
    questionnaire: &Questionnaire,
    answers: &AnswerMap,
    table: &InsightTable<String>,
) -> Vec<QuestionInsight> {
    questionnaire
        .scored()
        .filter(|q| table.contains_key(q.id.as_str()))
        .filter_map(|q| {
            let answer = answers.get(&q.id).filter(|a| a.is_answered())?;
            let value = (normalize(q, answer) * 100.0).round() as u32;
            let tier = tier_for(value);
            let insight = table.lookup(q.id.as_str(), tier)?.clone();
            Some(QuestionInsight {
                id: q.id.clone(),
                value,
                tier,
                insight,
            })
        })
        .collect()
}
