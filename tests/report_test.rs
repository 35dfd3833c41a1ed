use healer_assessment::dimension::{Dimension, Tier};
use healer_assessment::insight::InsightBlock;
use healer_assessment::questionnaire::Questionnaire;
use healer_assessment::report::{Confidence, HeatStatus, ReportView, DEFAULT_BENCHMARK};
use healer_assessment::scoring::{tier_for, DimensionResult, ScoreSummary};
use pretty_assertions::assert_eq;

fn summary_with(scores: [u32; 6], completion: u32) -> ScoreSummary {
    let dimension_results: Vec<DimensionResult> = Dimension::ALL
        .iter()
        .zip(scores)
        .map(|(key, score)| DimensionResult {
            key: *key,
            score,
            tier: tier_for(score),
            insight: InsightBlock::new(
                &format!("{key} summary"),
                "detail",
                &["first", "second", "third", "fourth"],
                &["signal"],
            ),
        })
        .collect();
    let average = (scores.iter().sum::<u32>() as f64 / 6.0).round() as u32;
    ScoreSummary {
        dimension_results,
        average,
        answered_count: 0,
        total_count: 0,
        completion,
    }
}

#[test]
fn test_priorities_are_the_three_lowest() {
    let summary = summary_with([90, 40, 60, 40, 75, 55], 100);
    let view = ReportView::build(&summary, &Questionnaire::builtin(), DEFAULT_BENCHMARK);
    // Ties keep dimension order.
    assert_eq!(
        view.priorities,
        vec![Dimension::Product, Dimension::ShortVideo, Dimension::Operations]
    );
    assert_eq!(view.lowest, Some(Dimension::Product));
    assert_eq!(view.highest, Some(Dimension::Positioning));
    assert_eq!(view.spread, 50);
}

#[test]
fn test_strength_and_risk_groups() {
    let summary = summary_with([90, 40, 60, 54, 75, 55], 100);
    let view = ReportView::build(&summary, &Questionnaire::builtin(), DEFAULT_BENCHMARK);
    assert_eq!(view.strong, vec![Dimension::Positioning, Dimension::Sales]);
    assert_eq!(view.balanced, vec![Dimension::Content, Dimension::Operations]);
    assert_eq!(view.risk, vec![Dimension::Product, Dimension::ShortVideo]);
}

#[test]
fn test_benchmark_gaps_are_clamped() {
    let summary = summary_with([90, 82, 0, 50, 100, 70], 100);
    let view = ReportView::build(&summary, &Questionnaire::builtin(), DEFAULT_BENCHMARK);
    let gaps: Vec<u32> = view.heatmap.iter().map(|r| r.gap).collect();
    assert_eq!(gaps, vec![0, 0, 82, 32, 0, 12]);
    // mean(82 - score) = (-8 + 0 + 82 + 32 - 18 + 12) / 6 = 16.67
    assert_eq!(view.average_gap, 17);
}

#[test]
fn test_average_gap_never_negative() {
    let summary = summary_with([100; 6], 100);
    let view = ReportView::build(&summary, &Questionnaire::builtin(), DEFAULT_BENCHMARK);
    assert_eq!(view.average_gap, 0);
}

#[test]
fn test_heatmap_uses_labels_and_status() {
    let summary = summary_with([80, 65, 50, 49, 0, 100], 40);
    let q = Questionnaire::builtin();
    let view = ReportView::build(&summary, &q, DEFAULT_BENCHMARK);
    let statuses: Vec<HeatStatus> = view.heatmap.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            HeatStatus::Leading,
            HeatStatus::Following,
            HeatStatus::Warning,
            HeatStatus::Breakthrough,
            HeatStatus::Breakthrough,
            HeatStatus::Leading,
        ]
    );
    assert_eq!(view.heatmap[0].label, q.label(Dimension::Positioning));
    assert_eq!(view.confidence, Confidence::NeedsMore);
    assert!(!view.finished);
}

#[test]
fn test_timeline_phases_and_action_cap() {
    let summary = summary_with([10, 20, 30, 90, 90, 90], 100);
    let view = ReportView::build(&summary, &Questionnaire::builtin(), DEFAULT_BENCHMARK);
    let phases: Vec<&str> = view.timeline.iter().map(|s| s.phase.as_str()).collect();
    assert_eq!(phases, vec!["Immediately", "7-14 days", "30-day upgrade"]);
    assert!(view.timeline.iter().all(|s| s.actions.len() == 3));
    assert_eq!(view.timeline[0].key, Dimension::Positioning);
    assert_eq!(view.timeline[0].summary, "positioning summary");
    assert!(view.finished);
    assert_eq!(view.confidence, Confidence::High);
}

#[test]
fn test_empty_summary_builds_empty_view() {
    let summary = ScoreSummary {
        dimension_results: vec![],
        average: 0,
        answered_count: 0,
        total_count: 0,
        completion: 0,
    };
    let view = ReportView::build(&summary, &Questionnaire::builtin(), DEFAULT_BENCHMARK);
    assert!(view.priorities.is_empty());
    assert!(view.timeline.is_empty());
    assert_eq!(view.highest, None);
    assert_eq!(view.spread, 0);
    assert_eq!(view.average_gap, 0);
}

#[test]
fn test_tier_field_matches_score() {
    let summary = summary_with([75, 74, 50, 49, 0, 100], 100);
    let tiers: Vec<Tier> = summary.dimension_results.iter().map(|r| r.tier).collect();
    assert_eq!(
        tiers,
        vec![Tier::High, Tier::Mid, Tier::Mid, Tier::Low, Tier::Low, Tier::High]
    );
}
