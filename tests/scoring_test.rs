use healer_assessment::answers::{AnswerMap, AnswerValue};
use healer_assessment::dimension::{Dimension, Tier};
use healer_assessment::insight::templates::{dimension_table, question_table};
use healer_assessment::insight::InsightTable;
use healer_assessment::questionnaire::builtin::dimension_metas;
use healer_assessment::questionnaire::{OptionItem, QuestionSpec, QuestionType, Questionnaire};
use healer_assessment::scoring::{
    compute_summary, compute_summary_with, normalize, question_insights, tier_for,
};
use pretty_assertions::assert_eq;

fn make_question(
    id: &str,
    dimension: Dimension,
    kind: QuestionType,
    weight: f64,
    options: Vec<OptionItem>,
) -> QuestionSpec {
    QuestionSpec {
        id: id.to_string(),
        title: format!("Question {id}"),
        helper: None,
        dimension,
        kind,
        weight,
        options,
        placeholder: None,
    }
}

fn yes_no_question(id: &str, dimension: Dimension) -> QuestionSpec {
    make_question(
        id,
        dimension,
        QuestionType::Boolean,
        1.0,
        vec![OptionItem::new("Yes", 1.0), OptionItem::new("No", 0.0)],
    )
}

fn multi_question() -> QuestionSpec {
    make_question(
        "m1",
        Dimension::Sales,
        QuestionType::Multi,
        1.0,
        vec![
            OptionItem::new("A", 0.2).with_code("a"),
            OptionItem::new("B", 0.8).with_code("b"),
        ],
    )
}

fn answers(entries: &[(&str, AnswerValue)]) -> AnswerMap {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect()
}

#[test]
fn test_numeric_answer_in_range_is_unchanged() {
    let q = yes_no_question("q1", Dimension::Sales);
    for value in [0.0, 0.05, 0.5, 0.75, 1.0] {
        assert_eq!(normalize(&q, &AnswerValue::Number(value)), value);
    }
}

#[test]
fn test_numeric_answer_is_clamped() {
    let q = yes_no_question("q1", Dimension::Sales);
    assert_eq!(normalize(&q, &AnswerValue::Number(1.4)), 1.0);
    assert_eq!(normalize(&q, &AnswerValue::Number(-0.2)), 0.0);
}

#[test]
fn test_multi_select_averages_matched_options() {
    let q = multi_question();
    assert_eq!(normalize(&q, &AnswerValue::from(vec!["a", "b"])), 0.5);
    assert_eq!(normalize(&q, &AnswerValue::from(vec!["b", "a"])), 0.5);
}

#[test]
fn test_multi_select_ignores_unknown_keys() {
    let q = multi_question();
    assert_eq!(normalize(&q, &AnswerValue::from(vec!["b", "zzz"])), 0.8);
    assert_eq!(normalize(&q, &AnswerValue::from(vec!["x", "y"])), 0.0);
    assert_eq!(normalize(&q, &AnswerValue::Selection(vec![])), 0.0);
}

#[test]
fn test_multi_select_uses_code_not_label_when_code_present() {
    let q = multi_question();
    // "A" is the label of an option that has a code, so it does not match.
    assert_eq!(normalize(&q, &AnswerValue::from(vec!["A"])), 0.0);
}

#[test]
fn test_multi_select_falls_back_to_label() {
    let q = make_question(
        "m2",
        Dimension::Content,
        QuestionType::Multi,
        1.0,
        vec![OptionItem::new("Stories", 0.6), OptionItem::new("Cases", 1.0)],
    );
    assert_eq!(normalize(&q, &AnswerValue::from(vec!["Stories", "Cases"])), 0.8);
}

#[test]
fn test_other_shapes_normalize_to_zero() {
    let text = make_question("t1", Dimension::Operations, QuestionType::Text, 0.0, vec![]);
    assert_eq!(normalize(&text, &AnswerValue::from("lots to say")), 0.0);

    // A selection on a non-multi question is not a recognised shape.
    let single = yes_no_question("q1", Dimension::Sales);
    assert_eq!(normalize(&single, &AnswerValue::from(vec!["Yes"])), 0.0);
    assert_eq!(normalize(&single, &AnswerValue::from("Yes")), 0.0);
    assert_eq!(normalize(&single, &AnswerValue::Absent), 0.0);
    assert_eq!(normalize(&single, &AnswerValue::Number(f64::NAN)), 0.0);
}

#[test]
fn test_unanswered_question_counts_against_dimension() {
    let questionnaire = Questionnaire::new(
        vec![
            yes_no_question("q1", Dimension::Product),
            yes_no_question("q2", Dimension::Product),
        ],
        dimension_metas(),
    );
    let summary = compute_summary(&questionnaire, &answers(&[("q1", AnswerValue::Number(1.0))]));
    assert_eq!(summary.score_for(Dimension::Product), 50);
    assert_eq!(summary.answered_count, 1);
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.completion, 50);
}

#[test]
fn test_dimension_without_questions_scores_zero() {
    let questionnaire = Questionnaire::new(
        vec![yes_no_question("q1", Dimension::Product)],
        dimension_metas(),
    );
    let summary = compute_summary(&questionnaire, &answers(&[("q1", AnswerValue::Number(1.0))]));
    assert_eq!(summary.score_for(Dimension::Product), 100);
    for d in Dimension::ALL.into_iter().filter(|d| *d != Dimension::Product) {
        assert_eq!(summary.score_for(d), 0);
        assert_eq!(summary.result_for(d).unwrap().tier, Tier::Low);
    }
    // Unweighted mean of six scores: 100 / 6 rounds to 17.
    assert_eq!(summary.average, 17);
}

#[test]
fn test_zero_answer_still_counts_as_answered() {
    let questionnaire = Questionnaire::new(
        vec![yes_no_question("q1", Dimension::Sales)],
        dimension_metas(),
    );
    let summary = compute_summary(&questionnaire, &answers(&[("q1", AnswerValue::Number(0.0))]));
    assert_eq!(summary.answered_count, 1);
    assert_eq!(summary.completion, 100);
    assert_eq!(summary.score_for(Dimension::Sales), 0);
}

#[test]
fn test_blank_and_null_answers_are_unanswered() {
    let questionnaire = Questionnaire::new(
        vec![
            yes_no_question("q1", Dimension::Sales),
            yes_no_question("q2", Dimension::Sales),
        ],
        dimension_metas(),
    );
    let summary = compute_summary(
        &questionnaire,
        &answers(&[("q1", AnswerValue::from("")), ("q2", AnswerValue::Absent)]),
    );
    assert_eq!(summary.answered_count, 0);
    assert_eq!(summary.completion, 0);
}

#[test]
fn test_weight_zero_questions_are_excluded() {
    let questionnaire = Questionnaire::new(
        vec![
            yes_no_question("q1", Dimension::Operations),
            make_question("q2", Dimension::Operations, QuestionType::Text, 0.0, vec![]),
        ],
        dimension_metas(),
    );
    let summary = compute_summary(
        &questionnaire,
        &answers(&[
            ("q1", AnswerValue::Number(1.0)),
            ("q2", AnswerValue::from("need more leads")),
        ]),
    );
    assert_eq!(summary.total_count, 1);
    assert_eq!(summary.answered_count, 1);
    assert_eq!(summary.score_for(Dimension::Operations), 100);
}

#[test]
fn test_weights_scale_contribution() {
    let mut heavy = yes_no_question("q1", Dimension::Content);
    heavy.weight = 3.0;
    let light = yes_no_question("q2", Dimension::Content);
    let questionnaire = Questionnaire::new(vec![heavy, light], dimension_metas());
    let summary = compute_summary(&questionnaire, &answers(&[("q1", AnswerValue::Number(1.0))]));
    // 3 / 4
    assert_eq!(summary.score_for(Dimension::Content), 75);
}

#[test]
fn test_no_scoreable_questions_gives_degenerate_summary() {
    let questionnaire = Questionnaire::new(vec![], dimension_metas());
    let summary = compute_summary(&questionnaire, &AnswerMap::new());
    assert_eq!(summary.dimension_results.len(), 6);
    assert!(summary.dimension_results.iter().all(|r| r.score == 0));
    assert_eq!(summary.average, 0);
    assert_eq!(summary.total_count, 0);
    assert_eq!(summary.completion, 0);
}

#[test]
fn test_completion_never_decreases_as_answers_are_added() {
    let questionnaire = Questionnaire::builtin();
    let mut answers = AnswerMap::new();
    let mut last = compute_summary(&questionnaire, &answers).completion;
    for q in &questionnaire.questions {
        answers.insert(q.id.clone(), AnswerValue::Number(0.3));
        let completion = compute_summary(&questionnaire, &answers).completion;
        assert!(completion >= last, "{} dropped completion", q.id);
        last = completion;
    }
    assert_eq!(last, 100);
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(tier_for(75), Tier::High);
    assert_eq!(tier_for(74), Tier::Mid);
    assert_eq!(tier_for(50), Tier::Mid);
    assert_eq!(tier_for(49), Tier::Low);
}

#[test]
fn test_tier_selects_matching_template() {
    let mut q1 = yes_no_question("q1", Dimension::Positioning);
    q1.weight = 3.0;
    let q2 = yes_no_question("q2", Dimension::Positioning);
    let questionnaire = Questionnaire::new(vec![q1, q2], dimension_metas());
    let summary = compute_summary(&questionnaire, &answers(&[("q1", AnswerValue::Number(1.0))]));
    let result = summary.result_for(Dimension::Positioning).unwrap();
    assert_eq!(result.score, 75);
    assert_eq!(result.tier, Tier::High);
    assert_eq!(
        &result.insight,
        dimension_table()
            .lookup(&Dimension::Positioning, Tier::High)
            .unwrap()
    );
}

#[test]
fn test_compute_is_idempotent() {
    let questionnaire = Questionnaire::builtin();
    let answers = answers(&[
        ("q1", AnswerValue::Number(0.75)),
        ("q4", AnswerValue::Number(0.4)),
        ("q8", AnswerValue::Number(1.0)),
        ("q10", AnswerValue::from("traffic")),
    ]);
    assert_eq!(
        compute_summary(&questionnaire, &answers),
        compute_summary(&questionnaire, &answers)
    );
}

#[test]
fn test_end_to_end_single_question() {
    let questionnaire = Questionnaire::new(
        vec![yes_no_question("Q1", Dimension::Positioning)],
        dimension_metas(),
    );

    let full = compute_summary(&questionnaire, &answers(&[("Q1", AnswerValue::Number(1.0))]));
    let result = full.result_for(Dimension::Positioning).unwrap();
    assert_eq!(result.score, 100);
    assert_eq!(result.tier, Tier::High);
    assert_eq!(full.completion, 100);

    let empty = compute_summary(&questionnaire, &AnswerMap::new());
    let result = empty.result_for(Dimension::Positioning).unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.tier, Tier::Low);
    assert_eq!(empty.completion, 0);
}

#[test]
fn test_builtin_fully_answered_at_best_options() {
    let questionnaire = Questionnaire::builtin();
    let answers: AnswerMap = questionnaire
        .scored()
        .map(|q| (q.id.clone(), AnswerValue::Number(1.0)))
        .collect();
    let summary = compute_summary(&questionnaire, &answers);
    assert_eq!(summary.total_count, 9);
    assert_eq!(summary.completion, 100);
    assert_eq!(summary.average, 100);
}

#[test]
fn test_missing_template_yields_empty_block() {
    let questionnaire = Questionnaire::builtin();
    let summary = compute_summary_with(&questionnaire, &AnswerMap::new(), &InsightTable::new());
    assert!(summary
        .dimension_results
        .iter()
        .all(|r| r.insight.summary.is_empty() && r.insight.actions.is_empty()));
}

#[test]
fn test_question_insights_only_for_answered_entries() {
    let questionnaire = Questionnaire::builtin();
    let notes = question_insights(
        &questionnaire,
        &answers(&[
            ("q1", AnswerValue::Number(1.0)),
            ("q4", AnswerValue::Number(0.05)),
            ("q9", AnswerValue::Number(0.8)),
            ("q8", AnswerValue::from("")),
        ]),
        question_table(),
    );
    let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["q4", "q9"]);
    assert_eq!(notes[0].tier, Tier::Low);
    assert_eq!(notes[0].value, 5);
    assert_eq!(notes[1].tier, Tier::High);
}
