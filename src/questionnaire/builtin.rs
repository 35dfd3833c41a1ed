//! The built-in healer growth questionnaire.

use crate::dimension::{Dimension, DimensionMeta};

use super::{OptionItem, QuestionSpec, QuestionType};

pub fn dimension_metas() -> Vec<DimensionMeta> {
    vec![
        DimensionMeta::new(
            Dimension::Positioning,
            "Positioning & Vision",
            "Clarity of audience profile, value proposition and differentiating story",
            "#9b5de5",
        ),
        DimensionMeta::new(
            Dimension::Product,
            "Product & Delivery",
            "Product structure, ticket-size capacity and delivery experience",
            "#f15bb5",
        ),
        DimensionMeta::new(
            Dimension::Content,
            "Content & Story",
            "Brand story, content pillars and expressive power",
            "#fee440",
        ),
        DimensionMeta::new(
            Dimension::ShortVideo,
            "Short-Video Operations",
            "Account positioning, topic cadence and data reviews",
            "#00bbf9",
        ),
        DimensionMeta::new(
            Dimension::Sales,
            "Sales Loop",
            "Lead capture, private-channel nurturing and closing system",
            "#00f5d4",
        ),
        DimensionMeta::new(
            Dimension::Operations,
            "Operations & Resources",
            "Team setup, budget, data and learning routines",
            "#ff9f1c",
        ),
    ]
}

/// Evenly spaced values `(i + 1) / n`, so labels go weakest first.
fn scale_options(labels: &[&str]) -> Vec<OptionItem> {
    let n = labels.len() as f64;
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| OptionItem::new(label, (i as f64 + 1.0) / n))
        .collect()
}

fn options(items: &[(&str, f64)]) -> Vec<OptionItem> {
    items
        .iter()
        .map(|(label, value)| OptionItem::new(label, *value))
        .collect()
}

fn yes_no() -> Vec<OptionItem> {
    options(&[("Yes", 1.0), ("No", 0.0)])
}

fn question(
    id: &str,
    title: &str,
    helper: Option<&str>,
    dimension: Dimension,
    kind: QuestionType,
    weight: f64,
    options: Vec<OptionItem>,
) -> QuestionSpec {
    QuestionSpec {
        id: id.to_string(),
        title: title.to_string(),
        helper: helper.map(str::to_string),
        dimension,
        kind,
        weight,
        options,
        placeholder: None,
    }
}

pub fn questions() -> Vec<QuestionSpec> {
    vec![
        question(
            "q1",
            "Can you describe your ideal client down to age, job and a typical day?",
            Some("The more specific, the easier it is for content and follow-up to hit real pain points"),
            Dimension::Positioning,
            QuestionType::Single,
            1.0,
            options(&[
                ("Name, photo and family background, all describable", 1.0),
                ("Age, occupation and lifestyle are clear", 0.75),
                ("Only a rough age range or industry", 0.4),
                ("Nothing finer than \"anxious office workers\"", 0.15),
                ("No description yet, happy to work it out together", 0.05),
            ]),
        ),
        question(
            "q2",
            "Is your one-sentence value proposition settled?",
            Some("For example: audience -> problem solved -> result achieved"),
            Dimension::Positioning,
            QuestionType::Boolean,
            0.9,
            yes_no(),
        ),
        question(
            "q3",
            "Roughly what is your monthly revenue?",
            None,
            Dimension::Operations,
            QuestionType::Single,
            1.0,
            options(&[
                (">= 2M / month", 1.0),
                ("1M - 2M", 0.9),
                ("500k - 1M", 0.75),
                ("200k - 500k", 0.55),
                ("100k - 200k", 0.4),
                ("50k - 100k", 0.3),
                ("30k - 50k", 0.22),
                ("10k - 30k", 0.15),
                ("5k - 10k", 0.1),
                ("3k - 5k", 0.07),
                ("< 3k / no revenue yet", 0.04),
            ]),
        ),
        question(
            "q4",
            "What is the ticket price of your flagship offer?",
            None,
            Dimension::Product,
            QuestionType::Single,
            1.0,
            options(&[
                (">= 50k per sale", 1.0),
                ("30k - 50k", 0.85),
                ("10k - 30k", 0.65),
                ("5k - 10k", 0.4),
                ("2k - 5k", 0.25),
                ("1k - 2k", 0.18),
                ("500 - 1k", 0.12),
                ("200 - 500", 0.08),
                ("< 200", 0.05),
            ]),
        ),
        question(
            "q5",
            "How far has your delivery process been standardised?",
            Some("Pre-assessment, sessions and review: are there SOPs and forms?"),
            Dimension::Product,
            QuestionType::Single,
            0.9,
            options(&[
                ("Every stage has SOPs, forms and materials an assistant can run", 1.0),
                ("Main flow is clear, some steps improvised", 0.75),
                ("Notes exist but no fixed rhythm", 0.4),
                ("Entirely arranged ad hoc by me", 0.15),
            ]),
        ),
        question(
            "q6",
            "How did content and short video go over the last four weeks?",
            Some("Is the cadence stable, and do you check completion and comment data?"),
            Dimension::ShortVideo,
            QuestionType::Single,
            0.9,
            options(&[
                ("3+ posts a week, each reviewed against data", 1.0),
                ("1-2 posts a week, occasional review", 0.65),
                ("Irregular posts, rarely look at data", 0.25),
                ("Haven't started producing content", 0.05),
            ]),
        ),
        question(
            "q7",
            "Do you have enough real cases and client testimonials?",
            None,
            Dimension::Content,
            QuestionType::Scale,
            0.8,
            scale_options(&[
                "None yet, still collecting",
                "Only a handful of short reviews",
                "A few classic cases",
                "Cases with screenshots for every stage",
            ]),
        ),
        question(
            "q8",
            "Is the lead capture and segmentation path clear?",
            Some("Short link, form, support chat, community: is each step defined?"),
            Dimension::Sales,
            QuestionType::Single,
            1.0,
            options(&[
                ("Multiple paths (links, DMs, forms, community)", 1.0),
                ("Two paths in parallel", 0.75),
                ("A single path", 0.45),
                ("No clear path", 0.1),
            ]),
        ),
        question(
            "q9",
            "What is the average conversion rate from private channel to sale?",
            None,
            Dimension::Sales,
            QuestionType::Single,
            0.9,
            options(&[
                (">= 60%", 1.0),
                ("40% - 59%", 0.8),
                ("25% - 39%", 0.6),
                ("10% - 24%", 0.35),
                ("< 10%", 0.15),
            ]),
        ),
        QuestionSpec {
            placeholder: Some("e.g. not enough traffic, no scripts, deals stall".to_string()),
            ..question(
                "q10",
                "What business bottleneck do you most want to solve right now?",
                None,
                Dimension::Operations,
                QuestionType::Text,
                0.0,
                vec![],
            )
        },
    ]
}
