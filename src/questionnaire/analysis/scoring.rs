//! Per-question scoring and category aggregation.
//!
//! A score is a 0-100 proxy for engagement/intensity on that axis, not a
//! correctness measure: ordinal types scale the selected position,
//! multi-select scales option coverage, free text scales word count. The
//! heuristics are intentionally simple so category scores stay explainable to
//! end users.

use std::collections::BTreeMap;

use super::classifier::CategorizedResponses;
use super::config::AnalysisConfig;
use crate::questionnaire::domain::{AnswerValue, QuestionDefinition, QuestionType};

/// Computes the score for a single answer. Pure; malformed answers take the
/// question type's default score instead of raising.
pub(crate) fn score_answer(
    question: &QuestionDefinition,
    answer: &AnswerValue,
    config: &AnalysisConfig,
) -> u8 {
    match question.question_type {
        QuestionType::Radio | QuestionType::Select => score_ordinal(question, answer, config),
        QuestionType::Slider => score_slider(question, answer, config),
        QuestionType::MultiSelect => score_coverage(question, answer),
        QuestionType::Text => score_free_text(answer, config),
    }
}

/// Averages per-question scores within each category, rounded to nearest.
/// A category with zero scored questions is excluded entirely rather than
/// zero-filled, so untouched topics never read as weaknesses.
pub(crate) fn aggregate_categories(
    categorized: &CategorizedResponses<'_>,
    config: &AnalysisConfig,
) -> BTreeMap<String, u8> {
    let mut scores = BTreeMap::new();

    for (category, entries) in categorized {
        if entries.is_empty() {
            continue;
        }

        let total: u32 = entries
            .iter()
            .map(|(question, answer)| u32::from(score_answer(question, answer, config)))
            .sum();
        let mean = (f64::from(total) / entries.len() as f64).round() as u8;
        scores.insert(category.clone(), mean);
    }

    scores
}

/// Radio/select: the 0-based index of the selected option, scaled to 0-100.
/// Option ordering encodes intensity.
fn score_ordinal(question: &QuestionDefinition, answer: &AnswerValue, config: &AnalysisConfig) -> u8 {
    let steps = question.options.len();
    if steps <= 1 {
        return config.neutral_score;
    }

    let Some(value) = answer.as_str() else {
        return config.neutral_score;
    };

    match question.options.iter().position(|option| option.value == value) {
        Some(index) => scale(index as f64, (steps - 1) as f64),
        None => config.neutral_score,
    }
}

/// Slider: a 1-based position into the option scale. Five steps is the common
/// case but any count of two or more works.
fn score_slider(question: &QuestionDefinition, answer: &AnswerValue, config: &AnalysisConfig) -> u8 {
    let steps = question.options.len();
    if steps <= 1 {
        return config.neutral_score;
    }

    let Some(position) = answer.as_number() else {
        return config.neutral_score;
    };
    if !position.is_finite() || position < 1.0 || position > steps as f64 {
        return config.neutral_score;
    }

    scale(position - 1.0, (steps - 1) as f64)
}

/// Multi-select: fraction of the option set covered by the selection.
fn score_coverage(question: &QuestionDefinition, answer: &AnswerValue) -> u8 {
    let Some(selected) = answer.as_selections() else {
        return 0;
    };
    if selected.is_empty() || question.options.is_empty() {
        return 0;
    }

    let ratio = (selected.len() as f64 / question.options.len() as f64).min(1.0);
    (ratio * 100.0).round() as u8
}

/// Free text: whitespace-delimited word count, saturating at the configured
/// word budget (5 points per word under the defaults).
fn score_free_text(answer: &AnswerValue, config: &AnalysisConfig) -> u8 {
    let Some(text) = answer.as_str() else {
        return 0;
    };

    let words = text.split_whitespace().count();
    let ratio = (words as f64 / f64::from(config.text_words_to_saturate)).min(1.0);
    (ratio * 100.0).round() as u8
}

fn scale(position: f64, span: f64) -> u8 {
    ((position / span) * 100.0).round() as u8
}
