use crate::questionnaire::analysis::{AnalysisConfig, AnalysisEngine};
use crate::questionnaire::catalog::QuestionCatalog;
use crate::questionnaire::domain::{
    AnswerValue, QuestionDefinition, QuestionOption, QuestionType, ResponseSet,
};

pub(super) fn question(
    id: &str,
    category: &str,
    question_type: QuestionType,
    values: &[&str],
) -> QuestionDefinition {
    QuestionDefinition {
        id: id.to_string(),
        prompt: format!("prompt for {id}"),
        question_type,
        category: category.to_string(),
        required: true,
        options: values
            .iter()
            .map(|value| QuestionOption {
                value: value.to_string(),
                label: value.to_string(),
            })
            .collect(),
    }
}

pub(super) fn radio(id: &str, category: &str, values: &[&str]) -> QuestionDefinition {
    question(id, category, QuestionType::Radio, values)
}

pub(super) fn select(id: &str, category: &str, values: &[&str]) -> QuestionDefinition {
    question(id, category, QuestionType::Select, values)
}

pub(super) fn multi_select(id: &str, category: &str, values: &[&str]) -> QuestionDefinition {
    question(id, category, QuestionType::MultiSelect, values)
}

pub(super) fn text_question(id: &str, category: &str) -> QuestionDefinition {
    question(id, category, QuestionType::Text, &[])
}

pub(super) fn slider(id: &str, category: &str, steps: usize) -> QuestionDefinition {
    let values: Vec<String> = (1..=steps).map(|step| step.to_string()).collect();
    let borrowed: Vec<&str> = values.iter().map(String::as_str).collect();
    question(id, category, QuestionType::Slider, &borrowed)
}

/// Engine whose startup questionnaire is exactly `questions` (the investor
/// side is empty) with the default rubric.
pub(super) fn startup_engine(questions: Vec<QuestionDefinition>) -> AnalysisEngine {
    AnalysisEngine::new(
        QuestionCatalog::new(questions, Vec::new()),
        AnalysisConfig::default(),
    )
}

pub(super) fn config() -> AnalysisConfig {
    AnalysisConfig::default()
}

pub(super) fn text(value: &str) -> AnswerValue {
    AnswerValue::Text(value.to_string())
}

pub(super) fn number(value: f64) -> AnswerValue {
    AnswerValue::Number(value)
}

pub(super) fn selections(values: &[&str]) -> AnswerValue {
    AnswerValue::Selections(values.iter().map(|value| value.to_string()).collect())
}

pub(super) fn responses(entries: &[(&str, AnswerValue)]) -> ResponseSet {
    entries
        .iter()
        .map(|(id, answer)| (id.to_string(), answer.clone()))
        .collect()
}
