use std::collections::BTreeMap;

use tracing::debug;

use crate::questionnaire::domain::{AnswerValue, QuestionDefinition, ResponseSet};

/// Answered questions grouped by the category of their owning question.
pub(crate) type CategorizedResponses<'a> =
    BTreeMap<String, Vec<(&'a QuestionDefinition, &'a AnswerValue)>>;

/// Groups raw answers by question category. Answers whose question id is not
/// in the catalog are dropped; stale or unknown client-supplied ids must not
/// abort an otherwise valid submission.
pub(crate) fn classify<'a>(
    responses: &'a ResponseSet,
    questions: &'a [QuestionDefinition],
) -> CategorizedResponses<'a> {
    let mut categorized = CategorizedResponses::new();

    for (question_id, answer) in responses {
        let Some(question) = questions.iter().find(|q| q.id == *question_id) else {
            debug!(question_id = %question_id, "dropping answer for unknown question id");
            continue;
        };

        categorized
            .entry(question.category.clone())
            .or_default()
            .push((question, answer));
    }

    categorized
}
