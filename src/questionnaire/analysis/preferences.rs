//! Match-preference extraction.
//!
//! Preferences are role-specific answers copied verbatim into a flat map for
//! the matching/recommendation layer. The mapping is a lookup table; an
//! unanswered source question simply omits its key, never null-fills it.

use std::collections::BTreeMap;

use crate::questionnaire::domain::{AnswerValue, ResponseSet, Role};

/// Maps one source question to one preference key for one role.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PreferenceRule {
    pub role: Role,
    pub question_id: &'static str,
    pub preference_key: &'static str,
}

/// Shipped rule table for the standard questionnaires.
pub(crate) const PREFERENCE_RULES: &[PreferenceRule] = &[
    PreferenceRule {
        role: Role::Startup,
        question_id: "startup_q10",
        preference_key: "investorInvolvement",
    },
    PreferenceRule {
        role: Role::Investor,
        question_id: "investor_q5",
        preference_key: "startupStage",
    },
    PreferenceRule {
        role: Role::Investor,
        question_id: "investor_q7",
        preference_key: "marketCriteria",
    },
];

pub(crate) fn extract_preferences(
    responses: &ResponseSet,
    role: Role,
    rules: &[PreferenceRule],
) -> BTreeMap<String, AnswerValue> {
    let mut preferences = BTreeMap::new();

    for rule in rules {
        if rule.role != role {
            continue;
        }
        if let Some(answer) = responses.get(rule.question_id) {
            if answer.is_answered() {
                preferences.insert(rule.preference_key.to_string(), answer.clone());
            }
        }
    }

    preferences
}
