//! Strength-tag derivation.
//!
//! Two sources feed the tag list: a generic rule that marks every
//! high-scoring category as a strength, and a per-role rule table keyed on
//! direct answer values. The table is data, not control flow, so new rules
//! slot in without touching the derivation logic.

use std::collections::BTreeMap;

use super::config::AnalysisConfig;
use crate::questionnaire::domain::{AnswerValue, ResponseSet, Role};

/// Condition a rule applies to the raw answer of its source question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TagPredicate {
    /// The answer equals this option value exactly.
    Equals(&'static str),
    /// The numeric answer (numeric strings included) is at least this value.
    AtLeast(f64),
}

impl TagPredicate {
    fn matches(&self, answer: &AnswerValue) -> bool {
        match self {
            TagPredicate::Equals(expected) => answer.as_str() == Some(expected),
            TagPredicate::AtLeast(minimum) => {
                answer.as_number().is_some_and(|value| value >= *minimum)
            }
        }
    }
}

/// One role-specific tag rule: when the named question's answer satisfies the
/// predicate, the literal tag is appended.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TagRule {
    pub role: Role,
    pub question_id: &'static str,
    pub predicate: TagPredicate,
    pub tag: &'static str,
}

/// Shipped rule table for the standard questionnaires.
pub(crate) const TAG_RULES: &[TagRule] = &[
    TagRule {
        role: Role::Startup,
        question_id: "startup_q1",
        predicate: TagPredicate::Equals("very_flexible"),
        tag: "Agile",
    },
    TagRule {
        role: Role::Startup,
        question_id: "startup_q10",
        predicate: TagPredicate::AtLeast(4.0),
        tag: "ESG Committed",
    },
    TagRule {
        role: Role::Investor,
        question_id: "investor_q1",
        predicate: TagPredicate::AtLeast(4.0),
        tag: "Hands-on Investor",
    },
    TagRule {
        role: Role::Investor,
        question_id: "investor_q3",
        predicate: TagPredicate::AtLeast(4.0),
        tag: "Well Connected",
    },
];

/// Derives the ordered, de-duplicated tag list: strong-category tags first
/// (category iteration order), then matching role rules in table order.
pub(crate) fn derive_tags(
    category_scores: &BTreeMap<String, u8>,
    responses: &ResponseSet,
    role: Role,
    rules: &[TagRule],
    config: &AnalysisConfig,
) -> Vec<String> {
    let mut tags = Vec::new();

    for (category, score) in category_scores {
        if *score >= config.strong_tag_threshold {
            push_unique(&mut tags, format!("Strong {category}"));
        }
    }

    for rule in rules {
        if rule.role != role {
            continue;
        }
        let Some(answer) = responses.get(rule.question_id) else {
            continue;
        };
        if rule.predicate.matches(answer) {
            push_unique(&mut tags, rule.tag.to_string());
        }
    }

    tags
}

fn push_unique(tags: &mut Vec<String>, tag: String) {
    if !tags.iter().any(|existing| *existing == tag) {
        tags.push(tag);
    }
}
