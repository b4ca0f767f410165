use std::collections::BTreeMap;

use super::common::*;
use crate::questionnaire::analysis::tags::{derive_tags, TagPredicate, TagRule, TAG_RULES};
use crate::questionnaire::domain::Role;

fn scores(entries: &[(&str, u8)]) -> BTreeMap<String, u8> {
    entries
        .iter()
        .map(|(category, score)| (category.to_string(), *score))
        .collect()
}

#[test]
fn strong_tags_respect_the_threshold_boundary() {
    let category_scores = scores(&[("Culture", 74), ("Growth", 75), ("Values", 100)]);

    let tags = derive_tags(
        &category_scores,
        &responses(&[]),
        Role::Startup,
        &[],
        &config(),
    );

    assert_eq!(tags, vec!["Strong Growth", "Strong Values"]);
}

#[test]
fn equals_rules_fire_on_exact_option_values() {
    let rules = [TagRule {
        role: Role::Startup,
        question_id: "startup_q1",
        predicate: TagPredicate::Equals("very_flexible"),
        tag: "Agile",
    }];

    let tags = derive_tags(
        &scores(&[]),
        &responses(&[("startup_q1", text("very_flexible"))]),
        Role::Startup,
        &rules,
        &config(),
    );
    assert_eq!(tags, vec!["Agile"]);

    let tags = derive_tags(
        &scores(&[]),
        &responses(&[("startup_q1", text("balanced"))]),
        Role::Startup,
        &rules,
        &config(),
    );
    assert!(tags.is_empty());
}

#[test]
fn at_least_rules_accept_numbers_and_numeric_strings() {
    let rules = [TagRule {
        role: Role::Investor,
        question_id: "investor_q1",
        predicate: TagPredicate::AtLeast(4.0),
        tag: "Hands-on Investor",
    }];

    for answer in [number(4.0), number(5.0), text("4")] {
        let tags = derive_tags(
            &scores(&[]),
            &responses(&[("investor_q1", answer)]),
            Role::Investor,
            &rules,
            &config(),
        );
        assert_eq!(tags, vec!["Hands-on Investor"]);
    }

    let tags = derive_tags(
        &scores(&[]),
        &responses(&[("investor_q1", number(3.0))]),
        Role::Investor,
        &rules,
        &config(),
    );
    assert!(tags.is_empty());
}

#[test]
fn rules_for_the_other_role_are_ignored() {
    let tags = derive_tags(
        &scores(&[]),
        &responses(&[("investor_q1", number(5.0))]),
        Role::Startup,
        TAG_RULES,
        &config(),
    );

    assert!(tags.is_empty());
}

#[test]
fn duplicate_tags_are_suppressed_keeping_first_occurrence() {
    let rules = [
        TagRule {
            role: Role::Startup,
            question_id: "q",
            predicate: TagPredicate::Equals("yes"),
            tag: "Strong Growth",
        },
        TagRule {
            role: Role::Startup,
            question_id: "q",
            predicate: TagPredicate::Equals("yes"),
            tag: "Agile",
        },
        TagRule {
            role: Role::Startup,
            question_id: "q",
            predicate: TagPredicate::Equals("yes"),
            tag: "Agile",
        },
    ];

    let tags = derive_tags(
        &scores(&[("Growth", 90)]),
        &responses(&[("q", text("yes"))]),
        Role::Startup,
        &rules,
        &config(),
    );

    assert_eq!(tags, vec!["Strong Growth", "Agile"]);
}

#[test]
fn unanswered_rule_questions_emit_nothing() {
    let tags = derive_tags(
        &scores(&[]),
        &responses(&[]),
        Role::Investor,
        TAG_RULES,
        &config(),
    );

    assert!(tags.is_empty());
}
