use super::common::*;
use crate::questionnaire::domain::Role;

#[test]
fn unknown_ids_yield_an_empty_profile_instead_of_an_error() {
    let engine = startup_engine(vec![radio("q1", "Known", &["a", "b"])]);
    let answered = responses(&[("bogus_id", text("x"))]);

    let profile = engine.analyze(&answered, Role::Startup);

    assert!(profile.categories.is_empty());
    assert!(profile.tags.is_empty());
    assert!(profile.preferences.is_empty());
}

#[test]
fn empty_response_sets_produce_an_empty_profile() {
    let engine = startup_engine(vec![radio("q1", "Known", &["a", "b"])]);

    let profile = engine.analyze(&responses(&[]), Role::Startup);

    assert!(profile.categories.is_empty());
    assert!(profile.tags.is_empty());
}

#[test]
fn a_maxed_out_category_earns_its_strong_tag() {
    let engine = startup_engine(vec![radio("q1", "X", &["a", "b", "c", "d", "e"])]);
    let answered = responses(&[("q1", text("e"))]);

    let profile = engine.analyze(&answered, Role::Startup);

    assert_eq!(profile.categories.get("X"), Some(&100));
    assert_eq!(profile.tags, vec!["Strong X"]);
}

#[test]
fn category_scores_stay_within_range() {
    let engine = startup_engine(vec![
        radio("q1", "A", &["a", "b", "c"]),
        slider("q2", "A", 5),
        multi_select("q3", "B", &["x", "y", "z"]),
        text_question("q4", "B"),
    ]);
    let answered = responses(&[
        ("q1", text("c")),
        ("q2", number(9.0)),
        ("q3", selections(&["x", "y", "z"])),
        ("q4", text(&"word ".repeat(40))),
    ]);

    let profile = engine.analyze(&answered, Role::Startup);

    assert!(!profile.categories.is_empty());
    for score in profile.categories.values() {
        assert!(*score <= 100);
    }
}

#[test]
fn analysis_is_deterministic_for_identical_inputs() {
    let engine = startup_engine(vec![
        radio("q1", "A", &["a", "b", "c"]),
        text_question("q2", "B"),
    ]);
    let answered = responses(&[("q1", text("b")), ("q2", text("a few words here"))]);

    let first = engine.analyze(&answered, Role::Startup);
    let second = engine.analyze(&answered, Role::Startup);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize"),
    );
}

#[test]
fn malformed_answers_degrade_instead_of_aborting_the_submission() {
    let engine = startup_engine(vec![
        radio("q1", "A", &["a", "b", "c"]),
        slider("q2", "A", 5),
    ]);
    // q1 carries a selection list, q2 a word; both are unscorable shapes.
    let answered = responses(&[("q1", selections(&["a"])), ("q2", text("often"))]);

    let profile = engine.analyze(&answered, Role::Startup);

    // Both degrade to the neutral score, so the category still averages to 50.
    assert_eq!(profile.categories.get("A"), Some(&50));
}
