use std::sync::Arc;

use quiz_core::model::OptionId;
use quiz_core::quiz::QuizState;
use services::{InMemoryQuestionRepository, QuizIntent};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_repo};

fn choose(label: &str) -> QuizIntent {
    QuizIntent::Choose(OptionId::new(label).unwrap())
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1/3"), "missing counter in {html}");
    assert!(html.contains("0%"), "missing progress in {html}");
    assert!(html.contains("achievement"), "missing prompt in {html}");
    assert!(html.contains("Accomplishment"), "missing option in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
    assert!(html.contains("Current score: 0 / 3"), "missing score in {html}");
}

#[test]
fn quiz_view_smoke_reveals_feedback_after_submit() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    harness.dispatch(choose("A"));
    let html = harness.render();
    assert!(html.contains("quiz-option--selected"), "missing selection in {html}");

    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Not quite."), "missing feedback in {html}");
    assert!(html.contains("quiz-option--wrong"), "missing wrong marker in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct marker in {html}");
    assert!(html.contains("Next question"), "missing next in {html}");
    assert!(html.contains("33%"), "missing progress in {html}");
}

#[test]
fn quiz_view_smoke_completes_and_restarts() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    for label in ["B", "C", "A"] {
        harness.dispatch(choose(label));
        harness.dispatch(QuizIntent::Submit);
        harness.dispatch(QuizIntent::Next);
    }
    let html = harness.render();
    assert!(html.contains("Your result"), "missing result title in {html}");
    assert!(html.contains("67% correct"), "missing percent in {html}");
    assert!(html.contains("(2 / 3)"), "missing count in {html}");
    assert!(html.contains("result__percent--mid"), "missing tier in {html}");
    assert_eq!(harness.with_vm(|vm| vm.state()), QuizState::Complete);

    harness.dispatch(QuizIntent::ViewExplanations);
    let html = harness.render();
    assert!(
        html.contains("Detailed explanations are not available yet."),
        "missing notice in {html}"
    );
    assert_eq!(harness.with_vm(|vm| vm.state()), QuizState::Complete);

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1/3"), "missing restart in {html}");
    assert!(!html.contains("not available yet"), "stale notice in {html}");
    assert_eq!(harness.with_vm(|vm| vm.session().score()), 0);
}

#[test]
fn quiz_view_smoke_renders_custom_bank() {
    let json = r#"[{"id": 5, "prompt": "Pick D", "correctId": "D",
        "options": [{"id":"A","text":"one"},{"id":"B","text":"two"},
                    {"id":"C","text":"three"},{"id":"D","text":"four"}]}]"#;
    let repo = InMemoryQuestionRepository::from_json_str(json).unwrap();
    let mut harness = setup_view_harness_with_repo(ViewKind::Quiz, Arc::new(repo));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1/1"), "missing counter in {html}");

    harness.dispatch(choose("D"));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("See results"), "missing results button in {html}");
}

#[test]
fn footer_smoke_renders_clock_year() {
    let mut harness = setup_view_harness(ViewKind::Footer);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("© 2023 Test Quiz"), "missing footer in {html}");
}
