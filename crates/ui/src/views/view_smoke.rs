use quiz_core::QuestionCatalog;

use crate::vm::QuizIntent;

use super::test_harness::{
    TEST_TITLE, ViewKind, setup_view_harness, setup_view_harness_with_catalog,
};

#[test]
fn quiz_view_smoke_renders_start_screen() {
    let harness = setup_view_harness(ViewKind::Quiz);
    let html = harness.render();

    assert!(
        html.contains("Start Adventure"),
        "missing start button in {html}"
    );
    assert!(
        html.contains("mind-bending riddles"),
        "missing intro in {html}"
    );
    assert!(
        html.contains("quiz-start__count"),
        "missing question count in {html}"
    );
    assert_eq!(harness.session().question_count(), 4);
}

#[test]
fn quiz_view_smoke_shows_question_without_advance_until_answered() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.dispatch(QuizIntent::Start);

    let html = harness.render();
    assert!(
        html.contains("Question 1"),
        "missing number label in {html}"
    );
    assert!(
        html.contains("3 remaining"),
        "missing remaining label in {html}"
    );
    assert!(
        html.contains("I have cities, but no houses"),
        "missing prompt in {html}"
    );
    assert!(html.contains("A mirror"), "missing option in {html}");
    assert!(
        html.contains("width: 25%;"),
        "missing progress width in {html}"
    );
    assert!(
        !html.contains("Next Question"),
        "advance shown early in {html}"
    );

    harness.dispatch(QuizIntent::Advance);
    assert_eq!(harness.session().current_index(), Some(0));
}

#[test]
fn quiz_view_smoke_reveals_feedback_after_answer() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::Select(0));
    harness.dispatch(QuizIntent::Select(1));

    let html = harness.render();
    assert!(
        html.contains("quiz-option--incorrect"),
        "missing wrong pick in {html}"
    );
    assert!(
        html.contains("quiz-option--correct"),
        "missing correct option in {html}"
    );
    assert!(
        html.contains("quiz-option--dimmed"),
        "missing dimmed option in {html}"
    );
    assert!(html.contains("Next Question"), "missing advance in {html}");
    assert_eq!(harness.session().answers()[0], Some(0));
}

#[test]
fn quiz_view_smoke_full_run_renders_review() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.dispatch(QuizIntent::Start);
    for option in [1, 0, 1] {
        harness.dispatch(QuizIntent::Select(option));
        harness.dispatch(QuizIntent::Advance);
    }
    harness.dispatch(QuizIntent::Select(1));
    assert!(harness.render().contains("Finish Quiz"));
    harness.dispatch(QuizIntent::Advance);

    let html = harness.render();
    assert!(html.contains("Outstanding!"), "missing headline in {html}");
    assert!(html.contains(" out of 4"), "missing total in {html}");
    assert!(html.contains("Review Answers"), "missing review in {html}");
    assert!(
        html.contains("Correct: An echo"),
        "missing correction in {html}"
    );
    assert!(html.contains("Play Again"), "missing restart in {html}");

    let session = harness.session();
    assert!(session.is_finished());
    assert_eq!(session.score(), 3);
}

#[test]
fn quiz_view_smoke_play_again_returns_to_start() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.dispatch(QuizIntent::Start);
    for _ in 0..4 {
        harness.dispatch(QuizIntent::Select(2));
        harness.dispatch(QuizIntent::Advance);
    }
    assert!(harness.render().contains("Good Effort!"));

    harness.dispatch(QuizIntent::Restart);

    let html = harness.render();
    assert!(
        html.contains("Start Adventure"),
        "missing start button in {html}"
    );
    let session = harness.session();
    assert_eq!(session.current_index(), None);
    assert!(session.answers().is_empty());
}

#[test]
fn quiz_view_smoke_uses_injected_catalog() {
    let raw = r#"[{
        "text": "Is water wet?",
        "options": ["Yes", "No"],
        "correct_answer_index": 0,
        "explanation": "Mostly."
    }]"#;
    let catalog = QuestionCatalog::from_json(raw).expect("catalog");
    let mut harness = setup_view_harness_with_catalog(ViewKind::Quiz, catalog);
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::Select(0));

    let html = harness.render();
    assert!(html.contains("Is water wet?"), "missing prompt in {html}");
    assert!(html.contains("0 remaining"), "missing remaining in {html}");
    assert!(html.contains("Finish Quiz"), "missing finish in {html}");
}

#[test]
fn routed_view_smoke_renders_layout_title() {
    let harness = setup_view_harness(ViewKind::Routed);
    let html = harness.render();

    assert!(html.contains(TEST_TITLE), "missing title in {html}");
    assert!(html.contains("Start Adventure"), "missing quiz in {html}");
}

#[test]
fn quiz_view_smoke_keyboard_drives_a_full_run() {
    let mut harness = setup_view_harness(ViewKind::Quiz);

    assert!(!harness.press_key("2"));
    assert!(harness.press_key("Enter"));
    assert_eq!(harness.session().current_index(), Some(0));

    assert!(!harness.press_key(" "));
    assert!(harness.press_key("2"));
    assert_eq!(harness.session().answers()[0], Some(1));
    assert!(harness.render().contains("Next Question"));

    assert!(harness.press_key(" "));
    assert_eq!(harness.session().current_index(), Some(1));
    for _ in 0..3 {
        assert!(harness.press_key("1"));
        assert!(harness.press_key("Enter"));
    }

    let session = harness.session();
    assert!(session.is_finished());
    assert_eq!(session.score(), 1);
    assert!(harness.render().contains("Good Effort!"));

    assert!(!harness.press_key("Enter"));
    assert!(harness.press_key("R"));
    assert_eq!(harness.session().current_index(), None);
    assert!(harness.render().contains("Start Adventure"));
}
