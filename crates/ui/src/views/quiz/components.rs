use dioxus::prelude::*;

use crate::vm::{OptionVm, QuestionVm, QuizIntent, ResultsVm, ReviewItemVm, StartVm};

#[component]
pub(super) fn StartScreen(vm: StartVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-start",
            p { class: "quiz-start__intro",
                "Challenge your mind with "
                span { class: "quiz-start__count", "{vm.question_count}" }
                " mind-bending riddles."
                br {}
                "Are you ready to test your wit?"
            }
            button {
                class: "quiz-start__cta",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start Adventure"
            }
        }
    }
}

#[component]
pub(super) fn QuestionScreen(vm: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let progress_style = format!("width: {:.0}%;", vm.progress_percent);

    rsx! {
        div { class: "quiz-question",
            div { class: "quiz-progress",
                div { class: "quiz-progress__bar", style: "{progress_style}" }
            }
            div { class: "quiz-question__meta",
                span { "{vm.number_label}" }
                span { "{vm.remaining_label}" }
            }
            div { class: "quiz-question__card",
                p { class: "quiz-question__text", "{vm.text}" }
            }
            div { class: "quiz-options",
                for option in vm.options.iter().cloned() {
                    OptionButton { key: "{option.index}", option, on_intent }
                }
            }
            if let Some(label) = vm.advance_label {
                div { class: "quiz-nav",
                    button {
                        class: "quiz-nav__next",
                        id: "quiz-advance",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Advance),
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    let shortcut = index + 1;

    rsx! {
        button {
            class: "{option.class()}",
            id: "quiz-option-{index}",
            r#type: "button",
            disabled: option.disabled(),
            onclick: move |_| on_intent.call(QuizIntent::Select(index)),
            span { class: "quiz-option__key", "{shortcut}" }
            span { class: "quiz-option__label", "{option.label}" }
            if let Some(mark) = option.mark() {
                span { class: "quiz-option__mark", "{mark}" }
            }
        }
    }
}

#[component]
pub(super) fn ResultsScreen(vm: ResultsVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-results",
            div { class: "quiz-results__badge",
                span { class: "quiz-results__emoji", "{vm.emoji}" }
            }
            h2 { class: "quiz-results__headline", "{vm.headline}" }
            p { class: "quiz-results__score",
                "You scored "
                span { class: "quiz-results__points", "{vm.score}" }
                " out of {vm.total}"
            }

            div { class: "quiz-review",
                h3 { class: "quiz-review__title", "Review Answers" }
                for (position, item) in vm.review.iter().cloned().enumerate() {
                    ReviewItem { key: "{position}", item }
                }
            }

            button {
                class: "quiz-results__restart",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Play Again"
            }
        }
    }
}

#[component]
fn ReviewItem(item: ReviewItemVm) -> Element {
    let (modifier, icon) = if item.correct {
        ("quiz-review__item--correct", "✓")
    } else {
        ("quiz-review__item--incorrect", "✕")
    };

    rsx! {
        div { class: "quiz-review__item {modifier}",
            div { class: "quiz-review__icon", "{icon}" }
            div { class: "quiz-review__body",
                p { class: "quiz-review__question", "{item.question}" }
                p { class: "quiz-review__answer",
                    "Your Answer: "
                    span { class: "quiz-review__choice", "{item.your_answer}" }
                }
                if let Some(correct) = item.correct_answer.as_ref() {
                    p { class: "quiz-review__correct", "Correct: {correct}" }
                }
                p { class: "quiz-review__explanation", "💡 {item.explanation}" }
            }
        }
    }
}
