use quiz_core::{OptionFeedback, QuizPhase, QuizSession, Verdict};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(usize),
    Advance,
    Restart,
}

impl QuizIntent {
    /// Forward the intent to the matching session operation.
    pub fn apply(self, session: &mut QuizSession) {
        match self {
            QuizIntent::Start => session.start(),
            QuizIntent::Select(option) => session.select_answer(option),
            QuizIntent::Advance => session.advance(),
            QuizIntent::Restart => session.restart(),
        }
    }
}

//
// ─── SCREENS ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq)]
pub enum QuizScreen {
    Start(StartVm),
    Question(QuestionVm),
    Results(ResultsVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartVm {
    pub question_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub number_label: String,
    pub remaining_label: String,
    pub progress_percent: f64,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub answered: bool,
    /// Label for the advance button; `None` until the question is answered.
    pub advance_label: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub feedback: OptionFeedback,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.feedback {
            OptionFeedback::Pending => "quiz-option quiz-option--pending",
            OptionFeedback::Correct => "quiz-option quiz-option--correct",
            OptionFeedback::Incorrect => "quiz-option quiz-option--incorrect",
            OptionFeedback::Dimmed => "quiz-option quiz-option--dimmed",
        }
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        !self.feedback.is_selectable()
    }

    /// Check or cross shown next to the label after answering.
    #[must_use]
    pub fn mark(&self) -> Option<&'static str> {
        match self.feedback {
            OptionFeedback::Correct => Some("✓"),
            OptionFeedback::Incorrect => Some("✕"),
            OptionFeedback::Pending | OptionFeedback::Dimmed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub emoji: &'static str,
    pub headline: &'static str,
    pub score: usize,
    pub total: usize,
    pub review: Vec<ReviewItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub question: String,
    pub your_answer: String,
    pub correct: bool,
    /// Only set when the player missed the question.
    pub correct_answer: Option<String>,
    pub explanation: String,
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> QuizScreen {
    match session.phase() {
        QuizPhase::NotStarted => QuizScreen::Start(StartVm {
            question_count: session.question_count(),
        }),
        QuizPhase::InProgress { index } => QuizScreen::Question(map_question(session, index)),
        QuizPhase::Finished => QuizScreen::Results(map_results(session)),
    }
}

fn map_question(session: &QuizSession, index: usize) -> QuestionVm {
    let question = &session.questions()[index];
    let answered = session.is_current_answered();

    let options = (0..question.option_count())
        .map(|option| OptionVm {
            index: option,
            label: question.options()[option].clone(),
            feedback: session
                .option_feedback(option)
                .unwrap_or(OptionFeedback::Pending),
        })
        .collect();

    let advance_label = answered.then(|| {
        if session.is_last_question() {
            "Finish Quiz"
        } else {
            "Next Question"
        }
    });

    QuestionVm {
        number_label: format!("Question {}", index + 1),
        remaining_label: format!("{} remaining", session.remaining().unwrap_or(0)),
        progress_percent: session.progress_fraction().unwrap_or(0.0) * 100.0,
        text: question.text().to_string(),
        options,
        answered,
        advance_label,
    }
}

fn map_results(session: &QuizSession) -> ResultsVm {
    let (emoji, headline) = match session.verdict() {
        Verdict::Outstanding => ("🎉", "Outstanding!"),
        Verdict::GoodEffort => ("🤔", "Good Effort!"),
    };

    let review = session
        .review()
        .into_iter()
        .map(|entry| {
            let question = &session.questions()[entry.index];
            let your_answer = entry
                .chosen
                .and_then(|chosen| question.option(chosen))
                .unwrap_or("No Answer")
                .to_string();
            ReviewItemVm {
                question: question.text().to_string(),
                your_answer,
                correct: entry.correct,
                correct_answer: (!entry.correct).then(|| question.correct_option().to_string()),
                explanation: question.explanation().to_string(),
            }
        })
        .collect();

    ResultsVm {
        emoji,
        headline,
        score: session.score(),
        total: session.question_count(),
        review,
    }
}

/// Keyboard shortcut for the current screen, keyed by the DOM key name.
#[must_use]
pub fn intent_for_key(screen: &QuizScreen, key: &str) -> Option<QuizIntent> {
    match screen {
        QuizScreen::Start(_) => matches!(key, "Enter" | " ").then_some(QuizIntent::Start),
        QuizScreen::Question(vm) => {
            if matches!(key, "Enter" | " ") {
                return vm.answered.then_some(QuizIntent::Advance);
            }
            let digit = key.parse::<usize>().ok().filter(|d| (1..=9).contains(d))?;
            let option = digit - 1;
            (!vm.answered && option < vm.options.len()).then_some(QuizIntent::Select(option))
        }
        QuizScreen::Results(_) => matches!(key, "r" | "R").then_some(QuizIntent::Restart),
    }
}

/// Shortcut for whatever screen the session is currently on.
#[must_use]
pub fn key_intent(session: &QuizSession, key: &str) -> Option<QuizIntent> {
    intent_for_key(&map_quiz_screen(session), key)
}

/// Element id that should hold keyboard focus on this screen.
#[must_use]
pub fn focus_target(screen: &QuizScreen) -> &'static str {
    match screen {
        QuizScreen::Question(vm) if vm.advance_label.is_some() => "quiz-advance",
        QuizScreen::Start(_) | QuizScreen::Question(_) => "quiz-root",
        QuizScreen::Results(_) => "quiz-restart",
    }
}
