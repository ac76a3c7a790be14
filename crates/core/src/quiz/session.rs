use std::sync::Arc;

use crate::catalog::QuestionCatalog;
use crate::model::Question;

use super::review::{OptionFeedback, ReviewEntry, Verdict};

/// Coarse screen the quiz is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress { index: usize },
    Finished,
}

/// One play-through of the quiz.
///
/// Owns all mutable quiz state. The four operations never fail: calls that do
/// not fit the current phase are ignored and leave state untouched. Everything
/// else is derived on demand from `current`, `answers` and `finished`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: Arc<QuestionCatalog>,
    current: Option<usize>,
    answers: Vec<Option<usize>>,
    finished: bool,
}

impl QuizSession {
    /// Create a session in the not-started state.
    #[must_use]
    pub fn new(questions: Arc<QuestionCatalog>) -> Self {
        Self {
            questions,
            current: None,
            answers: Vec::new(),
            finished: false,
        }
    }

    //
    // ─── OPERATIONS ────────────────────────────────────────────────────────────
    //

    /// Begin (or begin again) at the first question with every answer cleared.
    pub fn start(&mut self) {
        if self.current.is_some() && !self.finished {
            tracing::debug!("quiz restarted mid-session, discarding progress");
        }
        self.answers = vec![None; self.questions.len()];
        self.finished = false;
        self.current = Some(0);
        tracing::debug!(questions = self.questions.len(), "quiz started");
    }

    /// Record `option_index` for the active question.
    ///
    /// First answer wins: once a question is answered the choice is locked.
    /// Ignored when no question is active or the index is not one of the
    /// active question's options.
    pub fn select_answer(&mut self, option_index: usize) {
        let Some(index) = self.active_index() else {
            tracing::trace!(option_index, "select ignored: no active question");
            return;
        };
        if option_index >= self.questions[index].option_count() {
            tracing::trace!(index, option_index, "select ignored: option out of range");
            return;
        }
        let Some(slot) = self.answers.get_mut(index) else {
            return;
        };
        if slot.is_some() {
            tracing::trace!(index, option_index, "select ignored: already answered");
            return;
        }

        *slot = Some(option_index);
        tracing::debug!(
            index,
            option_index,
            correct = self.questions[index].is_correct(option_index),
            "answer recorded"
        );
    }

    /// Move past the active question once it has been answered.
    ///
    /// On the last question this finishes the quiz and leaves the index in
    /// place so review can walk the same range.
    pub fn advance(&mut self) {
        let Some(index) = self.active_index() else {
            tracing::trace!(
                finished = self.finished,
                "advance ignored: no active question"
            );
            return;
        };
        if !self.is_current_answered() {
            tracing::trace!(index, "advance ignored: question unanswered");
            return;
        }

        if index + 1 < self.questions.len() {
            self.current = Some(index + 1);
            tracing::debug!(index = index + 1, "advanced to next question");
        } else {
            self.finished = true;
            tracing::debug!(
                score = self.score(),
                total = self.questions.len(),
                "quiz finished"
            );
        }
    }

    /// Drop back to the not-started state from anywhere.
    pub fn restart(&mut self) {
        self.current = None;
        self.answers.clear();
        self.finished = false;
        tracing::debug!("quiz reset");
    }

    //
    // ─── STATE ─────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// `None` until `start()` has been called.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// One slot per question once started; empty before.
    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    //
    // ─── DERIVED ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match (self.current, self.finished) {
            (None, _) => QuizPhase::NotStarted,
            (Some(_), true) => QuizPhase::Finished,
            (Some(index), false) => QuizPhase::InProgress { index },
        }
    }

    /// Index of the active question, if any.
    fn active_index(&self) -> Option<usize> {
        match self.phase() {
            QuizPhase::InProgress { index } => Some(index),
            QuizPhase::NotStarted | QuizPhase::Finished => None,
        }
    }

    /// The question at the current index. Still available after finishing.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current.and_then(|index| self.questions.get(index))
    }

    /// Answer recorded for the current index.
    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.current.and_then(|index| self.answers.get(index).copied().flatten())
    }

    #[must_use]
    pub fn is_current_answered(&self) -> bool {
        self.current_answer().is_some()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current.is_some_and(|index| index + 1 == self.questions.len())
    }

    /// Number of questions whose recorded answer is the correct option.
    #[must_use]
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| answer.is_some_and(|chosen| question.is_correct(chosen)))
            .count()
    }

    /// `(index + 1) / total` while a question is active.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> Option<f64> {
        self.active_index().map(|index| (index + 1) as f64 / self.questions.len() as f64)
    }

    /// Questions left after the active one.
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        self.active_index()
            .map(|index| self.questions.len() - index - 1)
    }

    /// Feedback state for one option of the active question.
    #[must_use]
    pub fn option_feedback(&self, option_index: usize) -> Option<OptionFeedback> {
        let index = self.active_index()?;
        let question = self.questions.get(index)?;
        if option_index >= question.option_count() {
            return None;
        }

        let feedback = match self.answers.get(index).copied().flatten() {
            None => OptionFeedback::Pending,
            Some(_) if question.is_correct(option_index) => OptionFeedback::Correct,
            Some(chosen) if chosen == option_index => OptionFeedback::Incorrect,
            Some(_) => OptionFeedback::Dimmed,
        };
        Some(feedback)
    }

    /// Per-question outcome, in catalog order.
    #[must_use]
    pub fn review(&self) -> Vec<ReviewEntry> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let chosen = self.answers.get(index).copied().flatten();
                ReviewEntry {
                    index,
                    chosen,
                    correct: chosen.is_some_and(|c| question.is_correct(c)),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::for_score(self.score(), self.questions.len())
    }
}
