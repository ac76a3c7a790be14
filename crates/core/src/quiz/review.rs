/// How one option of the active question should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    /// Question not answered yet; the option can be picked.
    Pending,
    /// The correct option, revealed once any answer is recorded.
    Correct,
    /// The option the player picked, and it was wrong.
    Incorrect,
    /// Any other option after answering.
    Dimmed,
}

impl OptionFeedback {
    #[must_use]
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Outcome for a single question after the quiz is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewEntry {
    pub index: usize,
    pub chosen: Option<usize>,
    pub correct: bool,
}

/// Overall result band shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Outstanding,
    GoodEffort,
}

impl Verdict {
    /// At least half right is outstanding; `score >= total / 2` over the reals.
    #[must_use]
    pub fn for_score(score: usize, total: usize) -> Self {
        if score * 2 >= total {
            Self::Outstanding
        } else {
            Self::GoodEffort
        }
    }
}
