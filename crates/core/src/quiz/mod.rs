mod review;
mod session;

pub use review::{OptionFeedback, ReviewEntry, Verdict};
pub use session::{QuizPhase, QuizSession};
