#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod quiz;

pub use catalog::{CatalogError, QuestionCatalog};
pub use quiz::{OptionFeedback, QuizPhase, QuizSession, ReviewEntry, Verdict};
