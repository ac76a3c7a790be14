use std::ops::Index;

use thiserror::Error;

use crate::model::{Question, QuestionDraft, QuestionError};

const RIDDLES_JSON: &str = include_str!("../catalog/riddles.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no questions")]
    Empty,

    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered, non-empty list of validated questions.
///
/// Fixed for the lifetime of the process and shared read-only by sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { questions })
    }

    /// Parse a JSON array of question drafts and validate every entry.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON,
    /// `CatalogError::InvalidQuestion` for the first draft that fails validation,
    /// and `CatalogError::Empty` for an empty array.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CatalogError::InvalidQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// The bundled riddle set compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data was edited into an invalid state.
    pub fn riddles() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(RIDDLES_JSON)?;
        tracing::debug!(questions = catalog.len(), "loaded bundled riddle catalog");
        Ok(catalog)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl Index<usize> for QuestionCatalog {
    type Output = Question;

    fn index(&self, index: usize) -> &Self::Output {
        &self.questions[index]
    }
}
