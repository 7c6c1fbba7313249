use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// An immutable question/answer pair.
///
/// Both sides are guaranteed non-empty; the only way to build one is
/// [`Flashcard::new`], which rejects empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    question: String,
    answer: String,
}

impl Flashcard {
    /// Creates a flashcard from question and answer text.
    ///
    /// Text is stored verbatim. Whitespace is not trimmed.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::EmptyQuestion` or `FlashcardError::EmptyAnswer`
    /// when either side is the empty string.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, FlashcardError> {
        let question = question.into();
        let answer = answer.into();
        if question.is_empty() {
            return Err(FlashcardError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(FlashcardError::EmptyAnswer);
        }
        Ok(Self { question, answer })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlashcardError {
    #[error("flashcard question cannot be empty")]
    EmptyQuestion,

    #[error("flashcard answer cannot be empty")]
    EmptyAnswer,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
