use thiserror::Error;

use crate::model::FlashcardError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Flashcard(#[from] FlashcardError),
}
