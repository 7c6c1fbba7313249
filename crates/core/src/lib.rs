#![forbid(unsafe_code)]

pub mod error;
pub mod flip;
pub mod model;

pub use error::Error;
pub use flip::{Easing, Face, FlipPhase, FlipState, face_for_progress};
pub use model::{CardId, Deck, DeckEntry, Flashcard, FlashcardError};
