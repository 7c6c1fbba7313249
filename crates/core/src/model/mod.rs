mod card;
mod deck;
mod ids;

pub use ids::CardId;

pub use card::{Flashcard, FlashcardError};
pub use deck::{Deck, DeckEntry};
