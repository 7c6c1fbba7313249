mod deck;

pub use deck::{DeckView, FlashcardItem, FlashcardRow};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
