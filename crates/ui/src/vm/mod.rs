mod flashcard_vm;

pub use flashcard_vm::{FlashcardItemVm, FlipFaceVm, card_transform, map_deck_items};
