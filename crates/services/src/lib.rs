#![forbid(unsafe_code)]

pub mod config;
pub mod deck_controller;
pub mod error;
pub mod loader;
pub mod reshuffle;

pub use config::{DEFAULT_RESHUFFLE_INTERVAL, DeckConfig};
pub use deck_controller::DeckController;
pub use error::{ConfigError, DeckError, LoadError};
pub use loader::{BUNDLED_FLASHCARDS, FlashcardLoader, FlashcardSource, parse_flashcards};
pub use reshuffle::{ReshuffleSchedule, ReshuffleTask};
