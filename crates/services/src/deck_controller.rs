use flashdeck_core::model::{Deck, Flashcard};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::DeckError;

/// Owns the current deck ordering and reshuffles it on request.
///
/// The deck is only ever replaced as a whole, so a reader never sees a
/// half-shuffled order.
#[derive(Debug)]
pub struct DeckController<R = StdRng> {
    deck: Deck,
    initialized: bool,
    rng: R,
    ticks: u64,
}

impl DeckController<StdRng> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A controller with a deterministic shuffle sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for DeckController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DeckController<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            deck: Deck::empty(),
            initialized: false,
            rng,
            ticks: 0,
        }
    }

    /// Install the loaded cards as the starting order.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::AlreadyInitialized` if called more than once.
    pub fn initialize(&mut self, initial_order: Vec<Flashcard>) -> Result<(), DeckError> {
        if self.initialized {
            return Err(DeckError::AlreadyInitialized);
        }
        self.deck = Deck::from_cards(initial_order);
        self.initialized = true;
        tracing::debug!(cards = self.deck.len(), "deck initialized");
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Replace the deck with a uniformly random permutation of its current
    /// order and return how many reshuffles have happened.
    ///
    /// Does nothing before `initialize`.
    pub fn reshuffle_tick(&mut self) -> u64 {
        if !self.initialized {
            return self.ticks;
        }
        let rng = &mut self.rng;
        self.deck = self.deck.reordered(|entries| entries.shuffle(rng));
        self.ticks += 1;
        tracing::debug!(tick = self.ticks, "deck reshuffled");
        self.ticks
    }

    /// The current order; empty before `initialize`.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
