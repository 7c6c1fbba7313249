use std::sync::Arc;

use flashdeck_core::model::Flashcard;
use services::{DeckConfig, DeckController};

pub trait UiApp: Send + Sync {
    /// Cards produced by the startup load, in document order.
    fn initial_cards(&self) -> Vec<Flashcard>;
    fn deck_config(&self) -> DeckConfig;

    /// Fixed shuffle seed; `None` draws from the OS.
    fn shuffle_seed(&self) -> Option<u64> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    initial_cards: Arc<Vec<Flashcard>>,
    deck_config: DeckConfig,
    shuffle_seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_cards: Arc::new(app.initial_cards()),
            deck_config: app.deck_config(),
            shuffle_seed: app.shuffle_seed(),
        }
    }

    #[must_use]
    pub fn deck_config(&self) -> DeckConfig {
        self.deck_config
    }

    /// A controller holding the startup cards.
    #[must_use]
    pub fn new_controller(&self) -> DeckController {
        let mut controller = match self.shuffle_seed {
            Some(seed) => DeckController::seeded(seed),
            None => DeckController::new(),
        };
        if let Err(err) = controller.initialize(self.initial_cards.as_ref().clone()) {
            tracing::warn!(error = %err, "deck controller rejected startup cards");
        }
        controller
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
