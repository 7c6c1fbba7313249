use std::sync::Arc;

use dioxus::core::{NoOpMutations, ScopeId};
use dioxus::prelude::*;
use flashdeck_core::model::{CardId, Flashcard};
use services::DeckConfig;

use crate::context::{UiApp, build_app_context};
use crate::views::DeckView;
use crate::views::deck::{DeckTestHandles, start_flip};

const TEST_SEED: u64 = 7;

#[derive(Clone)]
struct TestApp {
    cards: Vec<Flashcard>,
    config: DeckConfig,
}

impl UiApp for TestApp {
    fn initial_cards(&self) -> Vec<Flashcard> {
        self.cards.clone()
    }

    fn deck_config(&self) -> DeckConfig {
        self.config
    }

    fn shuffle_seed(&self) -> Option<u64> {
        Some(TEST_SEED)
    }
}

#[derive(Props, Clone)]
struct DeckHarnessProps {
    app: Arc<TestApp>,
    handles: DeckTestHandles,
}

impl PartialEq for DeckHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for DeckHarnessProps {}

#[component]
fn DeckHarness(props: DeckHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { DeckView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: DeckTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Taps a card the way its click handler does.
    pub fn tap(&mut self, id: CardId) {
        let card = self.handles.card(id);
        self.dom.in_scope(ScopeId::APP, || {
            start_flip(card.flip, card.frame_clock, card.frame_task);
        });
        self.drive();
    }

    /// Polls the card's frame loop for at most `frames` wakeups; returns
    /// true once the loop has finished.
    pub async fn run_frames(&mut self, id: CardId, frames: usize) -> bool {
        let card = self.handles.card(id);
        for _ in 0..frames {
            if card.frame_task.peek().is_none() {
                return true;
            }
            self.dom.wait_for_work().await;
            self.drive();
        }
        card.frame_task.peek().is_none()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn card(question: &str, answer: &str) -> Flashcard {
    Flashcard::new(question, answer).expect("valid flashcard")
}

pub fn setup_deck_harness(cards: Vec<Flashcard>) -> ViewHarness {
    let handles = DeckTestHandles::default();
    let app = Arc::new(TestApp {
        cards,
        config: DeckConfig::default(),
    });
    let dom = VirtualDom::new_with_props(
        DeckHarness,
        DeckHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
