use std::time::{Duration, Instant};

use dioxus::core::Task;
use dioxus::prelude::*;
use flashdeck_core::flip::FlipState;
use services::ReshuffleSchedule;

use crate::context::AppContext;
use crate::vm::{FlashcardItemVm, FlipFaceVm, map_deck_items};

#[cfg(test)]
use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[cfg(test)]
use flashdeck_core::model::CardId;
#[cfg(test)]
use services::DeckController;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Frame timestamps come from the Tokio clock so paused-time tests drive them.
fn frame_now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// Handles a tap on one card: retargets the flip, then steps `frame_clock`
/// once per frame until the rotation lands and the flip settles. A frame loop
/// left over from an earlier tap is cancelled first.
pub(crate) fn start_flip(
    mut flip: Signal<FlipState>,
    mut frame_clock: Signal<Instant>,
    mut frame_task: Signal<Option<Task>>,
) {
    let tapped_at = frame_now();
    flip.write().toggle(tapped_at);
    frame_clock.set(tapped_at);

    if let Some(previous) = frame_task.write().take() {
        previous.cancel();
    }
    let task = spawn(async move {
        loop {
            tokio::time::sleep(FRAME_INTERVAL).await;
            let now = frame_now();
            frame_clock.set(now);
            if !flip.peek().is_animating(now) {
                flip.write().settle(now);
                break;
            }
        }
        frame_task.set(None);
    });
    frame_task.set(Some(task));
}

/// The single flashcard screen. Owns the deck and its reshuffle timer; both
/// go away when the screen unmounts.
#[component]
pub fn DeckView() -> Element {
    let ctx = use_context::<AppContext>();
    let config = ctx.deck_config();
    let controller = use_signal(move || ctx.new_controller());

    use_future(move || async move {
        let mut controller = controller;
        let mut schedule = ReshuffleSchedule::new(config.reshuffle_interval());
        loop {
            schedule.tick().await;
            controller.write().reshuffle_tick();
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DeckTestHandles>() {
                handles.register_controller(controller);
            }
        }
    }

    let items = map_deck_items(controller.read().deck());
    let flip_duration = config.flip_duration();

    rsx! {
        div { class: "page deck-page",
            if items.is_empty() {
                p { class: "deck-empty", "No flashcards to show." }
            } else {
                FlashcardRow { items, flip_duration }
            }
        }
    }
}

#[component]
pub fn FlashcardRow(items: Vec<FlashcardItemVm>, flip_duration: Duration) -> Element {
    let cards = items.into_iter().map(|item| {
        let id = item.id;
        rsx! {
            FlashcardItem { key: "{id}", item, flip_duration }
        }
    });

    rsx! {
        div { class: "flashcard-row", {cards} }
    }
}

/// One card. Tapping flips it; the rotation is stepped once per frame while
/// the flip runs.
#[component]
pub fn FlashcardItem(item: FlashcardItemVm, flip_duration: Duration) -> Element {
    let flip = use_signal(move || FlipState::new(flip_duration));
    let frame_clock = use_signal(frame_now);
    let frame_task = use_signal(|| None::<Task>);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DeckTestHandles>() {
                handles.register_card(
                    item.id,
                    CardHandles {
                        flip,
                        frame_clock,
                        frame_task,
                    },
                );
            }
        }
    }

    let on_tap = move |_: MouseEvent| start_flip(flip, frame_clock, frame_task);

    let progress = flip.read().progress_at(frame_clock());
    let face = FlipFaceVm::at_progress(&item, progress);

    rsx! {
        div {
            class: "flashcard",
            role: "button",
            tabindex: "0",
            style: "{face.card_style}",
            onclick: on_tap,
            div { class: "{face.face_class}",
                span { class: "flashcard-text", "{face.text}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct CardHandles {
    pub(crate) flip: Signal<FlipState>,
    pub(crate) frame_clock: Signal<Instant>,
    pub(crate) frame_task: Signal<Option<Task>>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DeckTestHandles {
    controller: Rc<RefCell<Option<Signal<DeckController>>>>,
    cards: Rc<RefCell<HashMap<CardId, CardHandles>>>,
}

#[cfg(test)]
impl DeckTestHandles {
    pub(crate) fn register_controller(&self, controller: Signal<DeckController>) {
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn register_card(&self, id: CardId, card: CardHandles) {
        self.cards.borrow_mut().insert(id, card);
    }

    pub(crate) fn controller(&self) -> Signal<DeckController> {
        (*self.controller.borrow()).expect("deck controller registered")
    }

    pub(crate) fn card(&self, id: CardId) -> CardHandles {
        *self.cards.borrow().get(&id).expect("card registered")
    }
}
