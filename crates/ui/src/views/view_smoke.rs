use std::time::{Duration, Instant};

use dioxus::prelude::*;
use flashdeck_core::flip::{BACK_DEGREES, FRONT_DEGREES};
use flashdeck_core::model::CardId;

use super::test_harness::{ViewHarness, card, setup_deck_harness};

fn geography_harness() -> ViewHarness {
    let mut harness = setup_deck_harness(vec![
        card("2+2", "Four"),
        card("Capital of France", "Paris"),
        card("Largest ocean", "Pacific"),
        card("Red planet", "Mars"),
        card("Gold symbol", "Au"),
    ]);
    harness.rebuild();
    harness
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle} in {html}"))
}

/// Toggles a card and pins its clock `elapsed` after the tap, without a frame
/// loop.
fn flip_card(harness: &mut ViewHarness, id: CardId, elapsed: Duration) {
    let card = harness.handles.card(id);
    let (mut flip, mut frame_clock) = (card.flip, card.frame_clock);
    let tapped_at = Instant::now();
    flip.write().toggle(tapped_at);
    frame_clock.set(tapped_at + elapsed);
    harness.drive();
}

const FRAME_BUDGET: usize = 200;

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_renders_questions_in_load_order() {
    let harness = geography_harness();
    let html = harness.render();

    assert!(html.contains("flashcard-row"), "missing row in {html}");
    assert!(position(&html, "2+2") < position(&html, "Capital of France"));
    assert!(position(&html, "Capital of France") < position(&html, "Gold symbol"));
    assert!(!html.contains("Paris"), "answer visible before flip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_renders_empty_hint() {
    let mut harness = setup_deck_harness(Vec::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No flashcards to show."), "missing hint in {html}");
    assert!(!html.contains("flashcard-row"), "unexpected row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flipped_card_shows_answer_once_past_midpoint() {
    let mut harness = geography_harness();

    flip_card(&mut harness, CardId::new(1), Duration::from_millis(100));
    let html = harness.render();
    assert!(html.contains("Capital of France"), "question hidden too early in {html}");
    assert!(!html.contains("Paris"), "answer shown too early in {html}");

    let mut frame_clock = harness.handles.card(CardId::new(1)).frame_clock;
    let later = *frame_clock.peek() + Duration::from_millis(400);
    frame_clock.set(later);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Paris"), "missing answer in {html}");
    assert!(!html.contains("Capital of France"), "question still shown in {html}");
    assert!(html.contains("rotateY(180.0deg)"), "missing back rotation in {html}");
    assert!(html.contains("2+2"), "other cards must stay unflipped in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reshuffle_reorders_row_and_keeps_flip_state() {
    let mut harness = geography_harness();
    flip_card(&mut harness, CardId::new(1), Duration::from_millis(500));

    let mut controller = harness.handles.controller();
    for _ in 0..3 {
        controller.write().reshuffle_tick();
    }
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Paris"), "flip lost after reshuffle in {html}");
    assert!(!html.contains("Capital of France"), "flip lost after reshuffle in {html}");

    let order = controller
        .peek()
        .deck()
        .iter()
        .map(|entry| {
            if entry.id() == CardId::new(1) {
                entry.card().answer().to_string()
            } else {
                entry.card().question().to_string()
            }
        })
        .collect::<Vec<_>>();
    let positions = order
        .iter()
        .map(|text| position(&html, text))
        .collect::<Vec<_>>();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "row order {order:?} not rendered in {html}"
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn tap_runs_frames_until_the_answer_lands() {
    let mut harness = geography_harness();
    let id = CardId::new(1);

    harness.tap(id);
    let card = harness.handles.card(id);
    let tapped_at = *card.frame_clock.peek();
    assert!(card.frame_task.peek().is_some(), "tap must start a frame loop");
    assert!(harness.render().contains("Capital of France"));

    assert!(harness.run_frames(id, FRAME_BUDGET).await, "frame loop never finished");

    let html = harness.render();
    assert!(html.contains("Paris"), "missing answer in {html}");
    assert!(html.contains("rotateY(180.0deg)"), "missing back rotation in {html}");

    let landed_at = *card.frame_clock.peek();
    let elapsed = landed_at.duration_since(tapped_at);
    assert!(
        elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(540),
        "frames stopped after {elapsed:?}"
    );

    let flip = card.flip.peek();
    assert!(flip.is_flipped());
    assert!(!flip.is_animating(landed_at));
    // Settled: the resting angle no longer depends on the tap time.
    assert_eq!(flip.progress_at(tapped_at), BACK_DEGREES);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn second_tap_replaces_frame_loop_and_returns_to_question() {
    let mut harness = geography_harness();
    let id = CardId::new(1);

    harness.tap(id);
    let card = harness.handles.card(id);
    assert!(!harness.run_frames(id, 6).await, "flip finished too early");
    let in_flight = card.flip.peek().progress_at(*card.frame_clock.peek());
    assert!(in_flight > FRONT_DEGREES && in_flight < BACK_DEGREES);

    harness.tap(id);
    let retapped_at = *card.frame_clock.peek();
    assert!(!card.flip.peek().is_flipped());
    assert!(card.frame_task.peek().is_some(), "second tap must start a new loop");

    assert!(harness.run_frames(id, FRAME_BUDGET).await, "frame loop never finished");

    let html = harness.render();
    assert!(html.contains("Capital of France"), "question missing in {html}");
    assert!(!html.contains("Paris"), "answer still shown in {html}");
    assert!(html.contains("rotateY(0.0deg)"), "missing front rotation in {html}");

    let landed_at = *card.frame_clock.peek();
    let elapsed = landed_at.duration_since(retapped_at);
    assert!(
        elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(540),
        "reversed flip stopped after {elapsed:?}"
    );
    assert_eq!(card.flip.peek().progress_at(retapped_at), FRONT_DEGREES);
    assert!(card.frame_task.peek().is_none());
}
