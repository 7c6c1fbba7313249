use flashdeck_core::flip::{BACK_DEGREES, FRONT_DEGREES, Face, face_for_progress};
use flashdeck_core::model::{CardId, Deck};

/// UI-ready flashcard for the scrolling row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardItemVm {
    pub id: CardId,
    pub question: String,
    pub answer: String,
}

impl FlashcardItemVm {
    #[must_use]
    pub fn face_text(&self, face: Face) -> &str {
        match face {
            Face::Question => &self.question,
            Face::Answer => &self.answer,
        }
    }
}

/// Map the current deck order into row items.
#[must_use]
pub fn map_deck_items(deck: &Deck) -> Vec<FlashcardItemVm> {
    deck.iter()
        .map(|entry| FlashcardItemVm {
            id: entry.id(),
            question: entry.card().question().to_owned(),
            answer: entry.card().answer().to_owned(),
        })
        .collect()
}

/// What a card shows for one animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipFaceVm {
    pub face: Face,
    pub text: String,
    pub card_style: String,
    pub face_class: &'static str,
}

impl FlipFaceVm {
    #[must_use]
    pub fn at_progress(item: &FlashcardItemVm, progress: f32) -> Self {
        let face = face_for_progress(progress);
        let face_class = match face {
            Face::Question => "flashcard-face flashcard-face--question",
            // Counter-rotated so the answer does not read mirrored.
            Face::Answer => "flashcard-face flashcard-face--answer",
        };
        Self {
            face,
            text: item.face_text(face).to_owned(),
            card_style: format!("transform: {};", card_transform(progress)),
            face_class,
        }
    }
}

#[must_use]
pub fn card_transform(progress: f32) -> String {
    let degrees = progress.clamp(FRONT_DEGREES, BACK_DEGREES);
    format!("rotateY({degrees:.1}deg)")
}
