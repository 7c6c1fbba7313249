use serde::{Deserialize, Serialize};

use crate::model::{card::Flashcard, ids::CardId};

/// A flashcard together with its load-order identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    id: CardId,
    card: Flashcard,
}

impl DeckEntry {
    #[must_use]
    pub fn new(id: CardId, card: Flashcard) -> Self {
        Self { id, card }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn card(&self) -> &Flashcard {
        &self.card
    }
}

/// The ordered sequence of flashcards currently shown to the user.
///
/// A deck is never edited in place. Reordering produces a new `Deck` holding
/// the same entries, which callers swap in as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    entries: Vec<DeckEntry>,
}

impl Deck {
    /// Builds a deck from cards in load order, numbering them from zero.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Flashcard>) -> Self {
        let entries = cards
            .into_iter()
            .zip(0u64..)
            .map(|(card, index)| DeckEntry::new(CardId::new(index), card))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter()
    }

    /// Cards in current display order.
    pub fn cards(&self) -> impl Iterator<Item = &Flashcard> {
        self.entries.iter().map(DeckEntry::card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&DeckEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Returns a new deck whose order is produced by `reorder`.
    ///
    /// `reorder` only sees a slice, so it can permute entries but never add or
    /// drop one.
    #[must_use]
    pub fn reordered(&self, reorder: impl FnOnce(&mut [DeckEntry])) -> Self {
        let mut entries = self.entries.clone();
        reorder(entries.as_mut_slice());
        Self { entries }
    }

    /// True when both decks hold exactly the same entries, in any order.
    #[must_use]
    pub fn is_permutation_of(&self, other: &Deck) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut left = self.entries.iter().collect::<Vec<_>>();
        let mut right = other.entries.iter().collect::<Vec<_>>();
        left.sort_by_key(|entry| entry.id);
        right.sort_by_key(|entry| entry.id);
        left == right
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a DeckEntry;
    type IntoIter = std::slice::Iter<'a, DeckEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(q: &str, a: &str) -> Flashcard {
        Flashcard::new(q, a).unwrap()
    }

    fn sample_deck() -> Deck {
        Deck::from_cards(vec![
            card("2+2", "4"),
            card("Capital of France", "Paris"),
            card("H2O", "Water"),
        ])
    }

    #[test]
    fn from_cards_assigns_ids_in_load_order() {
        let deck = sample_deck();
        let ids = deck.iter().map(DeckEntry::id).collect::<Vec<_>>();
        assert_eq!(ids, vec![CardId::new(0), CardId::new(1), CardId::new(2)]);
        assert_eq!(deck.get(CardId::new(1)).unwrap().card().answer(), "Paris");
    }

    #[test]
    fn reordered_returns_new_deck_and_leaves_original() {
        let deck = sample_deck();
        let reversed = deck.reordered(<[DeckEntry]>::reverse);

        assert_eq!(deck.position_of(CardId::new(0)), Some(0));
        assert_eq!(reversed.position_of(CardId::new(0)), Some(2));
        assert!(reversed.is_permutation_of(&deck));
    }

    #[test]
    fn permutation_check_rejects_different_contents() {
        let deck = sample_deck();
        let shorter = Deck::from_cards(vec![card("2+2", "4")]);
        assert!(!deck.is_permutation_of(&shorter));

        let other = Deck::from_cards(vec![
            card("2+2", "4"),
            card("Capital of France", "Paris"),
            card("H2O", "Ice"),
        ]);
        assert!(!deck.is_permutation_of(&other));
    }

    #[test]
    fn duplicate_cards_keep_distinct_ids() {
        let deck = Deck::from_cards(vec![card("a", "b"), card("a", "b")]);
        assert_eq!(deck.len(), 2);
        assert_ne!(deck.entries()[0].id(), deck.entries()[1].id());
    }

    #[test]
    fn empty_deck_has_no_entries() {
        let deck = Deck::empty();
        assert!(deck.is_empty());
        assert_eq!(deck.cards().count(), 0);
    }
}
