use crate::deck::{Deck, DeckId, NewDeck};

/// The ordered deck collection; the only mutable state in the system.
///
/// Every operation either applies completely or leaves the collection as it
/// was. `revision` increases on each change so hosts know when to recompute
/// derived views.
#[derive(Debug, Clone, Default)]
pub struct DeckCollection {
    decks: Vec<Deck>,
    revision: u64,
}

impl PartialEq for DeckCollection {
    fn eq(&self, other: &Self) -> bool {
        self.decks == other.decks
    }
}

impl DeckCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &DeckId) -> Option<&Deck> {
        self.decks.iter().find(|d| &d.id == id)
    }

    pub fn position(&self, id: &DeckId) -> Option<usize> {
        self.decks.iter().position(|d| &d.id == id)
    }

    /// Decks that take part in aggregation and statistics
    pub fn selected(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter().filter(|d| d.selected)
    }

    /// Append a deck under a fresh id
    pub fn add(&mut self, deck: NewDeck) -> DeckId {
        let id = DeckId::new_v4();
        tracing::debug!(%id, name = %deck.name, cards = deck.cards.len(), "deck added");
        self.decks.push(deck.into_deck(id.clone()));
        self.revision += 1;
        id
    }

    /// Append a batch in input order. Counts as a single change.
    pub fn add_many(&mut self, decks: impl IntoIterator<Item = NewDeck>) -> Vec<DeckId> {
        let mut ids = Vec::new();
        for deck in decks {
            let id = DeckId::new_v4();
            self.decks.push(deck.into_deck(id.clone()));
            ids.push(id);
        }
        if !ids.is_empty() {
            tracing::debug!(count = ids.len(), "deck batch added");
            self.revision += 1;
        }
        ids
    }

    /// Remove by identity. Absent ids are ignored.
    pub fn remove(&mut self, id: &DeckId) -> Option<Deck> {
        let pos = self.position(id)?;
        let deck = self.decks.remove(pos);
        tracing::debug!(%id, name = %deck.name, "deck removed");
        self.revision += 1;
        Some(deck)
    }

    /// Flip participation. Returns the new state, or `None` if absent.
    pub fn toggle_selected(&mut self, id: &DeckId) -> Option<bool> {
        let pos = self.position(id)?;
        let deck = &mut self.decks[pos];
        deck.selected = !deck.selected;
        let selected = deck.selected;
        self.revision += 1;
        Some(selected)
    }

    /// Rename to the trimmed `new_name`. Blank names are rejected.
    pub fn rename(&mut self, id: &DeckId, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return false;
        }
        let Some(pos) = self.position(id) else {
            return false;
        };
        if self.decks[pos].name != new_name {
            self.decks[pos].name = new_name.to_string();
            self.revision += 1;
        }
        true
    }

    /// Replace the colour unconditionally
    pub fn recolour(&mut self, id: &DeckId, colour: impl Into<String>) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let colour = colour.into();
        if self.decks[pos].colour != colour {
            self.decks[pos].colour = colour;
            self.revision += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::CardMap;
    use std::collections::HashSet;

    fn deck(name: &str) -> NewDeck {
        let cards: CardMap = [("Bolt", 1)].into_iter().collect();
        NewDeck::new(name, cards, "red")
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut col = DeckCollection::new();
        let a = col.add(deck("A"));
        let b = col.add(deck("A"));
        assert_ne!(a, b);
        assert_eq!(col.len(), 2);
        assert!(col.decks().iter().all(|d| d.selected));
    }

    #[test]
    fn test_add_many_preserves_order() {
        let mut col = DeckCollection::new();
        col.add(deck("first"));
        let ids = col.add_many(vec![deck("x"), deck("y"), deck("z")]);
        assert_eq!(ids.len(), 3);
        let names: Vec<_> = col.decks().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["first", "x", "y", "z"]);
        assert_eq!(col.revision(), 2);
    }

    #[test]
    fn test_add_many_empty_is_noop() {
        let mut col = DeckCollection::new();
        assert!(col.add_many(Vec::new()).is_empty());
        assert_eq!(col.revision(), 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut col = DeckCollection::new();
        let id = col.add(deck("A"));
        let removed = col.remove(&id).unwrap();
        assert_eq!(removed.name, "A");
        let rev = col.revision();
        assert!(col.remove(&id).is_none());
        assert_eq!(col.revision(), rev);
        assert!(col.is_empty());
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let mut col = DeckCollection::new();
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let id = col.add(deck("A"));
            assert!(seen.insert(id.clone()));
            col.remove(&id);
        }
    }

    #[test]
    fn test_toggle_selected() {
        let mut col = DeckCollection::new();
        let id = col.add(deck("A"));
        assert_eq!(col.toggle_selected(&id), Some(false));
        assert_eq!(col.selected().count(), 0);
        assert_eq!(col.toggle_selected(&id), Some(true));
        assert_eq!(col.selected().count(), 1);

        let ghost = col.remove(&id).unwrap().id;
        assert_eq!(col.toggle_selected(&ghost), None);
    }

    #[test]
    fn test_rename_rejects_blank() {
        let mut col = DeckCollection::new();
        let id = col.add(deck("A"));
        let rev = col.revision();
        assert!(!col.rename(&id, "   "));
        assert_eq!(col.get(&id).unwrap().name, "A");
        assert_eq!(col.revision(), rev);

        assert!(col.rename(&id, "  Burn "));
        assert_eq!(col.get(&id).unwrap().name, "Burn");
        assert_eq!(col.revision(), rev + 1);
    }

    #[test]
    fn test_recolour_unconditional() {
        let mut col = DeckCollection::new();
        let id = col.add(deck("A"));
        assert!(col.recolour(&id, ""));
        assert_eq!(col.get(&id).unwrap().colour, "");
        assert!(col.recolour(&id, "blue"));
        assert_eq!(col.get(&id).unwrap().colour, "blue");
    }

    #[test]
    fn test_remove_acts_on_identity() {
        let mut col = DeckCollection::new();
        let a = col.add(deck("Same"));
        let b = col.add(deck("Same"));
        col.rename(&a, "Renamed");
        col.recolour(&a, "green");
        col.rename(&b, "Renamed");
        col.remove(&a);
        assert_eq!(col.len(), 1);
        assert_eq!(col.decks()[0].id, b);
    }
}
