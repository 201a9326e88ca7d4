use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ordered::OrderedMap;

/// Card name to quantity, in the order cards were first listed
pub type CardMap = OrderedMap<i64>;

/// Opaque deck identifier. Never derived from deck content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(Uuid);

impl DeckId {
    pub(crate) fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A deck held by the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    pub cards: CardMap,
    pub colour: String,
    pub selected: bool,
}

impl Deck {
    /// Sum of all quantities in the deck
    pub fn total_cards(&self) -> i64 {
        self.cards.values().fold(0i64, |acc, &q| acc.saturating_add(q))
    }

    /// Number of distinct card names
    pub fn distinct_cards(&self) -> usize {
        self.cards.len()
    }
}

/// A deck shape waiting for an id; what the parser, the naming rules and
/// the import codec hand to the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeck {
    pub name: String,
    pub cards: CardMap,
    pub colour: String,
    pub selected: bool,
}

impl NewDeck {
    pub fn new(name: impl Into<String>, cards: CardMap, colour: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards,
            colour: colour.into(),
            selected: true,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub(crate) fn into_deck(self, id: DeckId) -> Deck {
        Deck {
            id,
            name: self.name,
            cards: self.cards,
            colour: self.colour,
            selected: self.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_differ() {
        let a = DeckId::new_v4();
        let b = DeckId::new_v4();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 36);
    }

    #[test]
    fn test_total_cards() {
        let cards: CardMap = [("Bolt", 4), ("Forest", 10)].into_iter().collect();
        let deck = NewDeck::new("Burn", cards, "red").into_deck(DeckId::new_v4());
        assert_eq!(deck.total_cards(), 14);
        assert_eq!(deck.distinct_cards(), 2);
        assert!(deck.selected);
    }
}
