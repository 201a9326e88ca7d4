use crate::deck::Deck;
use crate::ordered::OrderedMap;

/// How one deck uses a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckUsage {
    pub quantity: i64,
    pub colour: String,
}

/// Deck name to usage, in the order decks were folded in
pub type DeckUsageMap = OrderedMap<DeckUsage>;

/// Card name to per-deck usage over the selected decks.
///
/// Always built from scratch by [`aggregate`]; never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedIndex {
    cards: OrderedMap<DeckUsageMap>,
}

impl AggregatedIndex {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, card: &str) -> Option<&DeckUsageMap> {
        self.cards.get(card)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DeckUsageMap)> {
        self.cards.iter()
    }
}

/// Fold every selected deck's cards into an index.
///
/// Decks are visited in sequence order and cards in deck order. Two selected
/// decks with the same name share one slot per card: the later deck wins.
pub fn aggregate<'a>(decks: impl IntoIterator<Item = &'a Deck>) -> AggregatedIndex {
    let mut cards: OrderedMap<DeckUsageMap> = OrderedMap::new();
    for deck in decks.into_iter().filter(|d| d.selected) {
        for (card, &quantity) in deck.cards.iter() {
            cards.get_or_insert_with(card, DeckUsageMap::new).insert(
                deck.name.clone(),
                DeckUsage {
                    quantity,
                    colour: deck.colour.clone(),
                },
            );
        }
    }
    tracing::debug!(cards = cards.len(), "aggregated index rebuilt");
    AggregatedIndex { cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::DeckCollection;
    use crate::deck::{CardMap, NewDeck};

    fn new_deck(name: &str, colour: &str, pairs: &[(&str, i64)]) -> NewDeck {
        let cards: CardMap = pairs.iter().map(|&(n, q)| (n, q)).collect();
        NewDeck::new(name, cards, colour)
    }

    #[test]
    fn test_folds_selected_decks() {
        let mut col = DeckCollection::new();
        col.add(new_deck("Burn", "red", &[("Bolt", 4), ("Mountain", 16)]));
        col.add(new_deck("Zoo", "green", &[("Bolt", 2), ("Forest", 10)]));

        let index = aggregate(col.decks());
        assert_eq!(index.len(), 3);
        let bolt = index.get("Bolt").unwrap();
        assert_eq!(bolt.keys().collect::<Vec<_>>(), vec!["Burn", "Zoo"]);
        assert_eq!(
            bolt.get("Zoo"),
            Some(&DeckUsage {
                quantity: 2,
                colour: "green".to_string()
            })
        );
        let order: Vec<_> = index.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["Bolt", "Mountain", "Forest"]);
    }

    #[test]
    fn test_unselected_deck_excluded() {
        let mut col = DeckCollection::new();
        col.add(new_deck("Burn", "red", &[("Bolt", 4)]));
        let hidden = col.add(new_deck("Elves", "green", &[("Llanowar Elves", 4), ("Bolt", 1)]));
        col.toggle_selected(&hidden);

        let index = aggregate(col.decks());
        assert!(index.get("Llanowar Elves").is_none());
        assert_eq!(index.get("Bolt").unwrap().keys().collect::<Vec<_>>(), vec!["Burn"]);
    }

    #[test]
    fn test_same_name_last_write_wins() {
        let mut col = DeckCollection::new();
        col.add(new_deck("Twin", "red", &[("Bolt", 4), ("Shock", 1)]));
        col.add(new_deck("Twin", "blue", &[("Bolt", 1)]));

        let index = aggregate(col.decks());
        let bolt = index.get("Bolt").unwrap();
        assert_eq!(bolt.len(), 1);
        assert_eq!(bolt.get("Twin").unwrap().quantity, 1);
        assert_eq!(bolt.get("Twin").unwrap().colour, "blue");
        // Only shared cards are overwritten
        assert_eq!(index.get("Shock").unwrap().get("Twin").unwrap().quantity, 1);
        assert_eq!(index.get("Shock").unwrap().get("Twin").unwrap().colour, "red");
    }

    #[test]
    fn test_empty_collection() {
        let col = DeckCollection::new();
        assert!(aggregate(col.decks()).is_empty());
    }

    #[test]
    fn test_recompute_tracks_changes() {
        let mut col = DeckCollection::new();
        let id = col.add(new_deck("Burn", "red", &[("Bolt", 4)]));
        let before = aggregate(col.decks());
        col.recolour(&id, "orange");
        let after = aggregate(col.decks());
        assert_ne!(before, after);
        assert_eq!(after.get("Bolt").unwrap().get("Burn").unwrap().colour, "orange");
    }
}
