use crate::aggregate::{aggregate, AggregatedIndex};
use crate::collection::DeckCollection;
use crate::stats::CubeStats;

/// Everything derived from one revision of the collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubeSnapshot {
    pub revision: u64,
    pub index: AggregatedIndex,
    pub stats: CubeStats,
}

impl CubeSnapshot {
    pub fn compute(collection: &DeckCollection) -> Self {
        Self {
            revision: collection.revision(),
            index: aggregate(collection.decks()),
            stats: CubeStats::compute(collection.decks()),
        }
    }

    /// Recompute in full if the collection changed since this snapshot.
    /// Returns true when it did.
    pub fn refresh(&mut self, collection: &DeckCollection) -> bool {
        if self.revision == collection.revision() {
            return false;
        }
        *self = Self::compute(collection);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{CardMap, NewDeck};

    #[test]
    fn test_refresh_follows_revision() {
        let mut col = DeckCollection::new();
        let mut snap = CubeSnapshot::compute(&col);
        assert!(!snap.refresh(&col));

        let cards: CardMap = [("Bolt", 4)].into_iter().collect();
        let id = col.add(NewDeck::new("Burn", cards, "red"));
        assert!(snap.refresh(&col));
        assert_eq!(snap.stats.total_cards, 4);
        assert!(snap.index.get("Bolt").is_some());

        col.toggle_selected(&id);
        assert!(snap.refresh(&col));
        assert!(snap.index.is_empty());
        assert_eq!(snap, CubeSnapshot::compute(&col));
    }
}
