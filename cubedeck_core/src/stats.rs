use std::collections::HashMap;

use crate::deck::Deck;

/// Size figures for the cube formed by the selected decks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CubeStats {
    /// Every copy in every selected deck
    pub total_cards: i64,
    /// Per card, the most copies any single selected deck needs, summed
    pub cube_min_cards: i64,
    /// `cube_min_cards / total_cards` as a percentage, one decimal; 0 when empty
    pub cube_percent: f64,
}

impl CubeStats {
    pub fn compute<'a>(decks: impl IntoIterator<Item = &'a Deck>) -> Self {
        let mut total_cards = 0i64;
        let mut peak: HashMap<&str, i64> = HashMap::new();

        for deck in decks.into_iter().filter(|d| d.selected) {
            for (card, &quantity) in deck.cards.iter() {
                total_cards = total_cards.saturating_add(quantity);
                peak.entry(card)
                    .and_modify(|q| *q = (*q).max(quantity))
                    .or_insert(quantity);
            }
        }

        let cube_min_cards = peak.values().fold(0i64, |acc, &q| acc.saturating_add(q));
        Self {
            total_cards,
            cube_min_cards,
            cube_percent: percent(cube_min_cards, total_cards),
        }
    }
}

fn percent(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
