use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::aggregate::{AggregatedIndex, DeckUsageMap};
use crate::error::ConfigError;

/// Ordering policy for the card list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Most decks first, then by name
    #[default]
    Shared,
    /// By card name
    Alpha,
    /// By the comma-joined list of deck names holding the card
    Decks,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Shared, SortMode::Alpha, SortMode::Decks];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Shared => "shared",
            SortMode::Alpha => "alpha",
            SortMode::Decks => "decks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Shared => "Shared (most decks)",
            SortMode::Alpha => "Alphabetical",
            SortMode::Decks => "Deck list",
        }
    }

    /// Next mode in [`SortMode::ALL`], wrapping around
    pub fn next(self) -> Self {
        match self {
            SortMode::Shared => SortMode::Alpha,
            SortMode::Alpha => SortMode::Decks,
            SortMode::Decks => SortMode::Shared,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownSortMode(s.to_string()))
    }
}

/// One visible row of the card list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRow<'a> {
    pub card: &'a str,
    pub decks: &'a DeckUsageMap,
}

impl CardRow<'_> {
    /// Deck names joined with `,` in aggregation order
    pub fn deck_key(&self) -> String {
        self.decks.keys().collect::<Vec<_>>().join(",")
    }
}

/// Filter by case-insensitive substring on the card name, then order.
pub fn view<'a>(index: &'a AggregatedIndex, query: &str, mode: SortMode) -> Vec<CardRow<'a>> {
    let query = query.to_lowercase();
    let mut rows: Vec<CardRow<'a>> = index
        .iter()
        .filter(|(card, _)| card.to_lowercase().contains(&query))
        .map(|(card, decks)| CardRow { card, decks })
        .collect();

    match mode {
        SortMode::Shared => rows.sort_by(|a, b| {
            b.decks
                .len()
                .cmp(&a.decks.len())
                .then_with(|| name_order(a.card, b.card))
        }),
        SortMode::Alpha => rows.sort_by(|a, b| name_order(a.card, b.card)),
        SortMode::Decks => rows.sort_by_cached_key(|row| {
            let key = row.deck_key();
            (key.to_lowercase(), key)
        }),
    }
    rows
}

/// Case-insensitive first; exact bytes only break ties
fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
