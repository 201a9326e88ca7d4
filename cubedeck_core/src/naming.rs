//! Display names for decks that were added without one, and the glue that
//! turns raw text into a [`NewDeck`].

use crate::colour::ColourInputs;
use crate::deck::{CardMap, NewDeck};
use crate::parser::parse_deck_text;

/// Name for a pasted deck: the requested name if non-blank, else the first
/// card with whitespace turned into `_`, else `deck_<N+1>`.
pub fn manual_deck_name(requested: &str, cards: &CardMap, deck_count: usize) -> String {
    let requested = requested.trim();
    if !requested.is_empty() {
        return requested.to_string();
    }
    match cards.first_key() {
        Some(card) => underscored(card),
        None => format!("deck_{}", deck_count + 1),
    }
}

/// Name for an uploaded file: the first card, else the file name without its
/// extension, else `deck_<millis>`.
pub fn uploaded_deck_name(cards: &CardMap, file_name: &str, now_millis: u128) -> String {
    if let Some(card) = cards.first_key() {
        return underscored(card);
    }
    let stem = strip_extension(file_name);
    if stem.is_empty() {
        format!("deck_{}", now_millis)
    } else {
        stem.to_string()
    }
}

/// Parse pasted text into a deck ready for the collection.
pub fn draft_manual_deck(
    text: &str,
    requested_name: &str,
    colours: &ColourInputs,
    deck_count: usize,
) -> NewDeck {
    let parsed = parse_deck_text(text);
    let name = manual_deck_name(requested_name, &parsed.cards, deck_count);
    let colour = colours.resolve(&parsed.colour);
    NewDeck::new(name, parsed.cards, colour)
}

/// Parse an uploaded file's contents into a deck ready for the collection.
pub fn draft_uploaded_deck(
    file_name: &str,
    text: &str,
    colours: &ColourInputs,
    now_millis: u128,
) -> NewDeck {
    let parsed = parse_deck_text(text);
    let name = uploaded_deck_name(&parsed.cards, file_name, now_millis);
    let colour = colours.resolve(&parsed.colour);
    NewDeck::new(name, parsed.cards, colour)
}

fn underscored(card: &str) -> String {
    card.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Drop a trailing `.ext` where `ext` is non-empty and has no `.` or `/`.
fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() && !file_name[dot + 1..].contains('/') => {
            &file_name[..dot]
        }
        _ => file_name,
    }
}
