//! Decklist text parsing.
//!
//! The format is line oriented and deliberately forgiving: a line is either a
//! colour directive (`COLOUR = #ff0000 # comment`), a card line
//! (`4 Lightning Bolt (M10)`), or ignored. Parsing never fails.

use crate::deck::CardMap;

/// Structured result of parsing one decklist. The name is left to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDeck {
    pub cards: CardMap,
    /// Last non-empty colour directive, or empty
    pub colour: String,
}

/// Parse decklist text into cards and an optional colour.
///
/// Repeated card names within one text sum their quantities. Any integer
/// quantity is accepted, including zero and negatives, and summed as is.
pub fn parse_deck_text(text: &str) -> ParsedDeck {
    let mut deck = ParsedDeck::default();
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    for raw in normalized.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(value) = colour_directive(line) {
            if !value.is_empty() {
                deck.colour = value.to_string();
            }
            continue;
        }

        if let Some((quantity, name)) = card_line(line) {
            let entry = deck.cards.get_or_insert_with(&name, || 0);
            *entry = entry.saturating_add(quantity);
        }
    }

    deck
}

/// Render cards back to `<quantity> <name>` lines.
pub fn render_deck_text(cards: &CardMap) -> String {
    cards
        .iter()
        .map(|(name, quantity)| format!("{} {}", quantity, name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Value of a `COLOUR=`/`COLOR=` line with any `#` comment removed, trimmed.
/// `None` when the line is not a directive.
fn colour_directive(line: &str) -> Option<&str> {
    let upper = line.to_uppercase();
    if !(upper.starts_with("COLOUR") || upper.starts_with("COLOR")) {
        return None;
    }
    let (_, rhs) = line.split_once('=')?;
    Some(strip_comment(rhs.trim_start()).trim())
}

/// Cut at the first `#`. A `#` opening the value belongs to it (`#ff0000`)
/// unless whitespace or nothing follows it (`# note`).
fn strip_comment(value: &str) -> &str {
    let Some(rest) = value.strip_prefix('#') else {
        return value.split('#').next().unwrap_or_default();
    };
    if rest.chars().next().map_or(true, char::is_whitespace) {
        return "";
    }
    match rest.find('#') {
        Some(i) => &value[..i + 1],
        None => value,
    }
}

fn card_line(line: &str) -> Option<(i64, String)> {
    let mut tokens = line.split_whitespace();
    let quantity = leading_integer(tokens.next()?)?;
    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        return None;
    }

    let mut name = rest.join(" ");
    if let Some(paren) = name.find('(') {
        name = name[..paren].trim().to_string();
    }
    if name.is_empty() {
        return None;
    }
    Some((quantity, name))
}

/// Optional sign then at least one digit at the start of the token; anything
/// after the digits is ignored (`4x` reads as 4). Out-of-range values are
/// treated as not a number.
fn leading_integer(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = &token[sign_len..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    token[..sign_len + end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(pairs: &[(&str, i64)]) -> CardMap {
        pairs.iter().map(|&(n, q)| (n, q)).collect()
    }

    #[test]
    fn test_basic_lines() {
        let deck = parse_deck_text("1 Lightning Bolt\n2 Mountain");
        assert_eq!(deck.cards, cards(&[("Lightning Bolt", 1), ("Mountain", 2)]));
        assert_eq!(deck.colour, "");
    }

    #[test]
    fn test_repeated_names_sum() {
        let deck = parse_deck_text("2 Mountain\n1 Mountain");
        assert_eq!(deck.cards, cards(&[("Mountain", 3)]));
    }

    #[test]
    fn test_colour_comment_stripped() {
        let deck = parse_deck_text("COLOUR=#ff0000 # primary");
        assert_eq!(deck.colour, "#ff0000");
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_colour_directive_case_and_spelling() {
        assert_eq!(parse_deck_text("color = blue").colour, "blue");
        assert_eq!(parse_deck_text("Colour: x = rgb(1,2,3)").colour, "rgb(1,2,3)");
        assert_eq!(parse_deck_text("COLOURS=teal").colour, "teal");
    }

    #[test]
    fn test_hex_values_are_not_comments() {
        assert_eq!(parse_deck_text("COLOR=#abc").colour, "#abc");
        assert_eq!(parse_deck_text("colour =   #00ff00#note").colour, "#00ff00");
        assert_eq!(parse_deck_text("COLOUR=rgb(1,2,3) #comment").colour, "rgb(1,2,3)");
        assert_eq!(parse_deck_text("COLOUR=a=b").colour, "a=b");
    }

    #[test]
    fn test_comment_without_space() {
        assert_eq!(parse_deck_text("COLOUR=red#primary").colour, "red");
        assert_eq!(parse_deck_text("COLOUR=red # primary").colour, "red");
    }

    #[test]
    fn test_bare_comment_marker() {
        assert_eq!(parse_deck_text("COLOUR=red\nCOLOUR= #").colour, "red");
        assert_eq!(parse_deck_text("COLOUR=red\nCOLOUR=# note").colour, "red");
    }

    #[test]
    fn test_last_colour_directive_wins() {
        let deck = parse_deck_text("COLOUR=red\n1 Bolt\nCOLOR=green");
        assert_eq!(deck.colour, "green");
    }

    #[test]
    fn test_empty_colour_value_keeps_previous() {
        let deck = parse_deck_text("COLOUR=red\nCOLOUR=   # nothing here");
        assert_eq!(deck.colour, "red");
    }

    #[test]
    fn test_colour_word_without_equals_is_not_directive() {
        // Not a directive and not a card line either
        let deck = parse_deck_text("Colour red");
        assert_eq!(deck.colour, "");
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_parenthetical_suffix_stripped() {
        let deck = parse_deck_text("3 Island (foil)");
        assert_eq!(deck.cards, cards(&[("Island", 3)]));
    }

    #[test]
    fn test_set_code_suffix_merges_with_plain_name() {
        let deck = parse_deck_text("1 Island (M10) 231\n2 Island");
        assert_eq!(deck.cards, cards(&[("Island", 3)]));
    }

    #[test]
    fn test_whitespace_collapsed() {
        let deck = parse_deck_text("  4\t Lightning    Bolt  ");
        assert_eq!(deck.cards, cards(&[("Lightning Bolt", 4)]));
    }

    #[test]
    fn test_malformed_lines_ignored() {
        let text = "Sideboard\n\n4\nLightning Bolt\n// comment\n(1) Nothing\n2 (promo)";
        let deck = parse_deck_text(text);
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_leading_integer_prefix() {
        let deck = parse_deck_text("4x Lightning Bolt\n+2 Shock\nx4 Nope");
        assert_eq!(deck.cards, cards(&[("Lightning Bolt", 4), ("Shock", 2)]));
    }

    #[test]
    fn test_overflowing_quantity_skipped() {
        let deck = parse_deck_text("99999999999999999999 Bolt\n1 Shock");
        assert_eq!(deck.cards, cards(&[("Shock", 1)]));
    }

    // Non-positive quantities are accepted and summed arithmetically.
    #[test]
    fn test_non_positive_quantities_are_permissive() {
        let deck = parse_deck_text("-1 Bolt\n0 Shock\n3 Bolt");
        assert_eq!(deck.cards, cards(&[("Bolt", 2), ("Shock", 0)]));
    }

    #[test]
    fn test_line_endings_normalized() {
        let deck = parse_deck_text("1 A\r\n2 B\r3 C\n");
        assert_eq!(deck.cards, cards(&[("A", 1), ("B", 2), ("C", 3)]));
    }

    #[test]
    fn test_case_preserved() {
        let deck = parse_deck_text("1 bolt\n1 Bolt");
        assert_eq!(deck.cards, cards(&[("bolt", 1), ("Bolt", 1)]));
    }

    #[test]
    fn test_render_then_parse_is_stable() {
        let text = "2 Mountain\n4x  Lightning Bolt (M10)\nnoise\n1 Mountain\n-1 Shock";
        let first = parse_deck_text(text);
        let second = parse_deck_text(&render_deck_text(&first.cards));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(parse_deck_text(""), ParsedDeck::default());
    }
}
