//! JSON document codec: `{ "decks": [ { id, name, cards, colour, selected } ] }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collection::DeckCollection;
use crate::deck::{CardMap, Deck, DeckId, NewDeck};
use crate::error::{ExportError, ImportError};

#[derive(Serialize)]
struct ExportDocument<'a> {
    decks: &'a [Deck],
}

/// Imported deck record. Any `id` in the document is ignored; missing or
/// `null` fields become empty.
#[derive(Deserialize)]
struct ImportedDeck {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    cards: Option<CardMap>,
    #[serde(default)]
    colour: Option<String>,
    #[serde(default)]
    selected: Option<Value>,
}

impl ImportedDeck {
    fn into_new_deck(self) -> NewDeck {
        // Only an explicit `false` deselects
        let selected = !matches!(self.selected, Some(Value::Bool(false)));
        NewDeck::new(
            self.name.unwrap_or_default(),
            self.cards.unwrap_or_default(),
            self.colour.unwrap_or_default(),
        )
        .selected(selected)
    }
}

/// Serialize the whole collection, unselected decks and ids included.
pub fn export_json(collection: &DeckCollection) -> Result<String, ExportError> {
    let doc = ExportDocument {
        decks: collection.decks(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Decode a document into decks awaiting fresh ids.
///
/// Fails as a whole: either every record decodes or nothing is returned.
pub fn import_json(text: &str) -> Result<Vec<NewDeck>, ImportError> {
    let mut doc: Value = serde_json::from_str(text)?;
    let decks = match doc.get_mut("decks") {
        Some(Value::Array(decks)) => std::mem::take(decks),
        Some(_) => return Err(ImportError::Format("`decks` is not an array".to_string())),
        None => return Err(ImportError::Format("missing `decks` array".to_string())),
    };

    decks
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value::<ImportedDeck>(record)
                .map(ImportedDeck::into_new_deck)
                .map_err(|e| ImportError::Format(format!("deck {}: {}", i + 1, e)))
        })
        .collect()
}

impl DeckCollection {
    /// Append every deck from a JSON document under fresh ids.
    /// On error the collection is unchanged.
    pub fn import_json(&mut self, text: &str) -> Result<Vec<DeckId>, ImportError> {
        let decks = import_json(text)?;
        tracing::info!(count = decks.len(), "imported decks");
        Ok(self.add_many(decks))
    }

    pub fn export_json(&self) -> Result<String, ExportError> {
        export_json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_shape() {
        let mut col = DeckCollection::new();
        let cards: CardMap = [("Bolt", 4)].into_iter().collect();
        let id = col.add(NewDeck::new("Burn", cards, "red"));
        col.toggle_selected(&id);

        let json: Value = serde_json::from_str(&export_json(&col).unwrap()).unwrap();
        let deck = &json["decks"][0];
        assert_eq!(deck["id"], id.to_string());
        assert_eq!(deck["name"], "Burn");
        assert_eq!(deck["cards"]["Bolt"], 4);
        assert_eq!(deck["colour"], "red");
        assert_eq!(deck["selected"], false);
    }

    #[test]
    fn test_import_defaults_selected() {
        let text = r#"{"decks":[
            {"name":"A","cards":{"Bolt":1},"colour":"red"},
            {"name":"B","cards":{},"colour":"","selected":false},
            {"name":"C","cards":{},"colour":"","selected":"no"},
            {"name":"D","cards":{},"colour":"","selected":null}
        ]}"#;
        let decks = import_json(text).unwrap();
        let selected: Vec<bool> = decks.iter().map(|d| d.selected).collect();
        assert_eq!(selected, vec![true, false, true, true]);
    }

    #[test]
    fn test_import_ignores_ids() {
        let mut col = DeckCollection::new();
        let existing = col.add(NewDeck::new("Live", CardMap::new(), ""));
        let text = format!(
            r#"{{"decks":[{{"id":"{}","name":"Clash","cards":{{}},"colour":""}}]}}"#,
            existing
        );
        let ids = col.import_json(&text).unwrap();
        assert_eq!(ids.len(), 1);
        assert_ne!(ids[0], existing);
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn test_import_keeps_card_order() {
        let decks = import_json(r#"{"decks":[{"name":"A","cards":{"Zap":1,"Bolt":2}}]}"#).unwrap();
        assert_eq!(decks[0].cards.keys().collect::<Vec<_>>(), vec!["Zap", "Bolt"]);
        assert_eq!(decks[0].colour, "");
    }

    #[test]
    fn test_import_null_fields_become_empty() {
        let text = r#"{"decks":[{"name":null,"cards":null,"colour":null}]}"#;
        let decks = import_json(text).unwrap();
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name, "");
        assert!(decks[0].cards.is_empty());
        assert_eq!(decks[0].colour, "");
        assert!(decks[0].selected);
    }

    #[test]
    fn test_import_syntax_error() {
        let mut col = DeckCollection::new();
        let err = col.import_json("{not json").unwrap_err();
        assert!(matches!(err, ImportError::Syntax(_)));
        assert!(col.is_empty());
        assert_eq!(col.revision(), 0);
    }

    #[test]
    fn test_import_format_errors() {
        for text in [r#"{}"#, r#"{"decks":{}}"#, r#"[1,2]"#, r#""decks""#] {
            assert!(
                matches!(import_json(text), Err(ImportError::Format(_))),
                "accepted {}",
                text
            );
        }
    }

    #[test]
    fn test_import_bad_record_aborts_everything() {
        let mut col = DeckCollection::new();
        let text = r#"{"decks":[{"name":"ok","cards":{}},{"name":"bad","cards":{"Bolt":"four"}}]}"#;
        let err = col.import_json(text).unwrap_err();
        assert!(err.to_string().contains("deck 2"));
        assert!(col.is_empty());
    }

    #[test]
    fn test_import_empty_list() {
        let mut col = DeckCollection::new();
        assert!(col.import_json(r#"{"decks":[]}"#).unwrap().is_empty());
        assert_eq!(col.revision(), 0);
    }
}
