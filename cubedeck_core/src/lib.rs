pub mod aggregate;
pub mod collection;
pub mod colour;
pub mod deck;
pub mod error;
pub mod naming;
pub mod ordered;
pub mod parser;
pub mod persist;
pub mod snapshot;
pub mod stats;
pub mod view;

pub use aggregate::{aggregate, AggregatedIndex, DeckUsage, DeckUsageMap};
pub use collection::DeckCollection;
pub use colour::{resolve_colour, ColourInputs, DEFAULT_PICKER_COLOUR};
pub use deck::{CardMap, Deck, DeckId, NewDeck};
pub use error::{ConfigError, ExportError, ImportError};
pub use naming::{draft_manual_deck, draft_uploaded_deck};
pub use ordered::OrderedMap;
pub use parser::{parse_deck_text, render_deck_text, ParsedDeck};
pub use persist::{export_json, import_json};
pub use snapshot::CubeSnapshot;
pub use stats::CubeStats;
pub use view::{view, CardRow, SortMode};
