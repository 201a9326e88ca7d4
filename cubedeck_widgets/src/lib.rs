pub mod card_index;
pub mod deck_list;
pub mod popup;
pub mod stats_panel;
pub mod text_input;
pub mod theme;

pub use theme::Theme;
