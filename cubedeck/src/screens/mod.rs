pub mod add_deck;
pub mod cube;
pub mod prompt;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::app::{ScreenAction, Session};

/// Trait for app screens
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, session: &Session);
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<ScreenAction>;

    /// Bracketed paste; ignored unless the screen has a text field
    fn handle_paste(&mut self, _text: &str) {}
}
