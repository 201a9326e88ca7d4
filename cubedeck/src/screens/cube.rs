use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use cubedeck_core::{view, DeckId, SortMode};
use cubedeck_widgets::card_index::CardIndexWidget;
use cubedeck_widgets::deck_list::DeckListWidget;
use cubedeck_widgets::stats_panel::StoragePanelWidget;
use cubedeck_widgets::text_input::{TextInput, TextInputWidget};
use cubedeck_widgets::theme::Theme;

use crate::app::{PromptKind, ScreenAction, Session};
use crate::screens::Screen;

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Decks,
    Cards,
    Search,
}

/// Main view: decks | cards | storage
pub struct CubeScreen {
    pub focus: Focus,
    pub deck_cursor: usize,
    pub card_cursor: usize,
    pub search: TextInput,
    pub sort: SortMode,
    /// Where the storage panel was last drawn, for effects
    pub storage_area: Rect,
}

impl CubeScreen {
    pub fn new(sort: SortMode) -> Self {
        Self {
            focus: Focus::Decks,
            deck_cursor: 0,
            card_cursor: 0,
            search: TextInput::new(),
            sort,
            storage_area: Rect::default(),
        }
    }

    fn cursor_deck(&self, session: &Session) -> Option<DeckId> {
        session
            .collection
            .decks()
            .get(self.deck_cursor)
            .map(|d| d.id.clone())
    }

    fn clamp_cursors(&mut self, deck_count: usize, card_count: usize) {
        self.deck_cursor = self.deck_cursor.min(deck_count.saturating_sub(1));
        self.card_cursor = self.card_cursor.min(card_count.saturating_sub(1));
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Theme::GOLD));
        let text = |t: &'static str| Span::styled(t, Style::default().fg(Theme::DIM_TEXT));
        let help = Paragraph::new(Line::from(vec![
            text("["),
            key("a"),
            text("] Add  ["),
            key("u"),
            text("] Upload  ["),
            key("Space"),
            text("] Toggle  ["),
            key("r"),
            text("] Rename  ["),
            key("c"),
            text("] Colour  ["),
            key("x"),
            text("] Remove  ["),
            key("w"),
            text("] Write .txt  ["),
            key("/"),
            text("] Search  ["),
            key("s"),
            text("] Sort  ["),
            key("Tab"),
            text("] Panel  ["),
            key("q"),
            text("] Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }
}

impl Screen for CubeScreen {
    fn render(&mut self, frame: &mut Frame, session: &Session) {
        let area = frame.area();
        let bg = Block::default().style(Style::default().bg(Theme::BG));
        frame.render_widget(bg, area);

        let rows = view(&session.snapshot.index, self.search.value(), self.sort);
        self.clamp_cursors(session.collection.len(), rows.len());

        let main = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
        let columns = Layout::horizontal([
            Constraint::Length(34),
            Constraint::Min(30),
            Constraint::Length(34),
        ])
        .split(main[0]);

        let decks = DeckListWidget::new(session.collection.decks(), self.deck_cursor)
            .focused(self.focus == Focus::Decks);
        frame.render_widget(decks, columns[0]);

        let middle = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(columns[1]);
        let search = TextInputWidget::new(&self.search, "Search cards")
            .placeholder("[/] to search")
            .focused(self.focus == Focus::Search);
        frame.render_widget(search, middle[0]);

        let cards = CardIndexWidget::new(&rows, self.card_cursor, self.search.value(), self.sort)
            .focused(self.focus == Focus::Cards);
        frame.render_widget(cards, middle[1]);

        let selected = session.collection.selected().count();
        let storage = StoragePanelWidget::new(
            session.snapshot.stats,
            session.collection.len(),
            selected,
        )
        .export_path(&session.export_label);
        self.storage_area = columns[2];
        frame.render_widget(storage, columns[2]);

        self.render_help(frame, main[1]);
    }

    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<ScreenAction> {
        if self.focus == Focus::Search {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => self.focus = Focus::Cards,
                _ => {
                    if self.search.handle_key(key) {
                        self.card_cursor = 0;
                    }
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(ScreenAction::Quit),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Decks => Focus::Cards,
                    _ => Focus::Decks,
                };
            }
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('s') => {
                self.sort = self.sort.next();
                self.card_cursor = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => match self.focus {
                Focus::Decks => self.deck_cursor = self.deck_cursor.saturating_sub(1),
                _ => self.card_cursor = self.card_cursor.saturating_sub(1),
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focus {
                Focus::Decks => self.deck_cursor += 1,
                _ => self.card_cursor += 1,
            },
            KeyCode::Char('a') => return Some(ScreenAction::OpenAddDeck),
            KeyCode::Char('u') => return Some(ScreenAction::OpenPrompt(PromptKind::Upload)),
            KeyCode::Char('i') => return Some(ScreenAction::OpenPrompt(PromptKind::Import)),
            KeyCode::Char('e') => return Some(ScreenAction::Export),
            _ => {}
        }

        // Deck actions apply to the highlighted deck
        if self.focus != Focus::Decks {
            return None;
        }
        let id = self.cursor_deck(session)?;
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(ScreenAction::ToggleDeck(id)),
            KeyCode::Char('x') | KeyCode::Delete => Some(ScreenAction::RemoveDeck(id)),
            KeyCode::Char('r') => Some(ScreenAction::OpenPrompt(PromptKind::Rename(id))),
            KeyCode::Char('c') => Some(ScreenAction::OpenPrompt(PromptKind::Recolour(id))),
            KeyCode::Char('w') => Some(ScreenAction::WriteDeckText(id)),
            _ => None,
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.focus == Focus::Search {
            self.search.insert_str(text);
            self.card_cursor = 0;
        }
    }
}
