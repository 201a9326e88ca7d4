use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use cubedeck_core::{draft_manual_deck, ColourInputs};
use cubedeck_widgets::text_input::{TextInput, TextInputWidget};
use cubedeck_widgets::theme::{css_colour, Theme};

use crate::app::{ScreenAction, Session};
use crate::screens::Screen;

/// Swatches offered by the picker, after the configured default
const PALETTE: [&str; 8] = [
    "#ffffff", "#ef4444", "#f59e0b", "#10b981", "#3b82f6", "#8b5cf6", "#ec4899", "#6b7280",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Name,
    Picker,
    ColourText,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Text => Field::Name,
            Field::Name => Field::Picker,
            Field::Picker => Field::ColourText,
            Field::ColourText => Field::Text,
        }
    }
}

/// Paste-a-deck form
pub struct AddDeckScreen {
    pub field: Field,
    pub text: TextInput,
    pub name: TextInput,
    pub colour_text: TextInput,
    palette: Vec<String>,
    pub picker: usize,
}

impl AddDeckScreen {
    pub fn new(default_colour: &str) -> Self {
        let mut palette = vec![default_colour.to_string()];
        palette.extend(
            PALETTE
                .iter()
                .filter(|c| !c.eq_ignore_ascii_case(default_colour))
                .map(|c| c.to_string()),
        );
        Self {
            field: Field::Text,
            text: TextInput::multiline(),
            name: TextInput::new(),
            colour_text: TextInput::new(),
            palette,
            picker: 0,
        }
    }

    /// Clear every input and put the picker back on the default
    pub fn reset(&mut self) {
        self.field = Field::Text;
        self.text.clear();
        self.name.clear();
        self.colour_text.clear();
        self.picker = 0;
    }

    pub fn picker_colour(&self) -> &str {
        &self.palette[self.picker]
    }

    /// Current free-text and picker values; also used for file uploads
    pub fn colour_inputs(&self) -> ColourInputs {
        ColourInputs {
            free_text: self.colour_text.value().to_string(),
            picker: self.picker_colour().to_string(),
        }
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect) {
        let focused = self.field == Field::Picker;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused {
                Theme::BORDER_FOCUSED
            } else {
                Theme::BORDER
            }))
            .title(Span::styled(" Swatch ", Style::default().fg(Theme::MUTED_TEXT)));

        let mut spans = Vec::new();
        for (i, colour) in self.palette.iter().enumerate() {
            let fg = css_colour(colour).unwrap_or(Theme::SWATCH_FALLBACK);
            let style = if i == self.picker {
                Style::default().fg(fg).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(fg)
            };
            spans.push(Span::styled("\u{25a0}", style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            self.picker_colour().to_string(),
            Style::default().fg(Theme::MUTED_TEXT),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

impl Screen for AddDeckScreen {
    fn render(&mut self, frame: &mut Frame, session: &Session) {
        let area = frame.area();
        let bg = Block::default().style(Style::default().bg(Theme::BG));
        frame.render_widget(bg, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Min(6),    // Deck text
            Constraint::Length(3), // Name
            Constraint::Length(3), // Colours
            Constraint::Length(1), // Preview
            Constraint::Length(1), // Help
        ])
        .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Add deck",
            Style::default()
                .fg(Theme::GOLD)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        frame.render_widget(
            TextInputWidget::new(&self.text, "Paste deck text")
                .placeholder("1 Lightning Bolt\n2 Mountain")
                .focused(self.field == Field::Text),
            chunks[1],
        );
        frame.render_widget(
            TextInputWidget::new(&self.name, "Deck name (optional)")
                .focused(self.field == Field::Name),
            chunks[2],
        );

        let colour_row =
            Layout::horizontal([Constraint::Length(30), Constraint::Min(10)]).split(chunks[3]);
        self.render_picker(frame, colour_row[0]);
        frame.render_widget(
            TextInputWidget::new(&self.colour_text, "CSS colour (name/#hex/rgba)")
                .focused(self.field == Field::ColourText),
            colour_row[1],
        );

        // Live preview of what will be added
        let draft = draft_manual_deck(
            self.text.value(),
            self.name.value(),
            &self.colour_inputs(),
            session.collection.len(),
        );
        let swatch = css_colour(&draft.colour).unwrap_or(Theme::SWATCH_FALLBACK);
        let preview = Line::from(vec![
            Span::styled("Will add ", Style::default().fg(Theme::MUTED_TEXT)),
            Span::styled("\u{25a0} ", Style::default().fg(swatch)),
            Span::styled(
                draft.name.clone(),
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {} distinct cards  colour {}",
                    draft.cards.len(),
                    draft.colour
                ),
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ]);
        frame.render_widget(Paragraph::new(preview), chunks[4]);

        let key = |k: &'static str| Span::styled(k, Style::default().fg(Theme::GOLD));
        let text = |t: &'static str| Span::styled(t, Style::default().fg(Theme::DIM_TEXT));
        let help = Paragraph::new(Line::from(vec![
            text("["),
            key("Tab"),
            text("] Next field  ["),
            key("\u{2190}\u{2192}"),
            text("] Swatch  ["),
            key("Ctrl+S"),
            text("] Add deck  ["),
            key("Ctrl+L"),
            text("] Clear  ["),
            key("Esc"),
            text("] Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[5]);
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Option<ScreenAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(ScreenAction::CloseOverlay),
            KeyCode::Char('s') if ctrl => return Some(ScreenAction::SubmitManualDeck),
            KeyCode::Char('l') if ctrl => {
                self.reset();
                return None;
            }
            KeyCode::Tab => {
                self.field = self.field.next();
                return None;
            }
            _ => {}
        }

        match self.field {
            Field::Text => {
                self.text.handle_key(key);
            }
            Field::Name => {
                self.name.handle_key(key);
            }
            Field::ColourText => {
                self.colour_text.handle_key(key);
            }
            Field::Picker => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.picker = self.picker.saturating_sub(1);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.picker = (self.picker + 1).min(self.palette.len() - 1);
                }
                _ => {}
            },
        }
        None
    }

    fn handle_paste(&mut self, text: &str) {
        match self.field {
            Field::Text => self.text.insert_str(text),
            Field::Name => self.name.insert_str(text),
            Field::ColourText => self.colour_text.insert_str(text),
            Field::Picker => {}
        }
    }
}
