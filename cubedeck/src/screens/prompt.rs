use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use cubedeck_widgets::popup::centered_rect;
use cubedeck_widgets::text_input::{TextInput, TextInputWidget};
use cubedeck_widgets::theme::Theme;

use crate::app::{PromptKind, ScreenAction, Session};
use crate::screens::Screen;

/// Single-line prompt drawn over the cube screen
pub struct PromptScreen {
    pub kind: PromptKind,
    pub input: TextInput,
}

impl PromptScreen {
    pub fn new(kind: PromptKind, session: &Session) -> Self {
        let prefill = match &kind {
            PromptKind::Rename(id) => session
                .collection
                .get(id)
                .map(|d| d.name.clone())
                .unwrap_or_default(),
            PromptKind::Recolour(id) => session
                .collection
                .get(id)
                .map(|d| d.colour.clone())
                .unwrap_or_default(),
            PromptKind::Upload | PromptKind::Import => String::new(),
        };
        Self {
            kind,
            input: TextInput::with_value(prefill),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            PromptKind::Rename(_) => "Rename deck",
            PromptKind::Recolour(_) => "Deck colour",
            PromptKind::Upload => "Deck files or folders (quote paths with spaces)",
            PromptKind::Import => "Import JSON file",
        }
    }

    fn area(frame_area: Rect) -> Rect {
        // Input box plus one hint line
        let mut area = centered_rect(60, 20, frame_area);
        area.height = frame_area.height.min(4);
        area.y = frame_area.y + (frame_area.height - area.height) / 2;
        area
    }
}

impl Screen for PromptScreen {
    fn render(&mut self, frame: &mut Frame, _session: &Session) {
        let area = Self::area(frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(
            TextInputWidget::new(&self.input, self.label()).focused(true),
            Rect {
                height: area.height.min(3),
                ..area
            },
        );
        if area.height < 4 {
            return;
        }

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("] Confirm  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::GOLD)),
            Span::styled("] Cancel", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .style(Style::default().bg(Theme::PANEL_BG));
        frame.render_widget(
            hint,
            Rect {
                y: area.y + 3,
                height: 1,
                ..area
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Esc => Some(ScreenAction::CloseOverlay),
            KeyCode::Enter => Some(ScreenAction::SubmitPrompt(
                self.kind.clone(),
                self.input.value().to_string(),
            )),
            _ => {
                self.input.handle_key(key);
                None
            }
        }
    }

    fn handle_paste(&mut self, text: &str) {
        // Paths dropped onto a terminal often arrive with a trailing newline
        self.input.insert_str(text.trim_end_matches(['\r', '\n']));
    }
}
