use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Editable text buffer with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, `0..=len`
    cursor: usize,
    multiline: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_value(value);
        input
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert text at the cursor. Newlines are dropped on single-line inputs.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\r' {
                continue;
            }
            if c == '\n' && !self.multiline {
                continue;
            }
            self.insert_char(c);
        }
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Apply an editing key. Returns false when the key isn't an edit,
    /// so the caller can treat it as navigation.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let len = self.value.chars().count();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
            }
            KeyCode::Enter if self.multiline => self.insert_char('\n'),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < len {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(len),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len,
            _ => return false,
        }
        true
    }
}

/// Bordered rendering of a [`TextInput`]
pub struct TextInputWidget<'a> {
    pub input: &'a TextInput,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, label: &'a str) -> Self {
        Self {
            input,
            label,
            placeholder: "",
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Theme::BORDER_FOCUSED
        } else {
            Theme::BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(Theme::MUTED_TEXT),
            ))
            .style(Style::default().bg(Theme::INPUT_BG));

        let lines: Vec<Line> = if self.input.is_empty() && !self.focused {
            vec![Line::from(Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(Theme::DIM_TEXT),
            ))]
        } else {
            render_with_cursor(self.input, self.focused)
        };

        // Keep the cursor line visible
        let inner_height = area.height.saturating_sub(2) as usize;
        let cursor_line = self
            .input
            .value
            .chars()
            .take(self.input.cursor)
            .filter(|&c| c == '\n')
            .count();
        let scroll = cursor_line.saturating_sub(inner_height.saturating_sub(1)) as u16;

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

fn render_with_cursor(input: &TextInput, focused: bool) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(Theme::BRIGHT_TEXT);
    let cursor_style = Style::default()
        .fg(Theme::BG)
        .bg(Theme::CURSOR)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();

    for (i, c) in input.value.chars().enumerate() {
        if focused && i == input.cursor {
            spans.push(Span::styled(std::mem::take(&mut current), text_style));
            let shown = if c == '\n' { ' ' } else { c };
            spans.push(Span::styled(shown.to_string(), cursor_style));
            if c == '\n' {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            continue;
        }
        if c == '\n' {
            spans.push(Span::styled(std::mem::take(&mut current), text_style));
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            current.push(c);
        }
    }
    spans.push(Span::styled(current, text_style));
    if focused && input.cursor >= input.value.chars().count() {
        spans.push(Span::styled(" ", cursor_style));
    }
    lines.push(Line::from(spans));
    lines
}
