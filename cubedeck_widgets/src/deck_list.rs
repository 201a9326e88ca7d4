use cubedeck_core::Deck;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::theme::{css_colour, Theme};

/// Deck panel: checkbox, colour swatch, name and card count per deck.
pub struct DeckListWidget<'a> {
    pub decks: &'a [Deck],
    pub cursor: usize,
    pub focused: bool,
}

impl<'a> DeckListWidget<'a> {
    pub fn new(decks: &'a [Deck], cursor: usize) -> Self {
        Self {
            decks,
            cursor,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// First visible row so that `cursor` stays inside a window of `height` rows
pub fn scroll_offset(cursor: usize, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    cursor
        .saturating_sub(height - 1)
        .min(len - height)
}

impl Widget for DeckListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = self.decks.iter().filter(|d| d.selected).count();
        let border = if self.focused {
            Theme::BORDER_FOCUSED
        } else {
            Theme::BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Line::from(vec![
                Span::styled(
                    " Decks ",
                    Style::default()
                        .fg(Theme::BRIGHT_TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{}/{} active ", selected, self.decks.len()),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
            ]))
            .style(Style::default().bg(Theme::PANEL_BG));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width < 8 {
            return;
        }

        if self.decks.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "No decks yet. [a] add  [u] upload",
                Style::default().fg(Theme::DIM_TEXT),
            );
            return;
        }

        let height = inner.height as usize;
        let offset = scroll_offset(self.cursor, self.decks.len(), height);

        for (row, (i, deck)) in self
            .decks
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let is_cursor = i == self.cursor;

            let (check, check_style) = if deck.selected {
                ("[x]", Style::default().fg(Theme::SELECTED))
            } else {
                ("[ ]", Style::default().fg(Theme::UNSELECTED))
            };
            let swatch = css_colour(&deck.colour).unwrap_or(Theme::SWATCH_FALLBACK);
            let name_style = match (is_cursor, deck.selected) {
                (true, _) => Style::default()
                    .fg(Theme::CURSOR)
                    .add_modifier(Modifier::BOLD),
                (false, true) => Style::default().fg(Theme::BRIGHT_TEXT),
                (false, false) => Style::default().fg(Theme::DIM_TEXT),
            };

            let line = Line::from(vec![
                Span::styled(if is_cursor { "> " } else { "  " }, name_style),
                Span::styled(check, check_style),
                Span::raw(" "),
                Span::styled("\u{25a0}", Style::default().fg(swatch)),
                Span::raw(" "),
                Span::styled(deck.name.clone(), name_style),
                Span::styled(
                    format!("  {}", deck.total_cards()),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
