use cubedeck_core::{CardRow, SortMode};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::deck_list::scroll_offset;
use crate::theme::{chip_colour, contrast_text, Theme};

/// Rows each card occupies: name + chips, then "Appears in"
pub const ROWS_PER_CARD: u16 = 2;

/// The aggregated card list: one entry per card with a chip per deck.
pub struct CardIndexWidget<'a> {
    pub rows: &'a [CardRow<'a>],
    pub cursor: usize,
    pub query: &'a str,
    pub sort: SortMode,
    pub focused: bool,
}

impl<'a> CardIndexWidget<'a> {
    pub fn new(rows: &'a [CardRow<'a>], cursor: usize, query: &'a str, sort: SortMode) -> Self {
        Self {
            rows,
            cursor,
            query,
            sort,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// "Appears in: Burn (4), Zoo (2)"
pub fn appears_in(row: &CardRow<'_>) -> String {
    let decks = row
        .decks
        .iter()
        .map(|(name, usage)| format!("{} ({})", name, usage.quantity))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Appears in: {}", decks)
}

impl Widget for CardIndexWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Theme::BORDER_FOCUSED
        } else {
            Theme::BORDER
        };
        let mut title = vec![
            Span::styled(
                " Cards ",
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} shown ", self.rows.len()),
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ];
        if !self.query.is_empty() {
            title.push(Span::styled(
                format!("/{} ", self.query),
                Style::default().fg(Theme::GOLD),
            ));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Line::from(title))
            .title_bottom(Line::from(Span::styled(
                format!(" Sort: {} ", self.sort.label()),
                Style::default().fg(Theme::MUTED_TEXT),
            )))
            .style(Style::default().bg(Theme::PANEL_BG));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < ROWS_PER_CARD || inner.width < 10 {
            return;
        }

        if self.rows.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "No cards match.",
                Style::default().fg(Theme::DIM_TEXT),
            );
            return;
        }

        let visible = (inner.height / ROWS_PER_CARD) as usize;
        let offset = scroll_offset(self.cursor, self.rows.len(), visible);

        for (slot, (i, row)) in self
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + slot as u16 * ROWS_PER_CARD;
            let name_style = if i == self.cursor && self.focused {
                Style::default()
                    .fg(Theme::CURSOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD)
            };

            let mut spans = vec![Span::styled(row.card.to_string(), name_style), Span::raw("  ")];
            for (deck_name, usage) in row.decks.iter() {
                let bg = chip_colour(&usage.colour);
                spans.push(Span::styled(
                    format!(" {}: {} ", deck_name, usage.quantity),
                    Style::default().bg(bg).fg(contrast_text(bg)),
                ));
                spans.push(Span::raw(" "));
            }
            buf.set_line(inner.x, y, &Line::from(spans), inner.width);

            buf.set_string(
                inner.x + 2,
                y + 1,
                truncate(&appears_in(row), inner.width.saturating_sub(2) as usize),
                Style::default().fg(Theme::MUTED_TEXT),
            );
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
