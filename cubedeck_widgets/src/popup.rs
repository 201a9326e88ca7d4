use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Widget};

use crate::theme::Theme;

/// A centered popup overlay
pub struct PopupWidget {
    pub title: String,
    pub lines: Vec<(String, Style)>,
    pub width_percent: u16,
    pub height_percent: u16,
    pub accent: ratatui::style::Color,
}

impl PopupWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            width_percent: 60,
            height_percent: 40,
            accent: Theme::CURSOR,
        }
    }

    pub fn line(mut self, text: impl Into<String>, style: Style) -> Self {
        self.lines.push((text.into(), style));
        self
    }

    pub fn size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.width_percent = width_percent;
        self.height_percent = height_percent;
        self
    }

    pub fn accent(mut self, accent: ratatui::style::Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Widget for PopupWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(self.width_percent, self.height_percent, area);

        Clear.render(popup_area, buf);

        let title_line = Line::from(Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(Theme::GOLD)
                .add_modifier(Modifier::BOLD),
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.accent))
            .title(title_line)
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1))
            .style(Style::default().bg(Theme::BG));

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        // Lines centered, clipped to the popup
        for (i, (text, style)) in self.lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let len = text.chars().count() as u16;
            let x = inner.x + inner.width.saturating_sub(len) / 2;
            buf.set_stringn(x, y, text, inner.width as usize, *style);
        }
    }
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let r = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(r, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_long_lines_clipped() {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        PopupWidget::new("Import failed")
            .line("x".repeat(200), Style::default())
            .render(area, &mut buf);
        let popup = centered_rect(60, 40, area);
        // Nothing written right of the popup
        let outside = buf[(popup.right(), popup.y + 2)].symbol().to_string();
        assert_eq!(outside, " ");
    }
}
