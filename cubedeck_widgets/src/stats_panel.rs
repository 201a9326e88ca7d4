use cubedeck_core::CubeStats;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Storage panel: cube statistics plus the export/import controls.
pub struct StoragePanelWidget<'a> {
    pub stats: CubeStats,
    pub deck_count: usize,
    pub selected_count: usize,
    pub export_path: &'a str,
}

impl<'a> StoragePanelWidget<'a> {
    pub fn new(stats: CubeStats, deck_count: usize, selected_count: usize) -> Self {
        Self {
            stats,
            deck_count,
            selected_count,
            export_path: "",
        }
    }

    pub fn export_path(mut self, path: &'a str) -> Self {
        self.export_path = path;
        self
    }
}

fn stat_line(label: &str, value: String, colour: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(
            value,
            Style::default().fg(colour).add_modifier(Modifier::BOLD),
        ),
    ])
}

impl Widget for StoragePanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::BORDER))
            .title(Span::styled(
                " Storage ",
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Theme::PANEL_BG));

        let key = |k: &'static str| Span::styled(k, Style::default().fg(Theme::GOLD));
        let dim = |t: &'static str| Span::styled(t, Style::default().fg(Theme::DIM_TEXT));

        let lines = vec![
            Line::from(vec![dim("["), key("e"), dim("] Export JSON")]),
            Line::from(vec![dim("["), key("i"), dim("] Import JSON")]),
            Line::from(Span::styled(
                format!("  \u{2192} {}", self.export_path),
                Style::default().fg(Theme::DIM_TEXT),
            )),
            Line::from(""),
            stat_line(
                "Decks",
                format!("{} / {}", self.selected_count, self.deck_count),
                Theme::BRIGHT_TEXT,
            ),
            stat_line("Total cards", self.stats.total_cards.to_string(), Theme::BRIGHT_TEXT),
            stat_line("Cube minimum", self.stats.cube_min_cards.to_string(), Theme::GOLD),
            stat_line(
                "Cube / total",
                format!("{:.1}%", self.stats.cube_percent),
                Theme::EXPORT,
            ),
            Line::from(""),
            Line::from(Span::styled(
                "Export your decks to JSON and re-import them later. Unchecked decks are kept but left out of the cube.",
                Style::default().fg(Theme::MUTED_TEXT),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_percent() {
        let stats = CubeStats {
            total_cards: 16,
            cube_min_cards: 14,
            cube_percent: 87.5,
        };
        let area = Rect::new(0, 0, 40, 14);
        let mut buf = Buffer::empty(area);
        StoragePanelWidget::new(stats, 2, 2)
            .export_path("cube.json")
            .render(area, &mut buf);
        let text: String = (0..14u16)
            .flat_map(|y| (0..40u16).map(move |x| (x, y)))
            .map(|p| buf[p].symbol().to_string())
            .collect();
        assert!(text.contains("87.5%"));
        assert!(text.contains("cube.json"));
    }
}
