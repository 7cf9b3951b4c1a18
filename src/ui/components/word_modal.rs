use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;
use crate::vocab::glossary;

/// Modal overlay for deciding a word's status. Shows the glossary
/// translation when there is one.
pub struct WordModal<'a> {
    word: &'a str,
    theme: &'a Theme,
}

impl<'a> WordModal<'a> {
    pub fn new(word: &'a str, theme: &'a Theme) -> Self {
        Self { word, theme }
    }
}

impl Widget for WordModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let translation = match glossary::translate(self.word) {
            Some(turkish) => Span::styled(
                turkish.to_string(),
                Style::default().fg(colors.translation_fg()),
            ),
            None => Span::styled(
                t!("modal.no_translation").into_owned(),
                Style::default().fg(colors.text_muted()),
            ),
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.word.to_string(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
            Line::from(translation),
            Line::from(""),
            Line::from(Span::styled(
                format!("[1] \u{2713} {}", t!("modal.learned")),
                Style::default().fg(colors.success()),
            )),
            Line::from(Span::styled(
                format!("[2] {}", t!("modal.known")),
                Style::default().fg(colors.text_muted()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                t!("modal.dismiss").into_owned(),
                Style::default().fg(colors.accent_dim()),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
