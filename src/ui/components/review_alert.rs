use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;

/// Banner shown while the due set is non-empty.
pub struct ReviewAlert<'a> {
    due_count: usize,
    theme: &'a Theme,
}

impl<'a> ReviewAlert<'a> {
    pub fn new(due_count: usize, theme: &'a Theme) -> Self {
        Self { due_count, theme }
    }
}

impl Widget for ReviewAlert<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.warning()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::styled(
                format!(" \u{21bb} {} ", t!("review.alert_title")),
                Style::default()
                    .fg(colors.warning())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                t!("review.alert_body", count = self.due_count).into_owned(),
                Style::default().fg(colors.fg()),
            ),
        ]);

        Paragraph::new(line).render(inner, buf);
    }
}
