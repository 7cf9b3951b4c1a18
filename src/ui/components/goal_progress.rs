use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;

/// Sentence position, topic tag, and the monthly-goal bar.
pub struct GoalProgress<'a> {
    position: usize,
    topic: &'a str,
    ratio: f64,
    monthly_words: u32,
    goal: u32,
    theme: &'a Theme,
}

impl<'a> GoalProgress<'a> {
    pub fn new(
        position: usize,
        topic: &'a str,
        ratio: f64,
        monthly_words: u32,
        goal: u32,
        theme: &'a Theme,
    ) -> Self {
        Self {
            position,
            topic,
            ratio: ratio.clamp(0.0, 1.0),
            monthly_words,
            goal,
            theme,
        }
    }
}

impl Widget for GoalProgress<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        if area.height < 2 {
            return;
        }

        // Sentence counter is 1-based for display.
        let heading = Line::from(vec![
            Span::styled(
                format!(" {}", t!("study.sentence_no", n = self.position + 1)),
                Style::default().fg(colors.text_muted()),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", self.topic),
                Style::default().fg(colors.accent()).bg(colors.accent_dim()),
            ),
        ]);
        Paragraph::new(heading).render(Rect { height: 1, ..area }, buf);

        let bar_row = area.y + 1;
        let bar_area = Rect::new(area.x + 1, bar_row, area.width.saturating_sub(2), 1);
        if bar_area.width == 0 {
            return;
        }

        let filled_width = (self.ratio * bar_area.width as f64) as u16;
        for x in bar_area.x..bar_area.x + bar_area.width {
            let style = if x < bar_area.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, bar_row)].set_style(style);
        }

        let label = format!("{}/{}", self.monthly_words, self.goal);
        let label_x = bar_area.x + (bar_area.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, bar_row, &label, Style::default().fg(colors.fg()));
    }
}
