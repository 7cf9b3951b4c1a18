use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use rust_i18n::t;

use crate::session::progress::ProgressStats;
use crate::ui::theme::Theme;

/// Top strip: app name, today's count, monthly count against the goal, and
/// a due badge once review words pile up.
pub struct StatusBar<'a> {
    stats: &'a ProgressStats,
    goal: u32,
    due_count: usize,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(stats: &'a ProgressStats, goal: u32, due_count: usize, theme: &'a Theme) -> Self {
        Self {
            stats,
            goal,
            due_count,
            theme,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans = vec![
            Span::styled(
                " kelime ",
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    " {}: {}  {}: {}  {}: {}",
                    t!("stats.today"),
                    self.stats.completed_today,
                    t!("stats.month"),
                    self.stats.monthly_words,
                    t!("stats.goal"),
                    self.goal,
                ),
                Style::default()
                    .fg(colors.text_muted())
                    .bg(colors.header_bg()),
            ),
        ];

        if self.due_count > 0 {
            spans.push(Span::styled(
                format!("  \u{21bb} {} ", self.due_count),
                Style::default()
                    .fg(colors.word_due())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let header =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.header_bg()));
        header.render(area, buf);
    }
}
