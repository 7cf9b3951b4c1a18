use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::review::tracker::WordTracker;
use crate::source::Sentence;
use crate::ui::theme::Theme;

/// The main study card: sentence text, playback hint, translation toggle,
/// and the vocabulary chips once the translation is revealed.
pub struct SentenceCard<'a> {
    sentence: &'a Sentence,
    tracker: &'a WordTracker,
    show_translation: bool,
    speech_available: bool,
    speech_playing: bool,
    theme: &'a Theme,
}

impl<'a> SentenceCard<'a> {
    pub fn new(
        sentence: &'a Sentence,
        tracker: &'a WordTracker,
        show_translation: bool,
        speech_available: bool,
        speech_playing: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            sentence,
            tracker,
            show_translation,
            speech_available,
            speech_playing,
            theme,
        }
    }

    fn word_chip(&self, index: usize, word: &str) -> Span<'static> {
        let colors = &self.theme.colors;
        let due = self.tracker.is_due(word);
        let learned = self.tracker.is_learned(word);

        let marker = if due {
            " \u{21bb}"
        } else if learned {
            " \u{2713}"
        } else {
            ""
        };
        let text = format!(" [{}] {}{} ", index + 1, word, marker);

        let style = if due {
            Style::default()
                .fg(colors.word_due())
                .bg(colors.word_due_bg())
                .add_modifier(Modifier::BOLD)
        } else if learned {
            Style::default()
                .fg(colors.word_learned())
                .bg(colors.word_learned_bg())
        } else {
            Style::default().fg(colors.word_new()).bg(colors.word_new_bg())
        };

        Span::styled(text, style)
    }
}

impl Widget for SentenceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = vec![Line::from("")];

        lines.push(Line::from(Span::styled(
            self.sentence.english.clone(),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        if self.speech_available {
            let playback = if self.speech_playing {
                Span::styled(
                    format!("\u{266a} {}", t!("study.speaking")),
                    Style::default().fg(colors.accent()),
                )
            } else {
                Span::styled(
                    format!("\u{266a} [s] {}", t!("study.speak")),
                    Style::default().fg(colors.text_muted()),
                )
            };
            lines.push(Line::from(playback));
            lines.push(Line::from(""));
        }

        if self.show_translation {
            lines.push(Line::from(Span::styled(
                self.sentence.turkish.clone(),
                Style::default()
                    .fg(colors.translation_fg())
                    .bg(colors.translation_bg()),
            )));
            if let Some(ref author) = self.sentence.author {
                lines.push(Line::from(Span::styled(
                    format!("\u{2014} {author}"),
                    Style::default().fg(colors.accent()),
                )));
            }
            lines.push(Line::from(""));

            if !self.sentence.new_words.is_empty() {
                lines.push(Line::from(Span::styled(
                    t!("study.new_words").into_owned(),
                    Style::default()
                        .fg(colors.text_muted())
                        .add_modifier(Modifier::BOLD),
                )));

                let mut chips: Vec<Span> = Vec::new();
                for (i, word) in self.sentence.new_words.iter().enumerate() {
                    if i > 0 {
                        chips.push(Span::raw("  "));
                    }
                    chips.push(self.word_chip(i, word));
                }
                lines.push(Line::from(chips));
            }
        } else {
            lines.push(Line::from(Span::styled(
                format!("{} [t]", t!("study.show_translation")),
                Style::default().fg(colors.text_muted()),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        paragraph.render(inner, buf);
    }
}
