use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::config::Config;
use crate::event::AppEvent;
use crate::review::tracker::WordTracker;
use crate::session::deck::Deck;
use crate::session::progress::ProgressStats;
use crate::source::quotable::QuotableSource;
use crate::source::{self, Sentence};
use crate::speech::SpeechEngine;
use crate::ui::theme::Theme;

pub struct App {
    pub config: Config,
    pub theme: &'static Theme,
    pub deck: Deck,
    pub tracker: WordTracker,
    pub progress: ProgressStats,
    pub show_translation: bool,
    pub selected_word: Option<String>,
    pub fetch_in_flight: bool,
    pub offline: bool,
    pub speech: SpeechEngine,
    pub should_quit: bool,
    events_tx: Sender<AppEvent>,
    last_review_scan: Instant,
}

impl App {
    pub fn new(events_tx: Sender<AppEvent>, offline: bool) -> Self {
        let mut config = Config::load().unwrap_or_default();
        config.validate();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let speech = SpeechEngine::new(config.speech_rate);

        let mut app = Self {
            config,
            theme,
            deck: Deck::new(),
            tracker: WordTracker::new(),
            progress: ProgressStats::default(),
            show_translation: false,
            selected_word: None,
            fetch_in_flight: false,
            offline,
            speech,
            should_quit: false,
            events_tx,
            last_review_scan: Instant::now(),
        };
        app.tracker.rescan(Utc::now());
        app.request_sentences();
        app
    }

    /// Kick off a background fetch unless one is already running. The
    /// result comes back as an `AppEvent::Sentences`.
    pub fn request_sentences(&mut self) {
        if self.fetch_in_flight {
            return;
        }
        self.fetch_in_flight = true;
        source::spawn_fetch(
            self.events_tx.clone(),
            QuotableSource::from_config(&self.config),
            self.offline,
        );
    }

    pub fn on_sentences(&mut self, batch: Vec<Sentence>) {
        self.deck.append(batch);
        self.fetch_in_flight = false;
        // Appending can still leave the deck short (fallback batches are
        // only two sentences), so re-check the refill threshold.
        if self.deck.needs_refill() {
            self.request_sentences();
        }
    }

    pub fn on_tick(&mut self) {
        if self.last_review_scan.elapsed() >= Duration::from_secs(self.config.review_check_secs) {
            self.tracker.rescan(Utc::now());
            self.last_review_scan = Instant::now();
        }
    }

    pub fn advance_sentence(&mut self) {
        self.deck.advance();
        self.show_translation = false;
        self.selected_word = None;
        if self.deck.needs_refill() {
            self.request_sentences();
        }
    }

    pub fn retreat_sentence(&mut self) {
        if !self.deck.can_retreat() {
            return;
        }
        self.deck.retreat();
        self.show_translation = false;
        self.selected_word = None;
    }

    pub fn toggle_translation(&mut self) {
        if self.deck.current().is_some() {
            self.show_translation = !self.show_translation;
        }
    }

    /// Open the status modal for the nth chip of the current sentence.
    /// Chips only exist once the translation is revealed.
    pub fn select_word(&mut self, index: usize) {
        if !self.show_translation {
            return;
        }
        if let Some(sentence) = self.deck.current() {
            if let Some(word) = sentence.new_words.get(index) {
                self.selected_word = Some(word.clone());
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.selected_word = None;
    }

    pub fn mark_selected(&mut self, learned: bool) {
        let Some(word) = self.selected_word.take() else {
            return;
        };
        let now = Utc::now();
        if learned {
            self.tracker.mark_learned(&word, now);
            self.progress.record_learned();
        } else {
            self.tracker.mark_known(&word, now);
        }
    }

    pub fn speak_current(&mut self) {
        if !self.config.speech_enabled || !self.speech.is_available() || self.speech.is_playing() {
            return;
        }
        if let Some(sentence) = self.deck.current() {
            self.speech.speak(&sentence.english);
        }
    }
}
