use crate::source::Sentence;

/// When the viewing position comes within this many items of the end of
/// the loaded sequence, another batch is requested.
pub const REFILL_MARGIN: usize = 3;

/// Append-only, ordered sequence of sentences plus the viewing position.
/// Sentences are never removed or reordered once loaded; the position may
/// run past the end, in which case the UI shows the loading state until
/// the next batch lands.
#[derive(Default)]
pub struct Deck {
    sentences: Vec<Sentence>,
    position: usize,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&Sentence> {
        self.sentences.get(self.position)
    }

    pub fn append(&mut self, batch: Vec<Sentence>) {
        self.sentences.extend(batch);
    }

    /// Forward navigation is never blocked; running past the loaded end
    /// just leaves `current()` empty until more sentences arrive.
    pub fn advance(&mut self) {
        self.position += 1;
    }

    pub fn can_retreat(&self) -> bool {
        self.position > 0
    }

    pub fn retreat(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    pub fn needs_refill(&self) -> bool {
        !self.sentences.is_empty() && self.position + REFILL_MARGIN >= self.sentences.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fallback_sentences;

    fn deck_with(count: usize) -> Deck {
        let mut deck = Deck::new();
        while deck.len() < count {
            let take = (count - deck.len()).min(2);
            deck.append(fallback_sentences().into_iter().take(take).collect());
        }
        deck
    }

    #[test]
    fn test_empty_deck_has_no_current() {
        let deck = Deck::new();
        assert!(deck.is_empty());
        assert!(deck.current().is_none());
        assert!(!deck.can_retreat());
    }

    #[test]
    fn test_empty_deck_does_not_request_refill() {
        // The initial fetch is driven by startup, not by the refill check.
        let deck = Deck::new();
        assert!(!deck.needs_refill());
    }

    #[test]
    fn test_append_extends_in_order() {
        let mut deck = Deck::new();
        deck.append(fallback_sentences());
        let first = deck.current().unwrap().english.clone();
        deck.append(fallback_sentences());
        assert_eq!(deck.len(), 4);
        // Existing entries keep their place.
        assert_eq!(deck.current().unwrap().english, first);
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut deck = deck_with(4);
        assert_eq!(deck.position(), 0);
        deck.advance();
        assert_eq!(deck.position(), 1);
        assert!(deck.can_retreat());
        deck.retreat();
        assert_eq!(deck.position(), 0);
        deck.retreat();
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn test_advance_past_end_shows_no_current() {
        let mut deck = deck_with(2);
        deck.advance();
        deck.advance();
        assert_eq!(deck.position(), 2);
        assert!(deck.current().is_none());

        deck.append(fallback_sentences());
        assert!(deck.current().is_some());
    }

    #[test]
    fn test_refill_triggers_within_margin_of_end() {
        let mut deck = deck_with(10);
        assert!(!deck.needs_refill());

        for _ in 0..6 {
            deck.advance();
        }
        assert!(!deck.needs_refill()); // position 6 of 10
        deck.advance();
        assert!(deck.needs_refill()); // position 7: within 3 of the end
    }

    #[test]
    fn test_refill_appends_rather_than_resets() {
        let mut deck = deck_with(4);
        deck.advance();
        assert!(deck.needs_refill());

        let position = deck.position();
        let first = deck.sentences[0].english.clone();
        deck.append(fallback_sentences());

        assert_eq!(deck.position(), position);
        assert_eq!(deck.sentences[0].english, first);
        assert_eq!(deck.len(), 6);
        assert!(!deck.needs_refill());
    }
}
