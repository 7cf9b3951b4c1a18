pub mod quotable;

use std::sync::mpsc::Sender;
use std::thread;

use thiserror::Error;

use crate::event::AppEvent;
use crate::source::quotable::QuotableSource;

/// One learning unit: English text, its (placeholder) translation, the
/// extracted vocabulary, a topic tag, and the quote author when known.
/// Immutable after creation; the deck only ever appends.
#[derive(Clone, Debug)]
pub struct Sentence {
    pub english: String,
    pub turkish: String,
    pub new_words: Vec<String>,
    pub topic: String,
    pub author: Option<String>,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network support compiled out")]
    Disabled,
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("bad payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The two built-in sentences substituted whenever the quote source is
/// unavailable. These carry real hand-written translations, unlike the
/// API-sourced placeholder ones.
pub fn fallback_sentences() -> Vec<Sentence> {
    vec![
        Sentence {
            english: "Any sufficiently advanced technology is equivalent to magic.".to_string(),
            turkish: "Yeterince gelişmiş herhangi bir teknoloji sihire eşdeğerdir.".to_string(),
            new_words: vec![
                "sufficient".to_string(),
                "advanced".to_string(),
                "technology".to_string(),
                "equivalent".to_string(),
                "magic".to_string(),
            ],
            topic: "Technology".to_string(),
            author: None,
        },
        Sentence {
            english: "A house divided against itself cannot stand.".to_string(),
            turkish: "Kendisine karşı bölünmüş bir ev ayakta duramaz.".to_string(),
            new_words: vec![
                "house".to_string(),
                "divided".to_string(),
                "against".to_string(),
                "itself".to_string(),
                "cannot".to_string(),
                "stand".to_string(),
            ],
            topic: "Politics".to_string(),
            author: None,
        },
    ]
}

/// Fetch a batch off the render thread and hand the result back through
/// the event channel. Every failure path degrades to the fallback dataset;
/// nothing is surfaced to the user as an error state.
pub fn spawn_fetch(tx: Sender<AppEvent>, source: QuotableSource, offline: bool) {
    thread::spawn(move || {
        let batch = if offline {
            fallback_sentences()
        } else {
            match source.fetch_batch() {
                Ok(batch) => batch,
                Err(err) => {
                    log::warn!("quote fetch failed ({err}), using built-in sentences");
                    fallback_sentences()
                }
            }
        };
        let _ = tx.send(AppEvent::Sentences(batch));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_deterministic() {
        let first = fallback_sentences();
        let second = fallback_sentences();
        assert_eq!(first.len(), 2);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.english, b.english);
            assert_eq!(a.turkish, b.turkish);
            assert_eq!(a.new_words, b.new_words);
        }
    }

    #[test]
    fn test_fallback_sentences_have_real_translations() {
        for sentence in fallback_sentences() {
            assert!(!sentence.turkish.contains(&sentence.english));
            assert!(!sentence.new_words.is_empty());
            assert!(sentence.author.is_none());
        }
    }
}
