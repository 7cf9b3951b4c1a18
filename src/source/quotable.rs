use rust_i18n::t;
use serde::Deserialize;

use crate::config::Config;
use crate::source::{Sentence, SourceError};
use crate::vocab::extract::extract_new_words;

/// Wire shape of one quote from the quotable.io random endpoint.
#[derive(Debug, Deserialize)]
struct Quote {
    content: String,
    author: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Adapter for the public quotes API. Holds only the request parameters;
/// a fresh blocking client is built per fetch since batches are rare and
/// minutes apart.
#[derive(Clone, Debug)]
pub struct QuotableSource {
    base_url: String,
    batch_size: usize,
    min_length: u32,
    max_length: u32,
}

impl QuotableSource {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.quote_api_url.trim_end_matches('/').to_string(),
            batch_size: config.quote_batch_size,
            min_length: config.quote_min_length,
            max_length: config.quote_max_length,
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{}/quotes/random?limit={}&minLength={}&maxLength={}",
            self.base_url, self.batch_size, self.min_length, self.max_length
        )
    }

    pub fn fetch_batch(&self) -> Result<Vec<Sentence>, SourceError> {
        let body = fetch_url(&self.request_url())?;
        parse_batch(&body)
    }
}

#[cfg(feature = "network")]
fn fetch_url(url: &str) -> Result<String, SourceError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|err| SourceError::Http(err.to_string()))?;
    let response = client
        .get(url)
        .send()
        .map_err(|err| SourceError::Http(err.to_string()))?;
    if !response.status().is_success() {
        return Err(SourceError::Status(response.status().as_u16()));
    }
    response
        .text()
        .map_err(|err| SourceError::Http(err.to_string()))
}

#[cfg(not(feature = "network"))]
fn fetch_url(_url: &str) -> Result<String, SourceError> {
    Err(SourceError::Disabled)
}

fn parse_batch(body: &str) -> Result<Vec<Sentence>, SourceError> {
    let quotes: Vec<Quote> = serde_json::from_str(body)?;
    Ok(quotes.into_iter().map(to_sentence).collect())
}

/// Map a quote into a learning sentence. The "translation" is the source
/// text with the author appended, a stand-in until a real translation
/// service is wired up; the glossary covers individual words in the modal.
fn to_sentence(quote: Quote) -> Sentence {
    let new_words = extract_new_words(&quote.content);
    let turkish = format!("{} - {}", quote.content, quote.author);
    let topic = quote
        .tags
        .first()
        .cloned()
        .unwrap_or_else(|| t!("study.general_topic").into_owned());

    Sentence {
        english: quote.content,
        turkish,
        new_words,
        topic,
        author: Some(quote.author),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "content": "Any sufficiently advanced technology is equivalent to magic.",
            "author": "Arthur C. Clarke",
            "tags": ["Technology", "Famous Quotes"]
        },
        {
            "content": "The journey of a thousand miles begins with one step.",
            "author": "Lao Tzu",
            "tags": []
        }
    ]"#;

    #[test]
    fn test_parse_batch_maps_every_quote() {
        let sentences = parse_batch(SAMPLE).unwrap();
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_placeholder_translation_appends_author() {
        let sentences = parse_batch(SAMPLE).unwrap();
        assert_eq!(
            sentences[0].turkish,
            "Any sufficiently advanced technology is equivalent to magic. - Arthur C. Clarke"
        );
        assert_eq!(sentences[0].author.as_deref(), Some("Arthur C. Clarke"));
    }

    #[test]
    fn test_topic_comes_from_first_tag() {
        let sentences = parse_batch(SAMPLE).unwrap();
        assert_eq!(sentences[0].topic, "Technology");
    }

    #[test]
    fn test_topic_falls_back_when_untagged() {
        let sentences = parse_batch(SAMPLE).unwrap();
        // Untagged quotes get the localized general topic, never an empty tag.
        assert!(!sentences[1].topic.is_empty());
        assert_ne!(sentences[1].topic, sentences[0].topic);
    }

    #[test]
    fn test_new_words_are_extracted_and_capped() {
        let sentences = parse_batch(SAMPLE).unwrap();
        assert_eq!(
            sentences[0].new_words,
            vec!["sufficiently", "advanced", "technology"]
        );
        assert!(sentences[1].new_words.len() <= 3);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(parse_batch("not json").is_err());
        assert!(parse_batch(r#"{"content": "an object, not an array"}"#).is_err());
        assert!(parse_batch(r#"[{"author": "missing content"}]"#).is_err());
    }

    #[test]
    fn test_request_url_includes_batch_parameters() {
        let config = Config::default();
        let source = QuotableSource::from_config(&config);
        let url = source.request_url();
        assert!(url.contains("limit=10"));
        assert!(url.contains("minLength=30"));
        assert!(url.contains("maxLength=120"));
    }
}
