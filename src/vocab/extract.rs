/// Function words that are never worth a flashcard.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "can", "must", "shall",
];

/// At most this many vocabulary chips per sentence.
pub const MAX_NEW_WORDS: usize = 3;

/// Pick the study-worthy words out of a sentence: lowercase, strip
/// punctuation, drop short tokens and stop words, keep the first three
/// survivors in sentence order. No stemming, no deduplication across
/// sentences.
pub fn extract_new_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || ch.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 3 && !STOP_WORDS.contains(word))
        .take(MAX_NEW_WORDS)
        .map(str::to_string)
        .collect()
}
