use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::review::schedule;

/// Per-word learning state. Records are created on first interaction and
/// never deleted; marking a word "known" resets it instead.
#[derive(Clone, Debug, PartialEq)]
pub struct WordRecord {
    pub learned: bool,
    pub last_seen: DateTime<Utc>,
    pub review_count: u32,
    pub next_review: Option<DateTime<Utc>>,
}

impl WordRecord {
    fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            learned: false,
            last_seen: now,
            review_count: 0,
            next_review: None,
        }
    }
}

/// In-memory map of every word the user has interacted with, plus the due
/// set recomputed wholesale on each rescan. Session-lifetime only.
#[derive(Default)]
pub struct WordTracker {
    words: HashMap<String, WordRecord>,
    due: HashSet<String>,
}

impl WordTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// "I learned it": bump the review count and push the due date out by
    /// the interval for the number of reviews completed so far. A word due
    /// for review stops being due the moment it is reviewed.
    pub fn mark_learned(&mut self, word: &str, now: DateTime<Utc>) {
        let record = self
            .words
            .entry(word.to_string())
            .or_insert_with(|| WordRecord::fresh(now));

        let completed = record.review_count;
        record.learned = true;
        record.last_seen = now;
        record.review_count = completed + 1;
        record.next_review = Some(schedule::next_review(completed, now));

        self.due.remove(word);
    }

    /// "I already know it": reset the record so the word drops out of
    /// review scheduling until it is marked learned again.
    pub fn mark_known(&mut self, word: &str, now: DateTime<Utc>) {
        self.words.insert(word.to_string(), WordRecord::fresh(now));
    }

    /// Recompute the due set from scratch against `now`. Called from the
    /// periodic tick; cheap enough that no incremental bookkeeping is kept.
    pub fn rescan(&mut self, now: DateTime<Utc>) {
        self.due = self
            .words
            .iter()
            .filter(|(_, record)| {
                record.learned && record.next_review.is_some_and(|due| now >= due)
            })
            .map(|(word, _)| word.clone())
            .collect();
    }

    pub fn is_due(&self, word: &str) -> bool {
        self.due.contains(word)
    }

    pub fn due_count(&self) -> usize {
        self.due.len()
    }

    pub fn is_learned(&self, word: &str) -> bool {
        self.words.get(word).is_some_and(|record| record.learned)
    }

    pub fn record(&self, word: &str) -> Option<&WordRecord> {
        self.words.get(word)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_mark_learned_creates_record() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("technology", now);

        let record = tracker.record("technology").unwrap();
        assert!(record.learned);
        assert_eq!(record.review_count, 1);
        assert_eq!(record.last_seen, now);
    }

    #[test]
    fn test_first_review_due_after_one_day() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("technology", now);

        let record = tracker.record("technology").unwrap();
        assert_eq!(record.next_review, Some(now + Duration::days(1)));
    }

    #[test]
    fn test_second_review_due_after_three_days() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("technology", now);

        // Reviewed again before the first due date: rescheduled from the
        // new review time with the next bucket.
        let later = now + Duration::hours(2);
        tracker.mark_learned("technology", later);

        let record = tracker.record("technology").unwrap();
        assert_eq!(record.review_count, 2);
        assert_eq!(record.next_review, Some(later + Duration::days(3)));
    }

    #[test]
    fn test_freshly_learned_word_is_not_due() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("umbrella", now);
        tracker.rescan(now);
        assert!(!tracker.is_due("umbrella"));
        assert_eq!(tracker.due_count(), 0);
    }

    #[test]
    fn test_word_becomes_due_once_interval_elapses() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("umbrella", now);

        tracker.rescan(now + Duration::hours(23));
        assert!(!tracker.is_due("umbrella"));

        tracker.rescan(now + Duration::days(1));
        assert!(tracker.is_due("umbrella"));
        assert_eq!(tracker.due_count(), 1);
    }

    #[test]
    fn test_reviewing_a_due_word_clears_it_immediately() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("magic", now);
        tracker.rescan(now + Duration::days(2));
        assert!(tracker.is_due("magic"));

        tracker.mark_learned("magic", now + Duration::days(2));
        assert!(!tracker.is_due("magic"));
    }

    #[test]
    fn test_mark_known_resets_record() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("divided", now);
        tracker.mark_learned("divided", now + Duration::days(1));

        let later = now + Duration::days(2);
        tracker.mark_known("divided", later);

        let record = tracker.record("divided").unwrap();
        assert!(!record.learned);
        assert_eq!(record.review_count, 0);
        assert_eq!(record.next_review, None);
        assert_eq!(record.last_seen, later);
    }

    #[test]
    fn test_known_word_never_comes_due() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("divided", now);
        tracker.mark_known("divided", now + Duration::hours(1));

        tracker.rescan(now + Duration::days(365));
        assert!(!tracker.is_due("divided"));
    }

    #[test]
    fn test_known_then_relearned_starts_over() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("stand", now);
        tracker.mark_learned("stand", now + Duration::days(1));
        tracker.mark_known("stand", now + Duration::days(2));

        let relearn = now + Duration::days(3);
        tracker.mark_learned("stand", relearn);

        let record = tracker.record("stand").unwrap();
        assert_eq!(record.review_count, 1);
        assert_eq!(record.next_review, Some(relearn + Duration::days(1)));
    }

    #[test]
    fn test_mark_known_on_unseen_word_creates_record() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_known("quite", now);

        let record = tracker.record("quite").unwrap();
        assert!(!record.learned);
        assert_eq!(record.review_count, 0);
    }

    #[test]
    fn test_review_count_monotonic_while_learned() {
        let mut tracker = WordTracker::new();
        let mut now = t0();
        let mut previous = 0;
        for _ in 0..8 {
            tracker.mark_learned("fluently", now);
            let count = tracker.record("fluently").unwrap().review_count;
            assert!(count > previous);
            previous = count;
            now += Duration::days(40);
        }
    }

    #[test]
    fn test_rescan_is_wholesale() {
        let mut tracker = WordTracker::new();
        let now = t0();
        tracker.mark_learned("house", now);
        tracker.mark_learned("magic", now);

        tracker.rescan(now + Duration::days(2));
        assert_eq!(tracker.due_count(), 2);

        // A later scan at an earlier clock drops both again: the set is
        // derived from the records, not accumulated.
        tracker.rescan(now);
        assert_eq!(tracker.due_count(), 0);
    }
}
