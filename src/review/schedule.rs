use chrono::{DateTime, Duration, Utc};

/// Spaced-repetition interval buckets in days. Indexed by the number of
/// completed reviews, clamped at the final bucket.
pub const REVIEW_INTERVALS_DAYS: [i64; 5] = [1, 3, 7, 14, 30];

pub fn interval_days(review_count: u32) -> i64 {
    let idx = (review_count as usize).min(REVIEW_INTERVALS_DAYS.len() - 1);
    REVIEW_INTERVALS_DAYS[idx]
}

/// Due timestamp for a word that has been reviewed `review_count` times
/// before the review happening now.
pub fn next_review(review_count: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(interval_days(review_count))
}
