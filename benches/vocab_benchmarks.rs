use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use kelime::review::schedule;
use kelime::review::tracker::WordTracker;
use kelime::vocab::extract::extract_new_words;

fn make_corpus(count: usize) -> Vec<String> {
    let bases = [
        "Any sufficiently advanced technology is equivalent to magic.",
        "The journey of a thousand miles begins with one step, they say.",
        "Happiness is not something ready made; it comes from your own actions.",
        "A house divided against itself cannot stand, now or ever.",
    ];
    (0..count)
        .map(|i| format!("{} ({i})", bases[i % bases.len()]))
        .collect()
}

fn bench_extraction(c: &mut Criterion) {
    let corpus = make_corpus(500);

    c.bench_function("extract_new_words (500 sentences)", |b| {
        b.iter(|| {
            for sentence in &corpus {
                black_box(extract_new_words(black_box(sentence)));
            }
        })
    });
}

fn bench_rescan(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let mut tracker = WordTracker::new();
    for sentence in make_corpus(500) {
        for word in extract_new_words(&sentence) {
            tracker.mark_learned(&word, start);
        }
    }
    let later = schedule::next_review(4, start);

    c.bench_function("tracker rescan (1500 marks)", |b| {
        b.iter(|| tracker.rescan(black_box(later)))
    });
}

criterion_group!(benches, bench_extraction, bench_rescan);
criterion_main!(benches);
