// Criterion benchmarks for ordbok-dict.
//
// The word list is synthetic and deterministic: words are spelled from a
// multiplicative scramble of their index, so insertion order is far from
// sorted and the tree stays reasonably shallow. A sorted load is benchmarked
// separately to show the degenerate case.
//
// Run:
//   cargo bench -p ordbok-dict

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use ordbok_core::{Alphabet, RemovalStrategy};
use ordbok_dict::suggestion::SuggestionEngine;
use ordbok_dict::{Dictionary, DictionaryConfig};

// ---------------------------------------------------------------------------
// Word list
// ---------------------------------------------------------------------------

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn spell(mut n: u64) -> String {
    let mut word = String::new();
    loop {
        word.push(LETTERS[(n % 26) as usize] as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    word
}

fn wordlist(count: u64) -> Vec<String> {
    (0..count)
        .map(|i| spell(i.wrapping_mul(2_654_435_761) % 308_915_776))
        .collect()
}

fn config(strategy: RemovalStrategy) -> DictionaryConfig {
    DictionaryConfig::default()
        .with_alphabet(Alphabet::latin())
        .with_removal_strategy(strategy)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Bulk-load 20 000 scrambled words.
fn bench_bulk_load(c: &mut Criterion) {
    let words = wordlist(20_000);
    c.bench_function("bulk_load_20000_words", |b| {
        b.iter(|| {
            std::hint::black_box(
                Dictionary::from_words(&words, config(RemovalStrategy::Reassert)).unwrap(),
            )
        });
    });
}

/// Bulk-load 2 000 words in sorted order (list-shaped tree).
fn bench_sorted_load(c: &mut Criterion) {
    let mut words = wordlist(2_000);
    words.sort();
    c.bench_function("sorted_load_2000_words", |b| {
        b.iter(|| {
            std::hint::black_box(
                Dictionary::from_words(&words, config(RemovalStrategy::Reassert)).unwrap(),
            )
        });
    });
}

/// Look up every stored word plus as many misses.
fn bench_contains(c: &mut Criterion) {
    let words = wordlist(20_000);
    let dict = Dictionary::from_words(&words, config(RemovalStrategy::Reassert)).unwrap();
    let misses: Vec<String> = words.iter().map(|w| format!("{w}q")).collect();

    c.bench_function("contains_20000_hits", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(dict.contains(word));
            }
        });
    });
    c.bench_function("may_contain_20000_misses", |b| {
        b.iter(|| {
            for word in &misses {
                std::hint::black_box(dict.may_contain(word));
            }
        });
    });
}

/// Remove 100 words under each filter repair strategy.
fn bench_remove(c: &mut Criterion) {
    let words = wordlist(5_000);
    for (name, strategy) in [
        ("remove_100_reassert", RemovalStrategy::Reassert),
        ("remove_100_bucket_counts", RemovalStrategy::BucketCounts),
    ] {
        c.bench_function(name, |b| {
            b.iter_batched(
                || Dictionary::from_words(&words, config(strategy)).unwrap(),
                |mut dict| {
                    for word in words.iter().take(100) {
                        dict.remove(word);
                    }
                    dict
                },
                BatchSize::LargeInput,
            );
        });
    }
}

/// Spell-check a handful of near misses, generating every candidate family.
fn bench_spell_check(c: &mut Criterion) {
    let words = wordlist(20_000);
    let dict = Dictionary::from_words(&words, config(RemovalStrategy::Reassert)).unwrap();
    let engine = SuggestionEngine::new(Alphabet::latin());
    let misspelled: Vec<String> = words
        .iter()
        .filter(|w| w.len() >= 4)
        .take(5)
        .map(|w| {
            let mut chars: Vec<char> = w.chars().collect();
            chars.swap(0, 1);
            chars.into_iter().collect()
        })
        .collect();

    c.bench_function("spell_check_5_misspelled", |b| {
        b.iter(|| {
            for word in &misspelled {
                std::hint::black_box(engine.spell_check(word, &dict).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_bulk_load,
    bench_sorted_load,
    bench_contains,
    bench_remove,
    bench_spell_check,
);
criterion_main!(benches);
