//! Cross-checks of counting and skip-ahead against a brute-force reference

use itertools::Itertools;
use leetdict::counting::{possibilities_number, possibilities_within, variations_number};
use leetdict::leet::{letter_variants, variant_count};
use leetdict::variants::word_variants;
use leetdict::{Generator, LengthFilter, WordSet};

/// Straightforward nested enumeration built on itertools
fn reference(words: &[&str], permute: bool, filter: &LengthFilter) -> Vec<String> {
    let mut out = Vec::new();

    for k in 1..=words.len() {
        for combination in (0..words.len()).combinations(k) {
            let joined: String = combination.iter().map(|&i| words[i]).collect();
            if !filter.matches(&joined) {
                continue;
            }

            let orderings: Vec<Vec<usize>> = if permute {
                combination.iter().copied().permutations(k).collect()
            } else {
                vec![combination.clone()]
            };

            for ordering in orderings {
                let word: String = ordering.iter().map(|&i| words[i]).collect();
                let spellings = word
                    .chars()
                    .map(letter_variants)
                    .multi_cartesian_product()
                    .map(|parts| parts.concat());
                out.extend(spellings);
            }
        }
    }

    out
}

const WORD_SETS: &[&[&str]] = &[
    &["b"],
    &["b", "c"],
    &["ha", "x"],
    &["go", "at", "s"],
    &["ab", "ab", "1"],
    &["ta", "7", "ël"],
];

#[test]
fn letter_counts_match_generated_variants() {
    for c in ('\u{20}'..='\u{7e}').chain("äÉßİ€ж".chars()) {
        assert_eq!(letter_variants(c).len(), variant_count(c), "char {:?}", c);
    }
}

#[test]
fn word_counts_match_generated_variants() {
    for word in ["pass", "Secret1", "toast", "l33t", "zz", "été"] {
        let generated = word_variants(word).count() as u128;
        assert_eq!(variations_number(word).unwrap(), generated, "word {}", word);
    }
}

#[test]
fn full_enumeration_matches_reference_and_count() {
    for words in WORD_SETS {
        for permute in [false, true] {
            let filter = LengthFilter::unbounded();
            let generator = Generator::new(words.iter().copied(), permute, filter);

            let generated: Vec<String> = generator.candidates(0, None).unwrap().collect();
            let expected = reference(words, permute, &filter);
            assert_eq!(generated, expected, "words {:?} permute {}", words, permute);

            let set = WordSet::new(words.iter().copied());
            assert_eq!(
                possibilities_number(&set, permute).unwrap(),
                generated.len() as u128,
                "count for {:?} permute {}",
                words,
                permute
            );
        }
    }
}

#[test]
fn every_rank_lands_on_the_same_candidate() {
    for words in WORD_SETS {
        for permute in [false, true] {
            let generator =
                Generator::new(words.iter().copied(), permute, LengthFilter::unbounded());
            let full: Vec<String> = generator.candidates(0, None).unwrap().collect();

            for (rank, expected) in full.iter().enumerate() {
                let rank = rank as u128;
                let single: Vec<String> =
                    generator.candidates(rank, Some(rank + 1)).unwrap().collect();
                assert_eq!(single, vec![expected.clone()], "rank {} of {:?}", rank, words);
            }
        }
    }
}

#[test]
fn windows_are_slices_of_the_full_sequence() {
    let words = ["go", "at", "s"];
    let generator = Generator::new(words, true, LengthFilter::unbounded());
    let full: Vec<String> = generator.candidates(0, None).unwrap().collect();

    for (start, end) in [(0, 1), (3, 40), (35, 36), (100, 700), (full.len() - 5, full.len())] {
        let window: Vec<String> = generator
            .candidates(start as u128, Some(end as u128))
            .unwrap()
            .collect();
        assert_eq!(window, full[start..end].to_vec(), "window [{}, {})", start, end);
    }
}

#[test]
fn filtered_runs_are_consistent() {
    let words = ["go", "at", "s", "e"];
    for permute in [false, true] {
        for (min, max) in [(0, 3), (3, 5), (4, 4), (6, 9)] {
            let filter = LengthFilter::new(min, max).unwrap();
            let generator = Generator::new(words, permute, filter);
            let expected = reference(&words, permute, &filter);

            let set = WordSet::new(words);
            assert_eq!(
                possibilities_within(&set, permute, &filter).unwrap(),
                expected.len() as u128
            );

            let generated: Vec<String> = generator.candidates(0, None).unwrap().collect();
            assert_eq!(generated, expected, "filter {}..={} permute {}", min, max, permute);

            for rank in (0..expected.len()).step_by(7) {
                let r = rank as u128;
                let single: Vec<String> = generator.candidates(r, Some(r + 1)).unwrap().collect();
                assert_eq!(single, vec![expected[rank].clone()]);
            }
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let generator = Generator::new(["ta", "7", "ël"], true, LengthFilter::default());
    let first: Vec<String> = generator.candidates(5, Some(60)).unwrap().collect();
    let second: Vec<String> = generator.candidates(5, Some(60)).unwrap().collect();
    assert_eq!(first, second);
}
