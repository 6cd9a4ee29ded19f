//! Property tests for puzzle generation.
//! CI: 128 cases (default). Soak: PROPTEST_CASES=5000 cargo test --release

use proptest::prelude::*;
use std::collections::HashMap;
use wordfind::config::DEFAULT_ALPHABET;
use wordfind::generation::utils::create_rng;
use wordfind::{
    Axis, GenerationConfig, Generator, Position, PuzzleGenerator, PuzzleResult, WordfindError,
    WordfindResult,
};

fn config_128() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(128),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn generate(words: &[String], config: &GenerationConfig) -> WordfindResult<PuzzleResult> {
    let mut rng = create_rng(config);
    PuzzleGenerator::new(words.to_vec()).generate(config, &mut rng)
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Lowercase words over a small alphabet so that crossings are common.
fn word_strategy() -> impl Strategy<Value = String> {
    "[abcde]{1,9}"
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..12)
}

proptest! {
    #![proptest_config(config_128())]

    #[test]
    fn every_cell_holds_an_alphabet_letter(
        words in words_strategy(),
        seed in any::<u64>(),
        dimension in 1usize..10,
    ) {
        let config = GenerationConfig::new(seed).with_dimension(dimension);
        let puzzle = generate(&words, &config).unwrap();

        prop_assert_eq!(puzzle.grid.dimension(), dimension);
        prop_assert_eq!(puzzle.grid.unfilled_count(), 0);
        for (_, cell) in puzzle.grid.cells() {
            prop_assert!(DEFAULT_ALPHABET.contains(cell.letter), "unexpected letter {:?}", cell.letter);
        }
    }

    #[test]
    fn placed_words_read_back_and_own_their_tags(
        words in words_strategy(),
        seed in any::<u64>(),
        dimension in 3usize..10,
    ) {
        let config = GenerationConfig::for_testing(seed).with_dimension(dimension);
        let puzzle = generate(&words, &config).unwrap();

        for word in &puzzle.placed {
            let read = puzzle.grid.read_span(word.placement.origin, word.placement.axis, word.len());
            prop_assert_eq!(read.as_deref(), Some(word.text.as_str()));
            for pos in word.positions() {
                let cell = puzzle.grid.get(pos).unwrap();
                prop_assert_eq!(cell.tag(word.placement.axis), Some(word.id));
            }
        }

        // Each axis tag on a cell belongs to exactly one placed word
        let mut owners: HashMap<(Position, Axis), usize> = HashMap::new();
        for word in &puzzle.placed {
            for pos in word.positions() {
                *owners.entry((pos, word.placement.axis)).or_default() += 1;
            }
        }
        prop_assert!(owners.values().all(|&count| count == 1));

        let tagged = puzzle.grid.cells().flat_map(|(_, cell)| cell.tags()).count();
        prop_assert_eq!(tagged, owners.len());
    }

    #[test]
    fn same_seed_same_board(
        words in words_strategy(),
        seed in any::<u64>(),
    ) {
        let config = GenerationConfig::new(seed);
        let first = generate(&words, &config).unwrap();
        let second = generate(&words, &config).unwrap();

        prop_assert_eq!(first.grid, second.grid);
        prop_assert_eq!(first.placed, second.placed);
        prop_assert_eq!(first.dropped, second.dropped);
    }

    #[test]
    fn long_words_are_never_placed(
        words in words_strategy(),
        seed in any::<u64>(),
        dimension in 1usize..6,
    ) {
        let config = GenerationConfig::for_testing(seed).with_dimension(dimension);
        let puzzle = generate(&words, &config).unwrap();

        prop_assert!(puzzle.placed.iter().all(|word| word.len() <= dimension));
        prop_assert_eq!(puzzle.placed.len() + puzzle.dropped.len(), words.len());
        for word in words.iter().filter(|word| word.len() > dimension) {
            prop_assert!(puzzle.dropped.contains(word));
        }
    }

    #[test]
    fn cap_limits_placed_words(
        words in words_strategy(),
        seed in any::<u64>(),
        cap in 0usize..4,
    ) {
        let config = GenerationConfig::for_testing(seed).with_max_words(cap);
        let puzzle = generate(&words, &config).unwrap();

        prop_assert!(puzzle.placed.len() <= cap);
        prop_assert_eq!(puzzle.placed.len() + puzzle.dropped.len(), words.len());
    }
}

#[test]
fn cat_and_dog_on_a_five_by_five() {
    for seed in 0..20 {
        let config = GenerationConfig::for_testing(seed)
            .with_dimension(5)
            .with_max_words(2);
        let puzzle = generate(&owned(&["cat", "dog"]), &config).unwrap();

        assert_eq!(puzzle.grid.dimension(), 5);
        assert_eq!(puzzle.grid.rows().len(), 5);
        assert!(puzzle.grid.rows().iter().all(|row| row.len() == 5));
        assert!(puzzle
            .grid
            .cells()
            .all(|(_, cell)| cell.letter.is_lowercase()));
        assert_eq!(puzzle.placed_texts(), vec!["cat", "dog"], "seed {}", seed);

        for text in ["cat", "dog"] {
            let word = puzzle.find(text).unwrap();
            assert_eq!(
                puzzle
                    .grid
                    .read_span(word.placement.origin, word.placement.axis, 3)
                    .as_deref(),
                Some(text)
            );
        }
    }
}

#[test]
fn hello_does_not_fit_a_three_by_three() {
    let config = GenerationConfig::for_testing(3).with_dimension(3);
    let puzzle = generate(&owned(&["hello"]), &config).unwrap();

    assert!(puzzle.placed.is_empty());
    assert_eq!(puzzle.dropped, vec!["hello".to_string()]);
    assert_eq!(puzzle.grid.unfilled_count(), 0);
    assert!(puzzle.grid.cells().all(|(_, cell)| !cell.is_tagged()));
}

#[test]
fn empty_word_list_fails_fast() {
    let config = GenerationConfig::for_testing(1);
    assert!(matches!(
        generate(&[], &config),
        Err(WordfindError::InvalidInput(_))
    ));
}

#[test]
fn zero_dimension_is_rejected() {
    let config = GenerationConfig::for_testing(1).with_dimension(0);
    assert!(matches!(
        generate(&owned(&["cat"]), &config),
        Err(WordfindError::InvalidConfig(_))
    ));
}
