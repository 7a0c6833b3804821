use proptest::prelude::*;
use proptest::test_runner::Config;
use wordle_feedback::core::{
    ConstraintSet, KeyState, LetterKnowledge, LetterState, Verdict, WORD_LENGTH, Word,
};

// A small alphabet makes repeated letters and overlaps common
const WORD: &str = "[a-f]{5}";

fn word(text: &str) -> Word {
    Word::new(text).expect("generated word is valid")
}

fn count(word: &Word, letter: u8) -> usize {
    word.chars().iter().filter(|&&b| b == letter).count()
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn correct_exactly_where_letters_match(guess in WORD, secret in WORD) {
        let (guess, secret) = (word(&guess), word(&secret));
        let verdict = Verdict::score(&guess, Some(&secret));

        for (i, letter, state) in verdict.cells() {
            prop_assert_eq!(state == LetterState::Correct, letter == secret.char_at(i));
            prop_assert!(state.is_scored());
        }
    }

    #[test]
    fn matches_never_exceed_secret_supply(guess in WORD, secret in WORD) {
        let (guess, secret) = (word(&guess), word(&secret));
        let verdict = Verdict::score(&guess, Some(&secret));

        for letter in b'a'..=b'f' {
            let matched = verdict.matched_count(letter);
            prop_assert_eq!(matched, count(&guess, letter).min(count(&secret, letter)));
        }
    }

    #[test]
    fn scoring_is_deterministic(guess in WORD, secret in WORD) {
        let (guess, secret) = (word(&guess), word(&secret));
        prop_assert_eq!(
            Verdict::score(&guess, Some(&secret)),
            Verdict::score(&guess, Some(&secret))
        );
    }

    #[test]
    fn unknown_secret_is_all_empty(guess in WORD) {
        let verdict = Verdict::score(&word(&guess), None);
        prop_assert_eq!(verdict.states(), &[LetterState::Empty; WORD_LENGTH]);
    }

    #[test]
    fn knowledge_only_moves_up(
        secret in WORD,
        guesses in prop::collection::vec(WORD, 1..8)
    ) {
        let secret = word(&secret);
        let mut knowledge = LetterKnowledge::default();

        for guess in &guesses {
            let verdict = Verdict::score(&word(guess), Some(&secret));
            let next = knowledge.fold(&verdict);
            for letter in b'a'..=b'z' {
                prop_assert!(next.state(letter) >= knowledge.state(letter));
                if knowledge.state(letter) == KeyState::Correct {
                    prop_assert_eq!(next.state(letter), KeyState::Correct);
                }
            }
            knowledge = next;
        }
    }

    #[test]
    fn grey_letters_were_never_confirmed(
        secret in WORD,
        guesses in prop::collection::vec(WORD, 0..8)
    ) {
        let secret = word(&secret);
        let history: Vec<Verdict> = guesses
            .iter()
            .map(|g| Verdict::score(&word(g), Some(&secret)))
            .collect();
        let constraints = ConstraintSet::compile(&history);

        for &grey in &constraints.grey {
            let confirmed = history.iter().any(|verdict| {
                verdict.cells().any(|(_, letter, state)| {
                    char::from(letter) == grey
                        && matches!(state, LetterState::Correct | LetterState::Present)
                })
            });
            prop_assert!(!confirmed, "grey letter {} was confirmed", grey);
            prop_assert!(!secret.has_letter(u8::try_from(grey).unwrap()));
        }

        // Deduplicated
        let mut sorted = constraints.grey.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), constraints.grey.len());
    }

    #[test]
    fn secret_is_always_admitted(
        secret in WORD,
        guesses in prop::collection::vec(WORD, 0..8)
    ) {
        let secret = word(&secret);
        let history: Vec<Verdict> = guesses
            .iter()
            .map(|g| Verdict::score(&word(g), Some(&secret)))
            .collect();
        prop_assert!(ConstraintSet::compile(&history).admits(&secret));
    }

    #[test]
    fn compilation_is_idempotent(
        secret in WORD,
        guesses in prop::collection::vec(WORD, 0..6)
    ) {
        let secret = word(&secret);
        let history: Vec<Verdict> = guesses
            .iter()
            .map(|g| Verdict::score(&word(g), Some(&secret)))
            .collect();
        prop_assert_eq!(ConstraintSet::compile(&history), ConstraintSet::compile(&history));
    }
}
