//! Word selection and case transformation.

use crate::errors::ChbsError;
use crate::password::config::{PasswordConfig, WordCase};
use crate::password::dictionary::Dictionary;
use crate::password::random::RandomSource;

/// Draws `word_count` words uniformly from the dictionary entries within the
/// configured length bounds, then applies the configured case to each.
///
/// Selection is with replacement: the same word may appear more than once.
pub fn select_words<R: RandomSource + ?Sized>(
    config: &PasswordConfig,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<Vec<String>, ChbsError> {
    let candidates =
        dictionary.candidates(config.word_minimum_length(), config.word_maximum_length());

    if candidates.is_empty() {
        return Err(ChbsError::EmptyCandidateSet {
            min: config.word_minimum_length(),
            max: config.word_maximum_length(),
        });
    }

    let words = (0..config.word_count())
        .map(|_| {
            let word = candidates[rng.uniform_choice(candidates.len())];
            apply_case(word, config.word_case(), rng)
        })
        .collect();

    Ok(words)
}

/// Applies a case mode to one word. Only `Mixed` consumes randomness.
pub fn apply_case<R: RandomSource + ?Sized>(word: &str, case: WordCase, rng: &mut R) -> String {
    match case {
        WordCase::Upper => word.to_uppercase(),
        WordCase::Lower => word.to_lowercase(),
        WordCase::Initial => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut initial: String = first.to_uppercase().collect();
                    initial.push_str(&chars.as_str().to_lowercase());
                    initial
                }
                None => String::new(),
            }
        }
        WordCase::Mixed => word
            .chars()
            .map(|c| {
                if rng.uniform_bit() {
                    c.to_uppercase().collect::<String>()
                } else {
                    c.to_lowercase().collect::<String>()
                }
            })
            .collect(),
    }
}
