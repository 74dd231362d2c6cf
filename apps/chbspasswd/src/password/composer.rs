//! Composer — assembles words, separators and pads into finished passwords.
//!
//! Draw order for one password is fixed: before pad, words, separators, inside
//! pads, after pad. Tests with a scripted `RandomSource` rely on it.

use serde::Serialize;
use tracing::debug;

use crate::errors::ChbsError;
use crate::password::config::PasswordConfig;
use crate::password::dictionary::Dictionary;
use crate::password::leet::eleet;
use crate::password::pad::build_pad;
use crate::password::random::RandomSource;
use crate::password::separator::build_separators;
use crate::password::words::select_words;

/// Borrows a validated config and a loaded dictionary; never mutates either.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    config: &'a PasswordConfig,
    dictionary: &'a Dictionary,
}

/// A generated batch, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct PasswordBatch<'a> {
    pub passwords: Vec<String>,
    pub config: &'a PasswordConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl<'a> Composer<'a> {
    pub fn new(config: &'a PasswordConfig, dictionary: &'a Dictionary) -> Self {
        Composer { config, dictionary }
    }

    /// Composes one password:
    /// `before + word[0] + gap[1] + word[1] + ... + word[n-1] + after`,
    /// followed by the leet pass over the whole string when enabled.
    pub fn compose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<String, ChbsError> {
        let config = self.config;
        let gaps = config.gap_count();

        let before = build_pad(config.pad_before(), rng);
        let words = select_words(config, self.dictionary, rng)?;
        let separators = build_separators(config.separator(), gaps, rng);
        let inside: Vec<String> = (0..gaps)
            .map(|_| build_pad(config.pad_inside(), rng))
            .collect();
        let after = build_pad(config.pad_after(), rng);

        let mut password = String::with_capacity(
            before.len()
                + after.len()
                + words.iter().map(String::len).sum::<usize>()
                + separators
                    .iter()
                    .zip(&inside)
                    .map(|(sep, pad)| gap_len(sep, pad))
                    .sum::<usize>(),
        );

        password.push_str(&before);
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                push_gap(&mut password, &separators[i - 1], &inside[i - 1]);
            }
            password.push_str(word);
        }
        password.push_str(&after);

        if config.eleet_enabled() {
            password = eleet(&password);
        }

        Ok(password)
    }

    /// Composes `count` independent passwords. The first error aborts the
    /// batch; no partial password is returned.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, ChbsError> {
        debug!("Generating {count} password(s) with {:?}", self.config);
        (0..count).map(|_| self.compose(rng)).collect()
    }
}

/// Byte length of the gap `push_gap` writes.
fn gap_len(separator: &str, inside: &str) -> usize {
    if !separator.is_empty() && !inside.is_empty() {
        separator.len() * 2 + inside.len()
    } else {
        separator.len() + inside.len()
    }
}

/// Writes one gap. With both a separator and an inside pad the layout is
/// `sep + pad + sep`; with only one of them, just that one.
fn push_gap(password: &mut String, separator: &str, inside: &str) {
    if !separator.is_empty() && !inside.is_empty() {
        password.push_str(separator);
        password.push_str(inside);
        password.push_str(separator);
    } else {
        password.push_str(separator);
        password.push_str(inside);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::config::{
        PadSpec, PadType, SeparatorSpec, SeparatorType, WordCase, VALID_SEPARATORS,
    };
    use crate::password::random::{RngSource, ScriptedRandom};

    fn example_dictionary() -> Dictionary {
        Dictionary::new(["cool", "mountain", "africa"])
    }

    /// Three INITIAL words, SAME separator x1, no before pad, one digit after.
    fn example_config(eleet: bool) -> PasswordConfig {
        PasswordConfig::builder()
            .word_count(3)
            .word_length(3, 8)
            .word_case(WordCase::Initial)
            .separator(SeparatorSpec::parse("SAME,1").unwrap())
            .pad_before(PadSpec::none())
            .pad_after(PadSpec::new(PadType::Digits, 1).unwrap())
            .eleet(eleet)
            .build()
            .unwrap()
    }

    /// words cool/mountain/africa, separator '.', digit 5
    fn example_draws() -> ScriptedRandom {
        ScriptedRandom::new(&[0, 1, 2, 2, 5])
    }

    #[test]
    fn test_compose_worked_example() {
        let dict = example_dictionary();
        let config = example_config(false);
        let mut rng = example_draws();

        let password = Composer::new(&config, &dict).compose(&mut rng).unwrap();
        assert_eq!(password, "Cool.Mountain.Africa5");
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_compose_worked_example_with_eleet() {
        let dict = example_dictionary();
        let config = example_config(true);

        let password = Composer::new(&config, &dict)
            .compose(&mut example_draws())
            .unwrap();
        assert_eq!(password, "C001.M0un7@!n.@fr!c@5");
    }

    #[test]
    fn test_default_config_shape() {
        let dict = example_dictionary();
        let config = PasswordConfig::default();
        // before digit 7, words, '-' separator, after '#'
        let mut rng = ScriptedRandom::new(&[7, 1, 1, 0, 3, 3]);

        let password = Composer::new(&config, &dict).compose(&mut rng).unwrap();
        assert_eq!(password, "7Mountain-Mountain-Cool#");
    }

    #[test]
    fn test_inside_pad_sits_between_two_separators() {
        let dict = Dictionary::new(["red", "sky"]);
        let config = PasswordConfig::builder()
            .word_count(2)
            .word_case(WordCase::Lower)
            .separator(SeparatorSpec::parse("SAME,1").unwrap())
            .pad_before(PadSpec::none())
            .pad_inside(PadSpec::new(PadType::Digits, 2).unwrap())
            .pad_after(PadSpec::none())
            .build()
            .unwrap();
        // words red, sky; separator '_'; inside digits 4, 2
        let mut rng = ScriptedRandom::new(&[0, 1, 4, 4, 2]);

        let password = Composer::new(&config, &dict).compose(&mut rng).unwrap();
        assert_eq!(password, "red_42_sky");
    }

    #[test]
    fn test_inside_pad_without_separator_leaves_no_stray_delimiters() {
        let dict = Dictionary::new(["red", "sky"]);
        let config = PasswordConfig::builder()
            .word_count(3)
            .word_case(WordCase::Upper)
            .separator(SeparatorSpec::disabled())
            .pad_before(PadSpec::none())
            .pad_inside(PadSpec::new(PadType::Special, 1).unwrap())
            .pad_after(PadSpec::none())
            .build()
            .unwrap();
        // words red, sky, red; inside '!' then '@'
        let mut rng = ScriptedRandom::new(&[0, 1, 0, 1, 2]);

        let password = Composer::new(&config, &dict).compose(&mut rng).unwrap();
        assert_eq!(password, "RED!SKY@RED");
    }

    #[test]
    fn test_gap_len_matches_written_gap() {
        for (sep, pad) in [("", ""), ("..", ""), ("", "42"), ("-", "7!"), ("==", "x")] {
            let mut gap = String::new();
            push_gap(&mut gap, sep, pad);
            assert_eq!(gap_len(sep, pad), gap.len(), "sep={sep:?} pad={pad:?}");
        }
    }

    #[test]
    fn test_upper_case_length_stays_fixed_with_non_ascii_dictionary() {
        let dict = Dictionary::new(["straße", "street"]);
        let config = PasswordConfig::builder()
            .word_count(2)
            .word_length(6, 6)
            .word_case(WordCase::Upper)
            .separator(SeparatorSpec::disabled())
            .pad_before(PadSpec::none())
            .pad_after(PadSpec::none())
            .build()
            .unwrap();
        let password = Composer::new(&config, &dict)
            .compose(&mut RngSource::seeded(6))
            .unwrap();
        assert_eq!(password, "STREETSTREET");
    }

    #[test]
    fn test_single_word_has_no_gaps() {
        let dict = Dictionary::new(["solo"]);
        let config = PasswordConfig::builder()
            .word_count(1)
            .pad_before(PadSpec::none())
            .pad_inside(PadSpec::new(PadType::Digits, 3).unwrap())
            .pad_after(PadSpec::none())
            .build()
            .unwrap();
        let mut rng = ScriptedRandom::new(&[0]);

        let password = Composer::new(&config, &dict).compose(&mut rng).unwrap();
        assert_eq!(password, "Solo");
        assert!(rng.is_exhausted(), "no separator or inside pad drawn");
    }

    #[test]
    fn test_random_separator_per_gap() {
        let dict = Dictionary::new(["abc"]);
        let config = PasswordConfig::builder()
            .word_count(3)
            .word_case(WordCase::Lower)
            .separator(SeparatorSpec::parse("RANDOM,2").unwrap())
            .pad_before(PadSpec::none())
            .pad_after(PadSpec::none())
            .build()
            .unwrap();
        let mut rng = ScriptedRandom::new(&[0, 0, 0, 5, 6]);

        let password = Composer::new(&config, &dict).compose(&mut rng).unwrap();
        assert_eq!(password, "abc==abc++abc");
    }

    #[test]
    fn test_same_separator_is_identical_across_gaps() {
        let dict = Dictionary::new(["alpha", "bravo", "delta"]);
        let config = PasswordConfig::builder()
            .word_count(5)
            .word_case(WordCase::Lower)
            .separator(SeparatorSpec::parse("SAME,2").unwrap())
            .pad_before(PadSpec::none())
            .pad_after(PadSpec::none())
            .build()
            .unwrap();
        let composer = Composer::new(&config, &dict);
        let mut rng = RngSource::seeded(17);

        for _ in 0..50 {
            let password = composer.compose(&mut rng).unwrap();
            let gaps: Vec<&str> = password
                .split(|c: char| c.is_alphabetic())
                .filter(|s| !s.is_empty())
                .collect();
            assert_eq!(gaps.len(), 4, "{password}");
            assert!(gaps.iter().all(|g| *g == gaps[0]), "{password}");
            assert!(gaps[0].chars().all(|c| VALID_SEPARATORS.contains(c)));
        }
    }

    #[test]
    fn test_length_is_determined_by_config() {
        let dict = Dictionary::new(["four", "more", "word"]);
        let config = PasswordConfig::builder()
            .word_count(4)
            .word_length(4, 4)
            .word_case(WordCase::Mixed)
            .separator(SeparatorSpec {
                enabled: true,
                separator_type: SeparatorType::Random,
                count: 2,
            })
            .pad_before(PadSpec::new(PadType::Digits, 3).unwrap())
            .pad_inside(PadSpec::new(PadType::Mixed, 2).unwrap())
            .pad_after(PadSpec::new(PadType::Special, 5).unwrap())
            .eleet(true)
            .build()
            .unwrap();
        let composer = Composer::new(&config, &dict);
        let mut rng = RngSource::seeded(2024);

        // 3 + 4*4 + 3 gaps * (2 + 2 + 2) + 5
        let expected = 3 + 16 + 18 + 5;
        for _ in 0..50 {
            let password = composer.compose(&mut rng).unwrap();
            assert_eq!(password.chars().count(), expected, "{password}");
        }
    }

    #[test]
    fn test_eleet_applies_to_pads_and_words() {
        let dict = Dictionary::new(["total"]);
        let config = PasswordConfig::builder()
            .word_count(1)
            .word_case(WordCase::Upper)
            .pad_before(PadSpec::none())
            .pad_after(PadSpec::none())
            .eleet(true)
            .build()
            .unwrap();
        let mut rng = ScriptedRandom::new(&[0]);

        let password = Composer::new(&config, &dict).compose(&mut rng).unwrap();
        assert_eq!(password, "707@1");
    }

    #[test]
    fn test_generate_returns_requested_count() {
        let dict = Dictionary::embedded();
        let config = PasswordConfig::default();
        let passwords = Composer::new(&config, &dict)
            .generate(5, &mut RngSource::seeded(1))
            .unwrap();
        assert_eq!(passwords.len(), 5);
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let dict = Dictionary::embedded();
        let config = PasswordConfig::default();
        let composer = Composer::new(&config, &dict);

        let first = composer.generate(3, &mut RngSource::seeded(77)).unwrap();
        let second = composer.generate(3, &mut RngSource::seeded(77)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_fails_whole_batch_on_empty_candidates() {
        let dict = Dictionary::new(["ox"]);
        let config = PasswordConfig::default();
        let result = Composer::new(&config, &dict).generate(4, &mut RngSource::seeded(1));
        assert!(matches!(result, Err(ChbsError::EmptyCandidateSet { min: 3, max: 8 })));
    }

    #[test]
    fn test_compose_does_not_mutate_config() {
        let dict = Dictionary::embedded();
        let config = PasswordConfig::default();
        let snapshot = config.clone();
        Composer::new(&config, &dict)
            .generate(10, &mut RngSource::seeded(3))
            .unwrap();
        assert_eq!(config, snapshot);
    }

    #[test]
    fn test_batch_serializes_passwords_and_config() {
        let config = PasswordConfig::default();
        let batch = PasswordBatch {
            passwords: vec!["5Cool.Mountain.Africa$".to_string()],
            config: &config,
            seed: None,
        };
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["passwords"][0], "5Cool.Mountain.Africa$");
        assert_eq!(json["config"]["word_case"], "INITIAL");
        assert_eq!(json["config"]["pad_before"]["type"], "DIGITS");
        assert!(json.get("seed").is_none());
    }
}
