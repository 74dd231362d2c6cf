//! Separator builder — the string placed in each gap between two words.

use crate::password::config::{SeparatorSpec, SeparatorType, VALID_SEPARATORS};
use crate::password::random::{choose_char, RandomSource};

/// Builds one separator: a character from `VALID_SEPARATORS` repeated
/// `spec.count` times. Empty when separators are disabled or the count is zero,
/// in which case no randomness is consumed.
pub fn build_separator<R: RandomSource + ?Sized>(spec: &SeparatorSpec, rng: &mut R) -> String {
    if !spec.enabled || spec.count == 0 {
        return String::new();
    }
    choose_char(VALID_SEPARATORS, rng)
        .to_string()
        .repeat(spec.count)
}

/// Builds the separator for every gap of one password.
///
/// SAME draws once and reuses the result; RANDOM draws per gap.
pub fn build_separators<R: RandomSource + ?Sized>(
    spec: &SeparatorSpec,
    gaps: usize,
    rng: &mut R,
) -> Vec<String> {
    if gaps == 0 {
        return Vec::new();
    }

    match spec.separator_type {
        SeparatorType::Same => vec![build_separator(spec, rng); gaps],
        SeparatorType::Random => (0..gaps).map(|_| build_separator(spec, rng)).collect(),
    }
}
