#![allow(dead_code)]

//! Password configuration — checked constructors for every configurable piece.
//!
//! All validation happens here, when the configuration is built. The builders in
//! `words`, `separator`, `pad` and `composer` trust the values they receive.

use std::str::FromStr;

use serde::Serialize;

use crate::errors::ChbsError;

pub const VALID_SPECIAL_CHARACTERS: &str = "~!@#$%^&*?";
pub const VALID_SEPARATORS: &str = "~,.-_=+:";
pub const DIGIT_CHARACTERS: &str = "0123456789";
/// Union alphabet for MIXED pads: every symbol is equally likely.
pub const MIXED_CHARACTERS: &str = "0123456789~!@#$%^&*?";

pub const PAD_MINIMUM_LENGTH: usize = 1;
pub const PAD_MAXIMUM_LENGTH: usize = 10;

/// Upper bounds that keep one password small no matter what the command line says.
pub const WORD_MAXIMUM_COUNT: usize = 32;
pub const SEPARATOR_MAXIMUM_COUNT: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Word case
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WordCase {
    Upper,
    Lower,
    #[default]
    Initial,
    Mixed,
}

impl FromStr for WordCase {
    type Err = ChbsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "U" | "UPPER" => Ok(WordCase::Upper),
            "L" | "LOWER" => Ok(WordCase::Lower),
            "I" | "INITIAL" => Ok(WordCase::Initial),
            "M" | "MIXED" => Ok(WordCase::Mixed),
            _ => Err(ChbsError::InvalidCaseMode(s.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Separators
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeparatorType {
    /// One character per password, reused at every gap.
    #[default]
    Same,
    /// A fresh character for each gap.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeparatorSpec {
    pub enabled: bool,
    pub separator_type: SeparatorType,
    pub count: usize,
}

impl Default for SeparatorSpec {
    fn default() -> Self {
        SeparatorSpec {
            enabled: true,
            separator_type: SeparatorType::Same,
            count: 1,
        }
    }
}

impl SeparatorSpec {
    pub fn disabled() -> Self {
        SeparatorSpec {
            enabled: false,
            ..SeparatorSpec::default()
        }
    }

    /// Parses `TYPE[,COUNT]` where TYPE is SAME, RANDOM or NONE (case-insensitive).
    ///
    /// A missing count means 1. NONE disables separators and ignores the count.
    pub fn parse(spec: &str) -> Result<Self, ChbsError> {
        let (raw_type, raw_count) = split_spec(spec)?;

        let separator_type = match raw_type.to_ascii_uppercase().as_str() {
            "NONE" => return Ok(SeparatorSpec::disabled()),
            "S" | "SAME" => SeparatorType::Same,
            "R" | "RANDOM" => SeparatorType::Random,
            _ => return Err(ChbsError::InvalidSeparatorType(raw_type.to_string())),
        };

        let count = match raw_count {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|count| *count <= SEPARATOR_MAXIMUM_COUNT)
                .ok_or_else(|| ChbsError::InvalidSeparatorCount {
                    count: raw.to_string(),
                    max: SEPARATOR_MAXIMUM_COUNT,
                })?,
            None => 1,
        };

        Ok(SeparatorSpec {
            enabled: true,
            separator_type,
            count,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pads
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PadType {
    Digits,
    Special,
    Mixed,
    None,
}

impl PadType {
    /// Characters a pad of this type draws from. Empty for `None`.
    pub fn alphabet(&self) -> &'static str {
        match self {
            PadType::Digits => DIGIT_CHARACTERS,
            PadType::Special => VALID_SPECIAL_CHARACTERS,
            PadType::Mixed => MIXED_CHARACTERS,
            PadType::None => "",
        }
    }
}

impl FromStr for PadType {
    type Err = ChbsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "D" | "DIGITS" => Ok(PadType::Digits),
            "S" | "SPECIAL" => Ok(PadType::Special),
            "M" | "MIXED" => Ok(PadType::Mixed),
            "NONE" => Ok(PadType::None),
            _ => Err(ChbsError::InvalidPadType(s.to_string())),
        }
    }
}

/// A validated pad: its type plus how many characters to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PadSpec {
    #[serde(rename = "type")]
    pad_type: PadType,
    count: usize,
}

impl PadSpec {
    /// Checked constructor. The count of a NONE pad is never used and is not validated.
    pub fn new(pad_type: PadType, count: usize) -> Result<Self, ChbsError> {
        if pad_type != PadType::None && !(PAD_MINIMUM_LENGTH..=PAD_MAXIMUM_LENGTH).contains(&count)
        {
            return Err(ChbsError::InvalidPadCount {
                count: count.to_string(),
                min: PAD_MINIMUM_LENGTH,
                max: PAD_MAXIMUM_LENGTH,
            });
        }
        Ok(PadSpec { pad_type, count })
    }

    pub fn none() -> Self {
        PadSpec {
            pad_type: PadType::None,
            count: 0,
        }
    }

    /// Parses `TYPE[,COUNT]`, e.g. `digits,2` or `S`. A missing count means 1.
    pub fn parse(spec: &str) -> Result<Self, ChbsError> {
        let (raw_type, raw_count) = split_spec(spec)?;
        let pad_type = raw_type.parse::<PadType>()?;

        let count = match raw_count {
            Some(raw) => raw.parse::<usize>().map_err(|_| ChbsError::InvalidPadCount {
                count: raw.to_string(),
                min: PAD_MINIMUM_LENGTH,
                max: PAD_MAXIMUM_LENGTH,
            })?,
            None => 1,
        };

        PadSpec::new(pad_type, count)
    }

    pub fn pad_type(&self) -> PadType {
        self.pad_type
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_none(&self) -> bool {
        self.pad_type == PadType::None
    }

    /// Length of the string this spec produces.
    pub fn output_len(&self) -> usize {
        if self.is_none() {
            0
        } else {
            self.count
        }
    }
}

/// Splits `TYPE[,COUNT]` into trimmed parts.
fn split_spec(spec: &str) -> Result<(&str, Option<&str>), ChbsError> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [t] if !t.is_empty() => Ok((*t, None)),
        [t, c] if !t.is_empty() && !c.is_empty() => Ok((*t, Some(*c))),
        _ => Err(ChbsError::MalformedSpec(spec.to_string())),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PasswordConfig
// ────────────────────────────────────────────────────────────────────────────

/// Immutable, fully validated settings for password composition.
///
/// Built through `PasswordConfigBuilder::build` (or `Default`), so holding a
/// `PasswordConfig` means every field is in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordConfig {
    word_count: usize,
    word_minimum_length: usize,
    word_maximum_length: usize,
    word_case: WordCase,
    separator: SeparatorSpec,
    pad_before: PadSpec,
    pad_inside: PadSpec,
    pad_after: PadSpec,
    eleet_enabled: bool,
}

impl PasswordConfig {
    pub fn builder() -> PasswordConfigBuilder {
        PasswordConfigBuilder::default()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn word_minimum_length(&self) -> usize {
        self.word_minimum_length
    }

    pub fn word_maximum_length(&self) -> usize {
        self.word_maximum_length
    }

    pub fn word_case(&self) -> WordCase {
        self.word_case
    }

    pub fn separator(&self) -> &SeparatorSpec {
        &self.separator
    }

    pub fn pad_before(&self) -> &PadSpec {
        &self.pad_before
    }

    pub fn pad_inside(&self) -> &PadSpec {
        &self.pad_inside
    }

    pub fn pad_after(&self) -> &PadSpec {
        &self.pad_after
    }

    pub fn eleet_enabled(&self) -> bool {
        self.eleet_enabled
    }

    /// Number of positions strictly between two adjacent words.
    pub fn gap_count(&self) -> usize {
        self.word_count.saturating_sub(1)
    }
}

impl Default for PasswordConfig {
    /// Produces passwords shaped like `5Cool.Mountain.Africa$`.
    fn default() -> Self {
        PasswordConfig {
            word_count: 3,
            word_minimum_length: 3,
            word_maximum_length: 8,
            word_case: WordCase::Initial,
            separator: SeparatorSpec::default(),
            pad_before: PadSpec {
                pad_type: PadType::Digits,
                count: 1,
            },
            pad_inside: PadSpec::none(),
            pad_after: PadSpec {
                pad_type: PadType::Special,
                count: 1,
            },
            eleet_enabled: false,
        }
    }
}

/// Starts from the defaults and overrides whatever the caller sets.
#[derive(Debug, Clone, Default)]
pub struct PasswordConfigBuilder {
    config: PasswordConfig,
}

impl PasswordConfigBuilder {
    pub fn word_count(mut self, count: usize) -> Self {
        self.config.word_count = count;
        self
    }

    pub fn word_length(mut self, minimum: usize, maximum: usize) -> Self {
        self.config.word_minimum_length = minimum;
        self.config.word_maximum_length = maximum;
        self
    }

    pub fn word_case(mut self, case: WordCase) -> Self {
        self.config.word_case = case;
        self
    }

    pub fn separator(mut self, separator: SeparatorSpec) -> Self {
        self.config.separator = separator;
        self
    }

    pub fn pad_before(mut self, pad: PadSpec) -> Self {
        self.config.pad_before = pad;
        self
    }

    pub fn pad_inside(mut self, pad: PadSpec) -> Self {
        self.config.pad_inside = pad;
        self
    }

    pub fn pad_after(mut self, pad: PadSpec) -> Self {
        self.config.pad_after = pad;
        self
    }

    pub fn eleet(mut self, enabled: bool) -> Self {
        self.config.eleet_enabled = enabled;
        self
    }

    /// Validates the numeric fields. Enum fields and pads were validated when
    /// they were constructed.
    pub fn build(self) -> Result<PasswordConfig, ChbsError> {
        let config = self.config;

        if !(1..=WORD_MAXIMUM_COUNT).contains(&config.word_count) {
            return Err(ChbsError::InvalidWordCount {
                count: config.word_count,
                max: WORD_MAXIMUM_COUNT,
            });
        }

        // SeparatorSpec fields are public, so a hand-built spec is checked here too
        if config.separator.count > SEPARATOR_MAXIMUM_COUNT {
            return Err(ChbsError::InvalidSeparatorCount {
                count: config.separator.count.to_string(),
                max: SEPARATOR_MAXIMUM_COUNT,
            });
        }

        if config.word_minimum_length < 1 || config.word_minimum_length > config.word_maximum_length
        {
            return Err(ChbsError::InvalidWordLength(format!(
                "{},{}",
                config.word_minimum_length, config.word_maximum_length
            )));
        }

        Ok(config)
    }
}

/// Parses `MIN,MAX` word length bounds.
pub fn parse_word_length(spec: &str) -> Result<(usize, usize), ChbsError> {
    let invalid = || ChbsError::InvalidWordLength(spec.to_string());
    let (min, max) = spec.split_once(',').ok_or_else(invalid)?;
    let min = min.trim().parse::<usize>().map_err(|_| invalid())?;
    let max = max.trim().parse::<usize>().map_err(|_| invalid())?;
    Ok((min, max))
}
