#![allow(dead_code)]

//! Dictionary — the word list passwords are drawn from.
//!
//! Loaded once before any composition and never mutated afterwards.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::ChbsError;

/// Word list compiled into the binary, used when no dictionary file is configured.
static EMBEDDED_WORDLIST: &str = include_str!("../../data/words.txt");

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Builds a dictionary from raw lines.
    ///
    /// Lines are trimmed; blank lines, `#` comments and entries containing
    /// anything other than ASCII letters (e.g. `Aaron's`, `straße`) are skipped.
    /// Case changes never alter the length of an ASCII word.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let words: Vec<String> = lines
            .into_iter()
            .filter_map(|line| {
                let word = line.as_ref().trim();
                if word.is_empty() || word.starts_with('#') {
                    return None;
                }
                if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                    skipped += 1;
                    return None;
                }
                Some(word.to_string())
            })
            .collect();

        if skipped > 0 {
            debug!("Skipped {skipped} non-ASCII-alphabetic dictionary entries");
        }

        Dictionary { words }
    }

    pub fn embedded() -> Self {
        Dictionary::new(EMBEDDED_WORDLIST.lines())
    }

    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(Dictionary::new(lines))
    }

    /// Reads one word per line from `path`.
    pub fn load(path: &Path) -> Result<Self, ChbsError> {
        let to_error = |source| ChbsError::Dictionary {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_error)?;
        let dictionary = Dictionary::from_reader(BufReader::new(file)).map_err(to_error)?;

        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words whose character count lies within `[minimum, maximum]`.
    pub fn candidates(&self, minimum: usize, maximum: usize) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| (minimum..=maximum).contains(&w.chars().count()))
            .map(String::as_str)
            .collect()
    }
}
