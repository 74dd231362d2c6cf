use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a password configuration or composing passwords.
///
/// Every variant except `EmptyCandidateSet` and `Dictionary` is a configuration
/// error: it is returned before any randomness is consumed, so a batch request
/// fails entirely up front instead of partially succeeding.
#[derive(Debug, Error)]
pub enum ChbsError {
    #[error("Invalid pad type '{0}': expected DIGITS, SPECIAL, MIXED or NONE")]
    InvalidPadType(String),

    #[error("Invalid pad count '{count}': must be between {min} and {max}")]
    InvalidPadCount { count: String, min: usize, max: usize },

    #[error("Invalid separator type '{0}': expected SAME, RANDOM or NONE")]
    InvalidSeparatorType(String),

    #[error("Invalid separator count '{count}': must be between 0 and {max}")]
    InvalidSeparatorCount { count: String, max: usize },

    #[error("Invalid case mode '{0}': expected UPPER, LOWER, INITIAL or MIXED")]
    InvalidCaseMode(String),

    #[error("Invalid word count {count}: must be between 1 and {max}")]
    InvalidWordCount { count: usize, max: usize },

    #[error("Invalid word length bounds '{0}': expected MIN,MAX with 1 <= MIN <= MAX")]
    InvalidWordLength(String),

    #[error("Malformed spec '{0}': expected TYPE or TYPE,COUNT")]
    MalformedSpec(String),

    #[error("No dictionary word is between {min} and {max} characters long")]
    EmptyCandidateSet { min: usize, max: usize },

    #[error("Failed to read dictionary {}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
