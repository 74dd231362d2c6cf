use std::path::PathBuf;

use clap::Parser;

use crate::errors::ChbsError;
use crate::password::config::{
    parse_word_length, PadSpec, PasswordConfig, SeparatorSpec, WordCase,
};

#[derive(Parser, Debug)]
#[command(name = "chbspasswd")]
#[command(version)]
#[command(
    about = "Password generator inspired by XKCD 936 (correct horse battery staple)",
    long_about = None
)]
#[command(after_help = "Pad and separator specs take the form TYPE[,COUNT], e.g. -b digits,2 -s random,1")]
pub struct Args {
    /// Number of words to use
    #[arg(short, long, value_name = "N")]
    pub words: Option<usize>,

    /// Minimum and maximum word length
    #[arg(short, long, value_name = "MIN,MAX")]
    pub length: Option<String>,

    /// Word case: UPPER, LOWER, INITIAL or MIXED
    #[arg(short, long, value_name = "CASE")]
    pub case: Option<String>,

    /// Separator between words: SAME, RANDOM or NONE
    #[arg(short, long, value_name = "TYPE[,COUNT]")]
    pub separator: Option<String>,

    /// Pad before the first word: DIGITS, SPECIAL, MIXED or NONE
    #[arg(short, long, value_name = "TYPE[,COUNT]")]
    pub before: Option<String>,

    /// Pad between the words: DIGITS, SPECIAL, MIXED or NONE
    #[arg(short, long, value_name = "TYPE[,COUNT]")]
    pub inside: Option<String>,

    /// Pad after the last word: DIGITS, SPECIAL, MIXED or NONE
    #[arg(short, long, value_name = "TYPE[,COUNT]")]
    pub after: Option<String>,

    /// Make 1337sp3@k substitutions: a=@, e=3, i=!, l=1, o=0 and t=7
    #[arg(short, long)]
    pub eleet: bool,

    /// Number of passwords to generate (at most 1000)
    #[arg(short, long, value_name = "N", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub number: u32,

    /// Word list file, one word per line (default: $CHBS_DICTIONARY or the built-in list)
    #[arg(short, long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Seed for reproducible output (default: $CHBS_SEED or fresh randomness)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print the passwords and the settings used as JSON
    #[arg(long)]
    pub json: bool,

    /// Ignore every other option and print a password you have already memorized
    #[arg(short = 'x', long)]
    pub xkcd: bool,
}

impl Args {
    /// Builds the password configuration from defaults overridden by the flags
    /// that were given. Any invalid flag rejects the whole configuration.
    pub fn password_config(&self) -> Result<PasswordConfig, ChbsError> {
        let mut builder = PasswordConfig::builder();

        if let Some(words) = self.words {
            builder = builder.word_count(words);
        }
        if let Some(length) = &self.length {
            let (min, max) = parse_word_length(length)?;
            builder = builder.word_length(min, max);
        }
        if let Some(case) = &self.case {
            builder = builder.word_case(case.parse::<WordCase>()?);
        }
        if let Some(separator) = &self.separator {
            builder = builder.separator(SeparatorSpec::parse(separator)?);
        }
        if let Some(before) = &self.before {
            builder = builder.pad_before(PadSpec::parse(before)?);
        }
        if let Some(inside) = &self.inside {
            builder = builder.pad_inside(PadSpec::parse(inside)?);
        }
        if let Some(after) = &self.after {
            builder = builder.pad_after(PadSpec::parse(after)?);
        }

        builder.eleet(self.eleet).build()
    }
}
