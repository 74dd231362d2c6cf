mod cli;
mod config;
mod errors;
mod password;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Args;
use crate::config::Settings;
use crate::password::composer::{Composer, PasswordBatch};
use crate::password::dictionary::Dictionary;
use crate::password::random::{RandomSource, RngSource};

/// The password you have already memorized.
const XKCD_PASSWORD: &str = "CorrectHorseBatteryStaple";

fn main() -> Result<()> {
    let args = Args::parse();

    if args.xkcd {
        println!("{XKCD_PASSWORD}");
        return Ok(());
    }

    let settings = Settings::from_env()?;

    // Logs go to stderr so stdout carries only passwords
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &settings.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("chbspasswd v{}", env!("CARGO_PKG_VERSION"));

    // Validate everything before loading the dictionary or drawing randomness
    let password_config = args
        .password_config()
        .context("Invalid password configuration")?;
    debug!(?password_config, "Configuration built");

    let dictionary = match args.dictionary.as_ref().or(settings.dictionary_path.as_ref()) {
        Some(path) => Dictionary::load(path)?,
        None => {
            let dictionary = Dictionary::embedded();
            info!("Using built-in word list ({} words)", dictionary.len());
            dictionary
        }
    };

    let seed = args.seed.or(settings.seed);
    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };

    let composer = Composer::new(&password_config, &dictionary);
    let passwords = composer
        .generate(args.number as usize, rng.as_mut())
        .context("Password generation failed")?;

    if args.json {
        let batch = PasswordBatch {
            passwords,
            config: &password_config,
            seed,
        };
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        for password in &passwords {
            println!("{password}");
        }
    }

    Ok(())
}
