//! Caesar cipher CLI - shifts text under a named language's alphabet
//!
//! Usage:
//!   cargo run -- encode "Hello, World!"              # shift 3, language "en"
//!   cargo run -- decode "Khoor, Zruog!" --shift 3
//!   cargo run -- encode "привет" --lang ru --shift 5
//!
//! Optional environment variables:
//! - CIPHER_LANGUAGE (defaults to "en")
//! - CIPHER_SHIFT (defaults to 3)

use anyhow::{bail, Context, Result};
use lettershift::cipher::{CipherEngine, ShiftDirection};
use lettershift::config::Config;
use tracing::info;

const USAGE: &str = "usage: lettershift <encode|decode> <text> [--shift N] [--lang NAME]";

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lettershift=info".parse()?),
        )
        .init();

    // Defaults come from the environment
    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut direction: Option<ShiftDirection> = None;
    let mut text: Option<String> = None;
    let mut shift = config.cipher_shift;
    let mut language = config.cipher_language.clone();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--shift" => {
                let value = iter.next().context("--shift requires a value")?;
                shift = value
                    .parse()
                    .with_context(|| format!("--shift value is not an integer: {value}"))?;
            }
            "--lang" => {
                language = iter.next().context("--lang requires a value")?.clone();
            }
            positional if direction.is_none() => {
                direction = Some(match positional {
                    "encode" => ShiftDirection::Encode,
                    "decode" => ShiftDirection::Decode,
                    other => bail!("expected 'encode' or 'decode', got '{other}'\n{USAGE}"),
                });
            }
            positional if text.is_none() => {
                text = Some(positional.to_string());
            }
            other => bail!("unexpected argument: '{other}'\n{USAGE}"),
        }
    }

    let direction = direction.with_context(|| format!("missing direction\n{USAGE}"))?;
    let text = text.with_context(|| format!("missing text\n{USAGE}"))?;

    info!(
        "Shifting {} chars (language '{}', shift {}, {:?})",
        text.chars().count(),
        language,
        shift,
        direction
    );

    let engine = CipherEngine::new();
    let output = engine.shift_text_by_language_name(&text, shift, &language, direction)?;

    println!("{output}");
    Ok(())
}
