//! Word scrambler CLI - shuffles or sorts the interior letters of each word
//!
//! Usage:
//!   cargo run --bin scramble -- "the quick brown fox"
//!   cargo run --bin scramble -- "the quick brown fox" --mode abc
//!
//! Optional environment variables:
//! - SCRAMBLE_MODE (defaults to "random")

use anyhow::{bail, Context, Result};
use lettershift::config::Config;
use lettershift::scramble::{scramble_text, ScrambleMode};
use tracing::info;

const USAGE: &str = "usage: scramble <text> [--mode random|abc]";

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

    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut text: Option<String> = None;
    let mut mode_name = config.scramble_mode.clone();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--mode" => {
                mode_name = iter.next().context("--mode requires a value")?.clone();
            }
            positional if text.is_none() => {
                text = Some(positional.to_string());
            }
            other => bail!("unexpected argument: '{other}'\n{USAGE}"),
        }
    }

    let text = text.with_context(|| format!("missing text\n{USAGE}"))?;
    let mode: ScrambleMode = mode_name.parse()?;

    info!("Scrambling {} chars ({:?} mode)", text.chars().count(), mode);

    println!("{}", scramble_text(&text, mode));
    Ok(())
}
