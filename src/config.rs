use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Cipher defaults
    pub cipher_language: String,
    pub cipher_shift: i64,

    // Scrambler default
    pub scramble_mode: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Cipher - language name and shift used when the CLI omits them
            cipher_language: std::env::var("CIPHER_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            cipher_shift: match std::env::var("CIPHER_SHIFT") {
                Ok(raw) => raw
                    .parse()
                    .with_context(|| format!("CIPHER_SHIFT is not a valid integer: {raw}"))?,
                Err(_) => 3,
            },

            // Scrambler
            scramble_mode: std::env::var("SCRAMBLE_MODE").unwrap_or_else(|_| "random".to_string()),
        })
    }
}
