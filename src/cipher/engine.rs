//! The cipher engine: registry ownership and shift application.

use crate::cipher::error::UnknownLanguageError;
use crate::cipher::language::{default_languages, Language};

/// Which way a shift is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Shift letters forward through the alphabet.
    Encode,
    /// Shift letters backward, reversing an encode with the same shift.
    Decode,
}

/// Applies positional alphabet shifts to text, per language.
///
/// The engine owns an ordered registry of [`Language`] values built once at
/// construction. All state is immutable afterwards, so a shared engine can be
/// used from multiple threads without synchronization.
pub struct CipherEngine {
    languages: Vec<Language>,
}

impl CipherEngine {
    /// Create an engine over the built-in languages ("en" and "ru").
    pub fn new() -> Self {
        Self {
            languages: default_languages(),
        }
    }

    /// Create an engine over a caller-supplied registry.
    ///
    /// Lookup order follows the order of `languages`.
    pub fn with_languages(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// All registered languages, in lookup order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Look a language up by exact name.
    ///
    /// # Returns
    /// * `Ok(&Language)` if the name is registered
    /// * `Err(UnknownLanguageError)` carrying the requested name otherwise
    pub fn find_language(&self, name: &str) -> Result<&Language, UnknownLanguageError> {
        self.languages
            .iter()
            .find(|language| language.name() == name)
            .ok_or_else(|| UnknownLanguageError {
                name: name.to_string(),
            })
    }

    /// Shift a single letter within its alphabet variant.
    ///
    /// The letter is resolved against the language's lowercase variant first,
    /// then the uppercase one, so case is preserved independently per letter.
    /// Characters in neither variant (punctuation, digits, letters of other
    /// languages) are returned unchanged.
    ///
    /// The shift is reduced with floor modulo, so negative shifts and shifts
    /// larger than the modulus are valid.
    pub fn translate_letter(
        &self,
        letter: char,
        shift: i64,
        language: &Language,
        direction: ShiftDirection,
    ) -> char {
        for alphabet in language.variants() {
            if let Some(index) = alphabet.iter().position(|&c| c == letter) {
                let offset = match direction {
                    ShiftDirection::Encode => shift,
                    ShiftDirection::Decode => -shift,
                };
                let new_index =
                    (index as i64 + offset).rem_euclid(language.modulus() as i64) as usize;
                return alphabet[new_index];
            }
        }
        letter
    }

    /// Shift every letter of `text`, preserving length and character order.
    pub fn shift_text(
        &self,
        text: &str,
        shift: i64,
        language: &Language,
        direction: ShiftDirection,
    ) -> String {
        text.chars()
            .map(|letter| self.translate_letter(letter, shift, language, direction))
            .collect()
    }

    /// Look the language up by name, then shift.
    ///
    /// # Returns
    /// The shifted text, or the lookup error propagated unchanged.
    pub fn shift_text_by_language_name(
        &self,
        text: &str,
        shift: i64,
        name: &str,
        direction: ShiftDirection,
    ) -> Result<String, UnknownLanguageError> {
        let language = self.find_language(name)?;
        Ok(self.shift_text(text, shift, language, direction))
    }
}

impl Default for CipherEngine {
    fn default() -> Self {
        Self::new()
    }
}
