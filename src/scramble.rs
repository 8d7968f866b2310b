//! Word-letter scrambling text filter.
//!
//! Scrambles the interior of each word while keeping its first and last
//! letter in place, which leaves the text surprisingly readable. Words of
//! three characters or fewer are left alone. Everything between words
//! (whitespace, punctuation) is preserved verbatim.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// How the interior letters of a word are rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleMode {
    /// Shuffle the interior letters uniformly at random.
    Random,
    /// Sort the interior letters case-insensitively.
    Alphabetical,
}

/// Error returned when a mode string is neither `"random"` nor `"abc"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scramble mode: '{mode}' (expected 'random' or 'abc')")]
pub struct UnknownModeError {
    /// The mode string that failed to parse.
    pub mode: String,
}

impl FromStr for ScrambleMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(ScrambleMode::Random),
            "abc" => Ok(ScrambleMode::Alphabetical),
            other => Err(UnknownModeError {
                mode: other.to_string(),
            }),
        }
    }
}

// Word pattern (cached for performance). `\w` is Unicode-aware, so Cyrillic
// and accented words scramble the same way ASCII ones do.
static WORD_REGEX: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| Regex::new(r"\w+").expect("word pattern must compile"))
}

/// Scramble `text` using the thread-local RNG.
///
/// Convenience wrapper around [`scramble_text_with_rng`]; `Alphabetical`
/// mode ignores the RNG and is fully deterministic.
pub fn scramble_text(text: &str, mode: ScrambleMode) -> String {
    scramble_text_with_rng(text, mode, &mut rand::thread_rng())
}

/// Scramble `text` using the supplied RNG.
///
/// Each `\w+` word span longer than three characters keeps its first and
/// last character; the interior is shuffled (`Random`) or stably sorted
/// case-insensitively (`Alphabetical`). All other spans pass through
/// unchanged, so the output always has the same length as the input.
pub fn scramble_text_with_rng<R: Rng + ?Sized>(
    text: &str,
    mode: ScrambleMode,
    rng: &mut R,
) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;

    for word in word_regex().find_iter(text) {
        output.push_str(&text[last_end..word.start()]);
        scramble_word(word.as_str(), mode, rng, &mut output);
        last_end = word.end();
    }
    output.push_str(&text[last_end..]);

    output
}

fn scramble_word<R: Rng + ?Sized>(word: &str, mode: ScrambleMode, rng: &mut R, output: &mut String) {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        output.push_str(word);
        return;
    }

    let mut interior: Vec<char> = chars[1..chars.len() - 1].to_vec();
    match mode {
        ScrambleMode::Random => interior.shuffle(rng),
        // Stable sort: equal letters keep their relative order.
        ScrambleMode::Alphabetical => {
            interior.sort_by(|a, b| a.to_lowercase().cmp(b.to_lowercase()))
        }
    }

    output.push(chars[0]);
    output.extend(interior);
    output.push(chars[chars.len() - 1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    // ==================== Mode Parsing Tests ====================

    #[test]
    fn test_parse_random_mode() {
        assert_eq!("random".parse::<ScrambleMode>(), Ok(ScrambleMode::Random));
    }

    #[test]
    fn test_parse_abc_mode() {
        assert_eq!("abc".parse::<ScrambleMode>(), Ok(ScrambleMode::Alphabetical));
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "sorted".parse::<ScrambleMode>().unwrap_err();
        assert_eq!(err.mode, "sorted");
        assert!(format!("{}", err).contains("sorted"));
    }

    // ==================== Alphabetical Mode Tests ====================

    #[test]
    fn test_abc_sorts_interior() {
        assert_eq!(
            scramble_text("scramble", ScrambleMode::Alphabetical),
            "sabclmre"
        );
    }

    #[test]
    fn test_abc_is_case_insensitive() {
        // Interior of "ReAding" is "eAdin"; case-insensitive sort gives
        // "Adein" with the capital ranked by its lowercase form.
        assert_eq!(
            scramble_text("ReAding", ScrambleMode::Alphabetical),
            "RAdeing"
        );
    }

    #[test]
    fn test_abc_preserves_punctuation_and_spacing() {
        assert_eq!(
            scramble_text("hello, world!", ScrambleMode::Alphabetical),
            "hello, wlord!"
        );
    }

    #[test]
    fn test_short_words_unchanged() {
        assert_eq!(
            scramble_text("the cat sat on a mat", ScrambleMode::Alphabetical),
            "the cat sat on a mat"
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(scramble_text("", ScrambleMode::Alphabetical), "");
    }

    #[test]
    fn test_no_words_at_all() {
        assert_eq!(
            scramble_text("... !!! ???", ScrambleMode::Random),
            "... !!! ???"
        );
    }

    #[test]
    fn test_abc_cyrillic_word() {
        // "привет" interior is "риве"; sorted Cyrillic order is "веир".
        assert_eq!(
            scramble_text("привет", ScrambleMode::Alphabetical),
            "пвеирт"
        );
    }

    // ==================== Random Mode Tests ====================

    #[test]
    fn test_random_keeps_first_and_last_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        let scrambled = scramble_text_with_rng("scrambled words here", ScrambleMode::Random, &mut rng);
        for (original, mixed) in "scrambled words here"
            .split(' ')
            .zip(scrambled.split(' '))
        {
            assert_eq!(original.chars().next(), mixed.chars().next());
            assert_eq!(original.chars().last(), mixed.chars().last());
        }
    }

    #[test]
    fn test_random_interior_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = "permutation";
        let scrambled = scramble_text_with_rng(original, ScrambleMode::Random, &mut rng);
        assert_eq!(scrambled.chars().count(), original.chars().count());
        assert_eq!(sorted_chars(&scrambled), sorted_chars(original));
    }

    #[test]
    fn test_random_is_deterministic_for_a_fixed_seed() {
        let a = scramble_text_with_rng("determinism", ScrambleMode::Random, &mut StdRng::seed_from_u64(1));
        let b = scramble_text_with_rng("determinism", ScrambleMode::Random, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
