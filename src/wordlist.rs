//! Loads and queries the ten BIP-39 word lists.
//!
//! `Language` is re-exported directly from the `bip39` crate rather than
//! duplicated: its 10 variants are an exact match for this crate's 10
//! language tags, and it is already a closed, tagged enum (never a
//! free-form string at the API boundary).

use std::collections::HashMap;
use std::sync::LazyLock;

pub use bip39::Language;

use crate::error::{Result, ShamirError};

/// Ordered sequence of exactly 2048 words for a language.
#[must_use]
pub fn word_list(lang: Language) -> &'static [&'static str; 2048] {
    lang.word_list()
}

/// The word at `index` (0..=2047) in `lang`'s list.
///
/// # Errors
/// Returns [`ShamirError::IndexError`] if `index > 2047`.
pub fn word_at(lang: Language, index: usize) -> Result<&'static str> {
    word_list(lang)
        .get(index)
        .copied()
        .ok_or(ShamirError::IndexError { index, len: 2048 })
}

/// The index of `word` in `lang`'s list.
///
/// # Errors
/// Returns [`ShamirError::WordlistError`] if `word` is not present in `lang`.
pub fn index_of(lang: Language, word: &str) -> Result<u16> {
    lang.find_word(word)
        .map(|idx| idx as u16)
        .ok_or_else(|| ShamirError::WordlistError {
            word: word.to_string(),
            lang,
        })
}

/// Reverse index: `word -> {Language}`, built once on first use.
///
/// Words may legitimately appear in more than one list (shared Latin
/// lemmas, e.g. "agua" in Spanish and Portuguese).
static REVERSE_INDEX: LazyLock<HashMap<&'static str, Vec<Language>>> = LazyLock::new(|| {
    let mut index: HashMap<&'static str, Vec<Language>> = HashMap::new();
    for lang in Language::all() {
        for word in lang.word_list() {
            index.entry(word).or_default().push(*lang);
        }
    }
    log::debug!("wordlist reverse index built for {} languages", Language::all().len());
    index
});

/// The set of languages whose list contains `word`.
#[must_use]
pub fn languages_containing(word: &str) -> Vec<Language> {
    REVERSE_INDEX.get(word).cloned().unwrap_or_default()
}

/// Parses a spec-style lowercase-snake-case language tag
/// (`"chinese_simplified"`, `"english"`, ...) into a [`Language`].
///
/// Unreachable in normal use if callers pass `Language` directly rather
/// than a string; kept for boundaries that accept external tag strings.
///
/// # Errors
/// Returns [`ShamirError::LanguageError`] if the tag is not recognized.
pub fn language_from_tag(tag: &str) -> Result<Language> {
    match tag {
        "chinese_simplified" => Ok(Language::SimplifiedChinese),
        "chinese_traditional" => Ok(Language::TraditionalChinese),
        "czech" => Ok(Language::Czech),
        "english" => Ok(Language::English),
        "french" => Ok(Language::French),
        "italian" => Ok(Language::Italian),
        "japanese" => Ok(Language::Japanese),
        "korean" => Ok(Language::Korean),
        "portuguese" => Ok(Language::Portuguese),
        "spanish" => Ok(Language::Spanish),
        other => Err(ShamirError::LanguageError(other.to_string())),
    }
}
