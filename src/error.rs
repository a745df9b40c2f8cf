//! Structured error taxonomy.
//!
//! Every fallible operation in this crate returns [`ShamirError`], never a
//! bare string or `anyhow::Error` — callers match on `kind`, they don't
//! parse messages.

use thiserror::Error;

/// Which checksum failed, per §7 of the design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumKind {
    /// The BIP-39 mnemonic's trailing checksum byte.
    MnemonicByte,
    /// The interpolated key value against its hash anchor (recovery-time).
    KeyValue,
    /// Mismatched `seed_checksum` across a set of shares being combined.
    ShareGroup,
    /// A single share's own `share_checksum` field.
    ShareKey,
}

impl std::fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::MnemonicByte => "mnemonic checksum byte",
            Self::KeyValue => "recovered key value",
            Self::ShareGroup => "share group seed checksum",
            Self::ShareKey => "share key checksum",
        };
        f.write_str(name)
    }
}

/// The crate's single error type.
#[derive(Debug, Error)]
pub enum ShamirError {
    /// Non-integer or wrong-shape input where a specific type is required.
    #[error("type error: {0}")]
    TypeError(String),

    /// Value out of documented range.
    #[error("value error: {0}")]
    ValueError(String),

    /// Array/position index out of bounds.
    #[error("index {index} out of bounds (len {len})")]
    IndexError {
        /// The offending index.
        index: usize,
        /// The valid length at the time of the access.
        len: usize,
    },

    /// A checksum did not match.
    #[error("checksum mismatch ({kind}): expected {expected:02x?}, got {actual:02x?}")]
    ChecksumError {
        /// Which checksum failed.
        kind: ChecksumKind,
        /// The bytes that were expected.
        expected: Vec<u8>,
        /// The bytes that were actually present/computed.
        actual: Vec<u8>,
    },

    /// Fewer than `threshold` shares were supplied to recovery.
    #[error("threshold not met: need {required}, got {actual}")]
    ThresholdError {
        /// Minimum number of shares required.
        required: u8,
        /// Number of shares actually supplied.
        actual: usize,
    },

    /// Language tag not recognized. Should be unreachable if callers use
    /// `bip39::Language` directly rather than parsing a tag string.
    #[error("unrecognized language tag: {0}")]
    LanguageError(String),

    /// Word not present in the specified language's list.
    #[error("word {word:?} not present in {lang:?} wordlist")]
    WordlistError {
        /// The word that was not found.
        word: String,
        /// The language it was looked up in.
        lang: bip39::Language,
    },
}

/// This crate's `Result` alias. Always `ShamirError`, never `anyhow::Error`.
pub type Result<T> = std::result::Result<T, ShamirError>;
