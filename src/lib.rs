//! Threshold (k-of-n) secret sharing of BIP-39 mnemonics over the
//! secp256k1 prime field.
//!
//! A 24-word BIP-39 mnemonic is split into `n` word-based share phrases,
//! any `k` of which reconstruct it. The polynomial is anchored at two
//! fixed points — the seed key itself and its SHA-256 hash — so recovery
//! can self-verify without any pre-shared secret beyond the mnemonic's
//! own checksum byte. See `SPEC_FULL.md` for the full design.
//!
//! Module layout mirrors the three subsystems this crate is built from:
//! finite-field arithmetic ([`field`], [`polynomial`], [`interpolate`]),
//! the share wire format ([`share`], [`codec`]), and mnemonic/wordlist
//! handling ([`mnemonic`], [`wordlist`]). [`splitter`] and [`recoverer`]
//! tie them together.

pub mod codec;
pub mod domain;
pub mod error;
pub mod field;
pub mod interpolate;
pub mod mnemonic;
pub mod polynomial;
pub mod recoverer;
pub mod share;
pub mod splitter;
pub mod wordlist;

pub use domain::{ShareCount, SplitConfig, Threshold};
pub use error::{ChecksumKind, ShamirError, Result};
pub use mnemonic::Mnemonic;
pub use recoverer::recover_mnemonic;
pub use share::{Point, Share};
pub use splitter::create_shares;
pub use wordlist::Language;
