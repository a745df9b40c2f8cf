//! The 33-byte (seed ‖ checksum) mnemonic value and its word-level view.

use num_bigint::BigUint;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::{ChecksumKind, Result, ShamirError};
use crate::wordlist::{self, Language};

const SEED_LEN: usize = 32;
const MNEMONIC_LEN: usize = 33;
const WORD_COUNT: usize = 24;
const BITS_PER_WORD: usize = 11;

/// A 33-byte BIP-39 seed value: 32 bytes of seed entropy plus a 1-byte
/// checksum equal to `SHA256(seed)[0]`.
///
/// Sensitive: the seed bytes are held in a [`Zeroizing`] buffer and wiped
/// on drop.
pub struct Mnemonic {
    seed: Zeroizing<[u8; SEED_LEN]>,
    checksum: u8,
}

impl Mnemonic {
    fn checksum_of(seed: &[u8; SEED_LEN]) -> u8 {
        Sha256::digest(seed)[0]
    }

    /// Generates a fresh mnemonic from a cryptographic RNG.
    #[must_use]
    pub fn generate_random() -> Self {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        rand::rngs::OsRng.fill_bytes(seed.as_mut_slice());
        let checksum = Self::checksum_of(&seed);
        Self { seed, checksum }
    }

    /// Builds a mnemonic from raw bytes: 32 bytes (checksum computed) or
    /// 33 bytes (checksum verified).
    ///
    /// # Errors
    /// Returns [`ShamirError::TypeError`] for any other length, or
    /// [`ShamirError::ChecksumError`] if a supplied 33rd byte doesn't match.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            SEED_LEN => {
                let mut seed = Zeroizing::new([0u8; SEED_LEN]);
                seed.copy_from_slice(bytes);
                let checksum = Self::checksum_of(&seed);
                Ok(Self { seed, checksum })
            }
            MNEMONIC_LEN => {
                let mut seed = Zeroizing::new([0u8; SEED_LEN]);
                seed.copy_from_slice(&bytes[..SEED_LEN]);
                let expected = Self::checksum_of(&seed);
                let actual = bytes[SEED_LEN];
                if expected != actual {
                    return Err(ShamirError::ChecksumError {
                        kind: ChecksumKind::MnemonicByte,
                        expected: vec![expected],
                        actual: vec![actual],
                    });
                }
                Ok(Self {
                    seed,
                    checksum: actual,
                })
            }
            other => Err(ShamirError::TypeError(format!(
                "mnemonic bytes must be 32 or 33 long, got {other}"
            ))),
        }
    }

    /// Parses a 24-word phrase in `lang` into a mnemonic, verifying the checksum.
    ///
    /// # Errors
    /// Returns [`ShamirError::ValueError`] if `words.len() != 24`,
    /// [`ShamirError::WordlistError`] if a word doesn't resolve in `lang`,
    /// or [`ShamirError::ChecksumError`] if the reconstructed checksum
    /// doesn't match.
    pub fn from_phrase<S: AsRef<str>>(words: &[S], lang: Language) -> Result<Self> {
        let m = Self::phrase_to_integer(words, lang)?;
        let bytes = to_fixed_be(&m, MNEMONIC_LEN);
        Self::from_bytes(&bytes)
    }

    fn phrase_to_integer<S: AsRef<str>>(words: &[S], lang: Language) -> Result<BigUint> {
        if words.len() != WORD_COUNT {
            return Err(ShamirError::ValueError(format!(
                "mnemonic phrase must have exactly {WORD_COUNT} words, got {}",
                words.len()
            )));
        }
        let mut m = BigUint::default();
        for word in words {
            let index = wordlist::index_of(lang, word.as_ref())?;
            m = (m << BITS_PER_WORD) | BigUint::from(index);
        }
        Ok(m)
    }

    fn as_integer(&self) -> BigUint {
        let mut bytes = Vec::with_capacity(MNEMONIC_LEN);
        bytes.extend_from_slice(self.seed.as_slice());
        bytes.push(self.checksum);
        BigUint::from_bytes_be(&bytes)
    }

    /// The word at `position` (0..=23) in `lang`.
    ///
    /// # Errors
    /// Returns [`ShamirError::IndexError`] if `position > 23`.
    pub fn word_at(&self, position: usize, lang: Language) -> Result<&'static str> {
        if position >= WORD_COUNT {
            return Err(ShamirError::IndexError {
                index: position,
                len: WORD_COUNT,
            });
        }
        let shift = (WORD_COUNT - 1 - position) * BITS_PER_WORD;
        let m = self.as_integer();
        let index = ((m >> shift) & BigUint::from(0x7ffu32))
            .iter_u32_digits()
            .next()
            .unwrap_or(0) as usize;
        wordlist::word_at(lang, index)
    }

    /// The full 24-word phrase in `lang`.
    ///
    /// # Errors
    /// Never fails in practice (every position is in range), but surfaces
    /// any underlying wordlist lookup failure.
    pub fn phrase(&self, lang: Language) -> Result<[&'static str; WORD_COUNT]> {
        let mut words = [""; WORD_COUNT];
        for (position, slot) in words.iter_mut().enumerate() {
            *slot = self.word_at(position, lang)?;
        }
        Ok(words)
    }

    /// Replaces the word at `position` with `new_word`, recomputing the
    /// checksum byte unless `position == 23` (the checksum word itself,
    /// trusted as-is — see §4.5).
    ///
    /// # Errors
    /// Returns [`ShamirError::IndexError`] if `position > 23`, or
    /// [`ShamirError::WordlistError`] if `new_word` doesn't resolve in `lang`.
    pub fn set_word(&mut self, position: usize, new_word: &str, lang: Language) -> Result<()> {
        if position >= WORD_COUNT {
            return Err(ShamirError::IndexError {
                index: position,
                len: WORD_COUNT,
            });
        }
        let new_index = wordlist::index_of(lang, new_word)?;

        let total_bits = MNEMONIC_LEN * 8;
        let shift = (WORD_COUNT - 1 - position) * BITS_PER_WORD;
        let full_mask = (BigUint::from(1u8) << total_bits) - BigUint::from(1u8);
        let slot_mask = BigUint::from(0x7ffu32) << shift;
        let clear_mask = &full_mask ^ &slot_mask;

        let mut m = self.as_integer();
        m = (&m & &clear_mask) | (BigUint::from(new_index) << shift);

        if position != WORD_COUNT - 1 {
            let seed_int = &m >> 8u32;
            let seed_bytes = to_fixed_be(&seed_int, SEED_LEN);
            let checksum = Self::checksum_of(&seed_bytes.try_into().unwrap_or([0u8; SEED_LEN]));

            let checksum_clear_mask = &full_mask ^ &BigUint::from(0xffu32);
            // Corrected behavior (the historical source used `&=` here, a
            // bug — see DESIGN.md): clear the low byte, then OR in the
            // freshly computed checksum.
            m = (&m & &checksum_clear_mask) | BigUint::from(checksum);
        }

        let bytes = to_fixed_be(&m, MNEMONIC_LEN);
        self.seed.copy_from_slice(&bytes[..SEED_LEN]);
        self.checksum = bytes[SEED_LEN];
        Ok(())
    }

    /// Validates a candidate 24-word phrase without constructing a [`Mnemonic`]:
    /// word count, resolvability in `lang`, and checksum.
    #[must_use]
    pub fn validate_phrase<S: AsRef<str>>(words: &[S], lang: Language) -> bool {
        Self::from_phrase(words, lang).is_ok()
    }

    /// The 32-byte seed.
    #[must_use]
    pub fn seed(&self) -> &[u8; SEED_LEN] {
        &self.seed
    }

    /// The checksum byte (`SHA256(seed)[0]`).
    #[must_use]
    pub fn checksum(&self) -> u8 {
        self.checksum
    }
}

impl PartialEq for Mnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.seed.as_slice() == other.seed.as_slice() && self.checksum == other.checksum
    }
}

impl Eq for Mnemonic {}

/// Left-pads `n`'s big-endian representation to exactly `len` bytes.
pub(crate) fn to_fixed_be(n: &BigUint, len: usize) -> Vec<u8> {
    let raw = n.to_bytes_be();
    if raw.len() >= len {
        raw[raw.len() - len..].to_vec()
    } else {
        let mut padded = vec![0u8; len - raw.len()];
        padded.extend_from_slice(&raw);
        padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_of_key_one_is_0xec() {
        let mut seed = [0u8; SEED_LEN];
        seed[SEED_LEN - 1] = 1;
        assert_eq!(Mnemonic::checksum_of(&seed), 0xec);
    }

    #[test]
    fn from_bytes_accepts_32_and_33_byte_forms() {
        let seed = [7u8; SEED_LEN];
        let from32 = Mnemonic::from_bytes(&seed).unwrap();
        let mut full = seed.to_vec();
        full.push(from32.checksum());
        let from33 = Mnemonic::from_bytes(&full).unwrap();
        assert_eq!(from32, from33);
    }

    #[test]
    fn from_bytes_rejects_bad_checksum() {
        let mut full = vec![7u8; SEED_LEN];
        full.push(0x00);
        let result = Mnemonic::from_bytes(&full);
        assert!(matches!(
            result,
            Err(ShamirError::ChecksumError {
                kind: ChecksumKind::MnemonicByte,
                ..
            })
        ));
    }

    #[test]
    fn from_bytes_rejects_other_lengths() {
        assert!(Mnemonic::from_bytes(&[0u8; 10]).is_err());
    }

    #[test]
    fn deterministic_round_trip_seed_of_one() {
        let mut seed = [0u8; SEED_LEN];
        seed[SEED_LEN - 1] = 1;
        let mnemonic = Mnemonic::from_bytes(&seed).unwrap();
        assert_eq!(mnemonic.checksum(), 0xec);

        let phrase = mnemonic.phrase(Language::English).unwrap();
        for word in &phrase[..23] {
            assert_eq!(*word, "abandon");
        }

        let parsed = Mnemonic::from_phrase(&phrase, Language::English).unwrap();
        assert_eq!(parsed.seed(), &seed);
    }

    #[test]
    fn phrase_round_trips_through_from_phrase() {
        let mnemonic = Mnemonic::generate_random();
        let phrase = mnemonic.phrase(Language::English).unwrap();
        let parsed = Mnemonic::from_phrase(&phrase, Language::English).unwrap();
        assert_eq!(mnemonic, parsed);
    }

    #[test]
    fn set_word_with_its_own_value_is_a_no_op() {
        let mut mnemonic = Mnemonic::generate_random();
        for position in 0..WORD_COUNT {
            let word = mnemonic.word_at(position, Language::English).unwrap();
            let before_seed = *mnemonic.seed();
            let before_checksum = mnemonic.checksum();
            mnemonic.set_word(position, word, Language::English).unwrap();
            assert_eq!(*mnemonic.seed(), before_seed);
            assert_eq!(mnemonic.checksum(), before_checksum);
        }
    }

    #[test]
    fn set_word_on_non_last_position_refreshes_checksum() {
        let mut mnemonic = Mnemonic::from_bytes(&[0u8; SEED_LEN]).unwrap();
        let original_checksum = mnemonic.checksum();
        mnemonic.set_word(0, "zoo", Language::English).unwrap();
        assert_ne!(mnemonic.seed()[0], 0);
        assert_eq!(mnemonic.checksum(), Mnemonic::checksum_of(mnemonic.seed()));
        assert_ne!(mnemonic.checksum(), original_checksum);
    }

    #[test]
    fn validate_phrase_rejects_wrong_word_count() {
        let words = vec!["abandon".to_string(); 12];
        assert!(!Mnemonic::validate_phrase(&words, Language::English));
    }

    #[test]
    fn validate_phrase_accepts_a_real_phrase() {
        let mnemonic = Mnemonic::generate_random();
        let phrase = mnemonic.phrase(Language::English).unwrap();
        assert!(Mnemonic::validate_phrase(&phrase, Language::English));
    }
}
