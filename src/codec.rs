//! 37-byte / 27-word wire encoding for a [`Share`].
//!
//! Metadata is packed as `version(5) || threshold_enc(4) || x_enc(7)` and
//! XOR-masked with the share checksum before being written out, so an
//! all-default-looking share (version 0, threshold 2, X = 2) doesn't encode
//! as a run of zero bits that would cluster its words near the start of
//! the list.

use num_bigint::BigUint;

use crate::domain::Threshold;
use crate::error::{ChecksumKind, Result, ShamirError};
use crate::mnemonic::to_fixed_be;
use crate::share::{Point, Share};
use crate::wordlist::{self, Language};

/// Wire size of a share: `32 (Y) + 1 (seed_checksum) + 2 (metadata) + 2 (checksum)`.
pub const SHARE_BYTES: usize = 37;
/// Word count of a share phrase: `38 bytes = 304 bits`, right-shifted by 7
/// to a 297-bit integer, split into 27 eleven-bit word indices.
pub const SHARE_WORDS: usize = 27;

const PHRASE_BYTES: usize = 38;
const PHRASE_SHIFT: u32 = 7;

/// Serializes `share` to its canonical 37-byte wire form.
#[must_use]
pub fn encode(share: &Share) -> [u8; SHARE_BYTES] {
    let metadata_plain = share.metadata_plain_bits();
    let metadata_cipher = metadata_plain ^ share.share_checksum();

    let mut out = [0u8; SHARE_BYTES];
    out[0..32].copy_from_slice(&to_fixed_be(share.point().y(), 32));
    out[32] = share.seed_checksum();
    out[33..35].copy_from_slice(&metadata_cipher.to_be_bytes());
    out[35..37].copy_from_slice(&share.share_checksum().to_be_bytes());
    out
}

/// Parses a 37-byte wire form back into a [`Share`], verifying the checksum.
///
/// # Errors
/// Returns [`ShamirError::TypeError`] if `bytes.len() != 37`, or
/// [`ShamirError::ChecksumError`] (kind `ShareKey`) if the recomputed
/// checksum over the unmasked metadata doesn't match the trailing field.
pub fn decode(bytes: &[u8]) -> Result<Share> {
    if bytes.len() != SHARE_BYTES {
        return Err(ShamirError::TypeError(format!(
            "share bytes must be {SHARE_BYTES} long, got {}",
            bytes.len()
        )));
    }

    let y = BigUint::from_bytes_be(&bytes[0..32]);
    let seed_checksum = bytes[32];
    let metadata_cipher = u16::from_be_bytes([bytes[33], bytes[34]]);
    let share_checksum = u16::from_be_bytes([bytes[35], bytes[36]]);
    let metadata_plain = metadata_cipher ^ share_checksum;

    let version = ((metadata_plain >> 11) & 0x1f) as u8;
    let threshold_enc = ((metadata_plain >> 7) & 0xf) as u8;
    let x_enc = (metadata_plain & 0x7f) as u8;
    let threshold_value = threshold_enc + 2;
    let x = x_enc + 2;

    let expected = Share::checksum_of(&y, seed_checksum, metadata_plain);
    if expected != share_checksum {
        return Err(ShamirError::ChecksumError {
            kind: ChecksumKind::ShareKey,
            expected: expected.to_be_bytes().to_vec(),
            actual: share_checksum.to_be_bytes().to_vec(),
        });
    }

    let point = Point::new(x, y)?;
    let threshold = Threshold::new(threshold_value)?;
    Ok(Share::from_parts(
        point,
        threshold,
        seed_checksum,
        version,
        share_checksum,
    ))
}

/// Renders `share` as a 27-word phrase in `lang`.
///
/// Appends the third SHA-256 byte (beyond the checksum's first two) as a
/// 38th byte, then right-shifts the 304-bit integer by 7 bits to land on a
/// 297-bit value that splits evenly into 27 eleven-bit word indices.
#[must_use]
pub fn encode_phrase(share: &Share, lang: Language) -> [&'static str; SHARE_WORDS] {
    let wire = encode(share);
    let third_byte = Share::checksum_third_byte(
        share.point().y(),
        share.seed_checksum(),
        share.metadata_plain_bits(),
    );

    let mut extended = [0u8; PHRASE_BYTES];
    extended[..SHARE_BYTES].copy_from_slice(&wire);
    extended[SHARE_BYTES] = third_byte;

    let full = BigUint::from_bytes_be(&extended);
    let shifted = full >> PHRASE_SHIFT;

    let mut words = [""; SHARE_WORDS];
    for (i, slot) in words.iter_mut().enumerate() {
        let shift = (SHARE_WORDS - 1 - i) * 11;
        let index = ((&shifted >> shift) & BigUint::from(0x7ffu32))
            .iter_u32_digits()
            .next()
            .unwrap_or(0) as usize;
        *slot = wordlist::word_at(lang, index).expect("11-bit index always in [0, 2047]");
    }
    words
}

/// Parses a 27-word phrase in `lang` back into a [`Share`].
///
/// The discarded low 7 bits of the reconstructed 304-bit value (the third
/// hash byte's low bits) are not checked; only the 37-byte share's own
/// `share_checksum` gates acceptance.
///
/// # Errors
/// Returns [`ShamirError::ValueError`] if `words.len() != 27`,
/// [`ShamirError::WordlistError`] if a word doesn't resolve in `lang`, or
/// any error [`decode`] would return on the reconstructed bytes.
pub fn decode_phrase<S: AsRef<str>>(words: &[S], lang: Language) -> Result<Share> {
    if words.len() != SHARE_WORDS {
        return Err(ShamirError::ValueError(format!(
            "share phrase must have exactly {SHARE_WORDS} words, got {}",
            words.len()
        )));
    }

    let mut m = BigUint::default();
    for word in words {
        let index = wordlist::index_of(lang, word.as_ref())?;
        m = (m << 11) | BigUint::from(index);
    }

    let shifted_back = m << PHRASE_SHIFT;
    let extended = to_fixed_be(&shifted_back, PHRASE_BYTES);
    decode(&extended[..SHARE_BYTES])
}
