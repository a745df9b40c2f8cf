//! Reconstructs a [`Mnemonic`] from a set of threshold [`Share`]s.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::error::{ChecksumKind, Result, ShamirError};
use crate::interpolate;
use crate::mnemonic::{to_fixed_be, Mnemonic};
use crate::share::Share;

/// Reconstructs the mnemonic that `shares` were split from.
///
/// Interpolates both the key (at `X = 0`) and its SHA-256 hash (at
/// `X = 1`) from the supplied points, then verifies the two agree — this
/// catches corrupted or mismatched shares that each individually passed
/// their own `share_checksum` (§4.8).
///
/// # Errors
/// Returns [`ShamirError::ThresholdError`] if fewer shares than the
/// declared threshold are supplied, [`ShamirError::ChecksumError`] (kind
/// `ShareGroup`) if the shares don't share a common `seed_checksum`, or
/// (kind `KeyValue`) if the interpolated key doesn't match its hash anchor.
pub fn recover_mnemonic(shares: &[Share]) -> Result<Mnemonic> {
    let first = shares.first().ok_or(ShamirError::ThresholdError {
        required: 2,
        actual: 0,
    })?;
    let required = *first.threshold();

    if shares.len() < required as usize {
        return Err(ShamirError::ThresholdError {
            required,
            actual: shares.len(),
        });
    }

    let seed_checksum = first.seed_checksum();
    if shares.iter().any(|s| s.seed_checksum() != seed_checksum) {
        return Err(ShamirError::ChecksumError {
            kind: ChecksumKind::ShareGroup,
            expected: vec![seed_checksum],
            actual: shares
                .iter()
                .map(Share::seed_checksum)
                .collect(),
        });
    }

    log::debug!(
        "recovering mnemonic from {} shares, threshold {required}",
        shares.len()
    );

    let points: Vec<(BigUint, BigUint)> = shares
        .iter()
        .map(|s| (BigUint::from(s.point().x()), s.point().y().clone()))
        .collect();

    let key_int = interpolate::interpolate(&points, &BigUint::from(0u8))?;
    let expected_hash_int = interpolate::interpolate(&points, &BigUint::from(1u8))?;

    let seed_bytes = to_fixed_be(&key_int, 32);
    let actual_hash = Sha256::digest(&seed_bytes);
    let expected_hash_bytes = to_fixed_be(&expected_hash_int, 32);

    if expected_hash_bytes != actual_hash.as_slice() {
        log::warn!("recovered key failed hash-anchor verification");
        return Err(ShamirError::ChecksumError {
            kind: ChecksumKind::KeyValue,
            expected: expected_hash_bytes,
            actual: actual_hash.to_vec(),
        });
    }

    let mut mnemonic_bytes = seed_bytes;
    mnemonic_bytes.push(actual_hash[0]);
    Mnemonic::from_bytes(&mnemonic_bytes)
}
