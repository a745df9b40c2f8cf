//! The `Point` and `Share` value types.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::domain::Threshold;
use crate::error::{Result, ShamirError};
use crate::field;
use crate::mnemonic::to_fixed_be;

const X_MIN: u8 = 2;
const X_MAX: u8 = 129;
const VERSION_MAX: u8 = 31;

/// One point `(X, Y)` on the secret polynomial. `Y` lives in the field
/// `[1, P)`; `X` is a small integer distinguishing shares from each other
/// and from the two anchor points (`X = 0` the key, `X = 1` its hash).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    x: u8,
    y: BigUint,
}

impl Point {
    /// Builds a point, validating `y` is a nonzero field element.
    ///
    /// # Errors
    /// Returns [`ShamirError::ValueError`] if `y` is zero or `>= P`.
    pub fn new(x: u8, y: BigUint) -> Result<Self> {
        if !field::is_valid_share_y(&y) {
            return Err(ShamirError::ValueError(format!(
                "point Y must satisfy 1 <= Y < P, got {y}"
            )));
        }
        Ok(Self { x, y })
    }

    /// An anchor point, exempt from the `Y != 0` check (used only for the
    /// key anchor at `X = 0`, whose Y is the raw seed integer — zero-seed
    /// is pathological but not this layer's concern to reject).
    #[must_use]
    pub fn anchor(x: u8, y: BigUint) -> Self {
        Self { x, y }
    }

    /// The X coordinate.
    #[must_use]
    pub fn x(&self) -> u8 {
        self.x
    }

    /// The Y coordinate.
    #[must_use]
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

/// One share of a split mnemonic: a [`Point`] plus the integrity metadata
/// needed to decode and verify it independent of the others.
///
/// Immutable after construction — `share_checksum` is always derived, never
/// supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    point: Point,
    threshold: Threshold,
    seed_checksum: u8,
    version: u8,
    share_checksum: u16,
}

impl Share {
    /// Builds a share, computing `share_checksum` over the plaintext metadata.
    ///
    /// # Errors
    /// Returns [`ShamirError::ValueError`] if `point.x()` is outside
    /// `[2, 129]` (the codec's 7-bit `x_enc` range) or `version > 31`.
    pub fn new(point: Point, threshold: Threshold, seed_checksum: u8, version: u8) -> Result<Self> {
        if !(X_MIN..=X_MAX).contains(&point.x) {
            return Err(ShamirError::ValueError(format!(
                "share point X must be in [{X_MIN}, {X_MAX}], got {}",
                point.x
            )));
        }
        if version > VERSION_MAX {
            return Err(ShamirError::ValueError(format!(
                "share version must be in [0, {VERSION_MAX}], got {version}"
            )));
        }

        let metadata_plain = Self::metadata_plain(version, *threshold, point.x);
        let share_checksum = Self::checksum_of(point.y(), seed_checksum, metadata_plain);

        Ok(Self {
            point,
            threshold,
            seed_checksum,
            version,
            share_checksum,
        })
    }

    /// Reconstructs a share from already-validated, already-checksummed
    /// parts (used by the codec on decode, where the checksum has just
    /// been verified against the wire bytes rather than recomputed blind).
    pub(crate) fn from_parts(
        point: Point,
        threshold: Threshold,
        seed_checksum: u8,
        version: u8,
        share_checksum: u16,
    ) -> Self {
        Self {
            point,
            threshold,
            seed_checksum,
            version,
            share_checksum,
        }
    }

    /// `version(5) << 11 | threshold_enc(4) << 7 | x_enc(7)`.
    pub(crate) fn metadata_plain(version: u8, threshold: u8, x: u8) -> u16 {
        let threshold_enc = u16::from(threshold - 2);
        let x_enc = u16::from(x - X_MIN);
        (u16::from(version) << 11) | (threshold_enc << 7) | x_enc
    }

    /// `first 2 bytes of SHA256(Y_be32 || seed_checksum || metadata_plain_be2)`.
    pub(crate) fn checksum_of(y: &BigUint, seed_checksum: u8, metadata_plain: u16) -> u16 {
        let mut hasher = Sha256::new();
        hasher.update(to_fixed_be(y, 32));
        hasher.update([seed_checksum]);
        hasher.update(metadata_plain.to_be_bytes());
        let digest = hasher.finalize();
        u16::from_be_bytes([digest[0], digest[1]])
    }

    /// The third SHA-256 byte, appended when encoding to a 27-word phrase.
    pub(crate) fn checksum_third_byte(y: &BigUint, seed_checksum: u8, metadata_plain: u16) -> u8 {
        let mut hasher = Sha256::new();
        hasher.update(to_fixed_be(y, 32));
        hasher.update([seed_checksum]);
        hasher.update(metadata_plain.to_be_bytes());
        hasher.finalize()[2]
    }

    /// The point this share sits on.
    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// The reconstruction threshold shared across a split.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// The originating mnemonic's checksum byte, shared across a split.
    #[must_use]
    pub fn seed_checksum(&self) -> u8 {
        self.seed_checksum
    }

    /// The scheme version this share was encoded under.
    #[must_use]
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The derived 16-bit integrity checksum.
    #[must_use]
    pub fn share_checksum(&self) -> u16 {
        self.share_checksum
    }

    pub(crate) fn metadata_plain_bits(&self) -> u16 {
        Self::metadata_plain(self.version, *self.threshold, self.point.x)
    }
}
