//! Threshold newtype for threshold secret sharing.

use crate::error::{Result, ShamirError};

/// Threshold for secret sharing (2..=17).
///
/// Invariant: `2 <= threshold <= 17` (enforced at construction). A
/// threshold of 1 provides no security benefit since any single share
/// can recover the entire secret; 17 is the largest threshold this
/// crate's 4-bit `threshold_enc` metadata field can address
/// (`threshold - 2` must fit in 4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Minimum valid threshold.
    pub const MIN: u8 = 2;

    /// Maximum valid threshold (17, bounded by the 4-bit `threshold_enc` field).
    pub const MAX: u8 = 17;

    /// Creates a new threshold, returning an error if out of `[2, 17]`.
    ///
    /// # Errors
    /// Returns [`ShamirError::ValueError`] if the threshold is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thresh39::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(18).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ShamirError::ValueError(format!(
                "threshold must be in [{}, {}], got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// The 4-bit `threshold_enc` field used by the share codec (`threshold - 2`).
    #[must_use]
    pub fn encoded(self) -> u8 {
        self.0 - 2
    }

    /// Reconstructs a threshold from its encoded `threshold_enc` field.
    ///
    /// # Errors
    /// Returns [`ShamirError::ValueError`] if `encoded` does not fit in 4 bits.
    pub fn from_encoded(encoded: u8) -> Result<Self> {
        if encoded > 15 {
            return Err(ShamirError::ValueError(format!(
                "threshold_enc {encoded} does not fit in 4 bits"
            )));
        }
        Self::new(encoded + 2)
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
