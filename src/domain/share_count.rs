//! `ShareCount` newtype for threshold secret sharing.

use crate::error::{Result, ShamirError};

/// Number of shares to create (1..=128).
///
/// Represents the total number of shares that will be created. The
/// maximum is 128, not a rounder number, because the share codec's
/// `x_enc` metadata field is 7 bits wide (`X - 2 in [0, 127]`) — see
/// SPEC_FULL.md §3 for why this is tighter than the abstract `n <= 256`
/// bound quoted in the original design notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count.
    pub const MIN: u8 = 1;

    /// Maximum valid share count (128), bounded by the codec's 7-bit `x_enc` field.
    pub const MAX: u8 = 128;

    /// Creates a new share count.
    ///
    /// # Errors
    /// Returns [`ShamirError::ValueError`] if count is 0 or greater than 128.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thresh39::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(ShareCount::MAX).unwrap();
    /// assert_eq!(*max_count, 128);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(129).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ShamirError::ValueError(format!(
                "share count must be in [{}, {}], got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
