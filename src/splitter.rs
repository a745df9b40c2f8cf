//! Splits a [`Mnemonic`] into a set of threshold [`Share`]s.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::domain::SplitConfig;
use crate::error::Result;
use crate::field;
use crate::interpolate;
use crate::mnemonic::{to_fixed_be, Mnemonic};
use crate::share::{Point, Share};

/// The scheme version stamped onto every share this crate emits.
pub const CURRENT_VERSION: u8 = 0;

/// Splits `mnemonic` into `config.share_count()` shares, any
/// `config.threshold()` of which reconstruct it.
///
/// Anchors the polynomial at two fixed points — `(0, key)` and
/// `(1, SHA256(key))` — draws `threshold - 2` random shares, then
/// interpolates the remainder. See §4.7.
///
/// # Errors
/// Propagates any internal interpolation or share-construction failure;
/// both would indicate a logic defect, not a caller input error, since
/// `config` is already validated by construction.
pub fn create_shares(config: SplitConfig, mnemonic: &Mnemonic) -> Result<Vec<Share>> {
    let threshold = *config.threshold();
    let sharecount = *config.share_count();

    let key = BigUint::from_bytes_be(mnemonic.seed());
    let hash_int = BigUint::from_bytes_be(&Sha256::digest(to_fixed_be(&key, 32)));

    log::debug!(
        "splitting mnemonic into {sharecount} shares, threshold {threshold}"
    );

    let mut points: Vec<(BigUint, BigUint)> = vec![(BigUint::from(0u8), key.clone()), (BigUint::from(1u8), hash_int.clone())];

    let random_count = (threshold - 2) as usize;
    for i in 0..random_count {
        let x = BigUint::from(i as u64 + 2);
        let y = random_field_element();
        points.push((x, y));
    }

    // Any `threshold` points on the anchors+random set determine the
    // degree-(threshold-1) polynomial; interpolate the rest from them.
    let calculated_count = sharecount as usize - random_count;
    for i in 0..calculated_count {
        let x = BigUint::from(threshold as u64 + i as u64);
        let y = interpolate::interpolate(&points, &x)?;
        points.push((x, y));
    }

    let threshold_domain = config.threshold();
    let mut shares = Vec::with_capacity(sharecount as usize);
    for (x, y) in points.into_iter().filter(|(x, _)| x >= &BigUint::from(2u8)) {
        let x_u8 = x.to_u8().expect("share X values are always small");
        let point = Point::new(x_u8, y)?;
        let share = Share::new(point, threshold_domain, mnemonic.checksum(), CURRENT_VERSION)?;
        shares.push(share);
    }

    log::trace!("produced {} shares", shares.len());
    Ok(shares)
}

/// Draws a uniformly random nonzero field element, rejection-sampling on
/// `Y = 0` or `Y >= P` (§4.10).
fn random_field_element() -> BigUint {
    let mut buf = Zeroizing::new([0u8; 32]);
    loop {
        rand::rngs::OsRng.fill_bytes(buf.as_mut_slice());
        let candidate = BigUint::from_bytes_be(buf.as_slice());
        if field::is_valid_share_y(&candidate) {
            log::trace!("random share coefficient accepted on first valid draw");
            return candidate;
        }
        log::trace!("rejection-sampling: redrawing share coefficient");
    }
}
