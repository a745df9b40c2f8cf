//! Modular arithmetic over the secp256k1 field prime.
//!
//! `P = 2^256 - 2^32 - 977`, the smallest prime strictly greater than any
//! valid 256-bit key, chosen so the map key <-> field element is injective
//! and uniform when coefficients are 256-bit random values.

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Result, ShamirError};

/// The secp256k1 field prime, `2^256 - 2^32 - 977`.
pub static P: LazyLock<BigUint> = LazyLock::new(|| {
    (BigUint::from(1u8) << 256u32) - (BigUint::from(1u8) << 32u32) - BigUint::from(977u32)
});

/// `(a + b) mod P`.
#[must_use]
pub fn add(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % &*P
}

/// `(a - b) mod P`, correct for `a < b` (wraps around the field).
#[must_use]
pub fn sub(a: &BigUint, b: &BigUint) -> BigUint {
    let p = &*P;
    let a_mod = a % p;
    let b_mod = b % p;
    if a_mod >= b_mod {
        (a_mod - b_mod) % p
    } else {
        (p + a_mod - b_mod) % p
    }
}

/// `(a * b) mod P`.
#[must_use]
pub fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % &*P
}

/// `base^exp mod P`, by repeated squaring.
#[must_use]
pub fn pow(base: &BigUint, exp: &BigUint) -> BigUint {
    base.modpow(exp, &P)
}

/// Modular inverse of `a` via Fermat's little theorem: `a^(P-2) mod P`.
///
/// # Errors
/// Returns [`ShamirError::ValueError`] if `a` is `0 mod P` (no inverse exists).
pub fn inverse(a: &BigUint) -> Result<BigUint> {
    let a_mod = a % &*P;
    if a_mod.is_zero() {
        return Err(ShamirError::ValueError(
            "cannot invert zero in the field".to_string(),
        ));
    }
    let exponent = &*P - BigUint::from(2u8);
    Ok(pow(&a_mod, &exponent))
}

/// `1 <= y < P`, the valid range for a share's `Y` coordinate (§9: zero
/// would leak the polynomial's constant term through a trivial point).
#[must_use]
pub fn is_valid_share_y(y: &BigUint) -> bool {
    !y.is_zero() && y < &*P
}

/// The multiplicative identity, for callers that want to avoid importing
/// `num_traits::One` directly.
#[must_use]
pub fn one() -> BigUint {
    BigUint::one()
}
