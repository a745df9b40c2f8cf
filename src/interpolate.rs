//! Lagrange interpolation over the field.

use num_bigint::BigUint;

use crate::error::{Result, ShamirError};
use crate::field;

/// `Y = Sum_j y_j * Prod_{k != j} ((at_x - x_k) * (x_j - x_k)^-1) mod P`.
///
/// Requires at least 2 points and distinct `X` values (duplicate `X`
/// surfaces as an inverse-of-zero failure from [`field::inverse`]).
///
/// # Errors
/// Returns [`ShamirError::ValueError`] if fewer than 2 points are supplied,
/// or propagates a modular-inverse failure if two points share an `X`.
pub fn interpolate(points: &[(BigUint, BigUint)], at_x: &BigUint) -> Result<BigUint> {
    if points.len() < 2 {
        return Err(ShamirError::ValueError(format!(
            "interpolation requires at least 2 points, got {}",
            points.len()
        )));
    }

    let mut total = BigUint::default();
    for (j, (x_j, y_j)) in points.iter().enumerate() {
        let mut term = y_j.clone();
        for (k, (x_k, _)) in points.iter().enumerate() {
            if j == k {
                continue;
            }
            let numerator = field::sub(at_x, x_k);
            let denominator = field::sub(x_j, x_k);
            let denom_inv = field::inverse(&denominator)?;
            term = field::mul(&term, &field::mul(&numerator, &denom_inv));
        }
        total = field::add(&total, &term);
    }
    Ok(total)
}
