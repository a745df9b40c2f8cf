//! Polynomial evaluation over the field.

use num_bigint::BigUint;
use num_traits::One;

use crate::field;

/// `coeffs[0] + coeffs[1]*x + coeffs[2]*x^2 + ...`, evaluated mod P.
///
/// Owned transiently by the Splitter; not persisted across calls.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coeffs: Vec<BigUint>,
}

impl Polynomial {
    /// Builds a polynomial from its coefficients, lowest degree first.
    #[must_use]
    pub fn new(coeffs: Vec<BigUint>) -> Self {
        Self { coeffs }
    }

    /// `Sum_i (coeffs[i] * x^i) mod P`. No special-casing of `x = 0`.
    #[must_use]
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        let mut result = BigUint::default();
        let mut x_power = BigUint::one();
        for coeff in &self.coeffs {
            result = field::add(&result, &field::mul(coeff, &x_power));
            x_power = field::mul(&x_power, x);
        }
        result
    }
}
