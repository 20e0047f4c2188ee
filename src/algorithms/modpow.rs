//! Modular exponentiation.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::{Error, Result};

/// Computes `base^exponent mod modulus` by square-and-multiply, consuming
/// the bits of `exponent` lowest first.
///
/// The result always lies in `[0, modulus)`. Intermediate products never
/// exceed `modulus²`. Returns [`Error::InvalidModulus`] when `modulus` is zero.
pub fn power_mod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidModulus);
    }

    let mut result = BigUint::one() % modulus;
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exponent >>= 1;
    }

    Ok(result)
}
