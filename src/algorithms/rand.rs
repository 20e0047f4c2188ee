//! Uniform sampling of random big integers.

use alloc::vec;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::errors::{Error, Result};

/// Number of draws [`uniform_below`] makes before giving up.
///
/// Each draw is accepted with probability greater than one half, so a
/// working random source exhausts this budget with probability below 2⁻¹²⁸.
pub const DEFAULT_MAX_DRAWS: usize = 128;

/// Returns the number of bits needed to represent `n`, which is zero for zero.
#[inline]
pub fn bit_width(n: &BigUint) -> usize {
    n.bits()
}

/// Draws a uniformly random integer in `[0, 2^width)`.
///
/// `ceil(width / 8)` bytes are taken from `rng` and read big-endian. The high
/// bits of the first byte beyond `width` are cleared, so the result never
/// exceeds the requested width. Its top bit is *not* forced, so the value
/// may be shorter than `width` bits.
pub fn random_width<R: CryptoRngCore + ?Sized>(rng: &mut R, width: usize) -> Result<BigUint> {
    if width == 0 {
        return Err(Error::InvalidBitLength);
    }

    let mut top_bits = width % 8;
    if top_bits == 0 {
        top_bits = 8;
    }

    let mut bytes = vec![0u8; width.div_ceil(8)];
    rng.fill_bytes(&mut bytes);
    bytes[0] &= ((1u16 << top_bits) - 1) as u8;

    let n = BigUint::from_bytes_be(&bytes);
    bytes.zeroize();

    Ok(n)
}

/// Draws a uniformly random integer in `[0, bound)` by rejection sampling.
///
/// Gives up with [`Error::RetriesExhausted`] after [`DEFAULT_MAX_DRAWS`] draws.
pub fn uniform_below<R: CryptoRngCore + ?Sized>(rng: &mut R, bound: &BigUint) -> Result<BigUint> {
    uniform_below_bounded(rng, bound, DEFAULT_MAX_DRAWS)
}

/// Same as [`uniform_below`], with an explicit budget of `max_draws` draws.
pub fn uniform_below_bounded<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bound: &BigUint,
    max_draws: usize,
) -> Result<BigUint> {
    if bound.is_zero() {
        return Err(Error::InvalidBound);
    }
    if max_draws == 0 {
        return Err(Error::InvalidRetryBudget);
    }

    let width = bit_width(bound);
    for _ in 0..max_draws {
        let mut x = random_width(rng, width)?;
        if &x < bound {
            return Ok(x);
        }
        x.zeroize();
    }

    tracing::warn!(max_draws, width, "rejection sampling exhausted its draw budget");
    Err(Error::RetriesExhausted {
        attempts: max_draws,
    })
}
