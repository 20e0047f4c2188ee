//! Miller-Rabin probable prime test.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::algorithms::modpow::power_mod;
use crate::algorithms::rand::uniform_below;
use crate::errors::{Error, Result};

/// Number of Miller-Rabin rounds used when none is given.
///
/// Bounds the probability of accepting a composite below 2⁻⁸⁰.
pub const DEFAULT_ROUNDS: usize = 40;

/// Reports whether `n` passes `rounds` rounds of the Miller-Rabin test, each
/// with a witness drawn uniformly from `[2, n-2]` using `rng`.
///
/// If `n` is prime this always returns `Ok(true)`. If `n` is composite it
/// returns `Ok(true)` with probability at most ¼ʳᵒᵘⁿᵈˢ, whatever the shape
/// of `n`, provided `rng` is a sound random source.
///
/// See Handbook of Applied Cryptography, p. 139, Algorithm 4.24.
pub fn is_probable_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    n: &BigUint,
    rounds: usize,
) -> Result<bool> {
    if rounds == 0 {
        return Err(Error::InvalidRounds);
    }

    if n.is_zero() || n.is_one() {
        return Ok(false);
    }
    if *n == BigUint::from(2u32) || *n == BigUint::from(3u32) {
        return Ok(true);
    }
    if n.is_even() {
        return Ok(false);
    }

    // n - 1 = d * 2^s, d odd
    let nm1 = n - 1u32;
    let mut d = nm1.clone();
    let mut s = 0usize;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    // n >= 5 here, so the witness bound is at least 2.
    let nm3 = n - 3u32;

    'witness: for _ in 0..rounds {
        let mut a = uniform_below(rng, &nm3)?;
        a += 2u32;

        let mut x = power_mod(&a, &d, n)?;
        a.zeroize();

        if x.is_one() || x == nm1 {
            continue;
        }

        for _ in 1..s {
            x = (&x * &x) % n;
            if x.is_one() {
                return Ok(false);
            }
            if x == nm1 {
                continue 'witness;
            }
        }

        return Ok(false);
    }

    Ok(true)
}
