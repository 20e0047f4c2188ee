//! Prime-related trait definitions.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;

use crate::algorithms::generate::generate_prime;
use crate::errors::Result;

/// Extension trait for generating random primes straight from a random
/// number generator.
///
/// *Warning*: the quality of the primes depends entirely on the quality of
/// the random number generator.
///
/// # Example
/// ```
/// use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// use rsa_prime::RandPrime;
///
/// let mut rng = ChaCha8Rng::from_seed([42; 32]);
/// let p = rng.gen_prime(128).unwrap();
/// assert_eq!(p.bits(), 128);
/// ```
pub trait RandPrime {
    /// Generate a random probable prime with exactly `bit_length` bits.
    fn gen_prime(&mut self, bit_length: usize) -> Result<BigUint>;
}

impl<R: CryptoRngCore + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_length: usize) -> Result<BigUint> {
        generate_prime(self, bit_length)
    }
}
