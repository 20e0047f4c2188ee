//! Generate random probable primes for RSA key parameters.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::algorithms::miller_rabin::{is_probable_prime, DEFAULT_ROUNDS};
use crate::algorithms::rand::random_width;
use crate::errors::{Error, Result};

/// A list of small, prime numbers that allows us to rapidly
/// exclude some fraction of composite candidates when searching for a random
/// prime. This list is truncated at the point where SMALL_PRIMES_PRODUCT exceeds
/// a u64. It does not include two because we ensure that the candidates are
/// odd by construction.
const SMALL_PRIMES: [u8; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// The product of the values in SMALL_PRIMES. Reducing a candidate by this
/// number tells whether it is coprime to all of them without further
/// `BigUint` operations.
const SMALL_PRIMES_PRODUCT: u64 = 16_294_579_238_595_022_365;

/// Candidates tried per bit of requested length before giving up.
const ATTEMPTS_PER_BIT: usize = 64;

/// Lower bound on the default attempt budget, for short primes.
const MIN_ATTEMPTS: usize = 1024;

/// Searches for a random probable prime of an exact bit length.
///
/// Each candidate is drawn with [`random_width`], has its top and bottom
/// bits set, is screened against [`SMALL_PRIMES`] and is then handed to
/// [`is_probable_prime`]. The search is bounded: after `max_attempts`
/// rejected candidates it fails with [`Error::RetriesExhausted`].
///
/// # Example
/// ```
/// use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// use rsa_prime::PrimeGenerator;
///
/// let mut rng = ChaCha8Rng::from_seed([42; 32]);
/// let p = PrimeGenerator::new(256).rounds(20).generate(&mut rng).unwrap();
/// assert_eq!(p.bits(), 256);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimeGenerator {
    bit_length: usize,
    rounds: usize,
    max_attempts: Option<usize>,
}

impl PrimeGenerator {
    /// Creates a generator for primes of exactly `bit_length` bits using
    /// [`DEFAULT_ROUNDS`] Miller-Rabin rounds.
    pub fn new(bit_length: usize) -> Self {
        Self {
            bit_length,
            rounds: DEFAULT_ROUNDS,
            max_attempts: None,
        }
    }

    /// Sets the number of Miller-Rabin rounds run on each candidate.
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the number of candidates tried before giving up.
    ///
    /// Defaults to `max(64 * bit_length, 1024)`.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Requested bit length.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Attempt budget in effect.
    pub fn attempt_budget(&self) -> usize {
        self.max_attempts.unwrap_or_else(|| {
            core::cmp::max(self.bit_length.saturating_mul(ATTEMPTS_PER_BIT), MIN_ATTEMPTS)
        })
    }

    /// Draws candidates from `rng` until one is a probable prime.
    pub fn generate<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        if self.bit_length < 2 {
            return Err(Error::InvalidBitLength);
        }
        if self.rounds == 0 {
            return Err(Error::InvalidRounds);
        }
        let max_attempts = self.attempt_budget();
        if max_attempts == 0 {
            return Err(Error::InvalidRetryBudget);
        }

        // Setting the top bit keeps the width exact; setting the bottom bit
        // makes the candidate odd.
        let shape = (BigUint::one() << (self.bit_length - 1)) | BigUint::one();

        for attempt in 1..=max_attempts {
            let mut candidate = random_width(rng, self.bit_length)?;
            candidate |= &shape;

            if !has_small_factor(&candidate, self.bit_length)
                && is_probable_prime(rng, &candidate, self.rounds)?
            {
                tracing::debug!(
                    bit_length = self.bit_length,
                    attempts = attempt,
                    "found probable prime"
                );
                return Ok(candidate);
            }

            tracing::trace!(attempt, "candidate rejected");
            candidate.zeroize();
        }

        tracing::warn!(
            bit_length = self.bit_length,
            max_attempts,
            "prime search exhausted its attempt budget"
        );
        Err(Error::RetriesExhausted {
            attempts: max_attempts,
        })
    }
}

/// Generates a random probable prime of exactly `bit_length` bits, tested
/// with [`DEFAULT_ROUNDS`] Miller-Rabin rounds.
pub fn generate_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_length: usize) -> Result<BigUint> {
    PrimeGenerator::new(bit_length).generate(rng)
}

/// Generates a random probable prime of exactly `bit_length` bits, tested
/// with `rounds` Miller-Rabin rounds.
pub fn generate_prime_with_rounds<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    rounds: usize,
) -> Result<BigUint> {
    PrimeGenerator::new(bit_length).rounds(rounds).generate(rng)
}

/// Reports whether `candidate` is divisible by one of [`SMALL_PRIMES`]
/// other than itself.
fn has_small_factor(candidate: &BigUint, bit_length: usize) -> bool {
    let rem = match (candidate % SMALL_PRIMES_PRODUCT).to_u64() {
        Some(rem) => rem,
        None => return false,
    };

    // Only candidates of at most 6 bits can equal one of the small primes.
    SMALL_PRIMES.iter().any(|&prime| {
        let prime = u64::from(prime);
        rem % prime == 0 && (bit_length > 6 || rem != prime)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_rng::StuckRng;
    use num_integer::Integer;
    use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng, ChaCha8Rng};

    #[test]
    fn test_small_primes_product() {
        let product: u64 = SMALL_PRIMES.iter().map(|&p| u64::from(p)).product();
        assert_eq!(product, SMALL_PRIMES_PRODUCT);
    }

    #[test]
    fn test_has_small_factor() {
        assert!(has_small_factor(&BigUint::from(9u32), 4));
        assert!(has_small_factor(&BigUint::from(255u32), 8));
        assert!(!has_small_factor(&BigUint::from(3u32), 2));
        assert!(!has_small_factor(&BigUint::from(53u32), 6));
        assert!(!has_small_factor(&BigUint::from(257u32), 9));
        assert!(has_small_factor(&BigUint::from(59u32 * 53), 12));
    }

    #[test]
    fn test_invalid_input() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);

        assert_eq!(generate_prime(&mut rng, 0), Err(Error::InvalidBitLength));
        assert_eq!(generate_prime(&mut rng, 1), Err(Error::InvalidBitLength));
        assert_eq!(
            generate_prime_with_rounds(&mut rng, 64, 0),
            Err(Error::InvalidRounds)
        );
        assert_eq!(
            PrimeGenerator::new(64).max_attempts(0).generate(&mut rng),
            Err(Error::InvalidRetryBudget)
        );
    }

    #[test]
    fn test_attempt_budget() {
        assert_eq!(PrimeGenerator::new(2).attempt_budget(), MIN_ATTEMPTS);
        assert_eq!(PrimeGenerator::new(1024).attempt_budget(), 1024 * 64);
        assert_eq!(PrimeGenerator::new(1024).max_attempts(7).attempt_budget(), 7);
    }

    #[test]
    fn test_prime_small() {
        let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
        for n in 2..10 {
            let p = generate_prime(&mut rng, n).unwrap();

            assert_eq!(p.bits(), n);
            assert!(is_probable_prime(&mut rng, &p, 32).unwrap());
        }
    }

    #[test]
    fn test_two_bit_prime_is_three() {
        let mut rng = ChaCha8Rng::from_seed([1u8; 32]);
        for _ in 0..10 {
            assert_eq!(generate_prime(&mut rng, 2).unwrap(), BigUint::from(3u32));
        }
    }

    #[test]
    fn test_gen_prime_1024() {
        let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
        let p = generate_prime(&mut rng, 1024).unwrap();
        assert_eq!(p.bits(), 1024);
        assert!(p.is_odd());
    }

    #[test_log::test]
    fn test_stuck_source_exhausts() {
        // An all-zero source always yields 2^15 + 1, a multiple of 3.
        let mut rng = StuckRng(0);
        assert_eq!(
            PrimeGenerator::new(16).max_attempts(10).generate(&mut rng),
            Err(Error::RetriesExhausted { attempts: 10 })
        );

        // An all-ones source always yields 255 = 3 * 5 * 17.
        let mut rng = StuckRng(0xff);
        assert_eq!(
            PrimeGenerator::new(8).generate(&mut rng),
            Err(Error::RetriesExhausted {
                attempts: MIN_ATTEMPTS
            })
        );
    }

    #[test]
    fn test_deterministic() {
        for bits in [64, 128, 256] {
            let mut a = ChaCha8Rng::from_seed([11; 32]);
            let mut b = ChaCha8Rng::from_seed([11; 32]);
            assert_eq!(
                generate_prime(&mut a, bits).unwrap(),
                generate_prime(&mut b, bits).unwrap()
            );

            let mut a = ChaCha20Rng::from_seed([12; 32]);
            let mut b = ChaCha20Rng::from_seed([12; 32]);
            assert_eq!(
                generate_prime_with_rounds(&mut a, bits, 10).unwrap(),
                generate_prime_with_rounds(&mut b, bits, 10).unwrap()
            );
        }
    }
}
