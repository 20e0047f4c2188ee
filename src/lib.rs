#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Overview
//!
//! The crate is split along the pipeline that turns random bytes into a
//! prime:
//!
//! - [`random_width`] and [`uniform_below`] sample big integers from an
//!   injected [`rand_core::CryptoRngCore`],
//! - [`power_mod`] is square-and-multiply modular exponentiation,
//! - [`is_probable_prime`] runs the Miller-Rabin test with random witnesses,
//! - [`PrimeGenerator`] (and [`generate_prime`]) loops over candidates until
//!   one passes.
//!
//! Every loop that depends on the random source has a retry budget and
//! fails with [`Error::RetriesExhausted`] instead of spinning forever on a
//! broken source.
//!
//! ## Choosing a random source
//!
//! Any [`rand_core::CryptoRngCore`] works. Production code should use the
//! operating system's generator, available as `rand_core::OsRng` with the
//! `getrandom` feature of this crate enabled. Tests can pass a seeded
//! generator to make every result reproducible:
//!
//! ```
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//! use rsa_prime::{generate_prime, is_probable_prime};
//!
//! let mut rng = ChaCha8Rng::from_seed([42; 32]);
//! let p = generate_prime(&mut rng, 512).unwrap();
//!
//! let mut again = ChaCha8Rng::from_seed([42; 32]);
//! assert_eq!(p, generate_prime(&mut again, 512).unwrap());
//! assert!(is_probable_prime(&mut rng, &p, 64).unwrap());
//! ```
//!
//! Each call borrows its random source mutably, so generating `p` and `q` in
//! parallel requires one source per thread.

#[cfg(doctest)]
pub struct ReadmeDoctests;

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod errors;
pub mod traits;

#[cfg(test)]
mod dummy_rng;

pub use crate::{
    algorithms::generate::{generate_prime, generate_prime_with_rounds, PrimeGenerator},
    algorithms::miller_rabin::{is_probable_prime, DEFAULT_ROUNDS},
    algorithms::modpow::power_mod,
    algorithms::rand::{
        bit_width, random_width, uniform_below, uniform_below_bounded, DEFAULT_MAX_DRAWS,
    },
    errors::{Error, Result},
    traits::RandPrime,
};
