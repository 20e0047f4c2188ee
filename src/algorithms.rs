//! Useful algorithms related to prime generation.

pub(crate) mod generate;
pub(crate) mod miller_rabin;
pub(crate) mod modpow;
pub(crate) mod rand;
