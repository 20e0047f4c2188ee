//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-prime` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Requested bit length is too small for the operation.
    InvalidBitLength,

    /// Upper bound for uniform sampling is zero.
    InvalidBound,

    /// Modulus is zero.
    InvalidModulus,

    /// Miller-Rabin round count is zero.
    InvalidRounds,

    /// Retry budget is zero.
    InvalidRetryBudget,

    /// A bounded retry loop gave up without producing a value.
    RetriesExhausted {
        /// Number of attempts made before giving up.
        attempts: usize,
    },
}

impl Error {
    /// Returns `true` if the error was caused by a caller-supplied argument
    /// outside the operation's domain.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::RetriesExhausted { .. })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidBitLength => write!(f, "invalid bit length"),
            Error::InvalidBound => write!(f, "sampling bound must be non-zero"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidRounds => write!(f, "number of rounds must be >= 1"),
            Error::InvalidRetryBudget => write!(f, "retry budget must be >= 1"),
            Error::RetriesExhausted { attempts } => {
                write!(f, "retries exhausted after {} attempts", attempts)
            }
        }
    }
}
