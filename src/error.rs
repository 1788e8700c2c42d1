use thiserror::Error;

use crate::params::Family;

/// Errors caused by misuse of the sponge API.
///
/// The permutation itself is total, so every variant describes a bad
/// parameter or a call made in the wrong [`Phase`](crate::Phase). A sponge
/// that returned an error should be dropped and recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unsupported security level {level} for {family}")]
    InvalidSecurityLevel { family: Family, level: usize },
    #[error("cannot absorb after squeezing has started")]
    InvalidPhase,
    #[error("fixed-length digest requested from an extendable-output instance")]
    InvalidMode,
    #[error("invalid buffer length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("output length of {0} bits is not a multiple of 8")]
    InvalidOutputBits(usize),
    #[error("rate must be a positive number of bits")]
    InvalidRate,
}

pub type Result<T> = std::result::Result<T, Error>;
