//! Entropy source seam for identifier generation.
//!
//! Uniqueness here is statistical, not cryptographic, so any uniformly
//! distributed source is acceptable. The seam exists for two reasons: tests
//! need to force the failure path, and hosts that insist on OS entropy can
//! swap in [`OsEntropy`] without touching the generator.

use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

use crate::errors::AssignError;

/// A source of uniformly distributed random bytes.
///
/// Implementations must be safe to call repeatedly from the owning thread;
/// cross-thread sharing is handled by giving each caller its own source
/// (the default source is thread-local).
pub trait EntropySource {
    /// Fill `dest` with random bytes, or report the source as unavailable.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), AssignError>;
}

/// Thread-local PRNG from the `rand` crate. The default source.
///
/// Periodically reseeded from OS entropy by `rand` itself; reads never fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), AssignError> {
        rand::rng().fill_bytes(dest);
        Ok(())
    }
}

/// Operating-system entropy, read on every call.
///
/// Slower than [`ThreadEntropy`] and genuinely fallible; failures surface as
/// [`AssignError::GeneratorUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), AssignError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| AssignError::unavailable(e.to_string()))
    }
}
