//! Identifier generation for record fields.
//!
//! Two algorithms are supported, selected per field through [`Algorithm`]:
//!
//! - [`Algorithm::RandomUuid`]: a canonical version-4 UUID. 128 bits are drawn
//!   from the entropy source, then the version nibble is forced to `4` and the
//!   variant bits to RFC 4122 variant 1, yielding the familiar 36-character
//!   hyphenated lowercase form.
//! - [`Algorithm::Fallback`]: a shorter time-based hexadecimal identifier:
//!   microsecond wall-clock reading, a process-wide sequence number, and 16
//!   supplementary entropy bits. No fixed length is promised, only that the
//!   string is non-empty, URL-safe hex, and distinct across calls within one
//!   process invocation.
//!
//! Generation has no side effects beyond consuming entropy and reading the
//! clock; the caller owns persistence of the returned string. If the entropy
//! source cannot be read the call fails with
//! [`AssignError::GeneratorUnavailable`] rather than degrading to a
//! deterministic or empty value.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use uuid::Builder;

use crate::algorithm::Algorithm;
use crate::entropy::{EntropySource, ThreadEntropy};
use crate::errors::AssignError;

/// Process-wide sequence for fallback identifiers. Monotonically increasing,
/// so two fallback IDs minted in the same microsecond still differ.
static FALLBACK_SEQ: AtomicU64 = AtomicU64::new(0);

/// Identifier generator over a pluggable entropy source.
///
/// The default source is the thread-local PRNG; tests and entropy-sensitive
/// hosts can inject their own through [`IdGenerator::with_source`].
///
/// # Examples
///
/// ```
/// use idfill::{Algorithm, IdGenerator};
///
/// let mut generator = IdGenerator::new();
/// let id = generator.generate(Algorithm::RandomUuid).unwrap();
/// assert_eq!(id.len(), 36);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdGenerator<S: EntropySource = ThreadEntropy> {
    source: S,
}

impl IdGenerator<ThreadEntropy> {
    /// Create a generator backed by the thread-local PRNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: ThreadEntropy,
        }
    }
}

impl<S: EntropySource> IdGenerator<S> {
    /// Create a generator over a caller-supplied entropy source.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Produce a fresh identifier using the given algorithm.
    pub fn generate(&mut self, algorithm: Algorithm) -> Result<String, AssignError> {
        match algorithm {
            Algorithm::RandomUuid => self.random_uuid(),
            Algorithm::Fallback => self.fallback(),
        }
    }

    /// 36-character hyphenated lowercase UUID v4.
    fn random_uuid(&mut self) -> Result<String, AssignError> {
        let mut bytes = [0u8; 16];
        self.source.try_fill(&mut bytes)?;
        // Builder stamps version 4 and RFC 4122 variant 1 over the raw bytes.
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        Ok(uuid.hyphenated().to_string())
    }

    /// Variable-length hex string: microsecond timestamp, sequence, entropy.
    fn fallback(&mut self) -> Result<String, AssignError> {
        let micros = Utc::now().timestamp_micros().max(0) as u64;
        let seq = FALLBACK_SEQ.fetch_add(1, Ordering::Relaxed);
        let mut extra = [0u8; 2];
        self.source.try_fill(&mut extra)?;
        let salt = u16::from_be_bytes(extra);
        Ok(format!("{micros:x}{:04x}{salt:04x}", seq & 0xffff))
    }
}

/// Produce a fresh identifier with the default entropy source.
///
/// Host-facing entry point for save pipelines that do not manage a generator
/// of their own.
///
/// # Examples
///
/// ```
/// use idfill::{generate, Algorithm};
///
/// let a = generate(Algorithm::Fallback).unwrap();
/// let b = generate(Algorithm::Fallback).unwrap();
/// assert_ne!(a, b);
/// ```
pub fn generate(algorithm: Algorithm) -> Result<String, AssignError> {
    IdGenerator::new().generate(algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Entropy source that always reports itself unavailable.
    struct BrokenEntropy;

    impl EntropySource for BrokenEntropy {
        fn try_fill(&mut self, _dest: &mut [u8]) -> Result<(), AssignError> {
            Err(AssignError::unavailable("entropy source offline"))
        }
    }

    fn assert_uuid_shape(id: &str) {
        assert_eq!(id.len(), 36);
        let groups: Vec<&str> = id.split('-').collect();
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        for group in &groups {
            assert!(group.chars().all(|c| c.is_ascii_hexdigit()));
            assert!(!group.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn random_uuid_matches_canonical_grouping() {
        let id = generate(Algorithm::RandomUuid).unwrap();
        assert_uuid_shape(&id);
    }

    #[test]
    fn random_uuid_stamps_version_and_variant() {
        for _ in 0..256 {
            let id = generate(Algorithm::RandomUuid).unwrap();
            assert_eq!(id.as_bytes()[14], b'4', "version nibble in {id}");
            let variant = id.as_bytes()[19];
            assert!(
                matches!(variant, b'8' | b'9' | b'a' | b'b'),
                "variant nibble in {id}"
            );
        }
    }

    #[test]
    fn random_uuid_never_degenerates_to_all_zero() {
        // An all-zero input must still come out stamped with version/variant,
        // so a masking mistake cannot leak the nil UUID.
        struct ZeroEntropy;
        impl EntropySource for ZeroEntropy {
            fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), AssignError> {
                dest.fill(0);
                Ok(())
            }
        }

        let id = IdGenerator::with_source(ZeroEntropy)
            .generate(Algorithm::RandomUuid)
            .unwrap();
        assert_ne!(id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(id, "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn random_uuid_parses_as_version_4() {
        let id = generate(Algorithm::RandomUuid).unwrap();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn fallback_is_nonempty_hex() {
        let id = generate(Algorithm::Fallback).unwrap();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn fallback_differs_across_immediate_calls() {
        let mut generator = IdGenerator::new();
        let a = generator.generate(Algorithm::Fallback).unwrap();
        let b = generator.generate(Algorithm::Fallback).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn broken_entropy_surfaces_generator_unavailable() {
        let mut generator = IdGenerator::with_source(BrokenEntropy);
        for algorithm in [Algorithm::RandomUuid, Algorithm::Fallback] {
            let err = generator.generate(algorithm).unwrap_err();
            assert!(matches!(err, AssignError::GeneratorUnavailable { .. }));
        }
    }
}
