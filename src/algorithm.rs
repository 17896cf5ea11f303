//! Closed enumeration of supported identifier algorithms.
//!
//! Operator configuration reaches this crate as free-form text; it is parsed
//! into [`Algorithm`] at the boundary and stays typed from there on. Two parse
//! paths exist, matching the two failure policies of the host integration:
//!
//! - [`Algorithm::from_str`] (strict): rejects unknown names with
//!   [`AssignError::InvalidAlgorithm`]. Used where operator input is validated
//!   at configuration time.
//! - [`Algorithm::parse_lenient`]: deterministically falls back to
//!   [`Algorithm::RandomUuid`] and logs the anomaly. Used where failing a save
//!   over a stale configuration value would be worse than generating with the
//!   default algorithm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AssignError;

/// Identifier generation algorithm selected per field.
///
/// # Examples
///
/// ```
/// use idfill::Algorithm;
///
/// assert_eq!(Algorithm::default(), Algorithm::RandomUuid);
/// assert_eq!("fallback".parse::<Algorithm>().unwrap(), Algorithm::Fallback);
/// assert!("md5".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Canonical 128-bit version-4 UUID, 36-character hyphenated lowercase.
    #[default]
    RandomUuid,
    /// Time-based hexadecimal identifier with supplementary entropy.
    Fallback,
}

impl Algorithm {
    /// Canonical name of the random-UUID algorithm.
    pub const RANDOM_UUID: &'static str = "random_uuid";
    /// Canonical name of the fallback algorithm.
    pub const FALLBACK: &'static str = "fallback";

    /// Canonical string form, matching the serde representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::RandomUuid => Self::RANDOM_UUID,
            Algorithm::Fallback => Self::FALLBACK,
        }
    }

    /// Parse an operator-supplied name, defaulting unknown values to
    /// [`Algorithm::RandomUuid`].
    ///
    /// The fallback is deterministic and logged, so a stale or corrupted
    /// configuration value degrades to the default algorithm instead of
    /// failing the save.
    ///
    /// # Examples
    ///
    /// ```
    /// use idfill::Algorithm;
    ///
    /// assert_eq!(Algorithm::parse_lenient("fallback"), Algorithm::Fallback);
    /// assert_eq!(Algorithm::parse_lenient("md5"), Algorithm::RandomUuid);
    /// ```
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        match input.parse() {
            Ok(algorithm) => algorithm,
            Err(_) => {
                tracing::warn!(
                    input,
                    default = Self::RANDOM_UUID,
                    "unrecognized identifier algorithm, using default"
                );
                Algorithm::RandomUuid
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = AssignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::RANDOM_UUID => Ok(Algorithm::RandomUuid),
            Self::FALLBACK => Ok(Algorithm::Fallback),
            other => Err(AssignError::InvalidAlgorithm {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
