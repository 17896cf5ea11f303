//! Typed per-field settings supplied by the host configuration surface.
//!
//! Operators pick an algorithm and a display-visibility flag through an
//! external settings UI; both arrive here as loosely typed values and are
//! validated into [`FieldSettings`] before anything downstream sees them.
//! The visibility flag only affects rendering in the host — it is carried as
//! an opaque pass-through and never consulted during generation.

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::errors::AssignError;

/// Environment variable consulted for a process-wide default algorithm.
pub const ALGORITHM_ENV_VAR: &str = "IDFILL_ALGORITHM";

/// Validated per-field configuration.
///
/// # Examples
///
/// ```
/// use idfill::{Algorithm, FieldSettings};
///
/// let settings = FieldSettings::from_operator_input("fallback", true).unwrap();
/// assert_eq!(settings.algorithm, Algorithm::Fallback);
/// assert!(settings.hidden);
///
/// assert!(FieldSettings::from_operator_input("md5", false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldSettings {
    /// Identifier algorithm for this field.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Hide the read-only value control in the host editor. Rendering-only.
    #[serde(default)]
    pub hidden: bool,
}

impl FieldSettings {
    /// Validate operator input at the configuration boundary.
    ///
    /// Strict: an unrecognized algorithm name is rejected here, at
    /// configuration time, rather than surfacing later as a failed save.
    pub fn from_operator_input(algorithm: &str, hidden: bool) -> Result<Self, AssignError> {
        Ok(Self {
            algorithm: algorithm.parse()?,
            hidden,
        })
    }

    /// Build settings from possibly stale stored values.
    ///
    /// Lenient: an unrecognized algorithm name degrades to
    /// [`Algorithm::RandomUuid`] with a logged anomaly, so a save over old
    /// configuration still succeeds.
    #[must_use]
    pub fn lenient(algorithm: &str, hidden: bool) -> Self {
        Self {
            algorithm: Algorithm::parse_lenient(algorithm),
            hidden,
        }
    }

    /// Process-wide default algorithm from the environment.
    ///
    /// Reads [`ALGORITHM_ENV_VAR`] (after loading `.env` if present),
    /// leniently; absent or unrecognized values yield
    /// [`Algorithm::RandomUuid`].
    #[must_use]
    pub fn default_algorithm_from_env() -> Algorithm {
        dotenvy::dotenv().ok();
        match std::env::var(ALGORITHM_ENV_VAR) {
            Ok(value) => Algorithm::parse_lenient(&value),
            Err(_) => Algorithm::default(),
        }
    }

    /// Replace the algorithm, keeping other settings.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Replace the visibility flag, keeping other settings.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}
