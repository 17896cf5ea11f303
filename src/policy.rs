//! Assignment policy: fill an empty field slot exactly once.
//!
//! The policy is a strict fill-if-absent rule. Per slot the states are
//! `Empty` and `Populated`; the only transition is `Empty -> Populated`, and
//! `Populated` is terminal — there is no regenerate and no reset. A record
//! saved twice keeps the identifier minted on the first save.
//!
//! "Empty" means the slot is absent or holds the exact empty string after
//! conversion to text. A value of only whitespace is NOT empty and passes
//! through untouched. That boundary is a behavior contract: loosening it to a
//! trimmed check would silently re-identify records whose stored value is
//! whitespace.

use crate::algorithm::Algorithm;
use crate::entropy::EntropySource;
use crate::errors::AssignError;
use crate::generator::IdGenerator;

/// Whether a field slot counts as empty for assignment purposes.
///
/// # Examples
///
/// ```
/// use idfill::is_empty_value;
///
/// assert!(is_empty_value(None));
/// assert!(is_empty_value(Some("")));
/// assert!(!is_empty_value(Some("   ")));
/// assert!(!is_empty_value(Some("bdd4a114-74ee-4f2f-b794-1d9115292b7a")));
/// ```
#[must_use]
pub fn is_empty_value(current: Option<&str>) -> bool {
    match current {
        None => true,
        Some(value) => value.is_empty(),
    }
}

/// Resolve a field slot: pass a populated value through, fill an empty one.
///
/// Invoked by the host save pipeline immediately before persisting a record;
/// the returned string becomes the field value. A non-empty `current` is
/// returned byte-identical regardless of `algorithm`, so resolving an
/// already-populated slot can never mutate it. Generator failures propagate —
/// the host must fail the save rather than persist a placeholder.
///
/// # Examples
///
/// ```
/// use idfill::{resolve, Algorithm};
///
/// let minted = resolve(None, Algorithm::RandomUuid).unwrap();
/// assert_eq!(minted.len(), 36);
///
/// // Second save: the populated slot passes through unchanged.
/// let kept = resolve(Some(&minted), Algorithm::RandomUuid).unwrap();
/// assert_eq!(kept, minted);
/// ```
pub fn resolve(current: Option<&str>, algorithm: Algorithm) -> Result<String, AssignError> {
    resolve_with(&mut IdGenerator::new(), current, algorithm)
}

/// [`resolve`] over a caller-managed generator.
///
/// Lets hosts reuse one generator per pipeline and lets tests inject an
/// entropy source.
pub fn resolve_with<S: EntropySource>(
    generator: &mut IdGenerator<S>,
    current: Option<&str>,
    algorithm: Algorithm,
) -> Result<String, AssignError> {
    match current {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => generator.generate(algorithm),
    }
}
