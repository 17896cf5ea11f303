//! # Idfill: Fill-once Record Identifier Generation
//!
//! Idfill gives a record field its identifier exactly once. At save time the
//! host hands over the slot's current value; if it is empty a fresh identifier
//! is minted with the configured algorithm, and if it is populated the value
//! passes through byte-identical. There is no regenerate path.
//!
//! ## Core Concepts
//!
//! - **Algorithm**: closed choice between a canonical UUID v4 and a shorter
//!   time-based fallback identifier
//! - **Generator**: produces a fresh identifier from entropy and the clock
//! - **Policy**: decides whether generation happens at all — fill-if-absent,
//!   never refresh
//! - **Settings**: typed, boundary-validated form of the operator's
//!   configuration choices
//!
//! ## Quick Start
//!
//! ```
//! use idfill::{resolve, Algorithm};
//!
//! // First save of a record: the slot is empty, an identifier is minted.
//! let minted = resolve(None, Algorithm::RandomUuid).unwrap();
//! assert_eq!(minted.len(), 36);
//!
//! // Every later save: the populated slot passes through unchanged.
//! let kept = resolve(Some(&minted), Algorithm::RandomUuid).unwrap();
//! assert_eq!(kept, minted);
//! ```
//!
//! ## Emptiness Contract
//!
//! Absent and the exact empty string count as empty; nothing else does. In
//! particular a whitespace-only value is populated and will never be
//! regenerated:
//!
//! ```
//! use idfill::{resolve, Algorithm};
//!
//! assert_eq!(resolve(Some("   "), Algorithm::Fallback).unwrap(), "   ");
//! ```
//!
//! ## Failure Behavior
//!
//! Generation consumes entropy and the wall clock and nothing else. If the
//! entropy source cannot be read the call returns
//! [`AssignError::GeneratorUnavailable`]; the host must fail the save rather
//! than persist an empty or placeholder identifier.
//!
//! ## Module Guide
//!
//! - [`algorithm`] - Closed algorithm enumeration and its two parse paths
//! - [`generator`] - UUID v4 and time-based fallback generation
//! - [`policy`] - Fill-if-absent assignment rule
//! - [`config`] - Typed operator settings, validated at the boundary
//! - [`entropy`] - Pluggable entropy source seam
//! - [`errors`] - Error taxonomy
//! - [`telemetry`] - Tracing setup for hosts

pub mod algorithm;
pub mod config;
pub mod entropy;
pub mod errors;
pub mod generator;
pub mod policy;
pub mod telemetry;

pub use algorithm::Algorithm;
pub use config::FieldSettings;
pub use entropy::{EntropySource, OsEntropy, ThreadEntropy};
pub use errors::AssignError;
pub use generator::{IdGenerator, generate};
pub use policy::{is_empty_value, resolve, resolve_with};
