//! Contract violations raised by misuse of [`Outcome`](crate::Outcome)
//!
//! These are defects in calling code, never business failures. They are kept
//! apart from the `E` channel so a caller can't mistake one for the other.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag naming one of the two variants of an [`Outcome`](crate::Outcome)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// The expected value is present
    Success,
    /// The failure payload is present
    Failure,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Failure => f.write_str("Failure"),
        }
    }
}

/// Misuse of the outcome contract
///
/// Both kinds are fatal to the call that produced them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// An outcome was requested without a payload for its variant
    #[error("invariant violation: a {variant} outcome requires a payload")]
    InvariantViolation {
        /// The variant that was being constructed
        variant: Variant,
    },

    /// A variant-specific accessor was used on the other variant
    #[error("illegal state: requested the {requested} payload of a {actual} outcome")]
    IllegalState {
        /// The variant the caller assumed
        requested: Variant,
        /// The variant the outcome actually holds
        actual: Variant,
    },
}

impl ContractViolation {
    pub(crate) const fn missing(variant: Variant) -> Self {
        Self::InvariantViolation { variant }
    }

    pub(crate) const fn wrong_variant(requested: Variant, actual: Variant) -> Self {
        Self::IllegalState { requested, actual }
    }
}
