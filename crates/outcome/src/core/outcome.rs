//! The [`Outcome`] value type

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::error::{ContractViolation, Variant};

/// The result of an operation: either a [`Success`](Outcome::Success) carrying
/// the expected value, or a [`Failure`](Outcome::Failure) carrying an error.
///
/// An outcome never changes variant once built. Every combinator returns a new
/// outcome instead of mutating the receiver.
///
/// Errors are handled as follows when crossing into code that expects raised
/// errors (see [`Outcome::get`]):
///
/// - a failure payload that is itself an error is raised as-is;
/// - any other payload is moved into a [`WrappedFailure`](crate::WrappedFailure)
///   and that is raised instead.
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
///
/// let parsed: Outcome<&str, u32> = Outcome::success(21);
/// let doubled = parsed.map(|n| n * 2);
///
/// assert!(doubled.is_success());
/// assert_eq!(doubled.value(), Some(&42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use = "an outcome may be a failure, which should be handled"]
pub enum Outcome<E, T> {
    /// The expected value
    Success(T),
    /// The failure payload
    Failure(E),
}

impl<E, T> Outcome<E, T> {
    /// Which variant this outcome holds
    #[inline]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Success(_) => Variant::Success,
            Self::Failure(_) => Variant::Failure,
        }
    }

    /// `true` for a success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` for a failure
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the payload of whichever variant is present
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The success value, or [`ContractViolation::IllegalState`] on a failure
    pub fn success_value(&self) -> Result<&T, ContractViolation> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(ContractViolation::wrong_variant(
                Variant::Success,
                Variant::Failure,
            )),
        }
    }

    /// The failure payload, or [`ContractViolation::IllegalState`] on a success
    pub fn failure_error(&self) -> Result<&E, ContractViolation> {
        match self {
            Self::Failure(error) => Ok(error),
            Self::Success(_) => Err(ContractViolation::wrong_variant(
                Variant::Failure,
                Variant::Success,
            )),
        }
    }
}

impl<E: fmt::Display, T: fmt::Display> fmt::Display for Outcome<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}
