//! Consuming outcomes: the unwrap boundary and the non-raising projections

use crate::core::outcome::Outcome;
use crate::core::raise::{Raise, raise};

impl<E: Raise, T> Outcome<E, T> {
    /// Unwrap the success value, raising the failure otherwise
    ///
    /// This is the one place a failure becomes a raised error:
    ///
    /// - a payload that is an error (e.g. [`std::io::Error`]) is raised as-is,
    ///   so `downcast` on the result yields the very same error;
    /// - a plain payload (e.g. a `String`) is moved into a
    ///   [`WrappedFailure`](crate::WrappedFailure), which is raised instead.
    ///
    /// Use [`recover_error`](crate::recover_error) at the catch site to get
    /// the payload back in either case.
    pub fn get(self) -> anyhow::Result<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(raise(error)),
        }
    }
}

impl<E, T> Outcome<E, T> {
    /// The failure payload, or `None` on a success
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Take the failure payload, or `None` on a success
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// The success value, or `None` on a failure
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Take the success value, or `None` on a failure
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Collapse both variants into a single value
    pub fn fold<R, F, S>(self, on_failure: F, on_success: S) -> R
    where
        F: FnOnce(E) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// The success value, or `default` on a failure
    pub fn get_or(self, default: T) -> T {
        self.get_or_else(|_| default)
    }

    /// The success value, or the failure mapped into one
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// The success value, or an error of the caller's choosing built from the failure
    ///
    /// Unlike [`get`](Self::get) this never wraps; the caller decides exactly
    /// what gets raised.
    pub fn get_or_raise<X, F>(self, f: F) -> Result<T, X>
    where
        F: FnOnce(E) -> X,
    {
        self.into_result().map_err(f)
    }

    /// Convert into a standard [`Result`]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}
