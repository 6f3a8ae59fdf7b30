//! Combinators over outcomes
//!
//! None of these catch anything raised by the caller's function, and none of
//! them raise the failure payload. A failure passes through untouched without
//! the function being called.

use std::fmt;

use crate::core::filter::ExceptionFilter;
use crate::core::outcome::Outcome;
use crate::core::raise::Raise;

impl<E, T> Outcome<E, T> {
    /// Transform the success value
    pub fn map<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure payload
    pub fn map_failure<E2, F>(self, f: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chain a step that produces its own outcome
    ///
    /// The step's outcome is returned as-is, never nested.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Outcome<E, U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover from a failure with a step that produces its own outcome
    ///
    /// A success passes through without `f` being called. The step may
    /// succeed, or fail with a payload of a different type.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let cached: Outcome<String, u32> = Outcome::failure("ledger offline".into());
    /// let fallback: Outcome<u16, u32> = cached.or_else(|_| Outcome::success(0));
    /// assert_eq!(fallback, Outcome::success(0));
    /// ```
    pub fn or_else<E2, F>(self, f: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> Outcome<E2, T>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Swap the roles of the success value and the failure payload
    pub fn transpose(self) -> Outcome<T, E> {
        match self {
            Self::Success(value) => Outcome::Failure(value),
            Self::Failure(error) => Outcome::Success(error),
        }
    }

    /// Like [`flat_map_catching`](Self::flat_map_catching), but the caught
    /// error is turned into the failure payload by `caught`
    pub fn flat_map_catching_with<U, X, R, C, F>(
        self,
        filter: &ExceptionFilter<X>,
        caught: C,
        f: F,
    ) -> anyhow::Result<Outcome<E, U>>
    where
        X: Raise,
        C: FnOnce(X) -> E,
        F: FnOnce(T) -> Result<Outcome<E, U>, R>,
        R: Into<anyhow::Error>,
    {
        match self {
            Self::Success(value) => Outcome::from_throwing_with(filter, caught, || f(value))
                .map(|nested| nested.flat_map(|step| step)),
            Self::Failure(error) => Ok(Outcome::Failure(error)),
        }
    }

    /// Run `effect` on the success value, then hand back `self`
    pub fn on_success<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            effect(value);
        }
        self
    }

    /// Run `effect` on the failure payload, then hand back `self`
    pub fn on_failure<F>(self, effect: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            effect(error);
        }
        self
    }
}

impl<E: Raise, T> Outcome<E, T> {
    /// Chain a step that may raise, catching only what `filter` allows
    ///
    /// Behaves like [`flat_map`](Self::flat_map) on the success path, and like
    /// [`from_throwing`](Self::from_throwing) on whatever the step raises.
    pub fn flat_map_catching<U, X, F>(
        self,
        filter: &ExceptionFilter<E>,
        f: F,
    ) -> anyhow::Result<Outcome<E, U>>
    where
        F: FnOnce(T) -> Result<Outcome<E, U>, X>,
        X: Into<anyhow::Error>,
    {
        match self {
            Self::Success(value) => Outcome::from_throwing(filter, || f(value))
                .map(|nested| nested.flat_map(|step| step)),
            Self::Failure(error) => Ok(Outcome::Failure(error)),
        }
    }
}

impl<T> Outcome<anyhow::Error, T> {
    /// Run `effect` only when the raised error in the failure is an `X`
    pub fn on_specific_failure<X, F>(self, effect: F) -> Self
    where
        X: fmt::Display + fmt::Debug + Send + Sync + 'static,
        F: FnOnce(&X),
    {
        if let Some(specific) = self.error().and_then(anyhow::Error::downcast_ref::<X>) {
            effect(specific);
        }
        self
    }
}
