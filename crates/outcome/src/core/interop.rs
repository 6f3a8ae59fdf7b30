//! Conversions between [`Outcome`] and the standard `Result`/`Option` types

use crate::core::filter::ExceptionFilter;
use crate::core::outcome::Outcome;
use crate::core::raise::Raise;

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    fn from(outcome: Outcome<E, T>) -> Self {
        outcome.into_result()
    }
}

/// Extension trait bringing standard results into the outcome world
pub trait ResultExt<T, X> {
    /// Keep the error as the failure payload, whatever it is
    fn into_outcome(self) -> Outcome<X, T>;

    /// Treat `Err` as a raised error and catch only what `filter` allows
    ///
    /// Same rules as [`Outcome::from_throwing`]: uncovered errors come back as
    /// `Err`, unchanged.
    fn catching<E>(self, filter: &ExceptionFilter<E>) -> anyhow::Result<Outcome<E, T>>
    where
        E: Raise,
        X: Into<anyhow::Error>;
}

impl<T, X> ResultExt<T, X> for Result<T, X> {
    fn into_outcome(self) -> Outcome<X, T> {
        self.into()
    }

    fn catching<E>(self, filter: &ExceptionFilter<E>) -> anyhow::Result<Outcome<E, T>>
    where
        E: Raise,
        X: Into<anyhow::Error>,
    {
        Outcome::from_throwing(filter, || self)
    }
}

/// Extension trait turning optional values into outcomes
pub trait OptionExt<T> {
    /// Success when present, otherwise a failure built lazily by `on_absent`
    fn ok_or_failure<E, F>(self, on_absent: F) -> Outcome<E, T>
    where
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_failure<E, F>(self, on_absent: F) -> Outcome<E, T>
    where
        F: FnOnce() -> E,
    {
        Outcome::from_optional(self, on_absent)
    }
}
