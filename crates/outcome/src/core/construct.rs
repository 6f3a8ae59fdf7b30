//! Constructors and the catching entry points

use crate::core::error::{ContractViolation, Variant};
use crate::core::filter::ExceptionFilter;
use crate::core::outcome::Outcome;
use crate::core::raise::Raise;

impl<E, T> Outcome<E, T> {
    /// Wrap `value` as a success
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap `error` as a failure
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Wrap a value coming from a source where it may be missing
    ///
    /// A missing value is a defect in the caller and is reported as
    /// [`ContractViolation::InvariantViolation`]; it never turns into a failure.
    pub fn try_success(value: Option<T>) -> Result<Self, ContractViolation> {
        value
            .map(Self::Success)
            .ok_or(ContractViolation::missing(Variant::Success))
    }

    /// Wrap an error coming from a source where it may be missing
    pub fn try_failure(error: Option<E>) -> Result<Self, ContractViolation> {
        error
            .map(Self::Failure)
            .ok_or(ContractViolation::missing(Variant::Failure))
    }

    /// Success when `value` is present, otherwise a failure built by `on_absent`
    ///
    /// `on_absent` only runs when the value is missing.
    pub fn from_optional<F>(value: Option<T>, on_absent: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(on_absent()),
        }
    }

    /// Like [`from_throwing`](Self::from_throwing), but the caught error is
    /// turned into the failure payload by `caught`
    ///
    /// `filter` decides what is caught, exactly as in `from_throwing`. `caught`
    /// runs only on what it catches; unmatched errors propagate untouched.
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use outcome::{ExceptionFilter, Outcome};
    ///
    /// let parsed: Outcome<String, u8> = Outcome::from_throwing_with(
    ///     &ExceptionFilter::<ParseIntError>::of(),
    ///     |error| format!("bad amount: {error}"),
    ///     || "lots".parse::<u8>(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(parsed.error().map(String::as_str), Some("bad amount: invalid digit found in string"));
    /// ```
    pub fn from_throwing_with<X, R, C, F>(
        filter: &ExceptionFilter<X>,
        caught: C,
        body: F,
    ) -> anyhow::Result<Self>
    where
        X: Raise,
        C: FnOnce(X) -> E,
        F: FnOnce() -> Result<T, R>,
        R: Into<anyhow::Error>,
    {
        match body() {
            Ok(value) => Ok(Self::Success(value)),
            Err(raised) => filter
                .catch(raised.into())
                .map(|error| Self::Failure(caught(error))),
        }
    }
}

impl<E: Raise, T> Outcome<E, T> {
    /// Run a computation that may raise, catching only what `filter` allows
    ///
    /// - `Ok(v)` becomes `Success(v)`.
    /// - A raised error covered by `filter` becomes `Failure(e)`, where `e` is
    ///   the raised error itself, moved out rather than rebuilt.
    /// - Any other raised error is returned unchanged as `Err`, so it keeps
    ///   propagating through `?`.
    ///
    /// Panics are never intercepted. `body` runs exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::io;
    /// use outcome::{ExceptionFilter, Outcome};
    ///
    /// fn file_size(path: &str) -> anyhow::Result<Outcome<io::Error, u64>> {
    ///     Outcome::from_throwing(&ExceptionFilter::of(), || {
    ///         std::fs::metadata(path).map(|meta| meta.len())
    ///     })
    /// }
    ///
    /// let missing = file_size("/definitely/not/here").unwrap();
    /// assert_eq!(missing.error().map(io::Error::kind), Some(io::ErrorKind::NotFound));
    /// ```
    pub fn from_throwing<X, F>(filter: &ExceptionFilter<E>, body: F) -> anyhow::Result<Self>
    where
        F: FnOnce() -> Result<T, X>,
        X: Into<anyhow::Error>,
    {
        match body() {
            Ok(value) => Ok(Self::Success(value)),
            Err(raised) => filter.catch(raised.into()).map(Self::Failure),
        }
    }

    /// Run a body that builds an outcome but may raise along the way
    ///
    /// This lets a body use `get()?` on intermediate outcomes. A raised error
    /// that carries an `E` (raised directly or inside a
    /// [`WrappedFailure`](crate::WrappedFailure)) becomes `Failure(e)`; any
    /// other raised error propagates.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let total: Outcome<String, u32> = Outcome::result_of(|| {
    ///     let a = Outcome::<String, u32>::success(2).get()?;
    ///     let b = Outcome::<String, u32>::failure("ledger closed".into()).get()?;
    ///     Ok(Outcome::success(a + b))
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(total, Outcome::failure("ledger closed".to_string()));
    /// ```
    pub fn result_of<F>(body: F) -> anyhow::Result<Self>
    where
        F: FnOnce() -> anyhow::Result<Self>,
    {
        match body() {
            Ok(outcome) => Ok(outcome),
            Err(raised) => E::recover(raised)
                .map(|error| {
                    tracing::trace!(error = ?error, "recovered raised failure payload");
                    Self::Failure(error)
                })
                .inspect_err(|raised| {
                    tracing::trace!(error = %raised, "raised error carries no failure payload, propagating");
                }),
        }
    }
}
