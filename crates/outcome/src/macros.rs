//! Macros for opting types into the raise/recover bridge
//!
//! Pick exactly one per type: a payload is either an error or a plain value.

/// Implement [`Raise`](crate::Raise) and [`Catchable`](crate::Catchable) for error types
///
/// The payload is raised as-is and recovered by downcasting, so the caller
/// catching it sees the original error, context chain included.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, raise_as_exception};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("ledger locked")]
/// struct LedgerLocked;
///
/// raise_as_exception!(LedgerLocked);
///
/// let locked: Outcome<LedgerLocked, u64> = Outcome::failure(LedgerLocked);
/// let raised = locked.get().unwrap_err();
/// assert!(raised.is::<LedgerLocked>());
/// ```
#[macro_export]
macro_rules! raise_as_exception {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Raise for $ty {
                fn raising(self) -> $crate::Raising<Self> {
                    $crate::Raising::Exception($crate::anyhow::Error::new(self))
                }

                fn recover(
                    raised: $crate::anyhow::Error,
                ) -> ::core::result::Result<Self, $crate::anyhow::Error> {
                    raised.downcast::<Self>()
                }

                fn recover_ref(raised: &$crate::anyhow::Error) -> ::core::option::Option<&Self> {
                    raised.downcast_ref::<Self>()
                }
            }

            impl $crate::Catchable for $ty {}
        )+
    };
}

/// Implement [`Raise`](crate::Raise) and [`Catchable`](crate::Catchable) for plain (non-error)
/// payload types
///
/// The payload is carried by a [`WrappedFailure`](crate::WrappedFailure)
/// when raised and taken back out of it when recovered.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, WrappedFailure, raise_as_value};
///
/// #[derive(Debug, PartialEq)]
/// enum TaxError {
///     BeanCounterOffline,
/// }
///
/// raise_as_value!(TaxError);
///
/// let offline: Outcome<TaxError, u64> = Outcome::failure(TaxError::BeanCounterOffline);
/// let raised = offline.get().unwrap_err();
/// let wrapped = raised.downcast_ref::<WrappedFailure<TaxError>>().unwrap();
/// assert_eq!(wrapped.error(), &TaxError::BeanCounterOffline);
/// ```
#[macro_export]
macro_rules! raise_as_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Raise for $ty {
                fn raising(self) -> $crate::Raising<Self> {
                    $crate::Raising::Value(self)
                }

                fn recover(
                    raised: $crate::anyhow::Error,
                ) -> ::core::result::Result<Self, $crate::anyhow::Error> {
                    raised
                        .downcast::<$crate::WrappedFailure<Self>>()
                        .map($crate::WrappedFailure::into_error)
                }

                fn recover_ref(raised: &$crate::anyhow::Error) -> ::core::option::Option<&Self> {
                    raised
                        .downcast_ref::<$crate::WrappedFailure<Self>>()
                        .map($crate::WrappedFailure::error)
                }
            }

            impl $crate::Catchable for $ty {}
        )+
    };
}
