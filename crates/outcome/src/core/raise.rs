//! The raise/recover bridge between failure payloads and raised errors
//!
//! A raised error is an [`anyhow::Error`] travelling up the stack through
//! `Err` and `?`. Every failure payload that may cross that boundary
//! implements [`Raise`], which decides one of two things:
//!
//! - the payload *is* an error, so it is raised as-is and recovered by
//!   downcasting;
//! - the payload is a plain value, so it travels inside a [`WrappedFailure`]
//!   and is recovered by unwrapping that carrier.
//!
//! Use [`raise_as_exception!`](crate::raise_as_exception) and
//! [`raise_as_value!`](crate::raise_as_value) to opt your own types in.

use std::fmt;

/// How a failure payload crosses into the raised-error world
#[derive(Debug)]
pub enum Raising<E> {
    /// The payload is an error and is raised without wrapping
    Exception(anyhow::Error),
    /// The payload is a plain value and must be carried by a [`WrappedFailure`]
    Value(E),
}

/// A failure payload that knows how to be raised and recovered
///
/// `recover` must be the inverse of `raising`: recovering what `raising`
/// produced returns the very same value, moved back out.
pub trait Raise: fmt::Debug + Send + Sync + Sized + 'static {
    /// Decide how this payload is raised
    fn raising(self) -> Raising<Self>;

    /// Take the payload back out of a raised error, or hand the error back
    fn recover(raised: anyhow::Error) -> Result<Self, anyhow::Error>;

    /// Borrow the payload inside a raised error, if it holds one
    fn recover_ref(raised: &anyhow::Error) -> Option<&Self>;
}

/// A payload whose raised form can be recognised by type
///
/// Implemented by both bridge macros. [`anyhow::Error`] does not implement it:
/// it recovers from every raised error, so a class built from it would match
/// everything.
pub trait Catchable: Raise {}

/// Carrier used to raise a failure payload that is not itself an error
///
/// It owns the original payload; nothing is copied or reformatted except for
/// the `Display` message.
#[derive(Debug, thiserror::Error)]
#[error("failure: {error:?}")]
pub struct WrappedFailure<E: fmt::Debug> {
    error: E,
}

impl<E: fmt::Debug> WrappedFailure<E> {
    pub(crate) const fn new(error: E) -> Self {
        Self { error }
    }

    /// The wrapped failure payload
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Unwrap the failure payload
    pub fn into_error(self) -> E {
        self.error
    }
}

/// Raise a failure payload
///
/// Errors come back unchanged; plain values are moved into a
/// [`WrappedFailure`]. Use it as `return Err(raise(error))`.
pub fn raise<E: Raise>(error: E) -> anyhow::Error {
    match error.raising() {
        Raising::Exception(raised) => raised,
        Raising::Value(error) => {
            tracing::trace!(error = ?error, "wrapping plain failure payload for raising");
            anyhow::Error::new(WrappedFailure::new(error))
        }
    }
}

/// Borrow the failure payload of type `E` carried by a raised error
///
/// Returns `None` when the error neither is an `E` nor wraps one.
pub fn recover_error<E: Raise>(raised: &anyhow::Error) -> Option<&E> {
    E::recover_ref(raised)
}

impl Raise for anyhow::Error {
    fn raising(self) -> Raising<Self> {
        Raising::Exception(self)
    }

    fn recover(raised: anyhow::Error) -> Result<Self, anyhow::Error> {
        Ok(raised)
    }

    fn recover_ref(raised: &anyhow::Error) -> Option<&Self> {
        Some(raised)
    }
}

crate::raise_as_exception!(
    std::io::Error,
    fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    crate::core::error::ContractViolation,
);

crate::raise_as_value!(
    String,
    &'static str,
    Box<str>,
    std::borrow::Cow<'static, str>,
    bool,
    char,
    (),
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_payload_is_raised_unwrapped() {
        let raised = raise(io::Error::new(io::ErrorKind::NotFound, "missing.txt"));

        assert!(raised.is::<io::Error>());
        assert!(!raised.is::<WrappedFailure<io::Error>>());
        assert_eq!(
            recover_error::<io::Error>(&raised).map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_plain_payload_is_wrapped() {
        let raised = raise("bean_counter_offline");

        let wrapped = raised
            .downcast_ref::<WrappedFailure<&str>>()
            .expect("plain payloads travel wrapped");
        assert_eq!(*wrapped.error(), "bean_counter_offline");
        assert_eq!(raised.to_string(), "failure: \"bean_counter_offline\"");
    }

    #[test]
    fn test_recover_moves_the_same_value_back() {
        let source = io::Error::other("disk on fire");
        let address = std::ptr::from_ref(source.get_ref().expect("custom payload")).cast::<u8>();

        let recovered = io::Error::recover(raise(source)).expect("io errors recover");
        let again = std::ptr::from_ref(recovered.get_ref().expect("custom payload")).cast::<u8>();

        assert_eq!(address, again);
    }

    #[test]
    fn test_recover_hands_back_unrelated_errors() {
        let raised = raise(7_u32);

        let back = String::recover(raised).expect_err("a u32 is not a String");
        assert_eq!(u32::recover(back).ok(), Some(7));
    }

    #[test]
    fn test_anyhow_payload_is_identity() {
        let raised = anyhow::anyhow!("already raised");
        let same = raise(raised);

        assert_eq!(same.to_string(), "already raised");
        assert!(recover_error::<anyhow::Error>(&same).is_some());
    }

    #[test]
    fn test_fmt_error_is_raised_unwrapped() {
        let raised = raise(fmt::Error);

        assert!(raised.is::<fmt::Error>());
        assert!(recover_error::<fmt::Error>(&raised).is_some());
    }
}
