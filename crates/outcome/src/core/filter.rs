//! Error-class filters for the catching constructors
//!
//! A filter is an explicit, non-empty list of [`ErrorClass`] descriptors. A
//! raised error is caught only when it belongs to one of them; everything
//! else keeps propagating. There is deliberately no "catch everything" class.

use std::fmt;
use std::io;
use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::core::raise::{Catchable, Raise};

/// A category of raised errors a catching constructor may absorb
#[derive(Clone, Copy)]
pub struct ErrorClass {
    test: ClassTest,
}

#[derive(Clone, Copy)]
enum ClassTest {
    Type {
        name: &'static str,
        matches: fn(&anyhow::Error) -> bool,
    },
    Io(io::ErrorKind),
}

impl ErrorClass {
    /// Raised errors whose concrete type is `X`
    ///
    /// Matching looks through `anyhow` context layers, so an `X` raised with
    /// `.context(..)` still belongs to the class.
    pub fn of<X>() -> Self
    where
        X: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            test: ClassTest::Type {
                name: std::any::type_name::<X>(),
                matches: |raised| raised.is::<X>(),
            },
        }
    }

    /// Raised errors that carry a failure payload of type `X`
    ///
    /// Membership is decided by [`Raise::recover_ref`], so it covers plain
    /// payloads travelling inside a [`WrappedFailure`](crate::WrappedFailure)
    /// as well as error payloads raised as-is. This is the class
    /// [`ExceptionFilter::of`] uses.
    pub fn payload<X: Catchable>() -> Self {
        Self {
            test: ClassTest::Type {
                name: std::any::type_name::<X>(),
                matches: |raised| X::recover_ref(raised).is_some(),
            },
        }
    }

    /// Raised [`io::Error`]s of one particular kind
    ///
    /// This is a narrower class than `ErrorClass::of::<io::Error>()`, which
    /// covers every kind.
    pub const fn io(kind: io::ErrorKind) -> Self {
        Self {
            test: ClassTest::Io(kind),
        }
    }

    /// Whether `raised` belongs to this class
    pub fn matches(&self, raised: &anyhow::Error) -> bool {
        match self.test {
            ClassTest::Type { matches, .. } => matches(raised),
            ClassTest::Io(kind) => raised
                .downcast_ref::<io::Error>()
                .is_some_and(|err| err.kind() == kind),
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.test {
            ClassTest::Type { name, .. } => f.write_str(name),
            ClassTest::Io(kind) => write!(f, "std::io::Error({kind:?})"),
        }
    }
}

impl fmt::Debug for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorClass").field(&format_args!("{self}")).finish()
    }
}

/// The set of error classes a catching constructor turns into failures of `E`
///
/// # Examples
///
/// ```rust
/// use std::io;
/// use std::num::ParseIntError;
/// use outcome::{ErrorClass, ExceptionFilter};
///
/// // one class, recovered as the concrete error type
/// let io_only = ExceptionFilter::<io::Error>::of();
///
/// // several unrelated classes, recovered as the raised error itself
/// let multi = ExceptionFilter::any_of([
///     ErrorClass::of::<io::Error>(),
///     ErrorClass::of::<ParseIntError>(),
/// ]);
/// assert_eq!(multi.classes().len(), 2);
/// # let _ = io_only;
/// ```
pub struct ExceptionFilter<E> {
    classes: SmallVec<[ErrorClass; 2]>,
    _payload: PhantomData<fn() -> E>,
}

impl<E: Raise> ExceptionFilter<E> {
    /// A filter catching a single class
    pub fn new(class: ErrorClass) -> Self {
        let mut classes = SmallVec::new();
        classes.push(class);
        Self {
            classes,
            _payload: PhantomData,
        }
    }

    /// Also catch `class`
    pub fn or(mut self, class: ErrorClass) -> Self {
        self.classes.push(class);
        self
    }

    /// The classes this filter catches, in the order they were added
    pub fn classes(&self) -> &[ErrorClass] {
        &self.classes
    }

    /// The first class `raised` belongs to, if any
    pub fn matching(&self, raised: &anyhow::Error) -> Option<&ErrorClass> {
        self.classes.iter().find(|class| class.matches(raised))
    }

    /// Whether this filter catches `raised`
    pub fn matches(&self, raised: &anyhow::Error) -> bool {
        self.matching(raised).is_some()
    }

    /// Turn `raised` into a failure payload, or hand it back untouched
    ///
    /// An error is handed back when no class matches, or when it matches but
    /// does not hold an `E` (a filter naming classes unrelated to its payload).
    pub fn catch(&self, raised: anyhow::Error) -> Result<E, anyhow::Error> {
        let Some(class) = self.matching(&raised) else {
            tracing::trace!(error = %raised, "raised error not covered by filter, propagating");
            return Err(raised);
        };
        E::recover(raised)
            .inspect(|_| tracing::trace!(%class, "caught raised error into failure"))
            .inspect_err(|raised| {
                tracing::trace!(%class, error = %raised, "matched class carries no failure payload, propagating");
            })
    }
}

impl<X: Catchable> ExceptionFilter<X> {
    /// A filter catching every raised error that carries an `X`
    ///
    /// Whatever [`Outcome::get`](crate::Outcome::get) raises for a failure of
    /// `X` is caught back as that same `X`, wrapped plain payloads included.
    pub fn of() -> Self {
        Self::new(ErrorClass::payload::<X>())
    }
}

impl ExceptionFilter<io::Error> {
    /// A filter catching only the listed kinds of [`io::Error`]
    pub fn io_kinds<const N: usize>(kinds: [io::ErrorKind; N]) -> Self {
        const { assert!(N > 0, "a filter needs at least one class") };
        Self {
            classes: kinds.into_iter().map(ErrorClass::io).collect(),
            _payload: PhantomData,
        }
    }
}

impl ExceptionFilter<anyhow::Error> {
    /// A multi-catch filter; the caught raised error becomes the payload as-is
    pub fn any_of<const N: usize>(classes: [ErrorClass; N]) -> Self {
        const { assert!(N > 0, "a filter needs at least one class") };
        Self {
            classes: classes.into_iter().collect(),
            _payload: PhantomData,
        }
    }
}

impl<E> Clone for ExceptionFilter<E> {
    fn clone(&self) -> Self {
        Self {
            classes: self.classes.clone(),
            _payload: PhantomData,
        }
    }
}

impl<E> fmt::Debug for ExceptionFilter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionFilter")
            .field("classes", &self.classes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use rstest::rstest;
    use std::num::ParseIntError;

    fn parse_failure() -> anyhow::Error {
        anyhow::Error::new("x".parse::<u32>().unwrap_err())
    }

    fn io_failure(kind: io::ErrorKind) -> anyhow::Error {
        anyhow::Error::new(io::Error::new(kind, "io"))
    }

    #[rstest]
    #[case(io::ErrorKind::NotFound)]
    #[case(io::ErrorKind::PermissionDenied)]
    #[case(io::ErrorKind::UnexpectedEof)]
    fn test_type_class_covers_every_io_kind(#[case] kind: io::ErrorKind) {
        assert!(ErrorClass::of::<io::Error>().matches(&io_failure(kind)));
    }

    #[rstest]
    #[case(io::ErrorKind::NotFound, true)]
    #[case(io::ErrorKind::PermissionDenied, false)]
    fn test_io_kind_class_is_narrow(#[case] kind: io::ErrorKind, #[case] expected: bool) {
        let class = ErrorClass::io(io::ErrorKind::NotFound);
        assert_eq!(class.matches(&io_failure(kind)), expected);
    }

    #[test]
    fn test_class_sees_through_context() {
        let raised = Err::<(), _>(io::Error::other("boom"))
            .context("reading ledger")
            .unwrap_err();

        assert!(ErrorClass::of::<io::Error>().matches(&raised));
    }

    #[test]
    fn test_unrelated_type_does_not_match() {
        assert!(!ErrorClass::of::<io::Error>().matches(&parse_failure()));
        assert!(!ErrorClass::io(io::ErrorKind::NotFound).matches(&parse_failure()));
    }

    #[test]
    fn test_catch_recovers_matched_and_returns_unmatched() {
        let filter = ExceptionFilter::<io::Error>::of();

        let caught = filter
            .catch(io_failure(io::ErrorKind::NotFound))
            .expect("io errors are covered");
        assert_eq!(caught.kind(), io::ErrorKind::NotFound);

        let escaped = filter.catch(parse_failure()).expect_err("parse errors are not");
        assert!(escaped.is::<ParseIntError>());
    }

    #[test]
    fn test_payload_class_sees_wrapped_values() {
        let raised = crate::raise("bean_counter_offline".to_string());

        assert!(ErrorClass::payload::<String>().matches(&raised));
        assert!(!ErrorClass::of::<String>().matches(&raised));
        assert!(!ErrorClass::payload::<u8>().matches(&raised));
    }

    #[test]
    fn test_of_catches_raised_plain_payloads() {
        let filter = ExceptionFilter::<String>::of();

        let caught = filter
            .catch(crate::raise("bean_counter_offline".to_string()))
            .expect("wrapped strings are covered");
        assert_eq!(caught, "bean_counter_offline");

        let escaped = filter
            .catch(anyhow::anyhow!("bean_counter_offline"))
            .expect_err("bare messages carry no payload");
        assert_eq!(escaped.to_string(), "bean_counter_offline");
    }

    #[test]
    fn test_multi_catch() {
        let filter = ExceptionFilter::any_of([
            ErrorClass::of::<io::Error>(),
            ErrorClass::of::<ParseIntError>(),
        ]);

        assert!(filter.matches(&io_failure(io::ErrorKind::Other)));
        assert!(filter.matches(&parse_failure()));
        assert!(!filter.matches(&anyhow::anyhow!("plain message")));
    }

    #[test]
    fn test_or_extends_filter() {
        let filter = ExceptionFilter::<io::Error>::io_kinds([io::ErrorKind::NotFound])
            .or(ErrorClass::io(io::ErrorKind::PermissionDenied));

        assert_eq!(filter.classes().len(), 2);
        assert!(filter.matches(&io_failure(io::ErrorKind::PermissionDenied)));
        assert!(!filter.matches(&io_failure(io::ErrorKind::TimedOut)));
    }

    #[test]
    fn test_class_display() {
        assert_eq!(
            ErrorClass::of::<ParseIntError>().to_string(),
            std::any::type_name::<ParseIntError>()
        );
        assert_eq!(
            ErrorClass::payload::<String>().to_string(),
            std::any::type_name::<String>()
        );
        assert_eq!(
            ErrorClass::io(io::ErrorKind::NotFound).to_string(),
            "std::io::Error(NotFound)"
        );
    }
}
