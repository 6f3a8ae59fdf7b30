//! # Outcome
//!
//! Typed success/failure values, with a lossless bridge to code that reports
//! errors by raising them (`anyhow::Result` and `?`).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io;
//! use outcome::prelude::*;
//!
//! fn file_size(path: &str) -> anyhow::Result<Outcome<io::Error, u64>> {
//!     Outcome::from_throwing(&ExceptionFilter::of(), || {
//!         std::fs::metadata(path).map(|meta| meta.len())
//!     })
//! }
//!
//! let size = file_size("/no/such/file").unwrap();
//! assert!(size.is_failure());
//!
//! // Callers that prefer raised errors just unwrap:
//! let raised = size.get().unwrap_err();
//! assert!(raised.is::<io::Error>());
//! ```
//!
//! ## Catching and raising
//!
//! - Only [`Outcome::from_throwing`] (and the helpers built on it) catches, and
//!   only the [`ErrorClass`]es named by its [`ExceptionFilter`]. Everything
//!   else keeps propagating, and panics are never touched.
//! - Only [`Outcome::get`] (and [`raise`]) raises. Error payloads are raised
//!   as-is; plain payloads travel inside a [`WrappedFailure`].
//! - Combinators neither catch nor raise.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`] and [`Variant`]

#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod core;

pub mod macros;

/// Re-exported so the bridge macros can name it from downstream crates
pub use anyhow;

/// The success/failure value type
pub use crate::core::Outcome;

/// Variant tag and contract violations
pub use crate::core::{ContractViolation, Variant};

/// Error classes and the filters built from them
pub use crate::core::{ErrorClass, ExceptionFilter};

/// Raise/recover bridge
pub use crate::core::{Catchable, Raise, Raising, WrappedFailure, raise, recover_error};

/// Extension traits for `Result` and `Option`
pub use crate::core::{OptionExt, ResultExt};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::{
        Catchable, ContractViolation, ErrorClass, ExceptionFilter, OptionExt, Outcome, Raise,
        ResultExt, Variant, WrappedFailure, raise, recover_error,
    };

    pub use crate::{raise_as_exception, raise_as_value};
}
