//! Core outcome types and operations
//!
//! - [`outcome`](crate::core::outcome) - The [`Outcome`](crate::Outcome) enum and its accessors
//! - [`error`](crate::core::error) - Contract violations and the [`Variant`](crate::Variant) tag
//! - [`construct`](crate::core::construct) - Constructors, including the catching ones
//! - [`consume`](crate::core::consume) - The unwrap boundary and non-raising projections
//! - [`transform`](crate::core::transform) - `map` / `map_failure` / `flat_map` and hooks
//! - [`filter`](crate::core::filter) - Error classes accepted by the catching constructors
//! - [`raise`](crate::core::raise) - Raising failure payloads and recovering them
//! - [`interop`](crate::core::interop) - Conversions to and from `Result` / `Option`

pub mod construct;
pub mod consume;
pub mod error;
pub mod filter;
pub mod interop;
pub mod outcome;
pub mod raise;
pub mod transform;

// Re-export core types
pub use error::{ContractViolation, Variant};
pub use filter::{ErrorClass, ExceptionFilter};
pub use interop::{OptionExt, ResultExt};
pub use outcome::Outcome;
pub use raise::{Catchable, Raise, Raising, WrappedFailure, raise, recover_error};
