//! Fallible functional wrappers
//!
//! Each wrapper owns a boxed closure that may fail with a [`BoxError`], or
//! nothing at all. An unset wrapper is a legal value: composing with it
//! yields another unset wrapper, and invoking it reports the matching
//! [`ErrorKind`] sentinel instead of panicking.
//!
//! [`BoxError`]: crate::errors::BoxError
//! [`ErrorKind`]: crate::errors::ErrorKind

pub mod consumer;
pub mod function;
pub mod predicate;
pub mod runnable;
pub mod supplier;

pub use consumer::Consumer;
pub use function::Function;
pub use predicate::Predicate;
pub use runnable::Runnable;
pub use supplier::Supplier;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{Consumer, Function, Predicate, Runnable, Supplier};
    pub use crate::errors::{BoxError, Error, ErrorKind, Result, ResultExt};
}
