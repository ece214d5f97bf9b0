//! Core error types, functional wrappers, and constants for `optio`.
//!
//! This crate holds the building blocks that the `Optional` engine in
//! `optio-optional` consumes.
//!
//! ## Key Components
//!
//! - **`errors`**: The composite [`Error`] type with its [`ErrorKind`]
//!   sentinels. Errors can be wrapped with context and joined, and a joined
//!   error still answers membership tests for every cause it carries.
//! - **`functional`**: Fallible `Function`, `Predicate`, `Consumer`,
//!   `Supplier` and `Runnable` wrappers. Every wrapper may be *unset*, which
//!   callers detect instead of dereferencing a missing closure.
//! - **`constants`**: Shared environment variable names, defaults and error
//!   context strings.

pub mod constants;
pub mod errors;
pub mod functional;

pub use self::{
    constants::*,
    errors::{BoxError, Error, ErrorKind, Result, ResultExt},
    functional::{Consumer, Function, Predicate, Runnable, Supplier},
};
