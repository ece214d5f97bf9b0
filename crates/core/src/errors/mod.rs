//! Error types and result extensions for optio operations

mod builders;
mod conversions;
mod display;
mod extensions;
mod inspect;
mod types;

pub use extensions::*;
pub use types::{BoxError, Error, ErrorKind, Result};
