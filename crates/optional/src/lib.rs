//! An `Optional` that remembers why it is empty.
//!
//! [`Optional<T>`] holds either a value or a cause. Operations that would
//! leave it empty record a sentinel [`ErrorKind`] and join it with whatever
//! cause was already there, so after a chain of `filter`/`or`/`map` calls the
//! final error still answers [`Error::is`] for every step that failed.
//!
//! ```
//! use optio_optional::{map, Function, Optional};
//!
//! let parsed = map(Optional::new("1"), Function::new(|s: &str| Ok(s.parse::<i32>()?)));
//! assert_eq!(parsed.get().ok(), Some(&1));
//!
//! let failed = map(Optional::new("x"), Function::new(|s: &str| Ok(s.parse::<i32>()?)));
//! assert!(failed.error().is_some_and(|e| e.find::<std::num::ParseIntError>().is_some()));
//! ```

pub mod map;
pub mod nilable;
pub mod optional;

pub use map::{flat_map, map};
pub use nilable::Nilable;
pub use optional::Optional;

// Re-export the collaborators so callers need a single dependency
pub use optio_core::{
    BoxError, Consumer, Error, ErrorKind, Function, Predicate, Result, ResultExt, Runnable,
    Supplier,
};
