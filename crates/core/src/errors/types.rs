//! Core error type definitions

use std::borrow::Cow;
use std::sync::Arc;

/// Result type alias for optio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by user supplied closures.
///
/// Any error converts into it with `?`. Boxed [`Error`]s and [`ErrorKind`]s
/// are unboxed again when they re-enter an [`Error`], so membership tests
/// keep working across closure boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Sentinel identities of every failure an optional or a wrapper can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// A consumer was required but unset
    #[error("Consumer is nil")]
    NilConsumer,

    /// A runnable was invoked while unset
    #[error("Runnable is nil")]
    NilRunnable,

    /// `map`/`flat_map` received an unset function
    #[error("Function on Map argument is nil")]
    MapNilFunction,

    /// `map`/`flat_map` received no optional at all
    #[error("Optional on Map argument is nil")]
    MapNilOptional,

    /// An absent optional needed a fallback runnable but got none
    #[error("invalid optional is used")]
    InvalidUsed,

    /// The optional was built from a nil value
    #[error("empty optional")]
    Empty,

    /// A predicate was required but unset
    #[error("Predicate is nil")]
    NilPredicate,

    /// The predicate rejected the value
    #[error("Predicate returns false")]
    PredicateFailed,

    /// The predicate itself failed
    #[error("Predicate returns error")]
    PredicateErr,

    /// A supplier was required but unset
    #[error("Supplier is nil")]
    NilSupplier,

    /// The supplier itself failed
    #[error("Supplier returns error")]
    SupplierErr,

    /// A value was requested from an absent optional
    #[error("Method is called for no value Optional")]
    NoValue,

    /// An unset function was applied
    #[error("Sequence received nil Function")]
    NilFunction,
}

/// Composite error carried by absent optionals.
///
/// An error is either a single sentinel, a cause wrapped with a context
/// message, an ordered join of several causes, or a foreign error. Use
/// [`Error::is`] to test membership of a sentinel anywhere in the tree and
/// [`Error::find`] to recover a foreign error by type.
#[derive(Debug, Clone)]
pub enum Error {
    /// A single sentinel
    Kind(ErrorKind),

    /// A cause with a context message in front of it
    Context {
        context: Cow<'static, str>,
        source: Box<Error>,
    },

    /// Several causes, in the order they were joined
    Joined(Vec<Error>),

    /// An error that did not originate in optio
    External(Arc<dyn std::error::Error + Send + Sync + 'static>),
}
