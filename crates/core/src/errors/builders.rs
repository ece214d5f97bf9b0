//! Builder methods for creating and composing errors

use super::types::{BoxError, Error, ErrorKind};
use std::borrow::Cow;
use std::sync::Arc;

impl Error {
    /// Create an error holding a single sentinel
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Error::Kind(kind)
    }

    /// Put a context message in front of a cause
    #[must_use]
    pub fn context(context: impl Into<Cow<'static, str>>, source: impl Into<Error>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(source.into()),
        }
    }

    /// Join causes in order.
    ///
    /// Nested joins are flattened so that joining is associative, and a join
    /// of exactly one cause is that cause itself.
    #[must_use]
    pub fn join<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        let mut causes = Vec::new();
        for error in errors {
            match error.into() {
                Error::Joined(nested) => causes.extend(nested),
                cause => causes.push(cause),
            }
        }
        if causes.len() == 1 {
            causes.remove(0)
        } else {
            Error::Joined(causes)
        }
    }

    /// Wrap a foreign error
    #[must_use]
    pub fn external(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::from_boxed(Box::new(error))
    }

    /// Convert an error returned by a user closure.
    ///
    /// Boxed optio errors come back out as themselves rather than as an
    /// opaque foreign error.
    #[must_use]
    pub fn from_boxed(error: BoxError) -> Self {
        let error = match error.downcast::<Error>() {
            Ok(error) => return *error,
            Err(error) => error,
        };
        match error.downcast::<ErrorKind>() {
            Ok(kind) => Error::Kind(*kind),
            Err(error) => Error::External(Arc::from(error)),
        }
    }
}
