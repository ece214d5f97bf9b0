//! A function that accepts one argument and produces one result or an error

use crate::errors::{BoxError, Error, ErrorKind, Result};
use std::fmt;

type BoxedFunction<'a, T, U> = Box<dyn FnMut(T) -> std::result::Result<U, BoxError> + 'a>;

/// Fallible `T -> U` function that may be unset.
pub struct Function<'a, T, U> {
    inner: Option<BoxedFunction<'a, T, U>>,
}

impl<'a, T, U> Function<'a, T, U> {
    /// Wrap a fallible closure
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(T) -> std::result::Result<U, BoxError> + 'a,
    {
        Self {
            inner: Some(Box::new(f)),
        }
    }

    /// Wrap a closure that cannot fail
    #[must_use]
    pub fn infallible<F>(mut f: F) -> Self
    where
        F: FnMut(T) -> U + 'a,
    {
        Self::new(move |input| Ok(f(input)))
    }

    /// A function with no closure behind it
    #[must_use]
    pub fn unset() -> Self {
        Self { inner: None }
    }

    pub fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    /// Apply this function to `input`.
    ///
    /// Fails with [`ErrorKind::NilFunction`] when unset.
    pub fn apply(&mut self, input: T) -> Result<U> {
        let Some(f) = self.inner.as_mut() else {
            tracing::debug!("applied an unset Function");
            return Err(ErrorKind::NilFunction.into());
        };
        f(input).map_err(Error::from_boxed)
    }

    /// Feed the output of this function into `next`.
    ///
    /// The result is unset if either side is unset. An error from this
    /// function is returned without calling `next`.
    #[must_use]
    pub fn and_then<V>(self, next: Function<'a, U, V>) -> Function<'a, T, V>
    where
        T: 'a,
        U: 'a,
        V: 'a,
    {
        match (self.inner, next.inner) {
            (Some(mut first), Some(mut second)) => {
                Function::new(move |input| second(first(input)?))
            }
            _ => Function::unset(),
        }
    }
}

impl<'a, T: 'a> Function<'a, T, T> {
    /// A function that returns its input
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Ok)
    }
}

impl<T, U> Default for Function<'_, T, U> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T, U> fmt::Debug for Function<'_, T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("set", &self.is_set())
            .finish()
    }
}
