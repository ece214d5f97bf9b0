//! A source of values that takes no argument

use crate::errors::{BoxError, Error, ErrorKind, Result};
use std::fmt;

type BoxedSupplier<'a, T> = Box<dyn FnMut() -> std::result::Result<T, BoxError> + 'a>;

/// Fallible producer of `T` that may be unset.
///
/// There is no requirement that a new or distinct value is returned each
/// time the supplier is invoked.
pub struct Supplier<'a, T> {
    inner: Option<BoxedSupplier<'a, T>>,
}

impl<'a, T> Supplier<'a, T> {
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() -> std::result::Result<T, BoxError> + 'a,
    {
        Self {
            inner: Some(Box::new(f)),
        }
    }

    #[must_use]
    pub fn infallible<F>(mut f: F) -> Self
    where
        F: FnMut() -> T + 'a,
    {
        Self::new(move || Ok(f()))
    }

    #[must_use]
    pub fn unset() -> Self {
        Self { inner: None }
    }

    pub fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    /// Produce a value.
    ///
    /// Fails with [`ErrorKind::NilSupplier`] when unset.
    pub fn get(&mut self) -> Result<T> {
        let Some(f) = self.inner.as_mut() else {
            tracing::debug!("called an unset Supplier");
            return Err(ErrorKind::NilSupplier.into());
        };
        f().map_err(Error::from_boxed)
    }
}

impl<T> Default for Supplier<'_, T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> fmt::Debug for Supplier<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supplier")
            .field("set", &self.is_set())
            .finish()
    }
}
