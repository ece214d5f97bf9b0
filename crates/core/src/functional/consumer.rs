//! A side-effecting action over one borrowed argument

use crate::errors::{BoxError, Error, ErrorKind, Result};
use std::fmt;

type BoxedConsumer<'a, T> = Box<dyn FnMut(&T) -> std::result::Result<(), BoxError> + 'a>;

/// Fallible action over `&T` that may be unset.
///
/// Unlike the other wrappers a consumer is expected to operate through side
/// effects only.
pub struct Consumer<'a, T: ?Sized + 'a> {
    inner: Option<BoxedConsumer<'a, T>>,
}

impl<'a, T: ?Sized + 'a> Consumer<'a, T> {
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&T) -> std::result::Result<(), BoxError> + 'a,
    {
        Self {
            inner: Some(Box::new(f)),
        }
    }

    #[must_use]
    pub fn infallible<F>(mut f: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        Self::new(move |value| {
            f(value);
            Ok(())
        })
    }

    #[must_use]
    pub fn unset() -> Self {
        Self { inner: None }
    }

    pub fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    /// Run this consumer on `value`.
    ///
    /// Fails with [`ErrorKind::NilConsumer`] when unset.
    pub fn accept(&mut self, value: &T) -> Result<()> {
        let Some(f) = self.inner.as_mut() else {
            tracing::debug!("accepted into an unset Consumer");
            return Err(ErrorKind::NilConsumer.into());
        };
        f(value).map_err(Error::from_boxed)
    }

    /// Run `consumers` in order on the same value.
    ///
    /// Stops at the first error. The result is unset if any operand is unset.
    #[must_use]
    pub fn chain(consumers: impl IntoIterator<Item = Self>) -> Self {
        let consumers: Option<Vec<BoxedConsumer<'a, T>>> =
            consumers.into_iter().map(|consumer| consumer.inner).collect();
        let Some(mut consumers) = consumers else {
            return Self::unset();
        };
        Self::new(move |value| {
            for consumer in consumers.iter_mut() {
                consumer(value)?;
            }
            Ok(())
        })
    }

    /// Run this consumer, then `next`
    #[must_use]
    pub fn and_then(self, next: Self) -> Self {
        Self::chain([self, next])
    }
}

impl<T: ?Sized> Default for Consumer<'_, T> {
    fn default() -> Self {
        Self { inner: None }
    }
}

impl<T: ?Sized> fmt::Debug for Consumer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("set", &self.inner.is_some())
            .finish()
    }
}
