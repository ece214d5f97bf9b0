//! An action that takes nothing and returns nothing but may fail

use crate::errors::{BoxError, Error, ErrorKind, Result};
use std::fmt;

type BoxedRunnable<'a> = Box<dyn FnMut() -> std::result::Result<(), BoxError> + 'a>;

/// Fallible action that may be unset.
#[derive(Default)]
pub struct Runnable<'a> {
    inner: Option<BoxedRunnable<'a>>,
}

impl<'a> Runnable<'a> {
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() -> std::result::Result<(), BoxError> + 'a,
    {
        Self {
            inner: Some(Box::new(f)),
        }
    }

    #[must_use]
    pub fn infallible<F>(mut f: F) -> Self
    where
        F: FnMut() + 'a,
    {
        Self::new(move || {
            f();
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

    /// Run the action.
    ///
    /// Fails with [`ErrorKind::NilRunnable`] when unset.
    pub fn run(&mut self) -> Result<()> {
        let Some(f) = self.inner.as_mut() else {
            tracing::debug!("ran an unset Runnable");
            return Err(ErrorKind::NilRunnable.into());
        };
        f().map_err(Error::from_boxed)
    }
}

impl fmt::Debug for Runnable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runnable")
            .field("set", &self.is_set())
            .finish()
    }
}
