//! Extension traits for error handling

use super::types::{Error, Result};
use std::borrow::Cow;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|e| Error::context(context, e))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::context(f(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_context_wraps_the_cause() {
        let result: std::result::Result<(), ErrorKind> = Err(ErrorKind::Empty);
        let error = result.context("invalid optional is passed").unwrap_err();

        assert!(error.is(ErrorKind::Empty));
        assert_eq!(error.to_string(), "invalid optional is passed: empty optional");
    }

    #[test]
    fn test_with_context_is_lazy() {
        let result: std::result::Result<u8, Error> = Ok(1);
        let value = result
            .with_context(|| panic!("context must not be built for Ok"))
            .unwrap();
        assert_eq!(value, 1);
    }
}
