//! Conversion implementations for error types

use super::types::{BoxError, Error, ErrorKind};

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::Kind(kind)
    }
}

impl From<BoxError> for Error {
    fn from(error: BoxError) -> Self {
        Error::from_boxed(error)
    }
}
