//! Display and `std::error::Error` implementations for the composite error

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Kind(kind) => write!(f, "{kind}"),
            Error::Context { context, source } => write!(f, "{context}: {source}"),
            Error::Joined(causes) => {
                for (index, cause) in causes.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{cause}")?;
                }
                Ok(())
            }
            Error::External(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // Display already renders contexts and joins in full
        match self {
            Error::External(error) => error.source(),
            Error::Kind(_) | Error::Context { .. } | Error::Joined(_) => None,
        }
    }
}
