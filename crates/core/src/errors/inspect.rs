//! Membership tests and lookups through composite errors

use super::types::{Error, ErrorKind};

impl Error {
    /// Returns the sentinel if this error is a bare [`ErrorKind`]
    pub fn as_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Kind(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Test whether `kind` occurs anywhere in this error.
    ///
    /// Walks contexts, every joined cause, and the source chain of foreign
    /// errors, so sentinels stay visible after being boxed by a user closure.
    pub fn is(&self, kind: ErrorKind) -> bool {
        match self {
            Error::Kind(own) => *own == kind,
            Error::Context { source, .. } => source.is(kind),
            Error::Joined(causes) => causes.iter().any(|cause| cause.is(kind)),
            Error::External(error) => {
                let mut current: Option<&(dyn std::error::Error + 'static)> = Some(&**error);
                while let Some(error) = current {
                    if let Some(nested) = error.downcast_ref::<Error>() {
                        if nested.is(kind) {
                            return true;
                        }
                    } else if error.downcast_ref::<ErrorKind>() == Some(&kind) {
                        return true;
                    }
                    current = error.source();
                }
                false
            }
        }
    }

    /// Find the first error of type `E` in this error, depth first.
    pub fn find<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Error::Kind(kind) => {
                let kind: &(dyn std::error::Error + 'static) = kind;
                kind.downcast_ref::<E>()
            }
            Error::Context { source, .. } => source.find::<E>(),
            Error::Joined(causes) => causes.iter().find_map(|cause| cause.find::<E>()),
            Error::External(error) => {
                let mut current: Option<&(dyn std::error::Error + 'static)> = Some(&**error);
                while let Some(error) = current {
                    if let Some(found) = error.downcast_ref::<E>() {
                        return Some(found);
                    }
                    current = error.source();
                }
                None
            }
        }
    }

    /// Every sentinel in this error, in order of appearance
    pub fn kinds(&self) -> Vec<ErrorKind> {
        let mut kinds = Vec::new();
        self.collect_kinds(&mut kinds);
        kinds
    }

    fn collect_kinds(&self, kinds: &mut Vec<ErrorKind>) {
        match self {
            Error::Kind(kind) => kinds.push(*kind),
            Error::Context { source, .. } => source.collect_kinds(kinds),
            Error::Joined(causes) => {
                for cause in causes {
                    cause.collect_kinds(kinds);
                }
            }
            Error::External(error) => {
                let mut current: Option<&(dyn std::error::Error + 'static)> = Some(&**error);
                while let Some(error) = current {
                    if let Some(nested) = error.downcast_ref::<Error>() {
                        // the nested error reports the rest of its own chain
                        nested.collect_kinds(kinds);
                        return;
                    }
                    if let Some(kind) = error.downcast_ref::<ErrorKind>() {
                        kinds.push(*kind);
                    }
                    current = error.source();
                }
            }
        }
    }

    /// Number of top-level causes: one unless this is a join
    pub fn len(&self) -> usize {
        match self {
            Error::Joined(causes) => causes.len(),
            _ => 1,
        }
    }

    /// True only for a join without any cause
    pub fn is_empty(&self) -> bool {
        matches!(self, Error::Joined(causes) if causes.is_empty())
    }
}
