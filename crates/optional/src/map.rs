//! Transforming an `Optional` from outside

use crate::nilable::Nilable;
use crate::optional::Optional;
use optio_core::{
    Error, ErrorKind, Function, ResultExt, ABSENT_SOURCE_CONTEXT, FUNCTION_ERROR_CONTEXT,
};

/// Apply `f` to the value of `optional`.
///
/// A missing optional (`None`) or an unset function produce an absent
/// optional with [`ErrorKind::MapNilOptional`] or
/// [`ErrorKind::MapNilFunction`]. An absent source keeps its cause behind an
/// "invalid optional is passed" context. An error from `f` is kept behind a
/// "function returns error" context. A successful result goes through
/// [`Optional::new`], so a nil output is absent with [`ErrorKind::Empty`].
pub fn map<T, U>(
    optional: impl Into<Option<Optional<T>>>,
    mut f: Function<'_, T, U>,
) -> Optional<U>
where
    U: Nilable,
{
    let value = match source(optional.into(), f.is_set()) {
        Ok(value) => value,
        Err(cause) => return Optional::absent("map", cause),
    };
    match f.apply(value).context(FUNCTION_ERROR_CONTEXT) {
        Ok(output) => Optional::new(output),
        Err(cause) => Optional::absent("map", cause),
    }
}

/// Apply `f` to the value of `optional` and return the optional it produces.
///
/// Failure handling is the same as [`map`]. On success the optional returned
/// by `f` is passed through untouched.
pub fn flat_map<T, U>(
    optional: impl Into<Option<Optional<T>>>,
    mut f: Function<'_, T, Optional<U>>,
) -> Optional<U> {
    let value = match source(optional.into(), f.is_set()) {
        Ok(value) => value,
        Err(cause) => return Optional::absent("flat_map", cause),
    };
    match f.apply(value).context(FUNCTION_ERROR_CONTEXT) {
        Ok(output) => output,
        Err(cause) => Optional::absent("flat_map", cause),
    }
}

// The checks shared by both transforms, in the order they are made
fn source<T>(optional: Option<Optional<T>>, function_set: bool) -> Result<T, Error> {
    let Some(optional) = optional else {
        return Err(ErrorKind::MapNilOptional.into());
    };
    if !function_set {
        return Err(ErrorKind::MapNilFunction.into());
    }
    optional.into_result().context(ABSENT_SOURCE_CONTEXT)
}
