//! The error-carrying optional container

use crate::nilable::Nilable;
use optio_core::{Consumer, Error, ErrorKind, Predicate, Result, Runnable, Supplier};
use std::fmt;

#[derive(Clone)]
enum State<T> {
    Present(T),
    Absent(Error),
}

/// A container that holds either a value or the cause of its absence.
///
/// Exactly one of the two is held at any time. An `Optional` is never
/// mutated in place: every transforming method consumes it and returns
/// either the same optional or a new one.
#[derive(Clone)]
pub struct Optional<T> {
    state: State<T>,
}

impl<T> Optional<T> {
    /// Wrap `value`, rejecting the nil form of nilable types.
    ///
    /// A nil value yields an absent optional whose cause is
    /// [`ErrorKind::Empty`].
    #[must_use]
    pub fn new(value: T) -> Self
    where
        T: Nilable,
    {
        if value.is_nil() {
            return Self::absent("new", ErrorKind::Empty.into());
        }
        Self::present(value)
    }

    /// An absent optional with [`ErrorKind::Empty`] as its cause
    #[must_use]
    pub fn empty() -> Self {
        Self::absent("empty", ErrorKind::Empty.into())
    }

    /// Wrap `Some(value)` like [`new`](Self::new); `None` gives
    /// [`empty`](Self::empty).
    #[must_use]
    pub fn of_nullable(value: Option<T>) -> Self
    where
        T: Nilable,
    {
        match value {
            Some(value) => Self::new(value),
            None => Self::empty(),
        }
    }

    fn present(value: T) -> Self {
        Self {
            state: State::Present(value),
        }
    }

    pub(crate) fn absent(operation: &'static str, cause: Error) -> Self {
        tracing::trace!(operation, cause = %cause, "optional is absent");
        Self {
            state: State::Absent(cause),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self.state, State::Present(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Absent(_))
    }

    /// Borrow the value.
    ///
    /// Fails with [`ErrorKind::NoValue`] when absent, whatever the stored
    /// cause is.
    pub fn get(&self) -> Result<&T> {
        match &self.state {
            State::Present(value) => Ok(value),
            State::Absent(_) => Err(ErrorKind::NoValue.into()),
        }
    }

    /// Take the value out.
    ///
    /// Fails with [`ErrorKind::NoValue`] when absent, whatever the stored
    /// cause is. Use [`into_result`](Self::into_result) to get the cause.
    pub fn into_value(self) -> Result<T> {
        match self.state {
            State::Present(value) => Ok(value),
            State::Absent(_) => Err(ErrorKind::NoValue.into()),
        }
    }

    /// Take the value out, or the cause of its absence
    pub fn into_result(self) -> Result<T> {
        match self.state {
            State::Present(value) => Ok(value),
            State::Absent(cause) => Err(cause),
        }
    }

    /// The cause of absence; `None` when a value is present
    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            State::Present(_) => None,
            State::Absent(cause) => Some(cause),
        }
    }

    pub fn into_error(self) -> Option<Error> {
        match self.state {
            State::Present(_) => None,
            State::Absent(cause) => Some(cause),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self.state {
            State::Present(value) => Some(value),
            State::Absent(_) => None,
        }
    }

    /// Run `consumer` on the value.
    ///
    /// An absent optional fails with [`ErrorKind::NoValue`] before the
    /// consumer is looked at. A present one fails with
    /// [`ErrorKind::NilConsumer`] when the consumer is unset and otherwise
    /// returns whatever the consumer returns.
    pub fn if_present(&self, mut consumer: Consumer<'_, T>) -> Result<()> {
        match &self.state {
            State::Present(value) => consumer.accept(value),
            State::Absent(_) => Err(ErrorKind::NoValue.into()),
        }
    }

    /// Run `consumer` on the value, or `runnable` when there is none.
    ///
    /// The present side follows [`if_present`](Self::if_present). On the
    /// absent side an unset runnable fails with [`ErrorKind::InvalidUsed`];
    /// otherwise the runnable's own outcome is returned and the stored cause
    /// is not surfaced.
    pub fn if_present_or_else(
        &self,
        mut consumer: Consumer<'_, T>,
        mut runnable: Runnable<'_>,
    ) -> Result<()> {
        match &self.state {
            State::Present(value) => consumer.accept(value),
            State::Absent(_) if !runnable.is_set() => Err(ErrorKind::InvalidUsed.into()),
            State::Absent(_) => runnable.run(),
        }
    }

    /// Keep the value only if `predicate` holds for it.
    ///
    /// An absent optional is returned unchanged without calling the
    /// predicate. For a present one:
    /// - unset predicate: absent with [`ErrorKind::NilPredicate`]
    /// - predicate error: absent with [`ErrorKind::PredicateErr`] joined with
    ///   the error, whatever boolean came with it
    /// - `false`: absent with [`ErrorKind::PredicateFailed`]
    /// - `true`: this optional, unchanged
    #[must_use]
    pub fn filter(self, mut predicate: Predicate<'_, T>) -> Self {
        let verdict = match &self.state {
            State::Absent(_) => return self,
            State::Present(_) if !predicate.is_set() => {
                return Self::absent("filter", ErrorKind::NilPredicate.into());
            }
            State::Present(value) => predicate.test(value),
        };
        match verdict {
            Ok(true) => self,
            Ok(false) => Self::absent("filter", ErrorKind::PredicateFailed.into()),
            Err(error) => {
                Self::absent("filter", Error::join([ErrorKind::PredicateErr.into(), error]))
            }
        }
    }

    /// Fall back to the optional produced by `supplier` when absent.
    ///
    /// The supplier must be set even when a value is present; an unset one
    /// turns a present optional into an absent one with
    /// [`ErrorKind::NilSupplier`]. A set supplier is never called for a
    /// present optional. For an absent one:
    /// - unset supplier: [`ErrorKind::NilSupplier`] joined with the cause
    /// - supplier error: [`ErrorKind::SupplierErr`], the error and the cause,
    ///   joined in that order
    /// - otherwise the supplied optional replaces this one
    #[must_use]
    pub fn or(self, mut supplier: Supplier<'_, Optional<T>>) -> Self {
        let cause = match self.state {
            State::Present(_) if !supplier.is_set() => {
                return Self::absent("or", ErrorKind::NilSupplier.into());
            }
            State::Present(value) => return Self::present(value),
            State::Absent(cause) => cause,
        };
        if !supplier.is_set() {
            return Self::absent("or", Error::join([ErrorKind::NilSupplier.into(), cause]));
        }
        match supplier.get() {
            Ok(optional) => optional,
            Err(error) => {
                Self::absent("or", Error::join([ErrorKind::SupplierErr.into(), error, cause]))
            }
        }
    }

    /// The value, or `other` when absent
    pub fn or_else(self, other: T) -> T {
        match self.state {
            State::Present(value) => value,
            State::Absent(_) => other,
        }
    }

    /// The value, or one produced by `supplier` when absent.
    ///
    /// The supplier is only consulted when absent. Failures are joined with
    /// the stored cause the same way [`or`](Self::or) joins them.
    pub fn or_else_get(self, mut supplier: Supplier<'_, T>) -> Result<T> {
        let cause = match self.state {
            State::Present(value) => return Ok(value),
            State::Absent(cause) => cause,
        };
        if !supplier.is_set() {
            return Err(Error::join([ErrorKind::NilSupplier.into(), cause]));
        }
        supplier
            .get()
            .map_err(|error| Error::join([ErrorKind::SupplierErr.into(), error, cause]))
    }
}

impl<T: Nilable> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Result<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_result()
    }
}

/// Two optionals are equal when both hold equal values or both are absent;
/// causes are not compared.
impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Present(left), State::Present(right)) => left == right,
            (State::Absent(_), State::Absent(_)) => true,
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Present(value) => f.debug_tuple("Present").field(value).finish(),
            State::Absent(cause) => f.debug_tuple("Absent").field(cause).finish(),
        }
    }
}
