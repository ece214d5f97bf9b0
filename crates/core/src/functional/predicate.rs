//! A test over one borrowed argument that yields a bool or an error

use crate::errors::{BoxError, Error, ErrorKind, Result};
use std::fmt;

type BoxedPredicate<'a, T> = Box<dyn FnMut(&T) -> std::result::Result<bool, BoxError> + 'a>;

/// Fallible test over `&T` that may be unset.
pub struct Predicate<'a, T: ?Sized + 'a> {
    inner: Option<BoxedPredicate<'a, T>>,
}

impl<'a, T: ?Sized + 'a> Predicate<'a, T> {
    /// Wrap a fallible closure
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&T) -> std::result::Result<bool, BoxError> + 'a,
    {
        Self {
            inner: Some(Box::new(f)),
        }
    }

    /// Wrap a closure that cannot fail
    #[must_use]
    pub fn infallible<F>(mut f: F) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
    {
        Self::new(move |value| Ok(f(value)))
    }

    /// A predicate with no closure behind it
    #[must_use]
    pub fn unset() -> Self {
        Self { inner: None }
    }

    pub fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    /// Evaluate this predicate against `value`.
    ///
    /// Fails with [`ErrorKind::NilPredicate`] when unset.
    pub fn test(&mut self, value: &T) -> Result<bool> {
        let Some(f) = self.inner.as_mut() else {
            tracing::debug!("tested an unset Predicate");
            return Err(ErrorKind::NilPredicate.into());
        };
        f(value).map_err(Error::from_boxed)
    }

    /// Short-circuiting logical AND over `predicates`, evaluated in order.
    ///
    /// Evaluation stops at the first `false` or error. The result is unset
    /// if any operand is unset. An empty list always holds.
    #[must_use]
    pub fn all(predicates: impl IntoIterator<Item = Self>) -> Self {
        let Some(mut predicates) = Self::collect_set(predicates) else {
            return Self::unset();
        };
        Self::new(move |value| {
            for predicate in predicates.iter_mut() {
                if !predicate(value)? {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// Short-circuiting logical OR over `predicates`, evaluated in order.
    ///
    /// Evaluation stops at the first `true` or error. The result is unset
    /// if any operand is unset. An empty list never holds.
    #[must_use]
    pub fn any(predicates: impl IntoIterator<Item = Self>) -> Self {
        let Some(mut predicates) = Self::collect_set(predicates) else {
            return Self::unset();
        };
        Self::new(move |value| {
            for predicate in predicates.iter_mut() {
                if predicate(value)? {
                    return Ok(true);
                }
            }
            Ok(false)
        })
    }

    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::all([self, other])
    }

    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::any([self, other])
    }

    /// Logical negation; an unset predicate stays unset
    #[must_use]
    pub fn negate(self) -> Self {
        match self.inner {
            Some(mut f) => Self::new(move |value| Ok(!f(value)?)),
            None => Self::unset(),
        }
    }

    fn collect_set(
        predicates: impl IntoIterator<Item = Self>,
    ) -> Option<Vec<BoxedPredicate<'a, T>>> {
        predicates.into_iter().map(|predicate| predicate.inner).collect()
    }
}

impl<'a, T: PartialEq + 'a> Predicate<'a, T> {
    /// A predicate that holds for values equal to `expected`
    #[must_use]
    pub fn equals(expected: T) -> Self {
        Self::infallible(move |value| *value == expected)
    }
}

impl<T: ?Sized> Default for Predicate<'_, T> {
    fn default() -> Self {
        Self { inner: None }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("set", &self.inner.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn is_positive<'a>() -> Predicate<'a, i32> {
        Predicate::infallible(|i: &i32| *i > 0)
    }

    fn is_even<'a>() -> Predicate<'a, i32> {
        Predicate::infallible(|i: &i32| i % 2 == 0)
    }

    fn failing<'a>() -> Predicate<'a, i32> {
        Predicate::new(|_: &i32| Err(ErrorKind::PredicateErr.into()))
    }

    #[test]
    fn test_infallible_and_test() {
        let mut positive = is_positive();
        assert!(positive.test(&1).unwrap());
        assert!(!positive.test(&-1).unwrap());
    }

    #[test]
    fn test_unset_test_fails() {
        let mut unset = Predicate::<i32>::unset();
        assert!(unset.test(&1).unwrap_err().is(ErrorKind::NilPredicate));
    }

    #[test]
    fn test_and() {
        let mut both = is_positive().and(is_even());
        assert!(both.test(&2).unwrap());
        assert!(!both.test(&1).unwrap());
        assert!(!both.test(&-2).unwrap());
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Cell::new(0);
        let mut both = Predicate::infallible(|_: &i32| false).and(Predicate::infallible(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        }));
        assert!(!both.test(&1).unwrap());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_and_propagates_error() {
        let mut both = is_positive().and(failing());
        assert!(both.test(&1).unwrap_err().is(ErrorKind::PredicateErr));
    }

    #[test]
    fn test_or() {
        let mut either = is_positive().or(is_even());
        assert!(either.test(&1).unwrap());
        assert!(either.test(&-2).unwrap());
        assert!(!either.test(&-1).unwrap());
    }

    #[test]
    fn test_or_short_circuits_before_error() {
        let mut either = is_positive().or(failing());
        assert!(either.test(&1).unwrap());
        assert!(either.test(&-1).unwrap_err().is(ErrorKind::PredicateErr));
    }

    #[test]
    fn test_all_and_any_with_many_operands() {
        let below_ten = Predicate::infallible(|i: &i32| *i < 10);
        let mut all = Predicate::all([is_positive(), is_even(), below_ten]);
        assert!(all.test(&4).unwrap());
        assert!(!all.test(&12).unwrap());

        let mut any = Predicate::any([
            Predicate::equals(3),
            Predicate::equals(5),
            Predicate::equals(7),
        ]);
        assert!(any.test(&5).unwrap());
        assert!(!any.test(&6).unwrap());
    }

    #[test]
    fn test_composition_with_unset_is_unset() {
        assert!(!is_positive().and(Predicate::unset()).is_set());
        assert!(!Predicate::unset().or(is_positive()).is_set());
        assert!(!Predicate::all([is_positive(), is_even(), Predicate::unset()]).is_set());
        assert!(!Predicate::<i32>::unset().negate().is_set());
    }

    #[test]
    fn test_negate() {
        let mut not_positive = is_positive().negate();
        assert!(not_positive.test(&-1).unwrap());
        assert!(!not_positive.test(&1).unwrap());

        let mut not_failing = failing().negate();
        assert!(not_failing.test(&1).is_err());
    }

    #[test]
    fn test_equals() {
        let mut is_foo = Predicate::equals(String::from("foo"));
        assert!(is_foo.test(&String::from("foo")).unwrap());
        assert!(!is_foo.test(&String::from("bar")).unwrap());
    }

    #[test]
    fn test_unsized_values() {
        let mut short = Predicate::<str>::infallible(|s| s.len() < 4);
        assert!(short.test("abc").unwrap());
        assert!(!short.test("abcd").unwrap());
    }

    // Generic callers name the wrapper with an anonymous lifetime
    fn holds_for_none<T>(value: &T, predicates: Vec<Predicate<'_, T>>) -> Result<bool> {
        Predicate::any(predicates).negate().test(value)
    }

    #[test]
    fn test_generic_caller_with_anonymous_lifetime() {
        let result = holds_for_none(&3, vec![is_even(), Predicate::equals(4)]);
        assert!(result.unwrap());
        assert!(!holds_for_none(&4, vec![is_even()]).unwrap());
    }
}
