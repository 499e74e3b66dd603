//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the logical
//! combinators used to compose field rules.

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
///
/// let username_ok = letters_only().and(len_between(5, 15));
/// assert!(username_ok.check("abcde"));
/// assert!(!username_ok.check("abc"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types for zero-cost abstraction.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
///
/// let p = not_empty().and(len_max(8)).not();
/// assert!(p.check(""));          // empty fails not_empty, so not() flips it
/// assert!(!p.check("hello"));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::predicate::*;
    ///
    /// let p = len_min(3).and(len_max(8));
    /// assert!(p.check("hello"));
    /// assert!(!p.check("hi"));
    /// assert!(!p.check("far too long for this"));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a predicate that is true when either predicate is true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::predicate::*;
    ///
    /// let p = digits_only().or(letters_only());
    /// assert!(p.check("1234"));
    /// assert!(p.check("abcd"));
    /// assert!(!p.check("ab12"));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// Returns a predicate that is true when the original predicate is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weir::predicate::*;
    ///
    /// let p = not_empty().not();
    /// assert!(p.check(""));
    /// assert!(!p.check("hello"));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::predicate::{len_between, len_min, not_empty, one_of, Predicate, PredicateExt};

    #[test]
    fn test_and() {
        let p = not_empty().and(len_between(3, 10));
        assert!(p.check("hello"));
        assert!(!p.check(""));
        assert!(!p.check("ab"));
    }

    #[test]
    fn test_or() {
        let p = one_of(["red"]).or(one_of(["blue"]));
        assert!(p.check("red"));
        assert!(p.check("blue"));
        assert!(!p.check("green"));
    }

    #[test]
    fn test_not() {
        let p = not_empty().not();
        assert!(p.check(""));
        assert!(!p.check("x"));
    }

    #[test]
    fn test_complex_chain() {
        // (len >= 3 and membership) or empty
        let p = len_min(3)
            .and(one_of(["black", "brown"]))
            .or(not_empty().not());
        assert!(p.check("black"));
        assert!(p.check(""));
        assert!(!p.check("red"));
    }

    #[test]
    fn test_closure_as_predicate() {
        let shouty = |s: &str| s.chars().all(|c| c.is_uppercase());
        assert!(shouty.check("ABC"));
        assert!(!shouty.check("Abc"));

        // Can be combined
        let shouty_and_short = shouty.and(len_between(1, 3));
        assert!(shouty_and_short.check("AB"));
        assert!(!shouty_and_short.check("ABCD"));
    }
}
