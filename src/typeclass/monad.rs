//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` extends [`Applicative`] with `flat_map`, which lets the result
//! of one computation decide what computation runs next. Absence and failure
//! short-circuit the chain: once a `Maybe` is `Nothing` or an `Outcome` is
//! failed, no later step runs and the original fault passes through
//! untouched.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! - **Left identity**: `Self::pure(a).flat_map(f) == f(a)`
//! - **Right identity**: `m.flat_map(Self::pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) ==
//!   m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use fallible::typeclass::{Functor, Monad};
//! use fallible::value::Outcome;
//!
//! fn non_zero(n: i32) -> Outcome<i32> {
//!     if n == 0 {
//!         Outcome::err_message("zero divisor")
//!     } else {
//!         Outcome::ok(n)
//!     }
//! }
//!
//! let result = Outcome::ok(4).flat_map(non_zero).fmap(|n| 100 / n);
//! assert_eq!(result.value(), 25);
//! ```

use super::applicative::Applicative;
use crate::value::{Maybe, Outcome};

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::typeclass::Monad;
    /// use fallible::value::Maybe;
    ///
    /// let chained = Maybe::just(5).flat_map(|n| Maybe::just(n * 2));
    /// assert_eq!(chained, Maybe::just(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` represents absence or failure, that propagates and `next`
    /// is not returned.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.and_then(function)
    }
}

impl<T> Monad for Outcome<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(T) -> Outcome<B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flat_map_chains_present_values() {
        let chained = Maybe::just(5).flat_map(|n| Maybe::just(n * 2));
        assert_eq!(chained, Maybe::just(10));
    }

    #[rstest]
    fn flat_map_short_circuits_on_nothing() {
        let absent: Maybe<i32> = Maybe::nothing();
        let chained = absent.flat_map(|n| Maybe::just(n * 2));
        assert_eq!(chained, Maybe::nothing());
    }

    #[rstest]
    fn then_discards_first_result() {
        let sequenced = Outcome::ok(1).then(Outcome::ok("second"));
        assert_eq!(sequenced.value(), "second");
    }

    #[rstest]
    fn then_propagates_failure() {
        let failed: Outcome<i32> = Outcome::err_message("boom");
        let sequenced = failed.then(Outcome::ok("second"));
        assert_eq!(sequenced.fault().message(), "boom");
    }
}
