//! Applicative type class - applying functions within contexts.
//!
//! An `Applicative` extends [`Functor`] with the ability to lift plain
//! values into the context (`pure`) and to combine multiple independent
//! computations within it (`apply`, `map2`, `product`).
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! - **Identity**: `v.apply(pure(|x| x)) == v`
//! - **Homomorphism**: `pure(x).apply(pure(f)) == pure(f(x))`
//! - **Interchange**: `pure(y).apply(u) == u.apply(pure(|f| f(y)))`
//! - **Composition**: applying composed functions equals composing
//!   applications
//!
//! # Examples
//!
//! ```rust
//! use fallible::typeclass::Applicative;
//! use fallible::value::Maybe;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::just(42));
//!
//! let sum = Maybe::just(1).map2(Maybe::just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::just(3));
//! ```

use super::functor::Functor;
use crate::value::{Maybe, Outcome};

/// A type class for types that support lifting values and combining
/// contexts.
///
/// For `Outcome`, the combining operations commit to first-failure-wins:
/// [`apply`](Self::apply) propagates the function side's fault first, and
/// [`map2`](Self::map2) propagates the left-hand side's fault first. A fault
/// is never invented and never duplicated.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::typeclass::Applicative;
    /// use fallible::value::Outcome;
    ///
    /// let lifted: Outcome<i32> = <Outcome<()>>::pure(42);
    /// assert_eq!(lifted.value(), 42);
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function wrapped in the context to the value in `self`.
    fn apply<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Combines two values in the context using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::typeclass::Applicative;
    /// use fallible::value::Maybe;
    ///
    /// let sum = Maybe::just(3).map2(Maybe::just(4), |x, y| x + y);
    /// assert_eq!(sum, Maybe::just(7));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values in the context.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn apply<B, F>(self, function: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, function) {
            (Maybe::Just(value), Maybe::Just(function)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }
}

impl<T> Applicative for Outcome<T> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B> {
        Outcome::ok(value)
    }

    #[inline]
    fn apply<B, F>(self, function: Outcome<F>) -> Outcome<B>
    where
        F: FnOnce(T) -> B,
    {
        match function {
            Outcome::Success(function) => self.map(function),
            Outcome::Failure(fault) => Outcome::Failure(fault),
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B>, function: F) -> Outcome<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match self {
            Outcome::Success(a) => match other {
                Outcome::Success(b) => Outcome::Success(function(a, b)),
                Outcome::Failure(fault) => Outcome::Failure(fault),
            },
            Outcome::Failure(fault) => Outcome::Failure(fault),
        }
    }
}
