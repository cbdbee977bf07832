//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot natively abstract over type constructors such as `Maybe<_>`
//! or `Outcome<_>`. This module works around that with a Generic Associated
//! Type: [`TypeConstructor`] names the inner type of a container and the
//! same container re-applied to a different type, which is all the Functor,
//! Applicative, and Monad traits need.

use crate::value::{Maybe, Outcome};

/// A trait representing a type constructor.
///
/// Implementors are containers applied to some inner type; `WithType<B>`
/// names the same container applied to `B` instead.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` must be the same
/// type as `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use fallible::typeclass::TypeConstructor;
/// use fallible::value::Maybe;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`. The
    /// constraint keeps the result a valid constructor so transformations
    /// can chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<T> TypeConstructor for Outcome<T> {
    type Inner = T;
    type WithType<B> = Outcome<B>;
}
