//! Type class traits for the core value algebra.
//!
//! This module provides the fundamental type classes (traits) that express
//! the algebraic contracts [`Maybe`] and [`Outcome`] satisfy:
//!
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so these traits are built on
//! [`TypeConstructor`], a Generic Associated Type that names a container's
//! inner type and the container re-applied to another type.
//!
//! # Examples
//!
//! ```rust
//! use fallible::typeclass::{Applicative, Functor, Monad};
//! use fallible::value::Maybe;
//!
//! let result = <Maybe<()>>::pure(21)
//!     .fmap(|n| n * 2)
//!     .flat_map(|n| if n > 0 { Maybe::just(n) } else { Maybe::nothing() });
//! assert_eq!(result, Maybe::just(42));
//! ```
//!
//! [`Maybe`]: crate::value::Maybe
//! [`Outcome`]: crate::value::Outcome

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
