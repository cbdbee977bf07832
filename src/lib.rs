//! # fallible
//!
//! A functional library for Rust providing optional values, fallible
//! computations, and a structured fault taxonomy.
//!
//! ## Overview
//!
//! This library models "a value that might not be there" and "an operation
//! that might fail" as plain immutable values, together with the combinators
//! needed to compose such computations without manual checking. It includes:
//!
//! - **`Maybe<T>`**: presence or absence of a value, with no error payload
//! - **`Outcome<T>`**: success with a value, or failure with a typed fault
//! - **Fault taxonomy**: an open capability contract (`Fault`) with a default
//!   record type (`BasicFault`) and advisory severities (`FaultKind`)
//! - **Type Classes**: Functor, Applicative, and Monad traits expressing the
//!   algebraic laws the combinators satisfy
//! - **Sequence helpers**: iterator adapters (`try_first`, `choose`, ...)
//!   that surface search results as `Maybe`/`Outcome` values
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `sequence`: Iterator adapters over the core types
//! - `async`: Asynchronous attempt helpers
//! - `serde`: Serialization support for `Maybe` and `FaultKind`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fallible::prelude::*;
//!
//! fn parse_positive(input: &str) -> Maybe<i32> {
//!     Maybe::from(input.parse::<i32>().ok()).and_then(|number| {
//!         if number > 0 {
//!             Maybe::just(number)
//!         } else {
//!             Maybe::nothing()
//!         }
//!     })
//! }
//!
//! assert_eq!(parse_positive("42").value_or(0), 42);
//! assert_eq!(parse_positive("-1"), Maybe::nothing());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fallible::prelude::*;
/// ```
pub mod prelude {

    pub use crate::value::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

pub mod value;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "sequence")]
pub mod sequence;
