//! Outcome type - success with a value, or failure with a typed fault.
//!
//! This module provides the `Outcome<T>` type, the typed-error counterpart
//! of [`Maybe`]. Where `Maybe` only records *that* a value is absent, an
//! `Outcome` failure carries a [`Fault`] record describing what went wrong.
//!
//! Expected failures travel as `Failure` values built by the factory
//! operations; they are never panicked. Panics are reserved for contract
//! violations: reading the value of a failed outcome, or the fault of a
//! successful one.
//!
//! # Examples
//!
//! ```rust
//! use fallible::value::{FaultKind, Outcome};
//!
//! fn parse_port(input: &str) -> Outcome<u16> {
//!     match input.parse::<u16>() {
//!         Ok(port) => Outcome::ok(port),
//!         Err(_) => Outcome::err_with_kind("port is not a number", FaultKind::Warning),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1);
//! assert_eq!(port.value(), 8081);
//!
//! let bad = parse_port("eighty");
//! assert!(bad.is_err());
//! assert_eq!(bad.fault().message(), "port is not a number");
//! ```
//!
//! [`Maybe`]: crate::value::Maybe

use std::fmt;

use super::fault::{BasicFault, Fault, FaultKind};
use super::maybe::Maybe;

/// The result of a fallible operation: a value, or a fault record.
///
/// `Outcome<T>` is a tagged union of `Success(T)` and
/// `Failure(Box<dyn Fault>)`. The variants are mutually exclusive: a
/// successful outcome never also holds a fault, and vice versa. Outcomes are
/// created only through the factory operations and are immutable afterwards.
///
/// Once an outcome holds a failure, every subsequent [`map`](Self::map) or
/// [`flat_map`](Self::flat_map) in a chain passes that same fault through
/// untouched: the first failure wins, and no accumulation of multiple faults
/// happens at this layer.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use fallible::value::Outcome;
///
/// let total = Outcome::ok(2)
///     .flat_map(|n| Outcome::ok(n + 1))
///     .map(|n| n * 10);
/// assert_eq!(total.value(), 30);
///
/// let failed: Outcome<i32> = Outcome::err_message("no input");
/// let still_failed = failed.map(|n| n * 10);
/// assert_eq!(still_failed.fault().message(), "no input");
/// ```
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with a fault record.
    Failure(Box<dyn Fault>),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::Outcome;
    ///
    /// let outcome = Outcome::ok(5);
    /// assert!(outcome.is_ok());
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome from any fault record.
    ///
    /// The open taxonomy entry point: any type implementing [`Fault`] can be
    /// attached, not just [`BasicFault`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::{BasicFault, FaultKind, Outcome};
    ///
    /// let fault = BasicFault::with_kind("stale snapshot", FaultKind::Warning);
    /// let outcome: Outcome<i32> = Outcome::err(fault);
    /// assert!(outcome.is_err());
    /// ```
    #[inline]
    pub fn err(fault: impl Fault) -> Self {
        Self::Failure(Box::new(fault))
    }

    /// Creates a failed outcome from a message.
    ///
    /// Synthesizes a [`BasicFault`] with the `Fatal` kind, timestamped now.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::{FaultKind, Outcome};
    ///
    /// let outcome: Outcome<i32> = Outcome::err_message("boom");
    /// assert_eq!(outcome.fault().kind(), FaultKind::Fatal);
    /// ```
    #[inline]
    pub fn err_message(message: impl Into<String>) -> Self {
        Self::err(BasicFault::new(message))
    }

    /// Creates a failed outcome from a message and a severity kind.
    #[inline]
    pub fn err_with_kind(message: impl Into<String>, kind: FaultKind) -> Self {
        Self::err(BasicFault::with_kind(message, kind))
    }

    /// Wraps a value in a successful outcome.
    ///
    /// Equivalent to [`ok`](Self::ok); provided for call sites written in
    /// lifting style. See also the [`Lift`] extension trait.
    #[inline]
    pub fn lift(value: T) -> Self {
        Self::ok(value)
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if the outcome holds a value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a fault.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// Calling this on a failure is a contract violation. The panic message
    /// carries the wrapped fault's message for diagnosability, and the panic
    /// is never caught inside this library. Callers that cannot guarantee
    /// success should use [`success_ref`](Self::success_ref) or a combinator
    /// instead.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::Outcome;
    ///
    /// assert_eq!(Outcome::ok(5).value(), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => panic!(
                "called `Outcome::value()` on a failed outcome: {}",
                fault.message()
            ),
        }
    }

    /// Returns the fault record, consuming the outcome.
    ///
    /// Calling this on a success is a contract violation, signaled distinctly
    /// from the [`value`](Self::value) misuse and never caught inside this
    /// library.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::err_message("boom");
    /// assert_eq!(outcome.fault().message(), "boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn fault(self) -> Box<dyn Fault> {
        match self {
            Self::Success(_) => {
                panic!("called `Outcome::fault()` on a successful outcome")
            }
            Self::Failure(fault) => fault,
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the fault record if present.
    #[inline]
    pub fn failure_ref(&self) -> Option<&dyn Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault.as_ref()),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// The functor form: a failure propagates its fault untouched and
    /// `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::Outcome;
    ///
    /// assert_eq!(Outcome::ok(5).map(|n| n * 2).value(), 10);
    ///
    /// let failed: Outcome<i32> = Outcome::err_message("boom");
    /// assert!(failed.map(|n| n * 2).is_err());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Sequentially composes two fallible operations.
    ///
    /// The monadic form: applies `function` to the success value, flattening
    /// the result; a failure short-circuits without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::Outcome;
    ///
    /// fn positive(n: i32) -> Outcome<i32> {
    ///     if n > 0 {
    ///         Outcome::ok(n)
    ///     } else {
    ///         Outcome::err_message("not positive")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(5).flat_map(positive).value(), 5);
    /// assert!(Outcome::ok(-5).flat_map(positive).is_err());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map) to match Rust's naming
    /// conventions.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.flat_map(function)
    }

    /// Sequences two dependent fallible steps and combines their results.
    ///
    /// Runs `arrow` on the success value, then feeds both the original value
    /// and the arrow's result to `projection`. The first failure encountered
    /// short-circuits; `projection` runs only when both steps succeed.
    ///
    /// Satisfies the comprehension desugaring:
    /// `a.flat_map_with(f, g) == a.flat_map(|x| f(x.clone()).map(|y| g(x, y)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::Outcome;
    ///
    /// let combined = Outcome::ok(2).flat_map_with(
    ///     |x| Outcome::ok(x + 1),
    ///     |x, y| x + y,
    /// );
    /// assert_eq!(combined.value(), 5);
    /// ```
    #[inline]
    pub fn flat_map_with<U, P, F, G>(self, arrow: F, projection: G) -> Outcome<P>
    where
        T: Clone,
        F: FnOnce(T) -> Outcome<U>,
        G: FnOnce(T, U) -> P,
    {
        self.flat_map(|value| arrow(value.clone()).map(|inner| projection(value, inner)))
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Demotes the outcome to a [`Maybe`], discarding the fault.
    ///
    /// For callers crossing from the typed-error channel into the plain
    /// absence channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::{Maybe, Outcome};
    ///
    /// assert_eq!(Outcome::ok(5).to_maybe(), Maybe::just(5));
    /// assert_eq!(Outcome::<i32>::err_message("boom").to_maybe(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Lifting Extension
// =============================================================================

/// Extension trait wrapping any value in a successful [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use fallible::value::{Lift, Outcome};
///
/// let outcome: Outcome<i32> = 5.lift();
/// assert_eq!(outcome.value(), 5);
/// ```
pub trait Lift: Sized {
    /// Wraps the value in a successful [`Outcome`].
    fn lift(self) -> Outcome<Self>;
}

impl<T> Lift for T {
    #[inline]
    fn lift(self) -> Outcome<Self> {
        Outcome::ok(self)
    }
}

// =============================================================================
// Equality
// =============================================================================

impl<T: PartialEq> PartialEq for Outcome<T> {
    /// Successes compare by value; failures compare by fault message and
    /// kind. Timestamps are creation instants and excluded from equality.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Success(a), Self::Success(b)) => a == b,
            (Self::Failure(a), Self::Failure(b)) => {
                a.message() == b.message() && a.kind() == b.kind()
            }
            _ => false,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(fault) => formatter.debug_tuple("Failure").field(fault).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E: Fault> From<Result<T, E>> for Outcome<T> {
    /// Converts a `Result` whose error type is a fault record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::{BasicFault, Outcome};
    ///
    /// let result: Result<i32, BasicFault> = Err(BasicFault::new("boom"));
    /// let outcome = Outcome::from(result);
    /// assert!(outcome.is_err());
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(fault) => Self::err(fault),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Box<dyn Fault>> {
    /// Converts into a plain `Result` for interoperation with `?`-style
    /// code.
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(fault) => Err(fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ok_outcome_is_ok() {
        let outcome = Outcome::ok(5);
        assert!(outcome.is_ok());
        assert!(!outcome.is_err());
    }

    #[rstest]
    fn err_outcome_is_err() {
        let outcome: Outcome<i32> = Outcome::err_message("boom");
        assert!(outcome.is_err());
        assert!(!outcome.is_ok());
    }

    #[rstest]
    fn lift_wraps_in_success() {
        let outcome: Outcome<&str> = "hello".lift();
        assert_eq!(outcome.value(), "hello");
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let outcome = Outcome::from(Ok::<_, BasicFault>(42));
        let result: Result<i32, Box<dyn Fault>> = outcome.into();
        assert_eq!(result.map_err(|fault| fault.message().to_string()), Ok(42));
    }

    #[rstest]
    fn debug_formats_both_variants() {
        assert_eq!(format!("{:?}", Outcome::ok(1)), "Success(1)");
        let failed: Outcome<i32> = Outcome::err_message("boom");
        assert!(format!("{failed:?}").starts_with("Failure"));
    }
}
