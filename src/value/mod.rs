//! Core value algebra: optional values, fallible outcomes, and the fault
//! taxonomy they share.
//!
//! Two independent but structurally parallel components live here:
//!
//! - [`Maybe`]: zero or one value, no error payload
//! - [`Outcome`]: a value or a structured [`Fault`] record
//!
//! Both are immutable value types constructed only through factory
//! operations. Expected failure is always represented as data (`Nothing`,
//! `Failure`); panics are reserved for contract violations such as reading
//! the value of an absent or failed wrapper.
//!
//! All types here are side-effect-free values with no shared mutable state,
//! which makes them safe to move across threads whenever their payloads are.

mod fault;
mod maybe;
mod outcome;

#[cfg(feature = "async")]
mod attempt;

pub use fault::{BasicFault, Fault, FaultKind};
pub use maybe::Maybe;
pub use outcome::{Lift, Outcome};

#[cfg(feature = "async")]
pub use attempt::{attempt_async, attempt_async_unwind};

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Outcome<i32>: Send, Sync);
static_assertions::assert_impl_all!(BasicFault: Send, Sync);
