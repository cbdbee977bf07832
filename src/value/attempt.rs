//! Asynchronous attempt helpers.
//!
//! These helpers await a supplied asynchronous computation and convert its
//! outcome into a [`Maybe`], swallowing failure into absence. The wrapped
//! computation always runs to completion (success or failure) before the
//! `Maybe` is produced; dropping the returned future drops the inner future
//! with it, so cancellation can never expose a partially-constructed value.
//!
//! No executor is bundled: the helpers are plain `async fn`s and run on
//! whatever runtime awaits them.
//!
//! # Examples
//!
//! ```rust
//! use fallible::value::{Maybe, attempt_async};
//!
//! # async fn example() {
//! async fn fetch_quota(user: &str) -> Result<u32, String> {
//!     if user.is_empty() {
//!         Err("unknown user".to_string())
//!     } else {
//!         Ok(42)
//!     }
//! }
//!
//! let quota = attempt_async(|| fetch_quota("alice"), |_error| {}).await;
//! assert_eq!(quota, Maybe::just(42));
//!
//! let mut seen = None;
//! let missing = attempt_async(|| fetch_quota(""), |error| seen = Some(error)).await;
//! assert_eq!(missing, Maybe::nothing());
//! assert_eq!(seen.as_deref(), Some("unknown user"));
//! # }
//! ```

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use super::maybe::Maybe;

/// Attempts an asynchronous fallible computation.
///
/// Invokes `attempt` to obtain the future, awaits it to completion, and
/// converts `Ok` into `Just`. On `Err` the error is handed to
/// `handle_error` first, then `Nothing` is returned; the error itself is
/// not carried by the `Maybe`.
///
/// # Examples
///
/// ```rust
/// use fallible::value::{Maybe, attempt_async};
///
/// # async fn example() {
/// let parsed = attempt_async(
///     || async { "42".parse::<i32>().map_err(|e| e.to_string()) },
///     |error| eprintln!("parse failed: {error}"),
/// )
/// .await;
/// assert_eq!(parsed, Maybe::just(42));
/// # }
/// ```
pub async fn attempt_async<T, E, F, Fut, H>(attempt: F, handle_error: H) -> Maybe<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(E),
{
    match attempt().await {
        Ok(value) => Maybe::Just(value),
        Err(error) => {
            handle_error(error);
            Maybe::Nothing
        }
    }
}

/// Attempts an asynchronous computation, converting a panic into `Nothing`.
///
/// The asynchronous counterpart of [`Maybe::attempt`]: a panic raised while
/// constructing or polling the computation is caught and discarded. Failure
/// information does not survive; computations with meaningful errors should
/// go through [`attempt_async`] instead.
///
/// # Examples
///
/// ```rust
/// use fallible::value::{Maybe, attempt_async_unwind};
///
/// # async fn example() {
/// let value = attempt_async_unwind(|| async { 21 * 2 }).await;
/// assert_eq!(value, Maybe::just(42));
///
/// let empty: Vec<i32> = Vec::new();
/// let crashed = attempt_async_unwind(move || async move { empty[3] }).await;
/// assert_eq!(crashed, Maybe::nothing());
/// # }
/// ```
pub async fn attempt_async_unwind<T, F, Fut>(attempt: F) -> Maybe<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let guarded = AssertUnwindSafe(async move { attempt().await });
    match guarded.catch_unwind().await {
        Ok(value) => Maybe::Just(value),
        Err(_) => Maybe::Nothing,
    }
}
