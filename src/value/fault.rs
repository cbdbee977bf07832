//! Fault taxonomy - the typed error channel carried by [`Outcome`].
//!
//! A fault is a small data record describing an expected failure: when it
//! happened, what went wrong, how severe it is, and (optionally) the lower
//! level error it wraps. The taxonomy is open: [`Fault`] is a capability
//! contract, not a concrete type, so domains can attach richer payloads as
//! long as they expose the four capabilities.
//!
//! [`BasicFault`] is the default record synthesized by
//! [`Outcome::err_message`] and friends.
//!
//! # Examples
//!
//! ```rust
//! use fallible::value::{BasicFault, Fault, FaultKind};
//!
//! let mut fault = BasicFault::new("connection refused");
//! assert_eq!(fault.kind(), FaultKind::Fatal);
//!
//! fault.set_kind(FaultKind::Warning);
//! fault.set_message("connection refused, retrying");
//! assert_eq!(fault.message(), "connection refused, retrying");
//! ```
//!
//! [`Outcome`]: crate::value::Outcome
//! [`Outcome::err_message`]: crate::value::Outcome::err_message

use std::error::Error as StdError;
use std::fmt;

use chrono::{DateTime, Utc};

/// Advisory severity classification attached to a fault record.
///
/// The kind is informational metadata for downstream handling and logging
/// layers; it never changes how a failure propagates through combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaultKind {
    /// The operation cannot meaningfully continue.
    #[default]
    Fatal,
    /// The operation failed but the surrounding computation may proceed.
    Warning,
    /// The failure is purely informational.
    Info,
}

/// Capability contract satisfied by every fault record.
///
/// Any concrete error representation can participate in the [`Outcome`]
/// error channel by exposing these four capabilities. Dispatch is
/// interface-shaped: `Outcome` stores faults as `Box<dyn Fault>` and never
/// depends on a concrete type.
///
/// The `Send + Sync + 'static` supertraits let faults cross thread
/// boundaries; `Debug` and `Display` make them loggable.
///
/// # Examples
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use fallible::value::{Fault, FaultKind};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct ParseFault {
///     at: DateTime<Utc>,
///     line: usize,
/// }
///
/// impl fmt::Display for ParseFault {
///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(formatter, "parse failure at line {}", self.line)
///     }
/// }
///
/// impl Fault for ParseFault {
///     fn timestamp(&self) -> DateTime<Utc> {
///         self.at
///     }
///
///     fn message(&self) -> &str {
///         "parse failure"
///     }
///
///     fn kind(&self) -> FaultKind {
///         FaultKind::Fatal
///     }
///
///     fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
///         None
///     }
/// }
/// ```
///
/// [`Outcome`]: crate::value::Outcome
pub trait Fault: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The instant the fault was recorded.
    ///
    /// Fixed at construction; implementations must never mutate it.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Human-readable description of the failure.
    fn message(&self) -> &str;

    /// Advisory severity of the fault.
    fn kind(&self) -> FaultKind;

    /// The underlying failure this fault wraps, when one exists.
    fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)>;
}

/// The default concrete fault record.
///
/// Carries the four fields of the fault contract. The timestamp is captured
/// with [`Utc::now`] at construction and has no setter; message, kind, and
/// cause may be adjusted by the constructing code before the fault is
/// attached to an [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use fallible::value::{BasicFault, Fault, FaultKind};
///
/// let fault = BasicFault::with_kind("index out of range", FaultKind::Warning);
/// assert_eq!(fault.message(), "index out of range");
/// assert_eq!(fault.kind(), FaultKind::Warning);
/// assert!(fault.cause().is_none());
/// ```
///
/// [`Outcome`]: crate::value::Outcome
#[derive(Debug)]
pub struct BasicFault {
    timestamp: DateTime<Utc>,
    message: String,
    kind: FaultKind,
    cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl BasicFault {
    /// Creates a fault with the given message and the `Fatal` kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::{BasicFault, Fault, FaultKind};
    ///
    /// let fault = BasicFault::new("boom");
    /// assert_eq!(fault.message(), "boom");
    /// assert_eq!(fault.kind(), FaultKind::Fatal);
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(message, FaultKind::Fatal)
    }

    /// Creates a fault with the given message and kind.
    pub fn with_kind(message: impl Into<String>, kind: FaultKind) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
            kind,
            cause: None,
        }
    }

    /// Attaches an underlying error, builder style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::value::{BasicFault, Fault};
    ///
    /// let io_error = std::io::Error::other("disk on fire");
    /// let fault = BasicFault::new("snapshot failed").with_cause(io_error);
    /// assert!(fault.cause().is_some());
    /// ```
    #[must_use]
    pub fn with_cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Replaces the message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Replaces the kind.
    pub fn set_kind(&mut self, kind: FaultKind) {
        self.kind = kind;
    }

    /// Replaces the underlying error.
    pub fn set_cause(&mut self, cause: impl StdError + Send + Sync + 'static) {
        self.cause = Some(Box::new(cause));
    }
}

impl Default for BasicFault {
    /// An uninitialized fault: `Fatal` kind and a placeholder message.
    fn default() -> Self {
        Self::new("fault message not initialized")
    }
}

impl Fault for BasicFault {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> FaultKind {
        self.kind
    }

    fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for BasicFault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl StdError for BasicFault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}
