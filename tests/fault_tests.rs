//! Unit tests for the fault taxonomy.
//!
//! Covers the `BasicFault` record (construction, mutation, the immutable
//! timestamp), the `Fault` capability contract implemented by a custom
//! record, and the interplay with `Outcome`'s error channel.

use chrono::{DateTime, Utc};
use fallible::value::{BasicFault, Fault, FaultKind, Outcome};
use rstest::rstest;
use std::fmt;

// =============================================================================
// BasicFault Record
// =============================================================================

#[rstest]
fn new_defaults_to_fatal() {
    let fault = BasicFault::new("boom");
    assert_eq!(fault.message(), "boom");
    assert_eq!(fault.kind(), FaultKind::Fatal);
    assert!(fault.cause().is_none());
}

#[rstest]
fn default_record_is_uninitialized_and_fatal() {
    let fault = BasicFault::default();
    assert_eq!(fault.message(), "fault message not initialized");
    assert_eq!(fault.kind(), FaultKind::Fatal);
}

#[rstest]
fn mutation_leaves_the_timestamp_alone() {
    let mut fault = BasicFault::new("before");
    let recorded = fault.timestamp();

    fault.set_message("after");
    fault.set_kind(FaultKind::Warning);
    fault.set_cause(std::io::Error::other("underlying"));

    assert_eq!(fault.timestamp(), recorded);
    assert_eq!(fault.message(), "after");
    assert_eq!(fault.kind(), FaultKind::Warning);
    assert!(fault.cause().is_some());
}

#[rstest]
fn cause_is_reachable_through_the_error_trait() {
    let fault = BasicFault::new("outer").with_cause(std::io::Error::other("inner"));
    let source = std::error::Error::source(&fault).expect("cause attached");
    assert_eq!(source.to_string(), "inner");
}

#[rstest]
fn display_renders_the_message() {
    assert_eq!(BasicFault::new("boom").to_string(), "boom");
}

// =============================================================================
// FaultKind Metadata
// =============================================================================

#[rstest]
fn fault_kind_defaults_to_fatal() {
    assert_eq!(FaultKind::default(), FaultKind::Fatal);
}

#[rstest]
#[case(FaultKind::Fatal)]
#[case(FaultKind::Warning)]
#[case(FaultKind::Info)]
fn kind_is_advisory_and_never_changes_propagation(#[case] kind: FaultKind) {
    let outcome: Outcome<i32> = Outcome::err_with_kind("msg", kind);
    let mapped = outcome.map(|n| n + 1);
    assert!(mapped.is_err());
    assert_eq!(mapped.fault().kind(), kind);
}

// =============================================================================
// Open Taxonomy
// =============================================================================

#[derive(Debug)]
struct QuotaFault {
    at: DateTime<Utc>,
    limit: u32,
}

impl QuotaFault {
    fn new(limit: u32) -> Self {
        Self {
            at: Utc::now(),
            limit,
        }
    }
}

impl fmt::Display for QuotaFault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "quota of {} exceeded", self.limit)
    }
}

impl Fault for QuotaFault {
    fn timestamp(&self) -> DateTime<Utc> {
        self.at
    }

    fn message(&self) -> &str {
        "quota exceeded"
    }

    fn kind(&self) -> FaultKind {
        FaultKind::Warning
    }

    fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        None
    }
}

#[rstest]
fn custom_fault_records_participate_in_the_error_channel() {
    let outcome: Outcome<i32> = Outcome::err(QuotaFault::new(100));
    assert!(outcome.is_err());

    let fault = outcome.fault();
    assert_eq!(fault.message(), "quota exceeded");
    assert_eq!(fault.kind(), FaultKind::Warning);
    assert_eq!(format!("{fault}"), "quota of 100 exceeded");
}

#[rstest]
#[should_panic(expected = "quota exceeded")]
fn custom_fault_message_reaches_the_misuse_panic() {
    let outcome: Outcome<i32> = Outcome::err(QuotaFault::new(100));
    let _ = outcome.value();
}
