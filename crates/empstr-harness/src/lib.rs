//! Conformance testing harness for the EMP string utilities.
//!
//! This crate provides:
//! - Fixtures: JSON case sets describing inputs and expected outputs
//! - Execution: dispatch a fixture case to `empstr-core` and render the result
//! - Verification: compare actual against expected, with diffs
//! - Reports: markdown and JSON summaries
//! - Structured logging: one JSONL record per executed case

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
