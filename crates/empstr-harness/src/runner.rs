//! Test execution engine.

use std::io::Write;
use std::time::Instant;

use empstr_core::ParseMode;

use crate::diff;
use crate::exec::execute_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::report::ConformanceReport;
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, now_utc};
use crate::verify::{VerificationResult, VerificationSummary};

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Parse mode the numeric cases run under.
    pub mode: ParseMode,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: ParseMode) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
        }
    }

    /// Run every case applicable to this runner's mode.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        self.cases(fixture_set).map(|case| self.verify(case).0).collect()
    }

    /// Run like [`TestRunner::run`], emitting one log record per case.
    pub fn run_logged<W: Write>(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter<W>,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mut results = Vec::new();
        for case in self.cases(fixture_set) {
            let (result, errored, latency_ns) = self.verify(case);
            let outcome = match (errored, result.passed) {
                (true, _) => Outcome::Error,
                (false, true) => Outcome::Pass,
                (false, false) => Outcome::Fail,
            };
            let level = if outcome == Outcome::Pass {
                LogLevel::Info
            } else {
                LogLevel::Error
            };
            let mut entry = LogEntry::new("", level, "case_result")
                .with_mode(self.mode.as_str())
                .with_case(&case.name, &case.function)
                .with_outcome(outcome)
                .with_latency_ns(latency_ns);
            if !result.passed {
                entry = entry.with_details(serde_json::json!({
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            }
            log.emit_entry(entry)?;
            results.push(result);
        }
        log.flush()?;
        Ok(results)
    }

    /// Run the set and wrap the outcome in a report.
    #[must_use]
    pub fn report(&self, fixture_set: &FixtureSet) -> ConformanceReport {
        ConformanceReport {
            title: format!("{} ({})", self.campaign, fixture_set.family),
            mode: self.mode.as_str().to_string(),
            timestamp: now_utc(),
            summary: VerificationSummary::from_results(self.run(fixture_set)),
        }
    }

    fn cases<'a>(&self, fixture_set: &'a FixtureSet) -> impl Iterator<Item = &'a FixtureCase> {
        let mode = self.mode;
        fixture_set
            .cases
            .iter()
            .filter(move |case| mode_matches(mode, &case.mode))
    }

    fn verify(&self, case: &FixtureCase) -> (VerificationResult, bool, u64) {
        let started = Instant::now();
        let execution = execute_case(&case.function, &case.inputs, self.mode);
        let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

        let errored = execution.is_err();
        let actual = execution.unwrap_or_else(|err| format!("unsupported:{err}"));
        let passed = actual == case.expected_output;
        let diff = (!passed).then(|| diff::render_diff(&case.expected_output, &actual));
        let result = VerificationResult {
            case_name: case.name.clone(),
            function: case.function.clone(),
            section: case.section.clone(),
            passed,
            expected: case.expected_output.clone(),
            actual,
            diff,
        };
        (result, errored, latency_ns)
    }
}

fn mode_matches(active: ParseMode, case_mode: &str) -> bool {
    case_mode.eq_ignore_ascii_case("both") || case_mode.eq_ignore_ascii_case(active.as_str())
}
