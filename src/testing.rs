//! Assertions for test suites of code that reports validation errors.

use std::error::Error as StdError;

use crate::classify::is_validation_error;

/// The two capabilities [`must_be_field_error`] needs from a test framework.
pub trait FailureReporter {
    /// Marks the calling function as a helper frame, so the framework can
    /// attribute failures to the caller.
    fn mark_helper_frame(&mut self);

    fn report_failure(&mut self, message: String);
}

/// Checks that `err` is a validation error mentioning `[<field>]`.
///
/// Reports at most one failure: the first failing check wins. Failures are
/// attributed to the caller when the reporter tracks caller locations.
#[track_caller]
pub fn must_be_field_error<R>(
    reporter: &mut R,
    err: Option<&(dyn StdError + 'static)>,
    field: &str,
) where
    R: FailureReporter + ?Sized,
{
    reporter.mark_helper_frame();
    let failure = match err {
        None => Some(format!(
            "should return validation error for field [{field}], got none"
        )),
        Some(err) if !is_validation_error(err) => {
            Some(format!("must be validation error, got: {err}"))
        }
        Some(err) => {
            let rendered = err.to_string();
            (!rendered.contains(&format!("[{field}]")))
                .then(|| format!("should mention [{field}] field, got: {rendered}"))
        }
    };
    if let Some(message) = failure {
        tracing::debug!(field, %message, "field error assertion failed");
        reporter.report_failure(message);
    }
}

/// Keeps every call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub helper_frames: usize,
    pub failures: Vec<String>,
}

impl FailureReporter for RecordingReporter {
    fn mark_helper_frame(&mut self) {
        self.helper_frames += 1;
    }

    fn report_failure(&mut self, message: String) {
        self.failures.push(message);
    }
}

/// Fails the running `#[test]` by panicking on the first reported failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl FailureReporter for PanicReporter {
    fn mark_helper_frame(&mut self) {}

    #[track_caller]
    #[expect(
        clippy::panic,
        reason = "the test harness reports failures through panics"
    )]
    fn report_failure(&mut self, message: String) {
        panic!("{message}");
    }
}
