use crate::core::errors::{ErrorReport, TelemetryError, TelemetrySink};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Telemetry sink that keeps every delivered report in memory.
///
/// Perfect for tests: no Discord connection needed, and the delivered
/// reports can be inspected afterwards.
pub struct InMemoryTelemetrySink {
    reports: Mutex<Vec<ErrorReport>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl InMemoryTelemetrySink {
    pub fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// A sink whose channel can never be resolved.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn delivered(&self) -> Vec<ErrorReport> {
        self.reports.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TelemetrySink for InMemoryTelemetrySink {
    async fn deliver(&self, report: &ErrorReport) -> Result<(), TelemetryError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TelemetryError::Unresolvable(0, "in-memory sink set to fail".into()));
        }
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{ErrorCategory, TruncationLimits};

    #[tokio::test]
    async fn test_in_memory_sink_records_reports() {
        let sink = InMemoryTelemetrySink::new();
        let report = ErrorReport::new(
            ErrorCategory::Command,
            "boom",
            None,
            &TruncationLimits::default(),
        );

        sink.deliver(&report).await.unwrap();
        sink.deliver(&report).await.unwrap();

        assert_eq!(sink.delivered().len(), 2);
        assert_eq!(sink.attempts(), 2);
    }
}
