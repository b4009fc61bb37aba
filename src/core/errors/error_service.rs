// Error normalization and telemetry dispatch.
//
// **Pattern:**
// 1. The discord layer classifies a framework error into a `CommandFailure`
// 2. `normalize_command_failure` picks the reply and (maybe) builds a report
// 3. `dispatch` hands the report to the sink and swallows any delivery error
//
// Nothing in here ever returns an error to its caller. This is the last stop.

use super::error_models::{
    truncate_chars, CommandFailure, ErrorCategory, ErrorReport, Invocation, NormalizedFailure,
    TruncationLimits,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub const PERMISSION_DENIED_REPLY: &str = "❌ You don't have permission to use this command.";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("No telemetry channel is configured")]
    NotConfigured,

    #[error("Telemetry channel {0} could not be resolved: {1}")]
    Unresolvable(u64, String),

    #[error("Telemetry channel {0} cannot receive messages")]
    NotMessageCapable(u64),

    #[error("Failed to send telemetry message: {0}")]
    Send(String),
}

/// Where error reports go. Resolved at send time, never cached by the core.
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    async fn deliver(&self, report: &ErrorReport) -> Result<(), TelemetryError>;
}

pub struct ErrorService {
    sink: Arc<dyn TelemetrySink>,
    limits: TruncationLimits,
}

impl ErrorService {
    pub fn new(sink: Arc<dyn TelemetrySink>, limits: TruncationLimits) -> Self {
        Self { sink, limits }
    }

    /// Turn a failed command into exactly one reply and at most one report.
    pub fn normalize_command_failure(
        &self,
        invocation: &Invocation,
        failure: CommandFailure,
    ) -> NormalizedFailure {
        match failure {
            CommandFailure::MissingPermissions => NormalizedFailure {
                reply: PERMISSION_DENIED_REPLY.to_string(),
                report: None,
            },
            CommandFailure::Cooldown { remaining } => NormalizedFailure {
                reply: format!(
                    "⏳ This command is on cooldown. Try again in {:.1} seconds.",
                    remaining.as_secs_f64()
                ),
                report: None,
            },
            CommandFailure::Execution { message, trace } => {
                let report = ErrorReport::new(
                    ErrorCategory::Command,
                    &trace,
                    Some(&invocation.describe()),
                    &self.limits,
                );
                NormalizedFailure {
                    reply: format!("❌ An error occurred: {}", message),
                    report: Some(report),
                }
            }
        }
    }

    /// Build the report for an error raised while dispatching a gateway event.
    pub fn event_report(&self, event_name: &str, trace: &str, args: &[String]) -> ErrorReport {
        let mut context = format!("Event: {}", event_name);
        if !args.is_empty() {
            let dump = truncate_chars(&args.join(", "), self.limits.args);
            context.push_str(&format!("\nArgs: {}", dump));
        }
        ErrorReport::new(ErrorCategory::Event, trace, Some(&context), &self.limits)
    }

    pub fn database_report(
        &self,
        error: &str,
        operation: &str,
        table: &str,
        extra_context: Option<&str>,
    ) -> ErrorReport {
        let mut context = format!("Operation: {}\nTable: {}", operation, table);
        if let Some(extra) = extra_context {
            context.push('\n');
            context.push_str(extra);
        }
        ErrorReport::new(
            ErrorCategory::Database {
                operation: operation.to_string(),
                table: table.to_string(),
            },
            error,
            Some(&context),
            &self.limits,
        )
    }

    pub fn custom_report(&self, title: &str, message: &str, context: Option<&str>) -> ErrorReport {
        ErrorReport::new(
            ErrorCategory::Custom {
                title: title.to_string(),
            },
            message,
            context,
            &self.limits,
        )
    }

    /// Deliver a report once. Failures are logged and dropped.
    pub async fn dispatch(&self, report: ErrorReport) {
        match self.sink.deliver(&report).await {
            Ok(()) => tracing::debug!(category = %report.category, "Error report delivered"),
            Err(TelemetryError::NotConfigured) => {
                tracing::warn!(
                    category = %report.category,
                    "Dropping error report, no telemetry channel configured: {}",
                    report.message
                );
            }
            Err(e) => {
                tracing::error!(category = %report.category, "Failed to deliver error report: {}", e);
            }
        }
    }

    /// Fire-and-forget variant of `dispatch` for use inside error handlers.
    pub fn dispatch_detached(self: &Arc<Self>, report: ErrorReport) {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            service.dispatch(report).await;
        });
    }
}
