// Error drills: deliberate failures operators trigger to check that the
// telemetry channel is wired up. Each drill exercises one report category.

use super::error_service::ErrorService;
use thiserror::Error;

pub const TEST_TABLE: &str = "test_table";
pub const TEST_EVENT: &str = "on_test_event";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDrill {
    Command,
    Database,
    Event,
    Custom,
}

#[derive(Debug, Error)]
pub enum DrillError {
    #[error("This is a test command error!")]
    TestCommandError,
}

impl ErrorService {
    /// Run a drill. `Command` fails on purpose so the command error path
    /// handles it; every other drill reports directly and returns the reply.
    pub async fn run_drill(&self, drill: ErrorDrill) -> Result<&'static str, DrillError> {
        match drill {
            ErrorDrill::Command => Err(DrillError::TestCommandError),
            ErrorDrill::Database => {
                let report = self.database_report(
                    "This is a test database error!",
                    "SELECT",
                    TEST_TABLE,
                    Some("Triggered by /testerror"),
                );
                self.dispatch(report).await;
                Ok("✅ Database error test logged!")
            }
            ErrorDrill::Event => {
                let report = self.event_report(
                    TEST_EVENT,
                    "This is a test event error!",
                    &["drill=true".to_string()],
                );
                self.dispatch(report).await;
                Ok("✅ Event error test logged!")
            }
            ErrorDrill::Custom => {
                let report = self.custom_report(
                    "Custom Error Test",
                    "This is a test custom error!",
                    Some("Triggered by /testerror"),
                );
                self.dispatch(report).await;
                Ok("✅ Custom error test logged!")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{CommandFailure, ErrorCategory, Invocation, TruncationLimits};
    use crate::infra::telemetry::in_memory::InMemoryTelemetrySink;
    use std::sync::Arc;

    fn service_with_sink() -> (ErrorService, Arc<InMemoryTelemetrySink>) {
        let sink = Arc::new(InMemoryTelemetrySink::new());
        let service = ErrorService::new(sink.clone(), TruncationLimits::default());
        (service, sink)
    }

    #[tokio::test]
    async fn test_database_drill_logs_one_report() {
        let (service, sink) = service_with_sink();

        let reply = service.run_drill(ErrorDrill::Database).await.unwrap();
        assert_eq!(reply, "✅ Database error test logged!");

        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 1);
        match &delivered[0].category {
            ErrorCategory::Database { table, .. } => assert_eq!(table, "test_table"),
            other => panic!("unexpected category {:?}", other),
        }
        assert!(delivered[0].context.as_deref().unwrap().contains("Table: test_table"));
    }

    #[tokio::test]
    async fn test_command_drill_is_caught_by_normalizer() {
        let (service, sink) = service_with_sink();

        let err = service.run_drill(ErrorDrill::Command).await.unwrap_err();
        assert_eq!(sink.delivered().len(), 0);

        let invocation = Invocation {
            command: "testerror".to_string(),
            invoker: "admin (7)".to_string(),
            channel: Some("#ops".to_string()),
        };
        let outcome =
            service.normalize_command_failure(&invocation, CommandFailure::execution(&err));
        assert!(outcome.reply.contains("This is a test command error!"));

        let report = outcome.report.unwrap();
        assert_eq!(report.category, ErrorCategory::Command);
        service.dispatch(report).await;

        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 1);
        assert!(delivered[0].message.contains("This is a test command error!"));
    }

    #[tokio::test]
    async fn test_event_and_custom_drills_report() {
        let (service, sink) = service_with_sink();

        service.run_drill(ErrorDrill::Event).await.unwrap();
        service.run_drill(ErrorDrill::Custom).await.unwrap();

        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].category, ErrorCategory::Event);
        assert!(delivered[0]
            .context
            .as_deref()
            .unwrap()
            .contains("Event: on_test_event"));
        assert_eq!(delivered[1].title, "🚨 Custom Error Test");
    }
}
