// Error telemetry domain models.
//
// Everything here is plain data: no Discord types, no I/O. The discord layer
// turns framework errors into a `CommandFailure`, the core turns that into a
// reply plus an optional `ErrorReport`, and a `TelemetrySink` ships the report.

use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TITLE_LIMIT: usize = 256;
pub const DEFAULT_DETAILS_LIMIT: usize = 1000;
pub const DEFAULT_CONTEXT_LIMIT: usize = 1000;
pub const DEFAULT_ARGS_LIMIT: usize = 500;

/// Character caps applied to everything that ends up in a telemetry embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationLimits {
    pub title: usize,
    pub details: usize,
    pub context: usize,
    pub args: usize,
}

impl Default for TruncationLimits {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_LIMIT,
            details: DEFAULT_DETAILS_LIMIT,
            context: DEFAULT_CONTEXT_LIMIT,
            args: DEFAULT_ARGS_LIMIT,
        }
    }
}

/// Keep at most `cap` characters (not bytes) of `text`.
pub fn truncate_chars(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Render an error and its `source()` chain, outermost first.
pub fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(&format!("\nCaused by: {}", cause));
        source = cause.source();
    }
    rendered
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Command,
    Event,
    Database { operation: String, table: String },
    Custom { title: String },
}

impl ErrorCategory {
    pub fn label(&self) -> &str {
        match self {
            ErrorCategory::Command => "Command Error",
            ErrorCategory::Event => "Event Error",
            ErrorCategory::Database { .. } => "Database Error",
            ErrorCategory::Custom { title } => title,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single failure, ready to be delivered once and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub category: ErrorCategory,
    pub title: String,
    pub message: String,
    pub context: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorReport {
    pub fn new(
        category: ErrorCategory,
        message: &str,
        context: Option<&str>,
        limits: &TruncationLimits,
    ) -> Self {
        let title = truncate_chars(&format!("🚨 {}", category.label()), limits.title);
        Self {
            category,
            title,
            message: truncate_chars(message, limits.details),
            context: context.map(|ctx| truncate_chars(ctx, limits.context)),
            timestamp: Utc::now(),
        }
    }
}

/// Who ran a command and where. Used as the context block of command reports.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: String,
    pub invoker: String,
    pub channel: Option<String>,
}

impl Invocation {
    pub fn describe(&self) -> String {
        let channel = self.channel.as_deref().unwrap_or("Direct Message");
        format!(
            "Command: /{}\nUser: {}\nChannel: {}",
            self.command, self.invoker, channel
        )
    }
}

/// Framework-independent classification of a failed command.
#[derive(Debug, Clone)]
pub enum CommandFailure {
    MissingPermissions,
    Cooldown { remaining: Duration },
    Execution { message: String, trace: String },
}

impl CommandFailure {
    pub fn execution(error: &(dyn std::error::Error + 'static)) -> Self {
        CommandFailure::Execution {
            message: error.to_string(),
            trace: error_chain(error),
        }
    }

    /// Only execution failures end up in a telemetry report.
    pub fn is_reported(&self) -> bool {
        matches!(self, CommandFailure::Execution { .. })
    }
}

/// What the error layer decided: always one reply, at most one report.
#[derive(Debug, Clone)]
pub struct NormalizedFailure {
    pub reply: String,
    pub report: Option<ErrorReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("inner failure")]
    struct Inner;

    #[test]
    fn test_truncate_chars_is_exact_prefix() {
        let long = "x".repeat(1500);
        let cut = truncate_chars(&long, 1000);
        assert_eq!(cut.chars().count(), 1000);
        assert!(long.starts_with(&cut));

        // Idempotent under re-truncation
        assert_eq!(truncate_chars(&cut, 1000), cut);
    }

    #[test]
    fn test_truncate_chars_respects_multibyte() {
        let text = "é".repeat(10);
        assert_eq!(truncate_chars(&text, 3), "ééé");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = Outer(Inner);
        assert_eq!(error_chain(&err), "outer failure\nCaused by: inner failure");
    }

    #[test]
    fn test_report_applies_limits() {
        let limits = TruncationLimits {
            title: 10,
            details: 5,
            context: 4,
            args: 3,
        };
        let report = ErrorReport::new(
            ErrorCategory::Custom {
                title: "A very long custom title".to_string(),
            },
            "abcdefghij",
            Some("0123456789"),
            &limits,
        );

        assert_eq!(report.title.chars().count(), 10);
        assert_eq!(report.message, "abcde");
        assert_eq!(report.context.as_deref(), Some("0123"));
    }

    #[test]
    fn test_only_execution_failures_are_reported() {
        assert!(!CommandFailure::MissingPermissions.is_reported());
        assert!(!CommandFailure::Cooldown {
            remaining: Duration::from_secs(3)
        }
        .is_reported());
        assert!(CommandFailure::Execution {
            message: "boom".to_string(),
            trace: "boom".to_string(),
        }
        .is_reported());
    }

    #[test]
    fn test_invocation_falls_back_to_dm() {
        let invocation = Invocation {
            command: "suggest".to_string(),
            invoker: "alice (1)".to_string(),
            channel: None,
        };
        assert!(invocation.describe().contains("Channel: Direct Message"));
    }
}
