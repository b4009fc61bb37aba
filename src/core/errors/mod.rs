pub mod error_drills;
pub mod error_models;
pub mod error_service;

pub use error_drills::ErrorDrill;
pub use error_models::{
    error_chain, CommandFailure, ErrorCategory, ErrorReport, Invocation, TruncationLimits,
};
pub use error_service::{ErrorService, TelemetryError, TelemetrySink};
