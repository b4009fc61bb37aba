// The core module contains all platform-agnostic logic.
// Each feature gets its own submodule.

#[path = "config/bot_config.rs"]
pub mod config;

#[path = "errors/mod.rs"]
pub mod errors;

#[path = "modules/mod.rs"]
pub mod modules;

#[path = "payments/payment_service.rs"]
pub mod payments;

#[path = "suggestions/suggestion_service.rs"]
pub mod suggestions;

#[path = "timezones/timezone_service.rs"]
pub mod timezones;
