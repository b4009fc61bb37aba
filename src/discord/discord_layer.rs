// Discord layer - feature modules, their commands, and error routing.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "errors/mod.rs"]
pub mod errors;

#[path = "modules/mod.rs"]
pub mod modules;

use crate::core::config::BotConfig;
use crate::core::errors::ErrorService;
use crate::core::modules::{ForwardingTable, HelpEntry};
use crate::core::payments::PaymentService;
use crate::core::suggestions::SuggestionService;
use crate::core::timezones::TimezoneService;
use modules::ForwardableCommand;
use std::sync::Arc;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Data that's shared across all commands.
/// Everything is built once in `main` and handed to poise; nothing here is
/// looked up from global state.
pub struct Data {
    pub config: Arc<BotConfig>,
    pub errors: Arc<ErrorService>,
    pub timezones: Arc<TimezoneService>,
    pub payments: Arc<PaymentService>,
    pub suggestions: Arc<SuggestionService>,
    pub forwarding: Arc<ForwardingTable<dyn ForwardableCommand>>,
    pub help_index: Arc<Vec<HelpEntry>>,
}
