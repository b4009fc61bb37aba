// This is the entry point of the Discord bot.
//
// **Architecture Overview:**
// - `core/` = Error normalization, module metadata, feature logic (platform-agnostic)
// - `infra/` = Implementations of core traits (the Discord telemetry channel)
// - `discord/` = Discord-specific adapters (feature modules, commands, error routing)
//
// This file's job is to:
// 1. Load configuration
// 2. Register feature modules
// 3. Initialize services (dependency injection)
// 4. Set up the Discord framework

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::config::BotConfig;
use crate::core::errors::ErrorService;
use crate::core::payments::PaymentService;
use crate::core::suggestions::SuggestionService;
use crate::core::timezones::TimezoneService;
use crate::discord::commands::{feature_modules, presence};
use crate::discord::modules::ModuleRegistry;
use crate::discord::{Data, Error};
use crate::infra::telemetry::DiscordChannelSink;
use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

/// Event handler for non-command Discord events.
/// Anything returned as `Err` here ends up in the event-error listener.
async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            tracing::info!(
                "Connected as {} in {} guilds",
                data_about_bot.user.name,
                data_about_bot.guilds.len()
            );
        }
        serenity::FullEvent::GuildCreate { guild, is_new } => {
            if is_new.unwrap_or(false) {
                tracing::info!(guild_id = guild.id.get(), "Joined guild {}", guild.name);
            }
        }
        _ => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let config = Arc::new(BotConfig::from_env().context("Failed to load configuration")?);
    if config.telemetry_channel_id.is_none() {
        tracing::warn!("ERROR_CHANNEL_ID is not set, error reports will only be logged locally");
    }

    // ========================================================================
    // FEATURE MODULES
    // ========================================================================
    // Each module hands its commands to the registry, which installs the
    // shared error wrapper on every one of them.

    let mut registry = ModuleRegistry::new();
    for module in feature_modules() {
        registry
            .register(module)
            .with_context(|| format!("Failed to register module `{}`", module.name()))?;
    }
    // Disabled modules are unloaded after the fact so companions still resolve,
    // and anything forwarding to them falls back to its placeholder reply.
    for name in &config.disabled_modules {
        if registry.teardown(name) {
            tracing::info!(module = %name, "Module disabled by configuration");
        } else {
            tracing::warn!(module = %name, "DISABLED_MODULES names an unknown module");
        }
    }
    let help_index = Arc::new(registry.help_index());
    let forwarding = registry.forwarding();
    let commands = registry.into_commands();

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let timezone_service = Arc::new(TimezoneService::new(config.display_timezone));
    let payment_service = Arc::new(PaymentService::new(config.payments.clone()));
    let suggestion_service = Arc::new(SuggestionService::new());

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required for prefix commands
        | serenity::GatewayIntents::GUILDS;

    let setup_config = Arc::clone(&config);
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands,
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                ..Default::default()
            },
            // Catches anything that isn't tied to a single command (event errors, setup)
            on_error: |error| Box::pin(discord::errors::on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                tracing::info!("🤖 Bot is starting up...");

                match setup_config.dev_guild_id {
                    // Guild registration is instant, handy while developing
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?
                    }
                }
                tracing::info!("✅ Commands registered!");

                presence::on_ready(ctx);

                let sink = DiscordChannelSink::new(
                    ctx.http.clone(),
                    setup_config.telemetry_channel_id,
                    Arc::clone(&timezone_service),
                );
                let errors = Arc::new(ErrorService::new(Arc::new(sink), setup_config.limits));

                tracing::info!("🚀 Bot is ready!");

                Ok(Data {
                    config: setup_config,
                    errors,
                    timezones: timezone_service,
                    payments: payment_service,
                    suggestions: suggestion_service,
                    forwarding,
                    help_index,
                })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;

    Ok(())
}
