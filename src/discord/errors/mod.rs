// Error routing for the discord layer.
//
// `on_error` is installed both as the framework-wide handler and on every
// registered command, so every failure ends here and nowhere further.

pub mod command_errors;
pub mod event_errors;

use crate::core::errors::CommandFailure;
use crate::discord::{Data, Error};

pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            command_errors::route_failure(ctx, CommandFailure::execution(&*error)).await;
        }
        poise::FrameworkError::CooldownHit {
            remaining_cooldown,
            ctx,
            ..
        } => {
            command_errors::route_failure(
                ctx,
                CommandFailure::Cooldown {
                    remaining: remaining_cooldown,
                },
            )
            .await;
        }
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            command_errors::route_failure(ctx, CommandFailure::MissingPermissions).await;
        }
        poise::FrameworkError::EventHandler {
            error,
            event,
            framework,
            ..
        } => {
            event_errors::report_event_error(framework.user_data, event, &error).await;
        }
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to start bot: {}", error);
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling framework error: {}", e);
            }
        }
    }
}
