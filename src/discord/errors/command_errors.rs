use crate::core::errors::{CommandFailure, Invocation};
use crate::discord::Context;
use poise::serenity_prelude as serenity;

/// Reply to the invoker and (for unexpected failures) ship a report.
///
/// The report is built before the reply goes out, but its delivery runs
/// detached so a slow telemetry channel never delays the user.
pub async fn route_failure(ctx: Context<'_>, failure: CommandFailure) {
    if let CommandFailure::Execution { message, .. } = &failure {
        tracing::error!(
            command = %ctx.command().qualified_name,
            user_id = ctx.author().id.get(),
            "Command failed: {}",
            message
        );
    }

    let invocation = describe_invocation(ctx, failure.is_reported()).await;
    let errors = &ctx.data().errors;
    let outcome = errors.normalize_command_failure(&invocation, failure);

    if let Some(report) = outcome.report {
        errors.dispatch_detached(report);
    }

    let reply = poise::CreateReply::default()
        .content(outcome.reply)
        .ephemeral(true);
    if let Err(e) = ctx.send(reply).await {
        tracing::error!("Failed to send error reply: {}", e);
    }
}

/// The channel lookup is an HTTP call, so it only happens when a report
/// will actually carry it.
async fn describe_invocation(ctx: Context<'_>, with_channel: bool) -> Invocation {
    let author = ctx.author();

    let channel = if with_channel && ctx.guild_id().is_some() {
        match ctx.channel_id().to_channel(&ctx).await {
            Ok(serenity::Channel::Guild(channel)) => Some(format!("#{}", channel.name)),
            _ => Some("Unknown channel".to_string()),
        }
    } else {
        None
    };

    Invocation {
        command: ctx.command().qualified_name.to_string(),
        invoker: format!("{} ({})", author.name, author.id),
        channel,
    }
}
