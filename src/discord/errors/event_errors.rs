use crate::core::errors::error_chain;
use crate::discord::{Data, Error};
use poise::serenity_prelude as serenity;

/// Last line of defence for errors raised while handling gateway events.
/// There is no user to answer, so the only output is a telemetry report.
pub async fn report_event_error(data: &Data, event: &serenity::FullEvent, error: &Error) {
    let event_name = event_name(event);
    tracing::error!(event = %event_name, "Unhandled error in event handler: {}", error);

    let trace = error_chain(&**error);
    let report = data
        .errors
        .event_report(&event_name, &trace, &event_args(event));

    // `dispatch` logs and swallows delivery failures
    data.errors.dispatch(report).await;
}

fn event_name(event: &serenity::FullEvent) -> String {
    format!("on_{}", event.snake_case_name())
}

/// Identifiers of the objects an event touched. Message content and other
/// payload fields stay out of the ops channel.
fn event_args(event: &serenity::FullEvent) -> Vec<String> {
    use serenity::FullEvent;

    match event {
        FullEvent::Message { new_message } => vec![
            format!("channel_id={}", new_message.channel_id),
            format!("message_id={}", new_message.id),
            format!("author_id={}", new_message.author.id),
        ],
        FullEvent::GuildCreate { guild, .. } => vec![format!("guild_id={}", guild.id)],
        FullEvent::GuildMemberAddition { new_member } => vec![
            format!("guild_id={}", new_member.guild_id),
            format!("user_id={}", new_member.user.id),
        ],
        FullEvent::ReactionAdd { add_reaction } => vec![
            format!("channel_id={}", add_reaction.channel_id),
            format!("message_id={}", add_reaction.message_id),
        ],
        FullEvent::ReactionRemove { removed_reaction } => vec![
            format!("channel_id={}", removed_reaction.channel_id),
            format!("message_id={}", removed_reaction.message_id),
        ],
        FullEvent::ReactionRemoveAll {
            channel_id,
            removed_from_message_id,
        } => vec![
            format!("channel_id={}", channel_id),
            format!("message_id={}", removed_from_message_id),
        ],
        FullEvent::InteractionCreate { interaction } => {
            vec![format!("interaction_id={}", interaction.id())]
        }
        _ => Vec::new(),
    }
}
