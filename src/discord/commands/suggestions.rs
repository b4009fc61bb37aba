use crate::core::modules::HelpDescriptor;
use crate::discord::modules::registry::{Command, FeatureModule};
use crate::discord::modules::ForwardableCommand;
use crate::discord::{Context, Error};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

pub struct SuggestionsModule;

impl FeatureModule for SuggestionsModule {
    fn name(&self) -> &'static str {
        "suggestions"
    }

    fn commands(&self) -> Vec<Command> {
        vec![suggest()]
    }

    fn describe(&self) -> Option<HelpDescriptor> {
        Some(HelpDescriptor::new(
            "💡",
            "Suggestions",
            "Share ideas for the server with the team.",
        ))
    }

    fn forward_target(&self) -> Option<Arc<dyn ForwardableCommand>> {
        Some(Arc::new(SuggestionForwarder))
    }
}

struct SuggestionForwarder;

#[async_trait]
impl ForwardableCommand for SuggestionForwarder {
    async fn forward(&self, ctx: Context<'_>, input: String) -> Result<(), Error> {
        submit_suggestion(ctx, input).await
    }
}

/// Submit a suggestion for the server.
#[poise::command(slash_command, prefix_command, user_cooldown = 60)]
pub async fn suggest(
    ctx: Context<'_>,
    #[description = "Your suggestion"]
    #[rest]
    content: String,
) -> Result<(), Error> {
    submit_suggestion(ctx, content).await
}

async fn submit_suggestion(ctx: Context<'_>, content: String) -> Result<(), Error> {
    let author = ctx.author();
    let data = ctx.data();

    let suggestion = match data.suggestions.draft(author.id.get(), &author.name, &content) {
        Ok(suggestion) => suggestion,
        Err(e) => {
            ctx.send(
                poise::CreateReply::default()
                    .content(format!("❌ {}", e))
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        }
    };

    let target = data
        .config
        .suggestion_channel_id
        .map(serenity::ChannelId::new)
        .unwrap_or_else(|| ctx.channel_id());

    let embed = serenity::CreateEmbed::new()
        .title(format!("💡 Suggestion #{}", suggestion.reference))
        .description(&suggestion.content)
        .author(serenity::CreateEmbedAuthor::new(&suggestion.author_name).icon_url(author.face()))
        .color(0xF1C40F)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Submitted {}",
            data.timezones.format(suggestion.submitted_at)
        )));

    let message = target
        .send_message(ctx.http(), serenity::CreateMessage::new().embed(embed))
        .await?;

    for emoji in ["👍", "👎"] {
        let reaction = serenity::ReactionType::Unicode(emoji.to_string());
        if let Err(e) = message.react(ctx.http(), reaction).await {
            tracing::warn!("Failed to add {} to suggestion {}: {}", emoji, suggestion.reference, e);
        }
    }

    tracing::info!(
        reference = %suggestion.reference,
        user_id = suggestion.author_id,
        "Suggestion submitted"
    );

    let location = if target == ctx.channel_id() {
        String::new()
    } else {
        format!(" in <#{}>", target)
    };
    ctx.send(
        poise::CreateReply::default()
            .content(format!(
                "✅ Suggestion #{} submitted{}. Thanks!",
                suggestion.reference, location
            ))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}
