// Group command placeholders.
//
// `/feedback` only exists to group subcommands. `/feedback suggest` forwards
// to the suggestions module, which may or may not be loaded.

use crate::core::modules::HelpDescriptor;
use crate::discord::modules::forward_or_fallback;
use crate::discord::modules::registry::{Command, FeatureModule};
use crate::discord::{Context, Error};

pub const SUGGESTIONS_MODULE: &str = "suggestions";
pub const SUGGEST_FALLBACK: &str =
    "💡 Suggestions are not available here right now. Please use `/suggest` instead.";

pub struct FeedbackGroupModule;

impl FeatureModule for FeedbackGroupModule {
    fn name(&self) -> &'static str {
        "feedback"
    }

    fn commands(&self) -> Vec<Command> {
        vec![feedback()]
    }

    fn describe(&self) -> Option<HelpDescriptor> {
        Some(HelpDescriptor::new(
            "🗂️",
            "Feedback",
            "Grouped shortcuts for sending feedback to the team.",
        ))
    }
}

/// Feedback commands.
#[poise::command(slash_command, prefix_command, subcommands("suggest"))]
pub async fn feedback(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say("Use `/feedback suggest <text>` to send feedback to the team.")
        .await?;
    Ok(())
}

/// Submit a suggestion (same as /suggest).
///
/// Carries the same cooldown as `/suggest`; poise tracks cooldowns per command.
#[poise::command(slash_command, prefix_command, user_cooldown = 60)]
pub async fn suggest(
    ctx: Context<'_>,
    #[description = "Your suggestion"]
    #[rest]
    content: String,
) -> Result<(), Error> {
    forward_or_fallback(ctx, SUGGESTIONS_MODULE, SUGGEST_FALLBACK, content).await
}
