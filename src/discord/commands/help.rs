use crate::core::modules::{HelpDescriptor, HelpEntry};
use crate::discord::modules::registry::{Command, FeatureModule};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

pub struct HelpModule;

impl FeatureModule for HelpModule {
    fn name(&self) -> &'static str {
        "help"
    }

    fn commands(&self) -> Vec<Command> {
        vec![help()]
    }

    fn describe(&self) -> Option<HelpDescriptor> {
        Some(HelpDescriptor::new("🧰", "Utilities", "This menu."))
    }
}

/// Show every feature module and its commands.
#[poise::command(slash_command, prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let mut embed = serenity::CreateEmbed::new()
        .title("Command Guide")
        .description(
            "Use slash commands with `/`. \
            Features are grouped by module; modules without commands are \
            handled by our other bots.",
        )
        .color(serenity::Colour::from_rgb(88, 101, 242))
        .timestamp(serenity::Timestamp::now());

    if let Ok(user) = ctx.framework().bot_id.to_user(&ctx).await {
        embed = embed.thumbnail(user.face());
    }

    for (name, value) in help_fields(&ctx.data().help_index) {
        embed = embed.field(name, value, false);
    }

    embed = embed.footer(serenity::CreateEmbedFooter::new(
        "Need a hand? Ping a moderator.",
    ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// One field per module (more if its entries overflow a field).
fn help_fields(index: &[HelpEntry]) -> Vec<(String, String)> {
    let mut fields = Vec::new();

    for entry in index {
        let mut lines = vec![format!("_{}_", entry.descriptor.summary)];
        for command in &entry.commands {
            let description = command
                .description
                .as_deref()
                .unwrap_or("No description provided.");
            lines.push(format!("• **/{}** — {}", command.name, description));
        }

        let title = entry.descriptor.heading();
        for (i, chunk) in chunk_entries(&lines).iter().enumerate() {
            let field_name = if i == 0 {
                title.clone()
            } else {
                format!("{} (cont.)", title)
            };
            fields.push((field_name, chunk.join("\n")));
        }
    }

    fields
}

fn chunk_entries(entries: &[String]) -> Vec<Vec<String>> {
    let mut chunks = Vec::new();
    let mut current_chunk = Vec::new();
    let mut current_length = 0;

    for entry in entries {
        let entry_len = entry.len();
        // Discord field value limit is 1024. We leave a bit of buffer.
        if current_length + entry_len + 1 > 1000 && !current_chunk.is_empty() {
            chunks.push(current_chunk);
            current_chunk = Vec::new();
            current_length = 0;
        }

        current_chunk.push(entry.clone());
        current_length += entry_len + 1; // +1 for newline
    }

    if !current_chunk.is_empty() {
        chunks.push(current_chunk);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modules::CommandSummary;

    fn entry(label: &'static str, commands: usize) -> HelpEntry {
        HelpEntry {
            module: label.to_lowercase(),
            descriptor: HelpDescriptor::new("🧪", label, "Summary."),
            commands: (0..commands)
                .map(|i| CommandSummary {
                    name: format!("cmd{}", i),
                    description: Some("x".repeat(90)),
                })
                .collect(),
        }
    }

    #[test]
    fn test_chunk_entries_stays_under_field_limit() {
        let entries: Vec<String> = (0..30).map(|_| "y".repeat(100)).collect();
        let chunks = chunk_entries(&entries);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.join("\n").len() <= 1024);
        }
        assert_eq!(chunks.iter().map(Vec::len).sum::<usize>(), 30);
    }

    #[test]
    fn test_help_fields_continue_long_modules() {
        let fields = help_fields(&[entry("Stub", 0), entry("Busy", 20)]);

        assert_eq!(fields[0], ("🧪 Stub".to_string(), "_Summary._".to_string()));
        assert_eq!(fields[1].0, "🧪 Busy");
        assert_eq!(fields[2].0, "🧪 Busy (cont.)");
        assert!(fields[1].1.contains("**/cmd0**"));
    }
}
