// Telemetry sink backed by a Discord text channel.
//
// The channel is resolved on every delivery so a channel that is deleted or
// re-permissioned while the bot runs is noticed on the next report.

use crate::core::errors::{ErrorReport, TelemetryError, TelemetrySink};
use crate::core::timezones::TimezoneService;
use async_trait::async_trait;
use poise::serenity_prelude::{self as serenity, CreateEmbed, CreateEmbedFooter, CreateMessage};
use std::sync::Arc;

pub const TELEMETRY_FOOTER: &str = "Cogwheel Error Telemetry";

pub struct DiscordChannelSink {
    http: Arc<serenity::Http>,
    channel_id: Option<u64>,
    timezones: Arc<TimezoneService>,
}

impl DiscordChannelSink {
    pub fn new(
        http: Arc<serenity::Http>,
        channel_id: Option<u64>,
        timezones: Arc<TimezoneService>,
    ) -> Self {
        Self {
            http,
            channel_id,
            timezones,
        }
    }
}

#[async_trait]
impl TelemetrySink for DiscordChannelSink {
    async fn deliver(&self, report: &ErrorReport) -> Result<(), TelemetryError> {
        let raw_id = self.channel_id.ok_or(TelemetryError::NotConfigured)?;
        let channel_id = serenity::ChannelId::new(raw_id);

        let channel = channel_id
            .to_channel(&*self.http)
            .await
            .map_err(|e| TelemetryError::Unresolvable(raw_id, e.to_string()))?;
        if !is_message_capable(&channel) {
            return Err(TelemetryError::NotMessageCapable(raw_id));
        }

        let embed = build_report_embed(report, &self.timezones);
        channel_id
            .send_message(&*self.http, CreateMessage::new().embed(embed))
            .await
            .map_err(|e| TelemetryError::Send(e.to_string()))?;

        Ok(())
    }
}

fn is_message_capable(channel: &serenity::Channel) -> bool {
    match channel {
        serenity::Channel::Guild(guild_channel) => guild_channel.is_text_based(),
        serenity::Channel::Private(_) => true,
        _ => false,
    }
}

pub fn build_report_embed(report: &ErrorReport, timezones: &TimezoneService) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(report.title.clone())
        .color(serenity::Color::RED)
        .field(
            "Error Details",
            format!("```\n{}\n```", report.message),
            false,
        );

    if let Some(context) = &report.context {
        embed = embed.field("Context", format!("```\n{}\n```", context), false);
    }

    embed = embed
        .field("Reported", timezones.format(report.timestamp), false)
        .footer(CreateEmbedFooter::new(TELEMETRY_FOOTER));

    match serenity::Timestamp::from_unix_timestamp(report.timestamp.timestamp()) {
        Ok(timestamp) => embed.timestamp(timestamp),
        Err(_) => embed.timestamp(serenity::Timestamp::now()),
    }
}
