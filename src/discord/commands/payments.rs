// Payment info commands.
//
// Thin layer as usual: the tier list and contact details come from the core
// `PaymentService`; this file only builds the embeds.

use crate::core::modules::HelpDescriptor;
use crate::discord::modules::registry::{Command, FeatureModule};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

pub struct PaymentsModule;

const DESCRIPTOR: HelpDescriptor = HelpDescriptor::new(
    "💳",
    "Payments",
    "Subscription tiers, prices, and how to support the server.",
);

impl FeatureModule for PaymentsModule {
    fn name(&self) -> &'static str {
        "payments"
    }

    fn commands(&self) -> Vec<Command> {
        vec![premium(), qr()]
    }

    fn describe(&self) -> Option<HelpDescriptor> {
        Some(DESCRIPTOR)
    }
}

/// Show subscription tiers, prices, and how to pay.
#[poise::command(slash_command, prefix_command, aliases("donate", "tiers"))]
pub async fn premium(ctx: Context<'_>) -> Result<(), Error> {
    let payments = &ctx.data().payments;

    let embed = serenity::CreateEmbed::new()
        .title("💳 Premium Subscriptions")
        .description("Support the server and unlock supporter perks.")
        .color(0x5865F2) // Blurple
        .field("Tiers", payments.tier_lines().join("\n"), false)
        .field(
            "How to Pay",
            format!(
                "Contact **{}** to arrange payment, or use `/qr` for the payment QR code.",
                payments.contact()
            ),
            false,
        )
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Generated {}",
            ctx.data().timezones.now()
        )))
        .timestamp(serenity::Timestamp::now());

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Show the payment QR code.
#[poise::command(slash_command, prefix_command)]
pub async fn qr(ctx: Context<'_>) -> Result<(), Error> {
    let payments = &ctx.data().payments;

    let Some(url) = payments.qr_url() else {
        ctx.say(format!(
            "No payment QR code is configured. Contact **{}** for payment details.",
            payments.contact()
        ))
        .await?;
        return Ok(());
    };

    let embed = serenity::CreateEmbed::new()
        .title("📱 Payment QR Code")
        .description(format!(
            "Scan to pay, then send your receipt to **{}**.",
            payments.contact()
        ))
        .color(0x5865F2)
        .image(url)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Generated {}",
            ctx.data().timezones.now()
        )));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
