// Bot presence. Discord-layer glue only: we work with serenity's
// `ActivityData` / `OnlineStatus` and nothing else.

use poise::serenity_prelude as serenity;

/// Point people at the help menu once the bot is ready.
pub fn on_ready(ctx: &serenity::Context) {
    let activity = serenity::ActivityData::playing("/help");
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}
