use crate::core::modules::Delegation;
use crate::discord::{Context, Error};
use async_trait::async_trait;

/// Capability a module exposes so placeholder commands elsewhere can hand
/// it an invocation unchanged.
#[async_trait]
pub trait ForwardableCommand: Send + Sync {
    async fn forward(&self, ctx: Context<'_>, input: String) -> Result<(), Error>;
}

/// Resolve `module` now (not at registration time) and forward to it,
/// or reply with `fallback` if it isn't loaded.
pub async fn forward_or_fallback(
    ctx: Context<'_>,
    module: &str,
    fallback: &'static str,
    input: String,
) -> Result<(), Error> {
    match ctx.data().forwarding.route(module, fallback) {
        Delegation::Target(target) => target.forward(ctx, input).await,
        Delegation::Fallback(message) => {
            tracing::debug!(module, "Forwarding target missing, sending fallback");
            ctx.say(message).await?;
            Ok(())
        }
    }
}
