pub mod channel_sink;
#[cfg(test)]
pub mod in_memory;

pub use channel_sink::DiscordChannelSink;
