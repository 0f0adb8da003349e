use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::server::{bot::dispatch::DiscordDispatcher, state::AppState};

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        let dispatcher = DiscordDispatcher::new(ctx.http.clone());
        message::handle_message(&self.state, &dispatcher, &message).await;
    }
}
