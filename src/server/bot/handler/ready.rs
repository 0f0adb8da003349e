//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. This is the
//! first event received after authentication and indicates the bot is ready to
//! process other events.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Advertise the help command through the bot's activity

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};

use crate::server::{model::command::Command, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// This event fires once per bot connection after successful authentication and
/// initial gateway handshake. Sets a custom activity pointing users at the help
/// command.
///
/// # Arguments
/// - `state` - Application state providing the command prefix
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    let prefix = &state.counting.settings().command_prefix;
    ctx.set_activity(Some(ActivityData::custom(Command::Help.invocation(prefix))));
}
