use dioxus_logger::tracing;
use serenity::all::Message;

use crate::server::{
    bot::dispatch::{dispatch_all, EffectDispatcher},
    model::message::InboundMessage,
    state::AppState,
};

/// Handle message creation in a channel
///
/// Runs the counting rules for guild messages and delivers the resulting replies and
/// reactions. Direct messages are ignored.
pub async fn handle_message<D>(state: &AppState, dispatcher: &D, message: &Message)
where
    D: EffectDispatcher + ?Sized,
{
    // Only count messages in guild channels (not DMs)
    let Some(inbound) = InboundMessage::from_message(message) else {
        tracing::trace!("Ignoring direct message {}", message.id);
        return;
    };

    let effects = state.counting.handle(&inbound).await;

    let failures = dispatch_all(dispatcher, &effects).await;
    if failures > 0 {
        tracing::warn!(
            "{} of {} effect(s) for message {} were not delivered",
            failures,
            effects.len(),
            inbound.message_id
        );
    }
}
