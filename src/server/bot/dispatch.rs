//! Delivery of counting effects to Discord.
//!
//! Effects are delivered best-effort: a failed reply or reaction is logged and the
//! remaining effects are still attempted. Nothing is retried and delivery results
//! never feed back into counting state.

use dioxus_logger::tracing;
use serenity::{
    all::{CreateMessage, ReactionType},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::server::{error::AppError, model::effect::Effect};

/// Performs the Discord actions described by effects.
#[async_trait]
pub trait EffectDispatcher: Send + Sync {
    /// Delivers a single effect.
    ///
    /// # Returns
    /// - `Ok(())` - Discord accepted the action
    /// - `Err(AppError)` - The action failed
    async fn dispatch(&self, effect: &Effect) -> Result<(), AppError>;
}

/// Dispatcher backed by Serenity's HTTP client.
pub struct DiscordDispatcher {
    /// Discord HTTP client for sending messages and reactions
    http: Arc<Http>,
}

impl DiscordDispatcher {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl EffectDispatcher for DiscordDispatcher {
    async fn dispatch(&self, effect: &Effect) -> Result<(), AppError> {
        match effect {
            Effect::Reply {
                channel_id,
                content,
            } => {
                let message = CreateMessage::new().content(content);
                channel_id.send_message(&self.http, message).await?;
            }
            Effect::React {
                channel_id,
                message_id,
                emoji,
            } => {
                channel_id
                    .create_reaction(
                        &self.http,
                        *message_id,
                        ReactionType::Unicode(emoji.to_string()),
                    )
                    .await?;
            }
        }

        Ok(())
    }
}

/// Delivers effects in order, continuing past failures.
///
/// # Arguments
/// - `dispatcher` - Dispatcher performing the actions
/// - `effects` - Effects to deliver
///
/// # Returns
/// - `usize` - Number of effects that failed to deliver
pub async fn dispatch_all<D>(dispatcher: &D, effects: &[Effect]) -> usize
where
    D: EffectDispatcher + ?Sized,
{
    let mut failures = 0;

    for effect in effects {
        if let Err(e) = dispatcher.dispatch(effect).await {
            failures += 1;
            tracing::error!(
                "Failed to deliver {:?} to channel {}: {}",
                effect,
                effect.channel_id(),
                e
            );
        }
    }

    failures
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use tokio::sync::Mutex;

    /// Dispatcher that records effects instead of calling Discord.
    #[derive(Default)]
    pub(crate) struct RecordingDispatcher {
        pub delivered: Mutex<Vec<Effect>>,
        /// When set, replies fail while reactions still succeed.
        pub fail_replies: bool,
    }

    impl RecordingDispatcher {
        pub(crate) fn failing_replies() -> Self {
            Self {
                fail_replies: true,
                ..Self::default()
            }
        }

        pub(crate) async fn delivered(&self) -> Vec<Effect> {
            self.delivered.lock().await.clone()
        }
    }

    #[async_trait]
    impl EffectDispatcher for RecordingDispatcher {
        async fn dispatch(&self, effect: &Effect) -> Result<(), AppError> {
            if self.fail_replies && matches!(effect, Effect::Reply { .. }) {
                return Err(serenity::Error::Other("reply rejected").into());
            }
            self.delivered.lock().await.push(effect.clone());
            Ok(())
        }
    }

    mod dispatch_all {
        use super::*;
        use crate::server::model::effect::{FAILURE_REACTION, SUCCESS_REACTION};
        use serenity::all::{ChannelId, MessageId};

        fn effects() -> Vec<Effect> {
            vec![
                Effect::react(ChannelId::new(1), MessageId::new(2), FAILURE_REACTION),
                Effect::reply(ChannelId::new(1), "reset"),
                Effect::react(ChannelId::new(1), MessageId::new(3), SUCCESS_REACTION),
            ]
        }

        /// Tests delivering effects in order.
        ///
        /// Expected: all effects delivered in order, no failures
        #[tokio::test]
        async fn delivers_in_order() {
            let dispatcher = RecordingDispatcher::default();

            let failures = dispatch_all(&dispatcher, &effects()).await;

            assert_eq!(failures, 0);
            assert_eq!(dispatcher.delivered().await, effects());
        }

        /// Tests that a failed effect does not stop later effects.
        ///
        /// Expected: one failure, both reactions delivered
        #[tokio::test]
        async fn continues_after_failure() {
            let dispatcher = RecordingDispatcher::failing_replies();

            let failures = dispatch_all(&dispatcher, &effects()).await;

            assert_eq!(failures, 1);
            let delivered = dispatcher.delivered().await;
            assert_eq!(delivered.len(), 2);
            assert!(delivered
                .iter()
                .all(|effect| matches!(effect, Effect::React { .. })));
        }

        /// Tests dispatching through a trait object.
        ///
        /// Expected: nothing delivered for an empty list
        #[tokio::test]
        async fn accepts_trait_objects() {
            let dispatcher: Box<dyn EffectDispatcher> = Box::new(RecordingDispatcher::default());

            assert_eq!(dispatch_all(dispatcher.as_ref(), &[]).await, 0);
        }
    }
}
