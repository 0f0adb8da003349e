use super::*;

/// Tests that a counted message is stored in the registry.
///
/// Expected: snapshot reflects the accepted count
#[tokio::test]
async fn stores_accepted_count() {
    let service = service(ScopeGranularity::Channel);

    let effects = service.handle(&message(1, "1")).await;

    assert_eq!(effects.len(), 1);
    assert_eq!(
        service.snapshot(&channel_key(CHANNEL)).await,
        Some(state(Some(1), 0, Some(1)))
    );
}

/// Tests that help requests are answered without creating state.
///
/// Expected: help reply, scope absent from registry
#[tokio::test]
async fn help_does_not_create_scope() {
    let service = service(ScopeGranularity::Channel);

    let effects = service.handle(&message(1, "!cc help")).await;

    assert_eq!(
        effects,
        vec![Effect::reply(
            ChannelId::new(CHANNEL),
            "Just count! Use `!cc enable` and `!cc disable` \
             to enable/disable the bot for specific channels."
        )]
    );
    assert_eq!(service.snapshot(&channel_key(CHANNEL)).await, None);
}

/// Tests that bot messages are dropped without creating state.
///
/// Expected: no effects, scope absent from registry
#[tokio::test]
async fn bot_messages_do_not_create_scope() {
    let service = service(ScopeGranularity::Channel);
    let mut bot_message = message(1, "1");
    bot_message.author_is_bot = true;

    let effects = service.handle(&bot_message).await;

    assert!(effects.is_empty());
    assert_eq!(service.snapshot(&channel_key(CHANNEL)).await, None);
}

/// Tests that bot messages never touch an existing scope.
///
/// Verifies that counts, commands, and help requests from bot accounts are dropped
/// before evaluation, leaving the stored streak as it was.
///
/// Expected: no effects, stored state unchanged
#[tokio::test]
async fn bot_messages_leave_scope_untouched() {
    let registry = CounterRegistry::new();
    registry
        .insert(channel_key(CHANNEL), state(Some(4), 2, Some(3)))
        .await;
    let service = CountingService::new(registry, CountingSettings::default());

    for text in ["5", "9", "!cc disable", "!cc help"] {
        let mut bot_message = message(1, text);
        bot_message.author_is_bot = true;

        let effects = service.handle(&bot_message).await;

        assert!(effects.is_empty(), "text {:?}", text);
    }

    assert_eq!(
        service.snapshot(&channel_key(CHANNEL)).await,
        Some(state(Some(4), 2, Some(3)))
    );
}

/// Tests that chatter creates the scope lazily without changing it.
///
/// Expected: scope present in its initial state
#[tokio::test]
async fn chatter_creates_initial_scope() {
    let service = service(ScopeGranularity::Channel);

    let effects = service.handle(&message(1, "hello there")).await;

    assert!(effects.is_empty());
    assert_eq!(
        service.snapshot(&channel_key(CHANNEL)).await,
        Some(CounterState::new())
    );
}

/// Tests disabling through the service and counting afterwards.
///
/// Expected: count ignored, stored state still disabled
#[tokio::test]
async fn disable_then_count_is_ignored() {
    let service = service(ScopeGranularity::Channel);

    service.handle(&message(1, "!cc disable")).await;
    let effects = service.handle(&message(2, "1")).await;

    assert!(effects.is_empty());
    let stored = service.snapshot(&channel_key(CHANNEL)).await.unwrap();
    assert_eq!(stored.raw_count(), -1);
}

/// Tests re-enabling through the service.
///
/// Expected: count restarts at 0 and "1" is accepted
#[tokio::test]
async fn enable_then_count_is_accepted() {
    let service = service(ScopeGranularity::Channel);

    service.handle(&message(1, "!cc disable")).await;
    service.handle(&message(1, "!cc enable")).await;
    assert_eq!(
        service.snapshot(&channel_key(CHANNEL)).await.unwrap().count,
        Some(0)
    );

    let effects = service.handle(&message(2, "1")).await;

    assert_eq!(
        effects,
        vec![Effect::react(
            ChannelId::new(CHANNEL),
            MessageId::new(900),
            SUCCESS_REACTION
        )]
    );
    assert_eq!(
        service.snapshot(&channel_key(CHANNEL)).await.unwrap().count,
        Some(1)
    );
}

/// Tests that channel granularity keeps channels independent.
///
/// Verifies that a reset in one channel does not touch the streak in another.
///
/// Expected: channel 200 at 2, channel 201 reset to 0
#[tokio::test]
async fn channels_are_independent() {
    let service = service(ScopeGranularity::Channel);

    service.handle(&message_in(200, 1, "1")).await;
    service.handle(&message_in(201, 1, "1")).await;
    service.handle(&message_in(200, 2, "2")).await;
    service.handle(&message_in(201, 1, "2")).await;

    assert_eq!(
        service.snapshot(&channel_key(200)).await.unwrap().count,
        Some(2)
    );
    assert_eq!(
        service.snapshot(&channel_key(201)).await.unwrap(),
        state(Some(0), 1, None)
    );
}

/// Tests that guild granularity shares one count across channels.
///
/// Expected: counts from different channels continue the same streak
#[tokio::test]
async fn guild_scope_spans_channels() {
    let service = service(ScopeGranularity::Guild);

    service.handle(&message_in(200, 1, "1")).await;
    service.handle(&message_in(201, 2, "2")).await;
    let effects = service.handle(&message_in(202, 1, "3")).await;

    assert_eq!(
        effects,
        vec![Effect::react(
            ChannelId::new(202),
            MessageId::new(900),
            SUCCESS_REACTION
        )]
    );
    let key = ScopeKey::Guild {
        guild_id: GuildId::new(GUILD),
    };
    assert_eq!(service.snapshot(&key).await.unwrap().count, Some(3));
    assert_eq!(service.snapshot(&channel_key(200)).await, None);
}

/// Tests that a failing count resets stored state.
///
/// Expected: failure reaction then reply, stored count 0 with record kept
#[tokio::test]
async fn failing_count_resets_stored_state() {
    let service = service(ScopeGranularity::Channel);

    service.handle(&message(1, "1")).await;
    service.handle(&message(2, "2")).await;
    let effects = service.handle(&message(1, "4")).await;

    assert_eq!(effects.len(), 2);
    assert!(matches!(
        effects[0],
        Effect::React {
            emoji: FAILURE_REACTION,
            ..
        }
    ));
    assert_eq!(
        service.snapshot(&channel_key(CHANNEL)).await.unwrap(),
        state(Some(0), 2, None)
    );
}

/// Tests concurrent delivery of messages for one scope.
///
/// Verifies that evaluations are serialized: when twenty authors race to post "1",
/// accepted counts and resets strictly alternate whatever the arrival order.
///
/// Expected: ten success reactions, final state reset with a record of 1
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_messages_are_serialized() {
    let service = service(ScopeGranularity::Channel);

    let mut tasks = Vec::new();
    for author in 1..=20u64 {
        let service = service.clone();
        tasks.push(tokio::spawn(async move {
            service.handle(&message(author, "1")).await
        }));
    }

    let mut successes = 0;
    for task in tasks {
        let effects = task.await.unwrap();
        if effects.iter().any(|effect| {
            matches!(
                effect,
                Effect::React {
                    emoji: SUCCESS_REACTION,
                    ..
                }
            )
        }) {
            successes += 1;
        }
    }

    assert_eq!(successes, 10);
    assert_eq!(
        service.snapshot(&channel_key(CHANNEL)).await.unwrap(),
        state(Some(0), 1, None)
    );
}

/// Tests seeding the registry directly.
///
/// Expected: service continues from the seeded state
#[tokio::test]
async fn continues_from_seeded_state() {
    let registry = CounterRegistry::new();
    registry
        .insert(channel_key(CHANNEL), state(Some(41), 50, Some(9)))
        .await;
    let service = CountingService::new(registry, CountingSettings::default());

    service.handle(&message(1, "42")).await;

    assert_eq!(
        service.snapshot(&channel_key(CHANNEL)).await.unwrap(),
        state(Some(42), 50, Some(1))
    );
}
