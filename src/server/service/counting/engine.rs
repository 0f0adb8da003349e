//! Counting game rules.
//!
//! `apply` is a pure transition function: given the prior state of a scope and one
//! message, it returns the next state, the effects to dispatch, and a summary of what
//! happened. It performs no I/O and takes no locks.

use crate::server::model::{
    command::{Command, MessageInput},
    counter::CounterState,
    effect::{Effect, FAILURE_REACTION, SUCCESS_REACTION},
    message::InboundMessage,
};

use super::{reply, CountingSettings};

/// Rules a count attempt broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Violations {
    /// The number was not the expected next number.
    pub wrong_number: bool,
    /// The author also posted the previous accepted count.
    pub repeated_sender: bool,
}

impl Violations {
    pub fn any(&self) -> bool {
        self.wrong_number || self.repeated_sender
    }
}

/// Summary of how a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not relevant to the game; state untouched.
    Ignored,
    Help,
    Enabled,
    Disabled,
    /// Count accepted; holds the new count.
    Counted(u64),
    /// Streak broken and restarted at 0.
    Reset {
        violations: Violations,
        previous_count: u64,
        new_record: bool,
    },
}

/// Result of evaluating one message against a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CounterState,
    pub effects: Vec<Effect>,
    pub outcome: Outcome,
}

impl Transition {
    fn unchanged(state: &CounterState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
            outcome: Outcome::Ignored,
        }
    }
}

/// Evaluates a classified message against the state of its scope.
///
/// Commands act before any rule evaluation and chatter is ignored. Count attempts on
/// a disabled scope are ignored; on an enabled scope they either advance the streak
/// or reset it. Bot authors must be filtered by the caller.
///
/// # Arguments
/// - `state` - Prior state of the message's scope
/// - `input` - Classification of the message content
/// - `message` - Message being evaluated
/// - `settings` - Prefix and granularity used for replies
///
/// # Returns
/// - `Transition` - Next state, effects to dispatch, and the outcome
pub fn apply(
    state: &CounterState,
    input: MessageInput,
    message: &InboundMessage,
    settings: &CountingSettings,
) -> Transition {
    match input {
        MessageInput::Command(command) => apply_command(state, message, settings, command),
        MessageInput::Count(n) => apply_count(state, message, n),
        MessageInput::Chatter => Transition::unchanged(state),
    }
}

fn apply_command(
    state: &CounterState,
    message: &InboundMessage,
    settings: &CountingSettings,
    command: Command,
) -> Transition {
    let mut next = state.clone();

    let (content, outcome) = match command {
        Command::Help => (
            reply::help(&settings.command_prefix, settings.granularity),
            Outcome::Help,
        ),
        Command::Enable => {
            next.enable();
            (reply::enabled(settings.granularity), Outcome::Enabled)
        }
        Command::Disable => {
            next.disable();
            (reply::disabled(settings.granularity), Outcome::Disabled)
        }
    };

    Transition {
        state: next,
        effects: vec![Effect::reply(message.channel_id, content)],
        outcome,
    }
}

fn apply_count(state: &CounterState, message: &InboundMessage, n: i64) -> Transition {
    let Some(count) = state.count else {
        return Transition::unchanged(state);
    };

    let violations = Violations {
        wrong_number: u64::try_from(n).ok() != state.expected(),
        repeated_sender: state.previous_sender == Some(message.author_id),
    };

    let mut next = state.clone();

    if !violations.any() {
        next.advance(message.author_id);

        return Transition {
            state: next,
            effects: vec![Effect::react(
                message.channel_id,
                message.message_id,
                SUCCESS_REACTION,
            )],
            outcome: Outcome::Counted(count + 1),
        };
    }

    let new_record = next.reset();
    let content = reply::reset(violations, count, state.highest_count, new_record);

    Transition {
        state: next,
        effects: vec![
            Effect::react(message.channel_id, message.message_id, FAILURE_REACTION),
            Effect::reply(message.channel_id, content),
        ],
        outcome: Outcome::Reset {
            violations,
            previous_count: count,
            new_record,
        },
    }
}
