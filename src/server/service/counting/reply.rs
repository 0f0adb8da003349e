//! Reply texts posted by the counting service.

use crate::server::model::{command::Command, scope::ScopeGranularity};

use super::engine::Violations;

const RESET_NOTICE: &str = "OOP! Count resetting, you're a dumbo!";
const WRONG_NUMBER: &str = " You can't count!";
const REPEATED_SENDER: &str = " You sent the last count!";

/// Builds the help reply.
///
/// # Arguments
/// - `prefix` - Configured command prefix
/// - `granularity` - Scope granularity, which decides whether commands act on channels or servers
pub fn help(prefix: &str, granularity: ScopeGranularity) -> String {
    format!(
        "Just count! Use `{}` and `{}` to enable/disable the bot for specific {}s.",
        Command::Enable.invocation(prefix),
        Command::Disable.invocation(prefix),
        granularity.noun()
    )
}

pub fn enabled(granularity: ScopeGranularity) -> String {
    format!(
        "Counting enabled for the {}, starting at 0.",
        granularity.noun()
    )
}

pub fn disabled(granularity: ScopeGranularity) -> String {
    format!("Counting disabled for the {}.", granularity.noun())
}

/// Builds the reply posted when a count breaks the streak.
///
/// # Arguments
/// - `violations` - Which rules the count broke
/// - `previous_count` - Count reached before the reset
/// - `previous_highest` - High-water mark before the reset
/// - `new_record` - Whether `previous_count` became the new high-water mark
pub fn reset(
    violations: Violations,
    previous_count: u64,
    previous_highest: u64,
    new_record: bool,
) -> String {
    let mut reply = String::from(RESET_NOTICE);

    if violations.wrong_number {
        reply.push_str(WRONG_NUMBER);
    }
    if violations.repeated_sender {
        reply.push_str(REPEATED_SENDER);
    }

    if new_record {
        reply.push_str(&format!(
            " You got a new highest count of {}! Previously it was {}.",
            previous_count, previous_highest
        ));
    } else {
        reply.push_str(&format!(
            " Highest count reached is still {}.",
            previous_highest
        ));
    }

    reply
}
