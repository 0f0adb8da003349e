//! Classification of message text into bot commands, count attempts, and chatter.

/// Bot command addressed with the configured prefix, e.g. `!cc enable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Enable,
    Disable,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }

    /// Full command text as users must type it.
    pub fn invocation(&self, prefix: &str) -> String {
        format!("{} {}", prefix, self.name())
    }
}

/// What a message means to the counting game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageInput {
    Command(Command),
    /// Base-10 integer, the only kind of text that counts.
    Count(i64),
    /// Anything else; never affects state.
    Chatter,
}

impl MessageInput {
    /// Classifies message text.
    ///
    /// Commands must match `"<prefix> <name>"` exactly. Counts must be the whole
    /// message: an optional sign followed by decimal digits, without surrounding
    /// whitespace.
    ///
    /// # Arguments
    /// - `content` - Raw message text
    /// - `prefix` - Command prefix such as `!cc`
    ///
    /// # Returns
    /// - `MessageInput` - Classification of the text
    pub fn classify(content: &str, prefix: &str) -> Self {
        if let Some(name) = content
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(' '))
        {
            let command = match name {
                "help" => Some(Command::Help),
                "enable" => Some(Command::Enable),
                "disable" => Some(Command::Disable),
                _ => None,
            };
            if let Some(command) = command {
                return Self::Command(command);
            }
        }

        match content.parse::<i64>() {
            Ok(n) => Self::Count(n),
            Err(_) => Self::Chatter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests recognizing every command with the default prefix.
    ///
    /// Expected: each exact invocation maps to its command
    #[test]
    fn classifies_commands() {
        for command in [Command::Help, Command::Enable, Command::Disable] {
            assert_eq!(
                MessageInput::classify(&command.invocation("!cc"), "!cc"),
                MessageInput::Command(command)
            );
        }
    }

    /// Tests that commands require an exact match.
    ///
    /// Expected: unknown names, other prefixes, and padded text are chatter
    #[test]
    fn rejects_inexact_commands() {
        for text in ["!cc stats", "!cc  help", "!cchelp", " !cc help"] {
            assert_eq!(MessageInput::classify(text, "!cc"), MessageInput::Chatter);
        }
    }

    /// Tests that a custom prefix is honored.
    ///
    /// Expected: command recognized under the custom prefix only
    #[test]
    fn honors_custom_prefix() {
        assert_eq!(
            MessageInput::classify("?count enable", "?count"),
            MessageInput::Command(Command::Enable)
        );
        assert_eq!(
            MessageInput::classify("!cc enable", "?count"),
            MessageInput::Chatter
        );
    }

    /// Tests parsing count attempts.
    ///
    /// Expected: signed decimal integers are counts, everything else is chatter
    #[test]
    fn classifies_counts() {
        assert_eq!(MessageInput::classify("1", "!cc"), MessageInput::Count(1));
        assert_eq!(MessageInput::classify("+7", "!cc"), MessageInput::Count(7));
        assert_eq!(MessageInput::classify("-3", "!cc"), MessageInput::Count(-3));
        assert_eq!(MessageInput::classify("007", "!cc"), MessageInput::Count(7));
        assert_eq!(MessageInput::classify(" 1", "!cc"), MessageInput::Chatter);
        assert_eq!(MessageInput::classify("1.0", "!cc"), MessageInput::Chatter);
        assert_eq!(MessageInput::classify("one", "!cc"), MessageInput::Chatter);
        assert_eq!(MessageInput::classify("", "!cc"), MessageInput::Chatter);
        assert_eq!(
            MessageInput::classify("99999999999999999999", "!cc"),
            MessageInput::Chatter
        );
    }
}
