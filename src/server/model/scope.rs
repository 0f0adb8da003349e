//! Domain models for counting scopes.
//!
//! A scope is the unit of independent counting state. Depending on configuration a
//! scope is either a single channel within a guild or an entire guild, in which case
//! every channel of the guild shares one count.

use std::fmt;
use std::str::FromStr;

use serenity::all::{ChannelId, GuildId};

/// How finely counting state is partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeGranularity {
    /// Every channel keeps its own count.
    #[default]
    Channel,
    /// All channels of a guild share one count.
    Guild,
}

impl ScopeGranularity {
    /// Resolves the scope key a message belongs to.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the message was posted in
    /// - `channel_id` - Channel the message was posted in
    ///
    /// # Returns
    /// - `ScopeKey` - Key identifying the counting state the message acts on
    pub fn key_for(&self, guild_id: GuildId, channel_id: ChannelId) -> ScopeKey {
        match self {
            Self::Channel => ScopeKey::Channel {
                guild_id,
                channel_id,
            },
            Self::Guild => ScopeKey::Guild { guild_id },
        }
    }

    /// Noun used in user-facing replies for a single scope.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Guild => "server",
        }
    }
}

impl FromStr for ScopeGranularity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "channel" => Ok(Self::Channel),
            "guild" | "server" => Ok(Self::Guild),
            other => Err(format!("expected `channel` or `guild`, got `{}`", other)),
        }
    }
}

/// Identifier of one independent counting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    Channel {
        guild_id: GuildId,
        channel_id: ChannelId,
    },
    Guild {
        guild_id: GuildId,
    },
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel {
                guild_id,
                channel_id,
            } => write!(f, "guild {} / channel {}", guild_id, channel_id),
            Self::Guild { guild_id } => write!(f, "guild {}", guild_id),
        }
    }
}
