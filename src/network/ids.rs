//! Identifiers for characters and guilds.
//!
//! Both entity kinds draw from one counter, so a character and a guild never
//! share a number even though their ids are distinct types.

use std::fmt;
use std::str::FromStr;

/// Identifier of a character, rendered as `char_<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId(u64);

/// Identifier of a guild, rendered as `guild_<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuildId(u64);

/// Any node drawn on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeId {
	/// A guild node.
	Guild(GuildId),
	/// A character node.
	Character(CharacterId),
}

impl From<GuildId> for NodeId {
	fn from(id: GuildId) -> Self {
		NodeId::Guild(id)
	}
}

impl From<CharacterId> for NodeId {
	fn from(id: CharacterId) -> Self {
		NodeId::Character(id)
	}
}

const CHARACTER_PREFIX: &str = "char_";
const GUILD_PREFIX: &str = "guild_";

impl fmt::Display for CharacterId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{CHARACTER_PREFIX}{}", self.0)
	}
}

impl fmt::Display for GuildId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{GUILD_PREFIX}{}", self.0)
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NodeId::Guild(id) => id.fmt(f),
			NodeId::Character(id) => id.fmt(f),
		}
	}
}

/// Returned when a string is not a well-formed id of the requested kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed id: {0:?}")]
pub struct ParseIdError(String);

fn parse_with_prefix(s: &str, prefix: &str) -> Result<u64, ParseIdError> {
	s.strip_prefix(prefix)
		.and_then(|n| n.parse().ok())
		.ok_or_else(|| ParseIdError(s.to_owned()))
}

impl FromStr for CharacterId {
	type Err = ParseIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_with_prefix(s, CHARACTER_PREFIX).map(CharacterId)
	}
}

impl FromStr for GuildId {
	type Err = ParseIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_with_prefix(s, GUILD_PREFIX).map(GuildId)
	}
}

/// Hands out fresh ids. Never reset; owned by the store that uses it.
#[derive(Clone, Debug)]
pub struct IdAllocator {
	next: u64,
}

impl Default for IdAllocator {
	fn default() -> Self {
		Self { next: 1 }
	}
}

impl IdAllocator {
	/// Starts counting at 1.
	pub fn new() -> Self {
		Self::default()
	}

	fn bump(&mut self) -> u64 {
		let n = self.next;
		self.next += 1;
		n
	}

	/// Next id, as a character.
	pub fn character(&mut self) -> CharacterId {
		CharacterId(self.bump())
	}

	/// Next id, as a guild.
	pub fn guild(&mut self) -> GuildId {
		GuildId(self.bump())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counter_is_shared_between_kinds() {
		let mut ids = IdAllocator::new();
		assert_eq!(ids.guild().to_string(), "guild_1");
		assert_eq!(ids.character().to_string(), "char_2");
		assert_eq!(ids.guild().to_string(), "guild_3");
	}

	#[test]
	fn parses_own_prefix_only() {
		assert_eq!("guild_7".parse::<GuildId>(), Ok(GuildId(7)));
		assert_eq!("char_12".parse::<CharacterId>(), Ok(CharacterId(12)));
		assert!("char_7".parse::<GuildId>().is_err());
		assert!("guild_".parse::<GuildId>().is_err());
		assert!("".parse::<CharacterId>().is_err());
	}
}
