//! Entity records and the form drafts they are created from.

use indexmap::IndexMap;

use super::ids::{CharacterId, GuildId};

/// Qualities every new character starts with, in display order.
pub const DEFAULT_QUALITIES: &[&str] =
	&["Sociability", "Humor", "Strength", "Potential", "Intelligence"];

/// Lowest value a quality can hold.
pub const QUALITY_MIN: u8 = 0;
/// Highest value a quality can hold.
pub const QUALITY_MAX: u8 = 100;

/// Swatch preselected in the guild form.
pub const DEFAULT_GUILD_COLOR: &str = "#38bdf8";

/// A position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal, growing right.
	pub x: f64,
	/// Vertical, growing down.
	pub y: f64,
}

impl Point {
	/// A point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Squared euclidean distance, for radius checks without a square root.
	pub fn distance_squared(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		dx * dx + dy * dy
	}
}

/// Ordered attribute values, each kept within [`QUALITY_MIN`, `QUALITY_MAX`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Qualities(IndexMap<String, u8>);

impl Default for Qualities {
	fn default() -> Self {
		Self(
			DEFAULT_QUALITIES
				.iter()
				.map(|name| (name.to_string(), QUALITY_MIN))
				.collect(),
		)
	}
}

impl Qualities {
	/// Current value of `name`, if the character has that quality.
	pub fn get(&self, name: &str) -> Option<u8> {
		self.0.get(name).copied()
	}

	/// Stores `value` clamped into range and returns what was stored.
	/// Unknown names are inserted.
	pub fn set(&mut self, name: &str, value: i64) -> u8 {
		let clamped = clamp_quality(value);
		match self.0.get_mut(name) {
			Some(slot) => *slot = clamped,
			None => {
				self.0.insert(name.to_owned(), clamped);
			}
		}
		clamped
	}

	/// Appends a new quality at zero. Blank or existing names are ignored.
	pub fn add(&mut self, name: &str) -> bool {
		let name = name.trim();
		if name.is_empty() || self.0.contains_key(name) {
			return false;
		}
		self.0.insert(name.to_owned(), QUALITY_MIN);
		true
	}

	/// Name and value pairs in display order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
		self.0.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Number of qualities, defaults included.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether there are no qualities at all.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// The value a quality edit actually stores.
pub fn clamp_quality(value: i64) -> u8 {
	value.clamp(QUALITY_MIN as i64, QUALITY_MAX as i64) as u8
}

/// Reads a number field the way a browser user expects: the leading integer
/// wins, anything else is zero.
pub fn parse_quality_input(raw: &str) -> i64 {
	let raw = raw.trim();
	let digits_end = raw
		.char_indices()
		.find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
		.map(|(i, _)| i)
		.unwrap_or(raw.len());
	raw[..digits_end].parse::<i64>().unwrap_or_else(|_| {
		// Out of i64 range still means "as far as it goes".
		match raw.as_bytes().first() {
			Some(b'-') if digits_end > 1 => i64::MIN,
			Some(c) if c.is_ascii_digit() || (*c == b'+' && digits_end > 1) => i64::MAX,
			_ => 0,
		}
	})
}

/// A person on the network.
#[derive(Clone, Debug, PartialEq)]
pub struct Character {
	/// Stable for the character's lifetime.
	pub id: CharacterId,
	/// Never blank.
	pub name: String,
	/// Free text shown on the card.
	pub description: String,
	/// Portrait as a `data:` URL.
	pub image: Option<String>,
	/// The one guild this character belongs to, if any. Links are derived from it.
	pub guild: Option<GuildId>,
	/// Attribute values, in display order.
	pub qualities: Qualities,
}

/// An organisation characters can belong to.
#[derive(Clone, Debug, PartialEq)]
pub struct Guild {
	/// Stable for the guild's lifetime.
	pub id: GuildId,
	/// Never blank.
	pub name: String,
	/// CSS colour used for the node fill.
	pub color: String,
}

/// A "belongs to" edge from a character to its guild.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
	/// The member.
	pub from: CharacterId,
	/// The guild.
	pub to: GuildId,
}

/// Contents of the character creation form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterDraft {
	/// Blank names are refused on submit.
	pub name: String,
	/// Free text.
	pub description: String,
	/// Portrait read from the file input, as a `data:` URL.
	pub image: Option<String>,
	/// Guild to join on creation.
	pub guild: Option<GuildId>,
	/// Starts from the defaults, all at zero.
	pub qualities: Qualities,
}

/// Contents of the guild creation form.
#[derive(Clone, Debug, PartialEq)]
pub struct GuildDraft {
	/// Blank names are refused on submit.
	pub name: String,
	/// Picked with the colour input.
	pub color: String,
}

impl Default for GuildDraft {
	fn default() -> Self {
		Self {
			name: String::new(),
			color: DEFAULT_GUILD_COLOR.to_owned(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quality_values_are_clamped() {
		let mut q = Qualities::default();
		q.set("Humor", -5);
		assert_eq!(q.get("Humor"), Some(0));
		q.set("Humor", 150);
		assert_eq!(q.get("Humor"), Some(100));
		q.set("Humor", 42);
		assert_eq!(q.get("Humor"), Some(42));
	}

	#[test]
	fn edit_past_the_bounds_reports_the_stored_value() {
		let mut q = Qualities::default();
		assert_eq!(q.set("Humor", 100), 100);
		let before = q.clone();
		// Nothing changes, so the field has to be rewritten from the return value.
		assert_eq!(q.set("Humor", parse_quality_input("150")), 100);
		assert_eq!(q, before);

		assert_eq!(q.set("Strength", parse_quality_input("-5")), 0);
		assert_eq!(clamp_quality(parse_quality_input("150")), 100);
		assert_eq!(clamp_quality(42), 42);
	}

	#[test]
	fn added_quality_starts_at_zero_and_keeps_order() {
		let mut q = Qualities::default();
		assert!(q.add("  Luck "));
		assert_eq!(q.get("Luck"), Some(0));
		assert_eq!(q.iter().last().map(|(k, _)| k), Some("Luck"));
		assert_eq!(q.len(), DEFAULT_QUALITIES.len() + 1);
	}

	#[test]
	fn duplicate_or_blank_quality_is_ignored() {
		let mut q = Qualities::default();
		q.set("Strength", 30);
		assert!(!q.add("Strength"));
		assert!(!q.add("   "));
		assert_eq!(q.get("Strength"), Some(30));
		assert_eq!(q.len(), DEFAULT_QUALITIES.len());
	}

	#[test]
	fn number_field_parsing() {
		assert_eq!(parse_quality_input("42"), 42);
		assert_eq!(parse_quality_input(" 42abc"), 42);
		assert_eq!(parse_quality_input("-5"), -5);
		assert_eq!(parse_quality_input("abc"), 0);
		assert_eq!(parse_quality_input(""), 0);
		assert_eq!(parse_quality_input("-"), 0);
		assert_eq!(parse_quality_input("99999999999999999999999"), i64::MAX);
	}
}
