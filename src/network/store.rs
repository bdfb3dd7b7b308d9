//! The entity store.

use std::collections::HashMap;

use log::debug;

use super::ids::{CharacterId, GuildId, IdAllocator, NodeId};
use super::model::{Character, CharacterDraft, Guild, GuildDraft, Link, Point};

/// Columns in the default placement grid.
const GRID_COLUMNS: usize = 8;
/// Distance between neighbouring grid slots, in world units.
const GRID_GAP: f64 = 160.0;
const GRID_ORIGIN: Point = Point::new(200.0, 150.0);

/// World position of the `slot`-th default placement.
fn grid_slot(slot: usize) -> Point {
	Point::new(
		(slot % GRID_COLUMNS) as f64 * GRID_GAP + GRID_ORIGIN.x,
		(slot / GRID_COLUMNS) as f64 * GRID_GAP + GRID_ORIGIN.y,
	)
}

/// In-memory characters, guilds and their canvas positions.
///
/// Guild membership lives only on [`Character::guild`]; the edge list is
/// derived by [`Network::links`], so it can never disagree with the
/// characters. Every existing node has exactly one position.
#[derive(Clone, Debug, Default)]
pub struct Network {
	ids: IdAllocator,
	characters: Vec<Character>,
	guilds: Vec<Guild>,
	positions: HashMap<NodeId, Point>,
	next_slot: usize,
	revision: u64,
}

impl Network {
	/// An empty network.
	pub fn new() -> Self {
		Self::default()
	}

	/// Characters in creation order.
	pub fn characters(&self) -> &[Character] {
		&self.characters
	}

	/// Guilds in creation order.
	pub fn guilds(&self) -> &[Guild] {
		&self.guilds
	}

	/// Looks up a character by id.
	pub fn character(&self, id: CharacterId) -> Option<&Character> {
		self.characters.iter().find(|c| c.id == id)
	}

	/// Looks up a guild by id.
	pub fn guild(&self, id: GuildId) -> Option<&Guild> {
		self.guilds.iter().find(|g| g.id == id)
	}

	/// Changes whenever a character or guild is added, removed or edited.
	/// Moving a node leaves it alone, so views of the entity lists can skip
	/// drag updates.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	fn touch(&mut self) {
		self.revision += 1;
	}

	/// World position of a node, if it exists.
	pub fn position(&self, node: NodeId) -> Option<Point> {
		self.positions.get(&node).copied()
	}

	/// Moves an existing node. Unknown nodes are ignored.
	pub fn set_position(&mut self, node: NodeId, at: Point) -> bool {
		match self.positions.get_mut(&node) {
			Some(p) => {
				*p = at;
				true
			}
			None => false,
		}
	}

	/// Character to guild edges, in character order.
	pub fn links(&self) -> Vec<Link> {
		self.characters
			.iter()
			.filter_map(|c| c.guild.map(|to| Link { from: c.id, to }))
			.collect()
	}

	/// Nodes in paint order: guilds first, then characters.
	pub fn draw_order(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
		self.guilds
			.iter()
			.map(|g| NodeId::Guild(g.id))
			.chain(self.characters.iter().map(|c| NodeId::Character(c.id)))
	}

	fn place(&mut self, node: NodeId) {
		let at = grid_slot(self.next_slot);
		self.next_slot += 1;
		self.positions.insert(node, at);
	}

	/// Creates a character from the form contents and resets the form.
	///
	/// A blank name leaves both the network and the draft untouched. A guild
	/// that no longer exists is dropped.
	pub fn add_character(&mut self, draft: &mut CharacterDraft) -> Option<CharacterId> {
		if draft.name.trim().is_empty() {
			debug!("ignoring character with blank name");
			return None;
		}
		let CharacterDraft {
			name,
			description,
			image,
			guild,
			qualities,
		} = std::mem::take(draft);
		let guild = guild.filter(|&g| self.guild(g).is_some());
		let id = self.ids.character();
		self.characters.push(Character {
			id,
			name,
			description,
			image,
			guild,
			qualities,
		});
		self.place(id.into());
		self.touch();
		debug!("added character {id} (guild: {guild:?})");
		Some(id)
	}

	/// Creates a guild from the form contents and resets the form.
	pub fn add_guild(&mut self, draft: &mut GuildDraft) -> Option<GuildId> {
		if draft.name.trim().is_empty() {
			debug!("ignoring guild with blank name");
			return None;
		}
		let GuildDraft { name, color } = std::mem::take(draft);
		let id = self.ids.guild();
		self.guilds.push(Guild { id, name, color });
		self.place(id.into());
		self.touch();
		debug!("added guild {id}");
		Some(id)
	}

	/// Removes a character along with its membership and position.
	pub fn remove_character(&mut self, id: CharacterId) -> bool {
		let before = self.characters.len();
		self.characters.retain(|c| c.id != id);
		if self.characters.len() == before {
			return false;
		}
		self.positions.remove(&id.into());
		self.touch();
		debug!("removed character {id}");
		true
	}

	/// Removes a guild. Its members stay, with their membership cleared.
	pub fn remove_guild(&mut self, id: GuildId) -> bool {
		let before = self.guilds.len();
		self.guilds.retain(|g| g.id != id);
		if self.guilds.len() == before {
			return false;
		}
		for c in self.characters.iter_mut().filter(|c| c.guild == Some(id)) {
			c.guild = None;
		}
		self.positions.remove(&id.into());
		self.touch();
		debug!("removed guild {id}");
		true
	}

	/// Moves a character into `guild`, or out of any guild with `None`.
	pub fn assign_character_to_guild(
		&mut self,
		character: CharacterId,
		guild: Option<GuildId>,
	) -> bool {
		if let Some(g) = guild {
			if self.guild(g).is_none() {
				debug!("ignoring assignment of {character} to unknown guild {g}");
				return false;
			}
		}
		match self.characters.iter_mut().find(|c| c.id == character) {
			Some(c) => {
				c.guild = guild;
				self.touch();
				true
			}
			None => false,
		}
	}

	/// Stores a clamped quality value on an existing character.
	pub fn set_character_quality(&mut self, character: CharacterId, name: &str, value: i64) -> bool {
		match self.characters.iter_mut().find(|c| c.id == character) {
			Some(c) => {
				c.qualities.set(name, value);
				self.touch();
				true
			}
			None => false,
		}
	}
}
