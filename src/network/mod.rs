//! Characters, guilds and the canvas they are arranged on.
//!
//! Everything in here is plain data and arithmetic; the browser bindings live
//! in the components.

pub mod ids;
pub mod model;
pub mod render;
pub mod store;
pub mod viewport;

pub use ids::{CharacterId, GuildId, IdAllocator, NodeId};
pub use model::{
	Character, CharacterDraft, Guild, GuildDraft, Link, Point, Qualities, clamp_quality,
	parse_quality_input,
};
pub use render::{Surface, render};
pub use store::Network;
pub use viewport::{Interaction, ViewTransform, Viewport};
