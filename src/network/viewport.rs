//! Zoom, pan and node dragging.
//!
//! Screen coordinates are CSS pixels relative to the canvas' top-left corner.
//! World coordinates are what node positions are stored in. The mapping is
//! `screen = world * k + (x, y)`.

use super::ids::NodeId;
use super::model::Point;
use super::store::Network;

/// Furthest zoom out.
pub const MIN_SCALE: f64 = 0.25;
/// Furthest zoom in.
pub const MAX_SCALE: f64 = 4.0;
const ZOOM_IN_FACTOR: f64 = 1.1;
const ZOOM_OUT_FACTOR: f64 = 0.9;
/// Pick radius around a node centre, in world units.
pub const HIT_RADIUS: f64 = 26.0;

/// Pan offset and zoom of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Horizontal offset in screen pixels.
	pub x: f64,
	/// Vertical offset in screen pixels.
	pub y: f64,
	/// Scale, kept within [`MIN_SCALE`] and [`MAX_SCALE`].
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

impl ViewTransform {
	/// Inverse of [`ViewTransform::world_to_screen`].
	pub fn screen_to_world(&self, screen: Point) -> Point {
		Point::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
	}

	/// Where a world point is drawn.
	pub fn world_to_screen(&self, world: Point) -> Point {
		Point::new(world.x * self.k + self.x, world.y * self.k + self.y)
	}

	/// Rescales by `factor` keeping the world point under `anchor` fixed.
	pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
		let new_k = (self.k * factor).clamp(MIN_SCALE, MAX_SCALE);
		let ratio = new_k / self.k;
		self.x = anchor.x - (anchor.x - self.x) * ratio;
		self.y = anchor.y - (anchor.y - self.y) * ratio;
		self.k = new_k;
	}
}

/// What the pointer is doing between press and release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
	/// No button held.
	#[default]
	Idle,
	/// Moving a node with the pointer.
	DraggingNode(NodeId),
	/// Dragging the background.
	Panning {
		/// Screen position of the previous pan event.
		last: Point,
	},
}

/// View transform plus the pointer state machine driving it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Current pan and zoom.
	pub transform: ViewTransform,
	/// Current pointer state.
	pub interaction: Interaction,
}

impl Viewport {
	/// Unzoomed, unpanned and idle.
	pub fn new() -> Self {
		Self::default()
	}

	/// Topmost node within [`HIT_RADIUS`] of a screen point.
	///
	/// Nodes are tested in reverse paint order so the one drawn last wins.
	pub fn node_at(&self, network: &Network, screen: Point) -> Option<NodeId> {
		let world = self.transform.screen_to_world(screen);
		network.draw_order().rev().find(|&node| {
			network
				.position(node)
				.is_some_and(|p| p.distance_squared(world) <= HIT_RADIUS * HIT_RADIUS)
		})
	}

	/// Starts a drag on the node under the pointer, or a pan otherwise.
	pub fn pointer_down(&mut self, network: &Network, screen: Point) -> Interaction {
		self.interaction = match self.node_at(network, screen) {
			Some(node) => Interaction::DraggingNode(node),
			None => Interaction::Panning { last: screen },
		};
		self.interaction
	}

	/// Applies pointer motion. Returns whether anything visible changed.
	pub fn pointer_move(&mut self, network: &mut Network, screen: Point) -> bool {
		match self.interaction {
			Interaction::Idle => false,
			Interaction::DraggingNode(_) => self.drag_to(network, screen),
			Interaction::Panning { .. } => self.pan_to(screen),
		}
	}

	/// Moves the dragged node under the pointer. Only touches the network.
	pub fn drag_to(&self, network: &mut Network, screen: Point) -> bool {
		match self.interaction {
			Interaction::DraggingNode(node) => {
				network.set_position(node, self.transform.screen_to_world(screen))
			}
			_ => false,
		}
	}

	/// Shifts the view by the pointer delta since the last pan event.
	pub fn pan_to(&mut self, screen: Point) -> bool {
		let Interaction::Panning { last } = self.interaction else {
			return false;
		};
		self.transform.x += screen.x - last.x;
		self.transform.y += screen.y - last.y;
		self.interaction = Interaction::Panning { last: screen };
		true
	}

	/// Ends any drag or pan.
	pub fn pointer_up(&mut self) {
		self.interaction = Interaction::Idle;
	}

	/// Same as [`Viewport::pointer_up`]; the pointer left the canvas.
	pub fn pointer_leave(&mut self) {
		self.interaction = Interaction::Idle;
	}

	/// Zooms in for negative `delta_y` (wheel up), out for positive.
	pub fn wheel(&mut self, screen: Point, delta_y: f64) -> bool {
		let factor = if delta_y < 0.0 {
			ZOOM_IN_FACTOR
		} else if delta_y > 0.0 {
			ZOOM_OUT_FACTOR
		} else {
			return false;
		};
		self.transform.zoom_about(screen, factor);
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::model::{CharacterDraft, GuildDraft};

	const EPS: f64 = 1e-9;

	fn assert_close(a: Point, b: Point) {
		assert!((a.x - b.x).abs() < EPS, "{a:?} != {b:?}");
		assert!((a.y - b.y).abs() < EPS, "{a:?} != {b:?}");
	}

	fn network_with_character() -> (Network, NodeId) {
		let mut net = Network::new();
		let id = net
			.add_character(&mut CharacterDraft {
				name: "Rin".into(),
				..Default::default()
			})
			.unwrap();
		(net, id.into())
	}

	#[test]
	fn wheel_keeps_world_point_under_cursor() {
		let mut vp = Viewport::new();
		vp.transform = ViewTransform { x: 37.0, y: -12.5, k: 1.3 };
		let cursor = Point::new(412.0, 233.0);
		for delta in [-100.0, -100.0, 53.0, 100.0, -1.0] {
			let before = vp.transform.screen_to_world(cursor);
			assert!(vp.wheel(cursor, delta));
			assert_close(vp.transform.screen_to_world(cursor), before);
		}
	}

	#[test]
	fn zoom_is_clamped() {
		let mut vp = Viewport::new();
		let cursor = Point::new(100.0, 100.0);
		for _ in 0..100 {
			vp.wheel(cursor, -1.0);
		}
		assert!((vp.transform.k - MAX_SCALE).abs() < EPS);
		let before = vp.transform.screen_to_world(cursor);
		vp.wheel(cursor, -1.0);
		assert_close(vp.transform.screen_to_world(cursor), before);

		for _ in 0..200 {
			vp.wheel(cursor, 1.0);
		}
		assert!((vp.transform.k - MIN_SCALE).abs() < EPS);
	}

	#[test]
	fn zero_wheel_delta_is_ignored() {
		let mut vp = Viewport::new();
		assert!(!vp.wheel(Point::new(5.0, 5.0), 0.0));
		assert_eq!(vp.transform, ViewTransform::default());
	}

	#[test]
	fn node_centre_hits_at_any_view() {
		let (net, node) = network_with_character();
		let centre = net.position(node).unwrap();
		for transform in [
			ViewTransform::default(),
			ViewTransform { x: -300.0, y: 80.0, k: MIN_SCALE },
			ViewTransform { x: 12.0, y: 900.0, k: MAX_SCALE },
		] {
			let vp = Viewport {
				transform,
				interaction: Interaction::Idle,
			};
			let screen = transform.world_to_screen(centre);
			assert_eq!(vp.node_at(&net, screen), Some(node));
		}
	}

	#[test]
	fn hit_radius_is_in_world_units() {
		let (net, node) = network_with_character();
		let centre = net.position(node).unwrap();
		let vp = Viewport {
			transform: ViewTransform { x: 0.0, y: 0.0, k: 2.0 },
			interaction: Interaction::Idle,
		};
		let inside = vp.transform.world_to_screen(Point::new(centre.x + 25.0, centre.y));
		let outside = vp.transform.world_to_screen(Point::new(centre.x + 27.0, centre.y));
		assert_eq!(vp.node_at(&net, inside), Some(node));
		assert_eq!(vp.node_at(&net, outside), None);
	}

	#[test]
	fn overlapping_nodes_resolve_to_topmost() {
		let mut net = Network::new();
		let rin = net
			.add_character(&mut CharacterDraft {
				name: "Rin".into(),
				..Default::default()
			})
			.unwrap();
		let ember = net
			.add_guild(&mut GuildDraft {
				name: "Ember".into(),
				..Default::default()
			})
			.unwrap();
		let spot = Point::new(50.0, 50.0);
		net.set_position(rin.into(), spot);
		net.set_position(ember.into(), spot);

		// Characters paint over guilds.
		let vp = Viewport::new();
		assert_eq!(vp.node_at(&net, spot), Some(NodeId::Character(rin)));
	}

	#[test]
	fn drag_moves_node_to_pointer_in_world_space() {
		let (mut net, node) = network_with_character();
		let mut vp = Viewport::new();
		vp.transform = ViewTransform { x: 40.0, y: 10.0, k: 2.0 };
		let start = vp.transform.world_to_screen(net.position(node).unwrap());

		assert_eq!(vp.pointer_down(&net, start), Interaction::DraggingNode(node));
		let target = Point::new(500.0, 300.0);
		assert!(vp.pointer_move(&mut net, target));
		assert_close(net.position(node).unwrap(), Point::new(230.0, 145.0));
		assert_eq!(vp.transform.x, 40.0);

		vp.pointer_up();
		assert_eq!(vp.interaction, Interaction::Idle);
		assert!(!vp.pointer_move(&mut net, Point::new(0.0, 0.0)));
		assert_close(net.position(node).unwrap(), Point::new(230.0, 145.0));
	}

	#[test]
	fn pan_adds_screen_delta_regardless_of_scale() {
		let (mut net, node) = network_with_character();
		let node_at = net.position(node);
		let mut vp = Viewport::new();
		vp.transform.k = 3.0;

		let start = Point::new(5.0, 5.0);
		assert_eq!(vp.pointer_down(&net, start), Interaction::Panning { last: start });
		vp.pointer_move(&mut net, Point::new(15.0, 0.0));
		vp.pointer_move(&mut net, Point::new(20.0, 10.0));
		assert_close(Point::new(vp.transform.x, vp.transform.y), Point::new(15.0, 5.0));
		assert_eq!(net.position(node), node_at);

		vp.pointer_up();
		vp.pointer_move(&mut net, Point::new(100.0, 100.0));
		assert_close(Point::new(vp.transform.x, vp.transform.y), Point::new(15.0, 5.0));
	}

	#[test]
	fn leave_ends_drag() {
		let (mut net, node) = network_with_character();
		let mut vp = Viewport::new();
		let at = net.position(node).unwrap();
		vp.pointer_down(&net, at);
		vp.pointer_leave();
		assert!(!vp.pointer_move(&mut net, Point::new(0.0, 0.0)));
		assert_eq!(net.position(node), Some(at));
	}

	#[test]
	fn dragging_a_deleted_node_does_nothing() {
		let (mut net, node) = network_with_character();
		let mut vp = Viewport::new();
		vp.pointer_down(&net, net.position(node).unwrap());
		let NodeId::Character(id) = node else {
			unreachable!()
		};
		net.remove_character(id);
		assert!(!vp.pointer_move(&mut net, Point::new(1.0, 1.0)));
		assert!(net.position(node).is_none());
	}
}
