//! Scene painting, independent of the drawing backend.

use super::ids::{CharacterId, NodeId};
use super::model::Point;
use super::store::Network;
use super::viewport::ViewTransform;

const BACKGROUND: &str = "#0f172a22";
const EDGE_COLOR: &str = "#cbd5e1";
const EDGE_WIDTH: f64 = 2.0;

const GUILD_RADIUS: f64 = 26.0;
const GUILD_FALLBACK_FILL: &str = "#38bdf8";
const GUILD_STROKE: &str = "#0ea5e9";
const GUILD_STROKE_WIDTH: f64 = 3.0;
const GUILD_LABEL_COLOR: &str = "#0b1220";
const GUILD_FONT_PX: f64 = 14.0;

const CHARACTER_RADIUS: f64 = 22.0;
const CHARACTER_FILL: &str = "#e2e8f0";
const CHARACTER_STROKE: &str = "#94a3b8";
const CHARACTER_STROKE_WIDTH: f64 = 2.0;
const CHARACTER_LABEL_COLOR: &str = "#e2e8f0";
const CHARACTER_FONT_PX: f64 = 12.0;
/// Gap between the character outline and its portrait.
const PORTRAIT_INSET: f64 = 3.0;

/// Space between the top of a node and the baseline of its label.
const LABEL_GAP: f64 = 8.0;

/// Fill and outline of a node circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle<'a> {
	/// CSS colour.
	pub fill: &'a str,
	/// CSS colour.
	pub stroke: &'a str,
	/// Outline width in world units.
	pub line_width: f64,
}

/// An immediate-mode 2D target.
///
/// Everything between [`Surface::push_transform`] and [`Surface::pop_transform`]
/// is in world units.
pub trait Surface {
	/// Covers the whole surface, ignoring any pushed transform.
	fn fill_background(&mut self, color: &str);
	/// Switches to world units.
	fn push_transform(&mut self, transform: &ViewTransform);
	/// Undoes the matching [`Surface::push_transform`].
	fn pop_transform(&mut self);
	/// A straight stroke.
	fn line(&mut self, from: Point, to: Point, width: f64, color: &str);
	/// A filled and outlined circle.
	fn circle(&mut self, center: Point, radius: f64, style: CircleStyle<'_>);
	/// Paints `src` clipped to a circle. May be a no-op until the image has loaded.
	fn portrait(&mut self, owner: CharacterId, src: &str, center: Point, radius: f64);
	/// Text centred horizontally on `at`, with `at` on the baseline.
	fn label(&mut self, text: &str, at: Point, font_px: f64, color: &str);
}

/// Paints background, edges, guilds, then characters.
///
/// Line widths and font sizes are divided by the zoom so they keep a constant
/// on-screen size.
pub fn render(network: &Network, transform: &ViewTransform, surface: &mut impl Surface) {
	surface.fill_background(BACKGROUND);
	surface.push_transform(transform);
	let k = transform.k;

	for link in network.links() {
		let (Some(a), Some(b)) = (
			network.position(NodeId::Character(link.from)),
			network.position(NodeId::Guild(link.to)),
		) else {
			continue;
		};
		surface.line(a, b, EDGE_WIDTH / k, EDGE_COLOR);
	}

	for guild in network.guilds() {
		let Some(p) = network.position(guild.id.into()) else {
			continue;
		};
		let fill = if guild.color.is_empty() {
			GUILD_FALLBACK_FILL
		} else {
			guild.color.as_str()
		};
		surface.circle(
			p,
			GUILD_RADIUS,
			CircleStyle {
				fill,
				stroke: GUILD_STROKE,
				line_width: GUILD_STROKE_WIDTH / k,
			},
		);
		surface.label(
			label_or(&guild.name, "Guild"),
			Point::new(p.x, p.y - (GUILD_RADIUS + LABEL_GAP)),
			GUILD_FONT_PX / k,
			GUILD_LABEL_COLOR,
		);
	}

	for character in network.characters() {
		let Some(p) = network.position(character.id.into()) else {
			continue;
		};
		surface.circle(
			p,
			CHARACTER_RADIUS,
			CircleStyle {
				fill: CHARACTER_FILL,
				stroke: CHARACTER_STROKE,
				line_width: CHARACTER_STROKE_WIDTH / k,
			},
		);
		if let Some(src) = &character.image {
			surface.portrait(character.id, src, p, CHARACTER_RADIUS - PORTRAIT_INSET);
		}
		surface.label(
			label_or(&character.name, "Character"),
			Point::new(p.x, p.y - (CHARACTER_RADIUS + LABEL_GAP)),
			CHARACTER_FONT_PX / k,
			CHARACTER_LABEL_COLOR,
		);
	}

	surface.pop_transform();
}

fn label_or<'a>(name: &'a str, fallback: &'a str) -> &'a str {
	if name.is_empty() { fallback } else { name }
}
