use std::collections::HashMap;
use std::f64::consts::PI;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::components::error::HostError;
use crate::network::render::CircleStyle;
use crate::network::{CharacterId, Network, Point, Surface, ViewTransform};

struct Portrait {
	src: String,
	image: HtmlImageElement,
	_onload: Closure<dyn FnMut()>,
}

/// Decoded character portraits, keyed by owner.
///
/// Each image bumps `loaded` when it finishes decoding so the canvas repaints.
pub struct PortraitCache {
	images: HashMap<CharacterId, Portrait>,
	loaded: RwSignal<u64>,
}

impl PortraitCache {
	pub fn new(loaded: RwSignal<u64>) -> Self {
		Self {
			images: HashMap::new(),
			loaded,
		}
	}

	/// Drops images of characters that are gone or no longer have that picture.
	pub fn prune(&mut self, network: &Network) {
		self.images.retain(|id, p| {
			network
				.character(*id)
				.and_then(|c| c.image.as_deref())
				.is_some_and(|src| src == p.src)
		});
	}

	fn get_or_load(
		&mut self,
		owner: CharacterId,
		src: &str,
	) -> Result<&HtmlImageElement, HostError> {
		let stale = self.images.get(&owner).is_some_and(|p| p.src != src);
		if stale || !self.images.contains_key(&owner) {
			let image = HtmlImageElement::new()?;
			let loaded = self.loaded;
			let onload = Closure::<dyn FnMut()>::new(move || {
				let _ = loaded.try_update(|n| *n += 1);
			});
			image.set_onload(Some(onload.as_ref().unchecked_ref()));
			image.set_src(src);
			self.images.insert(
				owner,
				Portrait {
					src: src.to_owned(),
					image,
					_onload: onload,
				},
			);
		}
		self.images
			.get(&owner)
			.map(|p| &p.image)
			.ok_or_else(|| HostError::Js(format!("portrait for {owner} vanished")))
	}
}

/// [`Surface`] over a browser canvas. Sizes are CSS pixels.
pub struct CanvasSurface<'a> {
	pub ctx: &'a CanvasRenderingContext2d,
	pub portraits: &'a mut PortraitCache,
	pub width: f64,
	pub height: f64,
}

impl Surface for CanvasSurface<'_> {
	fn fill_background(&mut self, color: &str) {
		self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
		self.ctx.set_fill_style_str(color);
		self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
	}

	fn push_transform(&mut self, transform: &ViewTransform) {
		self.ctx.save();
		let _ = self.ctx.translate(transform.x, transform.y);
		let _ = self.ctx.scale(transform.k, transform.k);
	}

	fn pop_transform(&mut self) {
		self.ctx.restore();
	}

	fn line(&mut self, from: Point, to: Point, width: f64, color: &str) {
		self.ctx.set_line_width(width);
		self.ctx.set_stroke_style_str(color);
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
	}

	fn circle(&mut self, center: Point, radius: f64, style: CircleStyle<'_>) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.ctx.set_fill_style_str(style.fill);
		self.ctx.fill();
		self.ctx.set_stroke_style_str(style.stroke);
		self.ctx.set_line_width(style.line_width);
		self.ctx.stroke();
	}

	fn portrait(&mut self, owner: CharacterId, src: &str, center: Point, radius: f64) {
		let image = match self.portraits.get_or_load(owner, src) {
			Ok(image) => image,
			Err(e) => {
				warn!("portrait for {owner} unavailable: {e}");
				return;
			}
		};
		// Decoding is async; the onload bump repaints once it is ready.
		if !image.complete() || image.natural_width() == 0 {
			return;
		}
		self.ctx.save();
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.ctx.clip();
		let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
			image,
			center.x - radius,
			center.y - radius,
			radius * 2.0,
			radius * 2.0,
		);
		self.ctx.restore();
	}

	fn label(&mut self, text: &str, at: Point, font_px: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.set_font(&format!("{font_px}px sans-serif"));
		self.ctx.set_text_align("center");
		let _ = self.ctx.fill_text(text, at.x, at.y);
	}
}
