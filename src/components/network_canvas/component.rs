use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::surface::{CanvasSurface, PortraitCache};
use crate::components::error::HostError;
use crate::network::{Interaction, Network, Point, ViewTransform, Viewport, render};

/// Fallback size when the canvas has not been laid out yet.
const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, HostError> {
	canvas
		.get_context("2d")?
		.ok_or(HostError::NoContext)?
		.dyn_into()
		.map_err(|_| HostError::NoContext)
}

/// Repaints the whole scene, resizing the backing store to the element's CSS
/// size times the device pixel ratio.
fn paint(
	canvas: &HtmlCanvasElement,
	network: &Network,
	transform: &ViewTransform,
	portraits: &mut PortraitCache,
) -> Result<(), HostError> {
	let window = web_sys::window().ok_or(HostError::NoWindow)?;
	let (w, h) = match (canvas.client_width(), canvas.client_height()) {
		(0, _) | (_, 0) => FALLBACK_SIZE,
		(w, h) => (w as f64, h as f64),
	};
	let dpr = window.device_pixel_ratio();
	let (bw, bh) = ((w * dpr) as u32, (h * dpr) as u32);
	if canvas.width() != bw || canvas.height() != bh {
		canvas.set_width(bw);
		canvas.set_height(bh);
	}

	let ctx = context_2d(canvas)?;
	ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
	portraits.prune(network);
	render(
		network,
		transform,
		&mut CanvasSurface {
			ctx: &ctx,
			portraits,
			width: w,
			height: h,
		},
	);
	Ok(())
}

/// Pointer position relative to the canvas' top-left corner.
fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Pannable, zoomable drawing of the network with draggable nodes.
#[component]
pub fn NetworkCanvas(
	network: RwSignal<Network>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let viewport = RwSignal::new(Viewport::new());
	let portraits_loaded = RwSignal::new(0u64);
	let resized = RwSignal::new(0u64);
	let portraits = Rc::new(RefCell::new(PortraitCache::new(portraits_loaded)));

	let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
		resized.update(|n| *n += 1);
	});
	on_cleanup(move || resize_handle.remove());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		portraits_loaded.track();
		resized.track();
		let transform = viewport.with(|v| v.transform);
		network.with(|net| {
			if let Err(e) = paint(&canvas, net, &transform, &mut portraits.borrow_mut()) {
				error!("failed to paint network: {e}");
			}
		});
	});

	let on_mousedown = move |ev: MouseEvent| {
		let Some(p) = pointer(canvas_ref, &ev) else {
			return;
		};
		network.with_untracked(|net| {
			viewport.update(|v| {
				v.pointer_down(net, p);
			})
		});
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some(p) = pointer(canvas_ref, &ev) else {
			return;
		};
		let current = viewport.get_untracked();
		match current.interaction {
			Interaction::Idle => {}
			Interaction::DraggingNode(_) => network.maybe_update(|net| current.drag_to(net, p)),
			Interaction::Panning { .. } => viewport.maybe_update(|v| v.pan_to(p)),
		}
	};

	let on_mouseup = move |_: MouseEvent| viewport.update(|v| v.pointer_up());
	let on_mouseleave = move |_: MouseEvent| viewport.update(|v| v.pointer_leave());

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(p) = pointer(canvas_ref, &ev) else {
			return;
		};
		viewport.maybe_update(|v| v.wheel(p, ev.delta_y()));
	};

	let size = match (width, height) {
		(Some(w), Some(h)) => format!("width: {w}px; height: {h}px;"),
		(Some(w), None) => format!("width: {w}px; height: 100%;"),
		(None, Some(h)) => format!("width: 100%; height: {h}px;"),
		(None, None) => "width: 100%; height: 100%;".to_owned(),
	};
	let style = move || {
		let cursor = viewport.with(|v| match v.interaction {
			Interaction::Idle => "grab",
			_ => "grabbing",
		});
		format!("display: block; {size} cursor: {cursor};")
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style=style
		/>
	}
}
