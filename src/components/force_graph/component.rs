//! Leptos component wrapping the force-directed graph canvas.
//!
//! The component creates an HTML canvas element and feeds mouse and wheel
//! events into an [`InputSampler`]. An animation loop runs via
//! `requestAnimationFrame`; each frame it takes the sampled input, advances
//! the [`ForceGraphState`] and paints the resulting scene.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::config::GraphConfig;
use super::input::{InputSampler, PIXELS_PER_NOTCH};
use super::render;
use super::state::ForceGraphState;
use super::types::GraphData;

/// Longest frame fed to the simulation, so a backgrounded tab does not
/// fling nodes across the canvas when it resumes.
const MAX_FRAME_TIME: f64 = 0.1;

/// Pixels per wheel "line" for line-mode wheel events.
const WHEEL_LINE_PX: f64 = PIXELS_PER_NOTCH / 3.0;

/// Middle mouse button as reported by `MouseEvent.button`.
const MIDDLE_BUTTON: i16 = 1;

/// Bundles graph state with the shell-side bookkeeping for one canvas.
struct GraphContext {
	state: ForceGraphState,
	input: InputSampler,
	width: f64,
	height: f64,
	last_timestamp: Option<f64>,
	cursor: &'static str,
}

fn canvas_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders an interactive force-directed graph on a canvas element.
///
/// Without `data` a random graph is generated from `config.layout`. The
/// component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and resize with the window.
/// Explicit `width`/`height` override automatic sizing.
#[component]
pub fn ForceGraphCanvas(
	/// Layout, physics, viewport and theme settings.
	#[prop(default = None)]
	config: Option<GraphConfig>,
	/// Explicit graph. A random one is generated when absent.
	#[prop(default = None)]
	data: Option<GraphData>,
	/// Fill the window and follow its size.
	#[prop(default = false)]
	fullscreen: bool,
	/// Fixed canvas width in pixels.
	#[prop(default = None)]
	width: Option<f64>,
	/// Fixed canvas height in pixels.
	#[prop(default = None)]
	height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			warn!("force graph: no window, not starting");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("force graph: 2d context has unexpected type");
					return;
				}
			},
			_ => {
				warn!("force graph: canvas has no 2d context");
				return;
			}
		};

		let state = match &data {
			Some(data) => ForceGraphState::from_data(data, &config),
			None => ForceGraphState::random(&config, js_sys::Date::now() as u64),
		};

		*context_init.borrow_mut() = Some(GraphContext {
			state,
			input: InputSampler::default(),
			width: w,
			height: h,
			last_timestamp: None,
			cursor: "default",
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.width = nw;
					c.height = nh;
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner, canvas_anim) =
			(context_init.clone(), animate_init.clone(), canvas.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let frame_time = c
					.last_timestamp
					.map(|last| ((timestamp - last) / 1000.0).clamp(0.0, MAX_FRAME_TIME))
					.unwrap_or(0.0);
				c.last_timestamp = Some(timestamp);

				let input = c.input.take_frame(frame_time);
				let scene = c.state.frame(&input);
				render::render(&scene, &ctx, c.width, c.height);

				let cursor = scene.cursor.css();
				if cursor != c.cursor {
					set_cursor(&canvas_anim, cursor);
					c.cursor = cursor;
				}
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() == MIDDLE_BUTTON {
			// suppress the browser's autoscroll
			ev.prevent_default();
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_position(&canvas, &ev);
		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.input.on_mouse_move(x, y);
			c.input.on_buttons(ev.buttons());
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_position(&canvas, &ev);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.input.on_mouse_move(x, y);
			c.input.on_buttons(ev.buttons());
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |ev: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.input.on_buttons(ev.buttons());
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.input.on_leave();
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let unit = if ev.delta_mode() == WheelEvent::DOM_DELTA_LINE {
			WHEEL_LINE_PX
		} else {
			1.0
		};
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			c.input.on_wheel(ev.delta_x() * unit, ev.delta_y() * unit);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: default;"
		/>
	}
}

/// Set the CSS `cursor` of the canvas.
fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
	// prelude's `ElementExt::style` shadows the DOM getter
	let style = web_sys::HtmlElement::style(canvas);
	if let Err(e) = style.set_property("cursor", cursor) {
		warn!("force graph: could not set cursor: {:?}", e);
	}
}

fn window_size(window: &Window) -> (f64, f64) {
	let w = window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(800.0);
	let h = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(600.0);
	(w, h)
}
