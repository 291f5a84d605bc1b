//! graph-canvas: Interactive force-directed graph layout in the browser.
//!
//! This crate provides a frame-synchronous layout engine (viewport, graph
//! store, interaction state machine and force simulator) plus a WASM canvas
//! component that drives it with mouse and wheel input.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::force_graph::{
	ForceGraphCanvas, ForceGraphState, GraphConfig, GraphData, GraphLink, GraphNode, InputFrame,
	Scene, Vec2, Viewport,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graph-canvas: logging initialized");
}

/// Read the text of a `<script>` element by id.
fn script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Parse JSON embedded in a `<script id=...>` element.
fn load_script_json<T: DeserializeOwned>(id: &str) -> Option<T> {
	let json_text = script_text(id)?;
	match serde_json::from_str::<T>(&json_text) {
		Ok(value) => Some(value),
		Err(e) => {
			warn!("graph-canvas: failed to parse #{}: {}", id, e);
			None
		}
	}
}

/// Load configuration from a script element with id="graph-config".
/// Repairs happen when the canvas builds its state.
fn load_config() -> GraphConfig {
	load_script_json::<GraphConfig>("graph-config").unwrap_or_default()
}

/// Load an explicit graph from a script element with id="graph-data".
/// Expected format: JSON with { nodes: [{x, y}, ...], links: [{source, target}, ...] }
fn load_graph_data() -> Option<GraphData> {
	let data = load_script_json::<GraphData>("graph-data")?;
	info!(
		"graph-canvas: loaded {} nodes, {} links",
		data.nodes.len(),
		data.links.len()
	);
	Some(data)
}

/// Main application component.
/// Loads configuration and optional graph data from the DOM and renders the
/// force-directed canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let data = load_graph_data();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="graphs" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<ForceGraphCanvas config=Some(config) data=data fullscreen=true />
			<div class="graph-overlay">
				<p class="subtitle">"Drag nodes to reposition. Scroll to zoom. Middle-drag to pan."</p>
			</div>
		</div>
	}
}
