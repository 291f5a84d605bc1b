//! Frame orchestration: the state that lives across frames and the per-frame
//! pipeline that advances it.
//!
//! Each [`ForceGraphState::frame`] call runs, in order:
//! 1. interaction state from input and the previous frame,
//! 2. the scene for the renderer, from the current positions,
//! 3. one force simulation step,
//! 4. pan and zoom updates to the viewport,
//! 5. placement of the dragged node under the cursor.
//!
//! Placing the dragged node last means next frame's hit testing sees the
//! cursor-driven position, not a simulated one.

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::GraphConfig;
use super::graph::{Graph, NodeId};
use super::input::InputFrame;
use super::interaction::{self, FrameInteraction, Mode, PersistentInteraction};
use super::scale::ScaleConfig;
use super::scene::Scene;
use super::simulation::ForceSimulator;
use super::theme::Theme;
use super::types::{GraphData, Vec2};
use super::viewport::Viewport;

/// Exponentially smoothed frame rate.
#[derive(Clone, Debug, Default)]
pub struct FpsMeter {
	fps: Option<f64>,
}

impl FpsMeter {
	/// Reaches ~63% of a step change in half a second.
	const SMOOTHING_SPEED: f64 = 2.0;

	/// Fold in one frame's duration. Non-positive durations are skipped.
	pub fn record(&mut self, frame_time: f64) {
		if !(frame_time > 0.0 && frame_time.is_finite()) {
			return;
		}
		let sample = 1.0 / frame_time;
		self.fps = Some(match self.fps {
			Some(fps) => {
				let factor = 1.0 - (-Self::SMOOTHING_SPEED * frame_time).exp();
				fps + (sample - fps) * factor
			}
			None => sample,
		});
	}

	/// Smoothed rate, 0 before the first sample.
	pub fn fps(&self) -> f64 {
		self.fps.unwrap_or(0.0)
	}
}

/// Everything the force graph owns across frames.
///
/// Created once when the canvas mounts, then advanced by the animation loop.
pub struct ForceGraphState {
	/// Nodes and edges being laid out.
	pub graph: Graph,
	/// Current pan and zoom.
	pub viewport: Viewport,
	/// World-space element sizes.
	pub scale: ScaleConfig,
	/// Colors for the scene.
	pub theme: Theme,
	interaction: PersistentInteraction,
	simulator: ForceSimulator,
	zoom_step: f64,
	last_cursor: Option<Vec2>,
	fps: FpsMeter,
}

impl ForceGraphState {
	/// Wrap an existing graph. `config` is repaired here and nowhere else.
	pub fn new(graph: Graph, config: &GraphConfig) -> Self {
		Self::with_sanitized(graph, config.clone().sanitized())
	}

	fn with_sanitized(graph: Graph, config: GraphConfig) -> Self {
		Self {
			graph,
			viewport: Viewport::new(&config.viewport),
			theme: config.resolve_theme(),
			scale: config.scale,
			interaction: PersistentInteraction::default(),
			simulator: ForceSimulator::new(config.physics),
			zoom_step: config.viewport.zoom_step,
			last_cursor: None,
			fps: FpsMeter::default(),
		}
	}

	/// Random graph per `config.layout`. Without a configured seed
	/// `fallback_seed` is used.
	pub fn random(config: &GraphConfig, fallback_seed: u64) -> Self {
		let config = config.clone().sanitized();
		let seed = config.layout.seed.unwrap_or(fallback_seed);
		info!("force graph: seeding layout with {}", seed);
		let graph = Graph::random(&config.layout, &mut StdRng::seed_from_u64(seed));
		Self::with_sanitized(graph, config)
	}

	/// Graph taken from explicit node and link data.
	pub fn from_data(data: &GraphData, config: &GraphConfig) -> Self {
		let graph = Graph::from_data(data);
		info!(
			"force graph: loaded {} nodes, {} edges",
			graph.node_count(),
			graph.edge_count()
		);
		Self::new(graph, config)
	}

	/// Pan and drag state left by the last frame.
	pub fn interaction(&self) -> PersistentInteraction {
		self.interaction
	}

	/// Mode left by the last frame.
	pub fn mode(&self) -> Mode {
		self.interaction.mode()
	}

	/// Node currently bound to the cursor.
	pub fn dragged(&self) -> Option<NodeId> {
		self.interaction.dragging
	}

	/// Smoothed frames per second.
	pub fn fps(&self) -> f64 {
		self.fps.fps()
	}

	/// Advance one frame and return what to draw for it.
	pub fn frame(&mut self, input: &InputFrame) -> Scene {
		let state = interaction::compute_state(
			self.interaction,
			input,
			&self.graph,
			&self.viewport,
			self.scale.node_radius,
		);

		self.fps.record(input.frame_time);
		let scene = Scene::build(
			&self.graph,
			&self.viewport,
			&state,
			&self.scale,
			&self.theme,
			self.fps.fps(),
		);

		self.simulator
			.step(&mut self.graph, state.dragging(), input.frame_time);
		self.update_view(&state, input);

		self.interaction = state.persistent;
		self.last_cursor = Some(input.cursor);
		scene
	}

	fn update_view(&mut self, state: &FrameInteraction, input: &InputFrame) {
		if state.panning() {
			let delta = self
				.last_cursor
				.map(|last| input.cursor - last)
				.unwrap_or_default();
			self.viewport.pan_by_screen(delta);
		}

		if state.zoom_delta != 0.0 {
			self.viewport
				.apply_zoom_delta(state.zoom_delta * self.zoom_step);
		}

		if let Some(id) = state.dragging() {
			let cursor = self.viewport.to_world(input.cursor);
			self.graph.set_position(id, cursor);
		}
	}
}
