//! Frame-by-frame interaction state machine.
//!
//! Raw input is folded into a single [`FrameInteraction`] once per frame.
//! Panning and dragging are modal: while either is active no hover or drag
//! initiation is evaluated. Only [`PersistentInteraction`] crosses frame
//! boundaries; hover and zoom delta are rebuilt from scratch every frame.

use log::debug;

use super::graph::{Graph, NodeId};
use super::input::InputFrame;
use super::types::Vec2;
use super::viewport::Viewport;

/// Interaction fields carried from one frame to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersistentInteraction {
	/// Middle-button pan in progress.
	pub panning: bool,
	/// Node bound to the cursor until the left button is released.
	pub dragging: Option<NodeId>,
}

impl PersistentInteraction {
	/// Panning takes precedence when a drag is also held.
	pub fn mode(&self) -> Mode {
		match (self.panning, self.dragging) {
			(true, _) => Mode::Panning,
			(false, Some(id)) => Mode::Dragging(id),
			(false, None) => Mode::Idle,
		}
	}
}

/// Coarse interaction mode, as seen by the rest of the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Nothing held; hover is evaluated.
	Idle,
	/// Middle button held.
	Panning,
	/// A node follows the cursor.
	Dragging(NodeId),
}

/// Cursor icon suggested to the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorIcon {
	/// Plain arrow.
	#[default]
	Default,
	/// Over a node that can be grabbed.
	Pointer,
	/// Dragging a node.
	Move,
}

impl CursorIcon {
	/// CSS `cursor` property value.
	pub fn css(self) -> &'static str {
		match self {
			CursorIcon::Default => "default",
			CursorIcon::Pointer => "pointer",
			CursorIcon::Move => "move",
		}
	}
}

/// The interaction state for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInteraction {
	/// Pan and drag state, written back at the end of the frame.
	pub persistent: PersistentInteraction,
	/// Node under the cursor while idle. Never carried over.
	pub hovered: Option<NodeId>,
	/// Wheel notches accumulated this frame, before zoom step scaling.
	pub zoom_delta: f64,
}

impl FrameInteraction {
	/// Start a frame from the previous frame's persistent fields.
	pub fn begin(prev: PersistentInteraction) -> Self {
		Self {
			persistent: prev,
			hovered: None,
			zoom_delta: 0.0,
		}
	}

	/// Whether a pan is held this frame.
	pub fn panning(&self) -> bool {
		self.persistent.panning
	}

	/// The node being dragged this frame.
	pub fn dragging(&self) -> Option<NodeId> {
		self.persistent.dragging
	}

	/// See [`PersistentInteraction::mode`].
	pub fn mode(&self) -> Mode {
		self.persistent.mode()
	}

	/// Dragging wins over hovering.
	pub fn cursor(&self) -> CursorIcon {
		if self.persistent.dragging.is_some() {
			CursorIcon::Move
		} else if self.hovered.is_some() {
			CursorIcon::Pointer
		} else {
			CursorIcon::Default
		}
	}

	/// Whether `id` should be drawn highlighted on top.
	pub fn is_highlighted(&self, id: NodeId) -> bool {
		self.persistent.dragging == Some(id) || self.hovered == Some(id)
	}
}

/// Screen-space circle test against a node's projected position.
pub fn node_contains(viewport: &Viewport, node_pos: Vec2, node_radius: f64, point: Vec2) -> bool {
	let radius = viewport.scale_length(node_radius);
	viewport.to_screen(node_pos).distance_squared(point) <= radius * radius
}

/// First node, in ascending id order, whose circle contains `point`.
pub fn hit_test(graph: &Graph, viewport: &Viewport, node_radius: f64, point: Vec2) -> Option<NodeId> {
	graph
		.nodes()
		.iter()
		.find(|node| node_contains(viewport, node.pos, node_radius, point))
		.map(|node| node.id())
}

/// Derive this frame's interaction from input and the previous frame.
pub fn compute_state(
	prev: PersistentInteraction,
	input: &InputFrame,
	graph: &Graph,
	viewport: &Viewport,
	node_radius: f64,
) -> FrameInteraction {
	let mut state = FrameInteraction::begin(prev);

	if state.persistent.panning {
		if !input.middle_down {
			debug!("interaction: pan ended");
			state.persistent.panning = false;
		}
		return state;
	}

	if input.middle_down {
		debug!("interaction: pan started");
		state.persistent.panning = true;
		return state;
	}

	// horizontal wheel zooms out, vertical zooms in
	state.zoom_delta -= input.wheel.x;
	state.zoom_delta += input.wheel.y;

	if let Some(id) = state.persistent.dragging {
		if !input.left_down {
			debug!("interaction: drag of node {} ended", id.index());
			state.persistent.dragging = None;
		}
		return state;
	}

	if let Some(id) = hit_test(graph, viewport, node_radius, input.cursor) {
		if input.left_down {
			debug!("interaction: drag of node {} started", id.index());
			state.persistent.dragging = Some(id);
		} else {
			state.hovered = Some(id);
		}
	}

	state
}
