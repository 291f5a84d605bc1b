//! Per-frame draw lists handed to the renderer.
//!
//! A [`Scene`] says what to draw, already in screen space: edges first, then
//! resting nodes in id order, then the dragged and hovered nodes on top.

use super::graph::{Edge, Graph, NodeId};
use super::interaction::{CursorIcon, FrameInteraction};
use super::scale::{ScaleConfig, ScaledValues};
use super::theme::{Color, Theme};
use super::types::Vec2;
use super::viewport::Viewport;

/// An edge line with an arrowhead at the target node's rim.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeDraw {
	/// Source node center.
	pub start: Vec2,
	/// Arrow point, where the line ends.
	pub tip: Vec2,
	/// End of the wing rotated one way from the tip.
	pub left_wing: Vec2,
	/// End of the wing rotated the other way.
	pub right_wing: Vec2,
	/// Stroke and arrowhead fill.
	pub color: Color,
}

/// A filled node circle.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDraw {
	/// Node this circle stands for.
	pub id: NodeId,
	/// Screen-space center.
	pub center: Vec2,
	/// Radius in pixels.
	pub radius: f64,
	/// Fill color.
	pub color: Color,
}

/// Everything to paint for one frame, in painting order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	/// Canvas clear color.
	pub background: Color,
	/// Edges, drawn below nodes.
	pub edges: Vec<EdgeDraw>,
	/// Nodes, highlighted ones last.
	pub nodes: Vec<NodeDraw>,
	/// Cursor icon for the canvas.
	pub cursor: CursorIcon,
	/// Smoothed frames per second for the overlay.
	pub fps: f64,
	/// Overlay text color.
	pub overlay: Color,
}

impl Scene {
	/// Project the graph through `viewport` and order it for painting.
	pub fn build(
		graph: &Graph,
		viewport: &Viewport,
		interaction: &FrameInteraction,
		config: &ScaleConfig,
		theme: &Theme,
		fps: f64,
	) -> Self {
		let scale = ScaledValues::new(config, viewport.zoom());

		let edges = graph
			.edges()
			.iter()
			.map(|edge| edge_draw(graph, viewport, &scale, edge, theme.element))
			.collect();

		let node_draw = |id: NodeId, color: Color| NodeDraw {
			id,
			center: viewport.to_screen(graph.position(id)),
			radius: scale.node_radius,
			color,
		};

		let mut nodes: Vec<NodeDraw> = graph
			.node_ids()
			.filter(|&id| !interaction.is_highlighted(id))
			.map(|id| node_draw(id, theme.element))
			.collect();

		if let Some(id) = interaction.dragging() {
			nodes.push(node_draw(id, theme.element_hover));
		}
		if let Some(id) = interaction.hovered {
			if interaction.dragging() != Some(id) {
				nodes.push(node_draw(id, theme.element_hover));
			}
		}

		Self {
			background: theme.background,
			edges,
			nodes,
			cursor: interaction.cursor(),
			fps,
			overlay: theme.overlay,
		}
	}

	/// Overlay text, e.g. `"60 FPS"`.
	pub fn fps_label(&self) -> String {
		format!("{} FPS", self.fps.round() as i64)
	}
}

fn edge_draw(graph: &Graph, viewport: &Viewport, scale: &ScaledValues, edge: &Edge, color: Color) -> EdgeDraw {
	let start = viewport.to_screen(graph.position(edge.from()));
	let end = viewport.to_screen(graph.position(edge.to()));
	let dir = (end - start).normalize();

	let tip = end - dir * scale.node_radius;
	let left_wing = tip + dir.rotate(scale.wing_rotation) * scale.arrowhead_length;
	let right_wing = tip + dir.rotate(-scale.wing_rotation) * scale.arrowhead_length;

	EdgeDraw {
		start,
		tip,
		left_wing,
		right_wing,
		color,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::interaction::PersistentInteraction;

	fn graph() -> Graph {
		Graph::new(
			vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(0.0, 100.0)],
			&[(0, 1), (2, 2)],
		)
	}

	fn build(graph: &Graph, interaction: &FrameInteraction) -> Scene {
		Scene::build(
			graph,
			&Viewport::default(),
			interaction,
			&ScaleConfig::default(),
			&Theme::default(),
			60.0,
		)
	}

	#[test]
	fn arrow_tip_sits_on_target_rim() {
		let g = graph();
		let scene = build(&g, &FrameInteraction::default());
		let edge = &scene.edges[0];
		assert_eq!(edge.start, Vec2::ZERO);
		assert!((edge.tip.x - 90.0).abs() < 1e-9 && edge.tip.y.abs() < 1e-9);
		// wings point back along the edge, mirrored across it
		assert!(edge.left_wing.x < edge.tip.x && edge.right_wing.x < edge.tip.x);
		assert!((edge.left_wing.y + edge.right_wing.y).abs() < 1e-9);
		assert!(((edge.left_wing - edge.tip).length() - 10.0).abs() < 1e-9);
	}

	#[test]
	fn self_loop_edge_is_degenerate_but_finite() {
		let g = graph();
		let scene = build(&g, &FrameInteraction::default());
		let edge = &scene.edges[1];
		assert_eq!(edge.tip, Vec2::new(0.0, 100.0));
		assert_eq!(edge.left_wing, edge.tip);
	}

	#[test]
	fn highlighted_nodes_draw_last() {
		let g = graph();
		let interaction = FrameInteraction {
			hovered: g.node_id(0),
			..Default::default()
		};
		let scene = build(&g, &interaction);
		let order: Vec<usize> = scene.nodes.iter().map(|n| n.id.index()).collect();
		assert_eq!(order, vec![1, 2, 0]);
		assert_eq!(scene.nodes[2].color, Theme::default().element_hover);
		assert_eq!(scene.nodes[0].color, Theme::default().element);
		assert_eq!(scene.cursor, CursorIcon::Pointer);
	}

	#[test]
	fn dragged_node_draws_last_with_move_cursor() {
		let g = graph();
		let interaction = FrameInteraction::begin(PersistentInteraction {
			panning: false,
			dragging: g.node_id(1),
		});
		let scene = build(&g, &interaction);
		assert_eq!(scene.nodes.len(), 3);
		assert_eq!(scene.nodes.last().map(|n| n.id.index()), Some(1));
		assert_eq!(scene.cursor, CursorIcon::Move);
	}

	#[test]
	fn radius_scales_with_zoom() {
		let g = graph();
		let mut vp = Viewport::default();
		vp.set_zoom(3.0);
		let scene = Scene::build(
			&g,
			&vp,
			&FrameInteraction::default(),
			&ScaleConfig::default(),
			&Theme::default(),
			0.0,
		);
		assert!(scene.nodes.iter().all(|n| n.radius == 30.0));
		assert_eq!(scene.nodes[1].center, Vec2::new(300.0, 0.0));
	}

	#[test]
	fn fps_label_rounds() {
		let g = Graph::default();
		let mut scene = build(&g, &FrameInteraction::default());
		scene.fps = 59.6;
		assert_eq!(scene.fps_label(), "60 FPS");
	}
}
