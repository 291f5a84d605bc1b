//! Canvas rendering for the force graph.
//!
//! Paints a [`Scene`] in list order: background, edges (line then arrowhead),
//! nodes, then the FPS overlay. All coordinates are already screen space, so
//! no canvas transform is applied.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::{EdgeDraw, NodeDraw, Scene};

const OVERLAY_FONT: &str = "20px sans-serif";
const OVERLAY_POS: (f64, f64) = (5.0, 5.0);

/// Renders the complete scene to the canvas.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(&scene.background.to_css());
	ctx.fill_rect(0.0, 0.0, width, height);

	ctx.set_line_width(1.0);
	for edge in &scene.edges {
		draw_edge(ctx, edge);
	}

	for node in &scene.nodes {
		draw_node(ctx, node);
	}

	draw_overlay(scene, ctx);
}

fn draw_edge(ctx: &CanvasRenderingContext2d, edge: &EdgeDraw) {
	let color = edge.color.to_css();

	ctx.set_fill_style_str(&color);
	ctx.begin_path();
	ctx.move_to(edge.right_wing.x, edge.right_wing.y);
	ctx.line_to(edge.tip.x, edge.tip.y);
	ctx.line_to(edge.left_wing.x, edge.left_wing.y);
	ctx.close_path();
	ctx.fill();

	ctx.set_stroke_style_str(&color);
	ctx.begin_path();
	ctx.move_to(edge.start.x, edge.start.y);
	ctx.line_to(edge.tip.x, edge.tip.y);
	ctx.stroke();
}

fn draw_node(ctx: &CanvasRenderingContext2d, node: &NodeDraw) {
	ctx.set_fill_style_str(&node.color.to_css());
	ctx.begin_path();
	let _ = ctx.arc(node.center.x, node.center.y, node.radius, 0.0, 2.0 * PI);
	ctx.fill();
}

fn draw_overlay(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&scene.overlay.to_css());
	ctx.set_font(OVERLAY_FONT);
	ctx.set_text_baseline("top");
	let _ = ctx.fill_text(&scene.fps_label(), OVERLAY_POS.0, OVERLAY_POS.1);
}
