//! Frame-by-frame scenarios driven through the public state API.

// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use graph_canvas::components::force_graph::graph::Graph;
use graph_canvas::components::force_graph::interaction::{CursorIcon, Mode};
use graph_canvas::{ForceGraphState, GraphConfig, InputFrame, Vec2};

const DT: f64 = 0.016;

fn triangle_state() -> ForceGraphState {
	let graph = Graph::new(
		vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)],
		&[],
	);
	ForceGraphState::new(graph, &GraphConfig::default())
}

fn frame_at(x: f64, y: f64) -> InputFrame {
	InputFrame {
		cursor: Vec2::new(x, y),
		frame_time: DT,
		..Default::default()
	}
}

fn assert_close(a: Vec2, b: Vec2) {
	assert!(
		(a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
		"{a:?} != {b:?}"
	);
}

#[test]
fn left_press_on_first_node_starts_drag() {
	let mut state = triangle_state();
	let scene = state.frame(&InputFrame {
		left_down: true,
		..frame_at(0.0, 0.0)
	});

	let first = state.graph.node_id(0).unwrap();
	assert_eq!(state.mode(), Mode::Dragging(first));
	assert_eq!(scene.cursor, CursorIcon::Move);
	assert_eq!(scene.nodes.last().map(|n| n.id), Some(first));
	assert_close(state.graph.position(first), Vec2::ZERO);
}

#[test]
fn dragged_node_tracks_cursor_through_pan_and_zoom() {
	let mut state = triangle_state();
	state.frame(&InputFrame {
		left_down: true,
		..frame_at(0.0, 0.0)
	});
	let first = state.graph.node_id(0).unwrap();

	let path = [(40.0, 25.0, 0.0), (80.0, -10.0, 2.0), (120.0, 60.0, -1.0), (5.0, 5.0, 0.0)];
	for &(x, y, wheel) in &path {
		state.frame(&InputFrame {
			left_down: true,
			wheel: Vec2::new(0.0, wheel),
			..frame_at(x, y)
		});
		let expected = state.viewport.to_world(Vec2::new(x, y));
		assert_close(state.graph.position(first), expected);
		assert_eq!(state.dragged(), Some(first));
	}

	state.frame(&frame_at(5.0, 5.0));
	assert_eq!(state.mode(), Mode::Idle);
}

#[test]
fn dragged_node_still_repels_its_neighbours() {
	let graph = Graph::new(vec![Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)], &[]);
	let mut state = ForceGraphState::new(graph, &GraphConfig::default());
	for _ in 0..5 {
		state.frame(&InputFrame {
			left_down: true,
			..frame_at(0.0, 0.0)
		});
	}
	let pinned = state.graph.position(state.graph.node_id(0).unwrap());
	let pushed = state.graph.position(state.graph.node_id(1).unwrap());
	assert_close(pinned, Vec2::ZERO);
	assert!(pushed.x > 20.0);
}

#[test]
fn middle_press_during_drag_keeps_the_drag() {
	let mut state = triangle_state();
	state.frame(&InputFrame {
		left_down: true,
		..frame_at(0.0, 0.0)
	});
	let first = state.graph.node_id(0).unwrap();
	state.frame(&InputFrame {
		left_down: true,
		middle_down: true,
		..frame_at(20.0, 0.0)
	});
	assert_eq!(state.mode(), Mode::Panning);
	assert_eq!(state.dragged(), Some(first));

	state.frame(&InputFrame {
		left_down: true,
		..frame_at(20.0, 0.0)
	});
	assert_eq!(state.mode(), Mode::Dragging(first));
}

#[test]
fn identity_zoom_survives_min_zoom_above_one() {
	let config = GraphConfig::from_json(r#"{"viewport":{"min_zoom":2.0}}"#);
	let state = ForceGraphState::new(Graph::default(), &config);
	assert_eq!(state.viewport.zoom(), 1.0);
}

#[test]
fn middle_button_wins_over_drag() {
	let mut state = triangle_state();
	let scene = state.frame(&InputFrame {
		left_down: true,
		middle_down: true,
		..frame_at(0.0, 0.0)
	});
	assert_eq!(state.mode(), Mode::Panning);
	assert_eq!(state.interaction().mode(), state.mode());
	assert_eq!(state.dragged(), None);
	assert_eq!(scene.cursor, CursorIcon::Default);
}

#[test]
fn no_hover_while_panning() {
	let mut state = triangle_state();
	state.frame(&InputFrame {
		middle_down: true,
		..frame_at(500.0, 500.0)
	});
	// cursor sweeps over node 0 while the pan is held
	let scene = state.frame(&InputFrame {
		middle_down: true,
		..frame_at(0.0, 0.0)
	});
	assert_eq!(scene.cursor, CursorIcon::Default);
	assert_eq!(state.mode(), Mode::Panning);
}

#[test]
fn pan_follows_cursor_delta_until_release() {
	let graph = Graph::new(vec![Vec2::new(1000.0, 1000.0)], &[]);
	let mut state = ForceGraphState::new(graph, &GraphConfig::default());

	state.frame(&frame_at(100.0, 100.0));
	state.frame(&InputFrame {
		middle_down: true,
		..frame_at(110.0, 100.0)
	});
	assert_close(state.viewport.pan(), Vec2::new(10.0, 0.0));

	state.frame(&InputFrame {
		middle_down: true,
		..frame_at(130.0, 120.0)
	});
	assert_close(state.viewport.pan(), Vec2::new(30.0, 20.0));

	state.frame(&frame_at(200.0, 200.0));
	assert_close(state.viewport.pan(), Vec2::new(30.0, 20.0));
	assert_eq!(state.mode(), Mode::Idle);
}

#[test]
fn hover_highlights_node_under_cursor() {
	let mut state = triangle_state();
	let scene = state.frame(&frame_at(0.0, 18.0));
	let third = state.graph.node_id(2).unwrap();
	assert_eq!(scene.cursor, CursorIcon::Pointer);
	assert_eq!(scene.nodes.last().map(|n| n.id), Some(third));
	assert_eq!(scene.nodes.last().map(|n| n.color), Some(state.theme.element_hover));
	// hover does not persist into the next frame
	let scene = state.frame(&frame_at(900.0, 900.0));
	assert_eq!(scene.cursor, CursorIcon::Default);
}

#[test]
fn empty_graph_frame_completes() {
	let mut state = ForceGraphState::new(Graph::default(), &GraphConfig::default());
	let scene = state.frame(&InputFrame {
		left_down: true,
		wheel: Vec2::new(0.0, 1.0),
		..frame_at(3.0, 4.0)
	});
	assert!(scene.nodes.is_empty());
	assert!(scene.edges.is_empty());
	assert_eq!(state.mode(), Mode::Idle);
}

#[test]
fn one_wheel_notch_adds_one_zoom_step() {
	let mut state = triangle_state();
	let step = GraphConfig::default().viewport.zoom_step;
	state.frame(&InputFrame {
		wheel: Vec2::new(0.0, 1.0),
		..frame_at(500.0, 500.0)
	});
	assert!((state.viewport.zoom() - (1.0 + step)).abs() < 1e-12);

	state.frame(&frame_at(500.0, 500.0));
	assert!((state.viewport.zoom() - (1.0 + step)).abs() < 1e-12);
}

#[test]
fn extreme_wheel_input_keeps_zoom_positive() {
	let mut state = triangle_state();
	state.frame(&InputFrame {
		wheel: Vec2::new(0.0, -1000.0),
		..frame_at(500.0, 500.0)
	});
	assert!(state.viewport.zoom() > 0.0);
	assert_eq!(state.viewport.zoom(), GraphConfig::default().viewport.min_zoom);

	// the view stays invertible
	let p = Vec2::new(12.0, -7.0);
	assert_close(state.viewport.to_world(state.viewport.to_screen(p)), p);
}

#[test]
fn seeded_random_layouts_are_reproducible() {
	let config = GraphConfig::from_json(r#"{"layout":{"node_count":50,"edge_count":80,"seed":3}}"#);
	let mut a = ForceGraphState::random(&config, 100);
	let mut b = ForceGraphState::random(&config, 200);
	for _ in 0..3 {
		a.frame(&frame_at(-100.0, -100.0));
		b.frame(&frame_at(-100.0, -100.0));
	}
	for (na, nb) in a.graph.nodes().iter().zip(b.graph.nodes()) {
		assert_eq!(na.pos, nb.pos);
	}
}
