//! Graph store: fixed-size node and edge collections.
//!
//! Nodes are addressed by [`NodeId`], which only the owning [`Graph`] can
//! mint, so every id held elsewhere indexes a live node. Edges store the ids
//! of their endpoints rather than references into node storage.

use log::{info, warn};
use rand::Rng;
use serde::Deserialize;

use super::types::{GraphData, Vec2};

/// Index of a node inside its graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
	/// Position of the node in [`Graph::nodes`].
	pub fn index(self) -> usize {
		self.0
	}
}

/// A graph vertex.
#[derive(Clone, Debug)]
pub struct Node {
	id: NodeId,
	/// World-space position.
	pub pos: Vec2,
}

impl Node {
	/// This node's id.
	pub fn id(&self) -> NodeId {
		self.id
	}
}

/// A directed edge `from -> to`.
#[derive(Clone, Debug)]
pub struct Edge {
	from: NodeId,
	to: NodeId,
}

impl Edge {
	/// Source endpoint.
	pub fn from(&self) -> NodeId {
		self.from
	}

	/// Target endpoint, where the arrowhead is drawn.
	pub fn to(&self) -> NodeId {
		self.to
	}

	/// Whether both endpoints are the same node.
	pub fn is_self_loop(&self) -> bool {
		self.from == self.to
	}
}

/// Parameters for the random graph generator.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Number of generated nodes.
	pub node_count: usize,
	/// Number of generated edges.
	pub edge_count: usize,
	/// Width of the rectangle nodes are scattered in.
	pub width: f64,
	/// Height of the rectangle nodes are scattered in.
	pub height: f64,
	/// Inset from every side of the rectangle.
	pub margin: f64,
	/// Fixed seed for reproducible layouts. `None` seeds from the clock.
	pub seed: Option<u64>,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			node_count: 2000,
			edge_count: 4000,
			width: 1600.0,
			height: 1200.0,
			margin: 50.0,
			seed: None,
		}
	}
}

impl LayoutConfig {
	/// Repair bounds that would leave no room to place nodes.
	pub fn sanitized(mut self) -> Self {
		if !(self.width.is_finite() && self.width > 0.0) {
			warn!("layout: invalid width {}, using 1600", self.width);
			self.width = 1600.0;
		}
		if !(self.height.is_finite() && self.height > 0.0) {
			warn!("layout: invalid height {}, using 1200", self.height);
			self.height = 1200.0;
		}
		let max_margin = self.width.min(self.height) / 2.0;
		if !(self.margin.is_finite() && (0.0..max_margin).contains(&self.margin)) {
			warn!("layout: margin {} does not fit the bounds, using 0", self.margin);
			self.margin = 0.0;
		}
		if self.node_count == 0 && self.edge_count > 0 {
			warn!("layout: {} edges requested without nodes, dropping them", self.edge_count);
			self.edge_count = 0;
		}
		self
	}
}

/// Owns all nodes and edges for the session. Counts never change after
/// construction.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
}

impl Graph {
	/// Build a graph from node positions and `(from, to)` index pairs.
	///
	/// Links referencing a node outside `positions` are dropped.
	pub fn new(positions: Vec<Vec2>, links: &[(usize, usize)]) -> Self {
		let nodes: Vec<Node> = positions
			.into_iter()
			.enumerate()
			.map(|(i, pos)| Node { id: NodeId(i), pos })
			.collect();

		let node_count = nodes.len();
		let edges: Vec<Edge> = links
			.iter()
			.filter(|&&(from, to)| {
				let valid = from < node_count && to < node_count;
				if !valid {
					warn!("graph: dropping link {from} -> {to}, only {node_count} nodes");
				}
				valid
			})
			.map(|&(from, to)| Edge {
				from: NodeId(from),
				to: NodeId(to),
			})
			.collect();

		Self { nodes, edges }
	}

	/// Build a graph from deserialized graph data.
	pub fn from_data(data: &GraphData) -> Self {
		let positions = data.nodes.iter().map(|n| Vec2::new(n.x, n.y)).collect();
		let links: Vec<(usize, usize)> = data.links.iter().map(|l| (l.source, l.target)).collect();
		Self::new(positions, &links)
	}

	/// Scatter `node_count` nodes uniformly inside the configured bounds and
	/// connect `edge_count` uniformly chosen endpoint pairs.
	pub fn random(layout: &LayoutConfig, rng: &mut impl Rng) -> Self {
		let (min_x, max_x) = (layout.margin, layout.width - layout.margin);
		let (min_y, max_y) = (layout.margin, layout.height - layout.margin);

		let positions: Vec<Vec2> = (0..layout.node_count)
			.map(|_| Vec2::new(sample(rng, min_x, max_x), sample(rng, min_y, max_y)))
			.collect();

		let n = layout.node_count;
		let links: Vec<(usize, usize)> = if n == 0 {
			Vec::new()
		} else {
			(0..layout.edge_count)
				.map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
				.collect()
		};

		info!(
			"graph: generated {} nodes, {} edges",
			positions.len(),
			links.len()
		);
		Self::new(positions, &links)
	}

	/// All nodes, in id order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// All edges, in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Ids of all nodes in ascending order.
	pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.nodes.iter().map(Node::id)
	}

	/// Look up the id for a raw index, if that node exists.
	pub fn node_id(&self, index: usize) -> Option<NodeId> {
		(index < self.nodes.len()).then_some(NodeId(index))
	}

	/// World-space position of `id`.
	pub fn position(&self, id: NodeId) -> Vec2 {
		self.nodes[id.0].pos
	}

	/// Move `id` to a world-space position.
	pub fn set_position(&mut self, id: NodeId, pos: Vec2) {
		self.nodes[id.0].pos = pos;
	}

	pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
		&mut self.nodes
	}
}

/// Uniform sample in `[low, high)`, or `low` when the range is empty.
fn sample(rng: &mut impl Rng, low: f64, high: f64) -> f64 {
	if high > low { rng.random_range(low..high) } else { low }
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn ids_follow_insertion_order() {
		let g = Graph::new(vec![Vec2::ZERO, Vec2::new(1.0, 0.0)], &[(0, 1)]);
		let ids: Vec<usize> = g.node_ids().map(NodeId::index).collect();
		assert_eq!(ids, vec![0, 1]);
	}

	#[test]
	fn out_of_range_links_are_dropped() {
		let g = Graph::new(vec![Vec2::ZERO], &[(0, 0), (0, 3), (5, 0)]);
		assert_eq!(g.node_count(), 1);
		assert_eq!(g.edge_count(), 1);
		assert!(g.edges()[0].is_self_loop());
	}

	#[test]
	fn node_id_rejects_unknown_index() {
		let g = Graph::new(vec![Vec2::ZERO; 2], &[]);
		assert!(g.node_id(1).is_some());
		assert!(g.node_id(2).is_none());
	}

	#[test]
	fn random_graph_respects_counts_and_bounds() {
		let layout = LayoutConfig {
			node_count: 200,
			edge_count: 400,
			..Default::default()
		};
		let g = Graph::random(&layout, &mut StdRng::seed_from_u64(1));
		assert_eq!(g.node_count(), 200);
		assert_eq!(g.edge_count(), 400);
		for node in g.nodes() {
			assert!(node.pos.x >= 50.0 && node.pos.x < 1550.0);
			assert!(node.pos.y >= 50.0 && node.pos.y < 1150.0);
		}
		for edge in g.edges() {
			assert!(edge.from().index() < 200);
			assert!(edge.to().index() < 200);
		}
	}

	#[test]
	fn same_seed_same_graph() {
		let layout = LayoutConfig {
			node_count: 30,
			edge_count: 60,
			..Default::default()
		};
		let a = Graph::random(&layout, &mut StdRng::seed_from_u64(42));
		let b = Graph::random(&layout, &mut StdRng::seed_from_u64(42));
		let c = Graph::random(&layout, &mut StdRng::seed_from_u64(43));
		let positions = |g: &Graph| g.nodes().iter().map(|n| n.pos).collect::<Vec<_>>();
		let links = |g: &Graph| {
			g.edges()
				.iter()
				.map(|e| (e.from(), e.to()))
				.collect::<Vec<_>>()
		};
		assert_eq!(positions(&a), positions(&b));
		assert_eq!(links(&a), links(&b));
		assert_ne!(positions(&a), positions(&c));
	}

	#[test]
	fn collapsed_bounds_place_nodes_on_the_margin() {
		let layout = LayoutConfig {
			node_count: 4,
			edge_count: 0,
			width: 100.0,
			height: 100.0,
			margin: 50.0,
			seed: None,
		};
		let g = Graph::random(&layout, &mut StdRng::seed_from_u64(5));
		for node in g.nodes() {
			assert_eq!(node.pos, Vec2::new(50.0, 50.0));
		}
	}

	#[test]
	fn random_graph_without_nodes_has_no_edges() {
		let layout = LayoutConfig {
			node_count: 0,
			edge_count: 10,
			..Default::default()
		};
		let g = Graph::random(&layout, &mut StdRng::seed_from_u64(1));
		assert_eq!(g.node_count(), 0);
		assert_eq!(g.edge_count(), 0);
	}

	#[test]
	fn sanitize_repairs_oversized_margin() {
		let layout = LayoutConfig {
			width: 100.0,
			height: 80.0,
			margin: 60.0,
			..Default::default()
		}
		.sanitized();
		assert_eq!(layout.margin, 0.0);
	}

	#[test]
	fn from_data_maps_links() {
		let data: GraphData = serde_json::from_str(
			r#"{"nodes":[{"x":0,"y":0},{"x":5,"y":5}],"links":[{"source":1,"target":0}]}"#,
		)
		.unwrap();
		let g = Graph::from_data(&data);
		assert_eq!(g.position(NodeId(1)), Vec2::new(5.0, 5.0));
		assert_eq!(g.edges()[0].from(), NodeId(1));
		assert_eq!(g.edges()[0].to(), NodeId(0));
	}
}
