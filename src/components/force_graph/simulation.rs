//! Velocity-free force-directed layout.
//!
//! Every frame each free node feels an inverse-square repulsion from every
//! other node and a linear spring pull along each incident edge. The summed
//! force displaces the node directly, scaled by the frame time; no momentum
//! is kept between frames.
//!
//! Forces are computed from the positions at the start of the step, then all
//! free nodes move at once, so the result does not depend on node order.

use log::warn;
use serde::Deserialize;

use super::graph::{Graph, NodeId};
use super::types::Vec2;

/// Physics constants.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
	/// Repulsion constant `K` in `K / distance^2`.
	pub repulsion: f64,
	/// Spring constant `K` in `K * distance`.
	pub attraction: f64,
	/// Distances below this are treated as this value for repulsion.
	pub min_distance: f64,
}

impl Default for SimulationParameters {
	fn default() -> Self {
		Self {
			repulsion: 100_000.0,
			attraction: 0.1,
			min_distance: 1.0,
		}
	}
}

impl SimulationParameters {
	/// Replace non-finite constants and a non-positive distance floor.
	pub fn sanitized(mut self) -> Self {
		if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
			warn!(
				"physics: min_distance {} must be positive, using 1",
				self.min_distance
			);
			self.min_distance = 1.0;
		}
		if !self.repulsion.is_finite() {
			warn!("physics: repulsion is not finite, using default");
			self.repulsion = 100_000.0;
		}
		if !self.attraction.is_finite() {
			warn!("physics: attraction is not finite, using default");
			self.attraction = 0.1;
		}
		self
	}

	/// Repulsion felt by a node at `on` from a node at `from`.
	pub fn repulsion(&self, on: Vec2, from: Vec2) -> Vec2 {
		let dir = on - from;
		let distance = dir.length().max(self.min_distance);
		dir.normalize() * (self.repulsion / (distance * distance))
	}

	/// Spring pull felt by a node at `on` toward its neighbour at `toward`.
	pub fn attraction(&self, on: Vec2, toward: Vec2) -> Vec2 {
		let dir = toward - on;
		dir.normalize() * (self.attraction * dir.length())
	}
}

/// Force accumulator reused across frames.
#[derive(Clone, Debug, Default)]
pub struct ForceSimulator {
	/// Constants used by every step.
	pub params: SimulationParameters,
	forces: Vec<Vec2>,
}

impl ForceSimulator {
	/// Simulator with an empty force buffer.
	pub fn new(params: SimulationParameters) -> Self {
		Self {
			params,
			forces: Vec::new(),
		}
	}

	/// Net force on every node, indexed by node id. The `pinned` node still
	/// acts on others but its own entry is left at zero.
	pub fn compute_forces(&mut self, graph: &Graph, pinned: Option<NodeId>) -> &[Vec2] {
		let nodes = graph.nodes();
		self.forces.clear();
		self.forces.resize(nodes.len(), Vec2::ZERO);

		let pinned = pinned.map(NodeId::index);

		for i in 0..nodes.len() {
			for j in (i + 1)..nodes.len() {
				let force = self.params.repulsion(nodes[i].pos, nodes[j].pos);
				self.forces[i] += force;
				self.forces[j] += -force;
			}
		}

		for edge in graph.edges() {
			if edge.is_self_loop() {
				continue;
			}
			let (from, to) = (edge.from().index(), edge.to().index());
			let pull = self.params.attraction(nodes[from].pos, nodes[to].pos);
			self.forces[from] += pull;
			self.forces[to] += -pull;
		}

		if let Some(p) = pinned {
			if let Some(force) = self.forces.get_mut(p) {
				*force = Vec2::ZERO;
			}
		}

		&self.forces
	}

	/// Advance the layout by `dt` seconds, leaving `pinned` where it is.
	pub fn step(&mut self, graph: &mut Graph, pinned: Option<NodeId>, dt: f64) {
		if graph.node_count() == 0 {
			return;
		}
		self.compute_forces(graph, pinned);
		for (node, force) in graph.nodes_mut().iter_mut().zip(&self.forces) {
			if Some(node.id()) == pinned {
				continue;
			}
			node.pos += *force * dt;
		}
	}
}
