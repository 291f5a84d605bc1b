//! Geometry primitives and graph data structures for input to the force graph.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::Deserialize;

/// A 2D vector used for positions, forces and screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
	/// Horizontal component.
	pub x: f64,
	/// Vertical component, growing downward on screen.
	pub y: f64,
}

impl Vec2 {
	/// The origin.
	pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

	/// Vector from components.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Squared Euclidean length.
	pub fn length_squared(self) -> f64 {
		self.x * self.x + self.y * self.y
	}

	/// Euclidean length.
	pub fn length(self) -> f64 {
		self.length_squared().sqrt()
	}

	/// Unit vector in the same direction. The zero vector stays zero.
	pub fn normalize(self) -> Self {
		let len = self.length();
		if len > 0.0 {
			Self::new(self.x / len, self.y / len)
		} else {
			Self::ZERO
		}
	}

	/// Rotate counter-clockwise by `radians`.
	pub fn rotate(self, radians: f64) -> Self {
		let (sin, cos) = radians.sin_cos();
		Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
	}

	/// Squared distance to `other`.
	pub fn distance_squared(self, other: Vec2) -> f64 {
		(self - other).length_squared()
	}
}

impl Add for Vec2 {
	type Output = Vec2;

	fn add(self, rhs: Vec2) -> Vec2 {
		Vec2::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for Vec2 {
	fn add_assign(&mut self, rhs: Vec2) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl Sub for Vec2 {
	type Output = Vec2;

	fn sub(self, rhs: Vec2) -> Vec2 {
		Vec2::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Vec2 {
	type Output = Vec2;

	fn mul(self, rhs: f64) -> Vec2 {
		Vec2::new(self.x * rhs, self.y * rhs)
	}
}

impl Div<f64> for Vec2 {
	type Output = Vec2;

	fn div(self, rhs: f64) -> Vec2 {
		Vec2::new(self.x / rhs, self.y / rhs)
	}
}

impl Neg for Vec2 {
	type Output = Vec2;

	fn neg(self) -> Vec2 {
		Vec2::new(-self.x, -self.y)
	}
}

/// A node in externally supplied graph data.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	/// Initial world-space x.
	pub x: f64,
	/// Initial world-space y.
	pub y: f64,
}

/// A directed edge between two nodes, referenced by their index in `nodes`.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphLink {
	/// Index of the tail node.
	pub source: usize,
	/// Index of the head node, where the arrow points.
	pub target: usize,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	/// Nodes in id order.
	pub nodes: Vec<GraphNode>,
	/// Links; entries with unknown endpoints are dropped on load.
	#[serde(default)]
	pub links: Vec<GraphLink>,
}
