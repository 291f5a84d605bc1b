//! Zoom-dependent sizing for graph visuals.
//!
//! Node and arrowhead sizes are configured in world units. Everything the
//! renderer receives is already projected to screen pixels, so each frame a
//! [`ScaledValues`] is derived from the active zoom.

use log::warn;
use serde::Deserialize;

/// Base sizes of the drawn elements, in world units.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
	/// Node radius. Also the hit-test radius.
	pub node_radius: f64,
	/// Length of each arrowhead wing.
	pub arrowhead_length: f64,
	/// Angle between an arrowhead wing and the edge line, in degrees.
	pub arrowhead_angle: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node_radius: 10.0,
			arrowhead_length: 10.0,
			arrowhead_angle: 20.0,
		}
	}
}

impl ScaleConfig {
	/// Replace negative or non-finite sizes.
	pub fn sanitized(mut self) -> Self {
		if !(self.node_radius.is_finite() && self.node_radius >= 0.0) {
			warn!("scale: invalid node_radius {}, using 10", self.node_radius);
			self.node_radius = 10.0;
		}
		if !(self.arrowhead_length.is_finite() && self.arrowhead_length >= 0.0) {
			warn!(
				"scale: invalid arrowhead_length {}, using node_radius",
				self.arrowhead_length
			);
			self.arrowhead_length = self.node_radius;
		}
		if !self.arrowhead_angle.is_finite() {
			warn!("scale: invalid arrowhead_angle, using 20");
			self.arrowhead_angle = 20.0;
		}
		self
	}
}

/// Pre-computed screen-space sizes for a specific zoom level.
///
/// Create this once per frame and reuse it for every element.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Node radius in pixels.
	pub node_radius: f64,
	/// Arrowhead wing length in pixels.
	pub arrowhead_length: f64,
	/// Rotation from the edge direction onto each wing, in radians.
	pub wing_rotation: f64,
}

impl ScaledValues {
	/// Project `config` through `zoom`.
	pub fn new(config: &ScaleConfig, zoom: f64) -> Self {
		Self {
			node_radius: config.node_radius * zoom,
			arrowhead_length: config.arrowhead_length * zoom,
			wing_rotation: (config.arrowhead_angle + 180.0).to_radians(),
		}
	}
}
