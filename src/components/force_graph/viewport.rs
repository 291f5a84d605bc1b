//! World/screen coordinate mapping under pan and zoom.
//!
//! - **World-space**: the coordinate system node positions are stored in.
//! - **Screen-space**: canvas pixels. `screen = (world + pan) * zoom`.
//!
//! Zoom is kept inside `[min_zoom, max_zoom]` at all times, and `min_zoom` is
//! itself forced positive, so the inverse transform never divides by zero.
//! The bounds always contain 1.0, so every view starts at the identity.

use log::warn;
use serde::Deserialize;

use super::types::Vec2;

/// Smallest zoom factor any configuration can request.
pub const MIN_ZOOM_FLOOR: f64 = 1e-3;

/// Pan/zoom behaviour settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
	/// Zoom change per wheel notch.
	pub zoom_step: f64,
	/// Lower zoom bound, in `[MIN_ZOOM_FLOOR, 1]`.
	pub min_zoom: f64,
	/// Upper zoom bound, at least 1.
	pub max_zoom: f64,
}

impl Default for ViewportConfig {
	fn default() -> Self {
		Self {
			zoom_step: 0.1,
			min_zoom: 0.05,
			max_zoom: 10.0,
		}
	}
}

impl ViewportConfig {
	/// Repair zoom bounds so they are positive and contain 1.0.
	pub fn sanitized(mut self) -> Self {
		if !(self.min_zoom.is_finite() && self.min_zoom >= MIN_ZOOM_FLOOR) {
			warn!(
				"viewport: min_zoom {} is not positive, using {}",
				self.min_zoom, MIN_ZOOM_FLOOR
			);
			self.min_zoom = MIN_ZOOM_FLOOR;
		}
		if self.min_zoom > 1.0 {
			warn!("viewport: min_zoom {} above 1, using 1", self.min_zoom);
			self.min_zoom = 1.0;
		}
		if !(self.max_zoom >= 1.0) {
			warn!("viewport: max_zoom {} below 1, using 1", self.max_zoom);
			self.max_zoom = 1.0;
		}
		if !self.zoom_step.is_finite() {
			warn!("viewport: zoom_step {} is not finite, using 0.1", self.zoom_step);
			self.zoom_step = 0.1;
		}
		self
	}
}

/// Pan offset and zoom factor applied to the whole graph view.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
	pan: Vec2,
	zoom: f64,
	min_zoom: f64,
	max_zoom: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self::new(&ViewportConfig::default())
	}
}

impl Viewport {
	/// Identity view (`pan = 0`, `zoom = 1`) limited by `config`.
	pub fn new(config: &ViewportConfig) -> Self {
		let min_zoom = config.min_zoom.max(MIN_ZOOM_FLOOR).min(1.0);
		let max_zoom = config.max_zoom.max(1.0);
		Self {
			pan: Vec2::ZERO,
			zoom: 1.0,
			min_zoom,
			max_zoom,
		}
	}

	/// World-space pan offset.
	pub fn pan(&self) -> Vec2 {
		self.pan
	}

	/// Current zoom factor.
	pub fn zoom(&self) -> f64 {
		self.zoom
	}

	/// Replace the pan offset.
	pub fn set_pan(&mut self, pan: Vec2) {
		self.pan = pan;
	}

	/// Set the zoom factor, clamped to the configured bounds.
	pub fn set_zoom(&mut self, zoom: f64) {
		self.zoom = if zoom.is_nan() {
			self.min_zoom
		} else {
			zoom.clamp(self.min_zoom, self.max_zoom)
		};
	}

	/// Add an (already scaled) zoom delta.
	pub fn apply_zoom_delta(&mut self, delta: f64) {
		self.set_zoom(self.zoom + delta);
	}

	/// Pan by a screen-space cursor movement.
	pub fn pan_by_screen(&mut self, delta: Vec2) {
		self.pan += delta / self.zoom;
	}

	/// World point to canvas pixels.
	pub fn to_screen(&self, world: Vec2) -> Vec2 {
		(world + self.pan) * self.zoom
	}

	/// Canvas pixels back to a world point.
	pub fn to_world(&self, screen: Vec2) -> Vec2 {
		screen / self.zoom - self.pan
	}

	/// Project a world-space length to screen pixels.
	pub fn scale_length(&self, length: f64) -> f64 {
		length * self.zoom
	}
}
