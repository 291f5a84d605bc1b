//! Abstract per-frame input signals.
//!
//! The core never sees browser events. The shell feeds raw mouse and wheel
//! events into an [`InputSampler`], which produces one [`InputFrame`] per
//! animation frame.

use super::types::Vec2;

/// Browser `MouseEvent.buttons` bits.
const LEFT_BUTTON_MASK: u16 = 1;
const MIDDLE_BUTTON_MASK: u16 = 4;

/// Wheel pixels that count as one notch.
pub const PIXELS_PER_NOTCH: f64 = 100.0;

/// Input sampled for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
	/// Cursor position in screen space.
	pub cursor: Vec2,
	/// Left button held.
	pub left_down: bool,
	/// Middle button held.
	pub middle_down: bool,
	/// Wheel movement in notches: `x` horizontal, `y` vertical, positive
	/// vertical meaning "scroll up".
	pub wheel: Vec2,
	/// Seconds elapsed since the previous frame.
	pub frame_time: f64,
}

/// Accumulates raw events between frames.
#[derive(Clone, Debug, Default)]
pub struct InputSampler {
	cursor: Vec2,
	left_down: bool,
	middle_down: bool,
	wheel: Vec2,
}

impl InputSampler {
	/// Record the cursor in canvas pixels.
	pub fn on_mouse_move(&mut self, x: f64, y: f64) {
		self.cursor = Vec2::new(x, y);
	}

	/// Update button state from a `buttons` bitmask.
	pub fn on_buttons(&mut self, buttons: u16) {
		self.left_down = buttons & LEFT_BUTTON_MASK != 0;
		self.middle_down = buttons & MIDDLE_BUTTON_MASK != 0;
	}

	/// Record a wheel event given in browser pixels (positive `delta_y`
	/// scrolls down).
	pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64) {
		self.wheel += Vec2::new(-delta_x, -delta_y) / PIXELS_PER_NOTCH;
	}

	/// Cursor left the canvas: release every button.
	pub fn on_leave(&mut self) {
		self.left_down = false;
		self.middle_down = false;
	}

	/// Produce the frame's input and reset per-frame accumulators.
	pub fn take_frame(&mut self, frame_time: f64) -> InputFrame {
		let wheel = std::mem::take(&mut self.wheel);
		InputFrame {
			cursor: self.cursor,
			left_down: self.left_down,
			middle_down: self.middle_down,
			wheel,
			frame_time,
		}
	}
}
