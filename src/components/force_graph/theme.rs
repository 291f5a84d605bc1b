//! Visual theming for the force graph.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Hex for opaque colors, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Preset name, as used in configuration.
	pub name: &'static str,
	/// Canvas fill behind the graph.
	pub background: Color,
	/// Resting color of nodes and edges.
	pub element: Color,
	/// Color of the hovered or dragged node.
	pub element_hover: Color,
	/// FPS overlay text.
	pub overlay: Color,
}

impl Theme {
	/// Neutral grays (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: Color::rgb(80, 80, 80),
			element: Color::rgb(130, 130, 130),
			element_hover: Color::rgb(200, 200, 200),
			overlay: Color::rgb(200, 200, 200),
		}
	}

	/// Dark blue-gray theme
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: Color::rgb(18, 20, 28),
			element: Color::rgba(100, 120, 150, 0.85),
			element_hover: Color::rgb(129, 161, 193),
			overlay: Color::rgb(143, 163, 180),
		}
	}

	/// Look up a preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"default" => Some(Self::default_theme()),
			"midnight" => Some(Self::midnight()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
