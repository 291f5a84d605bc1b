//! Top-level configuration, deserialized from an optional JSON block.
//!
//! Every section falls back to its defaults when omitted:
//!
//! ```json
//! {
//!     "layout": { "node_count": 500, "edge_count": 800, "seed": 7 },
//!     "physics": { "repulsion": 50000.0 },
//!     "viewport": { "zoom_step": 0.05 },
//!     "theme": "midnight"
//! }
//! ```

use log::warn;
use serde::Deserialize;

use super::graph::LayoutConfig;
use super::scale::ScaleConfig;
use super::simulation::SimulationParameters;
use super::theme::Theme;
use super::viewport::ViewportConfig;

/// Everything the graph can be configured with.
///
/// Values are taken as parsed; [`ForceGraphState`](super::state::ForceGraphState)
/// repairs them once when it is built.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
	/// Random graph generation.
	pub layout: LayoutConfig,
	/// Force constants.
	pub physics: SimulationParameters,
	/// Pan and zoom limits.
	pub viewport: ViewportConfig,
	/// World-space element sizes.
	pub scale: ScaleConfig,
	/// Theme preset name.
	pub theme: String,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			layout: LayoutConfig::default(),
			physics: SimulationParameters::default(),
			viewport: ViewportConfig::default(),
			scale: ScaleConfig::default(),
			theme: "default".to_string(),
		}
	}
}

impl GraphConfig {
	/// Parse from JSON, falling back to defaults on malformed input.
	pub fn from_json(json: &str) -> Self {
		match serde_json::from_str::<GraphConfig>(json) {
			Ok(config) => config,
			Err(e) => {
				warn!("config: failed to parse, using defaults: {}", e);
				Self::default()
			}
		}
	}

	/// Repair every section so the engine never sees invalid values.
	pub fn sanitized(self) -> Self {
		Self {
			layout: self.layout.sanitized(),
			physics: self.physics.sanitized(),
			viewport: self.viewport.sanitized(),
			scale: self.scale.sanitized(),
			theme: self.theme,
		}
	}

	/// Resolve the theme preset, defaulting on unknown names.
	pub fn resolve_theme(&self) -> Theme {
		Theme::by_name(&self.theme).unwrap_or_else(|| {
			warn!("config: unknown theme {:?}, using default", self.theme);
			Theme::default()
		})
	}
}
