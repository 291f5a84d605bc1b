//! Force-directed graph visualization component.
//!
//! The layout engine is platform independent and runs once per frame:
//! - [`interaction`] turns sampled input into hover, drag and pan state
//! - [`simulation`] applies repulsion and edge springs to free nodes
//! - [`viewport`] maps between world and screen space under pan and zoom
//! - [`state`] sequences the above and produces a [`Scene`] to draw
//!
//! The Leptos [`ForceGraphCanvas`] component is the browser shell around it:
//! it samples mouse events, drives `requestAnimationFrame` and paints scenes
//! onto a 2D canvas.
//!
//! # Example
//!
//! ```ignore
//! use graph_canvas::{ForceGraphCanvas, GraphConfig};
//!
//! let config = GraphConfig::from_json(r#"{"layout":{"node_count":300,"edge_count":600}}"#);
//!
//! view! { <ForceGraphCanvas config=Some(config) fullscreen=true /> }
//! ```

mod component;
pub mod config;
pub mod graph;
pub mod input;
pub mod interaction;
mod render;
pub mod scale;
pub mod scene;
pub mod simulation;
pub mod state;
pub mod theme;
pub mod types;
pub mod viewport;

pub use component::ForceGraphCanvas;
pub use config::GraphConfig;
pub use graph::{Graph, NodeId};
pub use input::InputFrame;
pub use interaction::{CursorIcon, FrameInteraction, Mode};
pub use scene::Scene;
pub use state::ForceGraphState;
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode, Vec2};
pub use viewport::Viewport;
