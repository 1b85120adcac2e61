//! Debug module for visualization tools
//!
//! Per-node axis/grid overlays with externally controlled visibility
//! toggles, drawn through the same scene graph as regular nodes.

pub mod helpers;

pub use helpers::{AxisGridHelper, DebugHelperSystem, ToggleHandle};
