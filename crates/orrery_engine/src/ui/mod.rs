//! UI adapter layer
//!
//! Exposes engine state to an external property-panel widget as explicit
//! bindings, with no ambient global state.

mod panel;

pub use panel::{DebugPanel, PanelEntry};
