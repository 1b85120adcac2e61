//! Property-panel bindings for debug toggles
//!
//! A [`DebugPanel`] is an explicit list of `(label, toggle)` bindings,
//! constructed once at startup and handed the toggle handles it should
//! expose. Each entry presents as a boolean property: a generic panel
//! widget reads labels via [`DebugPanel::entries`] and gets/sets values
//! by index.

use crate::debug::{DebugHelperSystem, ToggleHandle};
use crate::scene::{SceneError, SceneGraph};

/// One `(label, get/set visible)` binding
#[derive(Debug, Clone)]
pub struct PanelEntry {
    label: String,
    toggle: ToggleHandle,
}

impl PanelEntry {
    /// Label shown next to the checkbox
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The toggle this entry controls
    pub fn toggle(&self) -> ToggleHandle {
        self.toggle
    }
}

/// Ordered list of boolean properties for an external panel widget
#[derive(Default)]
pub struct DebugPanel {
    entries: Vec<PanelEntry>,
}

impl DebugPanel {
    /// Create an empty panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a toggle, taking its label from the helper system
    pub fn bind(
        &mut self,
        helpers: &DebugHelperSystem,
        toggle: ToggleHandle,
    ) -> Result<(), SceneError> {
        let label = helpers.label(toggle)?.to_string();
        self.entries.push(PanelEntry { label, toggle });
        Ok(())
    }

    /// Iterate the bound entries in binding order
    pub fn entries(&self) -> impl Iterator<Item = &PanelEntry> {
        self.entries.iter()
    }

    /// Number of bound entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the panel has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the boolean value of the entry at `index`
    pub fn get(&self, index: usize, helpers: &DebugHelperSystem) -> Result<bool, SceneError> {
        helpers.is_visible(self.entry(index)?.toggle)
    }

    /// Write the boolean value of the entry at `index`
    pub fn set(
        &self,
        index: usize,
        value: bool,
        helpers: &mut DebugHelperSystem,
        scene: &mut SceneGraph,
    ) -> Result<(), SceneError> {
        helpers.set_visible(scene, self.entry(index)?.toggle, value)
    }

    fn entry(&self, index: usize) -> Result<&PanelEntry, SceneError> {
        self.entries
            .get(index)
            .ok_or_else(|| SceneError::InvalidHandle(format!("no panel entry at index {index}")))
    }
}
