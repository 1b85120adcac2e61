//! Axis and grid overlay helpers
//!
//! An overlay is a pair of helper child nodes (a local-axes marker and a
//! ground-plane grid) attached under the node being inspected. Each pair
//! is controlled through a single [`ToggleHandle`]: both primitives show
//! or hide together, never one without the other.

use crate::foundation::collections::HandleMap;
use crate::scene::{NodeFlags, NodeHandle, SceneError, SceneGraph, Visual};
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to an axis/grid toggle
    pub struct ToggleHandle;
}

/// One axis/grid overlay pair and its shared visibility state
///
/// Two states only: hidden (initial) and shown. Transitions happen solely
/// through [`DebugHelperSystem::set_visible`].
#[derive(Debug)]
pub struct AxisGridHelper {
    label: String,
    axes: NodeHandle,
    grid: NodeHandle,
    visible: bool,
}

impl AxisGridHelper {
    /// Human-readable label shown by the debug panel
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Handle of the axes marker node
    pub fn axes(&self) -> NodeHandle {
        self.axes
    }

    /// Handle of the grid node
    pub fn grid(&self) -> NodeHandle {
        self.grid
    }

    /// Current visibility of the pair
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Owns every overlay pair and the toggle handles that control them
#[derive(Default)]
pub struct DebugHelperSystem {
    helpers: HandleMap<ToggleHandle, AxisGridHelper>,
}

impl DebugHelperSystem {
    /// Create an empty helper system
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an axis/grid overlay under `node`
    ///
    /// Creates the two helper children, initially hidden. Helper nodes
    /// carry the `HELPER` flag so tools (like the animation driver's
    /// callers) can tell them apart from scene content.
    pub fn attach(
        &mut self,
        scene: &mut SceneGraph,
        node: NodeHandle,
        label: &str,
        grid_units: u32,
    ) -> Result<ToggleHandle, SceneError> {
        let axes = scene.create_child(node, &format!("{label}.axes"))?;
        let grid = scene.create_child(node, &format!("{label}.grid"))?;

        for (helper, visual) in [(axes, Visual::Axes), (grid, Visual::Grid { units: grid_units })] {
            scene.set_visual(helper, visual)?;
            let flags = &mut scene.node_mut(helper)?.flags;
            flags.insert(NodeFlags::HELPER);
            flags.remove(NodeFlags::VISIBLE);
        }

        log::debug!("attached axis/grid helper {label:?}");
        Ok(self.helpers.insert(AxisGridHelper {
            label: label.to_string(),
            axes,
            grid,
            visible: false,
        }))
    }

    /// Set the visibility of both overlay primitives atomically
    ///
    /// Both node lookups are validated before either flag is written, so
    /// no observable state ever has one primitive shown and the other
    /// hidden.
    pub fn set_visible(
        &mut self,
        scene: &mut SceneGraph,
        handle: ToggleHandle,
        visible: bool,
    ) -> Result<(), SceneError> {
        let helper = self
            .helpers
            .get_mut(handle)
            .ok_or_else(|| SceneError::InvalidHandle("no such toggle".into()))?;
        scene.node(helper.axes)?;
        scene.node(helper.grid)?;

        scene.set_visible(helper.axes, visible)?;
        scene.set_visible(helper.grid, visible)?;
        helper.visible = visible;
        Ok(())
    }

    /// Current visibility of a toggle
    pub fn is_visible(&self, handle: ToggleHandle) -> Result<bool, SceneError> {
        Ok(self.helper(handle)?.visible)
    }

    /// Label of a toggle
    pub fn label(&self, handle: ToggleHandle) -> Result<&str, SceneError> {
        Ok(self.helper(handle)?.label())
    }

    /// Borrow a toggle entry
    pub fn helper(&self, handle: ToggleHandle) -> Result<&AxisGridHelper, SceneError> {
        self.helpers
            .get(handle)
            .ok_or_else(|| SceneError::InvalidHandle("no such toggle".into()))
    }

    /// Number of attached overlays
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    /// Whether no overlays are attached
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}
