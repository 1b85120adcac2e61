//! Scene graph arena and world-transform composition
//!
//! The graph is a rooted tree stored in a slotmap arena. World transforms
//! follow the one invariant that matters here:
//!
//! ```text
//! world(node) = world(parent) ∘ (translation ∘ rotation ∘ scale)
//! ```
//!
//! with scale innermost. The expected usage pattern is one full top-down
//! recompute per frame via [`SceneGraph::update_world_transforms`]; the
//! O(depth) [`SceneGraph::world_transform`] query exists for spot checks
//! and tests.

use super::node::{Node, NodeFlags, NodeHandle, Visual};
use crate::foundation::collections::HandleMap;
use crate::foundation::math::{Quat, Transform, Vec3};
use thiserror::Error;

/// Errors surfaced by scene-graph operations
///
/// Both variants are local precondition violations reported at the point
/// of the offending call; no operation has a partial-failure window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Parent handle names no live node, or attachment would form a cycle
    #[error("invalid parent: {0}")]
    InvalidParent(String),

    /// Handle names no live node or toggle
    #[error("invalid handle: {0}")]
    InvalidHandle(String),
}

/// A rooted tree of nodes with parent-relative transform composition
pub struct SceneGraph {
    nodes: HandleMap<NodeHandle, Node>,
    root: NodeHandle,
}

impl SceneGraph {
    /// Create a graph containing only the scene root
    ///
    /// The root keeps an identity local transform, so its world transform
    /// is the identity.
    pub fn new() -> Self {
        let mut nodes = HandleMap::with_key();
        let root = nodes.insert(Node::new("root"));
        Self { nodes, root }
    }

    /// Handle of the scene root
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    /// Number of nodes in the graph, including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph is empty (never true: the root always exists)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a node attached directly under the scene root
    pub fn create_node(&mut self, name: &str) -> NodeHandle {
        let root = self.root;
        match self.create_child(root, name) {
            Ok(handle) => handle,
            // The root is never removed, so attachment cannot fail.
            Err(_) => unreachable!("scene root is always live"),
        }
    }

    /// Create a node attached under `parent`
    ///
    /// The new node starts with an identity local transform and the
    /// `VISIBLE` flag set. Fails with [`SceneError::InvalidParent`] when
    /// `parent` is stale or foreign.
    pub fn create_child(&mut self, parent: NodeHandle, name: &str) -> Result<NodeHandle, SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::InvalidParent(format!(
                "cannot attach {name:?} to a dead node"
            )));
        }
        let child = self.nodes.insert(Node::new(name));
        self.attach(parent, child)?;
        log::debug!("created node {name:?} under {:?}", self.nodes[parent].name);
        Ok(child)
    }

    /// Link `child` under `parent`, preserving the tree invariants
    ///
    /// Attachment is parent→child at creation time only, so the cycle arm
    /// is unreachable through the public API; it stays guarded for any
    /// future reparenting surface.
    fn attach(&mut self, parent: NodeHandle, child: NodeHandle) -> Result<(), SceneError> {
        if parent == child || self.is_ancestor(child, parent) {
            return Err(SceneError::InvalidParent(
                "attachment would create a cycle".into(),
            ));
        }
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Whether `candidate` is an ancestor of `node` (or `node` itself)
    fn is_ancestor(&self, candidate: NodeHandle, node: NodeHandle) -> bool {
        let mut current = Some(node);
        while let Some(handle) = current {
            if handle == candidate {
                return true;
            }
            current = self.nodes.get(handle).and_then(|n| n.parent);
        }
        false
    }

    /// Borrow a node
    pub fn node(&self, handle: NodeHandle) -> Result<&Node, SceneError> {
        self.nodes
            .get(handle)
            .ok_or_else(|| SceneError::InvalidHandle("no such node".into()))
    }

    pub(crate) fn node_mut(&mut self, handle: NodeHandle) -> Result<&mut Node, SceneError> {
        self.nodes
            .get_mut(handle)
            .ok_or_else(|| SceneError::InvalidHandle("no such node".into()))
    }

    /// Overwrite parts of a node's local transform
    ///
    /// Only the provided components change; the rest keep their prior
    /// values.
    pub fn set_local_transform(
        &mut self,
        handle: NodeHandle,
        position: Option<Vec3>,
        rotation: Option<Quat>,
        scale: Option<Vec3>,
    ) -> Result<(), SceneError> {
        let node = self.node_mut(handle)?;
        if let Some(position) = position {
            node.local.position = position;
        }
        if let Some(rotation) = rotation {
            node.local.rotation = rotation;
        }
        if let Some(scale) = scale {
            node.local.scale = scale;
        }
        Ok(())
    }

    /// Set a node's rotation to `radians` about its local Y axis
    ///
    /// This is the single-axis write the animation driver performs each
    /// tick; it replaces the rotation rather than accumulating.
    pub fn set_spin_angle(&mut self, handle: NodeHandle, radians: f32) -> Result<(), SceneError> {
        let node = self.node_mut(handle)?;
        node.local.rotation = Quat::from_axis_angle(&Vec3::y_axis(), radians);
        Ok(())
    }

    /// Set or clear the `VISIBLE` flag on a node
    pub fn set_visible(&mut self, handle: NodeHandle, visible: bool) -> Result<(), SceneError> {
        let node = self.node_mut(handle)?;
        node.flags.set(NodeFlags::VISIBLE, visible);
        Ok(())
    }

    /// Attach a visual description to a node
    pub fn set_visual(&mut self, handle: NodeHandle, visual: Visual) -> Result<(), SceneError> {
        self.node_mut(handle)?.visual = Some(visual);
        Ok(())
    }

    /// Compute a node's world transform on demand
    ///
    /// Pure O(depth) composition up the parent chain; does not touch the
    /// cached values.
    pub fn world_transform(&self, handle: NodeHandle) -> Result<Transform, SceneError> {
        let node = self.node(handle)?;
        match node.parent {
            Some(parent) => Ok(self.world_transform(parent)?.combine(&node.local)),
            None => Ok(node.local.clone()),
        }
    }

    /// Recompute every cached world transform, top-down from the root
    ///
    /// Each node is visited strictly after its parent, so no stale parent
    /// transform is ever read. Sibling order is irrelevant. Expected to
    /// run once per frame.
    pub fn update_world_transforms(&mut self) {
        let mut stack = vec![self.root];
        while let Some(handle) = stack.pop() {
            let parent_world = self.nodes[handle]
                .parent
                .map(|p| self.nodes[p].world.clone());
            let node = &mut self.nodes[handle];
            node.world = match parent_world {
                Some(parent_world) => parent_world.combine(&node.local),
                None => node.local.clone(),
            };
            stack.extend(self.nodes[handle].children.iter().copied());
        }
    }

    /// World transform cached by the last update
    pub fn cached_world_transform(&self, handle: NodeHandle) -> Result<&Transform, SceneError> {
        Ok(&self.node(handle)?.world)
    }

    /// Iterate nodes the host should draw: visible, with a visual
    pub fn drawables(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .values()
            .filter(|node| node.is_visible() && node.visual.is_some())
    }

    /// Iterate all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
