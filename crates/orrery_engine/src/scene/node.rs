//! Scene node data
//!
//! Nodes are pure data owned by the [`SceneGraph`](super::SceneGraph)
//! arena; all structural mutation goes through the graph so the tree
//! invariants hold.

use crate::foundation::math::{Transform, Vec3};
use bitflags::bitflags;
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a node owned by a `SceneGraph`
    pub struct NodeHandle;
}

bitflags! {
    /// Per-node state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NodeFlags: u8 {
        /// Node is drawn by the host
        const VISIBLE = 1 << 0;
        /// Node is a debug helper (axis marker or grid)
        const HELPER = 1 << 1;
    }
}

/// Sphere shape description
///
/// Low segment counts keep the silhouette faceted so spin is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    /// Sphere radius before any node scaling
    pub radius: f32,
    /// Longitudinal segment count
    pub width_segments: u32,
    /// Latitudinal segment count
    pub height_segments: u32,
}

/// Material description consumed by the host when drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialDesc {
    /// Base surface color (RGB)
    pub color: Vec3,
    /// Emissive color (RGB), additive over lighting
    pub emissive: Vec3,
}

impl MaterialDesc {
    /// Material that only emits (light sources like the sun)
    pub fn emissive(emissive: Vec3) -> Self {
        Self {
            color: Vec3::zeros(),
            emissive,
        }
    }
}

/// What the host should draw at a node
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    /// A shaded sphere body
    Sphere {
        /// Shape parameters
        shape: SphereShape,
        /// Surface material
        material: MaterialDesc,
    },
    /// Local-axes marker (debug helper)
    Axes,
    /// Ground-plane grid (debug helper)
    Grid {
        /// Grid extent and subdivision count
        units: u32,
    },
}

/// A transform-bearing element of the scene graph
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) local: Transform,
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,
    pub(crate) flags: NodeFlags,
    pub(crate) visual: Option<Visual>,
    /// World transform cached by the last top-down update
    pub(crate) world: Transform,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local: Transform::identity(),
            parent: None,
            children: Vec::new(),
            flags: NodeFlags::VISIBLE,
            visual: None,
            world: Transform::identity(),
        }
    }

    /// Node name, used for logging and panel labels
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local transform, relative to the parent
    pub fn local_transform(&self) -> &Transform {
        &self.local
    }

    /// World transform cached by the last
    /// [`update_world_transforms`](super::SceneGraph::update_world_transforms)
    pub fn world_transform(&self) -> &Transform {
        &self.world
    }

    /// Parent handle, `None` only for the scene root
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Handles of owned children
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Current flag set
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// Whether the host should draw this node
    pub fn is_visible(&self) -> bool {
        self.flags.contains(NodeFlags::VISIBLE)
    }

    /// Whether this node is a debug helper
    pub fn is_helper(&self) -> bool {
        self.flags.contains(NodeFlags::HELPER)
    }

    /// Visual description, if the node is drawable
    pub fn visual(&self) -> Option<&Visual> {
        self.visual.as_ref()
    }
}
