//! Scene management system
//!
//! Provides the retained scene graph: a tree of transform-bearing nodes
//! owned by a [`SceneGraph`] arena, with world transforms computed by
//! composing parent-to-child once per frame.
//!
//! ## Architecture
//!
//! ```text
//! AnimationDriver (per-tick rotation writes)
//!      ↓
//! SceneGraph (world-transform composition)
//!      ↓
//! RenderLoopHost (draws from cached world transforms)
//! ```
//!
//! The graph owns every node exclusively; callers hold [`NodeHandle`]s.
//! A stale or foreign handle surfaces [`SceneError::InvalidHandle`] at the
//! offending call, synchronously.

mod graph;
mod node;

pub use graph::{SceneError, SceneGraph};
pub use node::{MaterialDesc, Node, NodeFlags, NodeHandle, SphereShape, Visual};
