//! # Orrery Engine
//!
//! A retained scene-graph engine for animated hierarchical scenes.
//!
//! ## Features
//!
//! - **Transform Hierarchy**: parent-relative scale/rotation/translation
//!   composition with cached per-frame world transforms
//! - **Animation Driver**: absolute-time rotation updates, deterministic
//!   and replayable
//! - **Debug Overlays**: per-node axis/grid helpers with atomic
//!   visibility toggles
//! - **Panel Bindings**: explicit boolean-property adapter for an
//!   external debug UI
//! - **Host Seam**: display surface, GPU, and pacing stay with the
//!   embedding application behind a two-method trait
//!
//! ## Quick Start
//!
//! ```rust
//! use orrery_engine::prelude::*;
//!
//! let mut scene = SceneGraph::new();
//! let mut driver = AnimationDriver::new();
//!
//! // An unscaled pivot keeps the orbit radius independent of the
//! // body's visual scale.
//! let pivot = scene.create_node("pivot");
//! let body = scene.create_child(pivot, "body")?;
//! scene.set_local_transform(body, None, None, Some(Vec3::new(5.0, 5.0, 5.0)))?;
//! let orbit = scene.create_child(pivot, "orbit")?;
//! scene.set_local_transform(orbit, Some(Vec3::new(10.0, 0.0, 0.0)), None, None)?;
//!
//! driver.register(pivot);
//! driver.tick(&mut scene, 5.0);
//! scene.update_world_transforms();
//! # Ok::<(), orrery_engine::SceneError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod animation;
pub mod config;
pub mod debug;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod ui;

pub use scene::{SceneError, SceneGraph};

/// Common imports for engine users
pub mod prelude {
    pub use crate::animation::AnimationDriver;
    pub use crate::config::{Config, ConfigError};
    pub use crate::debug::{DebugHelperSystem, ToggleHandle};
    pub use crate::foundation::{
        math::{Mat4, Quat, Transform, Vec3},
        time::FrameClock,
    };
    pub use crate::render::{Camera, FrameContext, HostError, RenderLoopHost};
    pub use crate::scene::{
        MaterialDesc, Node, NodeFlags, NodeHandle, SceneError, SceneGraph, SphereShape, Visual,
    };
    pub use crate::ui::DebugPanel;
}
