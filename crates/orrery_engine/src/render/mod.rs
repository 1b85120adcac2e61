//! Render-loop glue
//!
//! The engine does not own a display surface. It exposes a narrow seam,
//! the [`RenderLoopHost`] trait plus a [`FrameContext`], and leaves the
//! window, GPU, and draw submission to the embedding application.

mod camera;
mod host;

pub use camera::Camera;
pub use host::{FrameContext, HostError, RenderLoopHost};
