//! Frame loop seam between the engine and the display owner
//!
//! The host owns the display surface and camera pacing; the engine hands
//! it read-only world-transform data to draw. One [`FrameContext`] holds
//! everything a tick touches (scene, driver, camera, clock) so the loop
//! body is an explicit function of explicit state.

use super::camera::Camera;
use crate::animation::AnimationDriver;
use crate::foundation::time::FrameClock;
use crate::scene::SceneGraph;
use thiserror::Error;

/// Errors surfaced by host implementations
#[derive(Error, Debug)]
pub enum HostError {
    /// Drawing the frame failed
    #[error("draw failed: {0}")]
    Draw(String),
}

/// The external collaborator that owns the display surface
///
/// Implementations range from a windowed GPU renderer to the headless
/// console host the demo ships. The engine only ever asks two things of
/// it: how big the drawable is, and to draw.
pub trait RenderLoopHost {
    /// Current drawable size in pixels (width, height)
    fn drawable_size(&self) -> (u32, u32);

    /// Draw the scene using the cached world transforms
    fn draw(&mut self, scene: &SceneGraph, camera: &Camera) -> Result<(), HostError>;
}

/// Everything one frame tick reads and writes
///
/// Owned by the embedding application and passed explicitly into
/// [`FrameContext::run_frame`]; nothing is captured ambiently.
pub struct FrameContext {
    /// The scene being animated and drawn
    pub scene: SceneGraph,
    /// Rotation driver ticked once per frame
    pub driver: AnimationDriver,
    /// Camera handed to the host for drawing
    pub camera: Camera,
    /// Frame timing source
    pub clock: FrameClock,
    last_drawable: Option<(u32, u32)>,
}

impl FrameContext {
    /// Bundle the per-frame state
    pub fn new(scene: SceneGraph, driver: AnimationDriver, camera: Camera, clock: FrameClock) -> Self {
        Self {
            scene,
            driver,
            camera,
            clock,
            last_drawable: None,
        }
    }

    /// Run one frame: resize check, animate, compose, draw
    ///
    /// If the drawable size changed since the last frame, the camera
    /// aspect is recomputed before drawing. Then the driver writes this
    /// tick's rotations, world transforms are recomputed top-down, and
    /// the host draws.
    pub fn run_frame(&mut self, host: &mut dyn RenderLoopHost) -> Result<(), HostError> {
        self.clock.advance();

        let size = self.drawable_size_check(host);
        if let Some((width, height)) = size {
            self.camera.set_aspect(width as f32 / height as f32);
        }

        self.driver.tick(&mut self.scene, self.clock.total_time());
        self.scene.update_world_transforms();

        log::trace!(
            "frame {} t={:.3}s dt={:.4}s",
            self.clock.frame_count(),
            self.clock.total_time(),
            self.clock.delta_time()
        );
        host.draw(&self.scene, &self.camera)
    }

    /// Returns the new size when it changed since the previous frame
    fn drawable_size_check(&mut self, host: &dyn RenderLoopHost) -> Option<(u32, u32)> {
        let size = host.drawable_size();
        if self.last_drawable == Some(size) || size.1 == 0 {
            return None;
        }
        self.last_drawable = Some(size);
        Some(size)
    }
}
