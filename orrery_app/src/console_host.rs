//! Headless render-loop host
//!
//! Stands in for a windowed GPU backend: reports a fixed drawable size
//! and "draws" by logging world positions at a configurable interval.
//! Useful for demo runs and CI, where no display exists.

use orrery_engine::foundation::math::Point3;
use orrery_engine::prelude::*;

/// Console-backed host for headless runs
pub struct ConsoleHost {
    size: (u32, u32),
    report_interval: u64,
    frames_drawn: u64,
}

impl ConsoleHost {
    /// Create a host with a fixed drawable size
    pub fn new(width: u32, height: u32, report_interval: u64) -> Self {
        Self {
            size: (width, height),
            report_interval,
            frames_drawn: 0,
        }
    }

    /// Number of frames drawn so far
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl RenderLoopHost for ConsoleHost {
    fn drawable_size(&self) -> (u32, u32) {
        self.size
    }

    fn draw(&mut self, scene: &SceneGraph, camera: &Camera) -> Result<(), HostError> {
        self.frames_drawn += 1;
        if self.report_interval == 0 || self.frames_drawn % self.report_interval != 0 {
            return Ok(());
        }

        let view_projection = camera.view_projection();
        for node in scene.drawables() {
            let world = node.world_transform();
            let clip = view_projection
                * world.to_matrix()
                * Point3::origin().to_homogeneous();
            log::info!(
                "frame {:>5} {:<12} world ({:6.2}, {:6.2}, {:6.2}) clip w {:.2}",
                self.frames_drawn,
                node.name(),
                world.position.x,
                world.position.y,
                world.position.z,
                clip.w
            );
        }
        Ok(())
    }
}
