//! Solar-system demo binary
//!
//! Builds the scene, runs a fixed-timestep frame loop through the
//! headless console host, and flips one debug toggle halfway through to
//! show the panel bindings in action. Pass a `.toml` or `.ron` config
//! path as the first argument to override the defaults.

mod config;
mod console_host;
mod solar_system;

use config::SolarSystemConfig;
use console_host::ConsoleHost;
use orrery_engine::foundation::math::utils::deg_to_rad;
use orrery_engine::prelude::*;

fn main() {
    orrery_engine::foundation::logging::init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    let mut scene = SceneGraph::new();
    let mut driver = AnimationDriver::new();
    let mut helpers = DebugHelperSystem::new();
    let mut panel = DebugPanel::new();
    let bodies = solar_system::build(&mut scene, &mut driver, &mut helpers, &mut panel, &config)?;

    let mut camera = Camera::new(
        deg_to_rad(config.camera.fov_deg),
        config.surface.width as f32 / config.surface.height as f32,
        config.camera.near,
        config.camera.far,
    );
    camera.look_at(
        Vec3::from(config.camera.position),
        Vec3::zeros(),
        Vec3::from(config.camera.up),
    );

    let mut ctx = FrameContext::new(
        scene,
        driver,
        camera,
        FrameClock::fixed(config.run.timestep),
    );
    let mut host = ConsoleHost::new(
        config.surface.width,
        config.surface.height,
        config.run.report_interval,
    );

    let toggle_at = config.run.frames / 2;
    for frame in 0..config.run.frames {
        if frame == toggle_at {
            show_overlay(&panel, "earthOrbit", &mut helpers, &mut ctx)?;
        }
        ctx.run_frame(&mut host)?;
    }

    log::info!(
        "finished after {} frames ({:.1}s simulated)",
        ctx.clock.frame_count(),
        ctx.clock.total_time(),
    );
    solar_system::report(&ctx.scene, &bodies)?;
    Ok(())
}

/// Flip one panel entry on by label, as the debug UI would
fn show_overlay(
    panel: &DebugPanel,
    label: &str,
    helpers: &mut DebugHelperSystem,
    ctx: &mut FrameContext,
) -> Result<(), SceneError> {
    let Some(index) = panel.entries().position(|entry| entry.label() == label) else {
        return Ok(());
    };
    log::info!("showing {label} overlay");
    panel.set(index, true, helpers, &mut ctx.scene)
}

fn load_config() -> Result<SolarSystemConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {path}");
            SolarSystemConfig::load_from_file(path)
        }
        None => Ok(SolarSystemConfig::default()),
    }
}
