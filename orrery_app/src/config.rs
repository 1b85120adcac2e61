//! Demo configuration
//!
//! Defaults reproduce the canonical tutorial scene: a faceted unit sphere
//! shared by all bodies, a sun scaled 5×, the earth orbiting at radius 10,
//! the moon at radius 2 and half scale, viewed from 50 units above with +Z
//! as the camera's up direction.

use orrery_engine::config::Config;
use serde::{Deserialize, Serialize};

/// Camera placement and projection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// Eye position
    pub position: [f32; 3],
    /// Up direction
    pub up: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 40.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 50.0, 0.0],
            up: [0.0, 0.0, 1.0],
        }
    }
}

/// Drawable surface reported by the headless host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Drawable width in pixels
    pub width: u32,
    /// Drawable height in pixels
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Headless run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Fixed timestep in seconds per frame
    pub timestep: f32,
    /// Number of frames to run
    pub frames: u64,
    /// Report world positions every N frames (0 disables reports)
    pub report_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            frames: 600,
            report_interval: 60,
        }
    }
}

/// Shared sphere geometry parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Sphere radius before node scaling
    pub radius: f32,
    /// Longitudinal segments (kept low so spin reads on the silhouette)
    pub width_segments: u32,
    /// Latitudinal segments
    pub height_segments: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 6,
            height_segments: 6,
        }
    }
}

/// A visual body: uniform scale plus its own spin rate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Uniform scale applied to the body's node
    pub scale: f32,
    /// Spin rate multiplier (radians per second of global time)
    pub spin_rate: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            spin_rate: 1.0,
        }
    }
}

/// An orbit pivot: offset from its parent plus its own spin rate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Orbit radius along the parent's +X axis
    pub radius: f32,
    /// Spin rate multiplier for the pivot
    pub spin_rate: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            spin_rate: 1.0,
        }
    }
}

/// Top-level demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarSystemConfig {
    /// Camera placement and projection
    pub camera: CameraConfig,
    /// Drawable surface size
    pub surface: SurfaceConfig,
    /// Frame loop parameters
    pub run: RunConfig,
    /// Shared sphere geometry
    pub sphere: SphereConfig,
    /// Spin rate of the whole-system pivot (drives the earth's orbit)
    pub system_spin_rate: f32,
    /// Sun body
    pub sun: BodyConfig,
    /// Earth orbit pivot (its spin swings the moon around the earth)
    pub earth_orbit: OrbitConfig,
    /// Earth body
    pub earth: BodyConfig,
    /// Moon orbit offset from the earth pivot
    pub moon_orbit_radius: f32,
    /// Moon body
    pub moon: BodyConfig,
    /// Grid extent for the whole-system overlay
    pub system_grid_units: u32,
    /// Grid extent for per-body overlays
    pub body_grid_units: u32,
}

impl Default for SolarSystemConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            surface: SurfaceConfig::default(),
            run: RunConfig::default(),
            sphere: SphereConfig::default(),
            system_spin_rate: 1.0,
            sun: BodyConfig {
                scale: 5.0,
                spin_rate: 1.0,
            },
            earth_orbit: OrbitConfig {
                radius: 10.0,
                spin_rate: 1.0,
            },
            earth: BodyConfig::default(),
            moon_orbit_radius: 2.0,
            moon: BodyConfig {
                scale: 0.5,
                spin_rate: 1.0,
            },
            system_grid_units: 25,
            body_grid_units: 10,
        }
    }
}

impl Config for SolarSystemConfig {}
