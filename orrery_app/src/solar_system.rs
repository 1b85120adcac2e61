//! Solar-system scene construction
//!
//! The tree deliberately separates orbit pivots from visual bodies:
//!
//! ```text
//! root
//! └── solar_system            (unscaled pivot; spin = earth's year)
//!     ├── sun                 (scale 5; would inflate any children)
//!     └── earth_orbit         (unscaled pivot at x=10; spin = moon's month)
//!         ├── earth
//!         └── moon_orbit      (offset x=2)
//!             └── moon        (scale 0.5)
//! ```
//!
//! The sun's 5× scale sits on a leaf, so the earth's orbit radius and the
//! moon's size come out unscaled. Nesting `earth_orbit` under `sun`
//! instead would multiply both by 5.

use crate::config::SolarSystemConfig;
use orrery_engine::prelude::*;

/// Handles to the nodes the demo keeps referring to
pub struct SolarSystem {
    /// Whole-system pivot
    pub system: NodeHandle,
    /// Sun body
    pub sun: NodeHandle,
    /// Earth orbit pivot
    pub earth_orbit: NodeHandle,
    /// Earth body
    pub earth: NodeHandle,
    /// Moon orbit pivot
    pub moon_orbit: NodeHandle,
    /// Moon body
    pub moon: NodeHandle,
}

/// Build the scene, register animations, and bind the debug panel
pub fn build(
    scene: &mut SceneGraph,
    driver: &mut AnimationDriver,
    helpers: &mut DebugHelperSystem,
    panel: &mut DebugPanel,
    config: &SolarSystemConfig,
) -> Result<SolarSystem, SceneError> {
    let shape = SphereShape {
        radius: config.sphere.radius,
        width_segments: config.sphere.width_segments,
        height_segments: config.sphere.height_segments,
    };

    let system = scene.create_node("solar_system");

    let sun = scene.create_child(system, "sun")?;
    scene.set_visual(
        sun,
        Visual::Sphere {
            shape,
            material: MaterialDesc::emissive(Vec3::new(1.0, 1.0, 0.0)),
        },
    )?;
    scene.set_local_transform(sun, None, None, Some(Vec3::repeat(config.sun.scale)))?;

    let earth_orbit = scene.create_child(system, "earth_orbit")?;
    scene.set_local_transform(
        earth_orbit,
        Some(Vec3::new(config.earth_orbit.radius, 0.0, 0.0)),
        None,
        None,
    )?;

    let earth = scene.create_child(earth_orbit, "earth")?;
    scene.set_visual(
        earth,
        Visual::Sphere {
            shape,
            material: MaterialDesc {
                color: Vec3::new(0.133, 0.2, 1.0),
                emissive: Vec3::new(0.067, 0.133, 0.267),
            },
        },
    )?;
    scene.set_local_transform(earth, None, None, Some(Vec3::repeat(config.earth.scale)))?;

    let moon_orbit = scene.create_child(earth_orbit, "moon_orbit")?;
    scene.set_local_transform(
        moon_orbit,
        Some(Vec3::new(config.moon_orbit_radius, 0.0, 0.0)),
        None,
        None,
    )?;

    let moon = scene.create_child(moon_orbit, "moon")?;
    scene.set_visual(
        moon,
        Visual::Sphere {
            shape,
            material: MaterialDesc {
                color: Vec3::new(0.533, 0.533, 0.533),
                emissive: Vec3::new(0.133, 0.133, 0.133),
            },
        },
    )?;
    scene.set_local_transform(moon, None, None, Some(Vec3::repeat(config.moon.scale)))?;

    // The pivots do the orbiting: the system pivot swings the earth around
    // the sun, the earth pivot swings the moon around the earth. The moon
    // pivot itself stays still; the moon only spins in place.
    driver.register_with_rate(system, config.system_spin_rate);
    driver.register_with_rate(sun, config.sun.spin_rate);
    driver.register_with_rate(earth_orbit, config.earth_orbit.spin_rate);
    driver.register_with_rate(earth, config.earth.spin_rate);
    driver.register_with_rate(moon, config.moon.spin_rate);

    for (node, label, units) in [
        (system, "solarSystem", config.system_grid_units),
        (sun, "sunMesh", config.body_grid_units),
        (earth_orbit, "earthOrbit", config.body_grid_units),
        (earth, "earthMesh", config.body_grid_units),
        (moon_orbit, "moonOrbit", config.body_grid_units),
        (moon, "moonMesh", config.body_grid_units),
    ] {
        let toggle = helpers.attach(scene, node, label, units)?;
        panel.bind(helpers, toggle)?;
    }

    log::info!(
        "built solar system: {} nodes, {} animated, {} toggles",
        scene.len(),
        driver.len(),
        helpers.len()
    );

    Ok(SolarSystem {
        system,
        sun,
        earth_orbit,
        earth,
        moon_orbit,
        moon,
    })
}

/// Log the cached world position of every scene element
pub fn report(scene: &SceneGraph, bodies: &SolarSystem) -> Result<(), SceneError> {
    for (label, node) in [
        ("solar_system", bodies.system),
        ("sun", bodies.sun),
        ("earth_orbit", bodies.earth_orbit),
        ("earth", bodies.earth),
        ("moon_orbit", bodies.moon_orbit),
        ("moon", bodies.moon),
    ] {
        let world = scene.cached_world_transform(node)?;
        log::info!(
            "{label:<12} world ({:6.2}, {:6.2}, {:6.2})",
            world.position.x,
            world.position.y,
            world.position.z
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use orrery_engine::foundation::math::constants::HALF_PI;

    const EPSILON: f32 = 1e-5;

    struct Built {
        scene: SceneGraph,
        driver: AnimationDriver,
        helpers: DebugHelperSystem,
        panel: DebugPanel,
        bodies: SolarSystem,
    }

    fn build_default() -> Built {
        let config = SolarSystemConfig::default();
        let mut scene = SceneGraph::new();
        let mut driver = AnimationDriver::new();
        let mut helpers = DebugHelperSystem::new();
        let mut panel = DebugPanel::new();
        let bodies = build(&mut scene, &mut driver, &mut helpers, &mut panel, &config).unwrap();
        Built {
            scene,
            driver,
            helpers,
            panel,
            bodies,
        }
    }

    fn world_position(scene: &SceneGraph, node: NodeHandle) -> Vec3 {
        scene.world_transform(node).unwrap().position
    }

    #[test]
    fn test_rest_positions() {
        let mut built = build_default();
        built.scene.update_world_transforms();

        assert_relative_eq!(
            world_position(&built.scene, built.bodies.sun),
            Vec3::zeros(),
            epsilon = EPSILON
        );
        // Orbit radii are immune to the sun's 5x scale.
        assert_relative_eq!(
            world_position(&built.scene, built.bodies.earth),
            Vec3::new(10.0, 0.0, 0.0),
            epsilon = EPSILON
        );
        assert_relative_eq!(
            world_position(&built.scene, built.bodies.moon),
            Vec3::new(12.0, 0.0, 0.0),
            epsilon = EPSILON
        );
        // The sun's scale reaches its own visual only.
        let sun_world = built.scene.world_transform(built.bodies.sun).unwrap();
        assert_relative_eq!(sun_world.scale, Vec3::repeat(5.0), epsilon = EPSILON);
        let moon_world = built.scene.world_transform(built.bodies.moon).unwrap();
        assert_relative_eq!(moon_world.scale, Vec3::repeat(0.5), epsilon = EPSILON);
    }

    #[test]
    fn test_quarter_turn_carries_the_earth() {
        let mut built = build_default();
        // Freeze every rate except the system pivot so only the year turns.
        let config = SolarSystemConfig::default();
        let mut scene = SceneGraph::new();
        let mut driver = AnimationDriver::new();
        let mut helpers = DebugHelperSystem::new();
        let mut panel = DebugPanel::new();
        let mut frozen = config.clone();
        frozen.earth_orbit.spin_rate = 0.0;
        let bodies = build(&mut scene, &mut driver, &mut helpers, &mut panel, &frozen).unwrap();

        driver.tick(&mut scene, HALF_PI);
        scene.update_world_transforms();

        // Rotating +90° about Y maps +X to -Z; radius is preserved.
        assert_relative_eq!(
            world_position(&scene, bodies.earth),
            Vec3::new(0.0, 0.0, -10.0),
            epsilon = 1e-4
        );

        // And in the unfrozen default scene the radius still holds.
        built.driver.tick(&mut built.scene, HALF_PI);
        built.scene.update_world_transforms();
        let earth = world_position(&built.scene, built.bodies.earth);
        assert_relative_eq!(earth.norm(), 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_moon_orbits_the_earth_via_the_earth_pivot() {
        let config = SolarSystemConfig {
            system_spin_rate: 0.0,
            ..SolarSystemConfig::default()
        };
        let mut scene = SceneGraph::new();
        let mut driver = AnimationDriver::new();
        let mut helpers = DebugHelperSystem::new();
        let mut panel = DebugPanel::new();
        let bodies = build(&mut scene, &mut driver, &mut helpers, &mut panel, &config).unwrap();

        driver.tick(&mut scene, HALF_PI);
        scene.update_world_transforms();

        let earth = world_position(&scene, bodies.earth);
        let moon = world_position(&scene, bodies.moon);
        assert_relative_eq!(earth, Vec3::new(10.0, 0.0, 0.0), epsilon = 1e-4);
        // The earth pivot's quarter turn moved the moon from +X to -Z of
        // the earth, keeping the 2-unit separation.
        assert_relative_eq!(moon, Vec3::new(10.0, 0.0, -2.0), epsilon = 1e-4);
        assert_relative_eq!((moon - earth).norm(), 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_panel_lists_all_six_toggles_hidden() {
        let built = build_default();

        let labels: Vec<_> = built.panel.entries().map(|e| e.label().to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "solarSystem",
                "sunMesh",
                "earthOrbit",
                "earthMesh",
                "moonOrbit",
                "moonMesh"
            ]
        );
        for index in 0..built.panel.len() {
            assert!(!built.panel.get(index, &built.helpers).unwrap());
        }
        // Hidden helpers leave exactly the three bodies drawable.
        assert_eq!(built.scene.drawables().count(), 3);
    }

    #[test]
    fn test_registered_bodies_share_one_clock() {
        let mut built = build_default();
        built.driver.tick(&mut built.scene, 5.0);

        let expected = Quat::from_axis_angle(&Vec3::y_axis(), 5.0);
        for node in [
            built.bodies.system,
            built.bodies.sun,
            built.bodies.earth_orbit,
            built.bodies.earth,
            built.bodies.moon,
        ] {
            let rotation = built.scene.node(node).unwrap().local_transform().rotation;
            assert_relative_eq!(rotation, expected, epsilon = EPSILON);
        }
        // The moon pivot is not animated.
        let moon_orbit = built
            .scene
            .node(built.bodies.moon_orbit)
            .unwrap()
            .local_transform()
            .rotation;
        assert_relative_eq!(moon_orbit, Quat::identity(), epsilon = EPSILON);
    }
}
