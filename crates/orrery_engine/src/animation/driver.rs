//! Absolute-time rotation driver
//!
//! Rotation is a pure function of elapsed time, not of the previous
//! rotation. That makes a tick trivially deterministic and replayable
//! given the same elapsed-time sequence: there is no velocity integration
//! and no accumulated drift between bodies.

use crate::scene::{NodeHandle, SceneGraph};

struct Registration {
    node: NodeHandle,
    rate: f32,
}

/// Applies a per-node rotation rule once per frame tick
///
/// Every registered node receives the same elapsed-time value within one
/// tick; a per-registration rate multiplier differentiates orbital and
/// spin periods (1.0 everywhere reproduces equal rates for all bodies).
#[derive(Default)]
pub struct AnimationDriver {
    registrations: Vec<Registration>,
}

impl AnimationDriver {
    /// Create an empty driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node at the default rate of 1.0 rad per second
    pub fn register(&mut self, node: NodeHandle) {
        self.register_with_rate(node, 1.0);
    }

    /// Register a node with a rate multiplier
    ///
    /// Registering the same node twice is allowed: both entries write the
    /// same angle, so the work is redundant but the value is unchanged.
    pub fn register_with_rate(&mut self, node: NodeHandle, rate: f32) {
        self.registrations.push(Registration { node, rate });
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no nodes are registered
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Set every registered node's spin angle from the global elapsed time
    ///
    /// Angle = `elapsed_seconds * rate` radians about the local Y axis.
    /// There are no error conditions: a stale handle is skipped with a
    /// debug log, since nodes are never destroyed mid-session.
    pub fn tick(&self, scene: &mut SceneGraph, elapsed_seconds: f32) {
        for registration in &self.registrations {
            if scene
                .set_spin_angle(registration.node, elapsed_seconds * registration.rate)
                .is_err()
            {
                log::debug!("skipping stale animation registration {:?}", registration.node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Quat, Vec3};
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    fn spin_of(scene: &SceneGraph, node: NodeHandle) -> Quat {
        scene.node(node).unwrap().local_transform().rotation
    }

    #[test]
    fn test_tick_sets_absolute_angle_for_all_nodes() {
        let mut scene = SceneGraph::new();
        let mut driver = AnimationDriver::new();

        let nodes: Vec<_> = (0..4)
            .map(|i| scene.create_node(&format!("body_{i}")))
            .collect();
        // Registration order deliberately scrambled.
        driver.register(nodes[2]);
        driver.register(nodes[0]);
        driver.register(nodes[3]);
        driver.register(nodes[1]);

        driver.tick(&mut scene, 5.0);

        let expected = Quat::from_axis_angle(&Vec3::y_axis(), 5.0);
        for node in nodes {
            assert_relative_eq!(spin_of(&scene, node), expected, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_tick_overwrites_rather_than_accumulates() {
        let mut scene = SceneGraph::new();
        let mut driver = AnimationDriver::new();
        let body = scene.create_node("body");
        driver.register(body);

        driver.tick(&mut scene, 5.0);
        driver.tick(&mut scene, 2.0);

        let expected = Quat::from_axis_angle(&Vec3::y_axis(), 2.0);
        assert_relative_eq!(spin_of(&scene, body), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_rate_multiplier_scales_angle() {
        let mut scene = SceneGraph::new();
        let mut driver = AnimationDriver::new();
        let slow = scene.create_node("slow");
        let fast = scene.create_node("fast");
        driver.register_with_rate(slow, 0.5);
        driver.register_with_rate(fast, 2.0);

        driver.tick(&mut scene, 3.0);

        assert_relative_eq!(
            spin_of(&scene, slow),
            Quat::from_axis_angle(&Vec3::y_axis(), 1.5),
            epsilon = EPSILON
        );
        assert_relative_eq!(
            spin_of(&scene, fast),
            Quat::from_axis_angle(&Vec3::y_axis(), 6.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_duplicate_registration_is_value_idempotent() {
        let mut scene = SceneGraph::new();
        let mut driver = AnimationDriver::new();
        let body = scene.create_node("body");
        driver.register(body);
        driver.register(body);
        assert_eq!(driver.len(), 2);

        driver.tick(&mut scene, 1.25);

        let expected = Quat::from_axis_angle(&Vec3::y_axis(), 1.25);
        assert_relative_eq!(spin_of(&scene, body), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_stale_registration_is_skipped() {
        let mut other = SceneGraph::new();
        let _ = other.create_node("padding");
        let foreign = other.create_node("foreign");

        let mut scene = SceneGraph::new();
        let body = scene.create_node("body");
        let mut driver = AnimationDriver::new();
        driver.register(foreign);
        driver.register(body);

        // Must not panic, and must still update the live node.
        driver.tick(&mut scene, 4.0);

        let expected = Quat::from_axis_angle(&Vec3::y_axis(), 4.0);
        assert_relative_eq!(spin_of(&scene, body), expected, epsilon = EPSILON);
    }
}
