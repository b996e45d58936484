//! Circle-shaped entities: bounding circles, collision, motion and liveness.
//!
//! Every simulated entity (ship, asteroid, shot) is a circle.  Position lives
//! in the entity's [`Transform`], velocity in [`Velocity`] and radius in
//! [`CircleShape`].  Systems select entities by component set:
//!
//! | Query                         | Role                          |
//! |-------------------------------|-------------------------------|
//! | `(&mut Transform, &Velocity)` | moved each frame              |
//! | `(&Transform, &CircleShape)`  | drawn and collision-tested    |
//!
//! Entities removed during a frame are tagged [`Dead`] instead of being
//! despawned in place; [`reap_dead_system`] despawns them once, at the end of
//! the simulation pipeline.  Collision queries filter `Without<Dead>` so a
//! removed entity can never be hit twice.

use bevy::prelude::*;

// ── Bounding circle ───────────────────────────────────────────────────────────

/// A circle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// `true` iff the two circles overlap.
    ///
    /// The comparison is strict: circles that only touch
    /// (`distance == r₁ + r₂`) do not collide.
    #[inline]
    pub fn collides_with(&self, other: &Circle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    /// `true` when the whole circle lies outside the axis-aligned box
    /// `±half_extents` grown by `margin`.
    #[inline]
    pub fn is_outside(&self, half_extents: Vec2, margin: f32) -> bool {
        let limit = half_extents + Vec2::splat(margin + self.radius);
        self.center.x.abs() > limit.x || self.center.y.abs() > limit.y
    }
}

// ── Components ────────────────────────────────────────────────────────────────

/// Collision radius of a circular entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub radius: f32,
}

impl CircleShape {
    #[inline]
    pub fn new(radius: f32) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self { radius }
    }

    /// World-space bounding circle for an entity at `transform`.
    #[inline]
    pub fn bounds(&self, transform: &Transform) -> Circle {
        Circle::new(transform.translation.truncate(), self.radius)
    }
}

/// Linear velocity in world units per second.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Tag for an entity removed this frame.  Despawned by [`reap_dead_system`].
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;

// ── Systems ───────────────────────────────────────────────────────────────────

/// Straight-line motion for every entity with a [`Velocity`]:
/// `position += velocity · dt`.
///
/// The ship's thrust and drag are applied to its velocity earlier in the
/// pipeline; asteroids and shots move with constant velocity.
pub fn integrate_motion_system(
    mut query: Query<(&mut Transform, &Velocity), Without<Dead>>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for (mut transform, velocity) in query.iter_mut() {
        transform.translation += (velocity.0 * dt).extend(0.0);
    }
}

/// Despawn every entity tagged [`Dead`] this frame.
pub fn reap_dead_system(mut commands: Commands, query: Query<Entity, With<Dead>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f32, y: f32, r: f32) -> Circle {
        Circle::new(Vec2::new(x, y), r)
    }

    #[test]
    fn overlapping_circles_collide() {
        assert!(circle(0.0, 0.0, 10.0).collides_with(&circle(15.0, 0.0, 10.0)));
    }

    #[test]
    fn touching_circles_do_not_collide() {
        // distance 20 == 10 + 10
        assert!(!circle(0.0, 0.0, 10.0).collides_with(&circle(20.0, 0.0, 10.0)));
        assert!(!circle(0.0, 0.0, 3.0).collides_with(&circle(3.0, 4.0, 2.0)));
    }

    #[test]
    fn distant_circles_do_not_collide() {
        assert!(!circle(-100.0, 50.0, 5.0).collides_with(&circle(100.0, 50.0, 5.0)));
    }

    #[test]
    fn concentric_circles_collide() {
        assert!(circle(7.0, 7.0, 1.0).collides_with(&circle(7.0, 7.0, 30.0)));
    }

    #[test]
    fn collision_matches_distance_rule_and_is_symmetric() {
        let samples = [
            circle(0.0, 0.0, 20.0),
            circle(25.0, 0.0, 5.0),
            circle(0.0, 60.0, 40.0),
            circle(-30.0, -40.0, 10.0),
            circle(12.5, 12.5, 0.5),
            circle(100.0, 100.0, 60.0),
        ];
        for a in &samples {
            for b in &samples {
                let expected = a.center.distance(b.center) < a.radius + b.radius;
                assert_eq!(a.collides_with(b), expected);
                assert_eq!(a.collides_with(b), b.collides_with(a));
            }
        }
    }

    #[test]
    fn bounds_uses_transform_translation() {
        let shape = CircleShape::new(12.0);
        let transform = Transform::from_xyz(3.0, -4.0, 1.0);
        assert_eq!(shape.bounds(&transform), circle(3.0, -4.0, 12.0));
    }

    #[test]
    fn outside_requires_whole_circle_past_margin() {
        let half = Vec2::new(100.0, 50.0);
        // Centre just past the edge but still overlapping it.
        assert!(!circle(105.0, 0.0, 10.0).is_outside(half, 0.0));
        // Fully beyond edge + margin.
        assert!(circle(121.0, 0.0, 10.0).is_outside(half, 10.0));
        assert!(circle(0.0, -61.0, 10.0).is_outside(half, 0.0));
        assert!(!circle(0.0, 0.0, 10.0).is_outside(half, 0.0));
    }
}
