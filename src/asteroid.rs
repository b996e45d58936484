//! Asteroid component, size tiers and the split rule.
//!
//! Asteroids are plain circles drifting in a straight line.  When a shot hits
//! one, [`split_asteroid`] decides what replaces it:
//!
//! | Parent radius         | Result                                          |
//! |-----------------------|-------------------------------------------------|
//! | `<= min radius`       | destroyed, no children                          |
//! | `>  min radius`       | two children, radius − step, speed × multiplier |
//!
//! The two children leave along the parent heading rotated by `+θ` and `−θ`
//! for a single random `θ` in the configured split-angle range.

use crate::config::GameConfig;
use crate::geometry::{CircleShape, Dead, Velocity};
use bevy::prelude::*;
use rand::Rng;

/// Marker component for any asteroid entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Asteroid;

/// Size class of an asteroid; decides its score value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidTier {
    Small,
    Medium,
    Large,
}

impl AsteroidTier {
    /// Bucket a radius into a tier.  Each split shrinks an asteroid by
    /// `split_step`, so the tiers are one step apart:
    ///
    /// | Radius                      | Tier   |
    /// |-----------------------------|--------|
    /// | `r <= min`                  | Small  |
    /// | `min < r <= min + step`     | Medium |
    /// | `r > min + step`            | Large  |
    pub fn from_radius(radius: f32, min_radius: f32, split_step: f32) -> Self {
        // Child radii come from repeated subtraction; absorb rounding.
        const EPS: f32 = 1e-3;
        if radius <= min_radius + EPS {
            AsteroidTier::Small
        } else if radius <= min_radius + split_step + EPS {
            AsteroidTier::Medium
        } else {
            AsteroidTier::Large
        }
    }

    /// Tier of an asteroid of `radius` under `config`.
    pub fn of(radius: f32, config: &GameConfig) -> Self {
        Self::from_radius(radius, config.asteroid_min_radius, config.asteroid_split_step)
    }

    /// Points awarded for shooting an asteroid of this tier.
    pub fn points(self, config: &GameConfig) -> u32 {
        match self {
            AsteroidTier::Small => config.score_small,
            AsteroidTier::Medium => config.score_medium,
            AsteroidTier::Large => config.score_large,
        }
    }
}

/// Everything needed to spawn one asteroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

/// Component set of an asteroid entity.
pub fn asteroid_bundle(spawn: AsteroidSpawn) -> impl Bundle {
    (
        Asteroid,
        CircleShape::new(spawn.radius),
        Velocity(spawn.velocity),
        Transform::from_translation(spawn.position.extend(0.0)),
        Visibility::default(),
    )
}

/// Spawn a single asteroid entity.
pub fn spawn_asteroid(commands: &mut Commands, spawn: AsteroidSpawn) -> Entity {
    commands.spawn(asteroid_bundle(spawn)).id()
}

/// Compute the children that replace `parent` after it is shot.
///
/// Returns an empty `Vec` when the parent is at or below the minimum radius;
/// otherwise exactly two children at the parent's position.  The caller is
/// responsible for removing the parent.
pub fn split_asteroid(
    parent: AsteroidSpawn,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Vec<AsteroidSpawn> {
    if parent.radius <= config.asteroid_min_radius {
        return Vec::new();
    }

    let degrees = if config.asteroid_split_angle_max > config.asteroid_split_angle_min {
        rng.gen_range(config.asteroid_split_angle_min..config.asteroid_split_angle_max)
    } else {
        config.asteroid_split_angle_min
    };
    let angle = degrees.to_radians();

    let radius = parent.radius - config.asteroid_split_step;
    let multiplier = config.asteroid_split_speed_multiplier;

    [angle, -angle]
        .into_iter()
        .map(|a| AsteroidSpawn {
            position: parent.position,
            velocity: Vec2::from_angle(a).rotate(parent.velocity) * multiplier,
            radius,
        })
        .collect()
}

/// Tag asteroids that have drifted far outside the play area as [`Dead`].
///
/// The cull margin is wider than the spawn offset, so edge spawns moving
/// inward are never affected.
pub fn cull_distant_asteroids_system(
    mut commands: Commands,
    query: Query<(Entity, &Transform, &CircleShape), (With<Asteroid>, Without<Dead>)>,
    config: Res<GameConfig>,
) {
    let half = config.half_extents();
    for (entity, transform, shape) in query.iter() {
        if shape
            .bounds(transform)
            .is_outside(half, config.asteroid_cull_margin)
        {
            commands.entity(entity).insert(Dead);
        }
    }
}
