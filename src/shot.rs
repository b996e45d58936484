//! Player projectiles.
//!
//! Shots fly in a straight line at constant velocity (moved by
//! [`crate::geometry::integrate_motion_system`]).  They disappear when they
//! hit an asteroid (see [`crate::player::combat::shot_asteroid_hit_system`])
//! or once they have left the play area.

use crate::config::GameConfig;
use crate::geometry::{CircleShape, Dead, Velocity};
use bevy::prelude::*;

/// Marker component for a player projectile.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Shot;

/// Component set of a shot entity.
pub fn shot_bundle(position: Vec2, velocity: Vec2, radius: f32) -> impl Bundle {
    (
        Shot,
        CircleShape::new(radius),
        Velocity(velocity),
        Transform::from_translation(position.extend(0.0)),
        Visibility::default(),
    )
}

/// Tag shots that have fully left the play area as [`Dead`].
pub fn expire_offscreen_shots_system(
    mut commands: Commands,
    query: Query<(Entity, &Transform, &CircleShape), (With<Shot>, Without<Dead>)>,
    config: Res<GameConfig>,
) {
    let half = config.half_extents();
    for (entity, transform, shape) in query.iter() {
        if shape
            .bounds(transform)
            .is_outside(half, config.shot_expiry_margin)
        {
            commands.entity(entity).insert(Dead);
        }
    }
}
