//! Player input and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame while playing)
//!
//! 1. [`player_intent_clear_system`]: resets `PlayerIntent`.
//! 2. [`keyboard_to_intent_system`]: translates held keys into `PlayerIntent`.
//! 3. [`apply_player_intent_system`]: turns the ship, applies thrust and drag.
//! 4. [`invincibility_tick_system`]: counts the invincibility window down.
//!
//! Position integration happens afterwards in
//! [`crate::geometry::integrate_motion_system`], shared with asteroids and shots.

use super::state::{Invincibility, Player, PlayerIntent};
use crate::config::GameConfig;
use crate::geometry::{Dead, Velocity};
use bevy::prelude::*;

// ── Step 1: Clear ─────────────────────────────────────────────────────────────

/// Clear `PlayerIntent` at the start of every frame.
pub fn player_intent_clear_system(mut intent: ResMut<PlayerIntent>) {
    *intent = PlayerIntent::default();
}

// ── Step 2: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate held keys into [`PlayerIntent`].
///
/// - **A / ←** → `turn = +1` (CCW)
/// - **D / →** → `turn = −1` (CW)
/// - **W / ↑** → `thrust = +1`
/// - **S / ↓** → `thrust = −1`
/// - **Space** → `fire = true`
///
/// Opposite keys held together cancel out.
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PlayerIntent>,
) {
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        intent.turn += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        intent.turn -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        intent.thrust += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        intent.thrust -= 1.0;
    }
    if keys.pressed(KeyCode::Space) {
        intent.fire = true;
    }
}

// ── Step 3: Apply intent ──────────────────────────────────────────────────────

/// Convert [`PlayerIntent`] into heading and velocity changes on the ship.
///
/// | Intent field | Effect                                                  |
/// |--------------|---------------------------------------------------------|
/// | `turn`       | rotate by `turn · turn_speed · dt`                      |
/// | `thrust`     | `velocity += forward · acceleration · thrust · dt`      |
/// | (always)     | `velocity *= exp(−drag · dt)`                           |
///
/// Everything scales with `dt`, so handling is frame-rate independent.
pub fn apply_player_intent_system(
    mut q: Query<(&mut Transform, &mut Velocity), (With<Player>, Without<Dead>)>,
    intent: Res<PlayerIntent>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let Ok((mut transform, mut velocity)) = q.single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    if intent.turn != 0.0 {
        transform.rotate_z(intent.turn * config.player_turn_speed.to_radians() * dt);
    }

    let forward = transform.rotation.mul_vec3(Vec3::Y).truncate();
    if intent.thrust != 0.0 {
        velocity.0 += forward * config.player_acceleration * intent.thrust * dt;
    }

    velocity.0 *= (-config.player_drag * dt).exp();
}

// ── Step 4: Invincibility ─────────────────────────────────────────────────────

/// Count down the ship's invincibility window.
///
/// A ship spawned this frame keeps its full window; counting starts on the
/// next frame.
pub fn invincibility_tick_system(
    mut q: Query<(&mut Invincibility, Ref<Player>)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for (mut inv, player) in q.iter_mut() {
        if inv.is_active() && !player.is_added() {
            inv.tick(dt);
        }
    }
}
