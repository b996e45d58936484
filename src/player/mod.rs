//! Player module: ship entity, input handling, combat, and rendering.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Player`, `Invincibility`), resources (`PlayerLives`, `PlayerScore`, `PlayerFireCooldown`, `PlayerIntent`) and the `PlayerHit` message |
//! | [`control`] | Keyboard → intent, turning, thrust, drag, invincibility countdown |
//! | [`combat`] | Shot firing, ship/asteroid and shot/asteroid collisions, lives, respawn |
//! | [`rendering`] | Ship mesh fill and gizmo outline |
//!
//! All public items are re-exported at this level so that the rest of the crate
//! can use flat `crate::player::*` imports without knowing the sub-module layout.

pub mod combat;
pub mod control;
pub mod rendering;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use combat::{
    player_asteroid_collision_system, player_hit_system, player_respawn_system,
    shot_asteroid_hit_system, shot_fire_system,
};
pub use control::{
    apply_player_intent_system, invincibility_tick_system, keyboard_to_intent_system,
    player_intent_clear_system,
};
pub use rendering::{attach_player_ship_mesh_system, player_gizmo_system};
pub use state::{
    Invincibility, Player, PlayerFireCooldown, PlayerHit, PlayerIntent, PlayerLives, PlayerScore,
};

// ── Ship spawn ─────────────────────────────────────────────────────────────────

use crate::config::GameConfig;
use crate::geometry::{CircleShape, Velocity};
use bevy::prelude::*;

/// Component set of the ship, at rest at the centre of the screen, facing up,
/// invincible for `invincibility` seconds (0 for none).
pub fn player_bundle(config: &GameConfig, invincibility: f32) -> impl Bundle {
    (
        Player,
        CircleShape::new(config.player_radius),
        Velocity::default(),
        Invincibility {
            timer: invincibility.max(0.0),
        },
        Transform::from_translation(Vec3::ZERO),
        Visibility::default(),
    )
}

/// Spawn the ship for a new game.  The opening ship is not invincible.
pub fn spawn_player(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn(player_bundle(&config, 0.0));
    info!("Player ship spawned at origin");
}
