//! Simulation plugin: the per-frame game loop.
//!
//! While in [`GameState::Playing`] the systems below run once per frame, in
//! this order (chained, so commands from one step are visible to the next):
//!
//! | # | System                              | Step                                     |
//! |---|-------------------------------------|------------------------------------------|
//! | 1 | `player_respawn_system`             | tick respawn timer, recreate ship        |
//! | 2 | `player_intent_clear_system`        | reset per-frame intent                   |
//! | 3 | `keyboard_to_intent_system`         | held keys → intent                       |
//! | 4 | `apply_player_intent_system`        | turn, thrust, drag                       |
//! | 5 | `invincibility_tick_system`         | count invincibility down                 |
//! | 6 | `shot_fire_system`                  | cooldown-gated firing                    |
//! | 7 | `asteroid_field_system`             | timed edge spawns                        |
//! | 8 | `integrate_motion_system`           | position += velocity · dt                |
//! | 9 | `expire_offscreen_shots_system`     | drop shots that left the field           |
//! |10 | `cull_distant_asteroids_system`     | drop asteroids far outside the field     |
//! |11 | `player_asteroid_collision_system`  | ship ↔ asteroid → `PlayerHit`            |
//! |12 | `player_hit_system`                 | lives, respawn timer, game over          |
//! |13 | `shot_asteroid_hit_system`          | split + score                            |
//! |14 | `reap_dead_system`                  | despawn everything tagged `Dead`         |
//!
//! Rendering runs after [`SimulationSet`] (see [`crate::rendering`]).
//!
//! ## Frame pacing
//!
//! The loop is paced by the display (`PresentMode::AutoVsync` in `main.rs`),
//! which is 60 Hz on most panels but faster on high-refresh ones.  Nothing
//! here assumes a fixed rate: every step scales by `Time::delta_secs`, so a
//! 144 Hz display runs the same game with smaller steps.  The virtual clock's
//! max delta is clamped to `max_frame_delta`, which caps a single step after
//! a stall.

use crate::asteroid::cull_distant_asteroids_system;
use crate::asteroid_field::{asteroid_field_system, reset_asteroid_field, AsteroidField};
use crate::config::{load_game_config, GameConfig};
use crate::geometry::{integrate_motion_system, reap_dead_system};
use crate::menu::GameState;
use crate::player::{
    apply_player_intent_system, invincibility_tick_system, keyboard_to_intent_system,
    player_asteroid_collision_system, player_hit_system, player_intent_clear_system,
    player_respawn_system, shot_asteroid_hit_system, shot_fire_system, spawn_player,
    PlayerFireCooldown, PlayerHit, PlayerIntent, PlayerLives, PlayerScore,
};
use crate::shot::expire_offscreen_shots_system;
use bevy::prelude::*;
use std::time::Duration;

/// System set containing the whole gameplay pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<AsteroidField>()
            .init_resource::<PlayerIntent>()
            .init_resource::<PlayerFireCooldown>()
            .init_resource::<PlayerLives>()
            .init_resource::<PlayerScore>()
            .add_message::<PlayerHit>()
            .add_systems(Startup, configure_frame_clock.after(load_game_config))
            .add_systems(
                OnEnter(GameState::Playing),
                (start_new_game, reset_asteroid_field, spawn_player),
            )
            .add_systems(
                Update,
                (
                    player_respawn_system,
                    player_intent_clear_system,
                    keyboard_to_intent_system,
                    apply_player_intent_system,
                    invincibility_tick_system,
                    shot_fire_system,
                    asteroid_field_system,
                    integrate_motion_system,
                    expire_offscreen_shots_system,
                    cull_distant_asteroids_system,
                    player_asteroid_collision_system,
                    player_hit_system,
                    shot_asteroid_hit_system,
                    reap_dead_system,
                )
                    .chain()
                    .in_set(SimulationSet)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Reset per-game resources when play begins.
///
/// Space is released so the key that dismissed the title screen does not
/// also fire; it has to be pressed again.
pub fn start_new_game(
    mut lives: ResMut<PlayerLives>,
    mut score: ResMut<PlayerScore>,
    mut cooldown: ResMut<PlayerFireCooldown>,
    mut keys: ResMut<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
) {
    *lives = PlayerLives::new(config.player_lives);
    *score = PlayerScore::default();
    *cooldown = PlayerFireCooldown::default();
    keys.reset(KeyCode::Space);
    info!("New game: {} lives", lives.remaining);
}

/// Clamp the virtual clock so one slow frame cannot produce a huge `dt`.
fn configure_frame_clock(mut time: ResMut<Time<Virtual>>, config: Res<GameConfig>) {
    time.set_max_delta(Duration::from_secs_f32(config.max_frame_delta));
}
