//! Shot firing, collision resolution, lives and respawn.
//!
//! ## Collision rules
//!
//! | Pair            | Condition                 | Effect                                         |
//! |-----------------|---------------------------|------------------------------------------------|
//! | Ship ↔ Asteroid | ship present, vulnerable  | `PlayerHit` → lose a life, respawn or game over |
//! | Shot ↔ Asteroid | both alive this frame     | shot removed, asteroid split, score += tier    |
//!
//! Each shot kills at most one asteroid, and each asteroid can be killed by at
//! most one shot, per frame.  Removed entities are tagged
//! [`Dead`](crate::geometry::Dead) and despawned by the reaper at the end of
//! the pipeline.

use super::state::{
    Invincibility, Player, PlayerFireCooldown, PlayerHit, PlayerIntent, PlayerLives, PlayerScore,
};
use super::player_bundle;
use crate::asteroid::{split_asteroid, spawn_asteroid, Asteroid, AsteroidSpawn, AsteroidTier};
use crate::config::GameConfig;
use crate::geometry::{CircleShape, Dead, Velocity};
use crate::menu::GameState;
use crate::shot::{shot_bundle, Shot};
use bevy::prelude::*;
use std::collections::HashSet;

// ── Shot firing ───────────────────────────────────────────────────────────────

/// Fire a shot from the ship's nose while the fire intent is held, at most once
/// per `shot_cooldown` seconds.
pub fn shot_fire_system(
    mut commands: Commands,
    q_player: Query<&Transform, (With<Player>, Without<Dead>)>,
    intent: Res<PlayerIntent>,
    mut cooldown: ResMut<PlayerFireCooldown>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    cooldown.timer = (cooldown.timer - time.delta_secs()).max(0.0);

    let Ok(transform) = q_player.single() else {
        return;
    };
    if !intent.fire || cooldown.timer > 0.0 {
        return;
    }
    cooldown.timer = config.shot_cooldown;

    let forward = transform.rotation.mul_vec3(Vec3::Y).truncate();
    let nose = transform.translation.truncate() + forward * config.player_radius;

    commands.spawn(shot_bundle(
        nose,
        forward * config.shot_speed,
        config.shot_radius,
    ));
}

// ── Ship ↔ Asteroid ───────────────────────────────────────────────────────────

/// Detect the ship touching an asteroid and write a [`PlayerHit`].
///
/// Skipped while the ship is absent (respawning) or invincible.  Only the
/// first overlapping asteroid in iteration order is reported.
pub fn player_asteroid_collision_system(
    q_player: Query<(Entity, &Transform, &CircleShape, &Invincibility), (With<Player>, Without<Dead>)>,
    q_asteroids: Query<(Entity, &Transform, &CircleShape), (With<Asteroid>, Without<Dead>)>,
    mut hits: MessageWriter<PlayerHit>,
) {
    let Ok((player, transform, shape, invincibility)) = q_player.single() else {
        return;
    };
    if invincibility.is_active() {
        return;
    }

    let ship = shape.bounds(transform);
    let hit = q_asteroids
        .iter()
        .find(|(_, t, s)| s.bounds(t).collides_with(&ship));

    if let Some((asteroid, _, _)) = hit {
        hits.write(PlayerHit { player, asteroid });
    }
}

/// Consume [`PlayerHit`]: remove the ship, take a life, and either start the
/// respawn countdown or end the game.
pub fn player_hit_system(
    mut commands: Commands,
    mut hits: MessageReader<PlayerHit>,
    mut lives: ResMut<PlayerLives>,
    mut next_state: ResMut<NextState<GameState>>,
    config: Res<GameConfig>,
) {
    // One ship, one life per frame: keep the first hit, drain the rest.
    let mut first = None;
    for hit in hits.read() {
        first.get_or_insert(*hit);
    }
    let Some(hit) = first else {
        return;
    };

    commands.entity(hit.player).insert(Dead);

    if lives.lose_life(config.respawn_delay) {
        info!("Player ship destroyed! No lives left: game over");
        next_state.set(GameState::GameOver);
    } else {
        info!(
            "Player ship destroyed! Lives remaining: {}  Respawning in {:.1}s…",
            lives.remaining, config.respawn_delay
        );
    }
}

// ── Respawn ───────────────────────────────────────────────────────────────────

/// Count the respawn timer down and recreate the ship at the centre when it
/// expires.  The new ship starts with a full invincibility window.
pub fn player_respawn_system(
    mut commands: Commands,
    q_player: Query<(), (With<Player>, Without<Dead>)>,
    mut lives: ResMut<PlayerLives>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    if !q_player.is_empty() {
        return;
    }
    let Some(ref mut timer) = lives.respawn_timer else {
        return;
    };
    *timer -= time.delta_secs();
    if *timer > 0.0 {
        return;
    }
    lives.respawn_timer = None;

    commands.spawn(player_bundle(&config, config.respawn_invincibility));
    info!("Player ship respawned");
}

// ── Shot ↔ Asteroid ───────────────────────────────────────────────────────────

/// Resolve shot/asteroid overlaps: remove the shot, split the asteroid and
/// credit its tier.
///
/// Both queries are a snapshot of the entities alive at the start of this
/// system; children spawned here only become hittable next frame.  The local
/// `destroyed` set keeps a second shot from hitting an asteroid that an
/// earlier shot already killed this frame.
pub fn shot_asteroid_hit_system(
    mut commands: Commands,
    q_shots: Query<(Entity, &Transform, &CircleShape), (With<Shot>, Without<Dead>)>,
    q_asteroids: Query<
        (Entity, &Transform, &CircleShape, &Velocity),
        (With<Asteroid>, Without<Dead>),
    >,
    mut score: ResMut<PlayerScore>,
    config: Res<GameConfig>,
) {
    let mut rng = rand::thread_rng();
    let mut destroyed: HashSet<Entity> = HashSet::new();

    for (shot, shot_transform, shot_shape) in q_shots.iter() {
        let bullet = shot_shape.bounds(shot_transform);

        let hit = q_asteroids.iter().find(|(entity, transform, shape, _)| {
            !destroyed.contains(entity) && shape.bounds(transform).collides_with(&bullet)
        });
        let Some((asteroid, transform, shape, velocity)) = hit else {
            continue;
        };

        destroyed.insert(asteroid);
        commands.entity(shot).insert(Dead);
        commands.entity(asteroid).insert(Dead);

        let tier = AsteroidTier::of(shape.radius, &config);
        score.record(tier, &config);

        let parent = AsteroidSpawn {
            position: transform.translation.truncate(),
            velocity: velocity.0,
            radius: shape.radius,
        };
        for child in split_asteroid(parent, &config, &mut rng) {
            spawn_asteroid(&mut commands, child);
        }
    }
}
