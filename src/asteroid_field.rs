//! Timed asteroid spawner along the screen edges.
//!
//! Every `asteroid_spawn_interval` seconds one large asteroid appears just
//! outside a random edge (offset by the maximum radius so it slides in rather
//! than popping into view).  Its velocity points inward, rotated by a random
//! angle within `±asteroid_spawn_cone`, with speed drawn from the configured
//! range.

use crate::asteroid::{spawn_asteroid, AsteroidSpawn};
use crate::config::GameConfig;
use crate::constants::ASTEROID_SPAWN_INTERVAL;
use bevy::prelude::*;
use rand::Rng;

/// Countdown until the next edge spawn.
#[derive(Resource, Debug, Clone)]
pub struct AsteroidField {
    /// Seconds remaining; a spawn happens when this reaches zero.
    pub spawn_timer: f32,
}

impl Default for AsteroidField {
    fn default() -> Self {
        Self {
            spawn_timer: ASTEROID_SPAWN_INTERVAL,
        }
    }
}

impl AsteroidField {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            spawn_timer: config.asteroid_spawn_interval,
        }
    }

    /// Advance the countdown by `dt`.  Returns `true` when a spawn is due,
    /// in which case the timer has already been reset to the full interval.
    pub fn tick(&mut self, dt: f32, interval: f32) -> bool {
        self.spawn_timer -= dt;
        if self.spawn_timer > 0.0 {
            return false;
        }
        self.spawn_timer = interval;
        true
    }
}

/// One of the four screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Bottom, Edge::Top];

    /// Unit vector pointing from this edge into the play area.
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::X,
            Edge::Right => Vec2::NEG_X,
            Edge::Bottom => Vec2::Y,
            Edge::Top => Vec2::NEG_Y,
        }
    }

    /// Point along the edge at fraction `t ∈ [0, 1]`, pushed `offset` units
    /// outside the play area.
    pub fn point(self, t: f32, half: Vec2, offset: f32) -> Vec2 {
        let x = -half.x + t * 2.0 * half.x;
        let y = -half.y + t * 2.0 * half.y;
        match self {
            Edge::Left => Vec2::new(-half.x - offset, y),
            Edge::Right => Vec2::new(half.x + offset, y),
            Edge::Bottom => Vec2::new(x, -half.y - offset),
            Edge::Top => Vec2::new(x, half.y + offset),
        }
    }
}

/// Roll a random edge spawn.
pub fn random_edge_spawn(config: &GameConfig, rng: &mut impl Rng) -> AsteroidSpawn {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];

    let speed = if config.asteroid_spawn_speed_max > config.asteroid_spawn_speed_min {
        rng.gen_range(config.asteroid_spawn_speed_min..=config.asteroid_spawn_speed_max)
    } else {
        config.asteroid_spawn_speed_min
    };
    let cone = config.asteroid_spawn_cone;
    let deviation = if cone > 0.0 {
        rng.gen_range(-cone..=cone)
    } else {
        0.0
    };
    let velocity = Vec2::from_angle(deviation.to_radians()).rotate(edge.inward()) * speed;

    let position = edge.point(
        rng.gen_range(0.0..=1.0),
        config.half_extents(),
        config.asteroid_max_radius,
    );

    AsteroidSpawn {
        position,
        velocity,
        radius: config.asteroid_max_radius,
    }
}

/// Tick the spawn countdown and spawn one asteroid whenever it expires.
pub fn asteroid_field_system(
    mut commands: Commands,
    mut field: ResMut<AsteroidField>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    if !field.tick(time.delta_secs(), config.asteroid_spawn_interval) {
        return;
    }
    let spawn = random_edge_spawn(&config, &mut rand::thread_rng());
    spawn_asteroid(&mut commands, spawn);
}

/// Reset the countdown at the start of a game.
pub fn reset_asteroid_field(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(AsteroidField::new(&config));
}
