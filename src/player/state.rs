//! Player components, resources and messages.
//!
//! All ECS components and Bevy resources that describe player state live here.
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`]: input + movement
//! - [`super::combat`]: firing, collisions, lives and respawn
//! - [`super::rendering`]: ship drawing

use crate::asteroid::AsteroidTier;
use crate::config::GameConfig;
use crate::constants::PLAYER_LIVES;
use bevy::prelude::*;

// ── Components ─────────────────────────────────────────────────────────────────

/// Marker component for the player ship entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Remaining invincibility window.  While active the ship ignores asteroids.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Invincibility {
    /// Seconds of invincibility remaining; decremented each frame, clamped to 0.
    pub timer: f32,
}

impl Invincibility {
    /// Start (or restart) an invincibility window of `duration` seconds.
    #[inline]
    pub fn grant(&mut self, duration: f32) {
        self.timer = duration.max(0.0);
    }

    /// Returns `true` while the invincibility window is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Count the window down by `dt`.
    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.timer = (self.timer - dt).max(0.0);
    }
}

// ── Resources ──────────────────────────────────────────────────────────────────

/// Enforces a minimum interval between consecutive shots.
#[derive(Resource, Debug, Default)]
pub struct PlayerFireCooldown {
    /// Remaining cooldown in seconds; decremented each frame, clamped to 0.
    pub timer: f32,
}

/// Tracks the player's lives and pending respawn.
///
/// - `remaining`: lives left, including the current one.  Decremented on each
///   death; reaching 0 ends the game.
/// - `respawn_timer`: when `Some(t)`, counts down `t` seconds before the ship
///   reappears.  `None` while the ship is alive (or the game is over).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerLives {
    pub remaining: u32,
    pub respawn_timer: Option<f32>,
}

impl Default for PlayerLives {
    fn default() -> Self {
        Self::new(PLAYER_LIVES)
    }
}

impl PlayerLives {
    pub fn new(lives: u32) -> Self {
        Self {
            remaining: lives,
            respawn_timer: None,
        }
    }

    /// Consume one life.  Returns `true` when that was the last one.
    pub fn lose_life(&mut self, respawn_delay: f32) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.respawn_timer = None;
            true
        } else {
            self.respawn_timer = Some(respawn_delay);
            false
        }
    }

    /// Whether a respawn countdown is running.
    #[inline]
    pub fn is_respawning(&self) -> bool {
        self.respawn_timer.is_some()
    }
}

/// The player's score plus per-tier kill counts.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScore {
    pub points: u32,
    pub large: u32,
    pub medium: u32,
    pub small: u32,
}

impl PlayerScore {
    /// Credit one shot-down asteroid of `tier`.
    pub fn record(&mut self, tier: AsteroidTier, config: &GameConfig) {
        self.points += tier.points(config);
        match tier {
            AsteroidTier::Large => self.large += 1,
            AsteroidTier::Medium => self.medium += 1,
            AsteroidTier::Small => self.small += 1,
        }
    }

    /// Total asteroids shot.
    #[inline]
    pub fn hits(self) -> u32 {
        self.large + self.medium + self.small
    }
}

// ── Input Abstraction ──────────────────────────────────────────────────────────

/// Aggregated player intent for the current frame.
///
/// [`super::control::keyboard_to_intent_system`] writes this resource each
/// frame after it is cleared; the movement and fire systems read it.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    /// Turn direction: `+1.0` counter-clockwise (left), `-1.0` clockwise (right).
    pub turn: f32,
    /// Thrust along the heading: `+1.0` forward, `-1.0` reverse.
    pub thrust: f32,
    /// Fire button held.
    pub fire: bool,
}

// ── Messages ───────────────────────────────────────────────────────────────────

/// Written when a vulnerable ship touches an asteroid.  At most one per frame.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHit {
    pub player: Entity,
    pub asteroid: Entity,
}
