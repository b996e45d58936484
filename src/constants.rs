//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig`] mirrors every value and may override any of
//! them from `assets/game.toml` at startup.
//!
//! World units are pixels; the camera is centred on the origin, so the play
//! area spans `±SCREEN_WIDTH/2` × `±SCREEN_HEIGHT/2`.

// ── Screen ────────────────────────────────────────────────────────────────────

/// Window and play-area width.
pub const SCREEN_WIDTH: f32 = 1280.0;

/// Window and play-area height.
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Upper bound on a single frame's simulation step (seconds).
///
/// A stalled frame (window drag, debugger pause) is clamped to this so shots
/// cannot tunnel through asteroids on the next frame.
pub const MAX_FRAME_DELTA: f32 = 0.05;

// ── Player: Movement ─────────────────────────────────────────────────────────

/// Collision radius of the ship; also the distance from centre to nose.
pub const PLAYER_RADIUS: f32 = 20.0;

/// Turn rate in degrees per second while A/D is held.
pub const PLAYER_TURN_SPEED: f32 = 300.0;

/// Acceleration (u/s²) along the heading while W is held.
/// Reverse thrust (S) uses the same magnitude.
pub const PLAYER_ACCELERATION: f32 = 200.0;

/// Exponential drag rate (1/s).  Velocity is scaled by `exp(-drag · dt)` each
/// frame, so at 0.5 an unpowered ship loses ~40 % of its speed per second.
pub const PLAYER_DRAG: f32 = 0.5;

// ── Player: Combat ────────────────────────────────────────────────────────────

/// Projectile radius.
pub const SHOT_RADIUS: f32 = 5.0;

/// Projectile speed (u/s) along the ship heading at the moment of firing.
pub const PLAYER_SHOOT_SPEED: f32 = 500.0;

/// Minimum seconds between consecutive shots.
pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;

/// Shots whose circle lies entirely beyond the play area plus this margin
/// are removed.
pub const SHOT_EXPIRY_MARGIN: f32 = 10.0;

// ── Player: Lives ─────────────────────────────────────────────────────────────

/// Lives at the start of a game.
pub const PLAYER_LIVES: u32 = 3;

/// Seconds between losing a life and the ship reappearing at the centre.
pub const RESPAWN_DELAY: f32 = 2.0;

/// Invincibility window (seconds) granted to a respawned ship.
pub const RESPAWN_INVINCIBILITY: f32 = 2.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Radius of the smallest tier.  Also the amount a split child shrinks by.
pub const ASTEROID_MIN_RADIUS: f32 = 20.0;

/// Number of size tiers (small, medium, large).
pub const ASTEROID_KINDS: u32 = 3;

/// Radius of the largest tier: `ASTEROID_MIN_RADIUS × ASTEROID_KINDS`.
pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;

/// Radius removed from each child when an asteroid splits.
pub const ASTEROID_SPLIT_STEP: f32 = ASTEROID_MIN_RADIUS;

/// Child heading deviation range (degrees).  Each split picks one angle in
/// this range and rotates the parent velocity by `+angle` and `-angle`.
pub const ASTEROID_SPLIT_ANGLE_MIN: f32 = 20.0;
pub const ASTEROID_SPLIT_ANGLE_MAX: f32 = 50.0;

/// Speed multiplier applied to both children of a split.
pub const ASTEROID_SPLIT_SPEED_MULTIPLIER: f32 = 1.2;

/// Asteroids whose circle lies entirely beyond the play area plus this
/// margin are culled.  Must exceed the spawn offset (`ASTEROID_MAX_RADIUS`)
/// or freshly spawned asteroids would be culled before entering the screen.
pub const ASTEROID_CULL_MARGIN: f32 = ASTEROID_MAX_RADIUS * 2.0;

// ── Asteroid Field ────────────────────────────────────────────────────────────

/// Seconds between edge spawns.
pub const ASTEROID_SPAWN_INTERVAL: f32 = 0.8;

/// Spawn speed range (u/s).
pub const ASTEROID_SPAWN_SPEED_MIN: f32 = 40.0;
pub const ASTEROID_SPAWN_SPEED_MAX: f32 = 100.0;

/// Half-angle (degrees) of the inward cone a spawned asteroid travels in.
pub const ASTEROID_SPAWN_CONE: f32 = 30.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Points for shooting an asteroid of each tier.  Smaller targets are worth
/// more because they are harder to hit.
pub const SCORE_LARGE: u32 = 20;
pub const SCORE_MEDIUM: u32 = 50;
pub const SCORE_SMALL: u32 = 100;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Font size of the score/lives HUD.
pub const HUD_FONT_SIZE: f32 = 22.0;

/// Blink frequency (Hz) of the ship outline while invincible.
pub const INVINCIBILITY_BLINK_HZ: f32 = 8.0;
