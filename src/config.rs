//! Load-time game configuration from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the constants you care about.
//!
//! Values are fixed once loaded; nothing mutates the resource at runtime.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{
    validate_non_negative, validate_positive, validate_range, GameError, GameResult,
};
use bevy::prelude::*;
use serde::Deserialize;

/// Path of the optional override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Angles are in degrees.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Screen ────────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,
    pub max_frame_delta: f32,

    // ── Player: Movement ──────────────────────────────────────────────────────
    pub player_radius: f32,
    pub player_turn_speed: f32,
    pub player_acceleration: f32,
    pub player_drag: f32,

    // ── Player: Combat ────────────────────────────────────────────────────────
    pub shot_radius: f32,
    pub shot_speed: f32,
    pub shot_cooldown: f32,
    pub shot_expiry_margin: f32,

    // ── Player: Lives ─────────────────────────────────────────────────────────
    pub player_lives: u32,
    pub respawn_delay: f32,
    pub respawn_invincibility: f32,

    // ── Asteroids ─────────────────────────────────────────────────────────────
    pub asteroid_min_radius: f32,
    pub asteroid_max_radius: f32,
    pub asteroid_split_step: f32,
    pub asteroid_split_angle_min: f32,
    pub asteroid_split_angle_max: f32,
    pub asteroid_split_speed_multiplier: f32,
    pub asteroid_cull_margin: f32,

    // ── Asteroid Field ────────────────────────────────────────────────────────
    pub asteroid_spawn_interval: f32,
    pub asteroid_spawn_speed_min: f32,
    pub asteroid_spawn_speed_max: f32,
    pub asteroid_spawn_cone: f32,

    // ── Scoring ───────────────────────────────────────────────────────────────
    pub score_large: u32,
    pub score_medium: u32,
    pub score_small: u32,

    // ── Rendering ─────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Screen
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            max_frame_delta: MAX_FRAME_DELTA,
            // Player: Movement
            player_radius: PLAYER_RADIUS,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            player_drag: PLAYER_DRAG,
            // Player: Combat
            shot_radius: SHOT_RADIUS,
            shot_speed: PLAYER_SHOOT_SPEED,
            shot_cooldown: PLAYER_SHOOT_COOLDOWN,
            shot_expiry_margin: SHOT_EXPIRY_MARGIN,
            // Player: Lives
            player_lives: PLAYER_LIVES,
            respawn_delay: RESPAWN_DELAY,
            respawn_invincibility: RESPAWN_INVINCIBILITY,
            // Asteroids
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            asteroid_split_step: ASTEROID_SPLIT_STEP,
            asteroid_split_angle_min: ASTEROID_SPLIT_ANGLE_MIN,
            asteroid_split_angle_max: ASTEROID_SPLIT_ANGLE_MAX,
            asteroid_split_speed_multiplier: ASTEROID_SPLIT_SPEED_MULTIPLIER,
            asteroid_cull_margin: ASTEROID_CULL_MARGIN,
            // Asteroid Field
            asteroid_spawn_interval: ASTEROID_SPAWN_INTERVAL,
            asteroid_spawn_speed_min: ASTEROID_SPAWN_SPEED_MIN,
            asteroid_spawn_speed_max: ASTEROID_SPAWN_SPEED_MAX,
            asteroid_spawn_cone: ASTEROID_SPAWN_CONE,
            // Scoring
            score_large: SCORE_LARGE,
            score_medium: SCORE_MEDIUM,
            score_small: SCORE_SMALL,
            // Rendering
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Half-extents of the play area (the camera is centred on the origin).
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height) * 0.5
    }

    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(contents: &str, path: &str) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|e| GameError::ConfigParse {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the simulation's invariants
    /// (non-positive radii, asteroids that never shrink, zero lives, …).
    pub fn validate(&self) -> GameResult<()> {
        validate_positive("screen_width", self.screen_width)?;
        validate_positive("screen_height", self.screen_height)?;
        validate_positive("max_frame_delta", self.max_frame_delta)?;
        validate_positive("player_radius", self.player_radius)?;
        validate_non_negative("player_turn_speed", self.player_turn_speed)?;
        validate_non_negative("player_acceleration", self.player_acceleration)?;
        validate_non_negative("player_drag", self.player_drag)?;
        validate_positive("shot_radius", self.shot_radius)?;
        validate_positive("shot_speed", self.shot_speed)?;
        validate_non_negative("shot_cooldown", self.shot_cooldown)?;
        validate_non_negative("shot_expiry_margin", self.shot_expiry_margin)?;
        if self.player_lives == 0 {
            return Err(GameError::UnsafeConstant {
                name: "player_lives",
                value: 0.0,
                safe_range: "[1, ∞)",
            });
        }
        validate_non_negative("respawn_delay", self.respawn_delay)?;
        validate_non_negative("respawn_invincibility", self.respawn_invincibility)?;
        validate_positive("asteroid_min_radius", self.asteroid_min_radius)?;
        validate_range(
            "asteroid_min_radius",
            self.asteroid_min_radius,
            "asteroid_max_radius",
            self.asteroid_max_radius,
        )?;
        validate_positive("asteroid_split_step", self.asteroid_split_step)?;
        if self.asteroid_split_step > self.asteroid_min_radius {
            // A child of a just-above-minimum parent would get a non-positive radius.
            return Err(GameError::InconsistentRange {
                min_name: "asteroid_split_step",
                max_name: "asteroid_min_radius",
            });
        }
        // Exactly ASTEROID_KINDS radii, one split step apart.
        let top_tier = self.asteroid_min_radius
            + (ASTEROID_KINDS - 1) as f32 * self.asteroid_split_step;
        if (self.asteroid_max_radius - top_tier).abs() > 1e-3 {
            return Err(GameError::UnsafeConstant {
                name: "asteroid_max_radius",
                value: self.asteroid_max_radius,
                safe_range: "asteroid_min_radius + 2 × asteroid_split_step",
            });
        }
        validate_non_negative("asteroid_split_angle_min", self.asteroid_split_angle_min)?;
        validate_range(
            "asteroid_split_angle_min",
            self.asteroid_split_angle_min,
            "asteroid_split_angle_max",
            self.asteroid_split_angle_max,
        )?;
        validate_positive(
            "asteroid_split_speed_multiplier",
            self.asteroid_split_speed_multiplier,
        )?;
        validate_non_negative("asteroid_cull_margin", self.asteroid_cull_margin)?;
        validate_positive("asteroid_spawn_interval", self.asteroid_spawn_interval)?;
        validate_positive("asteroid_spawn_speed_min", self.asteroid_spawn_speed_min)?;
        validate_range(
            "asteroid_spawn_speed_min",
            self.asteroid_spawn_speed_min,
            "asteroid_spawn_speed_max",
            self.asteroid_spawn_speed_max,
        )?;
        validate_non_negative("asteroid_spawn_cone", self.asteroid_spawn_cone)?;
        if self.asteroid_spawn_cone >= 90.0 {
            // Beyond a right angle an edge spawn can head away from the screen.
            return Err(GameError::UnsafeConstant {
                name: "asteroid_spawn_cone",
                value: self.asteroid_spawn_cone,
                safe_range: "[0, 90)",
            });
        }
        validate_positive("hud_font_size", self.hud_font_size)?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with the values present in the file.
///
/// Missing keys retain their compiled defaults.  Parse or validation errors
/// are logged but do not abort the game.  A missing file is not an error.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match GameConfig::from_toml_str(&contents, CONFIG_PATH) {
            Ok(loaded) => {
                *config = loaded;
                info!("[SETUP] Loaded game config from {CONFIG_PATH}");
            }
            Err(e) => {
                warn!("[SETUP] {e}; using defaults");
            }
        },
        Err(_) => {
            info!("[SETUP] No {CONFIG_PATH} found; using compiled defaults");
        }
    }
}
