//! Game-specific error types.
//!
//! Gameplay events (losing a life, running out of lives) are state
//! transitions, not errors.  The only fallible path in the crate is loading
//! the optional `assets/game.toml`, so this enum covers parsing and
//! validating configuration values.
//!
//! ## Usage
//!
//! ```rust
//! use asteroids::error::{validate_positive, GameResult};
//!
//! fn check(radius: f32) -> GameResult<()> {
//!     validate_positive("player_radius", radius)?;
//!     Ok(())
//! }
//! assert!(check(20.0).is_ok());
//! assert!(check(0.0).is_err());
//! ```

use std::fmt;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// `assets/game.toml` exists but is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse {
        /// Path of the file that failed to parse.
        path: String,
        /// Parser message.
        message: String,
    },

    /// A configuration value is outside its safe operating range.
    UnsafeConstant {
        /// Name of the config key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// Two configuration values contradict each other
    /// (e.g. a min/max range given in the wrong order).
    InconsistentRange {
        /// Name of the lower bound key.
        min_name: &'static str,
        /// Name of the upper bound key.
        max_name: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigParse { path, message } => {
                write!(f, "failed to parse {}: {}", path, message)
            }
            GameError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            GameError::InconsistentRange { min_name, max_name } => {
                write!(f, "'{}' must not exceed '{}'", min_name, max_name)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `value` is not strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error if `value` is negative.
pub fn validate_non_negative(name: &'static str, value: f32) -> GameResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, ∞)",
        })
    }
}

/// Returns an error unless `min <= max`.
pub fn validate_range(
    min_name: &'static str,
    min: f32,
    max_name: &'static str,
    max: f32,
) -> GameResult<()> {
    if min <= max {
        Ok(())
    } else {
        Err(GameError::InconsistentRange { min_name, max_name })
    }
}
