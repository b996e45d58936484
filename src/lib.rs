//! Asteroids game library
//!
//! A minimal arcade shooter: a ship that turns, thrusts and fires at asteroids
//! that drift in from the screen edges and split when shot.  The binary in
//! `main.rs` wires these modules into a windowed Bevy app; the integration
//! tests drive the same plugins headless.

pub mod asteroid;
pub mod asteroid_field;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod menu;
pub mod player;
pub mod rendering;
pub mod shot;
pub mod simulation;
