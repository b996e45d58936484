//! Welcome and game-over screens: `GameState` definition and `MenuPlugin`.
//!
//! ## States
//!
//! | State      | Description                                           |
//! |------------|-------------------------------------------------------|
//! | `Welcome`  | Initial state; title screen waits for any key/click   |
//! | `Playing`  | Simulation running; all game systems active           |
//! | `GameOver` | Lives exhausted; final score shown, any key quits     |
//!
//! Respawning is not a state of its own: it is `Playing` with the ship absent
//! and [`PlayerLives::respawn_timer`](crate::player::PlayerLives) running.
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                    | Schedule                   | Purpose                    |
//! |---------------------------|----------------------------|----------------------------|
//! | `setup_welcome`           | `OnEnter(Welcome)`         | Spawn title screen UI      |
//! | `cleanup_welcome`         | `OnExit(Welcome)`          | Despawn title screen UI    |
//! | `welcome_input_system`    | `Update / in Welcome`      | Any key/click → `Playing`  |
//! | `setup_game_over`         | `OnEnter(GameOver)`        | Spawn final-score overlay  |
//! | `game_over_input_system`  | `Update / in GameOver`     | Any key/click → exit       |
//! | `quit_on_escape_system`   | `Update` (all states)      | Escape → exit              |

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

mod game_over;
mod welcome;

pub use game_over::{game_over_input_system, GameOverRoot};
pub use welcome::{welcome_input_system, WelcomeRoot};

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.
///
/// Every system in [`crate::simulation::SimulationPlugin`] runs under
/// `.run_if(in_state(GameState::Playing))`, so nothing moves while a screen
/// is displayed.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen; shown on startup.
    #[default]
    Welcome,
    /// Active gameplay.
    Playing,
    /// Player has exhausted all lives; game-over overlay shown.
    GameOver,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState`, the screen UI setup/teardown, and input handlers.
///
/// This plugin must be added to the app **before** any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always registered
/// first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::Welcome), welcome::setup_welcome)
            .add_systems(OnExit(GameState::Welcome), welcome::cleanup_welcome)
            .add_systems(OnEnter(GameState::GameOver), game_over::setup_game_over)
            .add_systems(
                Update,
                (
                    welcome_input_system.run_if(in_state(GameState::Welcome)),
                    game_over_input_system.run_if(in_state(GameState::GameOver)),
                    quit_on_escape_system,
                ),
            );
    }
}

// ── Quit ──────────────────────────────────────────────────────────────────────

/// Escape quits immediately from any state.  Closing the window is handled by
/// Bevy's window plugin.
pub fn quit_on_escape_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}

/// `true` when any key (other than Escape) or mouse button went down this frame.
pub(crate) fn any_press(keys: &ButtonInput<KeyCode>, mouse: &ButtonInput<MouseButton>) -> bool {
    keys.get_just_pressed().any(|k| *k != KeyCode::Escape)
        || mouse.get_just_pressed().next().is_some()
}

// ── Colour helpers ────────────────────────────────────────────────────────────

fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
fn hint_color() -> Color {
    Color::srgb(0.45, 0.45, 0.55)
}
fn danger_color() -> Color {
    Color::srgb(1.0, 0.22, 0.22)
}

/// Spawn a fixed-height invisible spacer node.
fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

/// Spawn a single line of centred text.
fn text_line(parent: &mut ChildSpawnerCommands<'_>, text: impl Into<String>, size: f32, color: Color) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    ));
}
