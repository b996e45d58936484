use crate::config::GameConfig;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands) {
    // Default scale maps one world unit to one logical pixel, origin at centre.
    commands.spawn(Camera2d);
    info!("[SETUP] Camera spawned");
}

/// Match the primary window to the configured play-area size.
///
/// The window is created from compiled defaults before `assets/game.toml` is
/// read, so an override only takes effect here.
pub fn apply_window_size_system(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    config: Res<GameConfig>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    if window.resolution.width() != config.screen_width
        || window.resolution.height() != config.screen_height
    {
        window
            .resolution
            .set(config.screen_width, config.screen_height);
        info!(
            "[SETUP] Window resized to {}x{}",
            config.screen_width, config.screen_height
        );
    }
}
