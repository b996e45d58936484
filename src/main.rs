use asteroids::config::{self, GameConfig};
use asteroids::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use asteroids::menu::MenuPlugin;
use asteroids::rendering::RenderingPlugin;
use asteroids::simulation::SimulationPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Asteroids".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
                // Vsync paces the loop at the display rate (60 Hz on most panels,
                // more on high-refresh ones); the simulation scales by dt.
                present_mode: PresentMode::AutoVsync,
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Compiled defaults; load_game_config overwrites them from
        // assets/game.toml (if present) in the Startup schedule.
        .insert_resource(GameConfig::default())
        .add_systems(Startup, config::load_game_config)
        // MenuPlugin registers GameState, so it goes first.
        .add_plugins((MenuPlugin, SimulationPlugin, RenderingPlugin))
        .run();
}
