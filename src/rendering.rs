//! Rendering: HUD text, gizmo outlines for asteroids and shots, and the
//! filled-mesh helper shared with the ship.
//!
//! ## Layer Model
//!
//! | Layer            | Technology | Visible in            |
//! |------------------|------------|-----------------------|
//! | Asteroid outline | Gizmos     | `Playing`, `GameOver` |
//! | Shot outline     | Gizmos     | `Playing`, `GameOver` |
//! | Ship fill        | `Mesh2d`   | while the ship exists |
//! | Ship outline     | Gizmos     | while the ship exists |
//! | Score/lives HUD  | Bevy UI    | `Playing`, `GameOver` |
//!
//! ## System Responsibilities
//!
//! | System                            | Schedule           | Purpose                         |
//! |-----------------------------------|--------------------|---------------------------------|
//! | `setup_camera`                    | Startup            | Spawn the 2D camera             |
//! | `setup_hud`                       | `OnEnter(Playing)` | Spawn score and lives text      |
//! | `hud_display_system`              | Update             | Refresh HUD text                |
//! | `attach_player_ship_mesh_system`  | Update             | Give a new ship its fill mesh   |
//! | `player_gizmo_system`             | Update             | Ship outline, invincible blink  |
//! | `gizmo_rendering_system`          | Update             | Asteroid and shot circles       |
//!
//! Update systems run after [`SimulationSet`] so each frame shows the state
//! the simulation just produced.

use crate::asteroid::Asteroid;
use crate::config::GameConfig;
use crate::geometry::CircleShape;
use crate::graphics::{apply_window_size_system, setup_camera};
use crate::menu::GameState;
use crate::player::{attach_player_ship_mesh_system, player_gizmo_system, PlayerLives, PlayerScore};
use crate::shot::Shot;
use crate::simulation::SimulationSet;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};

/// Marker for the score text node.
#[derive(Component)]
pub struct HudScoreDisplay;

/// Marker for the lives / respawn countdown text node.
#[derive(Component)]
pub struct HudLivesDisplay;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (setup_camera, apply_window_size_system).after(crate::config::load_game_config),
        )
        .add_systems(OnEnter(GameState::Playing), setup_hud)
        .add_systems(
            Update,
            (
                attach_player_ship_mesh_system,
                player_gizmo_system,
                gizmo_rendering_system,
                hud_display_system,
            )
                .after(SimulationSet)
                .run_if(not(in_state(GameState::Welcome))),
        );
    }
}

// ── Mesh helper ───────────────────────────────────────────────────────────────

/// Build a flat `Mesh` from a convex polygon using a triangle fan from
/// vertex 0.
pub fn filled_polygon_mesh(vertices: &[Vec2]) -> Mesh {
    let n = vertices.len();
    debug_assert!(n >= 3, "polygon must have ≥ 3 vertices");

    let positions: Vec<[f32; 3]> = vertices.iter().map(|v| [v.x, v.y, 0.0]).collect();
    let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; n];
    let uvs: Vec<[f32; 2]> = vertices
        .iter()
        .map(|v| [(v.x / 100.0) + 0.5, (v.y / 100.0) + 0.5])
        .collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(fan_indices(n)));
    mesh
}

/// Triangle-fan index list for an `n`-gon.
fn fan_indices(n: usize) -> Vec<u32> {
    let mut indices: Vec<u32> = Vec::with_capacity(n.saturating_sub(2) * 3);
    for i in 1..(n.max(2) as u32 - 1) {
        indices.extend_from_slice(&[0, i, i + 1]);
    }
    indices
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn hud_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}

/// Spawn the score (top-left) and lives (top-right) text.
///
/// Runs on every entry to `Playing`; there is only one game per run, so the
/// nodes are never duplicated.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>) {
    let font = TextFont {
        font_size: config.hud_font_size,
        ..default()
    };
    commands.spawn((
        Text::new("Score: 0"),
        font.clone(),
        TextColor(hud_color()),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        HudScoreDisplay,
    ));
    commands.spawn((
        Text::new(lives_label(&PlayerLives::new(config.player_lives))),
        font,
        TextColor(hud_color()),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        HudLivesDisplay,
    ));
}

/// Text shown in the lives slot.
pub fn lives_label(lives: &PlayerLives) -> String {
    match lives.respawn_timer {
        Some(t) => format!("Lives: {}  (respawn in {:.1}s)", lives.remaining, t.max(0.0)),
        None => format!("Lives: {}", lives.remaining),
    }
}

/// Refresh HUD text when score or lives change.
pub fn hud_display_system(
    score: Res<PlayerScore>,
    lives: Res<PlayerLives>,
    mut score_text: Query<&mut Text, (With<HudScoreDisplay>, Without<HudLivesDisplay>)>,
    mut lives_text: Query<&mut Text, (With<HudLivesDisplay>, Without<HudScoreDisplay>)>,
) {
    if score.is_changed() {
        for mut text in score_text.iter_mut() {
            *text = Text::new(format!("Score: {}", score.points));
        }
    }
    if lives.is_changed() {
        for mut text in lives_text.iter_mut() {
            *text = Text::new(lives_label(&lives));
        }
    }
}

// ── Gizmos ────────────────────────────────────────────────────────────────────

/// White outline circles for asteroids, small filled-looking circles for shots.
pub fn gizmo_rendering_system(
    mut gizmos: Gizmos,
    asteroids: Query<(&Transform, &CircleShape), With<Asteroid>>,
    shots: Query<(&Transform, &CircleShape), With<Shot>>,
) {
    for (transform, shape) in asteroids.iter() {
        gizmos.circle_2d(transform.translation.truncate(), shape.radius, Color::WHITE);
    }
    for (transform, shape) in shots.iter() {
        gizmos.circle_2d(
            transform.translation.truncate(),
            shape.radius,
            Color::srgb(1.0, 0.9, 0.4),
        );
    }
}
