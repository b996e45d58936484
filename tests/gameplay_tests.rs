//! Headless end-to-end tests for the gameplay pipeline.
//!
//! The app runs [`MenuPlugin`] and [`SimulationPlugin`] on [`MinimalPlugins`]
//! with a fixed frame step (1/60 s unless a test says otherwise) and starts
//! directly in `Playing`.  The edge
//! spawner is pushed far into the future so only hand-placed asteroids exist.

use asteroids::asteroid::{asteroid_bundle, Asteroid, AsteroidSpawn};
use asteroids::config::GameConfig;
use asteroids::geometry::{CircleShape, Velocity};
use asteroids::menu::{GameState, MenuPlugin};
use asteroids::player::{Invincibility, Player, PlayerLives, PlayerScore};
use asteroids::shot::{shot_bundle, Shot};
use asteroids::simulation::SimulationPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

const FRAME: f32 = 1.0 / 60.0;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn quiet_config() -> GameConfig {
    GameConfig {
        asteroid_spawn_interval: 1.0e6,
        ..GameConfig::default()
    }
}

/// Build a headless game already in `Playing`, with the opening ship spawned.
fn gameplay_app(config: GameConfig) -> App {
    gameplay_app_with_step(config, FRAME)
}

/// Same as [`gameplay_app`] with a custom frame step.
fn gameplay_app_with_step(config: GameConfig, step: f32) -> App {
    let mut app = headless_app(config, step);
    app.insert_state(GameState::Playing);
    app.add_plugins((MenuPlugin, SimulationPlugin));
    app.update(); // OnEnter(Playing): reset resources, spawn ship
    app
}

fn headless_app(config: GameConfig, step: f32) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        step,
    )));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.insert_resource(config);
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

fn ship(app: &mut App) -> (Transform, Vec2) {
    let world = app.world_mut();
    world
        .query_filtered::<(&Transform, &Velocity), With<Player>>()
        .single(world)
        .map(|(transform, velocity)| (*transform, velocity.0))
        .unwrap()
}

/// Signed angle (radians, counter-clockwise positive) from straight up to the
/// ship's nose.
fn heading(transform: &Transform) -> f32 {
    Vec2::Y.angle_to(transform.rotation.mul_vec3(Vec3::Y).truncate())
}

fn spawn_rock(app: &mut App, position: Vec2, velocity: Vec2, radius: f32) -> Entity {
    app.world_mut()
        .spawn(asteroid_bundle(AsteroidSpawn {
            position,
            velocity,
            radius,
        }))
        .id()
}

fn player_entity(app: &mut App) -> Option<Entity> {
    let world = app.world_mut();
    world.query_filtered::<Entity, With<Player>>().iter(world).next()
}

fn asteroids(app: &mut App) -> Vec<(Vec2, f32)> {
    let world = app.world_mut();
    world
        .query_filtered::<(&Transform, &CircleShape), With<Asteroid>>()
        .iter(world)
        .map(|(t, s)| (t.translation.truncate(), s.radius))
        .collect()
}

fn shot_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<(), With<Shot>>().iter(world).count()
}

fn lives(app: &App) -> PlayerLives {
    app.world().resource::<PlayerLives>().clone()
}

fn state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

// ── Start of game ─────────────────────────────────────────────────────────────

#[test]
fn game_starts_with_ship_at_centre_and_full_lives() {
    let mut app = gameplay_app(quiet_config());

    let player = player_entity(&mut app).expect("ship must exist");
    let transform = app.world().get::<Transform>(player).unwrap();
    assert_eq!(transform.translation, Vec3::ZERO);
    assert_eq!(lives(&app).remaining, 3);
    assert_eq!(app.world().resource::<PlayerScore>().points, 0);
    assert!(asteroids(&mut app).is_empty());
}

// ── Ship ↔ asteroid ──────────────────────────────────────────────────────────

#[test]
fn touching_an_asteroid_costs_a_life_and_starts_respawn() {
    let config = quiet_config();
    let delay = config.respawn_delay;
    let mut app = gameplay_app(config);

    spawn_rock(&mut app, Vec2::ZERO, Vec2::ZERO, 40.0);
    app.update();

    let lives = lives(&app);
    assert_eq!(lives.remaining, 2);
    assert_eq!(lives.respawn_timer, Some(delay));
    assert!(player_entity(&mut app).is_none(), "ship must be removed");
    assert_eq!(asteroids(&mut app).len(), 1, "asteroid survives the crash");
    assert_eq!(state(&app), GameState::Playing);
}

#[test]
fn ship_respawns_invincible_at_centre_after_delay() {
    let config = GameConfig {
        respawn_delay: 0.5,
        ..quiet_config()
    };
    let mut app = gameplay_app(config);

    let rock = spawn_rock(&mut app, Vec2::ZERO, Vec2::ZERO, 40.0);
    app.update();
    assert!(player_entity(&mut app).is_none());
    app.world_mut().despawn(rock);

    // Still waiting just short of the delay.
    for _ in 0..20 {
        app.update();
    }
    assert!(player_entity(&mut app).is_none());

    let mut respawned = None;
    for _ in 0..20 {
        app.update();
        respawned = player_entity(&mut app);
        if respawned.is_some() {
            break;
        }
    }
    let player = respawned.expect("ship must respawn");
    let world = app.world();
    assert_eq!(world.get::<Transform>(player).unwrap().translation, Vec3::ZERO);
    // The full window is still ahead on the frame the ship reappears.
    assert_eq!(
        world.get::<Invincibility>(player).unwrap().timer,
        world.resource::<GameConfig>().respawn_invincibility
    );
    assert_eq!(lives(&app).remaining, 2);
    assert_eq!(lives(&app).respawn_timer, None);
}

#[test]
fn invincibility_blocks_hits_until_it_expires() {
    let mut app = gameplay_app(quiet_config());
    let player = player_entity(&mut app).unwrap();
    app.world_mut()
        .entity_mut(player)
        .insert(Invincibility { timer: 0.1 });

    spawn_rock(&mut app, Vec2::ZERO, Vec2::ZERO, 40.0);
    app.update();
    assert_eq!(lives(&app).remaining, 3, "invincible ship must not be hit");
    assert!(player_entity(&mut app).is_some());

    for _ in 0..10 {
        app.update();
    }
    assert_eq!(lives(&app).remaining, 2, "hit lands once invincibility ends");
    assert!(player_entity(&mut app).is_none());
}

#[test]
fn losing_the_last_life_ends_the_game_and_freezes_the_field() {
    let mut app = gameplay_app(quiet_config());
    app.world_mut().resource_mut::<PlayerLives>().remaining = 1;

    let rock = spawn_rock(&mut app, Vec2::ZERO, Vec2::new(30.0, 0.0), 40.0);
    app.update(); // hit, GameOver requested
    app.update(); // transition applied

    assert_eq!(state(&app), GameState::GameOver);
    assert_eq!(lives(&app).remaining, 0);
    assert_eq!(lives(&app).respawn_timer, None);

    let before = app.world().get::<Transform>(rock).unwrap().translation;
    for _ in 0..5 {
        app.update();
    }
    let after = app.world().get::<Transform>(rock).unwrap().translation;
    assert_eq!(before, after, "nothing moves after game over");
    assert!(player_entity(&mut app).is_none());
}

// ── Shot ↔ asteroid ──────────────────────────────────────────────────────────

#[test]
fn shooting_a_large_asteroid_splits_it_and_scores() {
    let mut app = gameplay_app(quiet_config());

    let parent = Vec2::new(300.0, 0.0);
    spawn_rock(&mut app, parent, Vec2::ZERO, 60.0);
    app.world_mut()
        .spawn(shot_bundle(parent, Vec2::ZERO, 5.0));
    app.update();

    assert_eq!(shot_count(&mut app), 0, "shot is consumed");
    let rocks = asteroids(&mut app);
    assert_eq!(rocks.len(), 2, "large asteroid splits in two");
    for (position, radius) in rocks {
        assert_eq!(position, parent);
        assert_eq!(radius, 40.0);
    }
    let score = *app.world().resource::<PlayerScore>();
    assert_eq!(score.points, 20);
    assert_eq!(score.large, 1);
}

#[test]
fn shooting_a_small_asteroid_removes_it() {
    let mut app = gameplay_app(quiet_config());

    let position = Vec2::new(-300.0, 100.0);
    spawn_rock(&mut app, position, Vec2::ZERO, 20.0);
    app.world_mut().spawn(shot_bundle(position, Vec2::ZERO, 5.0));
    app.update();

    assert!(asteroids(&mut app).is_empty());
    assert_eq!(app.world().resource::<PlayerScore>().points, 100);
}

#[test]
fn one_shot_destroys_only_one_of_two_overlapping_asteroids() {
    let mut app = gameplay_app(quiet_config());

    spawn_rock(&mut app, Vec2::new(300.0, 0.0), Vec2::ZERO, 60.0);
    spawn_rock(&mut app, Vec2::new(305.0, 0.0), Vec2::ZERO, 60.0);
    app.world_mut()
        .spawn(shot_bundle(Vec2::new(302.0, 0.0), Vec2::ZERO, 5.0));
    app.update();

    let rocks = asteroids(&mut app);
    assert_eq!(rocks.len(), 3, "one survivor plus two children");
    assert_eq!(rocks.iter().filter(|(_, r)| *r == 60.0).count(), 1);
    assert_eq!(app.world().resource::<PlayerScore>().points, 20);
}

#[test]
fn two_shots_on_one_asteroid_split_it_once() {
    let mut app = gameplay_app(quiet_config());

    let position = Vec2::new(0.0, 250.0);
    spawn_rock(&mut app, position, Vec2::ZERO, 40.0);
    app.world_mut().spawn(shot_bundle(position, Vec2::ZERO, 5.0));
    app.world_mut().spawn(shot_bundle(position, Vec2::ZERO, 5.0));
    app.update();

    assert_eq!(asteroids(&mut app).len(), 2);
    assert_eq!(shot_count(&mut app), 1, "second shot flies on");
    assert_eq!(app.world().resource::<PlayerScore>().points, 50);
}

// ── Ship handling ────────────────────────────────────────────────────────────

#[test]
fn holding_left_turns_at_the_configured_rate() {
    let config = quiet_config();
    let turn_speed = config.player_turn_speed.to_radians();
    let mut app = gameplay_app(config);

    press(&mut app, KeyCode::KeyA);
    let frames = 10;
    for _ in 0..frames {
        app.update();
    }
    let (transform, velocity) = ship(&mut app);
    let expected = turn_speed * frames as f32 * FRAME;
    assert!(
        (heading(&transform) - expected).abs() < 1e-3,
        "heading {} != {expected}",
        heading(&transform)
    );
    assert_eq!(velocity, Vec2::ZERO, "turning alone does not move the ship");

    // Right arrow turns back clockwise at the same rate.
    release(&mut app, KeyCode::KeyA);
    press(&mut app, KeyCode::ArrowRight);
    for _ in 0..frames {
        app.update();
    }
    let (transform, _) = ship(&mut app);
    assert!(heading(&transform).abs() < 1e-3);
}

#[test]
fn opposite_turn_keys_cancel_out() {
    let mut app = gameplay_app(quiet_config());
    press(&mut app, KeyCode::KeyA);
    press(&mut app, KeyCode::KeyD);
    for _ in 0..10 {
        app.update();
    }
    let (transform, _) = ship(&mut app);
    assert!(heading(&transform).abs() < 1e-6);
}

/// Hold W for `hold` seconds, then release for one frame.  Returns the speed
/// at release and the speed one frame later.
fn thrust_then_coast(step: f32, hold: f32) -> (f32, f32) {
    let mut app = gameplay_app_with_step(quiet_config(), step);
    press(&mut app, KeyCode::KeyW);
    let frames = (hold / step).round() as usize;
    for _ in 0..frames {
        app.update();
    }
    let (_, at_release) = ship(&mut app);
    assert!(at_release.x.abs() < 1e-4, "thrust is along the nose (+Y)");
    assert!(at_release.y > 0.0);

    release(&mut app, KeyCode::KeyW);
    app.update();
    let (_, coasting) = ship(&mut app);
    (at_release.length(), coasting.length())
}

#[test]
fn thrust_accelerates_and_drag_decays_speed() {
    let config = quiet_config();
    let (at_release, coasting) = thrust_then_coast(FRAME, 0.5);

    let expected = at_release * (-config.player_drag * FRAME).exp();
    assert!(
        (coasting - expected).abs() < 1e-3,
        "coasting {coasting} != {expected}"
    );
    assert!(coasting < at_release);
}

#[test]
fn thrust_is_frame_rate_independent() {
    let (slow, _) = thrust_then_coast(1.0 / 30.0, 0.5);
    let (fast, _) = thrust_then_coast(1.0 / 120.0, 0.5);
    let relative = (slow - fast).abs() / fast;
    assert!(
        relative < 0.02,
        "speed after 0.5 s differs: {slow} @30 Hz vs {fast} @120 Hz"
    );

    // Close to the continuous solution a/d · (1 − e^(−d·t)).
    let config = quiet_config();
    let (a, d) = (config.player_acceleration, config.player_drag);
    let exact = a / d * (1.0 - (-d * 0.5).exp());
    assert!((fast - exact).abs() / exact < 0.02);
}

#[test]
fn holding_reverse_thrusts_backwards() {
    let mut app = gameplay_app(quiet_config());
    press(&mut app, KeyCode::ArrowDown);
    for _ in 0..10 {
        app.update();
    }
    let (_, velocity) = ship(&mut app);
    assert!(velocity.y < 0.0);
    assert!(velocity.x.abs() < 1e-4);
}

// ── Firing and shot lifetime ─────────────────────────────────────────────────

#[test]
fn shots_leave_from_the_ship_nose() {
    let config = quiet_config();
    let (radius, speed) = (config.player_radius, config.shot_speed);
    let mut app = gameplay_app(config);

    let player = player_entity(&mut app).unwrap();
    let placed = Transform::from_xyz(100.0, -50.0, 0.0)
        .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
    app.world_mut().entity_mut(player).insert(placed);

    press(&mut app, KeyCode::Space);
    app.update();

    let (ship_transform, _) = ship(&mut app);
    let forward = ship_transform.rotation.mul_vec3(Vec3::Y).truncate();
    assert!((forward - Vec2::NEG_X).length() < 1e-5, "nose points left");

    let world = app.world_mut();
    let (shot, velocity) = world
        .query_filtered::<(&Transform, &Velocity), With<Shot>>()
        .single(world)
        .map(|(transform, velocity)| (*transform, *velocity))
        .unwrap();
    let nose = ship_transform.translation.truncate() + forward * radius;
    // The shot has already flown for the frame it was fired in.
    let expected = nose + velocity.0 * FRAME;
    assert!(
        (shot.translation.truncate() - expected).length() < 1e-3,
        "shot at {:?}, expected {expected:?}",
        shot.translation
    );
    assert!((velocity.0 - forward * speed).length() < 1e-3);
}

#[test]
fn key_that_starts_the_game_does_not_fire() {
    let mut app = headless_app(quiet_config(), FRAME);
    app.add_plugins((MenuPlugin, SimulationPlugin));
    app.update();
    assert_eq!(state(&app), GameState::Welcome);

    press(&mut app, KeyCode::Space);
    app.update(); // welcome screen requests Playing
    app.update(); // first Playing frame
    assert_eq!(state(&app), GameState::Playing);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(shot_count(&mut app), 0, "Space must be pressed again to fire");

    press(&mut app, KeyCode::Space);
    app.update();
    assert_eq!(shot_count(&mut app), 1);
}

#[test]
fn holding_fire_respects_the_cooldown() {
    let config = quiet_config();
    let cooldown = config.shot_cooldown;
    let speed = config.shot_speed;
    let mut app = gameplay_app(config);

    press(&mut app, KeyCode::Space);
    app.update();
    assert_eq!(shot_count(&mut app), 1);

    {
        let world = app.world_mut();
        let velocity = *world
            .query_filtered::<&Velocity, With<Shot>>()
            .single(world)
            .unwrap();
        assert_eq!(velocity.0, Vec2::new(0.0, speed), "fired along the nose (+Y)");
    }

    // Well inside the cooldown window: no second shot.
    let frames_inside = (cooldown / FRAME) as usize / 2;
    for _ in 0..frames_inside {
        app.update();
    }
    assert_eq!(shot_count(&mut app), 1);

    for _ in 0..frames_inside + 4 {
        app.update();
    }
    assert_eq!(shot_count(&mut app), 2);
}

#[test]
fn shots_leaving_the_screen_are_removed() {
    let mut app = gameplay_app(quiet_config());

    app.world_mut()
        .spawn(shot_bundle(Vec2::new(0.0, 340.0), Vec2::new(0.0, 500.0), 5.0));
    app.update();
    assert_eq!(shot_count(&mut app), 1);

    for _ in 0..10 {
        app.update();
    }
    assert_eq!(shot_count(&mut app), 0);
}

#[test]
fn asteroids_drift_with_their_velocity() {
    let mut app = gameplay_app(quiet_config());
    let rock = spawn_rock(&mut app, Vec2::new(-400.0, 200.0), Vec2::new(60.0, 0.0), 20.0);

    for _ in 0..60 {
        app.update();
    }
    let x = app.world().get::<Transform>(rock).unwrap().translation.x;
    assert!((x - -340.0).abs() < 0.5, "expected ~1 s of drift, got x = {x}");
}

#[test]
fn a_stalled_frame_is_clamped_to_the_max_delta() {
    let config = quiet_config();
    let max_delta = config.max_frame_delta;
    // Every frame takes a full second of wall time.
    let mut app = gameplay_app_with_step(config, 1.0);
    assert_eq!(
        app.world().resource::<Time<Virtual>>().max_delta(),
        Duration::from_secs_f32(max_delta)
    );

    let rock = spawn_rock(&mut app, Vec2::new(-400.0, 200.0), Vec2::new(100.0, 0.0), 20.0);
    app.update();
    let x = app.world().get::<Transform>(rock).unwrap().translation.x;
    assert!(
        (x - (-400.0 + 100.0 * max_delta)).abs() < 1e-3,
        "asteroid moved to x = {x}"
    );
}

// ── Edge spawner ─────────────────────────────────────────────────────────────

#[test]
fn field_spawns_large_asteroids_offscreen() {
    let config = GameConfig {
        asteroid_spawn_interval: 0.1,
        ..GameConfig::default()
    };
    let half = config.half_extents();
    let max_radius = config.asteroid_max_radius;
    let mut app = gameplay_app(config);

    for _ in 0..7 {
        app.update();
    }
    let rocks = asteroids(&mut app);
    assert!(!rocks.is_empty(), "spawner must have fired");
    for (position, radius) in rocks {
        assert_eq!(radius, max_radius);
        // Moved inward for at most a few frames since spawning.
        assert!(
            position.x.abs() > half.x || position.y.abs() > half.y,
            "spawned on screen at {position:?}"
        );
    }
}
