use super::*;

/// Root node of the title screen; despawned on `OnExit(Welcome)`.
#[derive(Component)]
pub struct WelcomeRoot;

/// Spawn the full-screen title screen.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │                ASTEROIDS                    │
/// │    W/S thrust · A/D turn · Space fire       │
/// │                                             │
/// │          Press any key to start             │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_welcome(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            WelcomeRoot,
        ))
        .with_children(|root| {
            text_line(root, "ASTEROIDS", 64.0, title_color());
            spacer(root, 12.0);
            text_line(
                root,
                "W/S thrust  ·  A/D turn  ·  Space fire  ·  Esc quit",
                18.0,
                subtitle_color(),
            );
            spacer(root, 52.0);
            text_line(root, "Press any key to start", 22.0, hint_color());
        });
}

/// Recursively despawn all title-screen entities.
pub(super) fn cleanup_welcome(mut commands: Commands, query: Query<Entity, With<WelcomeRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Start the game on any key or mouse press.
pub fn welcome_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if any_press(&keys, &mouse) {
        next_state.set(GameState::Playing);
    }
}
