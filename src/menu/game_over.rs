use super::*;
use crate::player::PlayerScore;

/// Root node of the game-over overlay.
#[derive(Component)]
pub struct GameOverRoot;

/// Spawn the game-over overlay centred over the frozen field.
///
/// Shows the final score with a per-tier breakdown and the exit prompt.
pub(super) fn setup_game_over(mut commands: Commands, score: Res<PlayerScore>) {
    info!("Game over: final score {}", score.points);
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.82)),
            ZIndex(300),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.06, 0.02, 0.02)),
                    BorderColor::all(Color::srgb(0.55, 0.10, 0.10)),
                ))
                .with_children(|card| {
                    text_line(card, "GAME OVER", 46.0, danger_color());
                    spacer(card, 4.0);
                    text_line(
                        card,
                        format!("Score: {}", score.points),
                        24.0,
                        title_color(),
                    );
                    text_line(
                        card,
                        format!(
                            "{} large · {} medium · {} small",
                            score.large, score.medium, score.small
                        ),
                        16.0,
                        subtitle_color(),
                    );
                    spacer(card, 8.0);
                    text_line(card, "Press any key to exit", 14.0, hint_color());
                });
        });
}

/// Exit the app on any key or mouse press.
pub fn game_over_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut exit: MessageWriter<AppExit>,
) {
    if any_press(&keys, &mouse) {
        exit.write(AppExit::Success);
    }
}
