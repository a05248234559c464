use bevy::prelude::*;

pub struct NoticePlugin;

impl Plugin for NoticePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            close_notice_button.run_if(resource_exists::<SumNotice>),
        );
    }
}

/// Present while the sum notice is on screen. Other input systems check for
/// it and stand down, which is what makes the notice blocking.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumNotice {
    pub sum: u32,
}

/// Root of the overlay, so closing can despawn the whole thing.
#[derive(Component)]
pub struct SumNoticeOverlay;

#[derive(Component)]
pub struct CloseNoticeButton;

pub fn sum_message(sum: u32) -> String {
    format!("The current value of all of the dice is: {sum}")
}

/// Inserts the SumNotice resource and spawns a full-screen overlay with the
/// message and an OK button.
pub fn open_sum_notice(commands: &mut Commands, sum: u32) {
    commands.insert_resource(SumNotice { sum });

    commands
        .spawn((
            SumNoticeOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
            // Dim everything behind the notice
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(sum_message(sum)),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(Justify::Center),
            ));

            parent
                .spawn((
                    Button,
                    Node {
                        width: Val::Px(120.0),
                        height: Val::Px(50.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.3, 0.5)),
                    BorderColor::all(Color::srgb(0.4, 0.5, 0.7)),
                    CloseNoticeButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("OK"),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

/// Removes the notice resource and its overlay.
pub fn close_sum_notice(commands: &mut Commands, overlays: &Query<Entity, With<SumNoticeOverlay>>) {
    commands.remove_resource::<SumNotice>();
    for entity in overlays.iter() {
        commands.entity(entity).despawn();
    }
}

fn close_notice_button(
    mut commands: Commands,
    query: Query<&Interaction, (Changed<Interaction>, With<CloseNoticeButton>)>,
    overlays: Query<Entity, With<SumNoticeOverlay>>,
) {
    if query.iter().any(|interaction| *interaction == Interaction::Pressed) {
        close_sum_notice(&mut commands, &overlays);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_has_the_literal_sum() {
        assert_eq!(sum_message(0), "The current value of all of the dice is: 0");
        assert_eq!(sum_message(10), "The current value of all of the dice is: 10");
    }
}
