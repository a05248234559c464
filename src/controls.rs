// controls.rs - The three global trigger controls and the screen layout.
//
// Startup spawns the camera, a bar with the "generate", "roll" and "sum"
// buttons, and the DiceArea where dice show up. PostStartup then checks
// that all three controls exist; the tray can't do anything without them, so
// a missing one is fatal.

use std::fmt;

use bevy::prelude::*;
use thiserror::Error;

use crate::{
    actions::{GenerateDie, RollAllDice, SumDice},
    die_view::DiceArea,
    notice::SumNotice,
};

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_layout)
            .add_systems(PostStartup, verify_controls)
            .add_systems(
                Update,
                control_button_system.run_if(not(resource_exists::<SumNotice>)),
            );
    }
}

/// Which global action a button triggers.
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Generate,
    Roll,
    Sum,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Generate, Control::Roll, Control::Sum];

    /// Stable identifier, also used as the entity's Name.
    pub fn id(self) -> &'static str {
        match self {
            Control::Generate => "generate",
            Control::Roll => "roll",
            Control::Sum => "sum",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Generate => "Generate Die",
            Control::Roll => "Roll Dice",
            Control::Sum => "Sum Dice",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlsError {
    #[error("required control \"{0}\" is missing")]
    Missing(Control),
}

/// Returns the first control in `Control::ALL` that isn't in `present`.
pub fn find_missing_control(present: impl IntoIterator<Item = Control>) -> Option<Control> {
    let present: Vec<Control> = present.into_iter().collect();
    Control::ALL
        .into_iter()
        .find(|control| !present.contains(control))
}

fn spawn_layout(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(20.0)),
            row_gap: Val::Px(20.0),
            ..default()
        })
        .with_children(|parent| {
            // Control bar
            parent
                .spawn(Node {
                    column_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|bar| {
                    for control in Control::ALL {
                        spawn_control_button(bar, control);
                    }
                });

            parent.spawn((
                DiceArea,
                Name::new("dice"),
                Node {
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    column_gap: Val::Px(10.0),
                    row_gap: Val::Px(10.0),
                    ..default()
                },
            ));
        });
}

fn spawn_control_button(parent: &mut ChildSpawnerCommands, control: Control) {
    parent
        .spawn((
            Button,
            control,
            Name::new(control.id()),
            Node {
                padding: UiRect::axes(Val::Px(16.0), Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.15, 0.35, 0.2)),
            BorderColor::all(Color::srgb(0.3, 0.6, 0.4)),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(control.label()),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Fails the app if any of the three controls is missing.
///
/// Returning an error from a system hands it to Bevy's error handler, which
/// panics by default. There is no fallback.
pub fn verify_controls(controls: Query<&Control>) -> Result {
    if let Some(control) = find_missing_control(controls.iter().copied()) {
        error!("Cannot start: control \"{}\" not found", control);
        return Err(ControlsError::Missing(control).into());
    }
    info!("Controls ready: {:?}", Control::ALL.map(Control::id));
    Ok(())
}

/// Turns a press on one of the controls into its action event.
pub fn control_button_system(
    mut commands: Commands,
    query: Query<(&Interaction, &Control), Changed<Interaction>>,
) {
    for (interaction, control) in query.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match control {
            Control::Generate => commands.trigger(GenerateDie),
            Control::Roll => commands.trigger(RollAllDice),
            Control::Sum => commands.trigger(SumDice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn ids_are_stable() {
        assert_eq!(Control::Generate.id(), "generate");
        assert_eq!(Control::Roll.id(), "roll");
        assert_eq!(Control::Sum.id(), "sum");
    }

    #[test]
    fn nothing_missing_when_all_present() {
        assert_eq!(find_missing_control(Control::ALL), None);
    }

    #[test]
    fn reports_the_missing_one() {
        assert_eq!(
            find_missing_control([Control::Generate, Control::Sum]),
            Some(Control::Roll)
        );
        assert_eq!(find_missing_control(std::iter::empty()), Some(Control::Generate));
    }

    #[test]
    fn error_names_the_control() {
        assert_eq!(
            ControlsError::Missing(Control::Sum).to_string(),
            "required control \"sum\" is missing"
        );
    }

    #[test]
    fn verify_controls_fails_without_controls() {
        let mut world = World::new();
        let result: Result = world
            .run_system_once(verify_controls)
            .expect("verify_controls should run");
        assert!(result.is_err());
    }

    #[test]
    fn verify_controls_fails_with_one_missing() {
        let mut world = World::new();
        world.spawn(Control::Generate);
        world.spawn(Control::Sum);
        let result: Result = world
            .run_system_once(verify_controls)
            .expect("verify_controls should run");
        assert!(result.is_err());
    }

    #[test]
    fn verify_controls_passes_with_all_three() {
        let mut world = World::new();
        for control in Control::ALL {
            world.spawn(control);
        }
        let result: Result = world
            .run_system_once(verify_controls)
            .expect("verify_controls should run");
        assert!(result.is_ok());
    }
}
