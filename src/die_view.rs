// die_view.rs - The on-screen half of a die.
//
// Each die in the tray gets one Button entity with a DieView pointing back at
// its DieId. The button's Text is the only visible side effect of the die's
// state, and sync_die_faces keeps it in step with the tray.
//
// Interactions:
//   - press          -> RollDie
//   - second press on the same die within double_click_secs -> DismissDie

use bevy::prelude::*;

use crate::{
    actions::{DismissDie, RollDie},
    config::TrayConfig,
    die::{Die, DieId},
    notice::SumNotice,
    tray::DiceTray,
};

pub struct DieViewPlugin;

impl Plugin for DieViewPlugin {
    fn build(&self, app: &mut App) {
        // Faces sync in PostUpdate so rolls from any Update system (die
        // clicks or the "roll" control) show up the same frame.
        app.init_resource::<ClickTracker>()
            .add_systems(
                Update,
                die_click_system.run_if(not(resource_exists::<SumNotice>)),
            )
            .add_systems(
                PostUpdate,
                sync_die_faces.run_if(resource_changed::<DiceTray>),
            );
    }
}

/// Links a UI entity to the die it displays.
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq)]
pub struct DieView(pub DieId);

/// Marker for the flex container dice are spawned into.
#[derive(Component)]
pub struct DiceArea;

const DIE_COLOR: Color = Color::srgb(0.95, 0.95, 0.9);
const DIE_BORDER: Color = Color::srgb(0.2, 0.2, 0.2);

/// Spawns the visual for `die` and returns its entity.
/// The caller decides where it goes (normally the DiceArea).
pub fn spawn_die_view(commands: &mut Commands, die: Die, config: &TrayConfig) -> Entity {
    commands
        .spawn((
            DieView(die.id),
            Button,
            Node {
                width: Val::Px(config.die_size_px),
                height: Val::Px(config.die_size_px),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(DIE_COLOR),
            BorderColor::all(DIE_BORDER),
            Text::new(die.value.to_string()),
            TextFont {
                font_size: config.die_size_px * 0.5,
                ..default()
            },
            TextColor(Color::BLACK),
            TextLayout::new_with_justify(Justify::Center),
        ))
        .id()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
}

/// Remembers the last press so the next one can be classified.
#[derive(Resource, Default, Debug)]
pub struct ClickTracker {
    last: Option<(DieId, f64)>,
}

impl ClickTracker {
    /// Records a press on `die` at time `now` (seconds).
    ///
    /// A press counts as a double click when the previous press was on the
    /// same die less than `window` seconds ago. A double click consumes both
    /// presses, so a third quick press starts over as a single.
    pub fn register(&mut self, die: DieId, now: f64, window: f64) -> ClickKind {
        match self.last {
            Some((last_die, at)) if last_die == die && now - at < window => {
                self.last = None;
                ClickKind::Double
            }
            _ => {
                self.last = Some((die, now));
                ClickKind::Single
            }
        }
    }
}

fn die_click_system(
    mut commands: Commands,
    query: Query<(&Interaction, &DieView), Changed<Interaction>>,
    time: Res<Time>,
    config: Res<TrayConfig>,
    mut tracker: ResMut<ClickTracker>,
) {
    for (interaction, view) in query.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }

        // Same as the browser: every click rolls, and the second click of
        // a double click also removes the die.
        commands.trigger(RollDie { die: view.0 });

        let now = time.elapsed_secs_f64();
        if tracker.register(view.0, now, config.double_click_secs) == ClickKind::Double {
            commands.trigger(DismissDie { die: view.0 });
        }
    }
}

/// Rewrites the text of every view whose die changed value.
pub fn sync_die_faces(tray: Res<DiceTray>, mut views: Query<(&DieView, &mut Text)>) {
    for (view, mut text) in views.iter_mut() {
        let Some(die) = tray.get(view.0) else {
            continue;
        };
        let face = die.value.to_string();
        if text.0 != face {
            text.0 = face;
        }
    }
}
