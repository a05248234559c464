// actions.rs - The five things a user can do, as events with observers.
//
// Buttons and die clicks never touch the tray directly. They trigger one of
// these events and the matching observer does the work:
//
//   GenerateDie   -> sample a value, append a die, spawn its view
//   RollAllDice   -> reroll every die in order
//   SumDice       -> total the faces and open the blocking notice
//   RollDie       -> reroll one die
//   DismissDie    -> drop one die and despawn its view
//
// Because the handlers are plain observers, tests can trigger the events on a
// headless App without any window or mouse.

use bevy::prelude::*;

use crate::{
    config::TrayConfig,
    die::{DiceRng, DieId},
    die_view::{spawn_die_view, DiceArea, DieView},
    notice::{open_sum_notice, SumNotice},
    tray::DiceTray,
};

pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DiceTray>()
            .add_observer(on_generate_die)
            .add_observer(on_roll_all_dice)
            .add_observer(on_sum_dice)
            .add_observer(on_roll_die)
            .add_observer(on_dismiss_die);
    }
}

#[derive(Event, Debug, Clone, Copy)]
pub struct GenerateDie;

#[derive(Event, Debug, Clone, Copy)]
pub struct RollAllDice;

#[derive(Event, Debug, Clone, Copy)]
pub struct SumDice;

#[derive(Event, Debug, Clone, Copy)]
pub struct RollDie {
    pub die: DieId,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct DismissDie {
    pub die: DieId,
}

fn on_generate_die(
    _event: On<GenerateDie>,
    mut commands: Commands,
    mut tray: ResMut<DiceTray>,
    mut rng: ResMut<DiceRng>,
    config: Res<TrayConfig>,
    area: Query<Entity, With<DiceArea>>,
) {
    let die = tray.generate(&mut rng.0);
    let view = spawn_die_view(&mut commands, die, &config);

    // No DiceArea (e.g. headless tests) just leaves the view at the root.
    if let Ok(area) = area.single() {
        commands.entity(area).add_child(view);
    }

    debug!(?die, count = tray.len(), "generated die");
}

fn on_roll_all_dice(_event: On<RollAllDice>, mut tray: ResMut<DiceTray>, mut rng: ResMut<DiceRng>) {
    // Skip the mutable deref on an empty tray so change detection stays quiet.
    if tray.is_empty() {
        return;
    }
    let rolled = tray.roll_all(&mut rng.0);
    debug!(rolled, "rolled all dice");
}

fn on_roll_die(event: On<RollDie>, mut tray: ResMut<DiceTray>, mut rng: ResMut<DiceRng>) {
    match tray.roll(event.die, &mut rng.0) {
        Some(value) => debug!(die = ?event.die, %value, "rolled die"),
        None => debug!(die = ?event.die, "roll for a die that's already gone"),
    }
}

fn on_dismiss_die(
    event: On<DismissDie>,
    mut commands: Commands,
    mut tray: ResMut<DiceTray>,
    views: Query<(Entity, &DieView)>,
) {
    if tray.dismiss(event.die).is_none() {
        debug!(die = ?event.die, "dismiss for a die that's already gone");
        return;
    }

    for (entity, view) in views.iter() {
        if view.0 == event.die {
            commands.entity(entity).despawn();
        }
    }
    debug!(die = ?event.die, count = tray.len(), "dismissed die");
}

fn on_sum_dice(
    _event: On<SumDice>,
    mut commands: Commands,
    tray: Res<DiceTray>,
    open_notice: Option<Res<SumNotice>>,
) {
    // The notice is blocking: ignore further sum requests until it's closed.
    if open_notice.is_some() {
        return;
    }
    let sum = tray.sum();
    info!(sum, dice = tray.len(), "summed dice");
    open_sum_notice(&mut commands, sum);
}
