// lib.rs - Dice tray: generate dice, roll them one at a time or all at once,
// and add them up.
//
// Split into a library so integration tests can build a headless App from the
// same plugins main.rs uses.

pub mod actions;
pub mod config;
pub mod controls;
pub mod die;
pub mod die_view;
pub mod notice;
pub mod tray;

use bevy::{app::PluginGroupBuilder, prelude::*};

/// Everything the tray needs on top of DefaultPlugins.
///
/// Tests skip ControlsPlugin (it spawns a camera and checks for buttons) and
/// ConfigPlugin (they insert a seeded DiceRng themselves).
pub struct DiceTrayPlugins;

impl PluginGroup for DiceTrayPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(config::ConfigPlugin)
            .add(actions::ActionsPlugin)
            .add(die_view::DieViewPlugin)
            .add(notice::NoticePlugin)
            .add(controls::ControlsPlugin)
    }
}
