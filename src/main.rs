use bevy::prelude::*;
use dice_tray::DiceTrayPlugins;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.1, 0.12, 0.15)))
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Dice Tray".into(),
                    // On the web, draw into <canvas id="dice-tray"> and follow
                    // the size of its parent element. Ignored natively.
                    canvas: Some("#dice-tray".into()),
                    fit_canvas_to_parent: true,
                    ..default()
                }),
                ..default()
            }),
            DiceTrayPlugins,
        ))
        .run();
}
