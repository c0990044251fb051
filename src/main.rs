use anyhow::anyhow;
use bevy::prelude::*;

mod objects;

/// Main Entry Point
///
/// validates the session constants, opens a window wide enough for the
/// play area plus the stat column and hands the frame loop to the
/// `objects::GravitySandbox` plugin. See plugins.rs in the objects
/// subdirectory
fn main() -> anyhow::Result<()> {
    let config = objects::SandboxConfig::default().validated()?;
    let size = config.window_size();

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravity Simulation".into(),
                resolution: (size.x as u32, size.y as u32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(objects::GravitySandbox::new(config))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow!("sandbox exited with code {code}")),
    }
}
