pub mod config;
pub mod console;
pub mod core;
pub mod pause;
pub mod scene;
pub mod ui;

use bevy::prelude::*;

/// Scenes, the pause menu and shared menu widgets. Needs a
/// [`config::ConfigLoaded`] resource, normally provided by
/// [`config::ConfigPlugin`].
pub struct GamePlugin;

impl Plugin for GamePlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(ui::MenuUiPlugin)
      .add_plugins(scene::ScenePlugin)
      .add_plugins(pause::PausePlugin);
  }
}
