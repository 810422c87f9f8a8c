use bevy::{
  prelude::*,
  window::{PresentMode, WindowResolution},
};
use pause_menu::{GamePlugin, config, console, core};

fn main() {
  // WASM: set up panic hook for better error messages
  #[cfg(target_family = "wasm")]
  console_error_panic_hook::set_once();

  // WASM: embed config at compile time (no filesystem access)
  #[cfg(target_family = "wasm")]
  let config_str = include_str!("../assets/config/game.config.toml");
  #[cfg(not(target_family = "wasm"))]
  let config_str =
    std::fs::read_to_string("assets/config/game.config.toml").expect("Failed to read config file");

  let config = config::GameConfig::from_toml(&config_str).expect("Failed to parse config");

  App::new()
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        resolution: WindowResolution::new(config.window.width, config.window.height),
        title: config.window.title.clone(),
        present_mode: PresentMode::AutoVsync,
        // WASM: target canvas element
        #[cfg(target_family = "wasm")]
        canvas: Some("#bevy".to_string()),
        #[cfg(target_family = "wasm")]
        fit_canvas_to_parent: true,
        ..default()
      }),
      ..default()
    }))
    .add_plugins(config::ConfigPlugin)
    .add_plugins(core::CorePlugin)
    .add_plugins(GamePlugin)
    .add_plugins(console::ConsolePlugins)
    .run();
}
