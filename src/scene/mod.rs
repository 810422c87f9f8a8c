//! Named scenes as app states, and the loader that turns scene names into
//! state transitions.

mod main_menu;

use std::collections::HashMap;

use bevy::{
  ecs::message::MessageReader,
  prelude::*,
  window::{CursorGrabMode, CursorOptions, PrimaryWindow},
};

/// Top-level scene the app is showing.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppScene {
  #[default]
  MainMenu,
  Level,
}

/// Request to switch to the scene registered under `name`.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct LoadScene {
  pub name: String,
}

impl LoadScene {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }
}

/// Scene identifiers known to the loader.
#[derive(Resource, Debug, Clone)]
pub struct SceneRegistry {
  scenes: HashMap<String, AppScene>,
}

impl Default for SceneRegistry {
  fn default() -> Self {
    let mut registry = Self {
      scenes: HashMap::new(),
    };
    registry.register("MainMenu", AppScene::MainMenu);
    registry.register("Level", AppScene::Level);
    registry
  }
}

impl SceneRegistry {
  pub fn register(&mut self, name: impl Into<String>, scene: AppScene) {
    self.scenes.insert(name.into(), scene);
  }

  pub fn resolve(&self, name: &str) -> Option<AppScene> {
    self.scenes.get(name).copied()
  }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
  fn build(&self, app: &mut App) {
    app
      .init_state::<AppScene>()
      .init_resource::<SceneRegistry>()
      .add_message::<LoadScene>()
      .add_systems(
        OnEnter(AppScene::MainMenu),
        (main_menu::spawn_main_menu, release_cursor),
      )
      .add_systems(OnExit(AppScene::MainMenu), main_menu::despawn_main_menu)
      .add_systems(OnEnter(AppScene::Level), capture_cursor)
      .add_systems(
        Update,
        main_menu::main_menu_button_system.run_if(in_state(AppScene::MainMenu)),
      )
      .add_systems(PostUpdate, apply_scene_requests);
  }
}

/// Resolves pending [`LoadScene`] requests. The last valid request in a frame
/// wins; unknown names are logged and dropped.
pub fn apply_scene_requests(
  mut requests: MessageReader<LoadScene>,
  registry: Res<SceneRegistry>,
  mut next_scene: ResMut<NextState<AppScene>>,
) {
  for request in requests.read() {
    match registry.resolve(&request.name) {
      Some(scene) => {
        info!("Loading scene '{}' ({:?})", request.name, scene);
        next_scene.set(scene);
      }
      None => warn!("Unknown scene '{}', ignoring load request", request.name),
    }
  }
}

fn capture_cursor(mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>) {
  if let Ok(mut cursor) = cursors.single_mut() {
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
  }
}

fn release_cursor(mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>) {
  if let Ok(mut cursor) = cursors.single_mut() {
    cursor.grab_mode = CursorGrabMode::None;
    cursor.visible = true;
  }
}
