//! In-level pause menu: key toggle, time freeze, cursor release, and the
//! overlay with Resume / Main Menu buttons.

mod controller;
mod host;
mod overlay;

use bevy::prelude::*;
pub use controller::{
  CursorController, CursorLock, NORMAL_TIME_SCALE, OverlayController, PAUSED_TIME_SCALE,
  PauseController, PauseHost, SceneLoader, TimeController,
};
pub use host::BevyPauseHost;
pub use overlay::{MainMenuButton, PauseOverlay, ResumeButton};

use crate::config::ConfigLoaded;
use crate::console::console_closed;
use crate::scene::AppScene;

pub struct PausePlugin;

impl Plugin for PausePlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(
        OnEnter(AppScene::Level),
        (spawn_pause_controller, overlay::spawn_pause_overlay),
      )
      .add_systems(
        OnExit(AppScene::Level),
        (despawn_pause_controller, overlay::despawn_pause_overlay),
      )
      .add_systems(
        Update,
        (
          sync_pause_config,
          poll_pause_input.run_if(console_closed),
          overlay::overlay_button_system,
        )
          .chain()
          .run_if(in_state(AppScene::Level)),
      );
  }
}

fn spawn_pause_controller(mut commands: Commands, config: Res<ConfigLoaded>) {
  debug!("Spawning pause controller (key {:?})", config.pause.key);
  commands.spawn((
    Name::new("PauseController"),
    PauseController::new(&config.pause),
  ));
}

fn despawn_pause_controller(
  mut commands: Commands,
  controllers: Query<(Entity, &PauseController)>,
) {
  for (entity, controller) in &controllers {
    if controller.is_paused() {
      debug!("Pause controller torn down while paused");
    }
    commands.entity(entity).despawn();
  }
}

/// Per-frame pause key check.
fn poll_pause_input(
  keys: Res<ButtonInput<KeyCode>>,
  mut controllers: Query<&mut PauseController>,
  mut host: BevyPauseHost,
) {
  let Ok(mut controller) = controllers.single_mut() else {
    return;
  };
  let pressed = keys.just_pressed(controller.pause_key());
  controller.poll_input(pressed, &mut host);
}

fn sync_pause_config(config: Res<ConfigLoaded>, mut controllers: Query<&mut PauseController>) {
  if !config.is_changed() {
    return;
  }
  for mut controller in &mut controllers {
    controller.reconfigure(&config.pause);
  }
}
