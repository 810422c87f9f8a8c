use bevy::{
  ecs::{message::MessageWriter, system::SystemParam},
  prelude::*,
  window::{CursorGrabMode, CursorOptions, PrimaryWindow},
};

use super::controller::{
  CursorController, CursorLock, OverlayController, SceneLoader, TimeController,
};
use super::overlay::PauseOverlay;
use crate::scene::LoadScene;

/// [`super::PauseHost`] backed by the running Bevy app.
///
/// - time scale is the relative speed of `Time<Virtual>`, so `Update` and
///   `FixedUpdate` both stop at 0
/// - cursor state lives on the primary window's `CursorOptions`
/// - the overlay is every entity tagged [`PauseOverlay`]
/// - scene loads go out as [`LoadScene`] messages
#[derive(SystemParam)]
pub struct BevyPauseHost<'w, 's> {
  time: ResMut<'w, Time<Virtual>>,
  cursors: Query<'w, 's, &'static mut CursorOptions, With<PrimaryWindow>>,
  overlays: Query<'w, 's, &'static mut Visibility, With<PauseOverlay>>,
  scene_requests: MessageWriter<'w, LoadScene>,
}

impl TimeController for BevyPauseHost<'_, '_> {
  fn time_scale(&self) -> f32 {
    self.time.relative_speed()
  }

  fn set_time_scale(&mut self, scale: f32) {
    self.time.set_relative_speed(scale);
  }
}

impl CursorController for BevyPauseHost<'_, '_> {
  fn set_cursor_lock(&mut self, lock: CursorLock) {
    let Ok(mut cursor) = self.cursors.single_mut() else {
      return;
    };
    cursor.grab_mode = match lock {
      CursorLock::Free => CursorGrabMode::None,
      CursorLock::Locked => CursorGrabMode::Locked,
    };
  }

  fn set_cursor_visible(&mut self, visible: bool) {
    let Ok(mut cursor) = self.cursors.single_mut() else {
      return;
    };
    cursor.visible = visible;
  }
}

impl OverlayController for BevyPauseHost<'_, '_> {
  fn set_overlay_visible(&mut self, visible: bool) {
    for mut visibility in &mut self.overlays {
      *visibility = if visible {
        Visibility::Visible
      } else {
        Visibility::Hidden
      };
    }
  }
}

impl SceneLoader for BevyPauseHost<'_, '_> {
  fn load_scene(&mut self, name: &str) {
    self.scene_requests.write(LoadScene::new(name));
  }
}
