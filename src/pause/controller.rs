//! Pause state machine.
//!
//! The controller never touches engine globals directly. Every side effect
//! goes through a [`PauseHost`], which the game implements over Bevy
//! resources (see [`super::host::BevyPauseHost`]) and tests implement with
//! an in-memory recorder.
//!
//! States: `Running` and `Paused`.
//! - pause key while running -> paused (overlay shown, time 0, cursor free)
//! - pause key or resume while paused -> running (overlay hidden, time 1,
//!   cursor captured)
//! - return to main from either state resets time to 1 and requests the menu
//!   scene; the paused flag is left as is

use bevy::prelude::*;

use crate::config::PauseConfig;

/// Time scale applied while paused.
pub const PAUSED_TIME_SCALE: f32 = 0.0;
/// Time scale applied while running.
pub const NORMAL_TIME_SCALE: f32 = 1.0;

/// Pointer confinement requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorLock {
  /// Pointer moves freely and can leave the window.
  Free,
  /// Pointer is locked to the window.
  Locked,
}

/// Global simulation speed multiplier.
pub trait TimeController {
  fn time_scale(&self) -> f32;
  fn set_time_scale(&mut self, scale: f32);
}

pub trait CursorController {
  fn set_cursor_lock(&mut self, lock: CursorLock);
  fn set_cursor_visible(&mut self, visible: bool);
}

/// Show/hide for the pause overlay UI.
pub trait OverlayController {
  fn set_overlay_visible(&mut self, visible: bool);
}

/// Requests a scene change by identifier. Completion and failure are the
/// host's business.
pub trait SceneLoader {
  fn load_scene(&mut self, name: &str);
}

/// Everything the controller needs from the host.
pub trait PauseHost: TimeController + CursorController + OverlayController + SceneLoader {}

impl<T> PauseHost for T where T: TimeController + CursorController + OverlayController + SceneLoader {}

/// Pause state for one level. Spawned when the level starts, despawned with
/// it.
#[derive(Component, Debug, Clone)]
pub struct PauseController {
  paused: bool,
  unlock_cursor: bool,
  menu_scene: String,
  pause_key: KeyCode,
}

impl PauseController {
  pub fn new(config: &PauseConfig) -> Self {
    Self {
      paused: false,
      unlock_cursor: config.unlock_cursor,
      menu_scene: config.menu_scene.clone(),
      pause_key: config.key,
    }
  }

  pub fn is_paused(&self) -> bool {
    self.paused
  }

  pub fn menu_scene(&self) -> &str {
    &self.menu_scene
  }

  /// Configured but has no effect on pause behavior.
  pub fn unlock_cursor(&self) -> bool {
    self.unlock_cursor
  }

  pub fn pause_key(&self) -> KeyCode {
    self.pause_key
  }

  /// Takes new settings from a reloaded config. The paused flag is kept.
  pub fn reconfigure(&mut self, config: &PauseConfig) {
    self.unlock_cursor = config.unlock_cursor;
    self.menu_scene.clone_from(&config.menu_scene);
    self.pause_key = config.key;
  }

  /// Per-tick input hook. `pause_pressed` is true only on the tick the pause
  /// key went down.
  pub fn poll_input(&mut self, pause_pressed: bool, host: &mut impl PauseHost) {
    if pause_pressed {
      self.toggle_pause(host);
    }
  }

  pub fn toggle_pause(&mut self, host: &mut impl PauseHost) {
    if self.paused {
      self.resume_game(host);
      return;
    }

    self.paused = true;
    host.set_overlay_visible(true);
    host.set_time_scale(PAUSED_TIME_SCALE);
    host.set_cursor_lock(CursorLock::Free);
    host.set_cursor_visible(true);
    info!("Game paused");
  }

  /// Safe to call while already running; the writes are just repeated.
  pub fn resume_game(&mut self, host: &mut impl PauseHost) {
    self.paused = false;
    host.set_overlay_visible(false);
    host.set_time_scale(NORMAL_TIME_SCALE);
    host.set_cursor_lock(CursorLock::Locked);
    host.set_cursor_visible(false);
    info!("Game resumed");
  }

  /// Restores normal time and asks the host for the menu scene. Leaves
  /// `is_paused` untouched and does not hide the overlay; both go away when
  /// the level is torn down.
  pub fn return_to_main(&mut self, host: &mut impl PauseHost) {
    host.set_time_scale(NORMAL_TIME_SCALE);
    info!("Returning to '{}'", self.menu_scene);
    host.load_scene(&self.menu_scene);
  }
}
