//! E2E tests for the pause menu running inside a headless Bevy app.
//!
//! Verifies the full path from key press / button press through the
//! controller into `Time<Virtual>`, the primary window's cursor, the overlay
//! visibility and the scene state.
//!
//! Run: cargo test --test pause_menu_e2e

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};
use bevy_console::ConsoleOpen;
use pause_menu::GamePlugin;
use pause_menu::config::{ConfigLoaded, PauseConfig, WindowConfig};
use pause_menu::pause::{MainMenuButton, PauseController, PauseOverlay, ResumeButton};
use pause_menu::scene::{AppScene, LoadScene};

fn test_config() -> ConfigLoaded {
  ConfigLoaded {
    window: WindowConfig {
      width: 640,
      height: 480,
      title: "test".to_string(),
    },
    pause: PauseConfig::default(),
  }
}

/// Headless app with a fake primary window, sitting in the main menu.
fn test_app() -> App {
  let mut app = App::new();
  app.add_plugins(MinimalPlugins);
  app.add_plugins(StatesPlugin);
  app.init_resource::<ButtonInput<KeyCode>>();
  app.insert_resource(test_config());
  app.add_plugins(GamePlugin);

  app
    .world_mut()
    .spawn((Window::default(), CursorOptions::default(), PrimaryWindow));

  app.update();
  app
}

fn enter_level(app: &mut App) {
  app
    .world_mut()
    .resource_mut::<NextState<AppScene>>()
    .set(AppScene::Level);
  app.update();
  assert_eq!(current_scene(app), AppScene::Level);
}

/// Presses a key for exactly one frame.
fn tap(app: &mut App, key: KeyCode) {
  app
    .world_mut()
    .resource_mut::<ButtonInput<KeyCode>>()
    .press(key);
  app.update();
  let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
  keys.release(key);
  keys.clear();
}

fn click<M: Component>(app: &mut App) {
  let world = app.world_mut();
  let mut buttons = world.query_filtered::<&mut Interaction, With<M>>();
  for mut interaction in buttons.iter_mut(world) {
    *interaction = Interaction::Pressed;
  }
  app.update();
}

fn current_scene(app: &App) -> AppScene {
  *app.world().resource::<State<AppScene>>().get()
}

fn controller(app: &mut App) -> Option<PauseController> {
  let world = app.world_mut();
  let mut query = world.query::<&PauseController>();
  query.iter(world).next().cloned()
}

fn time_scale(app: &App) -> f32 {
  app.world().resource::<Time<Virtual>>().relative_speed()
}

fn cursor(app: &mut App) -> (CursorGrabMode, bool) {
  let world = app.world_mut();
  let mut query = world.query_filtered::<&CursorOptions, With<PrimaryWindow>>();
  let cursor = query
    .iter(world)
    .next()
    .expect("primary window should exist");
  (cursor.grab_mode, cursor.visible)
}

fn overlay_visibility(app: &mut App) -> Vec<Visibility> {
  let world = app.world_mut();
  let mut query = world.query_filtered::<&Visibility, With<PauseOverlay>>();
  query.iter(world).copied().collect()
}

#[test]
fn entering_level_spawns_running_controller() {
  let mut app = test_app();
  assert_eq!(current_scene(&app), AppScene::MainMenu);
  assert!(controller(&mut app).is_none());

  enter_level(&mut app);

  let controller = controller(&mut app).expect("controller should be spawned");
  assert!(!controller.is_paused());
  assert_eq!(controller.menu_scene(), "MainMenu");
  assert_eq!(overlay_visibility(&mut app), vec![Visibility::Hidden]);
  assert_eq!(cursor(&mut app), (CursorGrabMode::Locked, false));
  assert_eq!(time_scale(&app), 1.0);
}

#[test]
fn pause_key_pauses_and_resumes() {
  let mut app = test_app();
  enter_level(&mut app);

  tap(&mut app, KeyCode::Escape);

  assert!(controller(&mut app).unwrap().is_paused());
  assert_eq!(time_scale(&app), 0.0);
  assert_eq!(overlay_visibility(&mut app), vec![Visibility::Visible]);
  assert_eq!(cursor(&mut app), (CursorGrabMode::None, true));

  // Idle frames leave it paused
  app.update();
  app.update();
  assert!(controller(&mut app).unwrap().is_paused());

  tap(&mut app, KeyCode::Escape);

  assert!(!controller(&mut app).unwrap().is_paused());
  assert_eq!(time_scale(&app), 1.0);
  assert_eq!(overlay_visibility(&mut app), vec![Visibility::Hidden]);
  assert_eq!(cursor(&mut app), (CursorGrabMode::Locked, false));
}

#[test]
fn pause_key_ignored_in_main_menu() {
  let mut app = test_app();

  tap(&mut app, KeyCode::Escape);

  assert_eq!(time_scale(&app), 1.0);
  assert!(controller(&mut app).is_none());
}

#[test]
fn resume_button_resumes() {
  let mut app = test_app();
  enter_level(&mut app);
  tap(&mut app, KeyCode::Escape);
  assert!(controller(&mut app).unwrap().is_paused());

  click::<ResumeButton>(&mut app);

  assert!(!controller(&mut app).unwrap().is_paused());
  assert_eq!(time_scale(&app), 1.0);
  assert_eq!(overlay_visibility(&mut app), vec![Visibility::Hidden]);
}

#[test]
fn main_menu_button_returns_to_menu() {
  let mut app = test_app();
  enter_level(&mut app);
  tap(&mut app, KeyCode::Escape);

  click::<MainMenuButton>(&mut app);

  // Same frame: time restored, flag untouched, transition still pending
  assert_eq!(time_scale(&app), 1.0);
  assert!(controller(&mut app).unwrap().is_paused());

  app.update();

  assert_eq!(current_scene(&app), AppScene::MainMenu);
  assert!(controller(&mut app).is_none());
  assert!(overlay_visibility(&mut app).is_empty());
  assert_eq!(cursor(&mut app), (CursorGrabMode::None, true));
}

#[test]
fn unknown_scene_request_is_ignored() {
  let mut app = test_app();
  enter_level(&mut app);

  app
    .world_mut()
    .resource_mut::<Messages<LoadScene>>()
    .write(LoadScene::new("Nowhere"));
  app.update();
  app.update();

  assert_eq!(current_scene(&app), AppScene::Level);
  assert!(controller(&mut app).is_some());
}

#[test]
fn reentering_level_starts_unpaused() {
  let mut app = test_app();
  enter_level(&mut app);
  tap(&mut app, KeyCode::Escape);
  click::<MainMenuButton>(&mut app);
  app.update();
  assert_eq!(current_scene(&app), AppScene::MainMenu);

  enter_level(&mut app);

  assert!(!controller(&mut app).unwrap().is_paused());
  assert_eq!(overlay_visibility(&mut app), vec![Visibility::Hidden]);
  assert_eq!(time_scale(&app), 1.0);
}

#[test]
fn pause_key_works_without_console() {
  let mut app = test_app();
  enter_level(&mut app);
  assert!(!app.world().contains_resource::<ConsoleOpen>());

  tap(&mut app, KeyCode::Escape);

  assert!(controller(&mut app).unwrap().is_paused());
  assert_eq!(time_scale(&app), 0.0);
}

#[test]
fn pause_key_ignored_while_console_open() {
  let mut app = test_app();
  enter_level(&mut app);
  app.insert_resource(ConsoleOpen { open: true });

  tap(&mut app, KeyCode::Escape);

  assert!(!controller(&mut app).unwrap().is_paused());
  assert_eq!(time_scale(&app), 1.0);
  assert_eq!(overlay_visibility(&mut app), vec![Visibility::Hidden]);

  app.world_mut().resource_mut::<ConsoleOpen>().open = false;
  tap(&mut app, KeyCode::Escape);

  assert!(controller(&mut app).unwrap().is_paused());
  assert_eq!(time_scale(&app), 0.0);
  assert_eq!(overlay_visibility(&mut app), vec![Visibility::Visible]);
}
