//! Pause controller commands: `pause`, `resume`, `menu`.

use bevy::prelude::*;
use bevy_console::{ConsoleCommand, reply};
use clap::Parser;

use crate::pause::{BevyPauseHost, PauseController};

const NO_LEVEL: &str = "No level loaded";

/// Toggle pause
#[derive(Parser, ConsoleCommand)]
#[command(name = "pause")]
pub struct PauseCommand;

/// Resume the game
#[derive(Parser, ConsoleCommand)]
#[command(name = "resume")]
pub struct ResumeCommand;

/// Return to the main menu
#[derive(Parser, ConsoleCommand)]
#[command(name = "menu")]
pub struct MenuCommand;

pub fn pause_command(
  mut log: ConsoleCommand<PauseCommand>,
  mut controllers: Query<&mut PauseController>,
  mut host: BevyPauseHost,
) {
  if let Some(Ok(PauseCommand)) = log.take() {
    let Ok(mut controller) = controllers.single_mut() else {
      reply!(log, "{}", NO_LEVEL);
      return;
    };
    controller.toggle_pause(&mut host);
    if controller.is_paused() {
      reply!(log, "Paused");
    } else {
      reply!(log, "Resumed");
    }
  }
}

pub fn resume_command(
  mut log: ConsoleCommand<ResumeCommand>,
  mut controllers: Query<&mut PauseController>,
  mut host: BevyPauseHost,
) {
  if let Some(Ok(ResumeCommand)) = log.take() {
    let Ok(mut controller) = controllers.single_mut() else {
      reply!(log, "{}", NO_LEVEL);
      return;
    };
    controller.resume_game(&mut host);
    reply!(log, "Resumed");
  }
}

pub fn menu_command(
  mut log: ConsoleCommand<MenuCommand>,
  mut controllers: Query<&mut PauseController>,
  mut host: BevyPauseHost,
) {
  if let Some(Ok(MenuCommand)) = log.take() {
    let Ok(mut controller) = controllers.single_mut() else {
      reply!(log, "{}", NO_LEVEL);
      return;
    };
    controller.return_to_main(&mut host);
    reply!(log, "Loading '{}'", controller.menu_scene());
  }
}
