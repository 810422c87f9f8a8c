//! Developer console with pause, resume and return-to-menu commands.

pub mod commands;
mod toggle;

use bevy::prelude::*;
use bevy_console::{AddConsoleCommand, ConsoleConfiguration, ConsoleOpen, ConsolePlugin};
use commands::{
  MenuCommand, PauseCommand, ResumeCommand, TimeScaleCommand, menu_command, pause_command,
  resume_command, timescale_command,
};
pub use toggle::CONSOLE_KEY;

/// Run condition: true unless the console is open. Also true when no
/// console is installed.
pub fn console_closed(console: Option<Res<ConsoleOpen>>) -> bool {
  console.is_none_or(|console| !console.open)
}

pub struct ConsolePlugins;

impl Plugin for ConsolePlugins {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(ConsolePlugin)
      .insert_resource(ConsoleConfiguration {
        keys: vec![CONSOLE_KEY],
        ..default()
      })
      .add_console_command::<PauseCommand, _>(pause_command)
      .add_console_command::<ResumeCommand, _>(resume_command)
      .add_console_command::<MenuCommand, _>(menu_command)
      .add_console_command::<TimeScaleCommand, _>(timescale_command)
      .add_systems(Update, toggle::handle_console_toggle);
  }
}
