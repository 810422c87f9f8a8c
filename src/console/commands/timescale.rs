//! Time scale readout.

use bevy::prelude::*;
use bevy_console::{ConsoleCommand, reply};
use clap::Parser;

/// Print the current time scale
#[derive(Parser, ConsoleCommand)]
#[command(name = "timescale")]
pub struct TimeScaleCommand;

pub fn timescale_command(mut log: ConsoleCommand<TimeScaleCommand>, time: Res<Time<Virtual>>) {
  if let Some(Ok(TimeScaleCommand)) = log.take() {
    reply!(log, "Time scale: {:.2}", time.relative_speed());
  }
}
