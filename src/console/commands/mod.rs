//! Console commands.

mod pause;
mod timescale;

pub use pause::{
  MenuCommand, PauseCommand, ResumeCommand, menu_command, pause_command, resume_command,
};
pub use timescale::{TimeScaleCommand, timescale_command};
