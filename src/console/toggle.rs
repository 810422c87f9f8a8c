//! `/` opens and closes the console, Escape only closes it.
//!
//! bevy_console owns the open/close logic (including input focus), so both
//! keys are forwarded to it as a synthetic press of [`CONSOLE_KEY`], which
//! is the only key it listens to.

use bevy::ecs::message::MessageWriter;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use bevy_console::ConsoleOpen;
use bevy_egui::{EguiContexts, egui};

pub const CONSOLE_KEY: KeyCode = KeyCode::F12;

pub fn handle_console_toggle(
  keys: Res<ButtonInput<KeyCode>>,
  console_open: Res<ConsoleOpen>,
  mut contexts: EguiContexts,
  mut keyboard_events: MessageWriter<KeyboardInput>,
) {
  let consumed = if keys.just_pressed(KeyCode::Escape) && console_open.open {
    egui::Key::Escape
  } else if keys.just_pressed(KeyCode::Slash) {
    egui::Key::Slash
  } else {
    return;
  };

  // Keep the key out of the console's text input
  if console_open.open {
    if let Ok(ctx) = contexts.ctx_mut() {
      ctx.input_mut(|i| {
        i.consume_key(egui::Modifiers::NONE, consumed);
      });
    }
  }

  keyboard_events.write(KeyboardInput {
    key_code: CONSOLE_KEY,
    logical_key: Key::F12,
    state: ButtonState::Pressed,
    text: None,
    repeat: false,
    window: Entity::PLACEHOLDER,
  });
}
