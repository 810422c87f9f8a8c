mod plugin;

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use plugin::{ConfigPlugin, update_window_on_config_change};
use serde::{Deserialize, Deserializer, de};

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub pause: PauseConfig,
}

impl GameConfig {
  pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(source)
  }
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PauseConfig {
  #[serde(deserialize_with = "deserialize_key_code")]
  pub key: KeyCode,
  pub menu_scene: String,
  /// Carried through to the controller; nothing reads it yet.
  #[serde(default = "default_unlock_cursor")]
  pub unlock_cursor: bool,
}

fn default_unlock_cursor() -> bool {
  false
}

impl Default for PauseConfig {
  fn default() -> Self {
    Self {
      key: KeyCode::Escape,
      menu_scene: "MainMenu".to_string(),
      unlock_cursor: default_unlock_cursor(),
    }
  }
}

fn deserialize_key_code<'de, D>(deserializer: D) -> Result<KeyCode, D::Error>
where
  D: Deserializer<'de>,
{
  let s: String = Deserialize::deserialize(deserializer)?;
  parse_key_code(&s).ok_or_else(|| de::Error::custom(format!("unknown key name '{s}'")))
}

/// Maps a key name as written in the config file to a [`KeyCode`].
/// Accepts "Escape", "Pause", "Tab", "Backquote", "Space", "F1".."F11" and
/// single letters. F12 is reserved for the console toggle.
pub fn parse_key_code(name: &str) -> Option<KeyCode> {
  let key = match name.trim() {
    "Escape" | "Esc" => KeyCode::Escape,
    "Pause" => KeyCode::Pause,
    "Tab" => KeyCode::Tab,
    "Backquote" => KeyCode::Backquote,
    "Space" => KeyCode::Space,
    "F1" => KeyCode::F1,
    "F2" => KeyCode::F2,
    "F3" => KeyCode::F3,
    "F4" => KeyCode::F4,
    "F5" => KeyCode::F5,
    "F6" => KeyCode::F6,
    "F7" => KeyCode::F7,
    "F8" => KeyCode::F8,
    "F9" => KeyCode::F9,
    "F10" => KeyCode::F10,
    "F11" => KeyCode::F11,
    other => return parse_letter(other),
  };
  Some(key)
}

fn parse_letter(name: &str) -> Option<KeyCode> {
  let mut chars = name.chars();
  let (Some(c), None) = (chars.next(), chars.next()) else {
    return None;
  };
  const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
  ];
  let c = c.to_ascii_uppercase();
  if !c.is_ascii_uppercase() {
    return None;
  }
  Some(LETTERS[(c as u8 - b'A') as usize])
}

#[cfg(not(target_family = "wasm"))]
#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);

#[derive(Resource, Debug, Clone)]
pub struct ConfigLoaded {
  pub window: WindowConfig,
  pub pause: PauseConfig,
}

impl From<GameConfig> for ConfigLoaded {
  fn from(config: GameConfig) -> Self {
    Self {
      window: config.window,
      pause: config.pause,
    }
  }
}
