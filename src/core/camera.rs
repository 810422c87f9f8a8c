use bevy::prelude::*;

/// Marker component for the game camera
#[derive(Component)]
pub struct GameCamera;

/// Single 2D camera shared by the menu and level UI
pub fn setup_camera(mut commands: Commands) {
  commands.spawn((
    GameCamera,
    Camera2d,
    Camera {
      order: 0,
      clear_color: ClearColorConfig::Custom(Color::BLACK),
      ..default()
    },
  ));
}
