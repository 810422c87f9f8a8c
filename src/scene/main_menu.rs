use bevy::{app::AppExit, ecs::message::MessageWriter, prelude::*};

use super::LoadScene;
use crate::ui::spawn_button;

#[derive(Component)]
pub struct MainMenuRoot;

#[derive(Component)]
pub struct PlayButton;

#[derive(Component)]
pub struct QuitButton;

/// Scene the Play button loads.
const LEVEL_SCENE: &str = "Level";

pub fn spawn_main_menu(mut commands: Commands) {
  commands
    .spawn((
      MainMenuRoot,
      Name::new("MainMenu"),
      Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(14.0),
        ..default()
      },
      BackgroundColor(Color::BLACK),
    ))
    .with_children(|root| {
      root.spawn((
        Text::new("MAIN MENU"),
        TextFont {
          font_size: 56.0,
          ..default()
        },
        TextColor(Color::srgb(0.95, 0.88, 0.45)),
      ));
      spawn_button(root, "PLAY", PlayButton);
      spawn_button(root, "QUIT", QuitButton);
    });
}

pub fn despawn_main_menu(mut commands: Commands, roots: Query<Entity, With<MainMenuRoot>>) {
  for entity in &roots {
    commands.entity(entity).despawn();
  }
}

pub fn main_menu_button_system(
  play: Query<&Interaction, (Changed<Interaction>, With<PlayButton>)>,
  quit: Query<&Interaction, (Changed<Interaction>, With<QuitButton>)>,
  mut scene_requests: MessageWriter<LoadScene>,
  mut exit: MessageWriter<AppExit>,
) {
  if play.iter().any(|i| *i == Interaction::Pressed) {
    scene_requests.write(LoadScene::new(LEVEL_SCENE));
  } else if quit.iter().any(|i| *i == Interaction::Pressed) {
    info!("Quit requested from main menu");
    exit.write(AppExit::Success);
  }
}
