use bevy::prelude::*;

use super::controller::PauseController;
use super::host::BevyPauseHost;
use crate::ui::spawn_button;

/// Root node of the pause overlay. Hidden until the game is paused.
#[derive(Component)]
pub struct PauseOverlay;

#[derive(Component)]
pub struct ResumeButton;

#[derive(Component)]
pub struct MainMenuButton;

const BACKDROP: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
const TITLE_COLOR: Color = Color::srgb(0.95, 0.88, 0.45);

pub fn spawn_pause_overlay(mut commands: Commands) {
  commands
    .spawn((
      PauseOverlay,
      Name::new("PauseOverlay"),
      Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(14.0),
        ..default()
      },
      BackgroundColor(BACKDROP),
      GlobalZIndex(10),
      Visibility::Hidden,
    ))
    .with_children(|root| {
      root.spawn((
        Text::new("PAUSED"),
        TextFont {
          font_size: 48.0,
          ..default()
        },
        TextColor(TITLE_COLOR),
      ));
      spawn_button(root, "RESUME", ResumeButton);
      spawn_button(root, "MAIN MENU", MainMenuButton);
    });
}

pub fn despawn_pause_overlay(mut commands: Commands, overlays: Query<Entity, With<PauseOverlay>>) {
  for entity in &overlays {
    commands.entity(entity).despawn();
  }
}

/// Resume and Main Menu buttons call straight into the controller.
pub fn overlay_button_system(
  resume: Query<&Interaction, (Changed<Interaction>, With<ResumeButton>)>,
  main_menu: Query<&Interaction, (Changed<Interaction>, With<MainMenuButton>)>,
  mut controllers: Query<&mut PauseController>,
  mut host: BevyPauseHost,
) {
  let Ok(mut controller) = controllers.single_mut() else {
    return;
  };

  if resume.iter().any(|i| *i == Interaction::Pressed) {
    controller.resume_game(&mut host);
  } else if main_menu.iter().any(|i| *i == Interaction::Pressed) {
    controller.return_to_main(&mut host);
  }
}
