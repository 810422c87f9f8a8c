//! Button widget shared by the main menu and the pause overlay.

use bevy::prelude::*;

const BUTTON_BG: Color = Color::srgb(0.12, 0.12, 0.16);
const BUTTON_BG_HOVER: Color = Color::srgb(0.22, 0.22, 0.3);
const BUTTON_BORDER: Color = Color::srgb(0.45, 0.45, 0.55);
const BUTTON_TEXT: Color = Color::srgb(0.9, 0.9, 0.95);

pub struct MenuUiPlugin;

impl Plugin for MenuUiPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Update, button_hover_system);
  }
}

/// Spawns a labelled menu button tagged with `marker`.
pub fn spawn_button(parent: &mut ChildSpawnerCommands<'_>, label: &str, marker: impl Bundle) {
  parent
    .spawn((
      Button,
      marker,
      Node {
        width: Val::Px(220.0),
        height: Val::Px(50.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        border: UiRect::all(Val::Px(2.0)),
        ..default()
      },
      BackgroundColor(BUTTON_BG),
      BorderColor::all(BUTTON_BORDER),
    ))
    .with_children(|button| {
      button.spawn((
        Text::new(label),
        TextFont {
          font_size: 18.0,
          ..default()
        },
        TextColor(BUTTON_TEXT),
      ));
    });
}

fn button_hover_system(
  mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
  for (interaction, mut background) in &mut buttons {
    background.0 = match interaction {
      Interaction::Hovered | Interaction::Pressed => BUTTON_BG_HOVER,
      Interaction::None => BUTTON_BG,
    };
  }
}
