use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod actor_panel;
pub mod catalog_panel;
pub mod panels;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<panels::Panels>()
            .add_systems(
                Update,
                (
                    panels::panel_keybinds,
                    catalog_panel::catalog_panel_ui,
                    actor_panel::actor_panel_ui,
                ),
            );
    }
}
