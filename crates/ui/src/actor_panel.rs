use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::actors::{Actor, ActorRegistry};

use crate::panels::{PanelId, Panels};

/// Window listing registered residents. One resident at a time can hold the
/// focus slot; focusing fails silently while another is focused, matching
/// the registry contract.
pub fn actor_panel_ui(
    mut contexts: EguiContexts,
    panels: Res<Panels>,
    mut registry: ResMut<ActorRegistry>,
    actors: Query<&Actor>,
) {
    if !panels.is_shown(PanelId::Actors) {
        return;
    }

    egui::Window::new("Residents")
        .default_open(true)
        .show(contexts.ctx_mut(), |ui| {
            let focused = registry.focused();
            ui.label(match focused {
                Some(id) => format!("Focused resident: #{id}"),
                None => "No resident focused".to_string(),
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(240.0)
                .show(ui, |ui| {
                    for id in registry.ids() {
                        let name = registry
                            .entity_of(id)
                            .and_then(|entity| actors.get(entity).ok())
                            .map(|actor| actor.name.clone())
                            .unwrap_or_else(|| format!("resident #{id}"));

                        ui.horizontal(|ui| {
                            ui.label(name);
                            if focused == Some(id) {
                                if ui.small_button("Unfocus").clicked() {
                                    registry.unfocus(id);
                                }
                            } else if ui.small_button("Focus").clicked() {
                                registry.focus(id);
                            }
                        });
                    }
                });
        });
}
