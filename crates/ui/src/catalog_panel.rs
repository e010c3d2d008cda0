use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::structures::{PlacementStats, Quota, StructureCatalog};

use crate::panels::{PanelId, Panels};

fn quota_label(quota: Quota) -> String {
    match quota {
        Quota::Unlimited => "unlimited".to_string(),
        Quota::Limited(n) => n.to_string(),
    }
}

/// Window listing the structure catalog with per-entry placement counts
/// from the latest layout pass.
pub fn catalog_panel_ui(
    mut contexts: EguiContexts,
    panels: Res<Panels>,
    catalog: Res<StructureCatalog>,
    stats: Res<PlacementStats>,
) {
    if !panels.is_shown(PanelId::Catalog) {
        return;
    }

    egui::Window::new("Structure Catalog")
        .default_open(true)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            egui::Grid::new("catalog_grid")
                .num_columns(4)
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Type");
                    ui.strong("Footprint");
                    ui.strong("Quota");
                    ui.strong("Placed");
                    ui.end_row();

                    for (idx, kind) in catalog.kinds.iter().enumerate() {
                        ui.label(kind.name.as_str());
                        ui.label(kind.footprint.to_string());
                        ui.label(quota_label(kind.quota));
                        let placed = stats.counts.get(idx).copied().unwrap_or(0);
                        ui.label(placed.to_string());
                        ui.end_row();
                    }
                });

            ui.separator();
            let placed_total: u32 = stats.counts.iter().sum();
            ui.label(format!(
                "{placed_total} structures on {} lots",
                stats.free_spots
            ));
        });
}
