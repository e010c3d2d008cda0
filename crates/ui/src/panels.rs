//! Panel visibility with connected hiding.
//!
//! Hiding a panel also hides the panels connected to it; showing does not
//! cascade. The connection list is one-directional, which is why it is kept
//! separate from any widget parenting.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;
use bevy_egui::EguiContexts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Catalog,
    Actors,
}

#[derive(Debug, Clone, Default)]
pub struct PanelState {
    pub shown: bool,
    pub connected: Vec<PanelId>,
}

/// Visibility state for every panel.
#[derive(Resource)]
pub struct Panels {
    entries: HashMap<PanelId, PanelState>,
}

impl Default for Panels {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            PanelId::Catalog,
            PanelState {
                shown: true,
                // Residents only make sense alongside the catalog view.
                connected: vec![PanelId::Actors],
            },
        );
        entries.insert(
            PanelId::Actors,
            PanelState {
                shown: false,
                connected: Vec::new(),
            },
        );
        Self { entries }
    }
}

impl Panels {
    pub fn is_shown(&self, id: PanelId) -> bool {
        self.entries.get(&id).is_some_and(|p| p.shown)
    }

    pub fn show(&mut self, id: PanelId) {
        if let Some(panel) = self.entries.get_mut(&id) {
            panel.shown = true;
        } else {
            warn!("show for unknown panel {id:?}");
        }
    }

    /// Hides `id` and, transitively, every panel connected to it.
    pub fn hide(&mut self, id: PanelId) {
        let mut pending = vec![id];
        let mut visited: HashSet<PanelId> = HashSet::new();
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(panel) = self.entries.get_mut(&current) else {
                warn!("hide for unknown panel {current:?}");
                continue;
            };
            panel.shown = false;
            pending.extend(panel.connected.iter().copied());
        }
    }

    pub fn toggle(&mut self, id: PanelId) {
        if self.is_shown(id) {
            self.hide(id);
        } else {
            self.show(id);
        }
    }
}

/// F1 toggles the catalog panel, F2 the residents panel. Ignored while egui
/// has keyboard focus.
pub fn panel_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut panels: ResMut<Panels>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::F1) {
        panels.toggle(PanelId::Catalog);
    }
    if keyboard.just_pressed(KeyCode::F2) {
        panels.toggle(PanelId::Actors);
    }
}
