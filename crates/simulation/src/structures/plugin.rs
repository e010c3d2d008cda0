use std::collections::HashMap;

use bevy::prelude::*;

use crate::roads::RoadNetwork;

use super::placement::place_structures;
use super::types::{warn_if_misordered, Structure, StructureCatalog};

/// Cell-to-entity index for every cell a placed structure occupies. Owned by
/// this plugin and rebuilt on every relayout; collaborators only read it.
#[derive(Resource, Default)]
pub struct StructureRegistry(pub HashMap<IVec3, Entity>);

/// Per-catalog-entry placement counts from the latest layout pass, for the
/// catalog panel.
#[derive(Resource, Default)]
pub struct PlacementStats {
    pub counts: Vec<u32>,
    pub free_spots: usize,
}

pub struct StructuresPlugin;

impl Plugin for StructuresPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StructureCatalog>()
            .init_resource::<StructureRegistry>()
            .init_resource::<PlacementStats>()
            .add_systems(Startup, warn_if_misordered)
            .add_systems(Update, relayout_structures);
    }
}

/// Rebuilds the structure layout whenever the road network changes
/// (Bevy change detection): despawns the previous layout, reruns the
/// placement pass, and respawns one entity per placement.
pub fn relayout_structures(
    mut commands: Commands,
    roads: Res<RoadNetwork>,
    catalog: Res<StructureCatalog>,
    mut registry: ResMut<StructureRegistry>,
    mut stats: ResMut<PlacementStats>,
    existing: Query<Entity, With<Structure>>,
) {
    if !roads.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn_recursive();
    }
    registry.0.clear();

    // Quota mutation stays local to this pass; the configured catalog
    // resource is never consumed.
    let mut pass_catalog = catalog.clone();
    let plan = place_structures(roads.cells(), &mut pass_catalog);

    stats.counts = vec![0; catalog.kinds.len()];
    stats.free_spots = plan.free_spots;
    for placement in &plan.placements {
        stats.counts[placement.kind] += 1;
    }

    for placement in &plan.placements {
        let kind = &catalog.kinds[placement.kind];
        let entity = commands
            .spawn(Structure {
                kind: placement.kind,
                model: kind.model,
                anchor: placement.anchor,
                facing: placement.facing,
                footprint: kind.footprint,
            })
            .id();
        for cell in &placement.occupied {
            registry.0.insert(*cell, entity);
        }
    }

    info!(
        "structure layout: {} placed over {} lots along {} road cells",
        plan.placements.len(),
        plan.free_spots,
        roads.len()
    );
}
