use std::collections::{HashMap, HashSet};

use bevy::math::IVec3;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

use super::free_space::{find_free_spaces, FreeSpots};
use super::types::{Quota, StructureCatalog};

/// Handle for one placed structure within a [`StructurePlan`]. Indexes into
/// `StructurePlan::placements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementId(pub usize);

/// One placement decision: which catalog entry goes where, which way it
/// faces, and every cell its footprint consumes. `occupied[0]` is the anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub kind: usize,
    pub anchor: IVec3,
    pub facing: Direction,
    pub occupied: Vec<IVec3>,
}

/// Output of one placement pass. Pure data: rendering turns each placement
/// into a visual separately, so the pass itself has no side effects.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StructurePlan {
    pub placements: Vec<Placement>,
    /// Every occupied cell, anchor and blocked extras alike, mapped to its
    /// placement. No two placements ever share a cell.
    pub registry: HashMap<IVec3, PlacementId>,
    /// How many lots the free-space scan offered this pass.
    pub free_spots: usize,
}

impl StructurePlan {
    fn record(&mut self, kind: usize, anchor: IVec3, facing: Direction, extras: Vec<IVec3>) {
        let id = PlacementId(self.placements.len());
        let mut occupied = Vec::with_capacity(1 + extras.len());
        occupied.push(anchor);
        occupied.extend(extras);
        for cell in &occupied {
            self.registry.insert(*cell, id);
        }
        self.placements.push(Placement {
            kind,
            anchor,
            facing,
            occupied,
        });
    }
}

/// Greedily fills the lots along `road_cells` from the catalog.
///
/// A single forward pass over the free-space scan, in discovery order. For
/// each lot the catalog is scanned top to bottom and the scan stops at the
/// first entry that is unlimited or has quota left, whether or not that
/// entry's footprint then fits: a failed multi-cell placement does not fall
/// through to a smaller type. Exhausted entries are skipped without ending
/// the scan. Quotas are consumed on successful placement only, so callers
/// that reuse a catalog across passes must clone it per pass.
pub fn place_structures(road_cells: &[IVec3], catalog: &mut StructureCatalog) -> StructurePlan {
    let spots = find_free_spaces(road_cells);
    let mut plan = StructurePlan {
        free_spots: spots.len(),
        ..Default::default()
    };
    let mut blocked: HashSet<IVec3> = HashSet::new();

    for (cell, facing) in spots.iter() {
        // Consumed by an earlier multi-cell footprint; not even the catalog
        // gets consulted.
        if blocked.contains(&cell) {
            continue;
        }

        for idx in 0..catalog.kinds.len() {
            let kind = &mut catalog.kinds[idx];

            if kind.quota == Quota::Unlimited {
                // Filler entry: always a single cell, never fails.
                plan.record(idx, cell, facing, Vec::new());
                break;
            }

            if kind.quota.is_available() {
                if kind.footprint > 1 {
                    let half = kind.footprint / 2;
                    if let Some(extras) = companion_cells(cell, facing, half, &spots, &plan) {
                        blocked.extend(extras.iter().copied());
                        kind.quota.consume();
                        plan.record(idx, cell, facing, extras);
                    }
                    // On verification failure nothing is placed or blocked,
                    // and the lot stays empty for this pass.
                } else {
                    kind.quota.consume();
                    plan.record(idx, cell, facing, Vec::new());
                }
                break;
            }
        }
    }

    plan
}

/// Cells a footprint of `2 * half - 1` needs beside its anchor, extending
/// symmetrically along the axis perpendicular to `facing`. Returns `None`
/// unless every companion is a known free lot that no earlier placement has
/// claimed; a shared cell would otherwise end up registered to two handles.
fn companion_cells(
    anchor: IVec3,
    facing: Direction,
    half: u32,
    spots: &FreeSpots,
    plan: &StructurePlan,
) -> Option<Vec<IVec3>> {
    let axis = facing.footprint_axis();
    let mut extras = Vec::new();
    for i in 1..half as i32 {
        let ahead = anchor + axis * i;
        let behind = anchor - axis * i;
        if !spots.contains(ahead) || !spots.contains(behind) {
            return None;
        }
        if plan.registry.contains_key(&ahead) || plan.registry.contains_key(&behind) {
            return None;
        }
        extras.push(ahead);
        extras.push(behind);
    }
    Some(extras)
}
