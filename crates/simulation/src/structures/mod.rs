mod free_space;
mod placement;
mod plugin;
#[cfg(test)]
mod tests;
pub mod types;

pub use free_space::{find_free_spaces, FreeSpots};
pub use placement::{place_structures, Placement, PlacementId, StructurePlan};
pub use plugin::{relayout_structures, PlacementStats, StructureRegistry, StructuresPlugin};
pub use types::{Quota, Structure, StructureCatalog, StructureKind, StructureModel};
