use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Remaining placements allowed for a catalog entry.
///
/// `Unlimited` entries act as fillers: the placer takes them unconditionally,
/// so they belong at the bottom of the catalog. That ordering is a caller
/// contract, not something the placer enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quota {
    Limited(u32),
    Unlimited,
}

impl Quota {
    pub fn is_available(self) -> bool {
        match self {
            Quota::Unlimited => true,
            Quota::Limited(n) => n > 0,
        }
    }

    /// Consume one placement. Unlimited quotas are never decremented.
    pub fn consume(&mut self) {
        if let Quota::Limited(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

/// Visual-representation handle resolved by the rendering crate. The placer
/// treats it as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureModel {
    Apartment,
    Shop,
    House,
}

/// One catalog entry: a structure archetype the placer may choose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureKind {
    pub name: String,
    /// Cells this structure occupies when placed. 1 = single cell; larger
    /// footprints extend symmetrically along the axis perpendicular to the
    /// entrance.
    pub footprint: u32,
    pub quota: Quota,
    pub model: StructureModel,
}

/// Ordered list of structure archetypes consulted during placement.
///
/// Entries are tried top to bottom per lot; unlimited entries must come last
/// or everything below them is unreachable.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct StructureCatalog {
    pub kinds: Vec<StructureKind>,
}

impl Default for StructureCatalog {
    fn default() -> Self {
        Self {
            kinds: vec![
                StructureKind {
                    name: "Apartment block".into(),
                    footprint: 4,
                    quota: Quota::Limited(6),
                    model: StructureModel::Apartment,
                },
                StructureKind {
                    name: "Corner shop".into(),
                    footprint: 1,
                    quota: Quota::Limited(10),
                    model: StructureModel::Shop,
                },
                StructureKind {
                    name: "House".into(),
                    footprint: 1,
                    quota: Quota::Unlimited,
                    model: StructureModel::House,
                },
            ],
        }
    }
}

impl StructureCatalog {
    /// True when every unlimited entry sits below every limited one. The
    /// placer does not check this; `warn_if_misordered` surfaces violations
    /// at startup.
    pub fn is_fallback_ordered(&self) -> bool {
        let first_unlimited = self
            .kinds
            .iter()
            .position(|k| k.quota == Quota::Unlimited);
        match first_unlimited {
            None => true,
            Some(idx) => self.kinds[idx..]
                .iter()
                .all(|k| k.quota == Quota::Unlimited),
        }
    }
}

/// Logs a warning when the catalog breaks the fallback-last contract. Lots
/// reached after an early unlimited entry will never see the entries below
/// it, and a catalog with no unlimited entry can leave lots unfilled.
pub fn warn_if_misordered(catalog: Res<StructureCatalog>) {
    if !catalog.is_fallback_ordered() {
        warn!(
            "structure catalog has a limited entry below an unlimited one; \
             entries below the first unlimited entry are never reached"
        );
    }
}

/// Component on a placed structure entity.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    /// Index into the catalog this structure was placed from.
    pub kind: usize,
    pub model: StructureModel,
    pub anchor: IVec3,
    pub facing: Direction,
    pub footprint: u32,
}
