use std::collections::HashSet;

use bevy::math::IVec3;

use crate::direction::{road_neighbor_directions, Direction};

/// Buildable lots discovered along the road network, in discovery order.
///
/// Each entry pairs a non-road cell with the direction its structure should
/// face to open toward the road that discovered it. A cell is recorded at
/// most once: the first adjacency wins and later ones are dropped, which is
/// the tie-break for lots bordering several roads.
#[derive(Debug, Default)]
pub struct FreeSpots {
    entries: Vec<(IVec3, Direction)>,
    index: HashSet<IVec3>,
}

impl FreeSpots {
    fn insert(&mut self, cell: IVec3, facing: Direction) {
        if self.index.insert(cell) {
            self.entries.push((cell, facing));
        }
    }

    pub fn contains(&self, cell: IVec3) -> bool {
        self.index.contains(&cell)
    }

    /// Lots in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, Direction)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scans the road cells and collects every orthogonal neighbor that is not
/// itself a road. The recorded direction is the reverse of the scan
/// direction: the side the lot's structure should face.
pub fn find_free_spaces(road_cells: &[IVec3]) -> FreeSpots {
    let occupied: HashSet<IVec3> = road_cells.iter().copied().collect();
    let mut spots = FreeSpots::default();
    for &road in road_cells {
        let neighbor_dirs = road_neighbor_directions(road, &occupied);
        for dir in Direction::ALL {
            if neighbor_dirs.contains(&dir) {
                continue;
            }
            spots.insert(road + dir.offset(), dir.reverse());
        }
    }
    spots
}
