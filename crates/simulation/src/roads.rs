use std::collections::HashSet;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The road network as an ordered list of occupied grid cells.
///
/// Order matters: the free-space scan iterates cells in the order roads were
/// laid down, which fixes the tie-break when one lot borders several roads.
/// The set mirrors the list for O(1) membership checks.
#[derive(Resource, Default, Serialize, Deserialize)]
pub struct RoadNetwork {
    cells: Vec<IVec3>,
    occupied: HashSet<IVec3>,
}

impl RoadNetwork {
    /// Adds a road cell. Returns false if the cell is already a road.
    pub fn place_road(&mut self, cell: IVec3) -> bool {
        if !self.occupied.insert(cell) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    /// Removes a road cell. Returns false if the cell was not a road.
    pub fn remove_road(&mut self, cell: IVec3) -> bool {
        if !self.occupied.remove(&cell) {
            return false;
        }
        self.cells.retain(|c| *c != cell);
        true
    }

    pub fn is_road(&self, cell: IVec3) -> bool {
        self.occupied.contains(&cell)
    }

    /// Road cells in placement order.
    pub fn cells(&self) -> &[IVec3] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Arithmetic center of the network, in grid coordinates. Used to aim the
    /// camera at startup.
    pub fn centroid(&self) -> Vec2 {
        if self.cells.is_empty() {
            return Vec2::ZERO;
        }
        let sum = self
            .cells
            .iter()
            .fold(Vec2::ZERO, |acc, c| acc + Vec2::new(c.x as f32, c.y as f32));
        sum / self.cells.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_road_keeps_order() {
        let mut roads = RoadNetwork::default();
        assert!(roads.place_road(IVec3::new(2, 0, 0)));
        assert!(roads.place_road(IVec3::new(0, 0, 0)));
        assert!(roads.place_road(IVec3::new(1, 0, 0)));
        assert_eq!(
            roads.cells(),
            &[IVec3::new(2, 0, 0), IVec3::new(0, 0, 0), IVec3::new(1, 0, 0)]
        );
    }

    #[test]
    fn test_no_duplicate_road() {
        let mut roads = RoadNetwork::default();
        assert!(roads.place_road(IVec3::ZERO));
        assert!(!roads.place_road(IVec3::ZERO));
        assert_eq!(roads.len(), 1);
    }

    #[test]
    fn test_remove_road() {
        let mut roads = RoadNetwork::default();
        roads.place_road(IVec3::ZERO);
        roads.place_road(IVec3::new(1, 0, 0));
        assert!(roads.remove_road(IVec3::ZERO));
        assert!(!roads.remove_road(IVec3::ZERO));
        assert!(!roads.is_road(IVec3::ZERO));
        assert_eq!(roads.cells(), &[IVec3::new(1, 0, 0)]);
    }

    #[test]
    fn test_centroid() {
        let mut roads = RoadNetwork::default();
        roads.place_road(IVec3::new(0, 0, 0));
        roads.place_road(IVec3::new(2, 4, 0));
        assert_eq!(roads.centroid(), Vec2::new(1.0, 2.0));
    }
}
