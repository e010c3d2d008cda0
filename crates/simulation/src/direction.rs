use std::collections::HashSet;

use bevy::math::{IVec3, Quat};
use serde::{Deserialize, Serialize};

/// The side of a road a lot opens toward. Structures are authored with their
/// entrance facing `Up`; the other variants rotate the visual accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit grid step in this direction. The z component stays 0; the grid is
    /// 2D and the third coordinate only exists to match the cell key type.
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::Up => IVec3::new(0, 1, 0),
            Direction::Down => IVec3::new(0, -1, 0),
            Direction::Left => IVec3::new(-1, 0, 0),
            Direction::Right => IVec3::new(1, 0, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Z-axis rotation that orients a structure's entrance toward this side.
    /// Purely visual; placement legality never consults it.
    pub fn rotation(self) -> Quat {
        match self {
            Direction::Up => Quat::IDENTITY,
            Direction::Down => Quat::from_rotation_z(std::f32::consts::PI),
            Direction::Left => Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
            Direction::Right => Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2),
        }
    }

    /// The axis a multi-cell footprint extends along when the entrance faces
    /// this side: perpendicular to the facing direction.
    pub fn footprint_axis(self) -> IVec3 {
        match self {
            Direction::Up | Direction::Down => IVec3::new(1, 0, 0),
            Direction::Left | Direction::Right => IVec3::new(0, 1, 0),
        }
    }
}

/// Directions in which `cell` has a road neighbor.
pub fn road_neighbor_directions(cell: IVec3, roads: &HashSet<IVec3>) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|dir| roads.contains(&(cell + dir.offset())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }

    #[test]
    fn test_offset_and_reverse_cancel() {
        let cell = IVec3::new(3, -2, 0);
        for dir in Direction::ALL {
            assert_eq!(cell + dir.offset() + dir.reverse().offset(), cell);
        }
    }

    #[test]
    fn test_footprint_axis_perpendicular_to_facing() {
        for dir in Direction::ALL {
            assert_eq!(dir.footprint_axis().dot(dir.offset()), 0);
        }
    }

    #[test]
    fn test_road_neighbor_directions() {
        let roads: HashSet<IVec3> = [IVec3::new(1, 0, 0), IVec3::new(0, 1, 0)]
            .into_iter()
            .collect();
        let found = road_neighbor_directions(IVec3::ZERO, &roads);
        assert_eq!(found.len(), 2);
        assert!(found.contains(&Direction::Right));
        assert!(found.contains(&Direction::Up));
    }
}
