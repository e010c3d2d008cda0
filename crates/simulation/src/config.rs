/// Edge length of one grid cell in world units. Sprites and camera math
/// convert grid coordinates through this.
pub const CELL_SIZE: f32 = 16.0;

/// Seed for the road generator when the app does not supply one.
pub const DEFAULT_ROAD_SEED: u64 = 42;

/// Rewrite iterations applied to the road L-system axiom. Each iteration
/// roughly doubles the sentence length, so keep this small.
pub const ROAD_REWRITE_ITERATIONS: u32 = 3;

/// Unit steps the turtle walks per `F` symbol.
pub const ROAD_SEGMENT_LENGTH: u32 = 6;

pub fn cell_to_world(cell: bevy::math::IVec3) -> bevy::math::Vec2 {
    bevy::math::Vec2::new(cell.x as f32 * CELL_SIZE, cell.y as f32 * CELL_SIZE)
}
