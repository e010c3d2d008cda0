use bevy::prelude::*;

use simulation::config::{cell_to_world, CELL_SIZE};
use simulation::roads::RoadNetwork;

const ROAD_COLOR: Color = Color::srgb(0.25, 0.25, 0.28);
const ROAD_Z: f32 = 0.0;

/// Container entity all road sprites are parented under.
#[derive(Component)]
pub struct RoadLayer;

#[derive(Component)]
pub struct RoadSprite;

pub fn setup_road_layer(mut commands: Commands) {
    commands.spawn((
        RoadLayer,
        Name::new("RoadLayer"),
        Transform::default(),
        Visibility::default(),
    ));
}

/// Redraws the whole road layer when the network changes. Road counts are
/// small enough that a full rebuild beats tracking per-cell diffs.
pub fn redraw_roads(
    mut commands: Commands,
    roads: Res<RoadNetwork>,
    layer: Query<Entity, With<RoadLayer>>,
    existing: Query<Entity, With<RoadSprite>>,
) {
    if !roads.is_changed() {
        return;
    }
    let Ok(layer) = layer.get_single() else {
        return;
    };
    for sprite in &existing {
        commands.entity(sprite).despawn();
    }
    for &cell in roads.cells() {
        commands
            .spawn((
                RoadSprite,
                Sprite {
                    color: ROAD_COLOR,
                    custom_size: Some(Vec2::splat(CELL_SIZE)),
                    ..default()
                },
                Transform::from_translation(cell_to_world(cell).extend(ROAD_Z)),
            ))
            .set_parent(layer);
    }
}
