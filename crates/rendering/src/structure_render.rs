use bevy::prelude::*;

use simulation::config::{cell_to_world, CELL_SIZE};
use simulation::structures::{Structure, StructureModel};

const STRUCTURE_Z: f32 = 1.0;
// Slight inset so neighboring footprints read as separate buildings.
const FOOTPRINT_INSET: f32 = 0.88;

/// Container entity all structure sprites are parented under.
#[derive(Component)]
pub struct StructureLayer;

/// Visual for one placed structure; `tracked` is the simulation entity this
/// sprite mirrors.
#[derive(Component)]
pub struct StructureSprite {
    pub tracked: Entity,
}

pub fn setup_structure_layer(mut commands: Commands) {
    commands.spawn((
        StructureLayer,
        Name::new("StructureLayer"),
        Transform::default(),
        Visibility::default(),
    ));
}

fn model_color(model: StructureModel) -> Color {
    match model {
        StructureModel::Apartment => Color::srgb(0.75, 0.35, 0.30),
        StructureModel::Shop => Color::srgb(0.30, 0.50, 0.75),
        StructureModel::House => Color::srgb(0.40, 0.65, 0.35),
    }
}

/// Number of cells a footprint spans along its axis: the anchor plus one
/// companion per side for every full half step.
fn footprint_span(footprint: u32) -> u32 {
    let half = (footprint / 2).max(1);
    2 * half - 1
}

/// Spawns a sprite for every structure that does not have one yet. The
/// sprite sits at the anchor cell, stretched over the footprint span and
/// rotated so its entrance edge faces the road.
pub fn spawn_structure_sprites(
    mut commands: Commands,
    structures: Query<(Entity, &Structure), Added<Structure>>,
    layer: Query<Entity, With<StructureLayer>>,
) {
    let Ok(layer) = layer.get_single() else {
        return;
    };
    for (entity, structure) in &structures {
        let span = footprint_span(structure.footprint) as f32;
        let size = Vec2::new(span * CELL_SIZE * FOOTPRINT_INSET, CELL_SIZE * FOOTPRINT_INSET);
        let translation = cell_to_world(structure.anchor).extend(STRUCTURE_Z);
        commands
            .spawn((
                StructureSprite { tracked: entity },
                Sprite {
                    color: model_color(structure.model),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_translation(translation)
                    .with_rotation(structure.facing.rotation()),
            ))
            .set_parent(layer);
    }
}

/// Drops sprites whose simulation entity went away (road edits despawn the
/// whole layout).
pub fn despawn_orphan_sprites(
    mut commands: Commands,
    sprites: Query<(Entity, &StructureSprite)>,
    structures: Query<(), With<Structure>>,
) {
    for (entity, sprite) in &sprites {
        if structures.get(sprite.tracked).is_err() {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_span() {
        assert_eq!(footprint_span(1), 1);
        assert_eq!(footprint_span(2), 1);
        assert_eq!(footprint_span(3), 1);
        assert_eq!(footprint_span(4), 3);
        assert_eq!(footprint_span(5), 3);
        assert_eq!(footprint_span(6), 5);
    }
}
