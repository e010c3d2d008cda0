use bevy::prelude::*;

pub mod camera;
pub mod road_render;
pub mod structure_render;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                camera::setup_camera,
                road_render::setup_road_layer,
                structure_render::setup_structure_layer,
            ),
        )
        .add_systems(
            Update,
            (
                camera::recenter_on_network,
                camera::pan_camera,
                camera::zoom_camera,
                road_render::redraw_roads,
                structure_render::despawn_orphan_sprites,
                structure_render::spawn_structure_sprites,
            ),
        );
    }
}
