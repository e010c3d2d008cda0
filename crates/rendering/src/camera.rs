use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use simulation::config::CELL_SIZE;
use simulation::roads::RoadNetwork;

const PAN_SPEED: f32 = 400.0;
const MIN_ZOOM: f32 = 0.25;
const MAX_ZOOM: f32 = 4.0;

/// Marker for the single town camera.
#[derive(Component)]
pub struct TownCamera;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, TownCamera));
}

/// Keeps the camera aimed at the road network whenever it is regenerated.
pub fn recenter_on_network(
    roads: Res<RoadNetwork>,
    mut cameras: Query<&mut Transform, With<TownCamera>>,
) {
    if !roads.is_changed() || roads.is_empty() {
        return;
    }
    let center = roads.centroid() * CELL_SIZE;
    for mut transform in &mut cameras {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

pub fn pan_camera(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cameras: Query<(&mut Transform, &OrthographicProjection), With<TownCamera>>,
) {
    let mut delta = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        delta.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        delta.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        delta.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        delta.x += 1.0;
    }
    if delta == Vec2::ZERO {
        return;
    }
    for (mut transform, projection) in &mut cameras {
        let step = delta.normalize() * PAN_SPEED * projection.scale * time.delta_secs();
        transform.translation.x += step.x;
        transform.translation.y += step.y;
    }
}

pub fn zoom_camera(
    mut wheel: EventReader<MouseWheel>,
    mut cameras: Query<&mut OrthographicProjection, With<TownCamera>>,
) {
    let scroll: f32 = wheel.read().map(|ev| ev.y).sum();
    if scroll == 0.0 {
        return;
    }
    for mut projection in &mut cameras {
        let factor = 1.0 - scroll * 0.1;
        projection.scale = (projection.scale * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}
