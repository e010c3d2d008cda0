use bevy::prelude::*;

use crate::road_gen::{generate_roads, RoadGenConfig};
use crate::roads::RoadNetwork;

/// Marker resource that, when present, causes `init_world` to skip road
/// generation. Used by tests that lay out roads by hand.
#[derive(Resource)]
pub struct SkipWorldInit;

/// Startup: grow the procedural road network. Structure placement and actor
/// housing follow via change detection on [`RoadNetwork`].
pub fn init_world(mut roads: ResMut<RoadNetwork>, skip: Option<Res<SkipWorldInit>>) {
    if skip.is_some() {
        return;
    }
    generate_roads(&RoadGenConfig::default(), &mut roads);
    info!("generated road network: {} cells", roads.len());
}
