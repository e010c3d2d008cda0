use bevy::prelude::*;

pub mod actors;
pub mod config;
pub mod direction;
pub mod road_gen;
pub mod roads;
pub mod structures;
pub mod world_init;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<roads::RoadNetwork>()
            .add_systems(Startup, world_init::init_world)
            .add_plugins((structures::StructuresPlugin, actors::ActorsPlugin));
    }
}
