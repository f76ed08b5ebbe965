use bevy::prelude::*;
pub mod config;
pub mod resources;
pub mod systems;

pub use config::{ObjectConfig, PlayerConfig};
pub use resources::LocatorConfig;
pub use systems::spawn_world_from_config_system;

#[derive(Resource, Default)]
pub struct TotalObjects(pub usize);

pub struct WorldSnapshotPlugin;

impl Plugin for WorldSnapshotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocatorConfig>()
           .insert_resource(TotalObjects(0))
           .add_systems(Startup, spawn_world_from_config_system);
    }
}
