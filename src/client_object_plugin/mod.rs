use bevy::prelude::*;

use crate::common::types::EEntityKind;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::*;
pub use resources::*;
pub use systems::*;

pub struct ClientObjectPlugin;

impl Plugin for ClientObjectPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ObjectId>()
            .register_type::<ContainerId>()
            .register_type::<PermanentId>()
            .register_type::<DynamicObject>()
            .register_type::<MobileInstance>()
            .register_type::<ClientObject>()
            .register_type::<ControlledPlayer>()
            .register_type::<FloatingPanel>()
            .register_type::<FloatingPanelManager>()
            .register_type::<EEntityKind>()
            .register_type::<Name>()
            .register_type::<Transform>()
            .init_resource::<ClientObjectManager>()
            .init_resource::<FloatingPanelManager>()
            .add_systems(PreUpdate, (
                unregister_removed_system,
                register_dynamic_objects_system,
                register_mobiles_system,
                register_permanent_objects_system,
                register_panels_system,
            ).chain());

        info!("ClientObjectPlugin loaded.");
    }
}
