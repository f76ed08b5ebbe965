use bevy::prelude::*;
use crate::client_object_plugin::{
    ClientObject, ContainerId, ControlledPlayer, DynamicObject, FloatingPanel, MobileInstance,
    ObjectId, PermanentId,
};
use crate::common::types::EEntityKind;
use crate::world_snapshot_plugin::{LocatorConfig, TotalObjects};
use super::config::ObjectConfig;

fn spawn_object(commands: &mut Commands, cfg: &ObjectConfig) -> Entity {
    match cfg {
        ObjectConfig::DynamicObject { object_id, name, position, container_id, client_object } => {
            let mut entity = commands.spawn((
                EEntityKind::DynamicObject,
                DynamicObject,
                ObjectId(*object_id),
                Transform::from_translation(Vec3::from_array(*position)),
            ));
            if let Some(container_id) = container_id {
                entity.insert(ContainerId(*container_id));
            }
            if *client_object {
                entity.insert(ClientObject);
            }
            if let Some(name) = name {
                entity.insert(Name::new(name.clone()));
            }
            entity.id()
        }
        ObjectConfig::Mobile { object_id, name, position } => {
            let mut entity = commands.spawn((
                EEntityKind::Mobile,
                MobileInstance,
                ClientObject,
                ObjectId(*object_id),
                Transform::from_translation(Vec3::from_array(*position)),
            ));
            if let Some(name) = name {
                entity.insert(Name::new(name.clone()));
            }
            entity.id()
        }
        ObjectConfig::PermanentObject { permanent_id, name, position } => {
            let mut entity = commands.spawn((
                EEntityKind::PermanentObject,
                PermanentId(*permanent_id),
                Transform::from_translation(Vec3::from_array(*position)),
            ));
            if let Some(name) = name {
                entity.insert(Name::new(name.clone()));
            }
            entity.id()
        }
        ObjectConfig::Panel { panel_id, visible } => commands
            .spawn((
                EEntityKind::Panel,
                FloatingPanel { panel_id: panel_id.clone(), visible: *visible },
            ))
            .id(),
    }
}

pub fn spawn_world_from_config_system(
    mut commands: Commands,
    config: Res<LocatorConfig>,
    mut total_objects: ResMut<TotalObjects>,
) {
    if let Some(player) = &config.player {
        let entity = commands
            .spawn((
                EEntityKind::Player,
                ControlledPlayer,
                Name::new(player.name.clone()),
                Transform::from_translation(Vec3::from_array(player.position)),
            ))
            .id();
        info!("Spawned player '{}' as {:?}", player.name, entity);
    } else {
        warn!("Snapshot has no player; proximity queries will measure from nowhere");
    }

    total_objects.0 = config.objects.len();

    for cfg in &config.objects {
        let entity = spawn_object(&mut commands, cfg);
        info!("Spawned {} as {:?}", cfg.label(), entity);
    }
}
