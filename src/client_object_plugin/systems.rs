use bevy::prelude::*;
use super::components::{
    ContainerId, DynamicObject, FloatingPanel, MobileInstance, ObjectId, PermanentId,
};
use super::resources::{ClientObjectManager, FloatingPanelManager};

/// Adds new dynamic objects to the registry, re-keys the ones whose id changed
/// and re-homes the ones whose container changed.
pub fn register_dynamic_objects_system(
    query: Query<
        (Entity, &ObjectId, Option<&ContainerId>),
        (
            With<DynamicObject>,
            Or<(Changed<ObjectId>, Added<DynamicObject>, Changed<ContainerId>)>,
        ),
    >,
    mut manager: ResMut<ClientObjectManager>,
) {
    for (entity, object_id, container) in query.iter() {
        manager.insert_dynamic_object(object_id.0, entity, container.map(|c| c.0));
        debug!("Registry: dynamic object {} -> {:?} (container {:?})", object_id.0, entity, container);
    }
}

pub fn register_mobiles_system(
    query: Query<
        (Entity, &ObjectId),
        (With<MobileInstance>, Or<(Changed<ObjectId>, Added<MobileInstance>)>),
    >,
    mut manager: ResMut<ClientObjectManager>,
) {
    for (entity, object_id) in query.iter() {
        manager.insert_mobile(object_id.0, entity);
        debug!("Registry: mobile {} -> {:?}", object_id.0, entity);
    }
}

pub fn register_permanent_objects_system(
    query: Query<(Entity, &PermanentId), Changed<PermanentId>>,
    mut manager: ResMut<ClientObjectManager>,
) {
    for (entity, permanent_id) in query.iter() {
        manager.insert_permanent_object(permanent_id.0, entity);
        debug!("Registry: permanent object {} -> {:?}", permanent_id.0, entity);
    }
}

pub fn register_panels_system(
    query: Query<(Entity, &FloatingPanel), Added<FloatingPanel>>,
    mut manager: ResMut<FloatingPanelManager>,
) {
    for (entity, panel) in query.iter() {
        manager.attach(entity);
        debug!("Registry: panel '{}' -> {:?}", panel.panel_id, entity);
    }
}

/// Drops registry entries whose components went away (despawn included).
pub fn unregister_removed_system(
    mut removed_ids: RemovedComponents<ObjectId>,
    mut removed_permanents: RemovedComponents<PermanentId>,
    mut removed_containers: RemovedComponents<ContainerId>,
    mut removed_panels: RemovedComponents<FloatingPanel>,
    mut manager: ResMut<ClientObjectManager>,
    mut panels: ResMut<FloatingPanelManager>,
) {
    for entity in removed_ids.read().chain(removed_permanents.read()) {
        manager.forget(entity);
    }
    for entity in removed_containers.read() {
        manager.detach_from_containers(entity);
    }
    for entity in removed_panels.read() {
        panels.detach(entity);
    }
}
