use bevy::prelude::*;
use indexmap::IndexMap;

/// Live collections of every networked object the client knows about.
/// Filled by the registry systems; queries only ever borrow it.
#[derive(Resource, Debug, Default)]
pub struct ClientObjectManager {
    dynamic_objects: IndexMap<u64, Entity>,
    containers: IndexMap<u64, Vec<Entity>>,
    permanent_objects: IndexMap<i32, Entity>,
    mobiles: IndexMap<u64, Entity>,
}

impl ClientObjectManager {
    pub fn dynamic_objects(&self) -> impl Iterator<Item = (u64, Entity)> + '_ {
        self.dynamic_objects.iter().map(|(id, entity)| (*id, *entity))
    }

    pub fn objects_in_container(&self, container_id: u64) -> &[Entity] {
        self.containers
            .get(&container_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn dynamic_object_by_id(&self, object_id: u64) -> Option<Entity> {
        self.dynamic_objects.get(&object_id).copied()
    }

    pub fn permanent_objects(&self) -> impl Iterator<Item = (i32, Entity)> + '_ {
        self.permanent_objects.iter().map(|(id, entity)| (*id, *entity))
    }

    pub fn permanent_object_by_id(&self, permanent_id: i32) -> Option<Entity> {
        self.permanent_objects.get(&permanent_id).copied()
    }

    pub fn mobiles(&self) -> impl Iterator<Item = (u64, Entity)> + '_ {
        self.mobiles.iter().map(|(id, entity)| (*id, *entity))
    }

    pub fn mobile_by_id(&self, object_id: u64) -> Option<Entity> {
        self.mobiles.get(&object_id).copied()
    }

    pub fn len(&self) -> usize {
        self.dynamic_objects.len() + self.permanent_objects.len() + self.mobiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers (or re-homes) a dynamic object. An entity lives in at most one container
    /// and under one id.
    pub fn insert_dynamic_object(&mut self, object_id: u64, entity: Entity, container_id: Option<u64>) {
        rekey(&mut self.dynamic_objects, object_id, entity);
        self.detach_from_containers(entity);
        if let Some(container_id) = container_id {
            self.containers.entry(container_id).or_default().push(entity);
        }
    }

    pub fn insert_mobile(&mut self, object_id: u64, entity: Entity) {
        rekey(&mut self.mobiles, object_id, entity);
    }

    pub fn insert_permanent_object(&mut self, permanent_id: i32, entity: Entity) {
        rekey(&mut self.permanent_objects, permanent_id, entity);
    }

    pub fn detach_from_containers(&mut self, entity: Entity) {
        for members in self.containers.values_mut() {
            members.retain(|e| *e != entity);
        }
        self.containers.retain(|_, members| !members.is_empty());
    }

    /// Drops every reference to `entity`.
    pub fn forget(&mut self, entity: Entity) {
        self.dynamic_objects.retain(|_, e| *e != entity);
        self.mobiles.retain(|_, e| *e != entity);
        self.permanent_objects.retain(|_, e| *e != entity);
        self.detach_from_containers(entity);
    }
}

// Keeps the entry's position when the id is unchanged.
fn rekey<K: std::hash::Hash + Eq>(map: &mut IndexMap<K, Entity>, id: K, entity: Entity) {
    if map.get(&id) == Some(&entity) {
        return;
    }
    map.retain(|_, e| *e != entity);
    map.insert(id, entity);
}

/// Tracks the floating UI panels currently open. The panel list is not part of
/// the public surface; it is reachable only through reflection.
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource, Default)]
pub struct FloatingPanelManager {
    open_panels: Vec<Entity>,
}

impl FloatingPanelManager {
    pub(crate) fn attach(&mut self, entity: Entity) {
        if !self.open_panels.contains(&entity) {
            self.open_panels.push(entity);
        }
    }

    pub(crate) fn detach(&mut self, entity: Entity) {
        self.open_panels.retain(|e| *e != entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rehoming_moves_object_between_containers() {
        let mut manager = ClientObjectManager::default();
        let entity = Entity::from_raw(7);

        manager.insert_dynamic_object(100, entity, Some(1));
        assert_eq!(manager.objects_in_container(1), &[entity]);

        manager.insert_dynamic_object(100, entity, Some(2));
        assert!(manager.objects_in_container(1).is_empty());
        assert_eq!(manager.objects_in_container(2), &[entity]);
        assert_eq!(manager.dynamic_object_by_id(100), Some(entity));
    }

    #[test]
    fn changed_id_replaces_the_old_key() {
        let mut manager = ClientObjectManager::default();
        let sword = Entity::from_raw(4);
        let orc = Entity::from_raw(5);

        manager.insert_dynamic_object(100, sword, None);
        manager.insert_dynamic_object(101, sword, None);
        manager.insert_mobile(200, orc);
        manager.insert_mobile(201, orc);

        assert_eq!(manager.dynamic_object_by_id(100), None);
        assert_eq!(manager.dynamic_object_by_id(101), Some(sword));
        assert_eq!(manager.mobile_by_id(200), None);
        assert_eq!(manager.mobile_by_id(201), Some(orc));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn reinserting_keeps_registry_order() {
        let mut manager = ClientObjectManager::default();
        let (a, b) = (Entity::from_raw(1), Entity::from_raw(2));

        manager.insert_dynamic_object(1, a, Some(9));
        manager.insert_dynamic_object(2, b, None);
        manager.insert_dynamic_object(1, a, Some(8));

        let ids: Vec<u64> = manager.dynamic_objects().map(|(id, _)| id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn forget_clears_all_collections() {
        let mut manager = ClientObjectManager::default();
        let chest = Entity::from_raw(1);
        let orc = Entity::from_raw(2);
        let well = Entity::from_raw(3);

        manager.insert_dynamic_object(10, chest, Some(99));
        manager.insert_mobile(20, orc);
        manager.insert_permanent_object(30, well);
        assert_eq!(manager.len(), 3);

        manager.forget(chest);
        manager.forget(orc);
        manager.forget(well);

        assert!(manager.is_empty());
        assert!(manager.objects_in_container(99).is_empty());
    }
}
