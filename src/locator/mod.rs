//! Name, id and proximity lookups over the client object registries.
//!
//! Every lookup borrows the registries for the duration of the call, returns a
//! freshly built result and writes exactly one summary line to the
//! [`LocatorLog`]. A missing registry reads as empty.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use indexmap::IndexMap;

pub mod matching;
pub mod proximity;

pub use matching::{contains_ignore_case, name_matches};
pub use proximity::{distance_from, nearest_within, DEFAULT_SEARCH_DISTANCE};

use crate::client_object_plugin::{
    ClientObject, ClientObjectManager, ControlledPlayer, FloatingPanel, FloatingPanelManager,
    ObjectId,
};
use crate::diagnostics::{LocatorLog, QueryLog};
use crate::reflect_access::get_field_value;

/// Matches keyed by the entity's identifier, in the order they were found.
pub type Found = IndexMap<String, Entity>;

#[derive(Resource, Debug, Clone)]
pub struct LocatorSettings {
    pub default_search_distance: f32,
}

impl Default for LocatorSettings {
    fn default() -> Self {
        Self {
            default_search_distance: DEFAULT_SEARCH_DISTANCE,
        }
    }
}

#[derive(SystemParam)]
pub struct WorldLocator<'w, 's> {
    objects: Option<Res<'w, ClientObjectManager>>,
    panels: Option<Res<'w, FloatingPanelManager>>,
    settings: Option<Res<'w, LocatorSettings>>,
    log: Option<Res<'w, LocatorLog>>,
    names: Query<'w, 's, &'static Name>,
    positions: Query<'w, 's, &'static GlobalTransform>,
    hierarchy: Query<'w, 's, (&'static Transform, Option<&'static ChildOf>)>,
    object_ids: Query<'w, 's, &'static ObjectId>,
    floating_panels: Query<'w, 's, &'static FloatingPanel>,
    client_objects: Query<'w, 's, (), With<ClientObject>>,
    player: Query<'w, 's, &'static GlobalTransform, With<ControlledPlayer>>,
}

impl WorldLocator<'_, '_> {
    pub fn find_panel_by_name(&self, name: &str) -> Found {
        let open_panels = get_field_value::<_, Vec<Entity>>(self.panels.as_deref(), "open_panels")
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let mut found = Found::new();
        for &entity in open_panels {
            let Ok(panel) = self.floating_panels.get(entity) else {
                continue;
            };
            if name_matches(Some(panel.panel_id.as_str()), name) {
                found.entry(panel.panel_id.clone()).or_insert(entity);
            }
        }

        self.report(format!("[FindPanelByName] - Found {} panels by '{}'.", found.len(), name));
        found
    }

    pub fn find_dynamic_objects_by_name(&self, name: &str) -> Found {
        let found = match self.objects.as_deref() {
            Some(objects) => self.collect_named(objects.dynamic_objects(), name),
            None => Found::new(),
        };

        self.report(format!(
            "[FindDynamicObjectsByName] - Found {} dynamic objects by '{}'.",
            found.len(),
            name
        ));
        found
    }

    pub fn find_dynamic_objects_in_container(&self, name: &str, container_id: u64) -> Found {
        let found = match self.objects.as_deref() {
            Some(objects) => self.collect_named(self.with_object_ids(objects.objects_in_container(container_id)), name),
            None => Found::new(),
        };

        self.report(format!(
            "[FindDynamicObjectsByName] - Found {} dynamic objects by '{}' and {}.",
            found.len(),
            name,
            container_id
        ));
        found
    }

    /// Scoped lookups scan the container; `None` or a zero id searches the whole registry.
    pub fn find_dynamic_object(&self, object_id: u64, container_id: Option<u64>) -> Option<Entity> {
        let found = self.lookup_dynamic(object_id, container_id);

        match found {
            Some(entity) => self.report(format!(
                "[FindDynamicObject] - Found Dynamic Object {:?} by id {} and {:?}.",
                entity, object_id, container_id
            )),
            None => self.report(format!(
                "[FindDynamicObject] - Did not find Dynamic Object by id {} and {:?}.",
                object_id, container_id
            )),
        }
        found
    }

    /// Scoped lookups scan the container only. Unscoped lookups try dynamic
    /// objects, then mobiles. Either way the hit must carry [`ClientObject`].
    pub fn find_client_object(&self, object_id: u64, container_id: Option<u64>) -> Option<Entity> {
        let is_client = |entity: &Entity| self.client_objects.contains(*entity);
        let found = match container_id.filter(|id| *id > 0) {
            Some(_) => self.lookup_dynamic(object_id, container_id).filter(is_client),
            None => self.lookup_dynamic(object_id, None).filter(is_client).or_else(|| {
                self.objects
                    .as_deref()
                    .and_then(|objects| objects.mobile_by_id(object_id))
                    .filter(is_client)
            }),
        };

        self.report(format!(
            "[FindClientObject] - Found {} client objects by id {} and {:?}.",
            usize::from(found.is_some()),
            object_id,
            container_id
        ));
        found
    }

    pub fn find_permanent_object(&self, permanent_id: i32) -> Option<Entity> {
        let found = self
            .objects
            .as_deref()
            .and_then(|objects| objects.permanent_object_by_id(permanent_id));

        self.report(format!(
            "[FindPermanentObject] - Found {} permanent objects by id {}.",
            usize::from(found.is_some()),
            permanent_id
        ));
        found
    }

    /// Permanent objects whose name contains `name`, nearest first, no further
    /// than `distance` (or the configured default) from the player.
    pub fn find_permanent_objects_by_name(&self, name: &str, distance: Option<f32>) -> Found {
        let max_distance = distance.unwrap_or_else(|| self.default_search_distance());
        let candidates: Vec<_> = match self.objects.as_deref() {
            Some(objects) => objects
                .permanent_objects()
                .map(|(id, entity)| ((id, entity), self.position_of(entity)))
                .collect(),
            None => Vec::new(),
        };

        let ranked = nearest_within(candidates, self.reference_point(), max_distance);
        let found = self.collect_named(ranked.into_iter().map(|(candidate, _)| candidate), name);

        self.report(format!(
            "[FindPermanentObjectByName] - Found {} objects by '{}' with dist of {}.",
            found.len(),
            name,
            max_distance
        ));
        found
    }

    /// Mobiles within `distance` of the player, in registry order.
    pub fn get_nearby_mobiles(&self, distance: f32) -> Vec<Entity> {
        let nearby: Vec<Entity> = self
            .nearby_mobiles(distance)
            .into_iter()
            .map(|(_, entity)| entity)
            .collect();

        self.report(format!(
            "[GetNearbyMobiles] - Found {} mobiles with dist of {}.",
            nearby.len(),
            distance
        ));
        nearby
    }

    pub fn get_mobile(&self, object_id: u64) -> Option<Entity> {
        let found = self
            .objects
            .as_deref()
            .and_then(|objects| objects.mobile_by_id(object_id));

        self.report(format!(
            "[GetMobile] - Found {} mobiles by id {}.",
            usize::from(found.is_some()),
            object_id
        ));
        found
    }

    /// Mobiles whose name contains `name`, nearest first, no further than
    /// `distance` (or the configured default) from the player.
    pub fn find_mobiles(&self, name: &str, distance: Option<f32>) -> Found {
        let max_distance = distance.unwrap_or_else(|| self.default_search_distance());
        let candidates = self
            .nearby_mobiles(max_distance)
            .into_iter()
            .map(|(id, entity)| ((id, entity), self.position_of(entity)));

        let ranked = nearest_within(candidates, self.reference_point(), max_distance);
        let found = self.collect_named(ranked.into_iter().map(|(candidate, _)| candidate), name);

        self.report(format!(
            "[FindMobile] - Found {} objects by '{}' with dist of {}.",
            found.len(),
            name,
            max_distance
        ));
        found
    }

    /// World position of the controlled player, if one is spawned.
    pub fn reference_point(&self) -> Option<Vec3> {
        self.player.iter().next().map(GlobalTransform::translation)
    }

    /// Position of `entity` in the frame of `ancestor`: local translations summed
    /// up the parent chain, stopping below `ancestor` or at the root. Rotation and
    /// scale of the intermediate parents are ignored.
    pub fn relative_position_from(&self, entity: Entity, ancestor: Entity) -> Option<Vec3> {
        let (transform, child_of) = self.hierarchy.get(entity).ok()?;
        let mut position = transform.translation;
        let mut next = child_of.map(ChildOf::parent);

        while let Some(parent) = next.filter(|parent| *parent != ancestor) {
            let Ok((transform, child_of)) = self.hierarchy.get(parent) else {
                break;
            };
            position += transform.translation;
            next = child_of.map(ChildOf::parent);
        }
        Some(position)
    }

    pub fn object_id_of(&self, entity: Entity) -> Option<u64> {
        self.object_ids.get(entity).ok().map(|id| id.0)
    }

    pub fn default_search_distance(&self) -> f32 {
        self.settings
            .as_deref()
            .map(|settings| settings.default_search_distance)
            .unwrap_or(DEFAULT_SEARCH_DISTANCE)
    }

    fn lookup_dynamic(&self, object_id: u64, container_id: Option<u64>) -> Option<Entity> {
        let objects = self.objects.as_deref()?;
        match container_id.filter(|id| *id > 0) {
            Some(container_id) => objects
                .objects_in_container(container_id)
                .iter()
                .copied()
                .find(|entity| self.object_ids.get(*entity).is_ok_and(|id| id.0 == object_id)),
            None => objects.dynamic_object_by_id(object_id),
        }
    }

    fn nearby_mobiles(&self, distance: f32) -> Vec<(u64, Entity)> {
        let Some(objects) = self.objects.as_deref() else {
            return Vec::new();
        };
        let origin = self.reference_point();
        objects
            .mobiles()
            .filter(|(_, entity)| distance_from(self.position_of(*entity), origin) <= distance)
            .collect()
    }

    fn with_object_ids<'a>(&'a self, entities: &'a [Entity]) -> impl Iterator<Item = (u64, Entity)> + 'a {
        entities
            .iter()
            .filter_map(|entity| self.object_ids.get(*entity).ok().map(|id| (id.0, *entity)))
    }

    fn collect_named<K: ToString>(&self, candidates: impl IntoIterator<Item = (K, Entity)>, name: &str) -> Found {
        let mut found = Found::new();
        for (key, entity) in candidates {
            if name_matches(self.name_of(entity), name) {
                found.entry(key.to_string()).or_insert(entity);
            }
        }
        found
    }

    fn name_of(&self, entity: Entity) -> Option<&str> {
        self.names.get(entity).ok().map(Name::as_str)
    }

    fn position_of(&self, entity: Entity) -> Option<Vec3> {
        self.positions.get(entity).ok().map(GlobalTransform::translation)
    }

    fn report(&self, line: String) {
        if let Some(log) = self.log.as_deref() {
            log.log(&line);
        }
    }
}
