use bevy::prelude::*;
use chrono::Utc;
use super::events::{InspectEntityEvent, LocateRequestEvent};
use super::{LocateQuery, LocateRequestChannel, LocateResponse, LocateResponseChannel};
use crate::diagnostics::{inspect_entity, LocatorLog};
use crate::locator::{Found, WorldLocator};

pub fn ingest_locate_requests_from_channel_system(
    channel: Res<LocateRequestChannel>,
    mut event_writer: EventWriter<LocateRequestEvent>,
) {
    while let Ok(request) = channel.0.try_recv() {
        debug!("QueryBridge: Ingested request {} ({:?})", request.request_id, request.query);
        event_writer.write(LocateRequestEvent(request));
    }
}

pub fn answer_locate_requests_system(
    mut events: EventReader<LocateRequestEvent>,
    locator: WorldLocator,
    channel: Res<LocateResponseChannel>,
) {
    for LocateRequestEvent(request) in events.read() {
        let response = LocateResponse {
            request_id: request.request_id,
            matches: locate(&locator, &request.query),
            answered_at: Utc::now(),
        };
        let count = response.matches.len();
        if let Err(e) = channel.0.send(response) {
            error!("QueryBridge: Failed to send response for request {}: {}", request.request_id, e);
        } else {
            debug!("QueryBridge: Answered request {} with {} matches", request.request_id, count);
        }
    }
}

/// Runs one query; single-entity lookups come back as a map of zero or one entry.
pub fn locate(locator: &WorldLocator, query: &LocateQuery) -> Found {
    match query {
        LocateQuery::PanelByName { name } => locator.find_panel_by_name(name),
        LocateQuery::DynamicObjectsByName { name, container_id: Some(container_id) } => {
            locator.find_dynamic_objects_in_container(name, *container_id)
        }
        LocateQuery::DynamicObjectsByName { name, container_id: None } => {
            locator.find_dynamic_objects_by_name(name)
        }
        LocateQuery::DynamicObject { object_id, container_id } => {
            single(object_id, locator.find_dynamic_object(*object_id, *container_id))
        }
        LocateQuery::ClientObject { object_id, container_id } => {
            single(object_id, locator.find_client_object(*object_id, *container_id))
        }
        LocateQuery::PermanentObject { permanent_id } => {
            single(permanent_id, locator.find_permanent_object(*permanent_id))
        }
        LocateQuery::PermanentObjectsByName { name, distance } => {
            locator.find_permanent_objects_by_name(name, *distance)
        }
        LocateQuery::NearbyMobiles { distance } => locator
            .get_nearby_mobiles(*distance)
            .into_iter()
            .map(|entity| {
                let key = locator
                    .object_id_of(entity)
                    .map_or_else(|| format!("{:?}", entity), |id| id.to_string());
                (key, entity)
            })
            .collect(),
        LocateQuery::Mobile { object_id } => single(object_id, locator.get_mobile(*object_id)),
        LocateQuery::MobilesByName { name, distance } => locator.find_mobiles(name, *distance),
    }
}

fn single(id: &impl ToString, entity: Option<Entity>) -> Found {
    entity.map(|entity| (id.to_string(), entity)).into_iter().collect()
}

/// Dumps each requested entity to the query log.
pub fn inspect_entities_system(world: &mut World) {
    let requested: Vec<Entity> = world
        .resource_mut::<Events<InspectEntityEvent>>()
        .drain()
        .map(|event| event.0)
        .collect();
    if requested.is_empty() || !world.contains_resource::<LocatorLog>() {
        return;
    }

    world.resource_scope(|world, log: Mut<LocatorLog>| {
        for entity in requested {
            let dumped = inspect_entity(world, entity, &*log);
            debug!("QueryBridge: Inspected {:?} ({} components)", entity, dumped);
        }
    });
}
