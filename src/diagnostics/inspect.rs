use bevy::prelude::*;
use bevy::reflect::{PartialReflect, ReflectRef};

use crate::common::types::EEntityKind;
use super::query_log::QueryLog;

/// Writes every reflectable component of `entity` to `log`, one field per line.
/// Returns how many components were dumped.
pub fn inspect_entity(world: &World, entity: Entity, log: &dyn QueryLog) -> usize {
    let Ok(entity_ref) = world.get_entity(entity) else {
        log.log(&format!("[InspectEntity] - No entity {:?}.", entity));
        return 0;
    };
    let Some(registry) = world.get_resource::<AppTypeRegistry>() else {
        return 0;
    };
    let registry = registry.read();

    let label = world
        .get::<EEntityKind>(entity)
        .map(|kind| format!("{:?}", kind))
        .unwrap_or_else(|| "OBJECT".to_string());
    log.log(&format!("--- {} {:?} START ---", label, entity));

    let mut dumped = 0;
    for registration in registry.iter() {
        let Some(reflect_component) = registration.data::<ReflectComponent>() else {
            continue;
        };
        let Some(component) = reflect_component.reflect(entity_ref) else {
            continue;
        };
        log.log(&format!("*** {} ***", registration.type_info().type_path_table().short_path()));
        log_props(component.as_partial_reflect(), log);
        dumped += 1;
    }

    log.log(&format!("--- {} {:?} END ---", label, entity));
    dumped
}

fn log_props(value: &dyn PartialReflect, log: &dyn QueryLog) {
    log.log("--- PROPS START ---");
    match value.reflect_ref() {
        ReflectRef::Struct(s) => {
            for (index, field) in s.iter_fields().enumerate() {
                let name = s.name_at(index).unwrap_or("?");
                log_field(name, field, log);
            }
        }
        ReflectRef::TupleStruct(t) => {
            for (index, field) in t.iter_fields().enumerate() {
                log_field(&index.to_string(), field, log);
            }
        }
        _ => log.log(&format!("value = {:?}", value)),
    }
    log.log("--- PROPS END ---");
}

fn log_field(name: &str, field: &dyn PartialReflect, log: &dyn QueryLog) {
    log.log(&format!("{} = {:?}", name, field));

    if let ReflectRef::Map(map) = field.reflect_ref() {
        for (key, value) in map.iter() {
            log.log(&format!("Key:{}.{:?} = Value:{}.{:?}", name, key, name, value));
        }
    }
}
