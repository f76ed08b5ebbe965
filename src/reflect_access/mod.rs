//! Named field access over `bevy_reflect`.
//!
//! Only the value's own declared fields are searched: named fields of a
//! struct, or positional fields of a tuple struct addressed as `"0"`, `"1"`...
//! Nested values are never traversed. Lookups are total: an absent instance or
//! an unknown field yields `None`, and the best-effort setter silently ignores
//! anything it cannot apply.

use bevy::prelude::*;
use bevy::reflect::{PartialReflect, ReflectMut, ReflectRef, TypeRegistration, TypeRegistry};

use crate::error::AppError;

/// Returns the current value of `field_name` on `instance`.
pub fn get_instance_field<'a, T: Reflect>(
    instance: Option<&'a T>,
    field_name: &str,
) -> Option<&'a dyn PartialReflect> {
    declared_field(instance?.as_partial_reflect(), field_name)
}

/// Typed variant of [`get_instance_field`]; a field of another type reads as `None`.
pub fn get_field_value<'a, T: Reflect, V: Reflect>(
    instance: Option<&'a T>,
    field_name: &str,
) -> Option<&'a V> {
    get_instance_field(instance, field_name)?.try_downcast_ref::<V>()
}

/// Best-effort write of `value` into `field_name`.
pub fn set_instance_field<T: Reflect>(
    instance: Option<&mut T>,
    field_name: &str,
    value: Option<&dyn PartialReflect>,
) {
    let (Some(instance), Some(value)) = (instance, value) else {
        return;
    };
    if let Err(err) = try_set_instance_field(instance, field_name, value) {
        debug!("Reflect: ignored write to '{}': {}", field_name, err);
    }
}

pub fn try_set_instance_field<T: Reflect>(
    instance: &mut T,
    field_name: &str,
    value: &dyn PartialReflect,
) -> Result<(), AppError> {
    apply_to_field(instance.as_partial_reflect_mut(), field_name, value)
}

/// Reads a field of a registered component, resolving the component type by
/// its full or short type path.
pub fn get_component_field<'w>(
    world: &'w World,
    entity: Entity,
    type_path: &str,
    field_name: &str,
) -> Option<&'w dyn PartialReflect> {
    let registry = world.get_resource::<AppTypeRegistry>()?.read();
    let reflect_component = find_registration(&registry, type_path)?.data::<ReflectComponent>()?;
    let entity_ref = world.get_entity(entity).ok()?;
    let component = reflect_component.reflect(entity_ref)?;
    declared_field(component.as_partial_reflect(), field_name)
}

/// Best-effort write into a field of a registered component.
pub fn set_component_field(
    world: &mut World,
    entity: Entity,
    type_path: &str,
    field_name: &str,
    value: &dyn PartialReflect,
) {
    if let Err(err) = try_set_component_field(world, entity, type_path, field_name, value) {
        debug!("Reflect: ignored write to {}::{} on {:?}: {}", type_path, field_name, entity, err);
    }
}

pub fn try_set_component_field(
    world: &mut World,
    entity: Entity,
    type_path: &str,
    field_name: &str,
    value: &dyn PartialReflect,
) -> Result<(), AppError> {
    let registry = world
        .get_resource::<AppTypeRegistry>()
        .ok_or_else(|| AppError::UnregisteredComponent(type_path.to_string()))?
        .clone();
    let registry = registry.read();
    let reflect_component = find_registration(&registry, type_path)
        .and_then(|registration| registration.data::<ReflectComponent>())
        .ok_or_else(|| AppError::UnregisteredComponent(type_path.to_string()))?;

    let mut entity_mut = world
        .get_entity_mut(entity)
        .map_err(|_| AppError::MissingEntity(entity))?;
    let mut component = reflect_component
        .reflect_mut(&mut entity_mut)
        .ok_or_else(|| AppError::FieldNotFound {
            type_path: type_path.to_string(),
            field: field_name.to_string(),
        })?;
    apply_to_field(component.as_partial_reflect_mut(), field_name, value)
}

fn find_registration<'r>(registry: &'r TypeRegistry, type_path: &str) -> Option<&'r TypeRegistration> {
    registry
        .get_with_type_path(type_path)
        .or_else(|| registry.get_with_short_type_path(type_path))
}

fn declared_field<'a>(value: &'a dyn PartialReflect, field_name: &str) -> Option<&'a dyn PartialReflect> {
    match value.reflect_ref() {
        ReflectRef::Struct(s) => s.field(field_name),
        ReflectRef::TupleStruct(t) => t.field(field_name.parse().ok()?),
        _ => None,
    }
}

fn apply_to_field(
    target: &mut dyn PartialReflect,
    field_name: &str,
    value: &dyn PartialReflect,
) -> Result<(), AppError> {
    let type_path = target
        .get_represented_type_info()
        .map_or("?", |info| info.type_path())
        .to_string();
    let not_found = || AppError::FieldNotFound {
        type_path: type_path.clone(),
        field: field_name.to_string(),
    };

    let field = match target.reflect_mut() {
        ReflectMut::Struct(s) => s.field_mut(field_name),
        ReflectMut::TupleStruct(t) => match field_name.parse::<usize>() {
            Ok(index) => t.field_mut(index),
            Err(_) => None,
        },
        _ => None,
    }
    .ok_or_else(not_found)?;

    field.try_apply(value).map_err(|source| AppError::FieldApply {
        field: field_name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Reflect, Default, Debug)]
    struct Backpack {
        owner: String,
        weight: f32,
        slots: u8,
    }

    #[derive(Reflect, Default, Debug)]
    struct Coins(u32);

    #[test]
    fn reads_declared_fields_by_name() {
        let pack = Backpack { owner: "Rowan".into(), weight: 12.5, slots: 20 };

        assert_eq!(get_field_value::<_, String>(Some(&pack), "owner").map(String::as_str), Some("Rowan"));
        assert_eq!(get_field_value::<_, f32>(Some(&pack), "weight"), Some(&12.5));
        assert!(get_instance_field(Some(&pack), "missing").is_none());
        assert!(get_field_value::<_, u32>(Some(&pack), "slots").is_none());
    }

    #[test]
    fn absent_instance_reads_as_none() {
        assert!(get_instance_field::<Backpack>(None, "owner").is_none());
    }

    #[test]
    fn set_then_get_returns_the_written_value() {
        let mut pack = Backpack::default();
        set_instance_field(Some(&mut pack), "slots", Some(&42u8));
        assert_eq!(get_field_value::<_, u8>(Some(&pack), "slots"), Some(&42));

        let mut coins = Coins(5);
        set_instance_field(Some(&mut coins), "0", Some(&900u32));
        assert_eq!(get_field_value::<_, u32>(Some(&coins), "0"), Some(&900));
    }

    #[test]
    fn setter_ignores_missing_fields_and_absent_values() {
        let mut pack = Backpack { owner: "Rowan".into(), ..Default::default() };

        set_instance_field(Some(&mut pack), "missing", Some(&1u8));
        set_instance_field(Some(&mut pack), "owner", None);
        set_instance_field(Some(&mut pack), "owner", Some(&7u64));
        set_instance_field::<Backpack>(None, "owner", Some(&1u8));

        assert_eq!(pack.owner, "Rowan");
    }

    #[test]
    fn strict_setter_reports_why_it_failed() {
        let mut pack = Backpack::default();

        let missing = try_set_instance_field(&mut pack, "lid", &true);
        assert!(matches!(
            missing,
            Err(AppError::FieldNotFound { type_path, field }) if type_path.ends_with("Backpack") && field == "lid"
        ));

        let mismatched = try_set_instance_field(&mut pack, "weight", &String::from("heavy"));
        assert!(matches!(mismatched, Err(AppError::FieldApply { .. })));
    }
}
