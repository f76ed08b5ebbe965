use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Network object id assigned by the server to dynamic objects and mobiles.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

/// Id of the container (backpack, chest, corpse...) an object currently sits in.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct ContainerId(pub u64);

/// Id of a static world object baked into the map.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct PermanentId(pub i32);

#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component, Default)]
pub struct DynamicObject;

#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component, Default)]
pub struct MobileInstance;

/// Present on objects the client has a full network representation for.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component, Default)]
pub struct ClientObject;

/// The avatar the local client controls; its transform is the reference point
/// for proximity queries.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component, Default)]
pub struct ControlledPlayer;

#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct FloatingPanel {
    pub panel_id: String,
    pub visible: bool,
}
