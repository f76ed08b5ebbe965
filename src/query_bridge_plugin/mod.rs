use bevy::prelude::*;
use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

pub mod events;
pub mod systems;

pub use events::*;
pub use systems::*;

use crate::locator::Found;

// Data sent over the channels by code living outside the Bevy schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocateQuery {
    PanelByName { name: String },
    DynamicObjectsByName { name: String, container_id: Option<u64> },
    DynamicObject { object_id: u64, container_id: Option<u64> },
    ClientObject { object_id: u64, container_id: Option<u64> },
    PermanentObject { permanent_id: i32 },
    PermanentObjectsByName { name: String, distance: Option<f32> },
    NearbyMobiles { distance: f32 },
    Mobile { object_id: u64 },
    MobilesByName { name: String, distance: Option<f32> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocateRequest {
    pub request_id: u64,
    pub query: LocateQuery,
}

#[derive(Debug, Clone)]
pub struct LocateResponse {
    pub request_id: u64,
    pub matches: Found,
    pub answered_at: DateTime<Utc>,
}

pub struct QueryBridgePlugin;

impl Plugin for QueryBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<LocateRequestEvent>()
            .add_event::<InspectEntityEvent>()
            .add_systems(Update, (
                ingest_locate_requests_from_channel_system,
                answer_locate_requests_system,
                inspect_entities_system,
            ).chain());

        info!("QueryBridgePlugin loaded.");
    }
}

// Resources holding the Bevy-side channel ends
#[derive(Resource)]
pub struct LocateRequestChannel(pub Receiver<LocateRequest>);

#[derive(Resource)]
pub struct LocateResponseChannel(pub Sender<LocateResponse>);
