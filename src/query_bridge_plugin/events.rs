use bevy::prelude::*;
use super::LocateRequest;

#[derive(Event, Debug, Clone)]
pub struct LocateRequestEvent(pub LocateRequest);

/// Asks for a full reflected dump of one entity to the query log.
#[derive(Event, Debug, Clone, Copy)]
pub struct InspectEntityEvent(pub Entity);
