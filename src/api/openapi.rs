//! OpenAPI document covering every REST endpoint.

use utoipa::OpenApi;

use super::handlers::{event, system};
use crate::domain::{Event, EventChanges};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI document for the gateway.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "events-gateway",
        description = "CRUD interface over event records backed by a pluggable storage driver."
    ),
    paths(
        event::list_events,
        event::get_event,
        event::create_event,
        event::update_event,
        event::delete_event,
        system::index_handler,
        system::health_handler,
    ),
    components(schemas(Event, EventChanges, ErrorResponse, ErrorBody)),
    tags(
        (name = "Events", description = "Event records"),
        (name = "System", description = "Service endpoints"),
    )
)]
pub struct ApiDoc;
