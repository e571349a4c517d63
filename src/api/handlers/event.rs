//! Event CRUD handlers: list, get, create, update, delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::{Event, EventChanges, EventId};
use crate::error::{ApiError, ErrorResponse};

/// `GET /events` — List every event.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the driver fails.
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    summary = "List events",
    description = "Returns every stored event in insertion order.",
    responses(
        (status = 200, description = "All events", body = Vec<Event>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.event_service.list_events().await?;
    Ok(Json(events))
}

/// `GET /event/{id}` — Get one event.
///
/// # Errors
///
/// Returns [`ApiError::EventNotFound`] if no event has the id.
#[utoipa::path(
    get,
    path = "/event/{id}",
    tag = "Events",
    summary = "Get an event",
    description = "Returns the first event with the given id.",
    params(
        ("id" = String, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "The event", body = Event),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let event = state.event_service.get_event(&EventId::from(id)).await?;
    Ok(Json(event))
}

/// `POST /event` — Create an event.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] if the body is not a JSON event.
#[utoipa::path(
    post,
    path = "/event",
    tag = "Events",
    summary = "Create an event",
    description = "Stores a new event. The id is kept as sent; when it is missing or empty a UUID is generated. Ids are not checked for uniqueness.",
    request_body = Event,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<Event>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(event) = payload?;
    let created = state.event_service.create_event(event).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /event/{id}` — Replace title and description.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] on a malformed body and
/// [`ApiError::EventNotFound`] if no event has the id.
#[utoipa::path(
    patch,
    path = "/event/{id}",
    tag = "Events",
    summary = "Update an event",
    description = "Overwrites title and description of the first event with the given id. The id itself never changes; absent fields become empty strings.",
    params(
        ("id" = String, Path, description = "Event identifier"),
    ),
    request_body = EventChanges,
    responses(
        (status = 202, description = "Event updated", body = Event),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EventChanges>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(changes) = payload?;
    let updated = state
        .event_service
        .update_event(&EventId::from(id), changes)
        .await?;
    Ok((StatusCode::ACCEPTED, Json(updated)))
}

/// `DELETE /event/{id}` — Remove an event.
///
/// # Errors
///
/// Returns [`ApiError::EventNotFound`] if no event has the id.
#[utoipa::path(
    delete,
    path = "/event/{id}",
    tag = "Events",
    summary = "Delete an event",
    description = "Removes every event with the given id and returns a plain-text confirmation.",
    params(
        ("id" = String, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "Event deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = EventId::from(id);
    state.event_service.delete_event(&id).await?;
    Ok((
        StatusCode::OK,
        format!("The event with the ID {id} has been deleted successfully"),
    ))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/event", post(create_event))
        .route(
            "/event/{id}",
            get(get_event).patch(update_event).delete(delete_event),
        )
}
