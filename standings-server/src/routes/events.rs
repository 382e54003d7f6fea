//! Event endpoints
//!
//! All four verbs live on one resource:
//! - GET    /api/events — list events
//! - POST   /api/events — create event
//! - PUT    /api/events — update an existing event
//! - DELETE /api/events — delete event by id

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use standings_core::{Event, EventInput};

use crate::routes::{ApiJson, AppError, MutationError, MutationJson};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/events",
        get(list_events)
            .post(create_event)
            .put(update_event)
            .delete(delete_event),
    )
}

/// Request body for create and update
#[derive(Deserialize)]
pub struct EventRequest {
    #[serde(rename = "eventData")]
    pub event_data: EventInput,
}

/// Request body for delete
#[derive(Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

/// Response from create and update
#[derive(Serialize)]
pub struct EventResponse {
    pub success: bool,
    pub message: String,
    pub event: Event,
}

/// Response from delete
#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /api/events - List all events
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.store.list().await?;
    Ok(Json(events))
}

/// POST /api/events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    MutationJson(req): MutationJson<EventRequest>,
) -> Result<Json<EventResponse>, MutationError> {
    let event = state.store.create(req.event_data).await?;

    Ok(Json(EventResponse {
        success: true,
        message: "Event created successfully".to_string(),
        event,
    }))
}

/// PUT /api/events - Replace an existing event
async fn update_event(
    State(state): State<AppState>,
    MutationJson(req): MutationJson<EventRequest>,
) -> Result<Json<EventResponse>, MutationError> {
    let event = state.store.upsert(req.event_data).await?;

    Ok(Json(EventResponse {
        success: true,
        message: "Event updated successfully".to_string(),
        event,
    }))
}

/// DELETE /api/events - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DeleteRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.store.delete(&req.id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
