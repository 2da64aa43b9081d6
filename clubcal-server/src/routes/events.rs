//! Event listing and mutation endpoints

use axum::{
    Json, Router,
    extract::{Query, State},
    http::HeaderMap,
    routing::get,
};
use serde::{Deserialize, Serialize};

use clubcal_core::month::parse_day;
use clubcal_core::{ClubcalError, Event, EventDraft, Month};

use crate::routes::AppError;
use crate::routes::admin::require_admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/events",
        get(list_events).post(create_event).delete(delete_event),
    )
}

/// Optional filters for the list endpoint
#[derive(Deserialize)]
pub struct ListQuery {
    /// YYYY-MM: one month of events (the month-list and print views)
    month: Option<String>,
    /// YYYY-MM-DD: one day of events (the calendar view)
    date: Option<String>,
}

/// GET /events - List events, optionally filtered by month or day.
/// Unfiltered, returns the whole stored list in file order.
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Event>>, AppError> {
    let store = state.clubcal()?.store();

    let events = if let Some(month) = &query.month {
        let month = Month::parse(month).map_err(|e| AppError::bad_request(e.to_string()))?;
        store.events_in(&month)?
    } else if let Some(date) = &query.date {
        let day = parse_day(date).map_err(|e| AppError::bad_request(e.to_string()))?;
        store.events_on(day)?
    } else {
        store.load()?
    };

    Ok(Json(events))
}

/// POST /events - Create a new event (admin only)
async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, AppError> {
    let clubcal = state.clubcal()?;
    require_admin(&clubcal, &headers)?;

    let event = clubcal.store().add(draft).map_err(|e| match e {
        e @ ClubcalError::MissingField(_) => AppError::bad_request(e.to_string()),
        other => AppError::from(other),
    })?;
    tracing::info!(id = %event.id, title = %event.title, "event created");

    Ok(Json(event))
}

/// Request body for deleting an event
#[derive(Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// DELETE /events - Delete an event by id (admin only).
/// Deleting an id that is not stored still succeeds.
async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    let clubcal = state.clubcal()?;
    require_admin(&clubcal, &headers)?;

    let removed = clubcal.store().delete(&req.id)?;
    tracing::info!(id = %req.id, removed, "event deleted");

    Ok(Json(DeleteResponse { success: true }))
}
