use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    data::room::RoomRepository,
    error::AppError,
    model::room::RoomDto,
    service::availability::AvailabilityChecker,
    state::AppState,
};

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

#[derive(Serialize)]
pub struct AvailabilityDto {
    pub available: bool,
}

/// GET /api/rooms
/// List the room catalog
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms: Vec<RoomDto> = RoomRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(RoomDto::from)
        .collect();

    Ok(Json(rooms))
}

/// GET /api/rooms/{id}
/// Get a single room
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok(Json(RoomDto::from(room)))
}

/// GET /api/rooms/{id}/availability?check_in_date=..&check_out_date=..
/// Whether the room is free for the given date range
pub async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    RoomRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    let available = AvailabilityChecker::new(&state.db)
        .is_available(id, query.check_in_date, query.check_out_date, None)
        .await?;

    Ok(Json(AvailabilityDto { available }))
}

/// GET /api/rooms/{id}/booked-dates
/// All dates blocked on the room, both stay boundaries included
pub async fn get_booked_dates(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    RoomRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    let dates: Vec<NaiveDate> = AvailabilityChecker::new(&state.db)
        .booked_dates(id)
        .await?
        .into_iter()
        .collect();

    Ok(Json(dates))
}
