use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingResponse, CreateBookingRequest, CreatedBookingResponse, UpdateBookingRequest,
    },
};
use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_service()
        .find_booking(user.id())
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<Json<CreatedBookingResponse>> {
    req.validate(&())?;

    registry
        .booking_service()
        .create_booking(user.id(), req.room_id)
        .await
        .map(CreatedBookingResponse::from)
        .map(Json)
}

pub async fn update_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<Json<CreatedBookingResponse>> {
    req.validate(&())?;

    registry
        .booking_service()
        .edit_booking(user.id(), Some(booking_id), req.room_id)
        .await
        .map(CreatedBookingResponse::from)
        .map(Json)
}
