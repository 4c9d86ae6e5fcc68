use crate::{extractor::AuthorizedUser, model::room::RoomsResponse};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::HotelId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_hotel_rooms(
    _user: AuthorizedUser,
    Path(hotel_id): Path<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .room_repository()
        .find_by_hotel_id(hotel_id)
        .await
        .map(RoomsResponse::from)
        .map(Json)
}
