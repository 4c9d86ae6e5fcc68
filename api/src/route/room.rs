use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::room::show_hotel_rooms;

pub fn build_room_routers() -> Router<AppRegistry> {
    let room_routers = Router::new().route("/:hotel_id/rooms", get(show_hotel_rooms));

    Router::new().nest("/hotels", room_routers)
}
