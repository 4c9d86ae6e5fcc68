use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{RoomId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::BookingId;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // The user's current booking, with the room snapshot embedded.
    // A user holds at most one booking, so the first match is the booking.
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
    // Occupant count of a room
    async fn count_by_room_id(&self, room_id: RoomId) -> AppResult<i64>;
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId>;
}
