use kernel::model::{
    booking::{Booking, BookingRoom},
    id::{BookingId, HotelId, RoomId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

// A booking joined with its room; the room columns are aliased to keep the
// two sets of timestamps apart.
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub room_name: String,
    pub capacity: i32,
    pub room_created_at: DateTime<Utc>,
    pub room_updated_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            created_at,
            updated_at,
            room_id,
            hotel_id,
            room_name,
            capacity,
            room_created_at,
            room_updated_at,
        } = value;
        Booking {
            booking_id,
            booked_by: user_id,
            created_at,
            updated_at,
            room: BookingRoom {
                room_id,
                hotel_id,
                room_name,
                capacity,
                created_at: room_created_at,
                updated_at: room_updated_at,
            },
        }
    }
}
