use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingRoom},
    id::{BookingId, HotelId, RoomId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    // Absent or nil ids are rejected by the service, not by deserialization
    #[garde(skip)]
    #[serde(default)]
    pub room_id: Option<RoomId>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(skip)]
    #[serde(default)]
    pub room_id: Option<RoomId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    #[serde(rename = "Room")]
    pub room: BookingRoomResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id, room, ..
        } = value;
        Self {
            id: booking_id,
            room: room.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRoomResponse {
    pub id: RoomId,
    pub name: String,
    pub hotel_id: HotelId,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingRoom> for BookingRoomResponse {
    fn from(value: BookingRoom) -> Self {
        let BookingRoom {
            room_id,
            hotel_id,
            room_name,
            capacity,
            created_at,
            updated_at,
        } = value;
        Self {
            id: room_id,
            name: room_name,
            hotel_id,
            capacity,
            created_at,
            updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookingResponse {
    pub booking_id: BookingId,
}

impl From<BookingId> for CreatedBookingResponse {
    fn from(booking_id: BookingId) -> Self {
        Self { booking_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kernel::model::id::UserId;

    #[test]
    fn create_request_tolerates_a_missing_room_id() {
        let req: CreateBookingRequest = serde_json::from_str("{}").unwrap();
        assert!(req.room_id.is_none());

        let room_id = RoomId::new();
        let req: CreateBookingRequest =
            serde_json::from_str(&format!(r#"{{"roomId": "{room_id}"}}"#)).unwrap();
        assert_eq!(req.room_id, Some(room_id));
    }

    #[test]
    fn booking_response_keeps_the_wire_shape() {
        let booking = Booking {
            booking_id: BookingId::new(),
            booked_by: UserId::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            room: BookingRoom {
                room_id: RoomId::new(),
                hotel_id: HotelId::new(),
                room_name: "Ocean View 713".into(),
                capacity: 3,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        };
        let json = serde_json::to_value(BookingResponse::from(booking)).unwrap();

        assert!(json.get("id").is_some());
        let room = json.get("Room").unwrap();
        assert!(room.get("hotelId").is_some());
        assert_eq!(room.get("capacity").unwrap(), 3);
    }

    #[test]
    fn created_booking_response_uses_camel_case() {
        let json = serde_json::to_value(CreatedBookingResponse::from(BookingId::new())).unwrap();
        assert!(json.get("bookingId").is_some());
    }
}
