use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use crate::repository::{
    booking::BookingRepository, room::RoomRepository, ticket::TicketRepository,
};

/// Fails with 400 when the request carries no room id (absent or nil).
pub fn require_room_id(room_id: Option<RoomId>) -> AppResult<RoomId> {
    match room_id {
        Some(id) if !id.is_nil() => Ok(id),
        _ => Err(AppError::BadRequestError("roomId is required".into())),
    }
}

pub fn require_booking_id(booking_id: Option<BookingId>) -> AppResult<BookingId> {
    match booking_id {
        Some(id) if !id.is_nil() => Ok(id),
        _ => Err(AppError::BadRequestError("bookingId is required".into())),
    }
}

/// Sequences the eligibility checks and store mutations for the three
/// booking operations. Mutation is always the last step, so a failed
/// operation leaves no side effect behind.
#[derive(new)]
pub struct BookingService {
    booking_repository: Arc<dyn BookingRepository>,
    room_repository: Arc<dyn RoomRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl BookingService {
    pub async fn find_booking(&self, user_id: UserId) -> AppResult<Booking> {
        self.booking_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))
    }

    pub async fn create_booking(
        &self,
        user_id: UserId,
        room_id: Option<RoomId>,
    ) -> AppResult<BookingId> {
        // Input validation comes first; the ticket lookup must not run
        // for a request without a room id.
        let room_id = require_room_id(room_id)?;

        self.verify_hotel_eligibility(user_id).await?;
        self.check_room_capacity(room_id).await?;

        self.booking_repository
            .create(CreateBooking::new(room_id, user_id))
            .await
    }

    pub async fn edit_booking(
        &self,
        user_id: UserId,
        booking_id: Option<BookingId>,
        room_id: Option<RoomId>,
    ) -> AppResult<BookingId> {
        require_booking_id(booking_id)?;
        let room_id = require_room_id(room_id)?;

        // Ownership is checked strictly before capacity, so an edit never
        // probes room occupancy for a user without a booking.
        let booking = self
            .booking_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::ForbiddenOperation("user has no booking".into()))?;
        if booking.booked_by != user_id {
            return Err(AppError::ForbiddenOperation(
                "booking belongs to another user".into(),
            ));
        }

        self.check_room_capacity(room_id).await?;

        // The mutation targets the booking found for the caller, which keeps
        // identity and ownership; only the room changes.
        self.booking_repository
            .update_room(UpdateBookingRoom::new(booking.booking_id, room_id, user_id))
            .await
    }

    /// The ticket rule: the user must be enrolled and hold a paid,
    /// in-person ticket that includes hotel accommodation.
    async fn verify_hotel_eligibility(&self, user_id: UserId) -> AppResult<()> {
        let enrollment = self
            .ticket_repository
            .find_enrollment_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::ForbiddenOperation("user is not enrolled".into()))?;

        let ticket = self
            .ticket_repository
            .find_ticket_by_enrollment_id(enrollment.enrollment_id)
            .await?;
        match ticket {
            Some(ticket) if ticket.is_hotel_eligible() => Ok(()),
            _ => Err(AppError::ForbiddenOperation(
                "ticket does not admit a hotel booking".into(),
            )),
        }
    }

    /// A room at exactly `capacity` occupants is full.
    async fn check_room_capacity(&self, room_id: RoomId) -> AppResult<()> {
        let room = self
            .room_repository
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("room ({room_id}) not found")))?;

        let occupied = self.booking_repository.count_by_room_id(room_id).await?;
        if occupied >= i64::from(room.capacity) {
            return Err(AppError::ForbiddenOperation("room is fully booked".into()));
        }
        Ok(())
    }
}
