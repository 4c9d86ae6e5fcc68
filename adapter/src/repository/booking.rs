use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                b.booking_id,
                b.user_id,
                b.created_at,
                b.updated_at,
                r.room_id,
                r.hotel_id,
                r.room_name,
                r.capacity,
                r.created_at AS room_created_at,
                r.updated_at AS room_updated_at
                FROM bookings AS b
                INNER JOIN rooms AS r ON b.room_id = r.room_id
                WHERE b.user_id = $1
                ORDER BY b.created_at ASC
                LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    async fn count_by_room_id(&self, room_id: RoomId) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*) FROM bookings WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(count)
    }

    // The capacity decision is re-taken inside a SERIALIZABLE transaction so
    // that two concurrent creates against the last free slot cannot both
    // commit. A room that filled up between the engine's check and this call
    // surfaces as ForbiddenOperation.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        self.check_room_has_vacancy(&mut tx, event.room_id).await?;

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings (booking_id, room_id, user_id)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(booking_id)
        .bind(event.room_id)
        .bind(event.booked_by)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        // The booking must exist and belong to the requesting user.
        let owned: Option<(BookingId,)> = sqlx::query_as(
            r#"
                SELECT booking_id
                FROM bookings
                WHERE booking_id = $1 AND user_id = $2
            "#,
        )
        .bind(event.booking_id)
        .bind(event.booked_by)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if owned.is_none() {
            return Err(AppError::ForbiddenOperation(format!(
                "booking ({}) is not owned by the requesting user",
                event.booking_id
            )));
        }

        self.check_room_has_vacancy(&mut tx, event.room_id).await?;

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET room_id = $1, updated_at = NOW()
                WHERE booking_id = $2
            "#,
        )
        .bind(event.room_id)
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(event.booking_id)
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    // Occupancy guard shared by create and update_room: the room must exist
    // and its occupant count must be strictly below its capacity.
    async fn check_room_has_vacancy(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        room_id: RoomId,
    ) -> AppResult<()> {
        let room: Option<(i32,)> = sqlx::query_as(
            r#"
                SELECT capacity FROM rooms WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some((capacity,)) = room else {
            return Err(AppError::EntityNotFound(format!(
                "room ({room_id}) not found"
            )));
        };

        let occupied: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*) FROM bookings WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if occupied >= i64::from(capacity) {
            return Err(AppError::ForbiddenOperation(format!(
                "room ({room_id}) is fully booked"
            )));
        }

        Ok(())
    }
}
