use crate::model::{
    id::{EnrollmentId, UserId},
    ticket::{Enrollment, Ticket},
};
use async_trait::async_trait;
use shared::error::AppResult;

/// Read-only facts about a user's event enrollment and ticket entitlement.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_enrollment_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>>;
    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>>;
}
