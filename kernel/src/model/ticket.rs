use crate::model::id::{EnrollmentId, TicketId, UserId};

/// A user's registration record for the event. Read-only here.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

#[derive(Debug, Clone)]
pub struct TicketType {
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl Ticket {
    /// A ticket admits a hotel booking only when it is paid, in-person,
    /// and its type includes hotel accommodation.
    pub fn is_hotel_eligible(&self) -> bool {
        self.status == TicketStatus::Paid
            && !self.ticket_type.is_remote
            && self.ticket_type.includes_hotel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            ticket_id: TicketId::new(),
            enrollment_id: EnrollmentId::new(),
            status,
            ticket_type: TicketType {
                is_remote,
                includes_hotel,
            },
        }
    }

    #[test]
    fn paid_in_person_hotel_ticket_is_eligible() {
        assert!(ticket(TicketStatus::Paid, false, true).is_hotel_eligible());
    }

    #[test]
    fn reserved_ticket_is_not_eligible() {
        assert!(!ticket(TicketStatus::Reserved, false, true).is_hotel_eligible());
    }

    #[test]
    fn remote_ticket_is_not_eligible() {
        assert!(!ticket(TicketStatus::Paid, true, true).is_hotel_eligible());
    }

    #[test]
    fn ticket_without_hotel_is_not_eligible() {
        assert!(!ticket(TicketStatus::Paid, false, false).is_hotel_eligible());
    }
}
