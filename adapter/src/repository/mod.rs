pub mod booking;
pub mod health;
pub mod room;
pub mod ticket;
