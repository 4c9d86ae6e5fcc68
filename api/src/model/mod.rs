pub mod booking;
pub mod room;
