pub mod availability;
pub mod calendar;
pub mod conflict;
pub mod slots;
