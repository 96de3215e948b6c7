pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod store;

// Re-export the core model and engine surface for external use
pub use models::{
    Appointment, AppointmentStatus, AvailabilityWindow, DoctorProfile, TimeOfDay, TimeSlot,
    WeeklySchedule,
};
pub use services::availability::{is_date_blocked, is_slot_available, is_time_in_range};
pub use services::calendar::{canonical_day, canonical_day_key, day_of_week};
pub use services::conflict::{has_appointment_conflict, ConflictPolicy};
pub use services::slots::available_slots_for_date;
