use crate::models::{Appointment, AppointmentStatus, TimeOfDay};
use crate::services::calendar;

/// Which appointment statuses are exempt from conflict detection.
///
/// The default exempts none: a cancelled appointment still blocks its slot
/// until the caller opts in to releasing it.
#[derive(Debug, Clone, Default)]
pub struct ConflictPolicy {
    pub ignored_statuses: Vec<AppointmentStatus>,
}

impl ConflictPolicy {
    pub fn ignoring(statuses: impl IntoIterator<Item = AppointmentStatus>) -> Self {
        Self {
            ignored_statuses: statuses.into_iter().collect(),
        }
    }
}

/// Whether the proposed `[start, end)` slot overlaps any existing
/// appointment for the same doctor on the same calendar day. Appointments
/// for other doctors or other days never participate; every status counts.
pub fn has_appointment_conflict(
    doctor_id: &str,
    date: &str,
    start: TimeOfDay,
    end: TimeOfDay,
    appointments: &[Appointment],
) -> bool {
    has_appointment_conflict_with(
        doctor_id,
        date,
        start,
        end,
        appointments,
        &ConflictPolicy::default(),
    )
}

/// As `has_appointment_conflict`, with appointments in the policy's ignored
/// statuses exempted.
pub fn has_appointment_conflict_with(
    doctor_id: &str,
    date: &str,
    start: TimeOfDay,
    end: TimeOfDay,
    appointments: &[Appointment],
    policy: &ConflictPolicy,
) -> bool {
    let Some(day) = calendar::canonical_day(date) else {
        return false;
    };

    appointments.iter().any(|appointment| {
        appointment.doctor_id == doctor_id
            && !policy.ignored_statuses.contains(&appointment.status)
            && calendar::canonical_day(&appointment.appointment_date) == Some(day)
            // Half-open interval overlap
            && start < appointment.end_time
            && appointment.start_time < end
    })
}
