use crate::models::{AvailabilityWindow, DoctorProfile, TimeOfDay};
use crate::services::calendar;

/// Whether `date` falls on one of the doctor's blocked days.
///
/// Blocked entries may be stored as full timestamps; both sides are reduced
/// to their UTC calendar day before comparison. An empty set or an
/// unparseable query date is never blocked.
pub fn is_date_blocked(date: &str, blocked_dates: &[String]) -> bool {
    let Some(day) = calendar::canonical_day(date) else {
        return false;
    };

    blocked_dates
        .iter()
        .any(|blocked| calendar::canonical_day(blocked) == Some(day))
}

/// Whether the proposed `[start, end)` interval is fully contained in a
/// single window that is marked available. Partial overlap is rejected, not
/// truncated.
pub fn is_time_in_range(start: TimeOfDay, end: TimeOfDay, window: &AvailabilityWindow) -> bool {
    window.is_available && window.start_time <= start && end <= window.end_time
}

/// Whether the doctor's recurring schedule admits the exact proposed slot,
/// ignoring existing bookings. Conflict checking is a separate concern, see
/// `services::conflict`.
pub fn is_slot_available(
    doctor: Option<&DoctorProfile>,
    date: &str,
    start: TimeOfDay,
    end: TimeOfDay,
) -> bool {
    let Some(doctor) = doctor else {
        return false;
    };

    if is_date_blocked(date, &doctor.blocked_dates) {
        return false;
    }

    let Some(day_index) = calendar::day_of_week(date) else {
        return false;
    };
    let Some(windows) = doctor.weekly_schedule.windows_for(day_index) else {
        return false;
    };

    windows
        .iter()
        .any(|window| is_time_in_range(start, end, window))
}
