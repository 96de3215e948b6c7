use tracing::debug;

use crate::models::{Appointment, DoctorProfile, TimeSlot};
use crate::services::availability::is_date_blocked;
use crate::services::calendar;
use crate::services::conflict::{has_appointment_conflict_with, ConflictPolicy};

/// Compute the bookable slots for a doctor on a given date.
///
/// Each available window is partitioned into consecutive sub-intervals of
/// exactly `slot_duration_minutes`; a trailing partial slot is dropped, not
/// truncated. Sub-intervals overlapping an existing appointment are removed.
/// Window order is preserved, slots within a window are chronological.
/// Degrades to an empty list rather than failing: blocked dates, unparseable
/// dates, unconfigured weekdays, and a zero duration all yield `[]`.
pub fn available_slots_for_date(
    doctor: &DoctorProfile,
    date: &str,
    appointments: &[Appointment],
    slot_duration_minutes: u32,
) -> Vec<TimeSlot> {
    available_slots_for_date_with(
        doctor,
        date,
        appointments,
        slot_duration_minutes,
        &ConflictPolicy::default(),
    )
}

pub fn available_slots_for_date_with(
    doctor: &DoctorProfile,
    date: &str,
    appointments: &[Appointment],
    slot_duration_minutes: u32,
    policy: &ConflictPolicy,
) -> Vec<TimeSlot> {
    if slot_duration_minutes == 0 {
        return vec![];
    }

    if is_date_blocked(date, &doctor.blocked_dates) {
        debug!("Date {} is blocked for doctor {}", date, doctor.user_id);
        return vec![];
    }

    let Some(day_index) = calendar::day_of_week(date) else {
        return vec![];
    };
    let Some(windows) = doctor.weekly_schedule.windows_for(day_index) else {
        return vec![];
    };

    let mut slots = Vec::new();

    for window in windows {
        if !window.is_available {
            continue;
        }

        let mut current = window.start_time;
        while let Some(slot_end) = current.plus_minutes(slot_duration_minutes) {
            if slot_end > window.end_time {
                break;
            }

            let conflicts = has_appointment_conflict_with(
                &doctor.user_id,
                date,
                current,
                slot_end,
                appointments,
                policy,
            );
            if !conflicts {
                slots.push(TimeSlot {
                    start_time: current,
                    end_time: slot_end,
                });
            }

            current = slot_end;
        }
    }

    debug!(
        "Found {} available slots for doctor {} on {}",
        slots.len(),
        doctor.user_id,
        date
    );
    slots
}
