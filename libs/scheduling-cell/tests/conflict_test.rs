// libs/scheduling-cell/tests/conflict_test.rs

use scheduling_cell::models::{Appointment, AppointmentStatus, TimeOfDay};
use scheduling_cell::services::conflict::{
    has_appointment_conflict, has_appointment_conflict_with, ConflictPolicy,
};

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn appointment(doctor_id: &str, date: &str, start: &str, end: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: format!("appt-{}-{}", date, start),
        doctor_id: doctor_id.to_string(),
        patient_id: "patient-1".to_string(),
        appointment_date: date.to_string(),
        start_time: t(start),
        end_time: t(end),
        status,
        reason: None,
    }
}

fn booked_day() -> Vec<Appointment> {
    vec![
        appointment("doctor123", "2023-06-12T00:00:00Z", "10:00", "11:00", AppointmentStatus::Confirmed),
        appointment("doctor123", "2023-06-12T00:00:00Z", "14:00", "15:00", AppointmentStatus::Pending),
    ]
}

#[test]
fn exact_overlap_conflicts() {
    let appointments = booked_day();
    assert!(has_appointment_conflict(
        "doctor123",
        "2023-06-12",
        t("10:00"),
        t("11:00"),
        &appointments
    ));
}

#[test]
fn partial_overlap_conflicts() {
    let appointments = booked_day();
    assert!(has_appointment_conflict("doctor123", "2023-06-12", t("10:30"), t("11:30"), &appointments));
    assert!(has_appointment_conflict("doctor123", "2023-06-12", t("09:30"), t("10:30"), &appointments));
    // Proposed slot fully containing the appointment
    assert!(has_appointment_conflict("doctor123", "2023-06-12", t("13:30"), t("15:30"), &appointments));
}

#[test]
fn adjacent_slots_do_not_conflict() {
    let appointments = booked_day();
    // Half-open intervals: an 11:00 start touches but does not overlap
    assert!(!has_appointment_conflict("doctor123", "2023-06-12", t("11:00"), t("12:00"), &appointments));
    assert!(!has_appointment_conflict("doctor123", "2023-06-12", t("11:30"), t("12:30"), &appointments));
    assert!(!has_appointment_conflict("doctor123", "2023-06-12", t("09:00"), t("10:00"), &appointments));
}

#[test]
fn other_doctor_never_conflicts() {
    let appointments = booked_day();
    assert!(!has_appointment_conflict("doctor456", "2023-06-12", t("10:00"), t("11:00"), &appointments));
}

#[test]
fn other_day_never_conflicts() {
    let appointments = booked_day();
    assert!(!has_appointment_conflict("doctor123", "2023-06-13", t("10:00"), t("11:00"), &appointments));
}

#[test]
fn appointment_dates_match_across_formats() {
    // Stored as a full timestamp, queried as a bare date and vice versa
    let appointments = booked_day();
    assert!(has_appointment_conflict("doctor123", "2023-06-12T08:15:00Z", t("10:00"), t("11:00"), &appointments));
}

#[test]
fn unparseable_query_date_never_conflicts() {
    let appointments = booked_day();
    assert!(!has_appointment_conflict("doctor123", "someday", t("10:00"), t("11:00"), &appointments));
}

#[test]
fn cancelled_appointments_still_block_by_default() {
    let appointments = vec![appointment(
        "doctor123",
        "2023-06-12",
        "10:00",
        "11:00",
        AppointmentStatus::Cancelled,
    )];
    assert!(has_appointment_conflict("doctor123", "2023-06-12", t("10:00"), t("11:00"), &appointments));
}

#[test]
fn policy_can_exempt_cancelled_and_rejected() {
    let appointments = vec![
        appointment("doctor123", "2023-06-12", "10:00", "11:00", AppointmentStatus::Cancelled),
        appointment("doctor123", "2023-06-12", "14:00", "15:00", AppointmentStatus::Confirmed),
    ];
    let policy = ConflictPolicy::ignoring([AppointmentStatus::Cancelled, AppointmentStatus::Rejected]);

    assert!(!has_appointment_conflict_with(
        "doctor123",
        "2023-06-12",
        t("10:00"),
        t("11:00"),
        &appointments,
        &policy
    ));
    // Active appointments still conflict under the same policy
    assert!(has_appointment_conflict_with(
        "doctor123",
        "2023-06-12",
        t("14:30"),
        t("15:30"),
        &appointments,
        &policy
    ));
}

#[test]
fn empty_ledger_never_conflicts() {
    assert!(!has_appointment_conflict("doctor123", "2023-06-12", t("10:00"), t("11:00"), &[]));
}
