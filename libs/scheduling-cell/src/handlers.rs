use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{
    Appointment, AppointmentStatus, AvailableSlotsQuery, AvailableSlotsResponse,
    BookAppointmentRequest, DoctorProfile, SlotCheckRequest, SlotCheckResponse,
    UpdateScheduleRequest, WeeklySchedule,
};
use crate::services::{availability, conflict, slots};
use crate::store::{AppointmentLedger, DoctorDirectory, InMemoryStore};

#[derive(Clone)]
pub struct SchedulingState {
    pub doctors: Arc<dyn DoctorDirectory>,
    pub appointments: Arc<dyn AppointmentLedger>,
    pub default_slot_duration_minutes: u32,
}

impl SchedulingState {
    /// State backed by a single in-process store for both seams.
    pub fn in_memory(config: &AppConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            doctors: store.clone(),
            appointments: store,
            default_slot_duration_minutes: config.default_slot_duration_minutes,
        }
    }
}

async fn require_doctor(
    state: &SchedulingState,
    doctor_id: &str,
) -> Result<DoctorProfile, AppError> {
    state
        .doctors
        .doctor_profile(doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))
}

fn validate_schedule(schedule: &WeeklySchedule) -> Result<(), AppError> {
    for day_index in 0..7 {
        let day_name = WeeklySchedule::day_name(day_index).unwrap_or("unknown");
        for window in schedule.windows_for(day_index).unwrap_or(&[]) {
            if window.start_time >= window.end_time {
                return Err(AppError::ValidationError(format!(
                    "Start time must be before end time ({}: {} - {})",
                    day_name, window.start_time, window.end_time
                )));
            }
        }
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<SchedulingState>,
    Path(doctor_id): Path<String>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    debug!(
        "Calculating available slots for doctor {} on {}",
        doctor_id, query.date
    );

    let doctor = require_doctor(&state, &doctor_id).await?;
    let appointments = state
        .appointments
        .appointments_for_doctor(&doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let duration = query
        .duration_minutes
        .unwrap_or(state.default_slot_duration_minutes);
    let slots = slots::available_slots_for_date(&doctor, &query.date, &appointments, duration);

    Ok(Json(AvailableSlotsResponse {
        doctor_id,
        date: query.date,
        slot_duration_minutes: duration,
        total: slots.len(),
        slots,
    }))
}

#[axum::debug_handler]
pub async fn check_slot(
    State(state): State<SchedulingState>,
    Path(doctor_id): Path<String>,
    Json(request): Json<SlotCheckRequest>,
) -> Result<Json<SlotCheckResponse>, AppError> {
    let doctor = require_doctor(&state, &doctor_id).await?;
    let appointments = state
        .appointments
        .appointments_for_doctor(&doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let within_schedule = availability::is_slot_available(
        Some(&doctor),
        &request.date,
        request.start_time,
        request.end_time,
    );
    let has_conflict = conflict::has_appointment_conflict(
        &doctor_id,
        &request.date,
        request.start_time,
        request.end_time,
        &appointments,
    );

    Ok(Json(SlotCheckResponse {
        within_schedule,
        has_conflict,
        available: within_schedule && !has_conflict,
    }))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<SchedulingState>,
    Path(doctor_id): Path<String>,
) -> Result<Json<DoctorProfile>, AppError> {
    let doctor = require_doctor(&state, &doctor_id).await?;
    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<SchedulingState>,
    Path(doctor_id): Path<String>,
    Json(request): Json<UpdateScheduleRequest>,
) -> Result<Json<DoctorProfile>, AppError> {
    debug!("Updating schedule for doctor: {}", doctor_id);

    validate_schedule(&request.weekly_schedule)?;

    let profile = state
        .doctors
        .upsert_schedule(&doctor_id, request.weekly_schedule, request.blocked_dates)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(profile))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<SchedulingState>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state
        .appointments
        .appointments_for_doctor(&doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<SchedulingState>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    debug!(
        "Booking request for doctor {} on {} at {}",
        request.doctor_id, request.appointment_date, request.start_time
    );

    if request.start_time >= request.end_time {
        return Err(AppError::ValidationError(
            "Start time must be before end time".to_string(),
        ));
    }

    let doctor = require_doctor(&state, &request.doctor_id).await?;
    let appointments = state
        .appointments
        .appointments_for_doctor(&request.doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let within_schedule = availability::is_slot_available(
        Some(&doctor),
        &request.appointment_date,
        request.start_time,
        request.end_time,
    );
    if !within_schedule {
        warn!(
            "Rejected booking for doctor {}: slot outside availability",
            request.doctor_id
        );
        return Err(AppError::Conflict(
            "Requested slot is outside the doctor's availability".to_string(),
        ));
    }

    let has_conflict = conflict::has_appointment_conflict(
        &request.doctor_id,
        &request.appointment_date,
        request.start_time,
        request.end_time,
        &appointments,
    );
    if has_conflict {
        warn!(
            "Rejected booking for doctor {}: slot already taken",
            request.doctor_id
        );
        return Err(AppError::Conflict(
            "Requested slot conflicts with an existing appointment".to_string(),
        ));
    }

    let appointment = Appointment {
        id: Uuid::new_v4().to_string(),
        doctor_id: request.doctor_id,
        patient_id: request.patient_id,
        appointment_date: request.appointment_date,
        start_time: request.start_time,
        end_time: request.end_time,
        status: AppointmentStatus::Pending,
        reason: request.reason,
    };

    let booked = state
        .appointments
        .insert_appointment(appointment)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(booked))
}
