use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{Appointment, DoctorProfile, WeeklySchedule};

/// Read/write seam for doctor profiles. Handlers depend on this trait, not
/// on a concrete backend.
#[async_trait]
pub trait DoctorDirectory: Send + Sync {
    async fn doctor_profile(&self, doctor_id: &str) -> Result<Option<DoctorProfile>>;

    async fn upsert_schedule(
        &self,
        doctor_id: &str,
        weekly_schedule: WeeklySchedule,
        blocked_dates: Vec<String>,
    ) -> Result<DoctorProfile>;
}

/// Read/write seam for appointment records.
#[async_trait]
pub trait AppointmentLedger: Send + Sync {
    async fn appointments_for_doctor(&self, doctor_id: &str) -> Result<Vec<Appointment>>;

    async fn insert_appointment(&self, appointment: Appointment) -> Result<Appointment>;
}

/// In-process store backing both seams. Used by the api binary and the test
/// suites; a hosted backend would implement the same traits.
#[derive(Default)]
pub struct InMemoryStore {
    doctors: RwLock<HashMap<String, DoctorProfile>>,
    appointments: RwLock<Vec<Appointment>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_doctor(&self, profile: DoctorProfile) {
        self.doctors
            .write()
            .await
            .insert(profile.user_id.clone(), profile);
    }

    pub async fn seed_appointment(&self, appointment: Appointment) {
        self.appointments.write().await.push(appointment);
    }
}

#[async_trait]
impl DoctorDirectory for InMemoryStore {
    async fn doctor_profile(&self, doctor_id: &str) -> Result<Option<DoctorProfile>> {
        Ok(self.doctors.read().await.get(doctor_id).cloned())
    }

    async fn upsert_schedule(
        &self,
        doctor_id: &str,
        weekly_schedule: WeeklySchedule,
        blocked_dates: Vec<String>,
    ) -> Result<DoctorProfile> {
        debug!("Upserting schedule for doctor: {}", doctor_id);

        let mut doctors = self.doctors.write().await;
        let profile = doctors
            .entry(doctor_id.to_string())
            .or_insert_with(|| DoctorProfile {
                user_id: doctor_id.to_string(),
                weekly_schedule: WeeklySchedule::default(),
                blocked_dates: vec![],
            });
        profile.weekly_schedule = weekly_schedule;
        profile.blocked_dates = blocked_dates;

        Ok(profile.clone())
    }
}

#[async_trait]
impl AppointmentLedger for InMemoryStore {
    async fn appointments_for_doctor(&self, doctor_id: &str) -> Result<Vec<Appointment>> {
        Ok(self
            .appointments
            .read()
            .await
            .iter()
            .filter(|appointment| appointment.doctor_id == doctor_id)
            .cloned()
            .collect())
    }

    async fn insert_appointment(&self, appointment: Appointment) -> Result<Appointment> {
        debug!(
            "Inserting appointment {} for doctor {}",
            appointment.id, appointment.doctor_id
        );
        self.appointments.write().await.push(appointment.clone());
        Ok(appointment)
    }
}
