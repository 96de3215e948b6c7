use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==============================================================================
// TIME OF DAY
// ==============================================================================

/// A clock time within a single day, minute resolution.
///
/// Parsed strictly from zero-padded 24-hour `"HH:MM"` strings. `"24:00"` is
/// accepted so it can serve as the exclusive end of a full-day window.
/// Ordering matches the lexicographic ordering of the source strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid time of day: {0:?} (expected zero-padded 24-hour HH:MM)")]
pub struct ParseTimeOfDayError(pub String);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(24 * 60);

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// The time `minutes` later on the same day, or `None` past 24:00.
    pub fn plus_minutes(self, minutes: u32) -> Option<TimeOfDay> {
        let total = u32::from(self.0) + minutes;
        if total > u32::from(Self::END_OF_DAY.0) {
            return None;
        }
        Some(TimeOfDay(total as u16))
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeOfDayError(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 5
            || bytes[2] != b':'
            || !bytes[..2].iter().all(u8::is_ascii_digit)
            || !bytes[3..].iter().all(u8::is_ascii_digit)
        {
            return Err(invalid());
        }

        let hours: u16 = s[..2].parse().map_err(|_| invalid())?;
        let mins: u16 = s[3..].parse().map_err(|_| invalid())?;
        if mins > 59 || hours > 24 || (hours == 24 && mins != 0) {
            return Err(invalid());
        }

        Ok(TimeOfDay(hours * 60 + mins))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeOfDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

// ==============================================================================
// DOCTOR SCHEDULE MODELS
// ==============================================================================

/// One contiguous bookable range on a single weekday. A window with
/// `is_available = false` contributes no bookable time but is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub is_available: bool,
}

/// Recurring weekly schedule. Days absent from the source document
/// deserialize as empty lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    pub sunday: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub monday: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub tuesday: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub wednesday: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub thursday: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub friday: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub saturday: Vec<AvailabilityWindow>,
}

impl WeeklySchedule {
    /// Windows for a Sunday-based weekday index (0 = Sunday). Any index
    /// outside 0..=6 resolves to `None`, which fails every schedule lookup.
    pub fn windows_for(&self, day_index: u32) -> Option<&[AvailabilityWindow]> {
        match day_index {
            0 => Some(&self.sunday),
            1 => Some(&self.monday),
            2 => Some(&self.tuesday),
            3 => Some(&self.wednesday),
            4 => Some(&self.thursday),
            5 => Some(&self.friday),
            6 => Some(&self.saturday),
            _ => None,
        }
    }

    pub fn day_name(day_index: u32) -> Option<&'static str> {
        match day_index {
            0 => Some("sunday"),
            1 => Some("monday"),
            2 => Some("tuesday"),
            3 => Some("wednesday"),
            4 => Some("thursday"),
            5 => Some("friday"),
            6 => Some("saturday"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub user_id: String,
    #[serde(default)]
    pub weekly_schedule: WeeklySchedule,
    /// Whole days the doctor is unavailable regardless of the weekly
    /// schedule. Entries may be full timestamps; matching is by UTC calendar
    /// day.
    #[serde(default)]
    pub blocked_dates: Vec<String>,
}

// ==============================================================================
// APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub patient_id: String,
    /// Raw timestamp as stored; day matching goes through the calendar
    /// normalizer so differently formatted dates still compare equal.
    pub appointment_date: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Rejected,
    NoShow,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Rejected => write!(f, "rejected"),
            AppointmentStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// A concrete bookable interval produced by partitioning an availability
/// window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

// ==============================================================================
// REQUEST / RESPONSE DTOS
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: String,
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub doctor_id: String,
    pub date: String,
    pub slot_duration_minutes: u32,
    pub slots: Vec<TimeSlot>,
    pub total: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotCheckRequest {
    pub date: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCheckResponse {
    pub within_schedule: bool,
    pub has_conflict: bool,
    pub available: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScheduleRequest {
    pub weekly_schedule: WeeklySchedule,
    #[serde(default)]
    pub blocked_dates: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: String,
    pub patient_id: String,
    pub appointment_date: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub reason: Option<String>,
}
